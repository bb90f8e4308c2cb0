//! Pattern 1: Single Responsibility
//! Example: Cart data, invoice printing and persistence as separate types
//!
//! Run with: cargo run --bin p1_srp_followed

use solid_principles::{srp, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    srp::followed::run(&scenario).print();
    Ok(())
}
