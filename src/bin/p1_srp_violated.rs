//! Pattern 1: Single Responsibility
//! Example: A shopping cart that totals, prints and saves itself
//!
//! Run with: cargo run --bin p1_srp_violated

use solid_principles::{srp, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    srp::violated::run(&scenario).print();
    Ok(())
}
