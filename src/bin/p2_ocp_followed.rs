//! Pattern 2: Open/Closed
//! Example: One SaveProduct trait, one type per storage target
//!
//! Run with: cargo run --bin p2_ocp_followed

use solid_principles::{ocp, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    ocp::followed::run(&scenario).print();
    Ok(())
}
