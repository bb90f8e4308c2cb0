//! Pattern 2: Open/Closed
//! Example: One persistence type with a method per storage target
//!
//! Run with: cargo run --bin p2_ocp_violated

use solid_principles::{ocp, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    ocp::violated::run(&scenario).print();
    Ok(())
}
