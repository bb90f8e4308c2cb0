//! Pattern 5: Dependency Inversion
//! Example: A user service that constructs its own databases
//!
//! Run with: cargo run --bin p5_dip_violated

use solid_principles::{dip, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    dip::violated::run(&scenario).print();
    Ok(())
}
