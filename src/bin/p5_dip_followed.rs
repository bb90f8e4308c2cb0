//! Pattern 5: Dependency Inversion
//! Example: A user service generic over an injected Database
//!
//! Run with: cargo run --bin p5_dip_followed

use solid_principles::{dip, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    dip::followed::run(&scenario).print();
    Ok(())
}
