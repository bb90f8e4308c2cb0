//! Pattern 4: Interface Segregation
//! Example: A Shape trait that forces volume() on flat shapes
//!
//! Run with: cargo run --bin p4_isp_violated

use solid_principles::{isp, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    isp::violated::run(&scenario).print();
    Ok(())
}
