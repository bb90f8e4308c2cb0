//! Pattern 4: Interface Segregation
//! Example: TwoDimensionalShape and ThreeDimensionalShape supertraits
//!
//! Run with: cargo run --bin p4_isp_followed

use solid_principles::{isp, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    isp::followed::run(&scenario).print();
    Ok(())
}
