//! Pattern 3: Liskov Substitution
//! Example: A fixed deposit account that fails behind the Account trait
//!
//! Run with: cargo run --bin p3_lsp_violated

use solid_principles::{lsp, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    lsp::violated::run(&scenario).print();
    Ok(())
}
