//! Pattern 3: Liskov Substitution
//! Example: DepositOnlyAccount and WithdrawableAccount capability traits
//!
//! Run with: cargo run --bin p3_lsp_followed

use solid_principles::{lsp, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    lsp::followed::run(&scenario).print();
    Ok(())
}
