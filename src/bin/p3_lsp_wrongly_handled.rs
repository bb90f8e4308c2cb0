//! Pattern 3: Liskov Substitution
//! Example: Dodging the failure by checking the concrete account type
//!
//! Run with: cargo run --bin p3_lsp_wrongly_handled

use solid_principles::{lsp, telemetry, Scenario};

fn main() -> anyhow::Result<()> {
    telemetry::init();
    let scenario = Scenario::load()?;
    lsp::violated::run_wrongly_handled(&scenario).print();
    Ok(())
}
