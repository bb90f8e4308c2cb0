//! # SOLID Principles in Rust
//!
//! This crate demonstrates the five SOLID design principles, each as an
//! anti-pattern program paired with a corrected one:
//!
//! ## Pattern 1: Single Responsibility
//! - A shopping cart that totals, prints and saves itself
//! - Split into a data holder plus read-only collaborators
//!
//! ## Pattern 2: Open/Closed
//! - One persistence type with a method per target
//! - One `SaveProduct` trait, one type per target
//!
//! ## Pattern 3: Liskov Substitution
//! - A broad `Account` trait the fixed deposit account cannot honor
//! - Callers downcasting to dodge the failure
//! - Capability traits: `DepositOnlyAccount` and `WithdrawableAccount`
//!
//! ## Pattern 4: Interface Segregation
//! - A `Shape` trait forcing `volume()` on flat shapes
//! - `TwoDimensionalShape` and `ThreeDimensionalShape` supertrait split
//!
//! ## Pattern 5: Dependency Inversion
//! - A service constructing its own databases
//! - A service generic over an injected `Database`
//!
//! Run examples with: `cargo run --bin <name>`, e.g.
//!
//! ```bash
//! cargo run --bin p1_srp_violated
//! cargo run --bin p3_lsp_followed
//! RUST_LOG=debug cargo run --bin p5_dip_followed
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - error enums whose `Display` is the printed message
//! - `serde` + `toml` - the embedded demo scenario
//! - `colored` - section banners
//! - `tracing` - diagnostics on stderr

pub mod cart;
pub mod config;
pub mod console;
pub mod dip;
pub mod error;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;
pub mod telemetry;

pub use cart::{Cart, Product};
pub use config::Scenario;
pub use console::Transcript;
pub use error::{AccountError, ConfigError, ShapeError};
