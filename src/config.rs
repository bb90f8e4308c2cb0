//! Demo scenario: the numbers and names each example program feeds in.
//!
//! The default document is compiled in from `config/scenario.toml`, so the
//! programs read nothing at runtime.

use serde::Deserialize;

use crate::cart::{Cart, Product};
use crate::error::ConfigError;

const DEFAULT_SCENARIO: &str = include_str!("../config/scenario.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub transactions: Transactions,
    pub lsp: LspAccounts,
    pub cart: Vec<Product>,
    pub isp: IspShapes,
    pub dip: DipUsers,
}

/// Amounts every account example deposits and then withdraws.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transactions {
    pub deposit: f64,
    pub withdraw: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LspAccounts {
    pub violated: BroadAccounts,
    pub wrongly_handled: BroadAccounts,
    pub followed: SplitAccounts,
}

/// Opening balances for the accounts sharing one broad trait.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BroadAccounts {
    pub savings: f64,
    pub current: f64,
    pub fixed_deposit: f64,
}

/// Opening balances for the accounts split by capability.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SplitAccounts {
    pub saving: f64,
    pub salary: f64,
    pub fixed_deposit: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IspShapes {
    pub violated: ShapeDimensions,
    pub followed: ShapeDimensions,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ShapeDimensions {
    pub square_side: f64,
    pub rectangle_length: f64,
    pub rectangle_breadth: f64,
    pub cube_side: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DipUsers {
    pub sql_user: String,
    pub mongo_user: String,
    pub registered_user: String,
}

impl Scenario {
    /// Parse the compiled-in default scenario.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml_str(DEFAULT_SCENARIO)
    }

    /// Parse and validate a scenario document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        tracing::debug!(products = scenario.cart.len(), "scenario loaded");
        Ok(scenario)
    }

    /// A fresh cart holding the scenario's products.
    pub fn cart(&self) -> Cart {
        self.cart.iter().cloned().collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let lsp = &self.lsp;
        let balances = [
            ("lsp.violated.savings", lsp.violated.savings),
            ("lsp.violated.current", lsp.violated.current),
            ("lsp.violated.fixed_deposit", lsp.violated.fixed_deposit),
            ("lsp.wrongly_handled.savings", lsp.wrongly_handled.savings),
            ("lsp.wrongly_handled.current", lsp.wrongly_handled.current),
            ("lsp.wrongly_handled.fixed_deposit", lsp.wrongly_handled.fixed_deposit),
            ("lsp.followed.saving", lsp.followed.saving),
            ("lsp.followed.salary", lsp.followed.salary),
            ("lsp.followed.fixed_deposit", lsp.followed.fixed_deposit),
        ];
        for (key, value) in balances {
            non_negative(key, value)?;
        }

        for (section, dims) in [("isp.violated", &self.isp.violated), ("isp.followed", &self.isp.followed)] {
            non_negative(&format!("{}.square_side", section), dims.square_side)?;
            non_negative(&format!("{}.rectangle_length", section), dims.rectangle_length)?;
            non_negative(&format!("{}.rectangle_breadth", section), dims.rectangle_breadth)?;
            non_negative(&format!("{}.cube_side", section), dims.cube_side)?;
        }

        for product in &self.cart {
            if product.name().trim().is_empty() {
                return Err(ConfigError::Invalid("cart product name must not be empty".into()));
            }
            non_negative(&format!("cart.{}.price", product.name()), product.price())?;
        }

        Ok(())
    }
}

fn non_negative(key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!(
            "{} must be a non-negative number, got {}",
            key, value
        )))
    }
}
