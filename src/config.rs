//! Machine configuration.
//!
//! Validation accumulates every violation instead of stopping at the first,
//! so a bad configuration is reported in full.

use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Price charged for an item when none is configured.
pub const DEFAULT_ITEM_PRICE: i64 = 10;

/// Mode transitions a machine retains when none is configured.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// A single problem with a [`MachineConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("initial stock must not be negative (got {0})")]
    NegativeStock(i64),

    #[error("item price must be positive (got {0})")]
    NonPositivePrice(i64),
}

/// Errors produced while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {}", join(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn join(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Settings a machine is constructed from.
///
/// Missing fields fall back to [`MachineConfig::default`].
///
/// # Example
///
/// ```rust
/// use vendfsm::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{ "initial_stock": 10 }"#).unwrap();
/// assert_eq!(config.initial_stock, 10);
/// assert_eq!(config.item_price, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Units loaded into the machine at construction
    pub initial_stock: i64,
    /// Price of every item
    pub item_price: i64,
    /// Most recent mode transitions kept in the machine's history
    pub history_limit: usize,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            initial_stock: 0,
            item_price: DEFAULT_ITEM_PRICE,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl MachineConfig {
    pub fn with_stock(initial_stock: i64) -> Self {
        Self {
            initial_stock,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let stock: Validation<(), NonEmptyVec<ConfigViolation>> = if self.initial_stock < 0 {
            Validation::fail(ConfigViolation::NegativeStock(self.initial_stock))
        } else {
            Validation::success(())
        };

        let price: Validation<(), NonEmptyVec<ConfigViolation>> = if self.item_price <= 0 {
            Validation::fail(ConfigViolation::NonPositivePrice(self.item_price))
        } else {
            Validation::success(())
        };

        Validation::all_vec(vec![stock, price]).map(|_| ())
    }

    /// Every rule that does not hold, in check order. Empty when valid.
    pub fn violations(&self) -> Vec<ConfigViolation> {
        match self.validate() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(violations) => violations.iter().cloned().collect(),
        }
    }

    /// Consume the configuration, returning it if every rule holds.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(violations))
        }
    }
}
