//! Fluent construction of vending machines.

pub mod error;

pub use error::BuildError;

use crate::config::MachineConfig;
use crate::machine::VendingMachine;

/// Builder for [`VendingMachine`] with a fluent API.
///
/// # Example
///
/// ```
/// use vendfsm::VendingMachine;
///
/// let machine = VendingMachine::builder()
///     .stock(12)
///     .price(15)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.inventory(), 12);
/// assert_eq!(machine.item_price(), 15);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    config: MachineConfig,
}

impl MachineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of units loaded at construction.
    pub fn stock(mut self, initial_stock: i64) -> Self {
        self.config.initial_stock = initial_stock;
        self
    }

    /// Set the price charged per item.
    pub fn price(mut self, item_price: i64) -> Self {
        self.config.item_price = item_price;
        self
    }

    /// Set how many recent mode transitions the machine keeps.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Validate the settings and build an idle machine.
    pub fn build(self) -> Result<VendingMachine, BuildError> {
        let violations = self.config.violations();
        if !violations.is_empty() {
            return Err(BuildError::InvalidConfig(violations));
        }
        Ok(VendingMachine::with_settings(self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, ConfigViolation, DEFAULT_ITEM_PRICE};
    use crate::mode::Mode;

    #[test]
    fn default_builder_uses_default_config() {
        let machine = MachineBuilder::new().build().unwrap();

        assert_eq!(machine.inventory(), 0);
        assert_eq!(machine.item_price(), DEFAULT_ITEM_PRICE);
        assert_eq!(machine.mode(), Mode::Idle);
    }

    #[test]
    fn later_setters_override_config() {
        let machine = MachineBuilder::new()
            .config(MachineConfig::with_stock(3))
            .price(7)
            .build()
            .unwrap();

        assert_eq!(machine.inventory(), 3);
        assert_eq!(machine.item_price(), 7);
    }

    #[test]
    fn builder_and_config_agree_on_violations() {
        let config = MachineConfig {
            initial_stock: -1,
            item_price: 0,
            ..MachineConfig::default()
        };

        let build_err = MachineBuilder::new().config(config.clone()).build().unwrap_err();
        let config_err = VendingMachine::from_config(config).unwrap_err();

        match (build_err, config_err) {
            (BuildError::InvalidConfig(built), ConfigError::Invalid(loaded)) => {
                assert_eq!(built, loaded);
            }
            other => panic!("Expected matching violations, got {other:?}"),
        }
    }

    #[test]
    fn build_reports_every_violation() {
        let err = MachineBuilder::new().stock(-2).price(-5).build().unwrap_err();

        assert_eq!(
            err,
            BuildError::InvalidConfig(vec![
                ConfigViolation::NegativeStock(-2),
                ConfigViolation::NonPositivePrice(-5),
            ])
        );
        assert!(err.to_string().contains("2 violation(s)"));
    }
}
