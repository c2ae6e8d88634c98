//! The vending machine aggregate.

use crate::builder::MachineBuilder;
use crate::config::{ConfigError, MachineConfig};
use crate::core::{ModeHistory, ModeTransition, State};
use crate::mode::{Mode, Operation, Outcome, VendingContext};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Point-in-time view of a machine, suitable for structured logging and
/// assertions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    pub mode: Mode,
    pub inventory: i64,
    pub balance: i64,
    pub selected_item: Option<String>,
    pub item_price: i64,
}

/// A single-item vending machine.
///
/// Every operation is dispatched to the active [`Mode`], which decides what
/// happens and whether the machine moves on. Operations never fail: an
/// operation that makes no sense in the current mode returns
/// [`Outcome::Rejected`] and changes nothing.
///
/// # Example
///
/// ```rust
/// use vendfsm::{Mode, VendingMachine};
///
/// let mut machine = VendingMachine::new(10);
/// machine.select_item("Soda");
/// machine.insert_coin(50);
///
/// assert_eq!(machine.mode(), Mode::Idle);
/// assert_eq!(machine.inventory(), 9);
/// assert_eq!(machine.balance(), 40);
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachine {
    inventory: i64,
    balance: i64,
    selected_item: Option<String>,
    item_price: i64,
    mode: Mode,
    history: ModeHistory,
}

impl VendingMachine {
    /// Create an idle machine holding `initial_stock` units at the default
    /// price.
    pub fn new(initial_stock: u32) -> Self {
        Self::with_settings(MachineConfig::with_stock(i64::from(initial_stock)))
    }

    /// Create an idle machine from a configuration, validating it first.
    pub fn from_config(config: MachineConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_settings(config.validated()?))
    }

    pub fn builder() -> MachineBuilder {
        MachineBuilder::new()
    }

    /// Construct from settings that have already been validated.
    pub(crate) fn with_settings(config: MachineConfig) -> Self {
        debug!(
            initial_stock = config.initial_stock,
            item_price = config.item_price,
            history_limit = config.history_limit,
            "vending machine created"
        );
        Self {
            inventory: config.initial_stock,
            balance: 0,
            selected_item: None,
            item_price: config.item_price,
            mode: Mode::Idle,
            history: ModeHistory::with_limit(config.history_limit),
        }
    }

    pub fn select_item(&mut self, item: &str) -> Outcome {
        self.dispatch(Operation::SelectItem, |mode, machine| {
            mode.select_item(machine, item)
        })
    }

    /// Add a coin of any value toward the selected item. Reaching the price
    /// dispenses immediately.
    pub fn insert_coin(&mut self, amount: i64) -> Outcome {
        self.dispatch(Operation::InsertCoin, |mode, machine| {
            mode.insert_coin(machine, amount)
        })
    }

    pub fn dispense_item(&mut self) -> Outcome {
        self.dispatch(Operation::DispenseItem, |mode, machine| {
            mode.dispense_item(machine, Operation::DispenseItem)
        })
    }

    /// Take the machine out of service. There is no way back.
    pub fn set_out_of_order(&mut self) -> Outcome {
        self.dispatch(Operation::SetOutOfOrder, |mode, machine| {
            mode.set_out_of_order(machine)
        })
    }

    fn dispatch<F>(&mut self, operation: Operation, handler: F) -> Outcome
    where
        F: FnOnce(Mode, &mut Self) -> Outcome,
    {
        let mode = self.mode;
        let outcome = handler(mode, self);

        match &outcome {
            Outcome::Accepted => debug!(
                operation = %operation,
                mode = %self.mode,
                balance = self.balance,
                inventory = self.inventory,
                "operation accepted"
            ),
            Outcome::Rejected(reason) => info!(
                operation = %operation,
                mode = %mode,
                reason = %reason,
                "operation rejected"
            ),
        }
        outcome
    }

    pub fn inventory(&self) -> i64 {
        self.inventory
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected_item.as_deref()
    }

    pub fn is_item_selected(&self) -> bool {
        self.selected_item.is_some()
    }

    pub fn item_price(&self) -> i64 {
        self.item_price
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_out_of_order(&self) -> bool {
        self.mode.is_final()
    }

    pub fn history(&self) -> &ModeHistory {
        &self.history
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            mode: self.mode,
            inventory: self.inventory,
            balance: self.balance,
            selected_item: self.selected_item.clone(),
            item_price: self.item_price,
        }
    }
}

impl VendingContext for VendingMachine {
    fn balance(&self) -> i64 {
        self.balance
    }

    fn item_price(&self) -> i64 {
        self.item_price
    }

    fn inventory(&self) -> i64 {
        self.inventory
    }

    fn add_balance(&mut self, amount: i64) {
        self.balance = self.balance.saturating_add(amount);
    }

    fn set_balance(&mut self, amount: i64) {
        self.balance = amount;
    }

    fn set_selected_item(&mut self, item: Option<String>) {
        self.selected_item = item;
    }

    /// No floor check: a sale from an empty machine goes through and leaves
    /// inventory negative, the same as the machine this models.
    fn decrease_item_stock(&mut self) {
        self.inventory = self.inventory.saturating_sub(1);
    }

    fn set_mode(&mut self, mode: Mode, trigger: Operation) {
        debug!(from = %self.mode, to = %mode, trigger = %trigger, "mode transition");
        self.history.push(ModeTransition {
            from: self.mode,
            to: mode,
            trigger,
            timestamp: Utc::now(),
        });
        self.mode = mode;
    }

    fn dispense_item(&mut self, trigger: Operation) -> Outcome {
        let mode = self.mode;
        mode.dispense_item(self, trigger)
    }
}

impl fmt::Display for VendingMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stock remaining: {}\nCurrent balance: {}",
            self.inventory, self.balance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_HISTORY_LIMIT, DEFAULT_ITEM_PRICE};
    use crate::mode::{OutcomeKind, Rejection};

    #[test]
    fn new_machine_starts_idle_and_empty_handed() {
        let machine = VendingMachine::new(10);

        assert_eq!(machine.mode(), Mode::Idle);
        assert_eq!(machine.inventory(), 10);
        assert_eq!(machine.balance(), 0);
        assert_eq!(machine.item_price(), DEFAULT_ITEM_PRICE);
        assert_eq!(machine.history().limit(), Some(DEFAULT_HISTORY_LIMIT));
        assert!(!machine.is_item_selected());
        assert!(machine.history().is_empty());
    }

    #[test]
    fn selection_then_partial_payment() {
        let mut machine = VendingMachine::new(2);

        assert!(machine.select_item("Water").is_accepted());
        assert!(machine.insert_coin(3).is_accepted());

        assert_eq!(machine.mode(), Mode::ItemSelected);
        assert_eq!(machine.balance(), 3);
        assert_eq!(machine.selected_item(), Some("Water"));
        assert_eq!(
            machine.dispense_item(),
            Outcome::Rejected(Rejection::InsufficientFunds {
                balance: 3,
                price: 10
            })
        );
    }

    #[test]
    fn coins_accumulate_until_price_is_reached() {
        let mut machine = VendingMachine::new(2);
        machine.select_item("Water");

        machine.insert_coin(5);
        assert_eq!(machine.mode(), Mode::ItemSelected);
        machine.insert_coin(5);

        assert_eq!(machine.mode(), Mode::Idle);
        assert_eq!(machine.inventory(), 1);
        assert_eq!(machine.balance(), 0);
        assert_eq!(machine.selected_item(), None);
    }

    #[test]
    fn overpayment_carries_over_as_credit() {
        let mut machine = VendingMachine::new(5);

        machine.select_item("Soda");
        machine.insert_coin(25);
        assert_eq!(machine.balance(), 15);

        machine.select_item("Soda");
        machine.insert_coin(0);
        assert_eq!(machine.inventory(), 3);
        assert_eq!(machine.balance(), 5);
    }

    #[test]
    fn non_positive_coins_are_taken_at_face_value() {
        let mut machine = VendingMachine::new(1);
        machine.select_item("Soda");

        assert!(machine.insert_coin(-4).is_accepted());
        assert_eq!(machine.balance(), -4);
        assert_eq!(machine.mode(), Mode::ItemSelected);
    }

    #[test]
    fn cascade_is_recorded_under_insert_coin() {
        let mut machine = VendingMachine::new(3);
        machine.select_item("Soda");
        machine.insert_coin(10);

        let triggers: Vec<Operation> = machine
            .history()
            .transitions()
            .iter()
            .map(|t| t.trigger)
            .collect();
        assert_eq!(
            triggers,
            vec![
                Operation::SelectItem,
                Operation::InsertCoin,
                Operation::InsertCoin
            ]
        );
        assert_eq!(
            machine.history().path(),
            vec![
                Mode::Idle,
                Mode::ItemSelected,
                Mode::Dispensing,
                Mode::Idle
            ]
        );
    }

    #[test]
    fn rejections_do_not_touch_history() {
        let mut machine = VendingMachine::new(3);

        assert_eq!(
            machine.insert_coin(5).kind(),
            OutcomeKind::RejectedWrongState
        );
        assert_eq!(
            machine.dispense_item().kind(),
            OutcomeKind::RejectedWrongState
        );
        assert!(machine.history().is_empty());
    }

    #[test]
    fn out_of_order_keeps_selection_for_diagnostics() {
        let mut machine = VendingMachine::new(3);
        machine.select_item("Chips");
        machine.set_out_of_order();

        assert!(machine.is_out_of_order());
        assert_eq!(machine.selected_item(), Some("Chips"));
    }

    #[test]
    fn from_config_validates() {
        let machine = VendingMachine::from_config(MachineConfig {
            initial_stock: 4,
            item_price: 3,
            ..MachineConfig::default()
        })
        .unwrap();
        assert_eq!(machine.inventory(), 4);
        assert_eq!(machine.item_price(), 3);

        let err = VendingMachine::from_config(MachineConfig {
            initial_stock: 4,
            item_price: 0,
            ..MachineConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn summary_format() {
        let machine = VendingMachine::new(7);
        assert_eq!(machine.to_string(), "Stock remaining: 7\nCurrent balance: 0");
    }

    #[test]
    fn snapshot_serializes_correctly() {
        let mut machine = VendingMachine::new(3);
        machine.select_item("Gum");

        let snapshot = machine.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MachineSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back, snapshot);
        assert_eq!(back.mode, Mode::ItemSelected);
        assert_eq!(back.selected_item.as_deref(), Some("Gum"));
    }

    #[test]
    fn history_stays_within_configured_limit() {
        let mut machine = VendingMachine::builder()
            .stock(5_000)
            .history_limit(30)
            .build()
            .unwrap();

        for _ in 0..5_000 {
            machine.select_item("Soda");
            machine.insert_coin(10);
        }

        assert_eq!(machine.inventory(), 0);
        assert_eq!(machine.history().len(), 30);
        assert_eq!(machine.history().total_recorded(), 15_000);
        assert_eq!(machine.history().evicted(), 14_970);
        assert_eq!(
            machine.history().transitions().back().map(|t| t.to),
            Some(Mode::Idle)
        );
    }
}
