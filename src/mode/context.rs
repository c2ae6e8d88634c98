//! Capabilities a mode handler may use on its machine.

use crate::mode::{Mode, Operation, Outcome};

/// The machine as seen from inside a mode handler.
///
/// Handlers never touch machine fields directly; every read, mutation, and
/// mode change goes through this trait.
pub(crate) trait VendingContext {
    fn balance(&self) -> i64;

    fn item_price(&self) -> i64;

    fn inventory(&self) -> i64;

    fn add_balance(&mut self, amount: i64);

    fn set_balance(&mut self, amount: i64);

    fn set_selected_item(&mut self, item: Option<String>);

    /// Remove one unit from stock. There is no floor check, so dispensing
    /// from an empty machine leaves inventory at -1.
    fn decrease_item_stock(&mut self);

    /// Replace the active mode, recording `trigger` as the cause.
    fn set_mode(&mut self, mode: Mode, trigger: Operation);

    /// Dispatch a dispense to whatever mode is now active.
    ///
    /// Used by the payment cascade, where `trigger` is the coin insertion
    /// that crossed the price threshold.
    fn dispense_item(&mut self, trigger: Operation) -> Outcome;
}
