//! Idle: waiting for a selection.

use crate::mode::{Mode, Operation, Outcome, Rejection, VendingContext};
use tracing::info;

pub(super) fn select_item<C: VendingContext>(ctx: &mut C, item: &str) -> Outcome {
    info!(item, "item selected");
    ctx.set_selected_item(Some(item.to_string()));
    ctx.set_mode(Mode::ItemSelected, Operation::SelectItem);
    Outcome::Accepted
}

pub(super) fn insert_coin<C: VendingContext>(_ctx: &mut C, _amount: i64) -> Outcome {
    Rejection::NoItemSelected.into()
}

pub(super) fn dispense_item<C: VendingContext>(_ctx: &mut C) -> Outcome {
    Rejection::NoItemSelected.into()
}

pub(super) fn set_out_of_order<C: VendingContext>(ctx: &mut C) -> Outcome {
    info!("machine is now out of service");
    ctx.set_mode(Mode::OutOfOrder, Operation::SetOutOfOrder);
    Outcome::Accepted
}
