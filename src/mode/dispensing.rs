//! Dispensing: payment is complete and the item is on its way out.

use crate::mode::{Mode, Operation, Outcome, Rejection, VendingContext};
use tracing::info;

pub(super) fn select_item<C: VendingContext>(_ctx: &mut C, _item: &str) -> Outcome {
    Rejection::Busy.into()
}

pub(super) fn insert_coin<C: VendingContext>(_ctx: &mut C, _amount: i64) -> Outcome {
    Rejection::Busy.into()
}

/// Hand out one unit and charge for it. Any excess stays on the balance as
/// credit for the next purchase.
pub(super) fn dispense_item<C: VendingContext>(ctx: &mut C, trigger: Operation) -> Outcome {
    ctx.decrease_item_stock();
    ctx.set_balance(ctx.balance().saturating_sub(ctx.item_price()));
    ctx.set_selected_item(None);
    info!(
        inventory = ctx.inventory(),
        balance = ctx.balance(),
        "item dispensed"
    );
    ctx.set_mode(Mode::Idle, trigger);
    Outcome::Accepted
}

pub(super) fn set_out_of_order<C: VendingContext>(ctx: &mut C) -> Outcome {
    info!("machine is now out of service, dispense abandoned");
    ctx.set_mode(Mode::OutOfOrder, Operation::SetOutOfOrder);
    Outcome::Accepted
}
