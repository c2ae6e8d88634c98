//! ItemSelected: an item is chosen and the machine is collecting payment.

use crate::mode::{Mode, Operation, Outcome, Rejection, VendingContext};
use tracing::info;

pub(super) fn select_item<C: VendingContext>(_ctx: &mut C, _item: &str) -> Outcome {
    Rejection::ItemAlreadySelected.into()
}

/// Add the coin to the balance. Reaching the price moves the machine to
/// `Dispensing` and dispenses within the same call.
pub(super) fn insert_coin<C: VendingContext>(ctx: &mut C, amount: i64) -> Outcome {
    ctx.add_balance(amount);
    let balance = ctx.balance();
    info!(amount, balance, "coin accepted");

    if balance >= ctx.item_price() {
        info!(balance, price = ctx.item_price(), "sufficient funds, dispensing");
        ctx.set_mode(Mode::Dispensing, Operation::InsertCoin);
        return ctx.dispense_item(Operation::InsertCoin);
    }
    Outcome::Accepted
}

pub(super) fn dispense_item<C: VendingContext>(ctx: &mut C) -> Outcome {
    Rejection::InsufficientFunds {
        balance: ctx.balance(),
        price: ctx.item_price(),
    }
    .into()
}

pub(super) fn set_out_of_order<C: VendingContext>(ctx: &mut C) -> Outcome {
    info!("machine is now out of service");
    ctx.set_mode(Mode::OutOfOrder, Operation::SetOutOfOrder);
    Outcome::Accepted
}
