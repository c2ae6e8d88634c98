//! Machine modes and their operation handlers.
//!
//! A [`Mode`] is a stateless policy: it decides how each operation behaves
//! in the current phase and which phase comes next. All data lives on the
//! machine and is reached through the crate-private `VendingContext` trait.
//!
//! | Mode | select_item | insert_coin | dispense_item | set_out_of_order |
//! |---|---|---|---|---|
//! | Idle | -> ItemSelected | reject | reject | -> OutOfOrder |
//! | ItemSelected | reject | pay, maybe -> Dispensing | reject | -> OutOfOrder |
//! | Dispensing | reject | reject | -> Idle | -> OutOfOrder |
//! | OutOfOrder | reject | reject | reject | no-op |

mod context;
mod dispensing;
mod idle;
mod item_selected;
mod out_of_order;
mod outcome;

pub(crate) use context::VendingContext;
pub use outcome::{Operation, Outcome, OutcomeKind, Rejection};

use crate::core::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The behavioural phase of a vending machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Idle,
    ItemSelected,
    Dispensing,
    OutOfOrder,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::Idle,
        Mode::ItemSelected,
        Mode::Dispensing,
        Mode::OutOfOrder,
    ];

    pub(crate) fn select_item<C: VendingContext>(self, ctx: &mut C, item: &str) -> Outcome {
        match self {
            Self::Idle => idle::select_item(ctx, item),
            Self::ItemSelected => item_selected::select_item(ctx, item),
            Self::Dispensing => dispensing::select_item(ctx, item),
            Self::OutOfOrder => out_of_order::reject(Operation::SelectItem),
        }
    }

    pub(crate) fn insert_coin<C: VendingContext>(self, ctx: &mut C, amount: i64) -> Outcome {
        match self {
            Self::Idle => idle::insert_coin(ctx, amount),
            Self::ItemSelected => item_selected::insert_coin(ctx, amount),
            Self::Dispensing => dispensing::insert_coin(ctx, amount),
            Self::OutOfOrder => out_of_order::reject(Operation::InsertCoin),
        }
    }

    /// Dispatch a dispense. `trigger` is the caller-facing operation that
    /// led here: `DispenseItem` for a direct call, `InsertCoin` for the
    /// payment cascade.
    pub(crate) fn dispense_item<C: VendingContext>(
        self,
        ctx: &mut C,
        trigger: Operation,
    ) -> Outcome {
        match self {
            Self::Idle => idle::dispense_item(ctx),
            Self::ItemSelected => item_selected::dispense_item(ctx),
            Self::Dispensing => dispensing::dispense_item(ctx, trigger),
            Self::OutOfOrder => out_of_order::reject(Operation::DispenseItem),
        }
    }

    pub(crate) fn set_out_of_order<C: VendingContext>(self, ctx: &mut C) -> Outcome {
        match self {
            Self::Idle => idle::set_out_of_order(ctx),
            Self::ItemSelected => item_selected::set_out_of_order(ctx),
            Self::Dispensing => dispensing::set_out_of_order(ctx),
            Self::OutOfOrder => out_of_order::reject(Operation::SetOutOfOrder),
        }
    }
}

impl State for Mode {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::ItemSelected => "ItemSelected",
            Self::Dispensing => "Dispensing",
            Self::OutOfOrder => "OutOfOrder",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::OutOfOrder)
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::OutOfOrder)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
