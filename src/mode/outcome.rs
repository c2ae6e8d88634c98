//! Operation results.
//!
//! No machine operation fails with an error. A call is either accepted or
//! rejected, and a rejection leaves the machine exactly as it was.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The caller-facing operations of a vending machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    SelectItem,
    InsertCoin,
    DispenseItem,
    SetOutOfOrder,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectItem => "select_item",
            Self::InsertCoin => "insert_coin",
            Self::DispenseItem => "dispense_item",
            Self::SetOutOfOrder => "set_out_of_order",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why an operation was turned down.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("No item has been chosen. Please select an item first")]
    NoItemSelected,

    #[error("Item already chosen. Please insert the required coins")]
    ItemAlreadySelected,

    #[error("Currently dispensing an item. Please wait")]
    Busy,

    #[error("Insufficient funds: balance {balance}, price {price}")]
    InsufficientFunds { balance: i64, price: i64 },

    #[error("Machine is out of service, {operation} is unavailable")]
    OutOfService { operation: Operation },

    #[error("Machine is already out of service")]
    AlreadyOutOfService,
}

/// Coarse classification of an [`Outcome`], convenient for assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    Accepted,
    RejectedWrongState,
    RejectedInsufficientFunds,
    RejectedOutOfOrder,
}

/// Result of a single machine operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The operation was carried out.
    Accepted,

    /// The operation was not valid in the current mode and changed nothing.
    Rejected(Rejection),
}

impl Outcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::Accepted => OutcomeKind::Accepted,
            Self::Rejected(rejection) => match rejection {
                Rejection::NoItemSelected | Rejection::ItemAlreadySelected | Rejection::Busy => {
                    OutcomeKind::RejectedWrongState
                }
                Rejection::InsufficientFunds { .. } => OutcomeKind::RejectedInsufficientFunds,
                Rejection::OutOfService { .. } | Rejection::AlreadyOutOfService => {
                    OutcomeKind::RejectedOutOfOrder
                }
            },
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Accepted => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

impl From<Rejection> for Outcome {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classifies_rejections() {
        assert_eq!(Outcome::Accepted.kind(), OutcomeKind::Accepted);
        assert_eq!(
            Outcome::from(Rejection::Busy).kind(),
            OutcomeKind::RejectedWrongState
        );
        assert_eq!(
            Outcome::from(Rejection::InsufficientFunds {
                balance: 5,
                price: 10
            })
            .kind(),
            OutcomeKind::RejectedInsufficientFunds
        );
        assert_eq!(
            Outcome::from(Rejection::AlreadyOutOfService).kind(),
            OutcomeKind::RejectedOutOfOrder
        );
    }

    #[test]
    fn rejection_messages_name_the_problem() {
        let rejection = Rejection::OutOfService {
            operation: Operation::SelectItem,
        };
        assert_eq!(
            rejection.to_string(),
            "Machine is out of service, select_item is unavailable"
        );
        assert_eq!(
            Rejection::InsufficientFunds {
                balance: 3,
                price: 10
            }
            .to_string(),
            "Insufficient funds: balance 3, price 10"
        );
    }

    #[test]
    fn accepted_has_no_rejection() {
        assert!(Outcome::Accepted.is_accepted());
        assert!(Outcome::Accepted.rejection().is_none());
        assert_eq!(
            Outcome::from(Rejection::NoItemSelected).rejection(),
            Some(&Rejection::NoItemSelected)
        );
    }
}
