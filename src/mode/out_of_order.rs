//! OutOfOrder: absorbing fault mode. Every operation is turned down.

use crate::mode::{Operation, Outcome, Rejection};

pub(super) fn reject(operation: Operation) -> Outcome {
    match operation {
        Operation::SetOutOfOrder => Rejection::AlreadyOutOfService.into(),
        operation => Rejection::OutOfService { operation }.into(),
    }
}
