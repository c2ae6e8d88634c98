//! Core trait describing a machine phase.
//!
//! The vending machine's modes implement this trait so that callers can
//! inspect the phase they are in without matching on every variant.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine phases.
///
/// All methods are pure. A phase is a plain value; it carries no data of its
/// own and can be copied, compared, and serialized freely.
///
/// # Example
///
/// ```rust
/// use vendfsm::core::State;
/// use vendfsm::Mode;
///
/// assert_eq!(Mode::Idle.name(), "Idle");
/// assert!(Mode::OutOfOrder.is_final());
/// assert!(!Mode::Dispensing.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used for display and structured log fields.
    fn name(&self) -> &str;

    /// Check if this phase is absorbing.
    ///
    /// Once an absorbing phase is entered no operation can leave it.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this phase represents a fault.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
