//! Vendfsm: a single-item vending machine as an explicit state machine
//!
//! The machine holds the data (stock, balance, selection, price) and hands
//! every operation to its active [`Mode`]. The mode decides what the
//! operation does and which mode comes next.
//!
//! # Core Concepts
//!
//! - **Modes**: `Idle`, `ItemSelected`, `Dispensing`, `OutOfOrder`
//! - **Outcomes**: every operation returns an [`Outcome`]; nothing panics or
//!   returns an error once the machine exists
//! - **Cascade**: a coin that brings the balance up to the price dispenses
//!   within the same `insert_coin` call
//! - **History**: every mode change is recorded with the operation that
//!   caused it
//!
//! Narration is emitted as `tracing` events. Install a subscriber to see it.
//!
//! # Example
//!
//! ```rust
//! use vendfsm::{Mode, OutcomeKind, VendingMachine};
//!
//! let mut machine = VendingMachine::new(10);
//!
//! machine.select_item("Soda");
//! machine.insert_coin(50);
//! assert_eq!(machine.dispense_item().kind(), OutcomeKind::RejectedWrongState);
//!
//! machine.set_out_of_order();
//! assert_eq!(machine.select_item("Chips").kind(), OutcomeKind::RejectedOutOfOrder);
//! assert_eq!(machine.mode(), Mode::OutOfOrder);
//!
//! assert_eq!(machine.to_string(), "Stock remaining: 9\nCurrent balance: 40");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod mode;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use config::{ConfigError, ConfigViolation, MachineConfig};
pub use self::core::{ModeHistory, ModeTransition, State};
pub use machine::{MachineSnapshot, VendingMachine};
pub use mode::{Mode, Operation, Outcome, OutcomeKind, Rejection};
