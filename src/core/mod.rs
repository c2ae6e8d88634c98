//! Core state machine types.
//!
//! This module contains the pieces shared by every mode:
//! - The `State` trait for inspecting a phase
//! - Immutable mode transition history

mod history;
mod state;

pub use history::{ModeHistory, ModeTransition};
pub use state::State;
