//! Mode transition history.
//!
//! Every time a machine changes mode it records a [`ModeTransition`] naming
//! the operation that caused it. The history is what lets callers see the
//! payment cascade (`ItemSelected -> Dispensing -> Idle` inside a single
//! `insert_coin`) after the fact.

use crate::mode::{Mode, Operation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single mode change.
///
/// # Example
///
/// ```rust
/// use vendfsm::core::ModeTransition;
/// use vendfsm::{Mode, Operation};
/// use chrono::Utc;
///
/// let transition = ModeTransition {
///     from: Mode::Idle,
///     to: Mode::ItemSelected,
///     trigger: Operation::SelectItem,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger, Operation::SelectItem);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeTransition {
    /// The mode being left
    pub from: Mode,
    /// The mode being entered
    pub to: Mode,
    /// The caller-facing operation during which the change happened
    pub trigger: Operation,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of mode transitions.
///
/// `record` returns a new history with the transition appended and leaves
/// the receiver untouched. A history built with [`ModeHistory::with_limit`]
/// keeps only the most recent transitions; older ones are dropped from the
/// front and counted in [`ModeHistory::evicted`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeHistory {
    transitions: VecDeque<ModeTransition>,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    evicted: u64,
}

impl ModeHistory {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty history retaining at most `limit` transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(64)),
            limit: Some(limit),
            evicted: 0,
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vendfsm::core::{ModeHistory, ModeTransition};
    /// use vendfsm::{Mode, Operation};
    /// use chrono::Utc;
    ///
    /// let history = ModeHistory::new();
    /// let next = history.record(ModeTransition {
    ///     from: Mode::Idle,
    ///     to: Mode::OutOfOrder,
    ///     trigger: Operation::SetOutOfOrder,
    ///     timestamp: Utc::now(),
    /// });
    ///
    /// assert_eq!(next.len(), 1);
    /// assert!(history.is_empty());
    /// ```
    pub fn record(&self, transition: ModeTransition) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Append in place, evicting the oldest entries beyond the limit.
    pub(crate) fn push(&mut self, transition: ModeTransition) {
        self.transitions.push_back(transition);
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
                self.evicted += 1;
            }
        }
    }

    /// Modes visited in order across the retained window: the first `from`,
    /// then every `to`.
    pub fn path(&self) -> Vec<Mode> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Time between the first and last retained transition.
    ///
    /// Returns `None` when nothing is retained.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Retained transitions triggered by a given operation, in order.
    pub fn triggered_by(&self, operation: Operation) -> impl Iterator<Item = &ModeTransition> {
        self.transitions
            .iter()
            .filter(move |t| t.trigger == operation)
    }

    pub fn transitions(&self) -> &VecDeque<ModeTransition> {
        &self.transitions
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Number of transitions dropped to stay within the limit.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Every transition ever recorded, retained or not.
    pub fn total_recorded(&self) -> u64 {
        self.evicted + self.transitions.len() as u64
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
