//! Declared transition rules.

use serde::{Deserialize, Serialize};

/// Declares that receiving `event` while in `from` moves the machine to `to`.
///
/// Transitions are immutable values. A machine keeps at most one target per
/// `(event, from)` pair; registering another transition for the same pair
/// replaces the earlier target.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::Transition;
///
/// let t = Transition::new("tick", "off", "red");
/// assert_eq!(t.from, "off");
/// assert_eq!(t.to, "red");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition<S, E> {
    /// The event that triggers the transition
    pub event: E,
    /// The state the machine must be in
    pub from: S,
    /// The state the machine moves to
    pub to: S,
}

impl<S, E> Transition<S, E> {
    pub fn new(event: E, from: S, to: S) -> Self {
        Self { event, from, to }
    }
}

impl<S, E> From<(E, S, S)> for Transition<S, E> {
    fn from((event, from, to): (E, S, S)) -> Self {
        Self::new(event, from, to)
    }
}
