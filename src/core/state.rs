//! State and event traits for state machine vocabularies.
//!
//! States and events are plain values supplied by the caller. The machine
//! only ever compares and hashes them, so both traits are thin markers over
//! the standard comparison traits plus a display name for diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are used as keys of the transition table, the enablement map and
/// the per-state listener registry, so they must be equality-stable and
/// hashable.
///
/// # Required Traits
///
/// - `Clone`: the machine stores its initial, current and last state by value
/// - `Eq` + `Hash`: states are map keys
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// ```
pub trait State: Clone + Eq + Hash + Debug + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Trait for events that drive a state machine.
///
/// Events index the first level of the transition table.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::Event;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DoorEvent {
///     Push,
///     Pull,
/// }
///
/// impl Event for DoorEvent {
///     fn name(&self) -> &str {
///         match self {
///             Self::Push => "Push",
///             Self::Pull => "Pull",
///         }
///     }
/// }
/// ```
pub trait Event: Clone + Eq + Hash + Debug + 'static {
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}
