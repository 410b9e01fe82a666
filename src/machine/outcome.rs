//! Diagnostic result of dispatching a single event.

/// Why an event did or did not move the machine.
///
/// `process_event` collapses this to a boolean; `dispatch` hands it back
/// whole for callers that want to know the reason.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome<S> {
    /// The machine left `from` and entered `to`
    Transitioned { from: S, to: S },

    /// No transition is registered for the event at all
    UnknownEvent,

    /// The event is known but has no transition from the current state
    NoTransition,

    /// The resolved target state is disabled
    TargetDisabled(S),

    /// The resolved target is the current state
    AlreadyInState,
}

impl<S> EventOutcome<S> {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}
