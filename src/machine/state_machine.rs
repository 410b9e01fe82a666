//! The transition and listener engine.

use crate::core::{Event, State, Transition};
use crate::machine::listener::{
    AnyStateListener, AnyStateListenerFn, ListenerError, ListenerResult, ListenerSet,
    StateListener, StateListenerFn,
};
use crate::machine::outcome::EventOutcome;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Finite state machine driven by events.
///
/// The machine owns its transition table, the per-state enablement flags
/// and both listener registries. The current state only ever changes
/// through `process_event`/`dispatch`, `reset` or `clear`.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::Transition;
/// use fsm_engine::machine::StateMachine;
/// use fsm_engine::{event_enum, state_enum};
///
/// state_enum! { enum Light { Off, On } }
/// event_enum! { enum Switch { Flip } }
///
/// let mut machine = StateMachine::new(
///     Light::Off,
///     [
///         Transition::new(Switch::Flip, Light::Off, Light::On),
///         Transition::new(Switch::Flip, Light::On, Light::Off),
///     ],
/// );
///
/// assert!(machine.process_event(&Switch::Flip).unwrap());
/// assert_eq!(machine.state(), &Light::On);
/// assert_eq!(machine.last_state(), &Light::Off);
/// ```
pub struct StateMachine<S, E> {
    initial: S,
    current: S,
    last: S,
    /// Indexed by event, then by `from` state, yielding the `to` state.
    transitions: HashMap<E, HashMap<S, S>>,
    enabled: HashMap<S, bool>,
    state_listeners: HashMap<S, ListenerSet<StateListenerFn<S, E>>>,
    global_listeners: ListenerSet<AnyStateListenerFn<S, E>>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    /// Create a machine in `initial` with the given transitions registered.
    pub fn new<I>(initial: S, transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, E>>,
    {
        let mut machine = Self {
            current: initial.clone(),
            last: initial.clone(),
            initial,
            transitions: HashMap::new(),
            enabled: HashMap::new(),
            state_listeners: HashMap::new(),
            global_listeners: ListenerSet::new(),
        };
        machine.add_transitions(transitions);
        machine
    }

    /// Process an event, performing the transition registered for it from
    /// the current state.
    ///
    /// Returns `Ok(false)` when no transition matches, the target is
    /// disabled, or the machine is already in the target. Listener errors
    /// are returned after the state has changed.
    pub fn process_event(&mut self, event: &E) -> Result<bool, ListenerError> {
        self.dispatch(event).map(|outcome| outcome.is_transitioned())
    }

    /// Same as `process_event`, but reports why the event did or did not
    /// transition.
    pub fn dispatch(&mut self, event: &E) -> Result<EventOutcome<S>, ListenerError> {
        let target = match self.transitions.get(event) {
            None => None,
            Some(targets) => Some(targets.get(&self.current).cloned()),
        };

        let outcome = match target {
            None => EventOutcome::UnknownEvent,
            Some(None) => EventOutcome::NoTransition,
            Some(Some(to)) if !self.state_enabled(&to) => EventOutcome::TargetDisabled(to),
            Some(Some(to)) => return self.enter_state(to),
        };

        trace!(
            event = event.name(),
            state = self.current.name(),
            ?outcome,
            "event ignored"
        );
        Ok(outcome)
    }

    fn enter_state(&mut self, state: S) -> Result<EventOutcome<S>, ListenerError> {
        if self.current == state {
            return Ok(EventOutcome::AlreadyInState);
        }

        self.last = std::mem::replace(&mut self.current, state);
        debug!(
            from = self.last.name(),
            to = self.current.name(),
            "state changed"
        );

        let (to, from) = (self.current.clone(), self.last.clone());
        self.notify(&to, &from)?;
        Ok(EventOutcome::Transitioned { from, to })
    }

    /// Global listeners run first, then the listeners of the entered state.
    ///
    /// Both registries are read live at every step, so listeners registered
    /// during the pass still run and a `clear` stops the remaining ones.
    fn notify(&mut self, new_state: &S, prev_state: &S) -> ListenerResult {
        let mut index = 0;
        while let Some(listener) = self.global_listeners.get(index) {
            listener(&mut *self, new_state, prev_state)?;
            index += 1;
        }

        let mut index = 0;
        while let Some(listener) = self
            .state_listeners
            .get(new_state)
            .and_then(|set| set.get(index))
        {
            listener(&mut *self, prev_state)?;
            index += 1;
        }
        Ok(())
    }

    /// Enable or disable a state. A disabled state can never be entered by
    /// an event; the current state is left untouched.
    pub fn set_state_enabled(&mut self, state: S, enabled: bool) {
        self.enabled.insert(state, enabled);
    }

    /// States are enabled unless explicitly disabled.
    pub fn state_enabled(&self, state: &S) -> bool {
        self.enabled.get(state).copied().unwrap_or(true)
    }

    /// Register transitions. A later transition for the same
    /// `(event, from)` pair replaces the earlier target.
    pub fn add_transitions<I>(&mut self, transitions: I)
    where
        I: IntoIterator<Item = Transition<S, E>>,
    {
        for Transition { event, from, to } in transitions {
            self.transitions.entry(event).or_default().insert(from, to);
        }
    }

    /// Register a listener for entering `state`. The listener receives the
    /// previous state.
    ///
    /// Returns `false` if this exact handle was already registered for `state`.
    pub fn on_state(&mut self, state: S, listener: StateListener<S, E>) -> bool {
        self.state_listeners
            .entry(state)
            .or_default()
            .insert(listener)
    }

    /// Register a listener for every state change. The listener receives
    /// the new state and the previous state.
    ///
    /// Returns `false` if this exact handle was already registered.
    pub fn on_any_state(&mut self, listener: AnyStateListener<S, E>) -> bool {
        self.global_listeners.insert(listener)
    }

    /// Force the machine back into its initial state.
    ///
    /// Bypasses the transition table and enablement. Listeners fire as for
    /// any other change; nothing happens if the machine is already there.
    pub fn reset(&mut self) -> Result<bool, ListenerError> {
        debug!(state = self.initial.name(), "resetting to initial state");
        let initial = self.initial.clone();
        self.enter_state(initial)
            .map(|outcome| outcome.is_transitioned())
    }

    /// Drop all transitions, enablement flags and listeners, and return to
    /// the initial state without notifying anyone.
    pub fn clear(&mut self) {
        self.transitions.clear();
        self.enabled.clear();
        self.state_listeners.clear();
        self.global_listeners.clear();
        self.current = self.initial.clone();
        self.last = self.initial.clone();
        debug!(state = self.initial.name(), "machine cleared");
    }

    pub fn state(&self) -> &S {
        &self.current
    }

    /// The state held before the most recent change.
    pub fn last_state(&self) -> &S {
        &self.last
    }

    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// The state `event` would lead to from the current state, ignoring
    /// enablement.
    pub fn target_of(&self, event: &E) -> Option<&S> {
        self.transitions.get(event)?.get(&self.current)
    }

    /// Number of registered listeners, global and per-state.
    pub fn listener_count(&self) -> usize {
        self.global_listeners.len()
            + self
                .state_listeners
                .values()
                .map(ListenerSet::len)
                .sum::<usize>()
    }
}

impl<S: fmt::Debug, E: fmt::Debug> fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field("last", &self.last)
            .field("transitions", &self.transitions)
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
