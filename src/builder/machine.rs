//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Event, State, Transition};
use crate::machine::{AnyStateListener, StateListener, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// Besides the transition table, the builder can pre-disable states and
/// register listeners so a machine comes out of `build` fully configured.
pub struct StateMachineBuilder<S, E> {
    initial: Option<S>,
    transitions: Vec<Transition<S, E>>,
    disabled: Vec<S>,
    state_listeners: Vec<(S, StateListener<S, E>)>,
    global_listeners: Vec<AnyStateListener<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            disabled: Vec::new(),
            state_listeners: Vec::new(),
            global_listeners: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, E>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Start the machine with `state` disabled.
    pub fn disable(mut self, state: S) -> Self {
        self.disabled.push(state);
        self
    }

    pub fn on_state(mut self, state: S, listener: StateListener<S, E>) -> Self {
        self.state_listeners.push((state, listener));
        self
    }

    pub fn on_any_state(mut self, listener: AnyStateListener<S, E>) -> Self {
        self.global_listeners.push(listener);
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut machine = StateMachine::new(initial, self.transitions);
        for state in self.disabled {
            machine.set_state_enabled(state, false);
        }
        for (state, listener) in self.state_listeners {
            machine.on_state(state, listener);
        }
        for listener in self.global_listeners {
            machine.on_any_state(listener);
        }

        Ok(machine)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
