//! Builder for constructing state transitions.

use crate::builder::error::BuildError;
use crate::core::Transition;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<S, E> {
    event: Option<E>,
    from: Option<S>,
    to: Option<S>,
}

impl<S, E> TransitionBuilder<S, E> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            event: None,
            from: None,
            to: None,
        }
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: E) -> Self {
        self.event = Some(event);
        self
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S, E>, BuildError> {
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Transition { event, from, to })
    }
}

impl<S, E> Default for TransitionBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum TestState {
            Initial,
            Processing,
        }
    }

    crate::event_enum! {
        enum TestEvent {
            Start,
        }
    }

    #[test]
    fn builder_validates_missing_event() {
        let result = TransitionBuilder::<TestState, TestEvent>::new()
            .from(TestState::Initial)
            .to(TestState::Processing)
            .build();

        assert_eq!(result, Err(BuildError::MissingEvent));
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::<TestState, TestEvent>::new()
            .on(TestEvent::Start)
            .from(TestState::Initial)
            .build();

        assert_eq!(result, Err(BuildError::MissingToState));

        let result = TransitionBuilder::<TestState, TestEvent>::new()
            .on(TestEvent::Start)
            .to(TestState::Processing)
            .build();

        assert_eq!(result, Err(BuildError::MissingFromState));
    }

    #[test]
    fn fluent_api_builds_transition() {
        let transition = TransitionBuilder::new()
            .on(TestEvent::Start)
            .from(TestState::Initial)
            .to(TestState::Processing)
            .build()
            .unwrap();

        assert_eq!(transition.event, TestEvent::Start);
        assert_eq!(transition.from, TestState::Initial);
        assert_eq!(transition.to, TestState::Processing);
    }
}
