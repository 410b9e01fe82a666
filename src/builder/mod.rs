//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for creating state machines
//! with minimal boilerplate while maintaining type safety.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::Transition;

/// Create a single transition from `from` to `to` on `event`.
///
/// # Example
///
/// ```
/// use fsm_engine::builder::simple_transition;
/// use fsm_engine::{event_enum, state_enum};
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
/// }
///
/// event_enum! {
///     enum MyEvent {
///         Finish,
///     }
/// }
///
/// let transition = simple_transition(MyEvent::Finish, MyState::Start, MyState::End);
/// assert_eq!(transition.to, MyState::End);
/// ```
pub fn simple_transition<S, E>(event: E, from: S, to: S) -> Transition<S, E> {
    Transition::new(event, from, to)
}

/// Create one transition to `to` on `event` from each of `sources`.
///
/// # Example
///
/// ```
/// use fsm_engine::builder::from_any;
/// use fsm_engine::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light {
///         Off,
///         Red,
///         Green,
///     }
/// }
///
/// event_enum! {
///     enum Power {
///         Kill,
///     }
/// }
///
/// let kills = from_any(Power::Kill, [Light::Red, Light::Green], Light::Off);
/// assert_eq!(kills.len(), 2);
/// ```
pub fn from_any<S, E, I>(event: E, sources: I, to: S) -> Vec<Transition<S, E>>
where
    S: Clone,
    E: Clone,
    I: IntoIterator<Item = S>,
{
    sources
        .into_iter()
        .map(|from| Transition::new(event.clone(), from, to.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum TestState {
            Start,
            Middle,
            End,
        }
    }

    crate::event_enum! {
        enum TestEvent {
            Next,
            Abort,
        }
    }

    #[test]
    fn simple_transition_builds() {
        let transition = simple_transition(TestEvent::Next, TestState::Start, TestState::Middle);

        assert_eq!(transition.event, TestEvent::Next);
        assert_eq!(transition.from, TestState::Start);
        assert_eq!(transition.to, TestState::Middle);
    }

    #[test]
    fn from_any_targets_one_state() {
        let transitions = from_any(
            TestEvent::Abort,
            [TestState::Start, TestState::Middle],
            TestState::End,
        );

        assert_eq!(
            transitions,
            vec![
                Transition::new(TestEvent::Abort, TestState::Start, TestState::End),
                Transition::new(TestEvent::Abort, TestState::Middle, TestState::End),
            ]
        );
    }
}
