//! State change listeners and their registries.

use crate::machine::StateMachine;
use std::error::Error as StdError;
use std::rc::Rc;
use thiserror::Error;

/// Errors raised by listener callbacks.
///
/// The machine never wraps or swallows these: the first listener that fails
/// stops the notification pass and the error is returned from
/// `process_event`, `dispatch` or `reset`.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("Listener failed: {0}")]
    Failed(String),

    #[error(transparent)]
    Other(#[from] Box<dyn StdError + Send + Sync>),
}

impl ListenerError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

/// Return type of every listener callback.
pub type ListenerResult = Result<(), ListenerError>;

/// Callback invoked when its state becomes current. Receives the previous state.
pub type StateListenerFn<S, E> = dyn Fn(&mut StateMachine<S, E>, &S) -> ListenerResult;

/// Callback invoked on every state change. Receives the new and previous state.
pub type AnyStateListenerFn<S, E> = dyn Fn(&mut StateMachine<S, E>, &S, &S) -> ListenerResult;

/// Shared handle to a per-state listener.
///
/// The `Rc` allocation is the listener's identity: registering the same
/// handle twice for one state keeps a single entry.
pub type StateListener<S, E> = Rc<StateListenerFn<S, E>>;

/// Shared handle to a global listener.
pub type AnyStateListener<S, E> = Rc<AnyStateListenerFn<S, E>>;

/// Wrap a closure as a per-state listener handle.
///
/// # Example
///
/// ```rust
/// use fsm_engine::machine::{state_listener, StateListener, StateMachine};
/// use fsm_engine::{event_enum, state_enum};
///
/// state_enum! { enum Phase { One, Two } }
/// event_enum! { enum Step { Next } }
///
/// let listener: StateListener<Phase, Step> =
///     state_listener(|_machine: &mut StateMachine<Phase, Step>, prev: &Phase| {
///         println!("left {prev:?}");
///         Ok(())
///     });
/// ```
pub fn state_listener<S, E, F>(listener: F) -> StateListener<S, E>
where
    F: Fn(&mut StateMachine<S, E>, &S) -> ListenerResult + 'static,
{
    Rc::new(listener)
}

/// Wrap a closure as a global listener handle.
pub fn any_state_listener<S, E, F>(listener: F) -> AnyStateListener<S, E>
where
    F: Fn(&mut StateMachine<S, E>, &S, &S) -> ListenerResult + 'static,
{
    Rc::new(listener)
}

/// Insertion-ordered set of listeners keyed by `Rc` identity.
pub(crate) struct ListenerSet<L: ?Sized> {
    entries: Vec<Rc<L>>,
}

impl<L: ?Sized> ListenerSet<L> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `false` when the listener was already registered.
    pub(crate) fn insert(&mut self, listener: Rc<L>) -> bool {
        if self.entries.iter().any(|l| Rc::ptr_eq(l, &listener)) {
            return false;
        }
        self.entries.push(listener);
        true
    }

    /// Handle at position `index` in registration order.
    pub(crate) fn get(&self, index: usize) -> Option<Rc<L>> {
        self.entries.get(index).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<L: ?Sized> Default for ListenerSet<L> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_deduplicates_by_identity() {
        let mut set: ListenerSet<dyn Fn() -> u8> = ListenerSet::new();
        let a: Rc<dyn Fn() -> u8> = Rc::new(|| 1);

        assert!(set.insert(a.clone()));
        assert!(!set.insert(a.clone()));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn equal_closures_are_distinct_listeners() {
        let mut set: ListenerSet<dyn Fn() -> u8> = ListenerSet::new();

        assert!(set.insert(Rc::new(|| 1)));
        assert!(set.insert(Rc::new(|| 1)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn get_follows_registration_order() {
        let mut set: ListenerSet<dyn Fn() -> u8> = ListenerSet::new();
        set.insert(Rc::new(|| 1));
        set.insert(Rc::new(|| 2));
        set.insert(Rc::new(|| 3));

        let values: Vec<u8> = (0..set.len()).filter_map(|i| set.get(i)).map(|l| l()).collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(set.get(3).is_none());
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set: ListenerSet<dyn Fn() -> u8> = ListenerSet::new();
        set.insert(Rc::new(|| 1));
        set.clear();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn listener_error_messages() {
        let err = ListenerError::failed("boom");
        assert_eq!(err.to_string(), "Listener failed: boom");

        let boxed: Box<dyn StdError + Send + Sync> = "io broke".into();
        let err = ListenerError::from(boxed);
        assert_eq!(err.to_string(), "io broke");
        assert!(err.source().is_none());
    }
}
