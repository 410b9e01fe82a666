//! Event-driven state machine with enable/disable gating and listeners.
//!
//! # Key Concepts
//!
//! - **Transition table**: at most one target per `(event, from)` pair
//! - **Enablement**: disabled states cannot be entered by events
//! - **Listeners**: synchronous callbacks fired after every state change,
//!   global listeners first, then the listeners of the entered state
//!
//! Listeners receive the machine itself, so they may process further events
//! or reconfigure it. Such calls complete before the outer call resumes.

mod listener;
mod outcome;
mod state_machine;

pub use listener::{
    any_state_listener, state_listener, AnyStateListener, AnyStateListenerFn, ListenerError,
    ListenerResult, StateListener, StateListenerFn,
};
pub use outcome::EventOutcome;
pub use state_machine::StateMachine;
