//! fsm-engine: a strongly-typed finite state machine
//!
//! A machine starts in a fixed initial state and moves along declared
//! `(event, from) -> to` transitions. At most one transition exists per
//! event and current state, states can be disabled so events never enter
//! them, and listeners are notified synchronously on every state change.
//!
//! # Core Concepts
//!
//! - **State / Event**: caller-supplied comparable values via the `State`
//!   and `Event` traits
//! - **Transition**: an immutable `(event, from, to)` rule
//! - **StateMachine**: owns the transition table, enablement flags and
//!   listener registries
//!
//! # Example
//!
//! ```rust
//! use fsm_engine::builder::{from_any, StateMachineBuilder};
//! use fsm_engine::core::Transition;
//! use fsm_engine::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Light {
//!         Off,
//!         Red,
//!         Yellow,
//!         Green,
//!     }
//! }
//!
//! event_enum! {
//!     enum Signal {
//!         Tick,
//!         Kill,
//!     }
//! }
//!
//! let mut light = StateMachineBuilder::new()
//!     .initial(Light::Off)
//!     .transitions(vec![
//!         Transition::new(Signal::Tick, Light::Off, Light::Red),
//!         Transition::new(Signal::Tick, Light::Red, Light::Yellow),
//!         Transition::new(Signal::Tick, Light::Yellow, Light::Green),
//!         Transition::new(Signal::Tick, Light::Green, Light::Red),
//!     ])
//!     .transitions(from_any(
//!         Signal::Kill,
//!         [Light::Red, Light::Yellow, Light::Green],
//!         Light::Off,
//!     ))
//!     .build()
//!     .unwrap();
//!
//! assert!(!light.process_event(&Signal::Kill).unwrap());
//! assert!(light.process_event(&Signal::Tick).unwrap());
//! assert_eq!(light.state(), &Light::Red);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Event, State, Transition};
pub use crate::machine::{EventOutcome, ListenerError, StateMachine};
