//! Core state machine vocabulary.
//!
//! This module contains the value types the machine is generic over:
//! - State and event definitions via the `State` and `Event` traits
//! - Declared transition rules

mod state;
mod transition;

pub use state::{Event, State};
pub use transition::Transition;
