//! Basic State Machine
//!
//! This example demonstrates the plain constructor, diagnostics and reset.
//!
//! Key concepts:
//! - Declaring states and events with macros
//! - Why an event did or did not transition
//! - Resetting to the initial state
//!
//! Run with: cargo run --example basic_state_machine

use fsm_engine::machine::ListenerError;
use fsm_engine::{event_enum, state_enum, StateMachine, Transition};

state_enum! {
    enum ConnectionState {
        Disconnected,
        Connecting,
        Connected,
    }
}

event_enum! {
    enum ConnectionEvent {
        Dial,
        Established,
        Hangup,
    }
}

fn main() -> Result<(), ListenerError> {
    println!("=== Basic State Machine Example ===\n");

    let mut machine = StateMachine::new(
        ConnectionState::Disconnected,
        [
            Transition::new(
                ConnectionEvent::Dial,
                ConnectionState::Disconnected,
                ConnectionState::Connecting,
            ),
            Transition::new(
                ConnectionEvent::Established,
                ConnectionState::Connecting,
                ConnectionState::Connected,
            ),
        ],
    );

    println!("Initial state: {:?}", machine.state());
    for event in [
        ConnectionEvent::Established,
        ConnectionEvent::Dial,
        ConnectionEvent::Established,
        ConnectionEvent::Hangup,
    ] {
        let outcome = machine.dispatch(&event)?;
        println!("{event:?}: {outcome:?} (now {:?})", machine.state());
    }

    machine.reset()?;
    println!("\nAfter reset: {:?} (was {:?})", machine.state(), machine.last_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
