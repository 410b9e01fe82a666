//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic state machine with a kill switch.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - One event leading to the same state from several sources
//! - Global and per-state listeners
//! - Disabling a state at runtime
//!
//! Run with: RUST_LOG=fsm_engine=trace cargo run --example traffic_light

use fsm_engine::builder::{from_any, StateMachineBuilder};
use fsm_engine::machine::{any_state_listener, state_listener};
use fsm_engine::{event_enum, state_enum, StateMachine, Transition};
use std::error::Error;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Light {
        Off,
        Red,
        Yellow,
        Green,
    }
}

event_enum! {
    enum Signal {
        Tick,
        Kill,
    }
}

type TrafficLight = StateMachine<Light, Signal>;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let mut light = StateMachineBuilder::new()
        .initial(Light::Off)
        .transitions(vec![
            Transition::new(Signal::Tick, Light::Off, Light::Red),
            Transition::new(Signal::Tick, Light::Red, Light::Yellow),
            Transition::new(Signal::Tick, Light::Yellow, Light::Green),
            Transition::new(Signal::Tick, Light::Green, Light::Red),
        ])
        .transitions(from_any(
            Signal::Kill,
            [Light::Red, Light::Yellow, Light::Green],
            Light::Off,
        ))
        .on_any_state(any_state_listener(
            |_: &mut TrafficLight, new: &Light, prev: &Light| {
                println!("  {prev:?} -> {new:?}");
                Ok(())
            },
        ))
        .on_state(
            Light::Off,
            state_listener(|_: &mut TrafficLight, prev: &Light| {
                println!("  (killed while {prev:?})");
                Ok(())
            }),
        )
        .build()?;

    println!("Initial state: {:?}\n", light.state());

    println!("KILL while off is ignored: {}", light.process_event(&Signal::Kill)?);

    println!("\nTicking through two cycles:");
    for _ in 0..6 {
        light.process_event(&Signal::Tick)?;
    }

    println!("\nDisabling Yellow, the light is stuck on Red:");
    light.set_state_enabled(Light::Yellow, false);
    println!("  outcome: {:?}", light.dispatch(&Signal::Tick)?);

    println!("\nKill switch:");
    light.process_event(&Signal::Kill)?;

    println!("\n=== Example Complete ===");
    Ok(())
}
