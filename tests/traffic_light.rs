//! Traffic light scenario: TICK cycles the colours, KILL turns the light off.

use fsm_engine::builder::{from_any, StateMachineBuilder};
use fsm_engine::machine::any_state_listener;
use fsm_engine::{event_enum, state_enum, StateMachine, Transition};
use std::cell::Cell;
use std::rc::Rc;

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

fn traffic_light() -> (TrafficLight, Rc<Cell<usize>>) {
    let changes = Rc::new(Cell::new(0));
    let c = changes.clone();

    let machine = StateMachineBuilder::new()
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
            move |_: &mut TrafficLight, _: &Light, _: &Light| {
                c.set(c.get() + 1);
                Ok(())
            },
        ))
        .build()
        .unwrap();

    (machine, changes)
}

#[test]
fn starts_off() {
    let (light, changes) = traffic_light();
    assert_eq!(light.state(), &Light::Off);
    assert_eq!(changes.get(), 0);
}

#[test]
fn kill_while_off_is_ignored() {
    let (mut light, changes) = traffic_light();

    assert!(!light.process_event(&Signal::Kill).unwrap());
    assert_eq!(light.state(), &Light::Off);
    assert_eq!(changes.get(), 0);

    assert!(light.process_event(&Signal::Tick).unwrap());
    assert_eq!(light.state(), &Light::Red);
    assert_eq!(changes.get(), 1);
}

#[test]
fn tick_cycles_through_colours() {
    let (mut light, changes) = traffic_light();
    light.process_event(&Signal::Tick).unwrap();

    let expected = [
        Light::Yellow,
        Light::Green,
        Light::Red,
        Light::Yellow,
        Light::Green,
        Light::Red,
    ];
    for (i, colour) in expected.iter().enumerate() {
        assert!(light.process_event(&Signal::Tick).unwrap());
        assert_eq!(light.state(), colour);
        assert_eq!(changes.get(), i + 2);
    }
}

#[test]
fn kill_turns_off_from_any_colour() {
    for ticks in 1..=6 {
        let (mut light, changes) = traffic_light();
        for _ in 0..ticks {
            light.process_event(&Signal::Tick).unwrap();
        }
        let before = *light.state();

        assert!(light.process_event(&Signal::Kill).unwrap());
        assert_eq!(light.state(), &Light::Off);
        assert_eq!(light.last_state(), &before);
        assert_eq!(changes.get(), ticks + 1);
    }
}
