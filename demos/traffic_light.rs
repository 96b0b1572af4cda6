//! Traffic Light State Machine
//!
//! This example demonstrates a cyclic machine built from timed transitions.
//!
//! Key concepts:
//! - Configuration loaded from JSON
//! - Builder validation
//! - Ready-made timed transitions
//! - Wall-clock style timestamps (chrono)
//!
//! Run with: cargo run --example traffic_light

use chrono::{DateTime, Duration, TimeZone, Utc};
use tickstate::builder::{timed_transition, MachineBuilder, MachineConfig};
use tickstate::core::State;
use tickstate::state_enum;

state_enum! {
    enum TrafficLight {
        Red,
        Green,
        Yellow,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let config = MachineConfig::from_json(r#"{ "initial_state": 0, "max_states": 3 }"#)
        .expect("valid configuration");

    let mut machine = MachineBuilder::<(), DateTime<Utc>>::from_config(config)
        .state(
            TrafficLight::Red,
            timed_transition(Duration::seconds(30), TrafficLight::Green).named("Red"),
        )
        .state(
            TrafficLight::Green,
            timed_transition(Duration::seconds(25), TrafficLight::Yellow).named("Green"),
        )
        .state(
            TrafficLight::Yellow,
            timed_transition(Duration::seconds(5), TrafficLight::Red).named("Yellow"),
        )
        .build()
        .expect("valid machine");

    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 8, 0, 0)
        .single()
        .expect("valid start time");

    let mut last = None;
    for second in 0..=120 {
        let now = start + Duration::seconds(second);
        machine.tick(&mut (), now).expect("light is in a valid state");

        let light = machine.current_as::<TrafficLight>();
        if light != last {
            if let Some(light) = light {
                println!("  t={second:>3}s  {}", light.name());
            }
            last = light;
        }
    }

    println!("\nThis is a cyclic state machine - the sequence repeats:");
    println!("  Red -> Green -> Yellow -> Red -> ...");

    println!("\n=== Example Complete ===");
}
