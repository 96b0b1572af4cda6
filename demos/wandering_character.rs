//! Wandering Character
//!
//! This example drives a small character AI with three states.
//!
//! Key concepts:
//! - Start callbacks that arm a timed event
//! - Timed events that decide on the next state
//! - Update callbacks that request transitions
//! - Reading the previous state on entry
//!
//! Run with: RUST_LOG=debug cargo run --example wandering_character

use tickstate::core::{StateContext, StateDescriptor};
use tickstate::driver::StateMachine;
use tickstate::state_enum;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum CharacterState {
        Idle,
        Walk,
        Jump,
    }
}

const FRAME: f64 = 0.1;
const MOVE_SPEED: f64 = 1.5;
const JUMP_LENGTH: f64 = 0.6;

/// Host-side data the callbacks operate on.
struct Character {
    position: f64,
    goal: f64,
    waypoints: Vec<f64>,
    next_waypoint: usize,
    jump_progress: f64,
}

impl Character {
    fn at_goal(&self) -> bool {
        (self.position - self.goal).abs() < 0.1
    }

    fn pick_goal(&mut self) {
        self.goal = self.waypoints[self.next_waypoint % self.waypoints.len()];
        self.next_waypoint += 1;
    }
}

type Ctx = StateContext<f64>;

fn idle() -> StateDescriptor<Character, f64> {
    StateDescriptor::new(
        |_: &mut Character, ctx: &mut Ctx| {
            println!("  [idle] catching breath");
            ctx.arm(0.5);
        },
        |_: &mut Character, _: &mut Ctx| {},
    )
    .on_timed_event(|character: &mut Character, ctx: &mut Ctx| {
        character.pick_goal();
        println!("  [idle] wandering towards {:.1}", character.goal);
        ctx.set_current_state(CharacterState::Walk);
    })
    .named("IDLE")
}

fn walk() -> StateDescriptor<Character, f64> {
    StateDescriptor::new(
        |_: &mut Character, ctx: &mut Ctx| {
            if ctx.previous_state() == CharacterState::Jump.into() {
                println!("  [walk] landed, walking on");
            } else {
                println!("  [walk] setting off");
            }
            ctx.arm(1.0);
        },
        |character: &mut Character, ctx: &mut Ctx| {
            let reach = MOVE_SPEED * FRAME;
            let step = (character.goal - character.position).clamp(-reach, reach);
            character.position += step;
            if character.at_goal() {
                println!("  [walk] reached {:.1}", character.position);
                ctx.set_current_state(CharacterState::Idle);
            }
        },
    )
    .on_timed_event(|character: &mut Character, ctx: &mut Ctx| {
        if (character.goal - character.position).abs() > 1.0 {
            ctx.set_current_state(CharacterState::Jump);
        }
    })
    .named("WALK")
}

fn jump() -> StateDescriptor<Character, f64> {
    StateDescriptor::new(
        |character: &mut Character, _: &mut Ctx| {
            println!("  [jump] hop!");
            character.jump_progress = 0.0;
        },
        |character: &mut Character, ctx: &mut Ctx| {
            character.jump_progress += FRAME / JUMP_LENGTH;
            if character.jump_progress < 0.5 {
                character.position += (character.goal - character.position).signum() * 0.2;
            } else if character.jump_progress >= 1.0 {
                ctx.set_current_state(CharacterState::Walk);
            }
        },
    )
    .named("JUMP")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    println!("=== Wandering Character ===\n");

    let mut machine = StateMachine::for_states(CharacterState::Idle);
    machine.register(CharacterState::Idle, idle());
    machine.register(CharacterState::Walk, walk());
    machine.register(CharacterState::Jump, jump());

    let mut character = Character {
        position: 0.0,
        goal: 0.0,
        waypoints: vec![4.0, -2.5, 1.0, 6.0],
        next_waypoint: 0,
        jump_progress: 0.0,
    };

    let mut now = 0.0;
    for _ in 0..200 {
        if let Err(err) = machine.tick(&mut character, now) {
            eprintln!("tick failed: {err}");
            break;
        }
        now += FRAME;
    }

    println!(
        "\nAfter {:.1}s: {:?} at position {:.2}",
        now,
        machine.current_as::<CharacterState>(),
        character.position
    );
    println!("Snapshot: {:?}", machine.snapshot());

    println!("\n=== Example Complete ===");
}
