//! Subscriptions
//!
//! This example demonstrates state-change notifications: registering
//! subscribers, notification order, and unsubscribing.
//!
//! Key concepts:
//! - Subscribing callbacks that receive each new state
//! - Notification in registration order after the dispatch settles
//! - Removing a subscriber through its Subscription handle
//!
//! Run with: cargo run --example subscriptions

use fluxion::{action_type, state_type, Store};

state_type! {
    pub struct TemperatureState {
        pub celsius: i32,
    }
}

action_type! {
    pub enum TemperatureAction {
        Set(i32),
    }
}

fn main() {
    println!("=== Subscriptions Example ===\n");

    let store = Store::new(
        TemperatureState { celsius: 20 },
        |_state: &TemperatureState, action: &TemperatureAction| match action {
            TemperatureAction::Set(degrees) => TemperatureState { celsius: *degrees },
        },
    );

    let display = store
        .subscribe(|state: &TemperatureState| {
            println!("[display] temperature is {} C", state.celsius);
        })
        .unwrap();

    let alarm = store
        .subscribe(|state: &TemperatureState| {
            if state.celsius > 30 {
                println!("[alarm] too hot: {} C", state.celsius);
            }
        })
        .unwrap();

    println!("Setting temperature to 25...");
    store.dispatch(TemperatureAction::Set(25)).unwrap();

    println!("\nSetting temperature to 35...");
    store.dispatch(TemperatureAction::Set(35)).unwrap();

    // The display stops listening; the alarm stays registered.
    display.unsubscribe();

    println!("\nDisplay unsubscribed. Setting temperature to 40...");
    store.dispatch(TemperatureAction::Set(40)).unwrap();

    alarm.unsubscribe();
    println!("\nAll subscribers removed, final state: {:?}", store.state());

    println!("\n=== Example Complete ===");
}
