//! Counter Store
//!
//! This example demonstrates the basic dispatch cycle: a single state value,
//! a pure reducer, and reads after each update.
//!
//! Key concepts:
//! - Declaring state and action types with the declaration macros
//! - Creating a store from an initial state and a reducer closure
//! - Dispatching actions and reading the resulting state
//!
//! Run with: cargo run --example counter

use fluxion::{action_type, state_type, Store};

state_type! {
    pub struct CounterState {
        pub count: u64,
    }
}

action_type! {
    pub enum CounterAction {
        Increase(u64),
        Decrease(u64),
        Reset,
    }
}

fn reduce(state: &CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Increase(n) => CounterState {
            count: state.count + n,
        },
        CounterAction::Decrease(n) => CounterState {
            count: state.count.saturating_sub(*n),
        },
        CounterAction::Reset => CounterState { count: 0 },
    }
}

fn main() {
    println!("=== Counter Store Example ===\n");

    let store = Store::new(CounterState { count: 0 }, reduce);
    println!("Initial state: {:?}", store.state());

    // Each dispatch runs the reducer and replaces the stored state.
    store.dispatch(CounterAction::Increase(5)).unwrap();
    println!("After Increase(5): {:?}", store.state());

    store.dispatch(CounterAction::Increase(3)).unwrap();
    println!("After Increase(3): {:?}", store.state());

    store.dispatch(CounterAction::Decrease(2)).unwrap();
    println!("After Decrease(2): {:?}", store.state());

    // Decrease saturates at zero rather than underflowing.
    store.dispatch(CounterAction::Decrease(100)).unwrap();
    println!("After Decrease(100): {:?}", store.state());

    store.dispatch(CounterAction::Reset).unwrap();
    println!("After Reset: {:?}", store.state());

    println!("\n=== Example Complete ===");
}
