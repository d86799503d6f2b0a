//! Middleware Chain
//!
//! This example demonstrates how middleware brackets each dispatch: hooks
//! that observe actions, record a journal, or veto a dispatch entirely.
//!
//! Key concepts:
//! - Implementing the Middleware trait with pre and post hooks
//! - Nesting order: first registered middleware is outermost
//! - Aborting a dispatch by returning an error from pre_dispatch
//! - The built-in DispatchJournal for a timestamped action log
//!
//! Run with: cargo run --example middleware

use fluxion::{
    action_type, state_type, BoxError, DispatchJournal, LoggingMiddleware, Middleware, Store,
};

state_type! {
    pub struct BalanceState {
        pub balance: i64,
    }
}

action_type! {
    pub enum BalanceAction {
        Deposit(i64),
        Withdraw(i64),
    }
}

fn reduce(state: &BalanceState, action: &BalanceAction) -> BalanceState {
    match action {
        BalanceAction::Deposit(amount) => BalanceState {
            balance: state.balance + amount,
        },
        BalanceAction::Withdraw(amount) => BalanceState {
            balance: state.balance - amount,
        },
    }
}

/// Rejects withdrawals that would overdraw the account.
struct OverdraftGuard;

impl Middleware<BalanceState, BalanceAction> for OverdraftGuard {
    fn pre_dispatch(
        &self,
        store: &Store<BalanceState, BalanceAction>,
        action: &BalanceAction,
    ) -> Result<(), BoxError> {
        if let BalanceAction::Withdraw(amount) = action {
            let balance = store.read(|state| state.balance);
            if *amount > balance {
                return Err(format!("insufficient funds: {balance} < {amount}").into());
            }
        }
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    println!("=== Middleware Chain Example ===\n");

    let store = Store::new(BalanceState { balance: 0 }, reduce);

    // Registration order is nesting order: the guard wraps everything else.
    let journal = DispatchJournal::new();
    store.add_middleware(OverdraftGuard);
    store.add_middleware(LoggingMiddleware::new());
    store.add_middleware(journal.clone());

    store.dispatch(BalanceAction::Deposit(100)).unwrap();
    println!("After Deposit(100): {:?}", store.state());

    store.dispatch(BalanceAction::Withdraw(30)).unwrap();
    println!("After Withdraw(30): {:?}", store.state());

    // The guard rejects this one before the reducer runs.
    match store.dispatch(BalanceAction::Withdraw(500)) {
        Ok(()) => println!("Withdraw(500) unexpectedly succeeded"),
        Err(error) => println!("Withdraw(500) rejected: {error}"),
    }
    println!("Balance unchanged: {:?}", store.state());

    println!("\nJournal of completed dispatches:");
    for record in journal.records() {
        println!("  {} at {}", record.action, record.at);
    }

    println!("\n=== Example Complete ===");
}
