//! Vending Session
//!
//! Walks a machine through a purchase, a fault, and a rejected selection,
//! printing each outcome. Narration from the machine itself is emitted as
//! tracing events; set `RUST_LOG=vendfsm=debug` to see mode transitions.
//!
//! Run with: cargo run --example vending_session

use tracing_subscriber::EnvFilter;
use vendfsm::{Outcome, VendingMachine};

fn report(step: &str, outcome: Outcome) {
    match outcome {
        Outcome::Accepted => println!("{step:<22} accepted"),
        Outcome::Rejected(reason) => println!("{step:<22} rejected: {reason}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vendfsm=info")),
        )
        .init();

    println!("=== Vending Session ===\n");

    let mut machine = VendingMachine::new(10);

    report("select_item(Soda)", machine.select_item("Soda"));
    report("insert_coin(50)", machine.insert_coin(50));
    report("dispense_item()", machine.dispense_item());
    report("set_out_of_order()", machine.set_out_of_order());
    report("select_item(Chips)", machine.select_item("Chips"));

    println!("\n{machine}");

    println!("\nMode path:");
    for mode in machine.history().path() {
        println!("  {mode}");
    }

    println!("\n=== Session Complete ===");
}
