//! Demand Actuation
//!
//! This demo shows the arbiter's asymmetry: the main road holds green
//! indefinitely until a single vehicle is sensed on the minor road, gets
//! served exactly one minor-road window, and then the main road holds
//! green again.
//!
//! Key concepts:
//! - No maximum dwell for the main road absent demand
//! - Sensor consulted only at the yield decision point
//! - One demand pulse buys exactly one service window
//!
//! Run with: cargo run --example demand_actuation

use crosslight::controller::{PhaseController, TickInput};
use crosslight::core::Phase;

fn main() {
    println!("=== Demand Actuation ===\n");

    let mut controller = PhaseController::new();

    // Quiet intersection: main green well past its minimum dwell.
    for _ in 0..300 {
        controller.step(TickInput::quiet());
    }
    println!(
        "After 300 quiet ticks: phase {} (held, dwell long satisfied)",
        controller.phase()
    );

    // One vehicle arrives on the minor road.
    controller.step(TickInput::demand());
    println!(
        "Demand sensed at tick {}: phase {}",
        controller.ticks(),
        controller.phase()
    );

    // Let the service window play out with no further demand.
    while controller.phase() != Phase::MainGreen {
        controller.step(TickInput::quiet());
    }
    println!(
        "Back to {} at tick {}\n",
        controller.phase(),
        controller.ticks()
    );

    println!("Recorded changes:");
    for change in controller.log().changes() {
        println!(
            "  tick {:>3}: {} -> {} ({:?})",
            change.at_tick, change.from, change.to, change.cause
        );
    }

    // The intersection stays with the main road from here on.
    for _ in 0..500 {
        controller.step(TickInput::quiet());
    }
    println!(
        "\n500 further quiet ticks: phase still {}",
        controller.phase()
    );

    println!("\n=== Demo Complete ===");
}
