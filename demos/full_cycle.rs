//! Full Cycle Under Continuous Demand
//!
//! This demo drives the controller with the minor-road sensor held true
//! and prints every phase change of the resulting cycle.
//!
//! Key concepts:
//! - Minimum dwell per phase (50/10/30/10 ticks by default)
//! - Cyclic progression once demand is present
//! - Lights derived purely from the committed phase
//!
//! Run with: cargo run --example full_cycle

use crosslight::controller::{PhaseController, TickInput};

fn main() {
    println!("=== Full Cycle Under Continuous Demand ===\n");

    let mut controller = PhaseController::new();
    println!("Initial phase: {}", controller.phase());
    println!("Initial lights: {}\n", controller.lights());

    let mut last_phase = controller.phase();
    for _ in 0..200 {
        let lights = controller.step(TickInput::demand());
        if controller.phase() != last_phase {
            println!(
                "tick {:>3}: {} -> {}  ({})",
                controller.ticks(),
                last_phase,
                controller.phase(),
                lights
            );
            last_phase = controller.phase();
        }
    }

    println!("\nPhase changes recorded: {}", controller.log().changes().len());
    println!("The cycle repeats for as long as demand persists:");
    println!("  MainGreen(50) -> MainYellow(10) -> MinorGreen(30) -> MinorYellow(10) -> ...");

    println!("\n=== Demo Complete ===");
}
