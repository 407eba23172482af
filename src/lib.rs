//! Canvas Kinematics - 2D kinematics core for the canvas physics toy
//!
//! Two independent coordinator designs share the same math and loop:
//! - occupancy/   - rectangles moved through a checked move queue
//! - kinematics/  - force integration with per-object behaviors
//!
//! Layout:
//! - core/        - vectors, geometry, clock, errors
//! - render/      - raster surfaces (canvas, headless recorder)
//! - simulation/  - capability traits, scheduler, tick stats
//! - api/         - wasm-bindgen facade

pub mod core;
pub mod render;
pub mod simulation;
pub mod occupancy;
pub mod kinematics;
pub mod input;
pub mod config;
pub mod scenes;
pub mod snapshot;
pub mod logging;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook plus console logging
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::init(log::LevelFilter::Info);
    log::info!("canvas kinematics {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::{ForceWorld, OccupancyWorld};
pub use crate::core::{Direction, ObjectId, SimError, SimResult, Vector};
pub use kinematics::{Behavior, ForceCoordinator, PhysicsObject};
pub use occupancy::{GameObject, Move, OccupancyCoordinator};
pub use simulation::{RunState, Scheduler, Simulation, TickStats};
