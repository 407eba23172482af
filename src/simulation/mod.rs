//! Capability traits shared by both coordinator designs, plus the loop that
//! drives them.
//!
//! The two designs never compose: a scene picks one coordinator and hands it
//! to a [`Scheduler`].

use crate::core::{Footprint, ObjectId, SimResult};
use crate::input::MoveDirection;
use crate::snapshot::ObjectSnapshot;

mod scheduler;
mod stats;

pub use scheduler::{RunState, Scheduler, StopHandle};
pub use stats::TickStats;

/// Clock reading handed to each object during a tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Wall clock at the start of the tick (ms)
    pub now_ms: f64,
    /// Seconds since the previous tick
    pub interval: f64,
}

/// Something a coordinator advances once per tick
pub trait SimulatedObject {
    fn advance(&mut self, tick: Tick);
    fn current_footprint(&self) -> Footprint;
}

/// A coordinator the scheduler can drive
pub trait Simulation {
    /// Run one tick.
    fn update(&mut self) -> SimResult<()>;

    fn stats(&self) -> &TickStats;

    fn object_count(&self) -> usize;

    /// Footprints in registration order
    fn footprints(&self) -> Vec<Footprint>;

    fn snapshot(&self) -> Vec<ObjectSnapshot>;

    /// Queue a directional move for `id`. Returns `Ok(false)` when this
    /// design has no move queue.
    fn queue_directional_move(
        &mut self,
        _id: ObjectId,
        _direction: MoveDirection,
        _distance: f64,
    ) -> SimResult<bool> {
        Ok(false)
    }
}
