//! Occupancy coordinator: axis-aligned rectangles moved through a queue.
//!
//! Input never moves an object directly. Directional helpers queue a
//! [`Move`]; the next [`OccupancyCoordinator::update`] resolves the queue in
//! FIFO order and drops whatever `check` rejects.

mod move_queue;
mod object;

use log::{debug, info};

use crate::core::{Clock, Footprint, ObjectId, SimError, SimResult, SystemClock, Vector};
use crate::core::clock::TickTimer;
use crate::input::MoveDirection;
use crate::render::RasterSurface;
use crate::simulation::{SimulatedObject, Simulation, Tick, TickStats};
use crate::snapshot::ObjectSnapshot;

pub use move_queue::{Move, MoveQueue};
pub use object::GameObject;

const DEFAULT_MOVE_CAPACITY: usize = 16;

pub struct OccupancyCoordinator<S: RasterSurface, C: Clock = SystemClock> {
    surface: S,
    clock: C,
    objects: Vec<GameObject>,
    moves: MoveQueue,
    last_update_ms: f64,
    stats: TickStats,
}

impl<S: RasterSurface> OccupancyCoordinator<S, SystemClock> {
    pub fn new(surface: S) -> Self {
        Self::with_clock(surface, SystemClock::new())
    }
}

impl<S: RasterSurface, C: Clock> OccupancyCoordinator<S, C> {
    pub fn with_clock(surface: S, clock: C) -> Self {
        info!("occupancy coordinator on {}x{} surface", surface.width(), surface.height());
        let last_update_ms = clock.now_ms();
        Self {
            surface,
            clock,
            objects: Vec::new(),
            moves: MoveQueue::new(DEFAULT_MOVE_CAPACITY),
            last_update_ms,
            stats: TickStats::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Register an object: bind it, paint it right away, append it.
    pub fn add_object(&mut self, mut object: GameObject) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        object.id = Some(id);
        object.rect.paint(&mut self.surface);
        debug!("registered {} at ({}, {}) layer {}", id, object.x(), object.y(), object.layer());
        self.objects.push(object);
        self.stats.objects = self.objects.len() as u32;
        id
    }

    pub fn object(&self, id: ObjectId) -> SimResult<&GameObject> {
        self.objects.get(id.0 as usize).ok_or(SimError::UnknownObject(id))
    }

    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn pending_moves(&self) -> &[Move] {
        self.moves.as_slice()
    }

    /// Queue a relative move for the next tick.
    pub fn queue_move(&mut self, id: ObjectId, dx: f64, dy: f64) -> SimResult<()> {
        self.object(id)?;
        self.moves.push(Move { object: id, dx, dy });
        Ok(())
    }

    pub fn move_up(&mut self, id: ObjectId, n: f64) -> SimResult<()> {
        self.queue_move(id, 0.0, -n)
    }

    pub fn move_down(&mut self, id: ObjectId, n: f64) -> SimResult<()> {
        self.queue_move(id, 0.0, n)
    }

    pub fn move_left(&mut self, id: ObjectId, n: f64) -> SimResult<()> {
        self.queue_move(id, -n, 0.0)
    }

    pub fn move_right(&mut self, id: ObjectId, n: f64) -> SimResult<()> {
        self.queue_move(id, n, 0.0)
    }

    /// Whether `mv` keeps the mover inside the surface and clear of every
    /// other impassable object on its layer. Unknown movers are rejected.
    pub fn check(&self, mv: &Move) -> bool {
        let Some(mover) = self.objects.get(mv.object.0 as usize) else {
            return false;
        };
        let target = mover.current_footprint().translated(mv.dx, mv.dy);
        if !target.within(self.surface.width(), self.surface.height()) {
            return false;
        }
        !self.objects.iter().enumerate().any(|(idx, other)| {
            idx != mv.object.0 as usize
                && !other.passable
                && other.layer() == target.z
                && target.overlaps(&other.current_footprint())
        })
    }

    fn commit(&mut self, mv: &Move) {
        let surface = &mut self.surface;
        if let Some(object) = self.objects.get_mut(mv.object.0 as usize) {
            object.rect.clear(surface);
            object.translate(mv.dx, mv.dy);
        }
    }

    /// One tick: every object's hook first (clock + repaint), then the move
    /// queue in FIFO order. The queue is emptied either way.
    pub fn update(&mut self) -> SimResult<()> {
        let timer = TickTimer::start();
        let now_ms = self.clock.now_ms();
        let tick = Tick {
            now_ms,
            interval: (now_ms - self.last_update_ms) / 1000.0,
        };
        self.last_update_ms = now_ms;

        for object in self.objects.iter_mut() {
            object.advance(tick);
            object.rect.paint(&mut self.surface);
        }

        let mut accepted = 0;
        let mut rejected = 0;
        for idx in 0..self.moves.len() {
            let Some(mv) = self.moves.get(idx) else { break };
            if self.check(&mv) {
                self.commit(&mv);
                accepted += 1;
            } else {
                debug!("rejected move of {} by ({}, {})", mv.object, mv.dx, mv.dy);
                rejected += 1;
            }
        }
        self.moves.clear();

        self.stats.ticks += 1;
        self.stats.last_interval_s = tick.interval;
        self.stats.moves_accepted = accepted;
        self.stats.moves_rejected = rejected;
        self.stats.last_tick_ms = timer.elapsed_ms();
        Ok(())
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.stats.objects = self.objects.len() as u32;
    }
}

impl<S: RasterSurface, C: Clock> Simulation for OccupancyCoordinator<S, C> {
    fn update(&mut self) -> SimResult<()> {
        OccupancyCoordinator::update(self)
    }

    fn stats(&self) -> &TickStats {
        &self.stats
    }

    fn object_count(&self) -> usize {
        self.objects.len()
    }

    fn footprints(&self) -> Vec<Footprint> {
        self.objects.iter().map(SimulatedObject::current_footprint).collect()
    }

    fn snapshot(&self) -> Vec<ObjectSnapshot> {
        self.objects
            .iter()
            .enumerate()
            .map(|(idx, o)| ObjectSnapshot {
                id: ObjectId(idx as u32),
                kind: if o.passable { "passable" } else { "solid" },
                mass: None,
                position: Vector::from_components(o.x(), o.y()).into(),
                velocity: None,
                acceleration: None,
                footprint: o.current_footprint(),
            })
            .collect()
    }

    fn queue_directional_move(
        &mut self,
        id: ObjectId,
        direction: MoveDirection,
        distance: f64,
    ) -> SimResult<bool> {
        let (dx, dy) = direction.delta(distance);
        self.queue_move(id, dx, dy)?;
        Ok(true)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
