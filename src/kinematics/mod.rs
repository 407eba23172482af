//! Force-integration coordinator.
//!
//! Each tick measures real elapsed time and asks every object, in
//! registration order, to sum forces into acceleration, integrate velocity
//! then position, and repaint itself.

mod behavior;
mod body;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::clock::TickTimer;
use crate::core::{Clock, Footprint, ObjectId, Point, SimError, SimResult, SystemClock};
use crate::render::RasterSurface;
use crate::simulation::{SimulatedObject, Simulation, TickStats};
use crate::snapshot::ObjectSnapshot;

pub use behavior::{BounceBounds, Behavior};
pub use body::PhysicsObject;

/// Coordinator geometry an object may consult after `loaded`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: f64,
    pub height: f64,
    /// Surface center; world (0, 0) maps here
    pub origin: Point,
}

impl Geometry {
    pub fn for_surface<S: RasterSurface + ?Sized>(surface: &S) -> Self {
        let width = surface.width();
        let height = surface.height();
        Self {
            width,
            height,
            origin: Point::new(width / 2.0, height / 2.0, 0),
        }
    }
}

pub struct ForceCoordinator<S: RasterSurface, C: Clock = SystemClock> {
    surface: S,
    clock: C,
    geometry: Geometry,
    objects: Vec<PhysicsObject>,
    last_update_ms: f64,
    stats: TickStats,
}

impl<S: RasterSurface> ForceCoordinator<S, SystemClock> {
    pub fn new(surface: S) -> Self {
        Self::with_clock(surface, SystemClock::new())
    }
}

impl<S: RasterSurface, C: Clock> ForceCoordinator<S, C> {
    pub fn with_clock(surface: S, clock: C) -> Self {
        let geometry = Geometry::for_surface(&surface);
        info!("force coordinator on {}x{} surface", geometry.width, geometry.height);
        let last_update_ms = clock.now_ms();
        Self {
            surface,
            clock,
            geometry,
            objects: Vec::new(),
            last_update_ms,
            stats: TickStats::default(),
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn origin(&self) -> Point {
        self.geometry.origin
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Append and immediately call `loaded` with this coordinator's geometry.
    pub fn add_object(&mut self, mut object: PhysicsObject) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        object.id = Some(id);
        object.loaded(self.geometry);
        debug!("registered {} ({})", id, object.behavior.kind());
        self.objects.push(object);
        self.stats.objects = self.objects.len() as u32;
        id
    }

    pub fn object(&self, id: ObjectId) -> SimResult<&PhysicsObject> {
        self.objects.get(id.0 as usize).ok_or(SimError::UnknownObject(id))
    }

    pub fn object_mut(&mut self, id: ObjectId) -> SimResult<&mut PhysicsObject> {
        self.objects.get_mut(id.0 as usize).ok_or(SimError::UnknownObject(id))
    }

    pub fn objects(&self) -> &[PhysicsObject] {
        &self.objects
    }

    /// One tick with the measured interval since the previous one.
    pub fn update(&mut self) -> SimResult<()> {
        let now = self.clock.now_ms();
        let interval = (now - self.last_update_ms) / 1000.0;
        self.last_update_ms = now;
        self.step(interval)
    }

    /// One tick with an explicit interval (seconds). Does not touch the
    /// clock bookkeeping.
    pub fn step(&mut self, interval: f64) -> SimResult<()> {
        let timer = TickTimer::start();
        for object in self.objects.iter_mut() {
            object.update(interval, &mut self.surface)?;
        }
        self.stats.ticks += 1;
        self.stats.last_interval_s = interval;
        self.stats.last_tick_ms = timer.elapsed_ms();
        Ok(())
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
        self.stats.objects = self.objects.len() as u32;
    }
}

impl<S: RasterSurface, C: Clock> Simulation for ForceCoordinator<S, C> {
    fn update(&mut self) -> SimResult<()> {
        ForceCoordinator::update(self)
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
                kind: o.behavior.kind(),
                mass: Some(o.mass),
                position: o.position.into(),
                velocity: Some(o.velocity.into()),
                acceleration: Some(o.acceleration.into()),
                footprint: o.current_footprint(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
