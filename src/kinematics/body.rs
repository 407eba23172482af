use crate::core::{Footprint, ObjectId, Point, RenderShape, SimError, SimResult, Vector};
use crate::render::RasterSurface;
use crate::simulation::{SimulatedObject, Tick};

use super::{Behavior, Geometry};

/// Object driven by force integration.
///
/// State is world space (y up, origin at the surface center); the shape is
/// repositioned from `position` every render.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsObject {
    pub shape: RenderShape,
    /// Tracked but not divided into the force sum: forces act as accelerations
    pub mass: f64,
    pub position: Vector,
    pub velocity: Vector,
    pub acceleration: Vector,
    pub forces: Vec<Vector>,
    pub behavior: Behavior,
    pub(crate) id: Option<ObjectId>,
    geometry: Option<Geometry>,
}

impl PhysicsObject {
    pub fn new(shape: RenderShape, mass: f64, behavior: Behavior) -> Self {
        Self {
            shape,
            mass,
            position: Vector::zero(),
            velocity: Vector::zero(),
            acceleration: Vector::zero(),
            forces: Vec::new(),
            behavior,
            id: None,
            geometry: None,
        }
    }

    pub fn with_position(mut self, position: Vector) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_force(mut self, force: Vector) -> Self {
        self.forces.push(force);
        self
    }

    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    /// Coordinator geometry seen at `loaded`, `None` before registration
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    /// Called once by the coordinator on registration.
    pub fn loaded(&mut self, geometry: Geometry) {
        self.behavior.loaded(&geometry, self.shape.width(), self.shape.height());
        self.geometry = Some(geometry);
    }

    pub fn calculate_acceleration(&mut self) {
        self.acceleration = self.behavior.acceleration(self.position, self.acceleration, &self.forces);
    }

    pub fn integrate_velocity(&mut self, interval: f64) {
        self.velocity = match self.behavior.velocity(self.position, self.velocity) {
            Some(v) => v,
            None => self.velocity + self.acceleration.scaled_components(interval),
        };
    }

    pub fn integrate_position(&mut self, interval: f64) {
        self.position = self.position + self.velocity.scaled_components(interval);
    }

    /// Clear the old footprint, move the shape to `position`, paint.
    pub fn render<S: RasterSurface + ?Sized>(&mut self, surface: &mut S) -> SimResult<()> {
        let origin = self.geometry.as_ref().ok_or(SimError::NotLoaded)?.origin;
        self.shape.rect.clear(surface);
        self.shape.position(self.position, origin);
        self.shape.rect.paint(surface);
        Ok(())
    }

    /// Full per-tick update: integrate then render.
    pub fn update<S: RasterSurface + ?Sized>(&mut self, interval: f64, surface: &mut S) -> SimResult<()> {
        if self.geometry.is_none() {
            return Err(SimError::NotLoaded);
        }
        self.integrate(interval);
        self.render(surface)
    }

    fn integrate(&mut self, interval: f64) {
        self.calculate_acceleration();
        self.integrate_velocity(interval);
        self.integrate_position(interval);
    }

    /// Where the shape would sit on the surface for the current position
    pub fn projected_footprint(&self, origin: Point) -> Footprint {
        let mut shape = self.shape.clone();
        shape.position(self.position, origin);
        shape.footprint()
    }
}

impl SimulatedObject for PhysicsObject {
    /// Integration only; rendering needs the coordinator's surface.
    fn advance(&mut self, tick: Tick) {
        self.integrate(tick.interval);
    }

    fn current_footprint(&self) -> Footprint {
        match &self.geometry {
            Some(g) => self.projected_footprint(g.origin),
            None => self.shape.footprint(),
        }
    }
}
