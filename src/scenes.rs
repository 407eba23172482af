//! Preset objects and the two demo scenes

use std::time::Duration;

use crate::config::{SceneConfig, FORCE_FRAME_DELAY_MS, OCCUPANCY_FRAME_DELAY_MS};
use crate::core::{Clock, Colors, ObjectId, RenderShape, SimResult, Vector};
use crate::kinematics::{Behavior, ForceCoordinator, PhysicsObject};
use crate::occupancy::{GameObject, OccupancyCoordinator};
use crate::render::{RasterSurface, RecordingSurface};
use crate::simulation::Scheduler;

// === FORCE-INTEGRATION PRESETS ===

pub fn small_rect_shape() -> RenderShape {
    RenderShape::new(15.0, 25.0, 1, Colors::new("red", "black"))
}

pub fn gold_bar() -> PhysicsObject {
    let shape = RenderShape::new(8.0, 16.0, 1, Colors::new("gold", "black"));
    PhysicsObject::new(shape, 10.0, Behavior::Inert)
}

pub fn blue_bouncer() -> PhysicsObject {
    let shape = RenderShape::new(15.0, 10.0, 1, Colors::new("navy", "black"));
    PhysicsObject::new(shape, 10.0, Behavior::bouncer()).with_velocity(Vector::new(-0.3, 90.0))
}

pub fn green_slider() -> PhysicsObject {
    let shape = RenderShape::new(8.0, 16.0, 1, Colors::new("green", "black"));
    PhysicsObject::new(shape, 10.0, Behavior::slider()).with_velocity(Vector::directional("e", 1.0))
}

pub fn centering_block() -> PhysicsObject {
    let shape = RenderShape::new(8.0, 16.0, 1, Colors::new("#004242", "black"));
    PhysicsObject::new(shape, 10.0, Behavior::centering())
        .with_position(Vector::from_components(0.0, 30.0))
}

// === OCCUPANCY PRESETS ===

pub fn player(x: f64, y: f64) -> GameObject {
    GameObject::new(x, y, 15.0, 19.0, 1, false, Colors::new("blue", "black"))
}

pub fn wall() -> GameObject {
    GameObject::new(98.0, 50.0, 19.0, 100.0, 1, false, Colors::new("firebrick", "black"))
}

pub fn floor() -> GameObject {
    GameObject::new(0.0, 100.0, 300.0, 150.0, 2, true, Colors::new("green", "darkgreen"))
}

// === SCENES ===

/// Player-controlled scene: the scheduler plus the id keyboard moves target
pub struct OccupancyScene<S: RasterSurface, C: Clock> {
    pub scheduler: Scheduler<OccupancyCoordinator<S, C>>,
    pub player: ObjectId,
}

/// Player at (10, 10), the wall, and the floor on its own layer.
pub fn occupancy_demo<S: RasterSurface, C: Clock>(
    surface: S,
    clock: C,
    config: &SceneConfig,
) -> SimResult<OccupancyScene<S, C>> {
    config.validate()?;
    let mut coordinator = OccupancyCoordinator::with_clock(surface, clock);
    coordinator.add_object(wall());
    coordinator.add_object(floor());
    let player = coordinator.add_object(player(10.0, 10.0));
    let delay = Duration::from_millis(config.frame_delay_or(OCCUPANCY_FRAME_DELAY_MS));
    Ok(OccupancyScene {
        scheduler: Scheduler::new(coordinator, delay),
        player,
    })
}

/// Slider, bouncer and centering block.
pub fn force_demo<S: RasterSurface, C: Clock>(
    surface: S,
    clock: C,
    config: &SceneConfig,
) -> SimResult<Scheduler<ForceCoordinator<S, C>>> {
    config.validate()?;
    let mut coordinator = ForceCoordinator::with_clock(surface, clock);
    coordinator.add_object(green_slider());
    coordinator.add_object(blue_bouncer());
    coordinator.add_object(centering_block());
    let delay = Duration::from_millis(config.frame_delay_or(FORCE_FRAME_DELAY_MS));
    Ok(Scheduler::new(coordinator, delay))
}

/// Occupancy demo on a recording surface sized by `config.arena`.
pub fn headless_occupancy_demo<C: Clock>(
    clock: C,
    config: &SceneConfig,
) -> SimResult<OccupancyScene<RecordingSurface, C>> {
    occupancy_demo(RecordingSurface::from_arena(&config.arena), clock, config)
}

/// Force demo on a recording surface sized by `config.arena`.
pub fn headless_force_demo<C: Clock>(
    clock: C,
    config: &SceneConfig,
) -> SimResult<Scheduler<ForceCoordinator<RecordingSurface, C>>> {
    force_demo(RecordingSurface::from_arena(&config.arena), clock, config)
}
