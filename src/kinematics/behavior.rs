use serde::{Deserialize, Serialize};

use crate::core::{Direction, Vector};

use super::Geometry;

/// Walls a bouncer reflects off, in world coordinates (y up)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BounceBounds {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for BounceBounds {
    fn default() -> Self {
        Self { top: 70.0, bottom: -70.0, left: -70.0, right: 120.0 }
    }
}

impl BounceBounds {
    /// Half the surface each way, shrunk by the shape so it stays visible.
    pub fn for_surface(geometry: &Geometry, shape_width: f64, shape_height: f64) -> Self {
        let top = geometry.height / 2.0;
        let half_width = geometry.width / 2.0;
        Self {
            top,
            bottom: -top + shape_height,
            left: -half_width,
            right: half_width - shape_width,
        }
    }
}

/// How an object overrides the base force-integration step
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Behavior {
    /// Forces summed into acceleration, nothing else
    Inert,
    /// Reflects velocity off rectangular bounds derived from the surface
    Bouncer { bounds: BounceBounds },
    /// Back-and-forth along x at a fixed speed
    Slider { left_limit: f64, right_limit: f64, speed: f64 },
    /// Constant pull toward y = 0, strengthened while inside the band
    Centering { pull: f64, band: f64, increment: f64 },
}

impl Behavior {
    pub fn bouncer() -> Self {
        Behavior::Bouncer { bounds: BounceBounds::default() }
    }

    pub fn slider() -> Self {
        Behavior::Slider { left_limit: -20.0, right_limit: 20.0, speed: 1.0 }
    }

    pub fn centering() -> Self {
        Behavior::Centering { pull: 95.0, band: 4.0, increment: 5.0 }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Behavior::Inert => "inert",
            Behavior::Bouncer { .. } => "bouncer",
            Behavior::Slider { .. } => "slider",
            Behavior::Centering { .. } => "centering",
        }
    }

    pub(super) fn loaded(&mut self, geometry: &Geometry, shape_width: f64, shape_height: f64) {
        if let Behavior::Bouncer { bounds } = self {
            *bounds = BounceBounds::for_surface(geometry, shape_width, shape_height);
        }
    }

    /// Acceleration for this tick
    pub(super) fn acceleration(&mut self, position: Vector, current: Vector, forces: &[Vector]) -> Vector {
        match self {
            Behavior::Centering { pull, band, increment } => {
                let y = if position.y() > 0.0 { -*pull } else { *pull };
                if position.y() < *band && position.y() > -*band {
                    *pull += *increment;
                }
                Vector::from_components(current.x(), y)
            }
            _ => forces.iter().copied().sum(),
        }
    }

    /// Velocity for this tick. `None` means use the base integration.
    pub(super) fn velocity(&self, position: Vector, velocity: Vector) -> Option<Vector> {
        match self {
            Behavior::Bouncer { bounds } => {
                let mut vx = velocity.x();
                let mut vy = velocity.y();
                if position.x() > bounds.right || position.x() < bounds.left {
                    vx = -vx;
                }
                if position.y() > bounds.top || position.y() < bounds.bottom {
                    vy = -vy;
                }
                Some(Vector::from_components(vx, vy))
            }
            Behavior::Slider { left_limit, right_limit, speed } => {
                if position.x() < *left_limit {
                    Some(Vector::toward(Direction::E, *speed))
                } else if position.x() > *right_limit {
                    Some(Vector::toward(Direction::W, *speed))
                } else {
                    None
                }
            }
            Behavior::Inert | Behavior::Centering { .. } => None,
        }
    }
}
