//! Polar 2D vector used for positions, velocities, accelerations and forces.
//!
//! The polar pair (angle, magnitude) is authoritative; the Cartesian
//! components are cached and recomputed whenever either changes.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// 2D vector stored as angle (radians) + magnitude with cached components
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "PolarRepr", into = "PolarRepr")]
pub struct Vector {
    angle: f64,
    magnitude: f64,
    x: f64,
    y: f64,
}

impl Vector {
    pub fn new(angle: f64, magnitude: f64) -> Self {
        let mut v = Self { angle, magnitude, x: 0.0, y: 0.0 };
        v.calculate_components();
        v
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Build from Cartesian components. `atan2(0, 0)` is 0, so the zero
    /// vector comes back with angle 0.
    pub fn from_components(x: f64, y: f64) -> Self {
        let mut angle = y.atan2(x);
        if angle.is_nan() {
            angle = 0.0;
        }
        Self::new(angle, (x * x + y * y).sqrt())
    }

    /// Compass vector. 0 rad is east, angles grow counter-clockwise in 45° steps.
    pub fn toward(direction: Direction, magnitude: f64) -> Self {
        Self::new(direction.angle(), magnitude)
    }

    /// Same as [`Vector::toward`] for a textual label (`"n"`, `"sw"`, ...).
    /// Unknown labels fall back to angle 0 (east).
    pub fn directional(label: &str, magnitude: f64) -> Self {
        let angle = label.parse::<Direction>().map(Direction::angle).unwrap_or(0.0);
        Self::new(angle, magnitude)
    }

    fn calculate_components(&mut self) {
        self.x = self.magnitude * self.angle.cos();
        self.y = self.magnitude * self.angle.sin();
        if self.x.is_nan() {
            self.x = 0.0;
        }
        if self.y.is_nan() {
            self.y = 0.0;
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Rotate in place, keeping the angle in `[0, 2π)`.
    pub fn rotate(&mut self, radians: f64) {
        let angle = (self.angle + radians).rem_euclid(TAU);
        // rem_euclid can round up to TAU for tiny negative sums.
        self.angle = if angle >= TAU { 0.0 } else { angle };
        self.calculate_components();
    }

    /// Multiply the magnitude in place.
    pub fn scale(&mut self, factor: f64) {
        self.magnitude *= factor;
        self.calculate_components();
    }

    /// Scale each component by `factor` and return the resulting vector.
    /// Used by the integrators to turn a rate into a per-interval delta.
    pub fn scaled_components(&self, factor: f64) -> Self {
        Self::from_components(self.x * factor, self.y * factor)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::from_components(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::from_components(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::iter::Sum for Vector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let (x, y) = iter.fold((0.0, 0.0), |(x, y), v| (x + v.x, y + v.y));
        Self::from_components(x, y)
    }
}

#[derive(Serialize, Deserialize)]
struct PolarRepr {
    angle: f64,
    magnitude: f64,
}

impl From<PolarRepr> for Vector {
    fn from(p: PolarRepr) -> Self {
        Vector::new(p.angle, p.magnitude)
    }
}

impl From<Vector> for PolarRepr {
    fn from(v: Vector) -> Self {
        PolarRepr { angle: v.angle, magnitude: v.magnitude }
    }
}

/// The eight compass labels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    E,
    Ne,
    N,
    Nw,
    W,
    Sw,
    S,
    Se,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::E,
        Direction::Ne,
        Direction::N,
        Direction::Nw,
        Direction::W,
        Direction::Sw,
        Direction::S,
        Direction::Se,
    ];

    pub fn angle(self) -> f64 {
        let step = match self {
            Direction::E => 0.0,
            Direction::Ne => 1.0,
            Direction::N => 2.0,
            Direction::Nw => 3.0,
            Direction::W => 4.0,
            Direction::Sw => 5.0,
            Direction::S => 6.0,
            Direction::Se => 7.0,
        };
        step * PI / 4.0
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::E => "e",
            Direction::Ne => "ne",
            Direction::N => "n",
            Direction::Nw => "nw",
            Direction::W => "w",
            Direction::Sw => "sw",
            Direction::S => "s",
            Direction::Se => "se",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .iter()
            .copied()
            .find(|d| d.label() == s)
            .ok_or_else(|| SimError::UnknownDirection(s.to_string()))
    }
}
