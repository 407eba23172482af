//! Math and plumbing shared by both coordinators

pub mod clock;
pub mod error;
pub mod geometry;
pub mod vector;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{SimError, SimResult};
pub use geometry::{Colors, Footprint, Layer, Point, Rectangle, RenderShape};
pub use vector::{Direction, Vector};

/// Registration handle handed out by a coordinator (index in registration order)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
