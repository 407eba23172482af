use crate::core::{Colors, Footprint, Layer, ObjectId, Rectangle};
use crate::simulation::{SimulatedObject, Tick};

/// Rectangle with an occupancy footprint, moved only through the
/// coordinator's move queue.
#[derive(Clone, Debug, PartialEq)]
pub struct GameObject {
    pub rect: Rectangle,
    /// Passable objects never block movers
    pub passable: bool,
    pub(crate) id: Option<ObjectId>,
    pub(crate) last_tick_ms: Option<f64>,
}

impl GameObject {
    pub fn new(x: f64, y: f64, width: f64, height: f64, z: Layer, passable: bool, colors: Colors) -> Self {
        Self {
            rect: Rectangle::new(x, y, width, height, z, colors),
            passable,
            id: None,
            last_tick_ms: None,
        }
    }

    /// Id assigned at registration, `None` until then
    pub fn id(&self) -> Option<ObjectId> {
        self.id
    }

    /// Clock reading of the last tick this object saw
    pub fn last_tick_ms(&self) -> Option<f64> {
        self.last_tick_ms
    }

    pub fn x(&self) -> f64 { self.rect.x() }
    pub fn y(&self) -> f64 { self.rect.y() }
    pub fn right(&self) -> f64 { self.rect.right() }
    pub fn bottom(&self) -> f64 { self.rect.bottom() }
    pub fn layer(&self) -> Layer { self.rect.z() }

    pub(crate) fn translate(&mut self, dx: f64, dy: f64) {
        self.rect.origin.x += dx;
        self.rect.origin.y += dy;
    }
}

impl SimulatedObject for GameObject {
    fn advance(&mut self, tick: Tick) {
        self.last_tick_ms = Some(tick.now_ms);
    }

    fn current_footprint(&self) -> Footprint {
        self.rect.footprint()
    }
}
