use crate::config::ArenaConfig;

/// Pixel surface with top-left origin, y growing downward
pub trait RasterSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn set_fill_style(&mut self, style: &str);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

/// One recorded draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill { x: f64, y: f64, width: f64, height: f64, style: String },
    Clear { x: f64, y: f64, width: f64, height: f64 },
}

/// Headless surface that records draw calls instead of rasterizing
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    fill_style: String,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fill_style: String::from("black"),
            ops: Vec::new(),
        }
    }

    /// Surface sized from the scene's arena
    pub fn from_arena(arena: &ArenaConfig) -> Self {
        Self::new(arena.width, arena.height)
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Hand the recorded ops to the caller, leaving an empty log
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Last fill recorded at exactly (x, y), if any
    pub fn last_fill_at(&self, x: f64, y: f64) -> Option<&DrawOp> {
        self.ops.iter().rev().find(|op| {
            matches!(op, DrawOp::Fill { x: fx, y: fy, .. } if *fx == x && *fy == y)
        })
    }
}

impl RasterSurface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn set_fill_style(&mut self, style: &str) {
        if self.fill_style != style {
            self.fill_style.clear();
            self.fill_style.push_str(style);
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Fill {
            x,
            y,
            width,
            height,
            style: self.fill_style.clone(),
        });
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { x, y, width, height });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_sets_surface_size() {
        let surface = RecordingSurface::from_arena(&ArenaConfig { width: 640.0, height: 480.0 });
        assert_eq!((surface.width(), surface.height()), (640.0, 480.0));
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn take_ops_leaves_an_empty_log() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.fill_rect(1.0, 2.0, 3.0, 4.0);
        surface.clear_rect(0.0, 0.0, 5.0, 5.0);
        let taken = surface.take_ops();
        assert_eq!(taken.len(), 2);
        assert!(surface.ops().is_empty());
        surface.fill_rect(1.0, 1.0, 1.0, 1.0);
        assert_eq!(surface.ops().len(), 1);
    }
}
