use web_sys::CanvasRenderingContext2d;

use super::RasterSurface;

/// Browser canvas 2D context. Size is read from the backing canvas on
/// every call, so a resized canvas is picked up on the next tick.
pub struct CanvasSurface {
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }
}

impl RasterSurface for CanvasSurface {
    fn width(&self) -> f64 {
        self.context.canvas().map(|c| c.width() as f64).unwrap_or(0.0)
    }

    fn height(&self) -> f64 {
        self.context.canvas().map(|c| c.height() as f64).unwrap_or(0.0)
    }

    fn set_fill_style(&mut self, style: &str) {
        self.context.set_fill_style_str(style);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.fill_rect(x, y, width, height);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.clear_rect(x, y, width, height);
    }
}
