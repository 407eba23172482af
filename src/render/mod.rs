//! Raster surfaces the coordinators paint footprints onto

mod canvas;
mod surface;

pub use canvas::CanvasSurface;
pub use surface::{DrawOp, RasterSurface, RecordingSurface};
