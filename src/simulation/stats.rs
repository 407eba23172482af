use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Per-coordinator tick counters (read by the play bar / info panel)
#[wasm_bindgen]
#[derive(Clone, Debug, Default, Serialize)]
pub struct TickStats {
    pub(crate) ticks: u64,
    pub(crate) last_tick_ms: f64,
    pub(crate) last_interval_s: f64,
    pub(crate) moves_accepted: u32,
    pub(crate) moves_rejected: u32,
    pub(crate) objects: u32,
}

impl TickStats {
    pub(crate) fn reset(&mut self) {
        *self = TickStats::default();
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u64 { self.ticks }
    #[wasm_bindgen(getter)]
    pub fn last_tick_ms(&self) -> f64 { self.last_tick_ms }
    #[wasm_bindgen(getter)]
    pub fn last_interval_s(&self) -> f64 { self.last_interval_s }
    #[wasm_bindgen(getter)]
    pub fn moves_accepted(&self) -> u32 { self.moves_accepted }
    #[wasm_bindgen(getter)]
    pub fn moves_rejected(&self) -> u32 { self.moves_rejected }
    #[wasm_bindgen(getter)]
    pub fn objects(&self) -> u32 { self.objects }
}
