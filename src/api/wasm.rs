use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::config::SceneConfig;
use crate::core::{ObjectId, SimError, SystemClock};
use crate::input::KeyBindings;
use crate::kinematics::ForceCoordinator;
use crate::occupancy::OccupancyCoordinator;
use crate::render::CanvasSurface;
use crate::scenes;
use crate::simulation::{RunState, Scheduler, Simulation, TickStats};
use crate::snapshot;

fn js_err(e: SimError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_config(config_json: Option<String>) -> Result<SceneConfig, JsValue> {
    match config_json {
        Some(json) => SceneConfig::from_json(&json).map_err(js_err),
        None => Ok(SceneConfig::default()),
    }
}

fn state_name(state: RunState) -> String {
    match state {
        RunState::Running => "running",
        RunState::Paused => "paused",
        RunState::Stopped => "stopped",
    }
    .to_string()
}

/// Player + wall scene driven by the move queue
#[wasm_bindgen]
pub struct OccupancyWorld {
    scheduler: Scheduler<OccupancyCoordinator<CanvasSurface, SystemClock>>,
    player: ObjectId,
    bindings: KeyBindings,
}

#[wasm_bindgen]
impl OccupancyWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(context: CanvasRenderingContext2d, config_json: Option<String>) -> Result<OccupancyWorld, JsValue> {
        let config = parse_config(config_json)?;
        let scene = scenes::occupancy_demo(CanvasSurface::new(context), SystemClock::new(), &config)
            .map_err(js_err)?;
        Ok(Self {
            scheduler: scene.scheduler,
            player: scene.player,
            bindings: config.bindings,
        })
    }

    /// One loop iteration. Returns false once the loop should end.
    pub fn tick(&mut self) -> Result<bool, JsValue> {
        self.scheduler.tick().map_err(js_err)
    }

    pub fn step(&mut self) -> Result<bool, JsValue> {
        self.scheduler.step().map_err(js_err)
    }

    pub fn play(&mut self) {
        self.scheduler.play();
    }

    pub fn pause(&mut self) {
        self.scheduler.pause();
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        state_name(self.scheduler.state())
    }

    #[wasm_bindgen(getter)]
    pub fn frame_delay_ms(&self) -> f64 {
        self.scheduler.frame_delay().as_secs_f64() * 1000.0
    }

    /// Feed a `KeyboardEvent.key`. Unbound keys are ignored.
    pub fn key_down(&mut self, key: &str) -> Result<(), JsValue> {
        if let Some(intent) = self.bindings.translate(key) {
            self.scheduler.handle_intent(intent, Some(self.player)).map_err(js_err)?;
        }
        Ok(())
    }

    pub fn get_stats(&self) -> TickStats {
        self.scheduler.sim().stats().clone()
    }

    pub fn vector_snapshot_json(&self) -> Result<String, JsValue> {
        snapshot::to_json(&self.scheduler.sim().snapshot()).map_err(js_err)
    }
}

/// Slider / bouncer / centering scene driven by force integration
#[wasm_bindgen]
pub struct ForceWorld {
    scheduler: Scheduler<ForceCoordinator<CanvasSurface, SystemClock>>,
    bindings: KeyBindings,
}

#[wasm_bindgen]
impl ForceWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(context: CanvasRenderingContext2d, config_json: Option<String>) -> Result<ForceWorld, JsValue> {
        let config = parse_config(config_json)?;
        let scheduler = scenes::force_demo(CanvasSurface::new(context), SystemClock::new(), &config)
            .map_err(js_err)?;
        Ok(Self {
            scheduler,
            bindings: config.bindings,
        })
    }

    pub fn tick(&mut self) -> Result<bool, JsValue> {
        self.scheduler.tick().map_err(js_err)
    }

    pub fn step(&mut self) -> Result<bool, JsValue> {
        self.scheduler.step().map_err(js_err)
    }

    pub fn play(&mut self) {
        self.scheduler.play();
    }

    pub fn pause(&mut self) {
        self.scheduler.pause();
    }

    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        state_name(self.scheduler.state())
    }

    #[wasm_bindgen(getter)]
    pub fn frame_delay_ms(&self) -> f64 {
        self.scheduler.frame_delay().as_secs_f64() * 1000.0
    }

    /// Only the quit binding does anything here; there is no move queue.
    pub fn key_down(&mut self, key: &str) -> Result<(), JsValue> {
        if let Some(intent) = self.bindings.translate(key) {
            self.scheduler.handle_intent(intent, None).map_err(js_err)?;
        }
        Ok(())
    }

    pub fn get_stats(&self) -> TickStats {
        self.scheduler.sim().stats().clone()
    }

    pub fn vector_snapshot_json(&self) -> Result<String, JsValue> {
        snapshot::to_json(&self.scheduler.sim().snapshot()).map_err(js_err)
    }
}
