use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use serde::Serialize;

use crate::core::{ObjectId, SimResult};
use crate::input::InputIntent;

use super::Simulation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Running,
    Paused,
    /// Terminal. A stopped scheduler never ticks again.
    Stopped,
}

/// Cloneable stop request, for event callbacks that do not own the scheduler
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Owns a coordinator and the single source of truth for whether it runs.
///
/// The loop has no catch-up and no frame skipping: it waits `frame_delay`,
/// then ticks once. The delay is a lower bound on frame spacing.
pub struct Scheduler<S: Simulation> {
    sim: S,
    state: RunState,
    frame_delay: Duration,
    stop: StopHandle,
}

impl<S: Simulation> Scheduler<S> {
    /// Starts in `Running`, the way the page starts its loop on load.
    pub fn new(sim: S, frame_delay: Duration) -> Self {
        Self {
            sim,
            state: RunState::Running,
            frame_delay,
            stop: StopHandle::default(),
        }
    }

    pub fn sim(&self) -> &S {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    pub fn into_inner(self) -> S {
        self.sim
    }

    pub fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn state(&self) -> RunState {
        if self.stop.is_stopped() {
            RunState::Stopped
        } else {
            self.state
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == RunState::Running
    }

    pub fn play(&mut self) {
        self.transition(RunState::Running);
    }

    pub fn pause(&mut self) {
        self.transition(RunState::Paused);
    }

    pub fn stop(&mut self) {
        self.stop.stop();
        self.transition(RunState::Stopped);
    }

    fn transition(&mut self, next: RunState) {
        let current = self.state();
        if current == RunState::Stopped || current == next {
            return;
        }
        info!("scheduler {:?} -> {:?}", current, next);
        self.state = next;
    }

    /// One loop iteration: update if running. Returns whether the loop
    /// should keep going. An update error stops the scheduler.
    pub fn tick(&mut self) -> SimResult<bool> {
        match self.state() {
            RunState::Stopped => Ok(false),
            RunState::Paused => Ok(true),
            RunState::Running => {
                self.guarded_update()?;
                Ok(true)
            }
        }
    }

    /// Advance exactly one tick regardless of pause. No-op once stopped.
    pub fn step(&mut self) -> SimResult<bool> {
        if self.state() == RunState::Stopped {
            return Ok(false);
        }
        self.guarded_update()?;
        Ok(true)
    }

    fn guarded_update(&mut self) -> SimResult<()> {
        if let Err(e) = self.sim.update() {
            warn!("update failed, halting loop: {}", e);
            self.stop();
            return Err(e);
        }
        Ok(())
    }

    /// Apply an input intent. Moves go to `target`'s move queue (if the
    /// design has one), quit stops the loop.
    pub fn handle_intent(&mut self, intent: InputIntent, target: Option<ObjectId>) -> SimResult<()> {
        match intent {
            InputIntent::Quit => {
                info!("quit requested");
                self.stop();
            }
            InputIntent::Move { direction, distance } => {
                if let Some(id) = target {
                    self.sim.queue_directional_move(id, direction, distance)?;
                }
            }
        }
        Ok(())
    }

    /// Drive the loop until stopped, sleeping `frame_delay` before each tick.
    pub fn run<F: FnMut(Duration)>(&mut self, mut sleep: F) -> SimResult<()> {
        while self.state() != RunState::Stopped {
            sleep(self.frame_delay);
            if !self.tick()? {
                break;
            }
        }
        Ok(())
    }

    /// Like [`Scheduler::run`], bounded to `max_iterations` loop iterations.
    /// Returns the number of iterations performed.
    pub fn run_for<F: FnMut(Duration)>(&mut self, max_iterations: u64, mut sleep: F) -> SimResult<u64> {
        let mut done = 0;
        while done < max_iterations && self.state() != RunState::Stopped {
            sleep(self.frame_delay);
            if !self.tick()? {
                break;
            }
            done += 1;
        }
        Ok(done)
    }
}
