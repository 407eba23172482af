use std::cell::Cell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use js_sys;

/// Wall-clock millisecond reader
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// `Date.now()` in the browser, `Instant` since creation elsewhere
#[derive(Clone, Copy)]
pub struct SystemClock {
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            SystemClock {}
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            SystemClock { start: std::time::Instant::now() }
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Hand-driven clock. Clones share the same reading, so a test can keep one
/// handle while the coordinator owns another.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn advance_ms(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set_ms(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Measures one span of work (used for tick timing)
#[derive(Clone, Copy)]
pub(crate) struct TickTimer {
    clock: SystemClock,
    start_ms: f64,
}

impl TickTimer {
    pub(crate) fn start() -> Self {
        let clock = SystemClock::new();
        TickTimer { start_ms: clock.now_ms(), clock }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.clock.now_ms() - self.start_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_shares_reading() {
        let clock = ManualClock::new(1_000.0);
        let other = clock.clone();
        clock.advance_ms(250.0);
        assert_eq!(other.now_ms(), 1_250.0);
        other.set_ms(5.0);
        assert_eq!(clock.now_ms(), 5.0);
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn tick_timer_never_goes_backwards() {
        let timer = TickTimer::start();
        let first = timer.elapsed_ms();
        assert!(first >= 0.0);
        assert!(timer.elapsed_ms() >= first);
    }
}
