#[cfg(test)]
#[path = "../../tests/unit/utils/timing_test.rs"]
mod timing_test;

use std::time::{Duration, Instant};

/// Implements performance timer functionality on top of monotonic clock.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns time passed since timer start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Runs action and returns its result together with duration of the run.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let timer = Timer::start();
        let result = action();

        (result, timer.elapsed())
    }
}
