//! Host lifecycle capability.
//!
//! The host hands the scene something it can pause and resume when the app
//! goes to the background. `FrameClock` is the implementation both frontends
//! use; tests supply their own.

use instant::Instant;
use std::time::Duration;

pub trait Ticker {
    fn pause(&mut self);
    fn resume(&mut self);
    fn is_paused(&self) -> bool;
}

/// Wall clock measured from construction, with a pause flag.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    paused: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            paused: false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Seconds since the clock started.
    pub fn now_seconds(&self) -> f64 {
        self.elapsed().as_millis() as f64 * 0.001
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticker for FrameClock {
    fn pause(&mut self) {
        if !self.paused {
            log::info!("[ticker] paused");
        }
        self.paused = true;
    }

    fn resume(&mut self) {
        if self.paused {
            log::info!("[ticker] resumed");
        }
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
