use crate::core::types::SimTime;
use log::debug;
use std::thread;
use std::time::{Duration, Instant};

/// Holds event delivery back until the wall clock catches up with simulation time
///
/// Simulation time zero corresponds to the moment the pacer was started.
#[derive(Debug, Clone, Copy)]
pub struct RealTimePacer {
    started: Instant,
}

impl RealTimePacer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Instant that simulation time zero maps to
    pub fn origin(&self) -> Instant {
        self.started
    }

    /// Wall-clock seconds since the pacer started
    pub fn elapsed(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Block until `time` seconds have passed since start
    ///
    /// Returns immediately for times already in the past. Sleeps can wake
    /// early, so the remaining time is re-checked after each one.
    pub fn wait_until(&self, time: SimTime) {
        let mut now = self.elapsed();
        if time > now {
            debug!("pacing: waiting {:.3}s for t={:.4}", time - now, time);
        }
        while time > now {
            thread::sleep(Duration::from_secs_f64(time - now));
            now = self.elapsed();
        }
    }
}
