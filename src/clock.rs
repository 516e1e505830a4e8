//! Fixed-rate frame clock for the native driver

use std::time::{Duration, Instant};

use crate::consts::FPS;

/// Paces the frame loop at a fixed rate.
///
/// When a frame overruns, the schedule restarts from now instead of running
/// catch-up frames back to back.
#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
    frames: u64,
    overruns: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let period = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self {
            period,
            next: Instant::now() + period,
            frames: 0,
            overruns: 0,
        }
    }

    /// Block until the next frame is due
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            self.overruns += 1;
            self.next = now + self.period;
        }
        self.frames += 1;
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames that started late
    pub fn overruns(&self) -> u64 {
        self.overruns
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(FPS)
    }
}
