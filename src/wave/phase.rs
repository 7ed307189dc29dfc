//! Looping phase driver for the wave animation

use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Sweeps the phase linearly from 0 to 2π once per period, then restarts
#[derive(Clone, Debug)]
pub struct PhaseClock {
    period: Duration,
    started: Instant,
}

impl PhaseClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            started: Instant::now(),
        }
    }

    pub fn from_secs(period_secs: f32) -> Self {
        if !period_secs.is_finite() || period_secs <= 0.0 {
            return Self::new(Duration::ZERO);
        }
        Self::new(Duration::from_secs_f32(period_secs))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Phase in radians after `elapsed` time
    pub fn phase_at(&self, elapsed: Duration) -> f32 {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return 0.0;
        }
        let t = elapsed.as_secs_f64() % period;
        (t / period) as f32 * TAU
    }

    /// Phase right now
    pub fn phase(&self) -> f32 {
        self.phase_at(self.started.elapsed())
    }
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}
