//! Wall-clock pacing for the fixed-rate loop.

use std::time::{Duration, Instant};

/// Paces ticks at a fixed period and measures the elapsed time between tick
/// starts.
///
/// [`wait`][TickPacer::wait] sleeps out whatever remains of the current
/// period, then returns the measured `dt` in seconds.  A tick that overruns
/// its period starts the next one immediately with the genuinely elapsed
/// time — overruns are absorbed, not compensated.
pub struct TickPacer {
    period: Duration,
    last:   Instant,
}

impl TickPacer {
    /// Pacer for `rate_hz` ticks per second, anchored at the current
    /// instant.
    pub fn new(rate_hz: f64) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / rate_hz),
            last:   Instant::now(),
        }
    }

    /// Block until the next tick boundary; returns seconds elapsed since
    /// the previous tick start.
    pub fn wait(&mut self) -> f64 {
        let elapsed = self.last.elapsed();
        if elapsed < self.period {
            std::thread::sleep(self.period - elapsed);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        dt
    }
}
