//! Control-loop constants.

use std::time::Duration;

/// Fixed gains and rates for the coordination controller.
///
/// Set once at startup and never changed for the life of the process.  The
/// defaults reproduce the tuning the controller ships with: a 1.2 m
/// repulsion radius with inverse-square falloff, a weak harmonic attractor,
/// and a 100 Hz loop.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlParameters {
    /// Repulsion gain.
    pub repulsion_gain: f64,

    /// Pairwise planar distance at or below which repulsion applies.
    pub repulsion_radius: f64,

    /// Attraction gain.
    pub attraction_gain: f64,

    /// Floor applied to pairwise planar distances before the repulsion
    /// falloff, preventing the inverse-square term from blowing up as two
    /// bodies approach coincidence.
    pub min_distance: f64,

    /// Target control rate in ticks per second.
    pub loop_rate_hz: f64,
}

impl Default for ControlParameters {
    fn default() -> Self {
        Self {
            repulsion_gain:   2.0,
            repulsion_radius: 1.2,
            attraction_gain:  0.15,
            min_distance:     1.0,
            loop_rate_hz:     100.0,
        }
    }
}

impl ControlParameters {
    /// Wall-clock duration of one tick at `loop_rate_hz`.
    #[inline]
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.loop_rate_hz)
    }
}
