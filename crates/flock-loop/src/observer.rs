//! Loop observer trait for progress reporting and fault visibility.

use flock_core::{AgentId, Tick};

/// Callbacks invoked by [`ControlLoop::run`][crate::ControlLoop::run] at
/// key points in the tick cycle.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl LoopObserver for ProgressPrinter {
///     fn on_commands(&mut self, tick: Tick, issued: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: issued {issued} commands");
///         }
///     }
/// }
/// ```
pub trait LoopObserver {
    /// Called at the very start of each tick, before the snapshot poll.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called when a tick completes as a pure idle pass (controller Idle).
    fn on_idle(&mut self, _tick: Tick) {}

    /// Called at the end of each active tick with the number of commands
    /// issued to the sink.
    fn on_commands(&mut self, _tick: Tick, _issued: usize) {}

    /// Called for each command the sink failed or refused.  The tick
    /// continues; the command is not retried until the next period computes
    /// a fresh one.
    fn on_actuation_failure(&mut self, _id: &AgentId, _message: &str) {}

    /// Called once when a paced run exits.
    fn on_loop_end(&mut self, _final_tick: Tick) {}
}

/// A [`LoopObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl LoopObserver for NoopObserver {}
