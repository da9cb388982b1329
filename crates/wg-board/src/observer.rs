//! Observer trait for progress reporting during multi-step runs.

use wg_core::Step;

/// Callbacks invoked by [`Board::run_steps`][crate::Board::run_steps].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — mass printer
///
/// ```rust,ignore
/// struct MassPrinter;
///
/// impl BoardObserver for MassPrinter {
///     fn on_step_end(&mut self, step: Step, state: &[f64]) {
///         println!("{step}: {state:?}");
///     }
/// }
/// ```
pub trait BoardObserver {
    /// Called before step `step` is applied.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called after a step, with the new step count and the state vector it
    /// produced.
    fn on_step_end(&mut self, _step: Step, _state: &[f64]) {}

    /// Called once when the run finishes.
    fn on_run_end(&mut self, _final_step: Step) {}
}

/// A [`BoardObserver`] that does nothing.
pub struct NoopObserver;

impl BoardObserver for NoopObserver {}
