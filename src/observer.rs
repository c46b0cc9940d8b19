//! Step observer trait for monitoring simulation progress.

/// Trait for observing the phases of a simulation tick.
///
/// Implement this trait to monitor the simulation (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called when a requested flap perturbation has been applied.
    fn on_flap(&mut self) {}

    /// Called after all free particles have been advanced.
    fn on_integrate(&mut self) {}

    /// Called after the stretch-constraint pass over all springs.
    fn on_constrain(&mut self) {}

    /// Called when a simulation tick is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
