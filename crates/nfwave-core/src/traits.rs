//! Collaborator traits consumed by propagators.

use crate::delay::Delay;

/// The population that drives a propagator.
///
/// A population owns a bounded history of its per-node output (firing
/// rate `Q`). Propagators read that history through
/// [`delayed_output`](Population::delayed_output) every step, after asking
/// for enough depth once via [`grow_history`](Population::grow_history).
pub trait Population {
    /// Number of nodes the population spans.
    fn nodes(&self) -> usize;

    /// Present output value, used to seed steady-state initial conditions.
    fn current_output(&self) -> f64;

    /// Ensure the retained history reaches at least `delay` steps back.
    ///
    /// Called once per consumer during configuration.
    fn grow_history(&mut self, delay: Delay);

    /// Per-node output as it was `delay` steps ago.
    ///
    /// Returns `None` if the history does not reach that far back.
    fn delayed_output(&self, delay: Delay) -> Option<&[f64]>;
}
