//! Axonal delay expressed as a whole number of time steps.

use crate::error::ConfigError;
use std::fmt;

/// Relative tolerance when checking that a delay is a multiple of `deltat`.
const STEP_TOLERANCE: f64 = 1e-6;

/// A delay of `n` integration steps.
///
/// Configuration supplies delays in seconds (`Tau`); propagators and
/// populations work in steps so that history lookups are exact indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Delay(pub usize);

impl Delay {
    /// No delay: the population's most recent output.
    pub const ZERO: Delay = Delay(0);

    /// Convert a delay in seconds to steps of length `deltat`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParam`] (named `Tau`) if `tau` is
    /// negative or not finite, if `deltat` is not strictly positive, if
    /// `tau` is not a whole multiple of `deltat`, or if the step count does
    /// not fit in `usize`.
    pub fn from_seconds(tau: f64, deltat: f64) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidParam {
            name: "Tau".into(),
            value: tau.to_string(),
            reason,
        };
        if !tau.is_finite() || tau < 0.0 {
            return Err(invalid("must be finite and >= 0".into()));
        }
        if !(deltat > 0.0) || !deltat.is_finite() {
            return Err(invalid(format!("deltat must be finite and > 0, got {deltat}")));
        }
        let ratio = tau / deltat;
        let steps = ratio.round();
        if (ratio - steps).abs() > STEP_TOLERANCE * ratio.max(1.0) {
            return Err(invalid(format!("not a multiple of deltat ({deltat})")));
        }
        // usize::MAX as f64 rounds up to 2^64, which no usize can hold
        if steps >= usize::MAX as f64 {
            return Err(invalid(format!(
                "{steps} steps of deltat ({deltat}) exceed the addressable history"
            )));
        }
        Ok(Delay(steps as usize))
    }

    /// Number of steps.
    pub fn steps(self) -> usize {
        self.0
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} steps", self.0)
    }
}
