//! Integration coefficients of the damped wave scheme.
//!
//! The scheme is a compact explicit update of
//!
//! ```text
//! (1/γ² ∂²/∂t² + 2/γ ∂/∂t + 1 - r² ∇²) φ = Q
//! ```
//!
//! on a nine-point stencil. With `p2 = (Δt·r·γ/Δx)²`, `e1 = e^(-Δt·γ)` and
//! `e2 = e^(-2Δt·γ)`:
//!
//! ```text
//! drive = Δt²γ²/12 · ((10 - 3p2)·e1·Q₀ + Q + e2·Q₁ + e1·p2/2·(ΣQ₀ + ½·ΣdiagQ₀))
//! φ     = (2 - 3p2)·e1·φ₀ + e1·p2/2·(Σφ₀ + ½·Σdiagφ₀) - e2·φ₁ + drive
//! ```
//!
//! where subscript 0 is the previous step and 1 the one before it.

use nfwave_core::ConfigError;

/// Largest Courant number `γ·r·Δt/Δx` for which the scheme is stable.
pub const COURANT_LIMIT: f64 = 1.41;

/// Coefficients derived once from the discretisation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveCoefficients {
    /// `Δt²/12`.
    pub dt2on12: f64,
    /// `Δt²γ²/12`, the drive prefactor.
    pub dfact: f64,
    /// `(Δt·r·γ/Δx)²`.
    pub p2: f64,
    /// `10 - 3·p2`.
    pub tenminus3p2: f64,
    /// `2 - 3·p2`.
    pub twominus3p2: f64,
    /// `e^(-Δt·γ)`.
    pub exp1: f64,
    /// `e^(-2Δt·γ)`.
    pub exp2: f64,
    /// `γ·r·Δt/Δx`.
    pub courant: f64,
}

impl WaveCoefficients {
    /// Derive coefficients and enforce the Courant bound.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidParam`] if `deltat` or `deltax` is not
    ///   finite and > 0
    /// - [`ConfigError::CourantViolated`] if the Courant number exceeds
    ///   [`COURANT_LIMIT`]
    pub fn derive(deltat: f64, deltax: f64, range: f64, gamma: f64) -> Result<Self, ConfigError> {
        for (name, value) in [("deltat", deltat), ("Deltax", deltax)] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(ConfigError::InvalidParam {
                    name: name.into(),
                    value: value.to_string(),
                    reason: "must be finite and > 0".into(),
                });
            }
        }

        let courant = Self::courant_number(deltat, deltax, range, gamma);
        if !(courant <= COURANT_LIMIT) {
            return Err(ConfigError::CourantViolated {
                courant,
                limit: COURANT_LIMIT,
            });
        }

        let dt2on12 = deltat * deltat / 12.0;
        let dt2ondx2 = deltat * deltat / deltax / deltax;
        let p2 = dt2ondx2 * range * range * gamma * gamma;
        Ok(Self {
            dt2on12,
            dfact: dt2on12 * gamma * gamma,
            p2,
            tenminus3p2: 10.0 - 3.0 * p2,
            twominus3p2: 2.0 - 3.0 * p2,
            exp1: (-deltat * gamma).exp(),
            exp2: (-2.0 * deltat * gamma).exp(),
            courant,
        })
    }

    /// `γ·r·Δt/Δx`.
    pub fn courant_number(deltat: f64, deltax: f64, range: f64, gamma: f64) -> f64 {
        gamma * range * deltat / deltax
    }

    /// Largest `Δt` satisfying the Courant bound, if the bound constrains it.
    pub fn max_stable_dt(deltax: f64, range: f64, gamma: f64) -> Option<f64> {
        let speed = gamma * range;
        (speed > 0.0).then(|| COURANT_LIMIT * deltax / speed)
    }

    /// Source term at one node.
    ///
    /// `q0` and `q1` are the centre values of the previous and older drive
    /// histories, `q` the freshly delayed population output, `sum_q` and
    /// `diag_sum_q` the orthogonal and diagonal sums of the previous drive.
    #[inline]
    pub fn drive(&self, q0: f64, q: f64, q1: f64, sum_q: f64, diag_sum_q: f64) -> f64 {
        self.dfact
            * (self.tenminus3p2 * self.exp1 * q0
                + q
                + self.exp2 * q1
                + self.exp1 * 0.5 * self.p2 * (sum_q + 0.5 * diag_sum_q))
    }

    /// New field value at one node.
    #[inline]
    pub fn update(&self, p0: f64, p1: f64, sum_p: f64, diag_sum_p: f64, drive: f64) -> f64 {
        self.twominus3p2 * self.exp1 * p0 + self.exp1 * 0.5 * self.p2 * (sum_p + 0.5 * diag_sum_p)
            - self.exp2 * p1
            + drive
    }
}
