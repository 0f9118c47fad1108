//! Typed configuration for [`WavePropagator`](crate::WavePropagator).

use nfwave_core::{ConfigError, Params};
use std::fmt;
use std::str::FromStr;

/// How the field is seeded at configuration time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InitialCondition {
    /// Seed every node with the population's present output.
    #[default]
    Steady,
    /// Seed every node with a fixed value.
    Constant(f64),
}

impl FromStr for InitialCondition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "Steady" {
            return Ok(Self::Steady);
        }
        s.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Self::Constant)
            .ok_or_else(|| ConfigError::InvalidParam {
                name: WaveConfig::PHI.into(),
                value: s.into(),
                reason: "expected 'Steady' or a finite number".into(),
            })
    }
}

impl fmt::Display for InitialCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steady => f.write_str("Steady"),
            Self::Constant(v) => write!(f, "{v}"),
        }
    }
}

/// Discretisation and physical parameters of the damped wave equation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveConfig {
    /// Spatial step between neighbouring nodes.
    pub deltax: f64,
    /// Delay applied to the driving signal, in seconds.
    pub tau: f64,
    /// Characteristic axonal range.
    pub range: f64,
    /// Damping rate.
    pub gamma: f64,
    /// Initial field.
    pub initial: InitialCondition,
}

impl WaveConfig {
    /// Parameter name of the spatial step.
    pub const DELTAX: &'static str = "Deltax";
    /// Parameter name of the delay.
    pub const TAU: &'static str = "Tau";
    /// Parameter name of the range.
    pub const RANGE: &'static str = "Range";
    /// Parameter name of the damping rate.
    pub const GAMMA: &'static str = "gamma";
    /// Parameter name of the optional initial condition.
    pub const PHI: &'static str = "phi";

    /// Config with no delay and a steady-state initial field.
    pub fn new(deltax: f64, range: f64, gamma: f64) -> Self {
        Self {
            deltax,
            tau: 0.0,
            range,
            gamma,
            initial: InitialCondition::Steady,
        }
    }

    /// Set the delay in seconds.
    pub fn tau(mut self, tau: f64) -> Self {
        self.tau = tau;
        self
    }

    /// Set the initial condition.
    pub fn initial(mut self, initial: InitialCondition) -> Self {
        self.initial = initial;
        self
    }

    /// Read and validate from named parameters.
    ///
    /// `phi` is optional and defaults to [`InitialCondition::Steady`].
    pub fn from_params(params: &Params) -> Result<Self, ConfigError> {
        let initial = match params.optional(Self::PHI) {
            Some(raw) => raw.parse()?,
            None => InitialCondition::Steady,
        };
        let config = Self {
            deltax: params.required(Self::DELTAX)?,
            tau: params.required(Self::TAU)?,
            range: params.required(Self::RANGE)?,
            gamma: params.required(Self::GAMMA)?,
            initial,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check parameter domains.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidParam`] if:
    /// - `deltax` is not finite and > 0
    /// - `range` or `gamma` is negative or not finite
    /// - `tau` is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check = |name: &str, value: f64, ok: bool, expect: &str| {
            if ok {
                Ok(())
            } else {
                Err(ConfigError::InvalidParam {
                    name: name.into(),
                    value: value.to_string(),
                    reason: format!("must be finite and {expect}"),
                })
            }
        };
        check(
            Self::DELTAX,
            self.deltax,
            self.deltax.is_finite() && self.deltax > 0.0,
            "> 0",
        )?;
        check(
            Self::RANGE,
            self.range,
            self.range.is_finite() && self.range >= 0.0,
            ">= 0",
        )?;
        check(
            Self::GAMMA,
            self.gamma,
            self.gamma.is_finite() && self.gamma >= 0.0,
            ">= 0",
        )?;
        check(
            Self::TAU,
            self.tau,
            self.tau.is_finite() && self.tau >= 0.0,
            ">= 0",
        )
    }
}
