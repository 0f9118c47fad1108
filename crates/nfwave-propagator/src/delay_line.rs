//! Propagator with no spatial coupling: `phi` is the delayed drive.
//!
//! Useful where a projection between populations only needs the axonal
//! delay and no wave dynamics, and as a reference when checking a
//! population's history bookkeeping.
//!
//! # Construction
//!
//! ```
//! use nfwave_propagator::{DelayLine, Propagator};
//!
//! let prop = DelayLine::new(16, 1e-4);
//! assert_eq!(prop.name(), "DelayLine");
//! ```

use crate::config::WaveConfig;
use crate::propagator::Propagator;
use nfwave_core::{ConfigError, Delay, Params, Population, PreconditionError};
use tracing::info;

/// Copies the population output, delayed by `Tau`, into `phi` each step.
#[derive(Debug)]
pub struct DelayLine {
    nodes: usize,
    deltat: f64,
    delay: Option<Delay>,
    phi: Vec<f64>,
}

impl DelayLine {
    /// Create an unconfigured delay line over `nodes` nodes.
    pub fn new(nodes: usize, deltat: f64) -> Self {
        Self {
            nodes,
            deltat,
            delay: None,
            phi: Vec::new(),
        }
    }

    /// Delay in steps, once configured.
    pub fn delay(&self) -> Option<Delay> {
        self.delay
    }
}

impl Propagator for DelayLine {
    fn name(&self) -> &str {
        "DelayLine"
    }

    fn configure(
        &mut self,
        params: &Params,
        population: &mut dyn Population,
    ) -> Result<(), ConfigError> {
        if population.nodes() != self.nodes {
            return Err(PreconditionError::FieldLength {
                expected: self.nodes,
                got: population.nodes(),
            }
            .into());
        }
        let tau: f64 = params.required(WaveConfig::TAU)?;
        let delay = Delay::from_seconds(tau, self.deltat)?;
        population.grow_history(delay);

        self.phi = vec![population.current_output(); self.nodes];
        self.delay = Some(delay);
        info!(nodes = self.nodes, delay_steps = delay.steps(), "delay line configured");
        Ok(())
    }

    fn step(&mut self, population: &dyn Population) -> Result<(), PreconditionError> {
        let delay = self.delay.ok_or(PreconditionError::NotConfigured)?;
        let q = population
            .delayed_output(delay)
            .ok_or(PreconditionError::HistoryUnavailable {
                steps: delay.steps(),
            })?;
        if q.len() != self.nodes {
            return Err(PreconditionError::FieldLength {
                expected: self.nodes,
                got: q.len(),
            });
        }
        self.phi.copy_from_slice(q);
        Ok(())
    }

    fn phi(&self) -> &[f64] {
        &self.phi
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nfwave_test_utils::HistoryPopulation;

    #[test]
    fn step_before_configure_fails() {
        let mut prop = DelayLine::new(3, 1e-4);
        let pop = HistoryPopulation::new(3, 0.0);
        assert_eq!(prop.step(&pop), Err(PreconditionError::NotConfigured));
    }

    #[test]
    fn missing_tau_rejected() {
        let mut prop = DelayLine::new(3, 1e-4);
        let mut pop = HistoryPopulation::new(3, 0.0);
        assert_eq!(
            prop.configure(&Params::new(), &mut pop),
            Err(ConfigError::MissingParam { name: "Tau".into() })
        );
    }

    #[test]
    fn population_size_mismatch_reports_both_counts() {
        let mut prop = DelayLine::new(3, 1e-4);
        let mut pop = HistoryPopulation::new(5, 0.0);
        let err = prop
            .configure(&Params::new().with("Tau", 0.0), &mut pop)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Precondition(PreconditionError::FieldLength {
                expected: 3,
                got: 5
            })
        );
        assert!(err.to_string().contains("5 values, expected 3"));
        assert!(prop.delay().is_none());
    }

    #[test]
    fn copies_frame_from_delay_steps_ago() {
        let mut prop = DelayLine::new(2, 1e-4);
        let mut pop = HistoryPopulation::new(2, 0.5);
        prop.configure(&Params::new().with("Tau", 2e-4), &mut pop).unwrap();
        assert_eq!(prop.delay(), Some(Delay(2)));
        assert_eq!(prop.phi(), &[0.5, 0.5]);

        for t in 1..=4 {
            pop.push(vec![t as f64, -(t as f64)]).unwrap();
            prop.step(&pop).unwrap();
            let lagged = (t as f64 - 2.0).max(0.0);
            let expected = if t > 2 { [lagged, -lagged] } else { [0.5, 0.5] };
            assert_eq!(prop.phi(), &expected);
        }
    }
}
