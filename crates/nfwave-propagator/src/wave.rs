//! Damped wave-equation propagator on a periodic lattice.
//!
//! Advances `phi` with the explicit nine-point scheme described in
//! [`coefficients`](crate::coefficients). The update at each node reads the
//! last two committed field and drive snapshots through four torus
//! [`Stencil`]s, all addressed by one [`Cursor`] advanced in lock-step.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──► configure() ──► step() ──► step() ──► ...
//!              │ Courant / topology / parameter errors: never steppable
//! ```
//!
//! Stability is checked once in `configure()`; `step()` does no runtime
//! stability check.

use crate::coefficients::WaveCoefficients;
use crate::config::{InitialCondition, WaveConfig};
use crate::propagator::{Propagator, Restartable};
use nfwave_core::{ConfigError, Delay, Params, Population, PreconditionError};
use nfwave_space::{Cursor, LatticeShape, Stencil, Topology};
use tracing::{debug, info, warn};

/// Snapshot of a [`WavePropagator`]'s state, independent of any cursor.
///
/// History index 0 is the most recent committed step, index 1 the one
/// before it.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveCheckpoint {
    /// Current field.
    pub phi: Vec<f64>,
    /// Field history.
    pub field_history: [Vec<f64>; 2],
    /// Drive history.
    pub drive_history: [Vec<f64>; 2],
}

/// State that exists only once configuration has succeeded.
#[derive(Debug)]
struct Configured {
    config: WaveConfig,
    coeffs: WaveCoefficients,
    delay: Delay,
    oldp: [Vec<f64>; 2],
    oldq: [Vec<f64>; 2],
    p_stencils: [Stencil; 2],
    q_stencils: [Stencil; 2],
}

impl Configured {
    fn reassign(&mut self) -> Result<(), PreconditionError> {
        for (stencil, field) in self.p_stencils.iter_mut().zip(&self.oldp) {
            stencil.assign(field)?;
        }
        for (stencil, field) in self.q_stencils.iter_mut().zip(&self.oldq) {
            stencil.assign(field)?;
        }
        Ok(())
    }
}

/// A damped-wave propagator driven by a delayed population output.
///
/// # Examples
///
/// ```
/// use nfwave_core::{Delay, Params, Population};
/// use nfwave_propagator::{Propagator, WavePropagator};
/// use nfwave_space::{LatticeShape, Topology};
///
/// struct Quiet(Vec<f64>);
///
/// impl Population for Quiet {
///     fn nodes(&self) -> usize { self.0.len() }
///     fn current_output(&self) -> f64 { 0.0 }
///     fn grow_history(&mut self, _delay: Delay) {}
///     fn delayed_output(&self, _delay: Delay) -> Option<&[f64]> { Some(&self.0) }
/// }
///
/// let shape = LatticeShape::grid(4, 4).unwrap();
/// let mut wave = WavePropagator::new(shape, 1e-4, Topology::Torus);
/// let mut quiet = Quiet(vec![0.0; 16]);
/// let params = Params::new()
///     .with("Deltax", 0.0035)
///     .with("Tau", 0.0)
///     .with("Range", 0.086)
///     .with("gamma", 116.0);
///
/// wave.configure(&params, &mut quiet).unwrap();
/// wave.step(&quiet).unwrap();
/// assert!(wave.phi().iter().all(|&v| v == 0.0));
/// ```
#[derive(Debug)]
pub struct WavePropagator {
    shape: LatticeShape,
    deltat: f64,
    topology: Topology,
    phi: Vec<f64>,
    state: Option<Configured>,
}

impl WavePropagator {
    /// Create an unconfigured propagator with time step `deltat`.
    pub fn new(shape: LatticeShape, deltat: f64, topology: Topology) -> Self {
        Self {
            shape,
            deltat,
            topology,
            phi: Vec::new(),
            state: None,
        }
    }

    /// Configure from an already-typed [`WaveConfig`].
    ///
    /// Validation happens before anything is mutated: on error the
    /// propagator and the population are left exactly as they were.
    pub fn configure_with(
        &mut self,
        config: WaveConfig,
        population: &mut dyn Population,
    ) -> Result<(), ConfigError> {
        let nodes = self.shape.nodes();
        if population.nodes() != nodes {
            return Err(ConfigError::InvalidShape {
                nodes: population.nodes(),
                longside: self.shape.longside(),
                reason: "population node count differs from the lattice",
            });
        }
        config.validate()?;

        let coeffs =
            match WaveCoefficients::derive(self.deltat, config.deltax, config.range, config.gamma)
            {
                Ok(c) => c,
                Err(e) => {
                    warn!(error = %e, "rejecting wave configuration");
                    return Err(e);
                }
            };
        let delay = Delay::from_seconds(config.tau, self.deltat)?;

        let mut p_stencils = [
            Stencil::new(self.shape, self.topology)?,
            Stencil::new(self.shape, self.topology)?,
        ];
        let mut q_stencils = [
            Stencil::new(self.shape, self.topology)?,
            Stencil::new(self.shape, self.topology)?,
        ];

        population.grow_history(delay);
        let q = population.current_output();
        let p = match config.initial {
            InitialCondition::Steady => q,
            InitialCondition::Constant(v) => v,
        };

        let oldp = [vec![p; nodes], vec![p; nodes]];
        let oldq = [vec![q; nodes], vec![q; nodes]];
        for (stencil, field) in p_stencils.iter_mut().zip(&oldp) {
            stencil.assign(field)?;
        }
        for (stencil, field) in q_stencils.iter_mut().zip(&oldq) {
            stencil.assign(field)?;
        }

        debug!(?coeffs, "derived wave coefficients");
        info!(
            nodes,
            longside = self.shape.longside(),
            courant = coeffs.courant,
            delay_steps = delay.steps(),
            initial = %config.initial,
            "wave propagator configured"
        );

        self.phi = vec![p; nodes];
        self.state = Some(Configured {
            config,
            coeffs,
            delay,
            oldp,
            oldq,
            p_stencils,
            q_stencils,
        });
        Ok(())
    }

    /// Whether `configure` has succeeded.
    pub fn is_configured(&self) -> bool {
        self.state.is_some()
    }

    /// Lattice shape.
    pub fn shape(&self) -> LatticeShape {
        self.shape
    }

    /// Time step.
    pub fn deltat(&self) -> f64 {
        self.deltat
    }

    /// Boundary topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Active configuration.
    pub fn config(&self) -> Option<&WaveConfig> {
        self.state.as_ref().map(|s| &s.config)
    }

    /// Integration coefficients, once configured.
    pub fn coefficients(&self) -> Option<&WaveCoefficients> {
        self.state.as_ref().map(|s| &s.coeffs)
    }

    /// Drive delay, once configured.
    pub fn delay(&self) -> Option<Delay> {
        self.state.as_ref().map(|s| s.delay)
    }

    /// Committed field history. Lag 0 is the last committed field (equal to
    /// `phi()` after a step), lag 1 the one before it.
    pub fn field_history(&self, lag: usize) -> Option<&[f64]> {
        self.state
            .as_ref()
            .and_then(|s| s.oldp.get(lag))
            .map(Vec::as_slice)
    }

    /// Committed drive history. Lag 0 is the drive consumed by the last
    /// step, lag 1 the one before it.
    pub fn drive_history(&self, lag: usize) -> Option<&[f64]> {
        self.state
            .as_ref()
            .and_then(|s| s.oldq.get(lag))
            .map(Vec::as_slice)
    }
}

impl Propagator for WavePropagator {
    fn name(&self) -> &str {
        "Wave"
    }

    fn configure(
        &mut self,
        params: &Params,
        population: &mut dyn Population,
    ) -> Result<(), ConfigError> {
        let config = WaveConfig::from_params(params)?;
        self.configure_with(config, population)
    }

    fn step(&mut self, population: &dyn Population) -> Result<(), PreconditionError> {
        let state = self
            .state
            .as_mut()
            .ok_or(PreconditionError::NotConfigured)?;
        let q_now = population
            .delayed_output(state.delay)
            .ok_or(PreconditionError::HistoryUnavailable {
                steps: state.delay.steps(),
            })?;
        self.shape.check_field(q_now)?;

        let coeffs = state.coeffs;
        let [p0, p1] = &state.p_stencils;
        let [q0, q1] = &state.q_stencils;
        let mut cursor = Cursor::origin(self.shape);
        for (phi, &q) in self.phi.iter_mut().zip(q_now) {
            let (wp0, wp1) = (p0.window(&cursor), p1.window(&cursor));
            let (wq0, wq1) = (q0.window(&cursor), q1.window(&cursor));
            let drive = coeffs.drive(
                wq0.c(),
                q,
                wq1.c(),
                wq0.orthogonal_sum(),
                wq0.diagonal_sum(),
            );
            *phi = coeffs.update(
                wp0.c(),
                wp1.c(),
                wp0.orthogonal_sum(),
                wp0.diagonal_sum(),
                drive,
            );
            cursor.advance();
        }

        state.oldp.swap(0, 1);
        state.oldp[0].copy_from_slice(&self.phi);
        state.oldq.swap(0, 1);
        state.oldq[0].copy_from_slice(q_now);
        state.reassign()
    }

    fn phi(&self) -> &[f64] {
        &self.phi
    }

    fn max_dt(&self) -> Option<f64> {
        let config = &self.state.as_ref()?.config;
        WaveCoefficients::max_stable_dt(config.deltax, config.range, config.gamma)
    }
}

impl Restartable for WavePropagator {
    type State = WaveCheckpoint;

    fn dump(&self) -> Result<WaveCheckpoint, PreconditionError> {
        let state = self
            .state
            .as_ref()
            .ok_or(PreconditionError::NotConfigured)?;
        Ok(WaveCheckpoint {
            phi: self.phi.clone(),
            field_history: state.oldp.clone(),
            drive_history: state.oldq.clone(),
        })
    }

    fn restart(&mut self, checkpoint: &WaveCheckpoint) -> Result<(), PreconditionError> {
        let state = self
            .state
            .as_mut()
            .ok_or(PreconditionError::NotConfigured)?;
        for field in std::iter::once(&checkpoint.phi)
            .chain(&checkpoint.field_history)
            .chain(&checkpoint.drive_history)
        {
            self.shape.check_field(field)?;
        }

        self.phi.copy_from_slice(&checkpoint.phi);
        for (dst, src) in state.oldp.iter_mut().zip(&checkpoint.field_history) {
            dst.copy_from_slice(src);
        }
        for (dst, src) in state.oldq.iter_mut().zip(&checkpoint.drive_history) {
            dst.copy_from_slice(src);
        }
        state.reassign()
    }
}
