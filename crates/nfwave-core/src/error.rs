//! Error types for the nfwave simulator.
//!
//! Two families, split by who is at fault:
//!
//! - [`ConfigError`]: the run was set up with parameters that cannot
//!   produce a valid simulation. Always raised before any step executes.
//! - [`PreconditionError`]: the caller broke an API contract (out-of-range
//!   node, wrong field length, stepping before configuration). Never
//!   clamped or ignored.

use std::error::Error;
use std::fmt;

/// Errors detected while configuring a stencil or propagator.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The lattice dimensions do not describe a rectangular grid.
    InvalidShape {
        /// Total node count requested.
        nodes: usize,
        /// Row length requested.
        longside: usize,
        /// Which shape invariant failed.
        reason: &'static str,
    },
    /// The requested boundary topology is not implemented.
    UnsupportedTopology {
        /// Name of the rejected topology.
        topology: String,
    },
    /// The explicit scheme would be numerically unstable.
    CourantViolated {
        /// Computed `gamma * range * deltat / deltax`.
        courant: f64,
        /// Largest admissible Courant number.
        limit: f64,
    },
    /// A required parameter is absent from the configuration.
    MissingParam {
        /// Parameter name.
        name: String,
    },
    /// A parameter is present but its value is unusable.
    InvalidParam {
        /// Parameter name.
        name: String,
        /// Raw value as supplied.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Seeding the configured state broke an API precondition.
    Precondition(PreconditionError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape {
                nodes,
                longside,
                reason,
            } => write!(
                f,
                "invalid lattice shape ({nodes} nodes, longside {longside}): {reason}"
            ),
            Self::UnsupportedTopology { topology } => {
                write!(f, "stencil boundary must be Torus, got '{topology}'")
            }
            Self::CourantViolated { courant, limit } => write!(
                f,
                "wave equation does not fulfil the Courant condition: \
                 gamma*range*deltat/deltax = {courant} > {limit}"
            ),
            Self::MissingParam { name } => write!(f, "missing required parameter '{name}'"),
            Self::InvalidParam {
                name,
                value,
                reason,
            } => write!(f, "invalid value '{value}' for parameter '{name}': {reason}"),
            Self::Precondition(e) => write!(f, "precondition failed during setup: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Precondition(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PreconditionError> for ConfigError {
    fn from(e: PreconditionError) -> Self {
        Self::Precondition(e)
    }
}

/// Errors raised when a caller violates an API precondition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreconditionError {
    /// A node index outside `[0, nodes)`.
    NodeOutOfRange {
        /// The offending index.
        node: usize,
        /// Number of nodes in the lattice.
        nodes: usize,
    },
    /// A field slice whose length does not match the lattice.
    FieldLength {
        /// Expected number of values.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },
    /// The propagator was used before `configure` succeeded.
    NotConfigured,
    /// The population could not serve a delayed-output lookup.
    HistoryUnavailable {
        /// Requested delay, in steps.
        steps: usize,
    },
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeOutOfRange { node, nodes } => {
                write!(f, "node {node} out of range [0, {nodes})")
            }
            Self::FieldLength { expected, got } => {
                write!(f, "field has {got} values, expected {expected}")
            }
            Self::NotConfigured => write!(f, "propagator used before configure()"),
            Self::HistoryUnavailable { steps } => {
                write!(f, "population history does not reach {steps} steps back")
            }
        }
    }
}

impl Error for PreconditionError {}
