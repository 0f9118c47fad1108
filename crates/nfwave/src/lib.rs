//! nfwave: periodic-lattice stencils and damped-wave propagation for
//! neural-field simulations.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the nfwave sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use nfwave::prelude::*;
//!
//! // A population whose output never changes.
//! struct Constant { nodes: usize, frame: Vec<f64> }
//! impl Population for Constant {
//!     fn nodes(&self) -> usize { self.nodes }
//!     fn current_output(&self) -> f64 { self.frame[0] }
//!     fn grow_history(&mut self, _delay: Delay) {}
//!     fn delayed_output(&self, _delay: Delay) -> Option<&[f64]> { Some(&self.frame) }
//! }
//!
//! // A 16×16 torus with a 100 µs time step.
//! let shape = LatticeShape::grid(16, 16).unwrap();
//! let mut wave = WavePropagator::new(shape, 1e-4, Topology::Torus);
//! let mut pop = Constant { nodes: 256, frame: vec![1.0; 256] };
//!
//! let params: Params = [
//!     ("Deltax", "0.0035"),
//!     ("Tau", "0"),
//!     ("Range", "0.086"),
//!     ("gamma", "116"),
//! ]
//! .into_iter()
//! .collect();
//! wave.configure(&params, &mut pop).unwrap();
//!
//! for _ in 0..10 {
//!     wave.step(&pop).unwrap();
//! }
//! assert_eq!(wave.phi().len(), 256);
//! assert!(wave.phi().iter().all(|v| (v - 1.0).abs() < 1e-6));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `nfwave-core` | Errors, delays, parameters, the `Population` trait |
//! | [`space`] | `nfwave-space` | Lattice shapes, topologies, padded stencils and cursors |
//! | [`propagator`] | `nfwave-propagator` | Wave and delay propagators, checkpointing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`nfwave-core`).
///
/// Contains the error taxonomy, [`types::Delay`], [`types::Params`] and the
/// [`types::Population`] trait a propagator is driven by.
pub use nfwave_core as types;

/// Lattice geometry (`nfwave-space`).
///
/// [`space::LatticeShape`] describes the grid, [`space::Stencil`] holds one
/// padded snapshot of a field and [`space::Cursor`] addresses into it.
pub use nfwave_space as space;

/// Field propagators (`nfwave-propagator`).
///
/// [`propagator::WavePropagator`] integrates the damped wave equation;
/// [`propagator::DelayLine`] passes the delayed drive straight through.
pub use nfwave_propagator as propagator;

/// Common imports for typical nfwave usage.
///
/// ```rust
/// use nfwave::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use nfwave_core::{Delay, Params, Population};

    // Errors
    pub use nfwave_core::{ConfigError, PreconditionError};

    // Space
    pub use nfwave_space::{Cursor, Direction, LatticeShape, Stencil, Topology};

    // Propagators
    pub use nfwave_propagator::{
        DelayLine, InitialCondition, Propagator, Restartable, WaveCheckpoint, WaveConfig,
        WavePropagator,
    };
}
