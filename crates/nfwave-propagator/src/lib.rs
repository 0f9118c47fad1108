//! Field propagators for nfwave.
//!
//! A propagator maps the output of a driving [`Population`] onto a field
//! `phi` over the lattice.
//!
//! - [`WavePropagator`]: damped wave equation on a torus, stepped with a
//!   nine-point explicit scheme over four padded stencils.
//! - [`DelayLine`]: no spatial coupling, `phi` is the delayed drive.
//!
//! Both implement [`Propagator`]; the wave propagator also implements
//! [`Restartable`] for checkpointing.
//!
//! [`Population`]: nfwave_core::Population

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coefficients;
pub mod config;
pub mod delay_line;
pub mod propagator;
pub mod wave;

pub use coefficients::{WaveCoefficients, COURANT_LIMIT};
pub use config::{InitialCondition, WaveConfig};
pub use delay_line::DelayLine;
pub use propagator::{Propagator, Restartable};
pub use wave::{WaveCheckpoint, WavePropagator};
