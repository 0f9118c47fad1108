//! Test utilities and mock types for nfwave development.
//!
//! Provides mock implementations of
//! [`Population`](nfwave_core::Population) and parameter fixtures so
//! propagators can be exercised without a firing-rate model.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod population;

pub use population::{HistoryPopulation, NoisePopulation};

use nfwave_core::Params;

/// Corticothalamic-scale wave parameters with zero delay.
///
/// Stable for any `deltat` up to about `3e-4`.
pub fn cortical_params() -> Params {
    Params::new()
        .with("Deltax", 0.0035)
        .with("Tau", 0.0)
        .with("Range", 0.086)
        .with("gamma", 116.0)
}
