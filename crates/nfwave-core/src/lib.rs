//! Core types and traits for the nfwave neural-field simulator.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! error taxonomy shared by every other crate, the [`Population`] trait
//! through which a propagator reads its driving signal, the [`Delay`]
//! type for history lookups, and the [`Params`] configuration reader.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod delay;
pub mod error;
pub mod params;
pub mod traits;

pub use delay::Delay;
pub use error::{ConfigError, PreconditionError};
pub use params::Params;
pub use traits::Population;
