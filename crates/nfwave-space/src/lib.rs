//! Lattice geometry for nfwave simulations.
//!
//! A field is a row-major slice of `nodes` values, `longside` per row.
//! [`LatticeShape`] validates that geometry, [`Topology`] names how edges
//! connect, and [`Stencil`] holds a padded copy of one field snapshot so
//! that all eight neighbours of any node sit at constant offsets from a
//! [`Cursor`].
//!
//! # Sweeping a field
//!
//! ```
//! use nfwave_space::{LatticeShape, Stencil, Topology};
//!
//! let shape = LatticeShape::new(6, 3).unwrap();
//! let mut stencil = Stencil::new(shape, Topology::Torus).unwrap();
//! stencil.assign(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//!
//! // Node 0 sits on the top-left corner; its west neighbour wraps to the
//! // end of its own row and its north neighbour to the bottom row.
//! let first = stencil.sweep().next().unwrap();
//! assert_eq!(first.node(), 0);
//! assert_eq!(first.w(), 2.0);
//! assert_eq!(first.n(), 3.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod shape;
pub mod stencil;
pub mod topology;

pub use shape::LatticeShape;
pub use stencil::{Cursor, Direction, Stencil, Sweep, Window};
pub use topology::Topology;
