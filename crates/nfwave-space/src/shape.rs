//! Validated lattice dimensions.

use nfwave_core::{ConfigError, PreconditionError};

/// The shape of a row-major lattice of `nodes` cells, `longside` per row.
///
/// Construction guarantees `longside > 0`, `nodes > 0` and
/// `nodes % longside == 0`, so `rows()` is exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LatticeShape {
    nodes: usize,
    longside: usize,
}

impl LatticeShape {
    /// Validate and create a shape.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidShape`] if either dimension is zero, `nodes`
    /// is not a whole number of rows, or the padded buffer length does not
    /// fit in `usize`.
    pub fn new(nodes: usize, longside: usize) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidShape {
            nodes,
            longside,
            reason,
        };
        if longside == 0 {
            return Err(invalid("longside must be > 0"));
        }
        if nodes == 0 {
            return Err(invalid("lattice must have at least one node"));
        }
        if nodes % longside != 0 {
            return Err(invalid("nodes must be a multiple of longside"));
        }
        let padded = (nodes / longside)
            .checked_add(2)
            .zip(longside.checked_add(2))
            .and_then(|(rows, stride)| rows.checked_mul(stride));
        if padded.is_none() {
            return Err(invalid("padded buffer length overflows usize"));
        }
        Ok(Self { nodes, longside })
    }

    /// Shape of a `rows x cols` grid.
    pub fn grid(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let nodes = rows
            .checked_mul(cols)
            .ok_or(ConfigError::InvalidShape {
                nodes: usize::MAX,
                longside: cols,
                reason: "rows * cols overflows usize",
            })?;
        Self::new(nodes, cols)
    }

    /// Total number of nodes.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Nodes per row.
    pub fn longside(&self) -> usize {
        self.longside
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.nodes / self.longside
    }

    /// Row length of the padded buffer (`longside + 2`).
    pub fn stride(&self) -> usize {
        self.longside + 2
    }

    /// Length of the padded buffer, `(rows + 2) * (longside + 2)`.
    pub fn padded_len(&self) -> usize {
        (self.rows() + 2) * self.stride()
    }

    /// `(row, col)` of a node.
    pub fn coords(&self, node: usize) -> Result<(usize, usize), PreconditionError> {
        self.check_node(node)?;
        Ok((node / self.longside, node % self.longside))
    }

    /// Node at `(row, col)`, wrapping both axes periodically.
    pub fn wrapped_node(&self, row: isize, col: isize) -> usize {
        let rows = self.rows() as isize;
        let cols = self.longside as isize;
        let r = row.rem_euclid(rows) as usize;
        let c = col.rem_euclid(cols) as usize;
        r * self.longside + c
    }

    /// Fail unless `node` is in `[0, nodes)`.
    pub fn check_node(&self, node: usize) -> Result<(), PreconditionError> {
        if node < self.nodes {
            Ok(())
        } else {
            Err(PreconditionError::NodeOutOfRange {
                node,
                nodes: self.nodes,
            })
        }
    }

    /// Fail unless `field` holds exactly one value per node.
    pub fn check_field(&self, field: &[f64]) -> Result<(), PreconditionError> {
        if field.len() == self.nodes {
            Ok(())
        } else {
            Err(PreconditionError::FieldLength {
                expected: self.nodes,
                got: field.len(),
            })
        }
    }
}
