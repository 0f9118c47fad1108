//! Padded neighbour stencil with an explicit cursor.
//!
//! A [`Stencil`] copies a field into a buffer with one cell of padding on
//! every side. The padding holds the cells from the opposite edge (torus
//! wrap), so every node's eight neighbours are at fixed offsets from its
//! padded position and lookups never branch on edges:
//!
//! ```text
//!   NW   N   NE        -stride-1  -stride  -stride+1
//!    W   C   E    ==>     -1         0        +1
//!   SW   S   SE        +stride-1  +stride  +stride+1
//! ```
//!
//! The position being addressed is a separate [`Cursor`] value owned by the
//! caller. The stencil's buffer is never mutated while reading, and one
//! cursor can address several stencils of the same shape in lock-step.

use crate::shape::LatticeShape;
use crate::topology::Topology;
use nfwave_core::{ConfigError, PreconditionError};

/// One of the nine cells of a 3x3 neighbourhood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The addressed node itself.
    Center,
    /// Previous row.
    North,
    /// Next row.
    South,
    /// Next column.
    East,
    /// Previous column.
    West,
    /// Previous row, next column.
    NorthEast,
    /// Previous row, previous column.
    NorthWest,
    /// Next row, next column.
    SouthEast,
    /// Next row, previous column.
    SouthWest,
}

impl Direction {
    /// The four orthogonal neighbours.
    pub const ORTHOGONAL: [Direction; 4] = [Self::North, Self::South, Self::West, Self::East];

    /// The four diagonal neighbours.
    pub const DIAGONAL: [Direction; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// `(row, col)` step of this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Center => (0, 0),
            Self::North => (-1, 0),
            Self::South => (1, 0),
            Self::East => (0, 1),
            Self::West => (0, -1),
            Self::NorthEast => (-1, 1),
            Self::NorthWest => (-1, -1),
            Self::SouthEast => (1, 1),
            Self::SouthWest => (1, -1),
        }
    }

    /// Offset within a padded buffer whose rows are `stride` wide.
    #[inline]
    pub fn offset(self, stride: usize) -> isize {
        let (dr, dc) = self.delta();
        dr * stride as isize + dc
    }
}

/// A position in a stencil's padded buffer.
///
/// Created by [`Stencil::assign`], [`Stencil::cursor_at`] or
/// [`Cursor::at`]. Cursors are plain values: advancing one has no effect on
/// any stencil, and the same cursor may be used to read every stencil that
/// shares its [`LatticeShape`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pos: usize,
    shape: LatticeShape,
}

impl Cursor {
    /// Cursor addressing node 0.
    pub fn origin(shape: LatticeShape) -> Self {
        Self {
            pos: shape.stride() + 1,
            shape,
        }
    }

    /// Cursor addressing `node`.
    ///
    /// # Errors
    ///
    /// [`PreconditionError::NodeOutOfRange`] if `node >= shape.nodes()`.
    pub fn at(shape: LatticeShape, node: usize) -> Result<Self, PreconditionError> {
        shape.check_node(node)?;
        let x = node % shape.longside();
        let y = node / shape.longside();
        Ok(Self {
            pos: (y + 1) * shape.stride() + x + 1,
            shape,
        })
    }

    /// Move to the next node in row-major order.
    ///
    /// Skips the two padding cells between padded rows. Advancing from the
    /// last node returns to node 0, so `nodes` advances complete one sweep.
    #[inline]
    pub fn advance(&mut self) {
        let stride = self.shape.stride();
        self.pos += 1;
        if self.pos % stride == stride - 1 {
            self.pos += 2;
        }
        if self.pos == (self.shape.rows() + 1) * stride + 1 {
            self.pos = stride + 1;
        }
    }

    /// The node currently addressed.
    pub fn node(&self) -> usize {
        let stride = self.shape.stride();
        let x = self.pos % stride - 1;
        let y = self.pos / stride - 1;
        y * self.shape.longside() + x
    }

    /// Position within the padded buffer.
    pub fn padded_index(&self) -> usize {
        self.pos
    }

    /// Shape this cursor walks.
    pub fn shape(&self) -> LatticeShape {
        self.shape
    }
}

/// A torus-padded snapshot of one field.
#[derive(Clone, Debug)]
pub struct Stencil {
    shape: LatticeShape,
    topology: Topology,
    m: Vec<f64>,
}

impl Stencil {
    /// Allocate a stencil for `shape`.
    ///
    /// The buffer is zeroed until the first [`assign`](Self::assign).
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedTopology`] unless `topology` is
    /// [`Topology::Torus`].
    pub fn new(shape: LatticeShape, topology: Topology) -> Result<Self, ConfigError> {
        let topology = topology.require_supported()?;
        Ok(Self {
            shape,
            topology,
            m: vec![0.0; shape.padded_len()],
        })
    }

    /// Lattice shape.
    pub fn shape(&self) -> LatticeShape {
        self.shape
    }

    /// Boundary topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Copy `field` into the padded buffer and return a cursor at node 0.
    ///
    /// Each padded row gets the field row plus its own last value on the
    /// left and first value on the right. The top pad row then copies the
    /// last padded row and the bottom pad row copies the first, which also
    /// places the diagonally-opposite corners in the four corner cells.
    ///
    /// # Errors
    ///
    /// [`PreconditionError::FieldLength`] if `field` is not one value per
    /// node. The buffer is left untouched in that case.
    pub fn assign(&mut self, field: &[f64]) -> Result<Cursor, PreconditionError> {
        self.shape.check_field(field)?;
        let longside = self.shape.longside();
        let stride = self.shape.stride();
        let rows = self.shape.rows();

        for (r, row) in field.chunks_exact(longside).enumerate() {
            let base = (r + 1) * stride;
            self.m[base + 1..base + 1 + longside].copy_from_slice(row);
            self.m[base] = row[longside - 1];
            self.m[base + longside + 1] = row[0];
        }

        // top pad <- last field row, bottom pad <- first field row
        self.m.copy_within(rows * stride..(rows + 1) * stride, 0);
        self.m.copy_within(stride..2 * stride, (rows + 1) * stride);

        Ok(Cursor::origin(self.shape))
    }

    /// Cursor addressing `node`; see [`Cursor::at`].
    pub fn cursor_at(&self, node: usize) -> Result<Cursor, PreconditionError> {
        Cursor::at(self.shape, node)
    }

    /// Value of the `dir` neighbour of the node under `cursor`.
    #[inline]
    pub fn neighbor(&self, cursor: &Cursor, dir: Direction) -> f64 {
        self.window(cursor).get(dir)
    }

    /// Borrow the 3x3 neighbourhood under `cursor`.
    #[inline]
    pub fn window(&self, cursor: &Cursor) -> Window<'_> {
        debug_assert_eq!(
            cursor.shape, self.shape,
            "cursor belongs to a different lattice shape"
        );
        Window {
            m: &self.m,
            pos: cursor.pos,
            stride: self.shape.stride(),
            node: cursor.node(),
        }
    }

    /// Iterate every node's neighbourhood in row-major order.
    pub fn sweep(&self) -> Sweep<'_> {
        Sweep {
            stencil: self,
            cursor: Cursor::origin(self.shape),
            remaining: self.shape.nodes(),
        }
    }

    /// Copy the interior back out as an unpadded field.
    pub fn to_field(&self) -> Vec<f64> {
        self.sweep().map(|w| w.c()).collect()
    }
}

/// Read-only view of one node's 3x3 neighbourhood.
#[derive(Clone, Copy, Debug)]
pub struct Window<'a> {
    m: &'a [f64],
    pos: usize,
    stride: usize,
    node: usize,
}

impl Window<'_> {
    /// Node at the centre of the window.
    pub fn node(&self) -> usize {
        self.node
    }

    /// Value in direction `dir`.
    #[inline]
    pub fn get(&self, dir: Direction) -> f64 {
        let idx = self.pos as isize + dir.offset(self.stride);
        self.m[idx as usize]
    }

    /// Centre value.
    #[inline]
    pub fn c(&self) -> f64 {
        self.m[self.pos]
    }

    /// North neighbour.
    #[inline]
    pub fn n(&self) -> f64 {
        self.m[self.pos - self.stride]
    }

    /// South neighbour.
    #[inline]
    pub fn s(&self) -> f64 {
        self.m[self.pos + self.stride]
    }

    /// East neighbour.
    #[inline]
    pub fn e(&self) -> f64 {
        self.m[self.pos + 1]
    }

    /// West neighbour.
    #[inline]
    pub fn w(&self) -> f64 {
        self.m[self.pos - 1]
    }

    /// North-east neighbour.
    #[inline]
    pub fn ne(&self) -> f64 {
        self.m[self.pos - self.stride + 1]
    }

    /// North-west neighbour.
    #[inline]
    pub fn nw(&self) -> f64 {
        self.m[self.pos - self.stride - 1]
    }

    /// South-east neighbour.
    #[inline]
    pub fn se(&self) -> f64 {
        self.m[self.pos + self.stride + 1]
    }

    /// South-west neighbour.
    #[inline]
    pub fn sw(&self) -> f64 {
        self.m[self.pos + self.stride - 1]
    }

    /// `n + s + w + e`.
    #[inline]
    pub fn orthogonal_sum(&self) -> f64 {
        self.n() + self.s() + self.w() + self.e()
    }

    /// `nw + ne + sw + se`.
    #[inline]
    pub fn diagonal_sum(&self) -> f64 {
        self.nw() + self.ne() + self.sw() + self.se()
    }
}

/// Row-major iterator over a stencil's windows. See [`Stencil::sweep`].
#[derive(Debug)]
pub struct Sweep<'a> {
    stencil: &'a Stencil,
    cursor: Cursor,
    remaining: usize,
}

impl<'a> Iterator for Sweep<'a> {
    type Item = Window<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let window = self.stencil.window(&self.cursor);
        self.cursor.advance();
        self.remaining -= 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Sweep<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn torus(rows: usize, cols: usize) -> Stencil {
        Stencil::new(LatticeShape::grid(rows, cols).unwrap(), Topology::Torus).unwrap()
    }

    fn iota(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn sphere_topology_rejected() {
        let shape = LatticeShape::grid(3, 3).unwrap();
        assert!(matches!(
            Stencil::new(shape, Topology::Sphere),
            Err(ConfigError::UnsupportedTopology { .. })
        ));
    }

    #[test]
    fn padded_buffer_layout_3x4() {
        // field:
        //   0  1  2  3
        //   4  5  6  7
        //   8  9 10 11
        let mut st = torus(3, 4);
        st.assign(&iota(12)).unwrap();
        #[rustfmt::skip]
        let expected = [
            11.0,  8.0,  9.0, 10.0, 11.0,  8.0,
             3.0,  0.0,  1.0,  2.0,  3.0,  0.0,
             7.0,  4.0,  5.0,  6.0,  7.0,  4.0,
            11.0,  8.0,  9.0, 10.0, 11.0,  8.0,
             3.0,  0.0,  1.0,  2.0,  3.0,  0.0,
        ];
        assert_eq!(st.m, expected);
    }

    #[test]
    fn corner_neighbours_wrap_diagonally() {
        let mut st = torus(3, 4);
        st.assign(&iota(12)).unwrap();

        let top_left = st.cursor_at(0).unwrap();
        assert_eq!(st.neighbor(&top_left, Direction::NorthWest), 11.0);
        assert_eq!(st.neighbor(&top_left, Direction::North), 8.0);
        assert_eq!(st.neighbor(&top_left, Direction::West), 3.0);

        let bottom_right = st.cursor_at(11).unwrap();
        assert_eq!(st.neighbor(&bottom_right, Direction::SouthEast), 0.0);
        assert_eq!(st.neighbor(&bottom_right, Direction::East), 8.0);
        assert_eq!(st.neighbor(&bottom_right, Direction::South), 3.0);

        let top_right = st.cursor_at(3).unwrap();
        assert_eq!(st.neighbor(&top_right, Direction::NorthEast), 8.0);
        let bottom_left = st.cursor_at(8).unwrap();
        assert_eq!(st.neighbor(&bottom_left, Direction::SouthWest), 3.0);
    }

    #[test]
    fn assign_resets_cursor_to_origin() {
        let mut st = torus(2, 2);
        let cursor = st.assign(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(cursor.node(), 0);
        assert_eq!(st.window(&cursor).c(), 1.0);
    }

    #[test]
    fn assign_rejects_wrong_length_and_keeps_buffer() {
        let mut st = torus(2, 2);
        st.assign(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let err = st.assign(&[0.0; 3]).unwrap_err();
        assert_eq!(
            err,
            PreconditionError::FieldLength {
                expected: 4,
                got: 3
            }
        );
        assert_eq!(st.to_field(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn cursor_at_out_of_range_fails() {
        let st = torus(2, 3);
        assert_eq!(
            st.cursor_at(6).unwrap_err(),
            PreconditionError::NodeOutOfRange { node: 6, nodes: 6 }
        );
    }

    #[test]
    fn advance_skips_padding_and_wraps() {
        let shape = LatticeShape::grid(2, 3).unwrap();
        let mut cursor = Cursor::origin(shape);
        let mut visited = Vec::new();
        for _ in 0..shape.nodes() {
            visited.push(cursor.node());
            cursor.advance();
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(cursor.node(), 0);
        assert_eq!(cursor, Cursor::origin(shape));
    }

    #[test]
    fn single_node_lattice_sees_itself_everywhere() {
        let mut st = torus(1, 1);
        let cursor = st.assign(&[7.5]).unwrap();
        let w = st.window(&cursor);
        assert_eq!(w.orthogonal_sum(), 30.0);
        assert_eq!(w.diagonal_sum(), 30.0);
        assert_eq!(w.c(), 7.5);

        let mut c = cursor;
        c.advance();
        assert_eq!(c, cursor);
    }

    #[test]
    fn single_column_wraps_east_west_onto_itself() {
        let mut st = torus(3, 1);
        st.assign(&[1.0, 2.0, 3.0]).unwrap();
        let mid = st.cursor_at(1).unwrap();
        let w = st.window(&mid);
        assert_eq!((w.w(), w.c(), w.e()), (2.0, 2.0, 2.0));
        assert_eq!((w.n(), w.s()), (1.0, 3.0));
    }

    #[test]
    fn window_accessors_match_direction_lookup() {
        let mut st = torus(4, 5);
        st.assign(&iota(20)).unwrap();
        for w in st.sweep() {
            assert_eq!(w.n(), w.get(Direction::North));
            assert_eq!(w.s(), w.get(Direction::South));
            assert_eq!(w.e(), w.get(Direction::East));
            assert_eq!(w.w(), w.get(Direction::West));
            assert_eq!(w.ne(), w.get(Direction::NorthEast));
            assert_eq!(w.nw(), w.get(Direction::NorthWest));
            assert_eq!(w.se(), w.get(Direction::SouthEast));
            assert_eq!(w.sw(), w.get(Direction::SouthWest));
            assert_eq!(w.c(), w.get(Direction::Center));
        }
    }

    #[test]
    fn sweep_is_exact_size() {
        let mut st = torus(3, 3);
        st.assign(&iota(9)).unwrap();
        assert_eq!(st.sweep().len(), 9);
        assert_eq!(st.to_field(), iota(9));
    }
}
