//! Property tests for torus stencils over arbitrary lattice shapes.

use nfwave_space::{Cursor, Direction, LatticeShape, Stencil, Topology};
use proptest::prelude::*;

fn arb_field() -> impl Strategy<Value = (LatticeShape, Vec<f64>)> {
    (1usize..9, 1usize..9).prop_flat_map(|(rows, cols)| {
        let shape = LatticeShape::grid(rows, cols).unwrap();
        (
            Just(shape),
            prop::collection::vec(-1e6f64..1e6, rows * cols),
        )
    })
}

fn assigned(shape: LatticeShape, field: &[f64]) -> Stencil {
    let mut st = Stencil::new(shape, Topology::Torus).unwrap();
    st.assign(field).unwrap();
    st
}

proptest! {
    #[test]
    fn every_neighbour_is_the_wrapped_cell((shape, field) in arb_field()) {
        let st = assigned(shape, &field);
        for node in 0..shape.nodes() {
            let cursor = st.cursor_at(node).unwrap();
            let (r, c) = shape.coords(node).unwrap();
            for dir in Direction::ORTHOGONAL.into_iter().chain(Direction::DIAGONAL) {
                let (dr, dc) = dir.delta();
                let expected = field[shape.wrapped_node(r as isize + dr, c as isize + dc)];
                prop_assert_eq!(
                    st.neighbor(&cursor, dir),
                    expected,
                    "node {} direction {:?}",
                    node,
                    dir
                );
            }
        }
    }

    #[test]
    fn west_of_first_column_is_last_column((shape, field) in arb_field()) {
        let st = assigned(shape, &field);
        let l = shape.longside();
        for r in 0..shape.rows() {
            let cursor = st.cursor_at(r * l).unwrap();
            prop_assert_eq!(st.window(&cursor).w(), field[r * l + l - 1]);
        }
    }

    #[test]
    fn advancing_visits_each_node_once_in_order((shape, _field) in arb_field()) {
        let mut cursor = Cursor::origin(shape);
        for expected in 0..shape.nodes() {
            prop_assert_eq!(cursor.node(), expected);
            cursor.advance();
        }
        prop_assert_eq!(cursor.node(), 0);
    }

    #[test]
    fn cursor_at_then_node_is_identity((shape, _field) in arb_field()) {
        for node in 0..shape.nodes() {
            prop_assert_eq!(Cursor::at(shape, node).unwrap().node(), node);
        }
        prop_assert!(Cursor::at(shape, shape.nodes()).is_err());
    }

    #[test]
    fn assign_round_trips_through_centre_reads((shape, field) in arb_field()) {
        let st = assigned(shape, &field);
        for (node, &value) in field.iter().enumerate() {
            let cursor = st.cursor_at(node).unwrap();
            prop_assert_eq!(st.neighbor(&cursor, Direction::Center), value);
        }
        prop_assert_eq!(st.to_field(), field);
    }

    #[test]
    fn lock_step_cursor_addresses_same_node_in_every_stencil(
        (shape, field) in arb_field(),
    ) {
        let doubled: Vec<f64> = field.iter().map(|v| v * 2.0).collect();
        let a = assigned(shape, &field);
        let b = assigned(shape, &doubled);
        let mut cursor = Cursor::origin(shape);
        for _ in 0..shape.nodes() {
            let (wa, wb) = (a.window(&cursor), b.window(&cursor));
            prop_assert_eq!(wa.node(), wb.node());
            prop_assert_eq!(wa.c() * 2.0, wb.c());
            cursor.advance();
        }
    }
}

#[test]
fn reassign_overwrites_previous_snapshot() {
    let shape = LatticeShape::grid(2, 2).unwrap();
    let mut st = Stencil::new(shape, Topology::Torus).unwrap();
    st.assign(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let cursor = st.assign(&[5.0, 6.0, 7.0, 8.0]).unwrap();
    let w = st.window(&cursor);
    assert_eq!(w.c(), 5.0);
    assert_eq!(w.w(), 6.0);
    assert_eq!(w.n(), 7.0);
    assert_eq!(w.nw(), 8.0);
}
