use arrayvec::ArrayVec;
use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::PIT_WIDTH;

#[expect(clippy::cast_possible_wrap)]
const WIDTH: i32 = PIT_WIDTH as i32;

/// A single absolute position in the pit.
///
/// Rows may be negative: a freshly spawned shape starts two rows above the
/// visible pit and slides into view, and cells above the rim never collide.
///
/// `Ord` compares by row, then column, which is the canonical cell-set order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// The absolute cells occupied by one shape, in canonical order.
pub type CellSet = ArrayVec<Cell, 4>;

/// Rotation state of a falling shape: 0°, 90°, 180°, or 270°.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rotation(u8);

impl Rotation {
    pub const ALL: [Self; 4] = [Self(0), Self(1), Self(2), Self(3)];

    /// Advances a quarter turn, wrapping after the fourth.
    #[must_use]
    pub const fn stepped(self) -> Self {
        Self((self.0 + 1) % 4)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Odd states swap the shape's declared bounding-box extents.
    const fn swaps_extents(self) -> bool {
        self.0 & 1 != 0
    }
}

/// One of the seven tetromino shapes, in the catalog's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShapeKind {
    I = 0,
    J = 1,
    T = 2,
    L = 3,
    S = 4,
    Z = 5,
    O = 6,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        match rng.random_range(0..=6) {
            0 => ShapeKind::I,
            1 => ShapeKind::J,
            2 => ShapeKind::T,
            3 => ShapeKind::L,
            4 => ShapeKind::S,
            5 => ShapeKind::Z,
            _ => ShapeKind::O,
        }
    }
}

impl ShapeKind {
    /// Number of shapes in the catalog (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::O,
    ];

    fn def(self) -> &'static ShapeDef {
        &SHAPE_TABLE[self as usize]
    }

    /// Bounding-box extents as maximum cell indices: (along rows, along
    /// columns) in the unrotated orientation.
    #[must_use]
    pub fn extents(self) -> (i32, i32) {
        let def = self.def();
        (def.row_span, def.col_span)
    }

    /// The shape's relative cells in the unrotated orientation.
    #[must_use]
    pub fn cells(self) -> &'static [Cell; 4] {
        &self.def().cells
    }
}

/// An immutable catalog entry: bounding-box extents plus the relative cells
/// of the unrotated shape. Extents are maximum indices, not lengths.
struct ShapeDef {
    row_span: i32,
    col_span: i32,
    cells: [Cell; 4],
}

const fn def(row_span: i32, col_span: i32, cells: [(i32, i32); 4]) -> ShapeDef {
    let [a, b, c, d] = cells;
    ShapeDef {
        row_span,
        col_span,
        cells: [
            Cell::new(a.0, a.1),
            Cell::new(b.0, b.1),
            Cell::new(c.0, c.1),
            Cell::new(d.0, d.1),
        ],
    }
}

const SHAPE_TABLE: [ShapeDef; ShapeKind::LEN] = [
    // I
    def(0, 3, [(0, 0), (0, 1), (0, 2), (0, 3)]),
    // J
    def(1, 2, [(0, 0), (1, 0), (1, 1), (1, 2)]),
    // T
    def(1, 2, [(0, 1), (1, 0), (1, 1), (1, 2)]),
    // L
    def(1, 2, [(0, 2), (1, 0), (1, 1), (1, 2)]),
    // S
    def(1, 2, [(0, 0), (0, 1), (1, 1), (1, 2)]),
    // Z
    def(1, 2, [(0, 1), (0, 2), (1, 0), (1, 1)]),
    // O
    def(1, 1, [(0, 0), (0, 1), (1, 0), (1, 1)]),
];

/// Computes the absolute cells occupied by `kind` at `pivot` in `rotation`.
///
/// The pivot is centered over the shape's effective bounding box, then the
/// origin is clamped laterally so the shape never leaves the pit sideways.
/// Rows are not clamped; callers detect vertical contact through collision
/// testing. Pure function of its inputs, total for any pivot.
///
/// The result is canonicalized: sorted ascending by row, then column.
#[must_use]
pub fn place(kind: ShapeKind, pivot: Cell, rotation: Rotation) -> CellSet {
    let shape = kind.def();
    let (row_span, col_span) = if rotation.swaps_extents() {
        (shape.col_span, shape.row_span)
    } else {
        (shape.row_span, shape.col_span)
    };

    let mut origin = Cell::new(pivot.row - (row_span + 1) / 2, pivot.col - col_span / 2);
    if origin.col < 0 {
        origin.col = 0;
    }
    if origin.col + col_span >= WIDTH && pivot.col <= WIDTH {
        origin.col = WIDTH - 1 - col_span;
    }

    let mut cells: CellSet = shape
        .cells
        .iter()
        .map(|&Cell { row, col }| match rotation.index() {
            0 => Cell::new(row, col),
            1 => Cell::new(col, col_span - row),
            2 => Cell::new(row_span - row, col_span - col),
            _ => Cell::new(row_span - col, row),
        })
        .map(|cell| Cell::new(cell.row + origin.row, cell.col + origin.col))
        .collect();
    canonicalize(&mut cells);
    cells
}

/// Sorts a cell set into canonical order (ascending by row, then column).
///
/// Collision testing and old/new cell diffing both assume this order, so the
/// sort is stable and kept separate from the placement transform.
pub fn canonicalize(cells: &mut CellSet) {
    cells.sort();
}
