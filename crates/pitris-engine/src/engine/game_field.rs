use crate::{
    ShapeCollisionError,
    core::{
        PIT_WIDTH,
        pit::{LineClear, Pit},
        shape::{Cell, CellSet, Rotation, ShapeKind, place},
    },
};

use super::shape_generator::ShapeGenerator;

#[expect(clippy::cast_possible_wrap)]
const WIDTH: i32 = PIT_WIDTH as i32;

/// Spawn pivot: two rows above the visible pit, centered laterally.
pub const SPAWN_PIVOT: Cell = Cell::new(-2, WIDTH / 2 - 1);

/// The shape currently descending, with its cached absolute cells.
///
/// The cell set always reflects the last successful placement, so locking
/// never recomputes geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallingShape {
    kind: ShapeKind,
    rotation: Rotation,
    pivot: Cell,
    cells: CellSet,
}

impl FallingShape {
    fn spawn(kind: ShapeKind) -> Self {
        let rotation = Rotation::default();
        let cells = place(kind, SPAWN_PIVOT, rotation);
        Self {
            kind,
            rotation,
            pivot: SPAWN_PIVOT,
            cells,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    #[must_use]
    pub fn pivot(&self) -> Cell {
        self.pivot
    }

    #[must_use]
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }
}

/// Outcome of one gravity step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The shape moved down one row.
    Advanced,
    /// The shape landed at its previous position; rows may have cleared.
    Locked(LineClear),
    /// The shape landed at or above the rim; the pit has been reset.
    Overflowed,
}

/// Single-game state: pit, falling shape, next shape, and the generator.
#[derive(Debug, Clone)]
pub struct GameField {
    pit: Pit,
    falling: FallingShape,
    next: ShapeKind,
    generator: ShapeGenerator,
}

impl Default for GameField {
    fn default() -> Self {
        Self::new()
    }
}

impl GameField {
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(ShapeGenerator::new())
    }

    #[must_use]
    pub fn with_generator(mut generator: ShapeGenerator) -> Self {
        let falling = FallingShape::spawn(generator.next_shape());
        let next = generator.next_shape();
        Self {
            pit: Pit::INITIAL,
            falling,
            next,
            generator,
        }
    }

    #[must_use]
    pub fn pit(&self) -> &Pit {
        &self.pit
    }

    #[must_use]
    pub fn falling(&self) -> &FallingShape {
        &self.falling
    }

    #[must_use]
    pub fn next_shape(&self) -> ShapeKind {
        self.next
    }

    pub fn try_shift_left(&mut self) -> Result<(), ShapeCollisionError> {
        let pivot = self.falling.pivot;
        self.try_reposition(Cell::new(pivot.row, pivot.col - 1), self.falling.rotation)
    }

    pub fn try_shift_right(&mut self) -> Result<(), ShapeCollisionError> {
        let pivot = self.falling.pivot;
        self.try_reposition(Cell::new(pivot.row, pivot.col + 1), self.falling.rotation)
    }

    /// Rotates the falling shape a quarter turn. There are no wall kicks:
    /// a rotation that would overlap occupied cells is rejected outright.
    pub fn try_rotate(&mut self) -> Result<(), ShapeCollisionError> {
        self.try_reposition(self.falling.pivot, self.falling.rotation.stepped())
    }

    fn try_reposition(
        &mut self,
        pivot: Cell,
        rotation: Rotation,
    ) -> Result<(), ShapeCollisionError> {
        // The transform clamps cells laterally; bounding the pivot itself
        // keeps it from drifting past the walls on repeated shifts.
        if pivot.col < 0 || pivot.col > WIDTH {
            return Err(ShapeCollisionError);
        }
        let cells = place(self.falling.kind, pivot, rotation);
        if self.pit.is_colliding(&cells) {
            return Err(ShapeCollisionError);
        }
        self.falling.pivot = pivot;
        self.falling.rotation = rotation;
        self.falling.cells = cells;
        Ok(())
    }

    /// Advances gravity by one row.
    ///
    /// On contact the shape locks at its previous cells, full rows clear,
    /// and the next shape spawns; the outcome reports what happened.
    pub fn step_down(&mut self) -> StepOutcome {
        let pivot = Cell::new(self.falling.pivot.row + 1, self.falling.pivot.col);
        let cells = place(self.falling.kind, pivot, self.falling.rotation);
        if !self.pit.is_colliding(&cells) {
            self.falling.pivot = pivot;
            self.falling.cells = cells;
            return StepOutcome::Advanced;
        }

        let outcome = match self.pit.lock(&self.falling.cells, self.falling.kind) {
            Ok(()) => StepOutcome::Locked(self.pit.clear_full_rows()),
            Err(_) => StepOutcome::Overflowed,
        };
        self.spawn_next();
        outcome
    }

    /// Drops the falling shape straight down until it locks.
    pub fn hard_drop(&mut self) -> StepOutcome {
        loop {
            match self.step_down() {
                StepOutcome::Advanced => {}
                outcome => return outcome,
            }
        }
    }

    /// Empties the pit and deals fresh shapes, keeping the RNG stream.
    pub fn reset(&mut self) {
        self.pit.reset();
        self.spawn_next();
    }

    fn spawn_next(&mut self) {
        self.falling = FallingShape::spawn(self.next);
        self.next = self.generator.next_shape();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeSeed;

    fn seeded_field() -> GameField {
        let seed: ShapeSeed = "00000000000000000000000000000007".parse().unwrap();
        GameField::with_generator(ShapeGenerator::with_seed(seed))
    }

    #[test]
    fn new_field_spawns_at_the_canonical_pivot() {
        let field = seeded_field();
        assert_eq!(field.falling().pivot(), SPAWN_PIVOT);
        assert_eq!(field.falling().rotation(), Rotation::default());
        assert!(field.falling().cells().iter().all(|c| c.row < 0));
    }

    #[test]
    fn shifts_move_the_pivot_and_rejections_leave_it() {
        let mut field = seeded_field();
        let col = field.falling().pivot().col;

        field.try_shift_left().unwrap();
        assert_eq!(field.falling().pivot().col, col - 1);
        field.try_shift_right().unwrap();
        assert_eq!(field.falling().pivot().col, col);

        // Walk into the left wall; the pivot must stop at the boundary.
        while field.try_shift_left().is_ok() {}
        let stopped = field.falling().pivot().col;
        assert!(stopped >= 0);
        assert!(field.try_shift_left().is_err());
        assert_eq!(field.falling().pivot().col, stopped);
    }

    #[test]
    fn rotation_cycles_back_after_four_turns() {
        let mut field = seeded_field();
        let cells = field.falling().cells().clone();
        for _ in 0..4 {
            field.try_rotate().unwrap();
        }
        assert_eq!(field.falling().rotation(), Rotation::default());
        assert_eq!(*field.falling().cells(), cells);
    }

    #[test]
    fn shape_locks_at_its_previous_cells_and_the_next_one_spawns() {
        let mut field = seeded_field();
        // O shape resting just above a two-cell obstruction.
        field.falling = FallingShape {
            kind: ShapeKind::O,
            rotation: Rotation::default(),
            pivot: Cell::new(17, 6),
            cells: place(ShapeKind::O, Cell::new(17, 6), Rotation::default()),
        };
        field.pit = Pit::from_ascii(
            "............\n............\n............\n............\n\
             ............\n............\n............\n............\n\
             ............\n............\n............\n............\n\
             ............\n............\n............\n............\n\
             ............\n............\n......##....",
        );
        let resting = field.falling.cells.clone();
        let expected_next = field.next_shape();

        let outcome = field.step_down();
        let StepOutcome::Locked(clear) = outcome else {
            panic!("expected lock, got {outcome:?}");
        };
        assert_eq!(clear.rows_cleared(), 0);
        for cell in &resting {
            let (row, col) = (
                usize::try_from(cell.row).unwrap(),
                usize::try_from(cell.col).unwrap(),
            );
            assert!(!field.pit().visible_rows().nth(row).unwrap()[col].is_empty());
        }
        assert_eq!(field.falling().kind(), expected_next);
        assert_eq!(field.falling().pivot(), SPAWN_PIVOT);
        assert_eq!(field.falling().rotation(), Rotation::default());
    }

    #[test]
    fn hard_drop_reaches_the_floor() {
        let mut field = seeded_field();
        let kind = field.falling().kind();

        let outcome = field.hard_drop();
        assert!(matches!(outcome, StepOutcome::Locked(_)), "{outcome:?}");

        let occupied: Vec<_> = field
            .pit()
            .visible_rows()
            .enumerate()
            .flat_map(|(row, cols)| {
                cols.iter()
                    .enumerate()
                    .filter(|(_, c)| !c.is_empty())
                    .map(move |(col, _)| (row, col))
            })
            .collect();
        assert_eq!(occupied.len(), 4, "{kind:?}: {occupied:?}");
        // The lowest cell rests on the floor row.
        assert_eq!(occupied.iter().map(|&(row, _)| row).max(), Some(20));
    }

    #[test]
    fn landing_above_the_rim_overflows_and_resets() {
        let mut field = seeded_field();
        // A column reaching the top row forces the spawned shape to lock
        // above the rim.
        field.pit = Pit::from_ascii(
            "....####....\n....####....\n....####....\n....####....",
        );

        let outcome = loop {
            match field.step_down() {
                StepOutcome::Advanced => {}
                outcome => break outcome,
            }
        };
        assert_eq!(outcome, StepOutcome::Overflowed);
        assert_eq!(*field.pit(), Pit::INITIAL);
        assert_eq!(field.falling().pivot(), SPAWN_PIVOT);
    }
}
