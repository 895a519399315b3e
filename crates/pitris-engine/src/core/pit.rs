use super::{
    PIT_DEPTH, PIT_WIDTH,
    shape::{Cell, CellSet, ShapeKind},
};
use crate::PitOverflowError;

/// A single cell of the pit grid.
///
/// Occupied cells remember the kind of shape that locked there so the
/// renderer can recover the display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PitCell {
    #[default]
    Empty,
    /// Pre-filled floor row below the visible pit.
    Floor,
    Block(ShapeKind),
}

impl PitCell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == PitCell::Empty
    }
}

/// Result of one line-clear pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    rows_cleared: usize,
    spark_cells: Vec<Cell>,
}

impl LineClear {
    /// Number of rows removed (0 to 4 for tetromino locks).
    #[must_use]
    pub fn rows_cleared(&self) -> usize {
        self.rows_cleared
    }

    /// One particle-spawn position per cell of every removed row, in the
    /// coordinates the rows held before compaction.
    #[must_use]
    pub fn spark_cells(&self) -> &[Cell] {
        &self.spark_cells
    }

    #[must_use]
    pub fn into_spark_cells(self) -> Vec<Cell> {
        self.spark_cells
    }
}

/// The playing field: `PIT_DEPTH` visible rows above one pre-filled floor
/// row, so downward collision needs no special case.
///
/// A per-row occupancy counter parallels the visible rows; completion tests
/// read the counter instead of rescanning the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pit {
    rows: [[PitCell; PIT_WIDTH]; PIT_DEPTH + 1],
    row_fill: [u8; PIT_DEPTH],
}

impl Default for Pit {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Pit {
    pub const INITIAL: Self = {
        let mut rows = [[PitCell::Empty; PIT_WIDTH]; PIT_DEPTH + 1];
        rows[PIT_DEPTH] = [PitCell::Floor; PIT_WIDTH];
        Self {
            rows,
            row_fill: [0; PIT_DEPTH],
        }
    };

    /// Iterates the visible rows top to bottom, floor row excluded.
    #[must_use]
    pub fn visible_rows(&self) -> impl Iterator<Item = &[PitCell; PIT_WIDTH]> {
        self.rows[..PIT_DEPTH].iter()
    }

    /// Checks whether any cell of a candidate placement is blocked.
    ///
    /// Cells above the rim (negative row) are not on the board yet and never
    /// collide. Cells outside the grid read as blocked, keeping the test
    /// total for any input.
    #[must_use]
    pub fn is_colliding(&self, cells: &CellSet) -> bool {
        cells.iter().any(|cell| {
            if cell.row < 0 {
                return false;
            }
            let (Ok(row), Ok(col)) = (usize::try_from(cell.row), usize::try_from(cell.col)) else {
                return true;
            };
            match self.rows.get(row) {
                Some(cols) => cols.get(col).is_none_or(|c| !c.is_empty()),
                None => true,
            }
        })
    }

    /// Locks a landed shape's cells into the grid, updating the row
    /// occupancy counters.
    ///
    /// A cell at or above the rim means the pit has overflowed: the whole
    /// grid resets to empty and [`PitOverflowError`] is returned so the host
    /// can treat the reset as game over instead of a silent wipe.
    pub fn lock(&mut self, cells: &CellSet, kind: ShapeKind) -> Result<(), PitOverflowError> {
        if cells.iter().any(|cell| cell.row <= 0) {
            self.reset();
            return Err(PitOverflowError);
        }
        for cell in cells {
            let (Ok(row), Ok(col)) = (usize::try_from(cell.row), usize::try_from(cell.col)) else {
                continue;
            };
            if let Some(slot) = self.rows.get_mut(row).and_then(|cols| cols.get_mut(col)) {
                *slot = PitCell::Block(kind);
            }
            if let Some(count) = self.row_fill.get_mut(row) {
                *count += 1;
            }
        }
        Ok(())
    }

    /// Empties every visible row and resets the occupancy counters.
    pub fn reset(&mut self) {
        *self = Self::INITIAL;
    }

    /// Removes every full visible row, shifting the rows above downward and
    /// carrying the occupancy counters along.
    ///
    /// Emits one spark position per cell of each removed row; the renderer
    /// owns particle lifetime and animation.
    pub fn clear_full_rows(&mut self) -> LineClear {
        let mut spark_cells = Vec::new();
        for row in 0..PIT_DEPTH {
            if self.is_row_full(row) {
                for col in 0..PIT_WIDTH {
                    spark_cells.push(cell_at(row, col));
                }
            }
        }

        let mut count = 0;
        for row in (0..PIT_DEPTH).rev() {
            if self.is_row_full(row) {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[row + count] = self.rows[row];
                self.row_fill[row + count] = self.row_fill[row];
            }
        }
        for row in 0..count {
            self.rows[row] = [PitCell::Empty; PIT_WIDTH];
            self.row_fill[row] = 0;
        }

        LineClear {
            rows_cleared: count,
            spark_cells,
        }
    }

    fn is_row_full(&self, row: usize) -> bool {
        usize::from(self.row_fill[row]) == PIT_WIDTH
    }

    /// Builds a pit from ASCII art for tests. `#` is an occupied cell, `.`
    /// is empty. Rows are listed top to bottom and must be `PIT_WIDTH` cells
    /// wide; omitted trailing rows stay empty.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let mut pit = Self::INITIAL;
        let lines = art.lines().filter(|line| !line.trim().is_empty());

        for (row, line) in lines.enumerate() {
            assert!(row < PIT_DEPTH, "too many rows, pit has {PIT_DEPTH}");
            let cells: Vec<char> = line.chars().filter(|c| *c == '#' || *c == '.').collect();
            assert_eq!(
                cells.len(),
                PIT_WIDTH,
                "each row must have exactly {PIT_WIDTH} cells, got {} at row {row}",
                cells.len(),
            );
            for (col, &ch) in cells.iter().enumerate() {
                if ch == '#' {
                    pit.rows[row][col] = PitCell::Block(ShapeKind::I);
                    pit.row_fill[row] += 1;
                }
            }
        }
        pit
    }
}

#[expect(clippy::cast_possible_wrap)]
fn cell_at(row: usize, col: usize) -> Cell {
    Cell::new(row as i32, col as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(raw: &[(i32, i32)]) -> CellSet {
        raw.iter().map(|&(row, col)| Cell::new(row, col)).collect()
    }

    fn occupied_count(pit: &Pit) -> usize {
        pit.visible_rows()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    #[test]
    fn initial_pit_is_empty_above_the_floor() {
        let pit = Pit::INITIAL;
        assert_eq!(occupied_count(&pit), 0);
        assert!(pit.row_fill.iter().all(|&fill| fill == 0));
        assert!(pit.rows[PIT_DEPTH].iter().all(|&c| c == PitCell::Floor));
    }

    #[test]
    fn cells_above_the_rim_never_collide() {
        let pit = Pit::from_ascii(
            "############\n\
             ############\n\
             ############",
        );
        let candidate = cells(&[(-3, 0), (-2, 0), (-1, 0), (-1, 1)]);
        assert!(!pit.is_colliding(&candidate));
    }

    #[test]
    fn occupied_cells_and_the_floor_collide() {
        let pit = Pit::INITIAL;
        let into_floor = cells(&[(20, 4), (20, 5), (21, 4), (21, 5)]);
        assert!(pit.is_colliding(&into_floor));

        let above_floor = cells(&[(19, 4), (19, 5), (20, 4), (20, 5)]);
        assert!(!pit.is_colliding(&above_floor));

        let pit = Pit::from_ascii("......#.....");
        assert!(pit.is_colliding(&cells(&[(0, 6)])));
        assert!(!pit.is_colliding(&cells(&[(0, 5)])));
    }

    #[test]
    fn locking_marks_cells_and_counters() {
        let mut pit = Pit::INITIAL;
        let set = cells(&[(18, 3), (18, 4), (19, 3), (19, 4)]);
        pit.lock(&set, ShapeKind::O).unwrap();

        assert_eq!(occupied_count(&pit), 4);
        for cell in &set {
            let (row, col) = (
                usize::try_from(cell.row).unwrap(),
                usize::try_from(cell.col).unwrap(),
            );
            assert_eq!(pit.rows[row][col], PitCell::Block(ShapeKind::O));
        }
        assert_eq!(pit.row_fill[18], 2);
        assert_eq!(pit.row_fill[19], 2);
    }

    #[test]
    fn locking_above_the_rim_clears_the_pit() {
        let mut pit = Pit::from_ascii("########....");
        assert_eq!(occupied_count(&pit), 8);

        let set = cells(&[(-1, 5), (0, 5), (1, 5), (2, 5)]);
        let result = pit.lock(&set, ShapeKind::I);
        assert!(result.is_err());
        assert_eq!(pit, Pit::INITIAL);
    }

    #[test]
    fn full_row_clears_and_rows_above_shift_down() {
        // Row 2 is full; rows 0 and 1 carry partial stacks.
        let mut pit = Pit::from_ascii(
            "#...........\n\
             .#........#.\n\
             ############",
        );
        let before = occupied_count(&pit);

        let clear = pit.clear_full_rows();
        assert_eq!(clear.rows_cleared(), 1);
        assert_eq!(clear.spark_cells().len(), PIT_WIDTH);
        assert!(clear.spark_cells().iter().all(|c| c.row == 2));

        assert_eq!(occupied_count(&pit), before - PIT_WIDTH);
        let expected = Pit::from_ascii(
            "............\n\
             #...........\n\
             .#........#.",
        );
        assert_eq!(pit, expected);
        assert_eq!(pit.row_fill[1], 1);
        assert_eq!(pit.row_fill[2], 2);
    }

    #[test]
    fn simultaneous_clears_compact_together() {
        let mut pit = Pit::from_ascii(
            "..##........\n\
             ############\n\
             ....#.......\n\
             ############",
        );
        let clear = pit.clear_full_rows();
        assert_eq!(clear.rows_cleared(), 2);
        assert_eq!(clear.spark_cells().len(), 2 * PIT_WIDTH);

        let expected = Pit::from_ascii(
            "............\n\
             ............\n\
             ..##........\n\
             ....#.......",
        );
        assert_eq!(pit, expected);
    }

    #[test]
    fn partial_rows_do_not_clear() {
        let mut pit = Pit::from_ascii("###########.");
        let clear = pit.clear_full_rows();
        assert_eq!(clear.rows_cleared(), 0);
        assert!(clear.spark_cells().is_empty());
        assert_eq!(occupied_count(&pit), PIT_WIDTH - 1);
    }
}
