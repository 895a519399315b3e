use std::iter;

use pitris_engine::{Cell, FallingShape, PIT_DEPTH, PIT_WIDTH, Pit, PitCell};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use crate::view::widgets::BlockDisplay;

/// The pit grid with the falling shape and any live sparks drawn on top.
#[derive(Debug)]
pub struct PitDisplay<'a> {
    pit: &'a Pit,
    falling: Option<&'a FallingShape>,
    sparks: &'a [Cell],
    block: Option<BlockWidget<'a>>,
}

impl<'a> PitDisplay<'a> {
    pub fn new(pit: &'a Pit) -> Self {
        Self {
            pit,
            falling: None,
            sparks: &[],
            block: None,
        }
    }

    pub fn falling(self, falling: &'a FallingShape) -> Self {
        Self {
            falling: Some(falling),
            ..self
        }
    }

    pub fn sparks(self, sparks: &'a [Cell]) -> Self {
        Self { sparks, ..self }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        u16::try_from(PIT_WIDTH).unwrap_or(u16::MAX) * BlockDisplay::width()
            + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        u16::try_from(PIT_DEPTH).unwrap_or(u16::MAX) * BlockDisplay::height()
            + super::block_vertical_margin(self.block.as_ref())
    }
}

fn grid_index(cell: Cell) -> Option<(usize, usize)> {
    let row = usize::try_from(cell.row).ok()?;
    let col = usize::try_from(cell.col).ok()?;
    (row < PIT_DEPTH && col < PIT_WIDTH).then_some((row, col))
}

impl Widget for PitDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PitDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut rows: Vec<[PitCell; PIT_WIDTH]> = self.pit.visible_rows().copied().collect();
        if let Some(falling) = self.falling {
            for &cell in falling.cells() {
                // Cells above the rim are not drawn.
                if let Some((row, col)) = grid_index(cell) {
                    rows[row][col] = PitCell::Block(falling.kind());
                }
            }
        }

        let col_constraints = (0..PIT_WIDTH).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints = (0..PIT_DEPTH).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);

        let grid: Vec<Vec<Rect>> = area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal))
            .collect();

        for (grid_row, row) in iter::zip(&grid, &rows) {
            for (&grid_cell, &cell) in iter::zip(grid_row, row) {
                BlockDisplay::from_cell(cell, true).render(grid_cell, buf);
            }
        }

        for &spark in self.sparks {
            if let Some((row, col)) = grid_index(spark) {
                BlockDisplay::spark().render(grid[row][col], buf);
            }
        }
    }
}
