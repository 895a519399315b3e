use pitris_engine::{Cell, PitCell, ShapeKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::BlockDisplay;

/// A single shape in its unrotated orientation, centered in the panel.
#[derive(Debug)]
pub struct ShapePreview<'a> {
    shape: Option<ShapeKind>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ShapePreview<'a> {
    pub fn new() -> Self {
        Self {
            shape: None,
            block: None,
        }
    }

    pub fn shape(self, shape: ShapeKind) -> Self {
        Self {
            shape: Some(shape),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        4 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Default for ShapePreview<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ShapePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ShapePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut grid_size = (0, 0);
        if let Some(shape) = self.shape {
            let (row_span, col_span) = shape.extents();
            grid_size.0 = u16::try_from(col_span + 1).unwrap_or(0);
            grid_size.1 = u16::try_from(row_span + 1).unwrap_or(0);
        }
        let shape_area = area.centered(
            Constraint::Length(grid_size.0 * BlockDisplay::width()),
            Constraint::Length(grid_size.1 * BlockDisplay::height()),
        );

        let col_constraints = (0..grid_size.0).map(|_| Constraint::Length(BlockDisplay::width()));
        let row_constraints = (0..grid_size.1).map(|_| Constraint::Length(BlockDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints).flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints);
        let grid_rows = shape_area
            .layout_vec(&vertical)
            .into_iter()
            .map(|row| row.layout_vec(&horizontal));

        let empty_block = BlockDisplay::from_cell(PitCell::Empty, false);

        if let Some(shape) = self.shape {
            let occupied_block = BlockDisplay::from_cell(PitCell::Block(shape), false);
            for (row, grid_row) in grid_rows.enumerate() {
                for (col, grid_cell) in grid_row.into_iter().enumerate() {
                    let cell = Cell::new(
                        i32::try_from(row).unwrap_or(i32::MAX),
                        i32::try_from(col).unwrap_or(i32::MAX),
                    );
                    if shape.cells().contains(&cell) {
                        Widget::render(&occupied_block, grid_cell, buf);
                    } else {
                        Widget::render(&empty_block, grid_cell, buf);
                    }
                }
            }
        } else {
            for cell in grid_rows.flatten() {
                Widget::render(&empty_block, cell, buf);
            }
        }
    }
}
