use pitris_engine::{PitCell, ShapeKind};
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::view::widgets::style;

/// One pit cell drawn as a two-column block.
#[derive(Debug)]
pub struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_cell(cell: PitCell, show_dots: bool) -> Self {
        match cell {
            PitCell::Empty => {
                if show_dots {
                    Self::new(style::EMPTY_DOT, ".")
                } else {
                    Self::new(style::EMPTY, "")
                }
            }
            PitCell::Floor => Self::new(style::FLOOR, ""),
            PitCell::Block(kind) => Self::new(Self::shape_style(kind), ""),
        }
    }

    pub fn spark() -> Self {
        Self::new(style::SPARK, "*")
    }

    fn shape_style(kind: ShapeKind) -> Style {
        match kind {
            ShapeKind::I => style::I_SHAPE,
            ShapeKind::J => style::J_SHAPE,
            ShapeKind::T => style::T_SHAPE,
            ShapeKind::L => style::L_SHAPE,
            ShapeKind::S => style::S_SHAPE,
            ShapeKind::Z => style::Z_SHAPE,
            ShapeKind::O => style::O_SHAPE,
        }
    }
}

impl Widget for BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // Use a Paragraph to fill the whole area, not just the cells with the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
