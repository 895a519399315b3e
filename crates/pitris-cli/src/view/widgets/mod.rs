use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    block_display::*, game_display::*, pit_display::*, shape_preview::*, stats_display::*,
};

mod block_display;
mod game_display;
mod pit_display;
mod shape_preview;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const PURPLE: Color = Color::Rgb(128, 0, 128);
    pub const ORANGE: Color = Color::Rgb(255, 165, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::view::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY: Style = bg_only(color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);
    pub const FLOOR: Style = bg_only(color::GRAY);
    pub const SPARK: Style = fg_bg(color::YELLOW, color::BLACK);

    pub const I_SHAPE: Style = bg_only(color::CYAN);
    pub const J_SHAPE: Style = bg_only(color::BLUE);
    pub const T_SHAPE: Style = bg_only(color::PURPLE);
    pub const L_SHAPE: Style = bg_only(color::ORANGE);
    pub const S_SHAPE: Style = bg_only(color::GREEN);
    pub const Z_SHAPE: Style = bg_only(color::RED);
    pub const O_SHAPE: Style = bg_only(color::YELLOW);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
