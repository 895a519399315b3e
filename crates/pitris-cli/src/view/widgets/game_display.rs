use pitris_engine::{Cell, GameSession, SessionState};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};

use crate::view::widgets::{PitDisplay, ShapePreview, StatsDisplay, color, style};

/// The whole play screen: stats on the left, the pit in the middle, and the
/// next-shape preview on the right.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    session: &'a GameSession,
    sparks: &'a [Cell],
    best_score: i32,
    horizontal_padding: u16,
    vertical_padding: u16,
}

impl<'a> GameDisplay<'a> {
    pub fn new(session: &'a GameSession, sparks: &'a [Cell], best_score: i32) -> Self {
        Self {
            session,
            sparks,
            best_score,
            horizontal_padding: 1,
            vertical_padding: 0,
        }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = style::DEFAULT;
        let block_padding = Padding::symmetric(self.horizontal_padding, self.vertical_padding);
        let border_style = match self.session.state() {
            SessionState::Playing => color::WHITE,
            SessionState::GameOver => color::RED,
        };

        let pit = PitDisplay::new(self.session.pit())
            .falling(self.session.falling())
            .sparks(self.sparks)
            .block(Block::bordered().border_style(border_style).style(style));
        let preview = ShapePreview::new().shape(self.session.next_shape()).block(
            Block::bordered()
                .title(Line::from("NEXT").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style),
        );
        let stats = StatsDisplay::new(self.session.stats(), self.best_score).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style),
        );

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(pit.width()),
            Constraint::Length(preview.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(left_column);
        let [pit_area] = Layout::vertical([Constraint::Length(pit.height())]).areas(center_column);
        let [preview_area] =
            Layout::vertical([Constraint::Length(preview.height())]).areas(right_column);

        let pit_width = pit.width();
        stats.render(stats_area, buf);
        pit.render(pit_area, buf);
        preview.render(preview_area, buf);

        if self.session.state().is_game_over() {
            let popup_style = Style::new().fg(color::WHITE).bg(color::RED);
            let block = Block::new().style(popup_style);
            let text = Text::styled("GAME OVER!!", popup_style).centered();
            let area = pit_area.centered(Constraint::Length(pit_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
