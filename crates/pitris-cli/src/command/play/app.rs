use crossterm::event::Event;
use pitris_engine::ShapeSeed;
use ratatui::Frame;

use crate::{
    command::play::screen::PlayScreen,
    tui::{App, Tui},
};

const FPS: f64 = 30.0;

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
}

impl PlayApp {
    pub fn new(seed: Option<ShapeSeed>, best_score: i32) -> Self {
        Self {
            screen: PlayScreen::new(seed, best_score),
        }
    }

    pub fn best_score(&self) -> i32 {
        self.screen.best_score()
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_frame_rate(FPS);
        tui.set_tick_interval(Some(self.screen.fall_interval()));
    }

    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) {
        self.screen.handle_event(&event);
        tui.set_tick_interval(Some(self.screen.fall_interval()));
    }

    fn frame(&mut self, _tui: &mut Tui) {
        self.screen.advance_particles();
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self, tui: &mut Tui) {
        self.screen.update();
        tui.set_tick_interval(Some(self.screen.fall_interval()));
    }
}
