use std::time::Duration;

use crossterm::event::{Event, KeyCode};
use pitris_engine::{Cell, GameInput, GameSession, SessionState, ShapeGenerator, ShapeSeed};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::view::{particles::ParticleField, widgets::GameDisplay};

#[derive(Debug)]
pub struct PlayScreen {
    session: GameSession,
    particles: ParticleField,
    best_score: i32,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(seed: Option<ShapeSeed>, best_score: i32) -> Self {
        let session = match seed {
            Some(seed) => GameSession::with_generator(ShapeGenerator::with_seed(seed)),
            None => GameSession::new(),
        };
        Self {
            session,
            particles: ParticleField::new(),
            best_score,
            is_exiting: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.is_exiting
    }

    pub fn best_score(&self) -> i32 {
        self.best_score
    }

    pub fn fall_interval(&self) -> Duration {
        self.session.fall_interval()
    }

    pub fn handle_event(&mut self, event: &Event) {
        let is_playing = self.session.state().is_playing();
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Left if is_playing => self.apply(GameInput::MoveLeft),
                KeyCode::Right if is_playing => self.apply(GameInput::MoveRight),
                KeyCode::Up if is_playing => self.apply(GameInput::Rotate),
                KeyCode::Down if is_playing => self.apply(GameInput::SoftDrop),
                KeyCode::Char(' ') | KeyCode::Enter if is_playing => self.apply(GameInput::Drop),
                KeyCode::Char('r') if !is_playing => self.restart(),
                KeyCode::Char('q') | KeyCode::Esc => self.is_exiting = true,
                _ => {}
            }
        }
    }

    /// One gravity step, driven by the tick timer.
    pub fn update(&mut self) {
        self.session.tick();
        self.after_step();
    }

    /// Ages the particle animation, driven by the frame timer.
    pub fn advance_particles(&mut self) {
        self.particles.advance();
    }

    fn apply(&mut self, input: GameInput) {
        self.session.apply(input);
        self.after_step();
    }

    fn after_step(&mut self) {
        self.particles.spawn(self.session.take_sparks());
        let score = i32::try_from(self.session.stats().score()).unwrap_or(i32::MAX);
        if score > self.best_score {
            self.best_score = score;
        }
    }

    fn restart(&mut self) {
        self.session.restart();
        self.particles.clear();
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let sparks: Vec<Cell> = self.particles.cells().collect();
        let display = GameDisplay::new(&self.session, &sparks, self.best_score);
        let help_text = match self.session.state() {
            SessionState::Playing => {
                "Controls: ← → (Move) | ↑ (Rotate) | ↓ (Soft Drop) | Space (Drop) | Q (Quit)"
            }
            SessionState::GameOver => "Controls: R (Restart) | Q (Quit)",
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Length(24), Constraint::Length(1)])
                .areas::<2>(frame.area());
        frame.render_widget(display, main_area);
        frame.render_widget(help_text, help_area);
    }
}
