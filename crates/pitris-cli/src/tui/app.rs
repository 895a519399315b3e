use crossterm::event::Event;
use ratatui::Frame;

use crate::tui::Tui;

/// Trait for TUI applications.
///
/// Applications executed by `Tui::run()` must implement this trait.
pub trait App {
    /// Initializes the application.
    ///
    /// Called at the start of `Tui::run()`. Use this to configure the tick
    /// and frame intervals.
    fn init(&mut self, tui: &mut Tui);

    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, tui: &mut Tui, event: Event);

    /// Advances time-based animation state (called before each draw).
    fn frame(&mut self, tui: &mut Tui);

    /// Draws the screen (called on each `TuiEvent::Frame`).
    fn draw(&self, frame: &mut Frame);

    /// Updates game logic (called on each `TuiEvent::Tick`).
    fn update(&mut self, tui: &mut Tui);
}
