use std::time::Duration;

use crate::core::{
    pit::Pit,
    shape::{Cell, ShapeKind},
};

use super::{
    game_field::{FallingShape, GameField, StepOutcome},
    game_stats::GameStats,
    shape_generator::ShapeGenerator,
};

/// A player intent, already decoded from whatever raw input produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    Drop,
    Idle,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    GameOver,
}

const BASE_FALL_MILLIS: u64 = 500;
const MIN_FALL_MILLIS: u64 = 100;
const FALL_MILLIS_PER_LEVEL: u64 = 40;

/// One game from first spawn to game over, driving a [`GameField`] from
/// player inputs and gravity ticks and keeping score.
#[derive(Debug, Clone)]
pub struct GameSession {
    field: GameField,
    stats: GameStats,
    state: SessionState,
    sparks: Vec<Cell>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(ShapeGenerator::new())
    }

    #[must_use]
    pub fn with_generator(generator: ShapeGenerator) -> Self {
        Self {
            field: GameField::with_generator(generator),
            stats: GameStats::new(),
            state: SessionState::Playing,
            sparks: Vec::new(),
        }
    }

    #[must_use]
    pub fn pit(&self) -> &Pit {
        self.field.pit()
    }

    #[must_use]
    pub fn falling(&self) -> &FallingShape {
        self.field.falling()
    }

    #[must_use]
    pub fn next_shape(&self) -> ShapeKind {
        self.field.next_shape()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Time between gravity ticks at the current level. Shrinks by a fixed
    /// amount per level down to a floor.
    #[must_use]
    pub fn fall_interval(&self) -> Duration {
        let level = u64::from(self.stats.level());
        let millis = BASE_FALL_MILLIS
            .saturating_sub(FALL_MILLIS_PER_LEVEL * (level - 1))
            .max(MIN_FALL_MILLIS);
        Duration::from_millis(millis)
    }

    /// Applies one player input. Inputs are ignored once the game is over;
    /// `Quit` is the caller's concern and does nothing here.
    pub fn apply(&mut self, input: GameInput) {
        if !self.state.is_playing() {
            return;
        }
        match input {
            GameInput::MoveLeft => {
                let _ = self.field.try_shift_left();
            }
            GameInput::MoveRight => {
                let _ = self.field.try_shift_right();
            }
            GameInput::Rotate => {
                let _ = self.field.try_rotate();
            }
            GameInput::SoftDrop => {
                let outcome = self.field.step_down();
                self.complete_step(outcome);
            }
            GameInput::Drop => {
                let outcome = self.field.hard_drop();
                self.complete_step(outcome);
            }
            GameInput::Idle | GameInput::Quit => {}
        }
    }

    /// Advances gravity by one step. Call at each `fall_interval`.
    pub fn tick(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        let outcome = self.field.step_down();
        self.complete_step(outcome);
    }

    fn complete_step(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Advanced => {}
            StepOutcome::Locked(clear) => {
                self.stats.record_clear(clear.rows_cleared());
                self.sparks.extend(clear.into_spark_cells());
            }
            StepOutcome::Overflowed => self.state = SessionState::GameOver,
        }
    }

    /// Drains the spark positions accumulated since the last call. Each
    /// position is emitted exactly once, for the renderer to animate.
    pub fn take_sparks(&mut self) -> Vec<Cell> {
        std::mem::take(&mut self.sparks)
    }

    /// Starts a fresh game on the same RNG stream.
    pub fn restart(&mut self) {
        self.field.reset();
        self.stats = GameStats::new();
        self.state = SessionState::Playing;
        self.sparks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeSeed;

    fn seeded_session() -> GameSession {
        let seed: ShapeSeed = "0000000000000000000000000000002a".parse().unwrap();
        GameSession::with_generator(ShapeGenerator::with_seed(seed))
    }

    fn occupied_count(session: &GameSession) -> usize {
        session
            .pit()
            .visible_rows()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }

    #[test]
    fn fall_interval_shrinks_with_level() {
        let mut session = seeded_session();
        assert_eq!(session.fall_interval(), Duration::from_millis(500));

        // 20 cleared lines puts the session at level 3.
        session.stats.record_clear(4);
        session.stats.record_clear(4);
        session.stats.record_clear(4);
        session.stats.record_clear(4);
        session.stats.record_clear(4);
        assert_eq!(session.stats().level(), 3);
        assert_eq!(session.fall_interval(), Duration::from_millis(420));

        // Far past the floor the interval stops shrinking.
        for _ in 0..50 {
            session.stats.record_clear(4);
        }
        assert_eq!(session.fall_interval(), Duration::from_millis(100));
    }

    #[test]
    fn drop_locks_the_falling_shape() {
        let mut session = seeded_session();
        let next = session.next_shape();

        session.apply(GameInput::Drop);

        assert_eq!(occupied_count(&session), 4);
        assert_eq!(session.falling().kind(), next);
        assert!(session.state().is_playing());
    }

    #[test]
    fn lateral_inputs_move_the_shape() {
        let mut session = seeded_session();
        let col = session.falling().pivot().col;

        session.apply(GameInput::MoveLeft);
        assert_eq!(session.falling().pivot().col, col - 1);
        session.apply(GameInput::MoveRight);
        session.apply(GameInput::MoveRight);
        assert_eq!(session.falling().pivot().col, col + 1);
        session.apply(GameInput::Idle);
        assert_eq!(session.falling().pivot().col, col + 1);
    }

    #[test]
    fn soft_drop_advances_one_row() {
        let mut session = seeded_session();
        let row = session.falling().pivot().row;

        session.apply(GameInput::SoftDrop);
        assert_eq!(session.falling().pivot().row, row + 1);
    }

    #[test]
    fn unattended_session_eventually_tops_out() {
        let mut session = seeded_session();
        for _ in 0..10_000 {
            if session.state().is_game_over() {
                break;
            }
            session.tick();
        }
        assert!(session.state().is_game_over());
        // Overflow empties the pit for the next game.
        assert_eq!(occupied_count(&session), 0);

        // Ticks and inputs are inert until a restart.
        let score = session.stats().score();
        session.tick();
        session.apply(GameInput::Drop);
        assert!(session.state().is_game_over());
        assert_eq!(session.stats().score(), score);
        assert_eq!(occupied_count(&session), 0);
    }

    #[test]
    fn restart_begins_a_fresh_game() {
        let mut session = seeded_session();
        session.apply(GameInput::Drop);
        session.apply(GameInput::Drop);
        for _ in 0..10_000 {
            if session.state().is_game_over() {
                break;
            }
            session.tick();
        }
        assert!(session.state().is_game_over());

        session.restart();
        assert!(session.state().is_playing());
        assert_eq!(session.stats().score(), 0);
        assert_eq!(session.stats().cleared_lines(), 0);
        assert_eq!(occupied_count(&session), 0);
        assert!(session.take_sparks().is_empty());
    }

    #[test]
    fn sparks_are_drained_once() {
        let mut session = seeded_session();
        // Stacking without clearing produces no sparks.
        session.apply(GameInput::Drop);
        assert!(session.take_sparks().is_empty());
        assert!(session.take_sparks().is_empty());
    }
}
