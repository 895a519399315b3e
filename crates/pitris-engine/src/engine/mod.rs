//! Game flow orchestration on top of the core geometry.
//!
//! - [`GameField`] - pit, falling shape, next shape, and the gravity step
//! - [`GameSession`] - input handling, scoring, fall speed, particle feed
//! - [`GameStats`] - score, lines, and level
//! - [`ShapeGenerator`] - uniform next-shape selection, optionally seeded
//!
//! A game advances one [`GameField::step_down`] at a time: the shape either
//! moves down a row, or it locks where it was, full rows clear, and the
//! next shape spawns two rows above the pit. A lock above the rim resets
//! the pit and ends the session.

pub use self::{game_field::*, game_session::*, game_stats::*, shape_generator::*};

mod game_field;
mod game_session;
mod game_stats;
mod shape_generator;
