pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("shape colliding with occupied pit cells")]
pub struct ShapeCollisionError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("shape locked at or above the pit rim; pit has been cleared")]
pub struct PitOverflowError;
