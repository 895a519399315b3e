pub use self::{pit::*, shape::*};

pub(crate) mod pit;
pub(crate) mod shape;

/// Number of columns in the pit.
pub const PIT_WIDTH: usize = 12;

/// Number of visible rows in the pit. One extra floor row sits below.
pub const PIT_DEPTH: usize = 21;
