pub mod particles;
pub mod widgets;
