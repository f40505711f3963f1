pub mod ease;
pub mod playhead;
pub mod style;
pub mod tween;
