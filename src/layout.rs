pub mod bridge;
pub mod classes;

pub use bridge::{Layout, TextMetrics, solve};
pub use classes::{Align, BoxStyle, Display, Edges, Insets, Justify, Length};
