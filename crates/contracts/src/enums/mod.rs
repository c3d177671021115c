pub mod direction;
pub mod label_layout;

pub use direction::Direction;
pub use label_layout::{LabelAlign, LabelPosition, NecessityIndicator};
