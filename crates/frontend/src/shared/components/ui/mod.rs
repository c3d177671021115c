pub mod field;
pub mod picker;
pub mod search_field;
pub mod search_within;

pub use field::Field;
pub use picker::Picker;
pub use search_field::SearchField;
pub use search_within::{SearchWithin, SlotContext};
