pub mod classes;
pub mod field;
pub mod label;
pub mod props;
pub mod provider;
pub mod search_within;
pub mod slots;
pub mod style;
