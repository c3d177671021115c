//! Pure data model behind the SearchWithin field group.
//!
//! Nothing in this crate touches the DOM: props, provider defaults, style and
//! label derivation, and the slot map are plain values that the frontend
//! components render. Everything here is unit-tested natively.

pub mod enums;
pub mod shared;
