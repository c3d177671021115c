pub mod components;
pub mod focusable_ref;
pub mod provider_storage;
