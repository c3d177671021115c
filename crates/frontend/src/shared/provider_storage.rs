//! Provider defaults persisted in localStorage.
//!
//! The demo composition root reads an optional JSON override from here and
//! injects the result into every control it renders.

use contracts::shared::provider::ProviderDefaults;
use web_sys::window;

const PROVIDER_STORAGE_KEY: &str = "searchwithin-provider";

/// Load provider defaults from localStorage.
pub fn load_provider_defaults() -> ProviderDefaults {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(PROVIDER_STORAGE_KEY).ok().flatten());
    parse_provider_defaults(stored.as_deref())
}

/// Malformed JSON falls back to the built-in defaults.
pub fn parse_provider_defaults(stored: Option<&str>) -> ProviderDefaults {
    match stored {
        None => ProviderDefaults::default(),
        Some(json) => ProviderDefaults::from_json(json).unwrap_or_else(|err| {
            log::warn!("Ignoring stored provider defaults: {:#}", err);
            ProviderDefaults::default()
        }),
    }
}
