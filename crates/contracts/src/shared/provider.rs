//! Defaults that a composition root hands to every control it renders.
//!
//! These stand in for an ambient theme/provider: instead of being looked up
//! implicitly, the caller constructs a [`ProviderDefaults`] and passes it to
//! the components that should honour it.

use crate::enums::Direction;
use crate::shared::props::SearchWithinProps;
use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderDefaults {
    pub is_disabled: Option<bool>,
    pub is_required: Option<bool>,
    pub is_quiet: Option<bool>,
    pub is_read_only: Option<bool>,
    pub direction: Direction,
}

impl ProviderDefaults {
    /// Parse defaults from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid provider defaults")
    }

    /// Merge these defaults beneath `props`. Explicit props always win.
    pub fn resolve(&self, props: &SearchWithinProps) -> SearchWithinProps {
        SearchWithinProps {
            is_disabled: props.is_disabled.or(self.is_disabled),
            is_required: props.is_required.or(self.is_required),
            ..props.clone()
        }
    }
}
