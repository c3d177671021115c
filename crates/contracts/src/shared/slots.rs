//! Defaults a group hands to the children occupying its named slots.

use crate::shared::classes::{class_names, modifier, DROPDOWN, TEXTFIELD};
use crate::shared::provider::ProviderDefaults;
use serde::{Deserialize, Serialize};

/// The named slots of a SearchWithin group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotName {
    #[serde(rename = "searchfield")]
    SearchField,
    #[serde(rename = "picker")]
    Picker,
}

impl SlotName {
    pub fn code(&self) -> &'static str {
        match self {
            SlotName::SearchField => "searchfield",
            SlotName::Picker => "picker",
        }
    }

    /// Class marker given to whatever occupies this slot.
    pub fn class_name(&self) -> &'static str {
        match self {
            SlotName::SearchField => TEXTFIELD,
            SlotName::Picker => DROPDOWN,
        }
    }

    pub fn all() -> [SlotName; 2] {
        [SlotName::SearchField, SlotName::Picker]
    }
}

/// Props injected into a slotted child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDefaults {
    pub unsafe_class_name: String,
    /// Element id the group label points at; set for the search field only.
    pub id: Option<String>,
    pub is_disabled: bool,
    pub is_required: Option<bool>,
    /// Always `None`: the group's label replaces per-child labels.
    pub label: Option<String>,
    pub is_quiet: bool,
    pub aria_labelledby: Option<String>,
}

impl SlotDefaults {
    pub fn for_slot(
        slot: SlotName,
        is_disabled: bool,
        is_required: Option<bool>,
        aria_labelledby: Option<String>,
    ) -> Self {
        Self {
            unsafe_class_name: slot.class_name().to_string(),
            id: None,
            is_disabled,
            is_required,
            label: None,
            is_quiet: false,
            aria_labelledby,
        }
    }
}

/// Slot defaults keyed by slot name; serializes as `{"searchfield": .., "picker": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotMap {
    #[serde(rename = "searchfield")]
    pub search_field: SlotDefaults,
    pub picker: SlotDefaults,
}

impl SlotMap {
    /// Both slots share every derived value except their class marker. The
    /// search field additionally receives `input_id`, the target of the label.
    pub fn build(
        is_disabled: bool,
        is_required: Option<bool>,
        aria_labelledby: Option<String>,
        input_id: Option<String>,
    ) -> Self {
        let slot = |name| SlotDefaults::for_slot(name, is_disabled, is_required, aria_labelledby.clone());
        SlotMap {
            search_field: SlotDefaults {
                id: input_id,
                ..slot(SlotName::SearchField)
            },
            picker: slot(SlotName::Picker),
        }
    }

    pub fn get(&self, slot: SlotName) -> &SlotDefaults {
        match slot {
            SlotName::SearchField => &self.search_field,
            SlotName::Picker => &self.picker,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotName, &SlotDefaults)> {
        SlotName::all().into_iter().map(move |name| (name, self.get(name)))
    }
}

/// Props a slot consumer sets on itself; anything set here beats the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotOverrides {
    /// Appended after the slot's class marker rather than replacing it.
    pub unsafe_class_name: Option<String>,
    pub id: Option<String>,
    pub is_disabled: Option<bool>,
    pub is_required: Option<bool>,
    pub is_read_only: Option<bool>,
    pub label: Option<String>,
    pub is_quiet: Option<bool>,
    pub aria_labelledby: Option<String>,
}

/// Effective props of a slot consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlottedProps {
    pub unsafe_class_name: Option<String>,
    pub id: Option<String>,
    pub is_disabled: bool,
    pub is_required: Option<bool>,
    pub is_read_only: bool,
    pub label: Option<String>,
    pub is_quiet: bool,
    pub aria_labelledby: Option<String>,
}

impl SlottedProps {
    /// Own props first, then the slot, then the provider, then built-ins.
    pub fn resolve(slot: Option<&SlotDefaults>, own: &SlotOverrides, provider: &ProviderDefaults) -> Self {
        let own = own.clone();
        let is_read_only = own.is_read_only.or(provider.is_read_only).unwrap_or(false);
        match slot {
            Some(slot) => SlottedProps {
                unsafe_class_name: Some(class_names([
                    Some(slot.unsafe_class_name.as_str()),
                    own.unsafe_class_name.as_deref(),
                ])),
                id: own.id.or_else(|| slot.id.clone()),
                is_disabled: own.is_disabled.unwrap_or(slot.is_disabled),
                is_required: own.is_required.or(slot.is_required).or(provider.is_required),
                is_read_only,
                label: own.label.or_else(|| slot.label.clone()),
                is_quiet: own.is_quiet.unwrap_or(slot.is_quiet),
                aria_labelledby: own.aria_labelledby.or_else(|| slot.aria_labelledby.clone()),
            },
            None => SlottedProps {
                unsafe_class_name: own.unsafe_class_name,
                id: own.id,
                is_disabled: own.is_disabled.or(provider.is_disabled).unwrap_or(false),
                is_required: own.is_required.or(provider.is_required),
                is_read_only,
                label: own.label,
                is_quiet: own.is_quiet.or(provider.is_quiet).unwrap_or(false),
                aria_labelledby: own.aria_labelledby,
            },
        }
    }

    /// Wrapper class of a slot consumer whose own block class is `base`.
    pub fn class_name(&self, base: &str) -> String {
        class_names([
            Some(base),
            modifier(base, "quiet", self.is_quiet).as_deref(),
            self.is_disabled.then_some("is-disabled"),
            self.unsafe_class_name.as_deref(),
        ])
    }
}
