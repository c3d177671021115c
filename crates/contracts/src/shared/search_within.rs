//! Everything a SearchWithin group renders, derived from its props.

use crate::shared::classes::{class_names, SEARCH_WITHIN};
use crate::shared::field::FieldLayout;
use crate::shared::label::{resolve_label, LabelIds};
use crate::shared::props::SearchWithinProps;
use crate::shared::provider::ProviderDefaults;
use crate::shared::slots::SlotMap;
use crate::shared::style::style_props;
use serde::{Deserialize, Serialize};

pub const GROUP_ROLE: &str = "group";

/// Attributes of the `role="group"` container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAttrs {
    pub id: String,
    pub role: String,
    pub class_name: String,
    pub aria_labelledby: Option<String>,
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWithinModel {
    pub field: FieldLayout,
    /// Inline style for the field wrapper.
    pub style: Option<String>,
    pub group: GroupAttrs,
    pub slots: SlotMap,
}

impl SearchWithinModel {
    pub fn derive(props: &SearchWithinProps, provider: &ProviderDefaults, ids: &LabelIds) -> Self {
        let props = provider.resolve(props);
        let style = style_props(&props.style, provider.direction);
        let mut aria = resolve_label(&props.labelable, &props.dom, ids);

        // The group div is not labelable; the label targets the search input.
        let input_id = format!("{}-input", ids.field_id);
        if aria.label_props.id.is_some() {
            aria.label_props.html_for = Some(input_id.clone());
        }

        let is_disabled = props.is_disabled.unwrap_or(false);
        let label_id = aria.label_props.id.clone();
        let slots = SlotMap::build(is_disabled, props.is_required, label_id.clone(), Some(input_id));

        // Without a visible label the group falls back to the caller's aria props.
        let (aria_labelledby, aria_label) = match label_id {
            Some(id) => (Some(id), None),
            None => (aria.field_props.aria_labelledby.clone(), aria.field_props.aria_label.clone()),
        };

        SearchWithinModel {
            field: FieldLayout::derive(&props.labelable, &aria.label_props, props.is_required),
            style: style.style,
            group: GroupAttrs {
                id: aria.field_props.id,
                role: GROUP_ROLE.to_string(),
                class_name: class_names([Some(SEARCH_WITHIN), style.class_name.as_deref()]),
                aria_labelledby,
                aria_label,
            },
            slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::props::{DomProps, LabelableProps, StyleProps};
    use crate::shared::slots::SlotName;

    fn ids() -> LabelIds {
        LabelIds::new("field-1", "label-1")
    }

    fn labelled() -> SearchWithinProps {
        SearchWithinProps {
            labelable: LabelableProps {
                label: Some("Search".into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn derive(props: &SearchWithinProps) -> SearchWithinModel {
        SearchWithinModel::derive(props, &ProviderDefaults::default(), &ids())
    }

    #[test]
    fn test_group_is_labelled_by_label_id() {
        let model = derive(&labelled());
        assert_eq!(model.group.role, "group");
        assert_eq!(model.group.aria_labelledby.as_deref(), Some("label-1"));
        assert_eq!(
            model.field.label.as_ref().and_then(|l| l.id.as_deref()),
            Some("label-1")
        );
        assert_eq!(model.group.id, "field-1");
    }

    #[test]
    fn test_label_targets_search_input() {
        let model = derive(&labelled());
        let label = model.field.label.unwrap();
        assert_eq!(label.html_for.as_deref(), Some("field-1-input"));
        assert_eq!(model.slots.search_field.id.as_deref(), Some("field-1-input"));
        assert_ne!(label.html_for.as_deref(), Some(model.group.id.as_str()));
        assert_eq!(model.slots.picker.id, None);
    }

    #[test]
    fn test_slots_suppress_label_and_quiet() {
        let mut props = labelled();
        props.is_disabled = Some(true);
        props.is_required = Some(true);
        let model = derive(&props);
        for (_, slot) in model.slots.iter() {
            assert_eq!(slot.label, None);
            assert!(!slot.is_quiet);
            assert_eq!(slot.aria_labelledby.as_deref(), Some("label-1"));
        }
    }

    #[test]
    fn test_disabled_propagates_to_both_slots() {
        let mut props = labelled();
        props.is_disabled = Some(true);
        let model = derive(&props);
        assert!(model.slots.get(SlotName::SearchField).is_disabled);
        assert!(model.slots.get(SlotName::Picker).is_disabled);

        let model = derive(&labelled());
        assert!(!model.slots.get(SlotName::SearchField).is_disabled);
        assert!(!model.slots.get(SlotName::Picker).is_disabled);
    }

    #[test]
    fn test_required_passes_through_unchanged() {
        for required in [None, Some(false), Some(true)] {
            let mut props = labelled();
            props.is_required = required;
            let model = derive(&props);
            assert_eq!(model.slots.search_field.is_required, required);
            assert_eq!(model.slots.picker.is_required, required);
        }
    }

    #[test]
    fn test_caller_class_is_appended() {
        let mut props = labelled();
        props.style = StyleProps {
            unsafe_class_name: Some("toolbar-search".into()),
            width: Some("size-3600".into()),
            ..Default::default()
        };
        let model = derive(&props);
        assert_eq!(model.group.class_name, "spectrum-SearchWithin toolbar-search");
        assert_eq!(
            model.style.as_deref(),
            Some("width: var(--spectrum-global-dimension-size-3600, var(--spectrum-alias-size-3600))")
        );

        assert_eq!(derive(&labelled()).group.class_name, "spectrum-SearchWithin");
    }

    #[test]
    fn test_provider_defaults_sit_beneath_props() {
        let provider = ProviderDefaults {
            is_disabled: Some(true),
            is_required: Some(true),
            ..Default::default()
        };
        let model = SearchWithinModel::derive(&labelled(), &provider, &ids());
        assert!(model.slots.picker.is_disabled);
        assert_eq!(model.slots.picker.is_required, Some(true));
        assert_eq!(
            model.field.label.and_then(|l| l.necessity),
            Some(crate::shared::field::NecessityMark::Asterisk)
        );

        let mut props = labelled();
        props.is_disabled = Some(false);
        let model = SearchWithinModel::derive(&props, &provider, &ids());
        assert!(!model.slots.picker.is_disabled);
    }

    #[test]
    fn test_unlabelled_group_uses_aria_label() {
        let props = SearchWithinProps {
            dom: DomProps {
                aria_label: Some("Search products".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let model = derive(&props);
        assert_eq!(model.group.aria_labelledby, None);
        assert_eq!(model.group.aria_label.as_deref(), Some("Search products"));
        assert_eq!(model.field.label, None);
        assert_eq!(model.slots.search_field.aria_labelledby, None);
    }

    #[test]
    fn test_derive_is_repeatable() {
        let props = labelled();
        assert_eq!(derive(&props), derive(&props));
    }
}
