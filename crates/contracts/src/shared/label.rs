//! Accessible label association between a visible label and its field.

use crate::shared::props::{DomProps, LabelableProps};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const ID_PREFIX: &str = "spectrum";

const MISSING_LABEL_WARNING: &str = "If you do not provide a visible label, you must specify an \
     aria-label or aria-labelledby attribute for accessibility";

/// Generate a document-unique element id.
pub fn generate_id() -> String {
    format!("{}-{}", ID_PREFIX, Uuid::new_v4().simple())
}

/// Ids allocated once per mounted field so re-renders keep the same wiring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelIds {
    pub field_id: String,
    pub label_id: String,
}

impl LabelIds {
    #[cfg(test)]
    pub fn new(field_id: impl Into<String>, label_id: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            label_id: label_id.into(),
        }
    }

    /// Use the caller's id for the field when given, generate the rest.
    pub fn generate(field_id: Option<String>) -> Self {
        Self {
            field_id: field_id.filter(|id| !id.is_empty()).unwrap_or_else(generate_id),
            label_id: generate_id(),
        }
    }
}

/// Attributes for the `<label>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelProps {
    pub id: Option<String>,
    pub html_for: Option<String>,
}

/// Labelling attributes for the field element itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAria {
    pub id: String,
    pub aria_label: Option<String>,
    pub aria_labelledby: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelAria {
    pub label_props: LabelProps,
    pub field_props: FieldAria,
}

/// Wire a visible label (if any) to the field and merge caller aria props.
pub fn resolve_label(labelable: &LabelableProps, dom: &DomProps, ids: &LabelIds) -> LabelAria {
    let aria_label = dom.aria_label.clone().filter(|l| !l.is_empty());
    let mut labelledby = dom.aria_labelledby.clone().filter(|l| !l.trim().is_empty());
    let mut label_props = LabelProps::default();

    if labelable.visible_label().is_some() {
        labelledby = Some(match labelledby {
            Some(existing) => format!("{} {}", ids.label_id, existing),
            None => ids.label_id.clone(),
        });
        label_props = LabelProps {
            id: Some(ids.label_id.clone()),
            html_for: Some(ids.field_id.clone()),
        };
    } else if labelledby.is_none() && aria_label.is_none() {
        log::warn!("{}", MISSING_LABEL_WARNING);
    }

    // A field with both an aria-label and labelledby ids names itself too.
    let aria_labelledby = labelledby.map(|list| {
        let mut ids_in_order: Vec<&str> = Vec::new();
        for id in list.split_whitespace() {
            if !ids_in_order.contains(&id) {
                ids_in_order.push(id);
            }
        }
        if aria_label.is_some() && !ids_in_order.contains(&ids.field_id.as_str()) {
            ids_in_order.push(&ids.field_id);
        }
        ids_in_order.join(" ")
    });

    LabelAria {
        label_props,
        field_props: FieldAria {
            id: ids.field_id.clone(),
            aria_label,
            aria_labelledby,
        },
    }
}
