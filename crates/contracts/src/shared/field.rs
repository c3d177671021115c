//! Layout of the field wrapper and its label.

use crate::enums::{LabelAlign, LabelPosition, NecessityIndicator};
use crate::shared::classes::{class_names, modifier, FIELD, FIELD_LABEL};
use crate::shared::label::LabelProps;
use crate::shared::props::LabelableProps;
use serde::{Deserialize, Serialize};

/// How a label marks whether its field must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NecessityMark {
    /// Asterisk announced as "(required)".
    Asterisk,
    Required,
    Optional,
}

impl NecessityMark {
    pub fn text(&self) -> &'static str {
        match self {
            NecessityMark::Asterisk => "*",
            NecessityMark::Required => "(required)",
            NecessityMark::Optional => "(optional)",
        }
    }

    pub fn aria_label(&self) -> Option<&'static str> {
        match self {
            NecessityMark::Asterisk => Some("(required)"),
            _ => None,
        }
    }

    /// `is_required` may be unset; that reads as not required.
    pub fn for_field(indicator: NecessityIndicator, is_required: Option<bool>) -> Option<Self> {
        let required = is_required.unwrap_or(false);
        match indicator {
            NecessityIndicator::Icon => required.then_some(NecessityMark::Asterisk),
            NecessityIndicator::Label if required => Some(NecessityMark::Required),
            NecessityIndicator::Label => Some(NecessityMark::Optional),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLabel {
    pub id: Option<String>,
    pub html_for: Option<String>,
    pub class_name: String,
    pub text: String,
    pub necessity: Option<NecessityMark>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLayout {
    pub class_name: String,
    pub label: Option<FieldLabel>,
}

impl FieldLayout {
    pub fn derive(labelable: &LabelableProps, label_props: &LabelProps, is_required: Option<bool>) -> Self {
        let position = labelable.label_position;
        let label = labelable.visible_label().map(|text| FieldLabel {
            id: label_props.id.clone(),
            html_for: label_props.html_for.clone(),
            class_name: class_names([
                Some(FIELD_LABEL),
                modifier(FIELD_LABEL, position.class_suffix(), position == LabelPosition::Side).as_deref(),
                modifier(FIELD_LABEL, "alignEnd", labelable.label_align == LabelAlign::End).as_deref(),
            ]),
            text: text.to_string(),
            necessity: NecessityMark::for_field(labelable.necessity_indicator, is_required),
        });

        let positioned = modifier(FIELD, position.class_suffix(), label.is_some());
        FieldLayout {
            class_name: class_names([Some(FIELD), positioned.as_deref()]),
            label,
        }
    }
}
