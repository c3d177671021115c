use crate::enums::{LabelAlign, LabelPosition, NecessityIndicator};
use serde::{Deserialize, Serialize};

/// Props governing the visible, accessible label of a form control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelableProps {
    pub label: Option<String>,
    pub label_position: LabelPosition,
    pub label_align: LabelAlign,
    pub necessity_indicator: NecessityIndicator,
}

impl LabelableProps {
    /// The label text, if there is one worth rendering.
    pub fn visible_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|l| !l.is_empty())
    }
}

/// DOM passthrough attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomProps {
    pub id: Option<String>,
    pub aria_label: Option<String>,
    pub aria_labelledby: Option<String>,
}

/// Style overrides and layout dimensions.
///
/// Dimension fields accept a bare number (pixels), a `size-*` token or any
/// raw CSS value; see [`crate::shared::style::dimension_value`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleProps {
    pub unsafe_class_name: Option<String>,
    pub unsafe_style: Option<String>,
    pub width: Option<String>,
    pub min_width: Option<String>,
    pub max_width: Option<String>,
    pub height: Option<String>,
    pub margin: Option<String>,
    pub margin_top: Option<String>,
    pub margin_bottom: Option<String>,
    pub margin_start: Option<String>,
    pub margin_end: Option<String>,
    pub is_hidden: bool,
}

/// Everything the SearchWithin group accepts apart from its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchWithinProps {
    #[serde(flatten)]
    pub labelable: LabelableProps,
    #[serde(flatten)]
    pub dom: DomProps,
    #[serde(flatten)]
    pub style: StyleProps,
    /// Propagated to both slotted children.
    pub is_disabled: Option<bool>,
    /// Propagated as-is; `None` is never turned into `false`.
    pub is_required: Option<bool>,
}
