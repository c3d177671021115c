use serde::{Deserialize, Serialize};

/// Where the field label sits relative to the field body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    #[default]
    Top,
    Side,
}

impl LabelPosition {
    /// Modifier suffix used by the field and label class names.
    pub fn class_suffix(&self) -> &'static str {
        match self {
            LabelPosition::Top => "positionTop",
            LabelPosition::Side => "positionSide",
        }
    }
}

/// Horizontal alignment of the label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlign {
    #[default]
    Start,
    End,
}

/// How a required (or optional) field is marked in its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NecessityIndicator {
    /// Asterisk, shown only for required fields.
    #[default]
    Icon,
    /// "(required)" / "(optional)" text, always shown.
    Label,
}
