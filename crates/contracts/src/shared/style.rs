//! Turns [`StyleProps`] into DOM-ready class and inline style attributes.

use crate::enums::Direction;
use crate::shared::props::StyleProps;
use serde::{Deserialize, Serialize};

/// Class and inline style for the element that carries the style props.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleAttrs {
    pub class_name: Option<String>,
    pub style: Option<String>,
}

/// Convert a dimension into a CSS value.
///
/// Bare numbers are pixels, `size-*` and `static-size-*` tokens resolve to the
/// global dimension variables, everything else is passed through untouched.
pub fn dimension_value(value: &str) -> String {
    let value = value.trim();
    if value.parse::<f64>().map_or(false, f64::is_finite) {
        return format!("{}px", value);
    }
    if is_size_token(value) {
        return format!(
            "var(--spectrum-global-dimension-{0}, var(--spectrum-alias-{0}))",
            value
        );
    }
    value.to_string()
}

fn is_size_token(value: &str) -> bool {
    let rest = value.strip_prefix("static-").unwrap_or(value);
    match rest.strip_prefix("size-") {
        Some(num) => !num.is_empty() && num.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

pub fn style_props(props: &StyleProps, direction: Direction) -> StyleAttrs {
    let dimensions = [
        ("width", &props.width),
        ("min-width", &props.min_width),
        ("max-width", &props.max_width),
        ("height", &props.height),
        ("margin", &props.margin),
        ("margin-top", &props.margin_top),
        ("margin-bottom", &props.margin_bottom),
    ];

    let mut declarations: Vec<String> = dimensions
        .iter()
        .filter_map(|(name, value)| {
            value
                .as_deref()
                .map(|v| format!("{}: {}", name, dimension_value(v)))
        })
        .collect();

    if let Some(v) = props.margin_start.as_deref() {
        declarations.push(format!("margin-{}: {}", direction.start_side(), dimension_value(v)));
    }
    if let Some(v) = props.margin_end.as_deref() {
        declarations.push(format!("margin-{}: {}", direction.end_side(), dimension_value(v)));
    }
    if props.is_hidden {
        declarations.push("display: none".to_string());
    }
    if let Some(raw) = props.unsafe_style.as_deref() {
        let raw = raw.trim().trim_end_matches(';');
        if !raw.is_empty() {
            declarations.push(raw.to_string());
        }
    }

    StyleAttrs {
        class_name: props
            .unsafe_class_name
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
        style: (!declarations.is_empty()).then(|| declarations.join("; ")),
    }
}
