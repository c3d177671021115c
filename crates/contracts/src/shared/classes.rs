//! Class name markers shared by the group and its slotted children.

pub const SEARCH_WITHIN: &str = "spectrum-SearchWithin";
/// Given to whatever occupies the search field slot.
pub const TEXTFIELD: &str = "spectrum-Textfield";
/// Given to whatever occupies the picker slot.
pub const DROPDOWN: &str = "spectrum-Dropdown";

pub const FIELD: &str = "spectrum-Field";
pub const FIELD_LABEL: &str = "spectrum-FieldLabel";

pub const SEARCH: &str = "spectrum-Search";
pub const PICKER: &str = "spectrum-Picker";

/// Joins the present, non-blank tokens with single spaces.
pub fn class_names<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    tokens
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `base` with `base--modifier` appended when `on` is set.
pub fn modifier(base: &str, modifier: &str, on: bool) -> Option<String> {
    on.then(|| format!("{}--{}", base, modifier))
}
