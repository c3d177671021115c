//! Imperative handle to a field group's focusable input.

use leptos::html;
use leptos::prelude::*;
use web_sys::{HtmlDivElement, HtmlInputElement};

/// Handle a parent keeps to move focus into a field group.
///
/// Focus goes to the inner input, never to the wrapper; the wrapper is only
/// exposed through [`FocusableRef::dom_node`].
#[derive(Clone, Copy)]
pub struct FocusableRef {
    pub(crate) input: NodeRef<html::Input>,
    pub(crate) wrapper: NodeRef<html::Div>,
}

impl FocusableRef {
    pub fn new() -> Self {
        Self {
            input: NodeRef::new(),
            wrapper: NodeRef::new(),
        }
    }

    /// Focus the inner input. Does nothing until it is mounted.
    pub fn focus(&self) {
        match self.input_element() {
            Some(input) => {
                if let Err(err) = input.focus() {
                    log::warn!("Failed to focus search input: {:?}", err);
                }
            }
            None => log::debug!("focus() called before the search input was mounted"),
        }
    }

    /// The element focus is delegated to.
    pub fn input_element(&self) -> Option<HtmlInputElement> {
        self.input.get_untracked()
    }

    /// The group element wrapping the slotted children.
    pub fn dom_node(&self) -> Option<HtmlDivElement> {
        self.wrapper.get_untracked()
    }
}

impl Default for FocusableRef {
    fn default() -> Self {
        Self::new()
    }
}
