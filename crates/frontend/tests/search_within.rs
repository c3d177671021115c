//! DOM tests for the SearchWithin group. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use contracts::shared::provider::ProviderDefaults;
use leptos::prelude::*;
use searchwithin_frontend::shared::components::ui::{Picker, SearchField, SearchWithin, SlotContext};
use searchwithin_frontend::shared::focusable_ref::FocusableRef;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, Node};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = document();
    let container = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

fn mount_group(focus: FocusableRef, disabled: bool) -> HtmlElement {
    let root = container();
    leptos::mount::mount_to(root.clone(), move || {
        view! {
            <SearchWithin
                label="Search"
                class="toolbar-search"
                is_disabled=disabled
                focus_ref=focus
                search_field=Callback::new(|slot: SlotContext| {
                    view! { <SearchField slot_context=slot value=String::new() /> }.into_any()
                })
                picker=Callback::new(|slot: SlotContext| {
                    view! {
                        <Picker
                            slot_context=slot
                            value="all".to_string()
                            options=vec![("all".to_string(), "All".to_string())]
                        />
                    }
                    .into_any()
                })
            >
                <span class="unslotted">"hint"</span>
            </SearchWithin>
        }
    })
    .forget();
    root
}

fn find(root: &HtmlElement, selector: &str) -> Element {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {}", selector))
}

#[wasm_bindgen_test]
fn group_is_labelled_by_the_rendered_label() {
    let root = mount_group(FocusableRef::new(), false);

    let group = find(&root, "[role=group]");
    let label = find(&root, "label.spectrum-FieldLabel");
    assert!(!label.id().is_empty());
    assert_eq!(group.get_attribute("aria-labelledby"), Some(label.id()));
    assert_eq!(group.class_name(), "spectrum-SearchWithin toolbar-search");

    // Only the group label is rendered; slotted children suppress their own.
    assert_eq!(root.query_selector_all("label").unwrap().length(), 1);
    let input = find(&root, "input[type=search]");
    assert_eq!(input.get_attribute("aria-labelledby"), Some(label.id()));
    assert_eq!(label.get_attribute("for"), Some(input.id()));
}

#[wasm_bindgen_test]
fn slotted_children_get_class_markers() {
    let root = mount_group(FocusableRef::new(), false);

    let search = find(&root, ".spectrum-Search");
    assert_eq!(search.class_name(), "spectrum-Search spectrum-Textfield");
    assert_eq!(search.get_attribute("data-slot").as_deref(), Some("searchfield"));

    let picker = find(&root, ".spectrum-Picker");
    assert_eq!(picker.class_name(), "spectrum-Picker spectrum-Dropdown");
    assert_eq!(picker.get_attribute("data-slot").as_deref(), Some("picker"));
}

#[wasm_bindgen_test]
fn standalone_children_carry_no_slot_markers() {
    let root = container();
    leptos::mount::mount_to(root.clone(), || {
        view! {
            <SearchField value=String::new() label="Query" />
            <Picker value="all".to_string() options=vec![("all".to_string(), "All".to_string())] />
        }
    })
    .forget();

    let search = find(&root, ".spectrum-Search");
    assert!(!search.class_list().contains("spectrum-Textfield"));
    assert_eq!(search.get_attribute("data-slot"), None);
    let picker = find(&root, ".spectrum-Picker");
    assert!(!picker.class_list().contains("spectrum-Dropdown"));
    assert_eq!(root.query_selector_all("label").unwrap().length(), 1);
}

#[wasm_bindgen_test]
fn read_only_provider_reaches_the_input() {
    let root = container();
    let provider = ProviderDefaults {
        is_read_only: Some(true),
        ..Default::default()
    };
    leptos::mount::mount_to(root.clone(), move || {
        view! { <SearchField value="shoes".to_string() provider=provider /> }
    })
    .forget();

    let input: HtmlInputElement = find(&root, "input").unchecked_into();
    assert!(input.read_only());
    assert!(root.query_selector(".spectrum-ClearButton").unwrap().is_none());
}

#[wasm_bindgen_test]
fn disabled_reaches_both_children() {
    let root = mount_group(FocusableRef::new(), true);

    let input: HtmlInputElement = find(&root, "input").unchecked_into();
    let select: HtmlSelectElement = find(&root, "select").unchecked_into();
    assert!(input.disabled());
    assert!(select.disabled());
}

#[wasm_bindgen_test]
fn focus_handle_targets_the_input() {
    let focus = FocusableRef::new();
    let root = mount_group(focus, false);

    let input = focus.input_element().expect("input mounted");
    let wrapper = focus.dom_node().expect("group mounted");
    assert_eq!(input.type_(), "search");
    assert_eq!(wrapper.get_attribute("role").as_deref(), Some("group"));

    focus.focus();
    let active = document().active_element().map(JsValue::from);
    assert_eq!(active, Some(JsValue::from(input)));
    let wrapper_node: &Node = wrapper.as_ref();
    assert!(root.contains(Some(wrapper_node)));
}

#[wasm_bindgen_test]
fn unslotted_children_render_untouched() {
    let root = mount_group(FocusableRef::new(), false);

    let hint = find(&root, "[role=group] > span");
    assert_eq!(hint.class_name(), "unslotted");
    assert_eq!(hint.text_content().as_deref(), Some("hint"));
    assert_eq!(hint.get_attribute("aria-labelledby"), None);
}
