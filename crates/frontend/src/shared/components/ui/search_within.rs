//! SearchWithin: a search field and a scope picker grouped under one label.
//!
//! # Example
//!
//! ```ignore
//! <SearchWithin
//!     label="Search"
//!     search_field=Callback::new(move |slot| view! {
//!         <SearchField slot_context=slot value=query on_input=Callback::new(move |q| set_query.set(q)) />
//!     }.into_any())
//!     picker=Callback::new(move |slot| view! {
//!         <Picker slot_context=slot value=scope options=scopes on_change=Callback::new(move |s| set_scope.set(s)) />
//!     }.into_any())
//! />
//! ```

use super::field::Field;
use crate::shared::focusable_ref::FocusableRef;
use contracts::enums::{LabelAlign, LabelPosition, NecessityIndicator};
use contracts::shared::label::LabelIds;
use contracts::shared::props::{DomProps, LabelableProps, SearchWithinProps as GroupProps, StyleProps};
use contracts::shared::provider::ProviderDefaults;
use contracts::shared::search_within::SearchWithinModel;
use contracts::shared::slots::{SlotDefaults, SlotName};
use leptos::html;
use leptos::prelude::*;

/// What the group hands to the child rendered in one of its slots.
#[derive(Clone, Copy)]
pub struct SlotContext {
    pub slot: SlotName,
    pub defaults: Signal<SlotDefaults>,
    /// Set only for the search field slot; the focusable handle points here.
    pub input_ref: Option<NodeRef<html::Input>>,
}

/// Renders the content of one slot from the defaults the group derived.
pub type SlotRenderer = Callback<SlotContext, AnyView>;

/// Groups a search field and a picker into one labelled field
#[component]
pub fn SearchWithin(
    /// Visible label shared by both children
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional)]
    label_position: LabelPosition,
    #[prop(optional)]
    label_align: LabelAlign,
    #[prop(optional)]
    necessity_indicator: NecessityIndicator,
    /// Disables both children
    #[prop(optional, into)]
    is_disabled: MaybeProp<bool>,
    /// Passed to both children as-is
    #[prop(optional, into)]
    is_required: MaybeProp<bool>,
    /// Group id; read once when the group is created
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    #[prop(optional, into)]
    aria_labelledby: MaybeProp<String>,
    /// Appended to the group's own class
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Raw inline style, applied last
    #[prop(optional, into)]
    style: MaybeProp<String>,
    #[prop(optional, into)]
    width: MaybeProp<String>,
    #[prop(optional, into)]
    min_width: MaybeProp<String>,
    #[prop(optional, into)]
    max_width: MaybeProp<String>,
    #[prop(optional, into)]
    height: MaybeProp<String>,
    #[prop(optional, into)]
    margin: MaybeProp<String>,
    #[prop(optional, into)]
    margin_top: MaybeProp<String>,
    #[prop(optional, into)]
    margin_bottom: MaybeProp<String>,
    #[prop(optional, into)]
    margin_start: MaybeProp<String>,
    #[prop(optional, into)]
    margin_end: MaybeProp<String>,
    #[prop(optional, into)]
    is_hidden: MaybeProp<bool>,
    /// Defaults injected by the composition root
    #[prop(optional)]
    provider: ProviderDefaults,
    /// Handle that focuses the search input
    #[prop(optional)]
    focus_ref: Option<FocusableRef>,
    /// Content of the "searchfield" slot
    search_field: SlotRenderer,
    /// Content of the "picker" slot
    picker: SlotRenderer,
    /// Extra children; they occupy no slot and are rendered untouched
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let focus_ref = focus_ref.unwrap_or_default();
    let ids = LabelIds::generate(id);
    let field_id = ids.field_id.clone();

    let props = move || GroupProps {
        labelable: LabelableProps {
            label: label.get(),
            label_position,
            label_align,
            necessity_indicator,
        },
        dom: DomProps {
            id: Some(field_id.clone()),
            aria_label: aria_label.get(),
            aria_labelledby: aria_labelledby.get(),
        },
        style: StyleProps {
            unsafe_class_name: class.get(),
            unsafe_style: style.get(),
            width: width.get(),
            min_width: min_width.get(),
            max_width: max_width.get(),
            height: height.get(),
            margin: margin.get(),
            margin_top: margin_top.get(),
            margin_bottom: margin_bottom.get(),
            margin_start: margin_start.get(),
            margin_end: margin_end.get(),
            is_hidden: is_hidden.get().unwrap_or(false),
        },
        is_disabled: is_disabled.get(),
        is_required: is_required.get(),
    };

    let model = Memo::new(move |_| SearchWithinModel::derive(&props(), &provider, &ids));

    let field_layout = Signal::derive(move || model.with(|m| m.field.clone()));
    let field_style = Signal::derive(move || model.with(|m| m.style.clone()));

    let slot_context = move |slot: SlotName, input_ref: Option<NodeRef<html::Input>>| SlotContext {
        slot,
        defaults: Signal::derive(move || model.with(|m| m.slots.get(slot).clone())),
        input_ref,
    };
    let search_slot = slot_context(SlotName::SearchField, Some(focus_ref.input));
    let picker_slot = slot_context(SlotName::Picker, None);

    view! {
        <Field layout=field_layout style=field_style>
            <div
                node_ref=focus_ref.wrapper
                id=move || model.with(|m| m.group.id.clone())
                role=move || model.with(|m| m.group.role.clone())
                aria-labelledby=move || model.with(|m| m.group.aria_labelledby.clone())
                aria-label=move || model.with(|m| m.group.aria_label.clone())
                class=move || model.with(|m| m.group.class_name.clone())
            >
                {search_field.run(search_slot)}
                {picker.run(picker_slot)}
                {children.map(|children| children())}
            </div>
        </Field>
    }
}
