use super::search_within::SlotContext;
use contracts::shared::classes::{FIELD_LABEL, PICKER};
use contracts::shared::label::generate_id;
use contracts::shared::provider::ProviderDefaults;
use contracts::shared::slots::{SlotOverrides, SlottedProps};
use leptos::prelude::*;
use web_sys::HtmlSelectElement;

/// Single-choice picker, e.g. the scope of a search
#[component]
pub fn Picker(
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options: Vec of (value, label) tuples
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Own label; suppressed by the group when slotted
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional, into)]
    is_disabled: MaybeProp<bool>,
    #[prop(optional, into)]
    is_required: MaybeProp<bool>,
    #[prop(optional, into)]
    is_read_only: MaybeProp<bool>,
    #[prop(optional, into)]
    is_quiet: MaybeProp<bool>,
    #[prop(optional, into)]
    aria_labelledby: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Slot defaults when rendered inside a group
    #[prop(optional)]
    slot_context: Option<SlotContext>,
    #[prop(optional)]
    provider: ProviderDefaults,
) -> impl IntoView {
    let fallback_id = generate_id();

    let resolved = Memo::new(move |_| {
        let own = SlotOverrides {
            unsafe_class_name: class.get(),
            id: id.get(),
            is_disabled: is_disabled.get(),
            is_required: is_required.get(),
            is_read_only: is_read_only.get(),
            label: label.get(),
            is_quiet: is_quiet.get(),
            aria_labelledby: aria_labelledby.get(),
        };
        let slot = slot_context.map(|ctx| ctx.defaults.get());
        SlottedProps::resolve(slot.as_ref(), &own, &provider)
    });

    let select_id = move || resolved.with(|r| r.id.clone()).unwrap_or_else(|| fallback_id.clone());
    let wrapper_class = move || resolved.with(|r| r.class_name(PICKER));

    view! {
        <div class=wrapper_class data-slot=slot_context.map(|ctx| ctx.slot.code())>
            {
                let select_id = select_id.clone();
                move || resolved.with(|r| r.label.clone()).map(|l| {
                    view! {
                        <label class=FIELD_LABEL for=select_id()>
                            {l}
                        </label>
                    }
                })
            }
            <select
                id=select_id
                class="spectrum-Dropdown-trigger"
                aria-labelledby=move || resolved.with(|r| r.aria_labelledby.clone())
                disabled=move || resolved.with(|r| r.is_disabled)
                required=move || resolved.with(|r| r.is_required.unwrap_or(false))
                aria-readonly=move || resolved.with(|r| r.is_read_only.then_some("true"))
                on:change=move |ev| {
                    // A native select has no readonly attribute; undo the change instead.
                    if resolved.with_untracked(|r| r.is_read_only) {
                        event_target::<HtmlSelectElement>(&ev).set_value(&value.get_untracked());
                        return;
                    }
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
