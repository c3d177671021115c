use super::search_within::SlotContext;
use contracts::shared::classes::{FIELD_LABEL, SEARCH};
use contracts::shared::label::generate_id;
use contracts::shared::provider::ProviderDefaults;
use contracts::shared::slots::{SlotOverrides, SlottedProps};
use leptos::html;
use leptos::prelude::*;

/// Search input with a clear button.
///
/// Enter submits the current value, Escape clears it. Inside a SearchWithin
/// group it takes its disabled/required state and labelling from the slot.
#[component]
pub fn SearchField(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Called with the value when Enter is pressed
    #[prop(optional)]
    on_submit: Option<Callback<String>>,
    /// Called after the clear button or Escape empties the field
    #[prop(optional)]
    on_clear: Option<Callback<()>>,
    /// Own label; suppressed by the group when slotted
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
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
    /// ID for the input element
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
    let input_ref = slot_context
        .and_then(|ctx| ctx.input_ref)
        .unwrap_or_else(NodeRef::<html::Input>::new);
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

    let disabled = move || resolved.with(|r| r.is_disabled);
    let input_id = move || resolved.with(|r| r.id.clone()).unwrap_or_else(|| fallback_id.clone());
    let wrapper_class = move || resolved.with(|r| r.class_name(SEARCH));

    let emit_input = move |text: String| {
        if let Some(handler) = on_input {
            handler.run(text);
        }
    };
    let clear = move || {
        emit_input(String::new());
        if let Some(handler) = on_clear {
            handler.run(());
        }
    };

    view! {
        <div class=wrapper_class data-slot=slot_context.map(|ctx| ctx.slot.code())>
            {
                let input_id = input_id.clone();
                move || resolved.with(|r| r.label.clone()).map(|l| {
                    view! {
                        <label class=FIELD_LABEL for=input_id()>
                            {l}
                        </label>
                    }
                })
            }
            <input
                node_ref=input_ref
                id=input_id
                type="search"
                class="spectrum-Textfield-input spectrum-Search-input"
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                aria-labelledby=move || resolved.with(|r| r.aria_labelledby.clone())
                disabled=disabled
                required=move || resolved.with(|r| r.is_required.unwrap_or(false))
                readonly=move || resolved.with(|r| r.is_read_only)
                on:input=move |ev| emit_input(event_target_value(&ev))
                on:keydown=move |ev| {
                    match ev.key().as_str() {
                        "Enter" => {
                            if let Some(handler) = on_submit {
                                handler.run(value.get_untracked());
                            }
                        }
                        "Escape" if !value.get_untracked().is_empty()
                            && !resolved.with_untracked(|r| r.is_read_only) => {
                            ev.prevent_default();
                            clear();
                        }
                        _ => {}
                    }
                }
            />
            <Show when=move || !value.get().is_empty() && !disabled() && !resolved.with(|r| r.is_read_only)>
                <button
                    type="button"
                    class="spectrum-ClearButton"
                    aria-label="Clear search"
                    tabindex="-1"
                    on:click=move |_| {
                        clear();
                        if let Some(input) = input_ref.get_untracked() {
                            let _ = input.focus();
                        }
                    }
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
