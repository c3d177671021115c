use crate::shared::components::ui::{Picker, SearchField, SearchWithin, SlotContext};
use crate::shared::focusable_ref::FocusableRef;
use crate::shared::provider_storage::load_provider_defaults;
use leptos::prelude::*;

/// Scopes offered by the demo picker: (value, label).
pub fn search_scopes() -> Vec<(String, String)> {
    [
        ("all", "All"),
        ("products", "Products"),
        ("orders", "Orders"),
        ("customers", "Customers"),
    ]
    .into_iter()
    .map(|(value, label)| (value.to_string(), label.to_string()))
    .collect()
}

#[component]
pub fn App() -> impl IntoView {
    // Composition root: provider defaults are injected explicitly, not looked up.
    let provider = load_provider_defaults();
    log::debug!("Provider defaults: {:?}", provider);

    let focus = FocusableRef::new();
    let (query, set_query) = signal(String::new());
    let (scope, set_scope) = signal("all".to_string());
    let (disabled, set_disabled) = signal(false);
    let (last_search, set_last_search) = signal(None::<(String, String)>);

    let search_field = Callback::new(move |slot: SlotContext| {
        view! {
            <SearchField
                slot_context=slot
                provider=provider
                value=query
                placeholder="Type to search"
                on_input=Callback::new(move |q: String| set_query.set(q))
                on_submit=Callback::new(move |q: String| {
                    log::info!("Search '{}' within '{}'", q, scope.get_untracked());
                    set_last_search.set(Some((q, scope.get_untracked())));
                })
                on_clear=Callback::new(move |_| set_last_search.set(None))
            />
        }
        .into_any()
    });

    let picker = Callback::new(move |slot: SlotContext| {
        view! {
            <Picker
                slot_context=slot
                provider=provider
                value=scope
                options=search_scopes()
                on_change=Callback::new(move |s: String| set_scope.set(s))
            />
        }
        .into_any()
    });

    view! {
        <main class="demo">
            <SearchWithin
                label="Search"
                is_disabled=disabled
                provider=provider
                focus_ref=focus
                width="size-4600"
                search_field=search_field
                picker=picker
            >
                <span class="demo__hint">"Press Enter to search"</span>
            </SearchWithin>

            <div class="demo__actions">
                <button type="button" on:click=move |_| focus.focus()>"Focus search"</button>
                <button type="button" on:click=move |_| set_disabled.update(|d| *d = !*d)>
                    {move || if disabled.get() { "Enable" } else { "Disable" }}
                </button>
            </div>

            {move || last_search.get().map(|(q, s)| view! {
                <p class="demo__result">{format!("Searching for \"{}\" in {}", q, s)}</p>
            })}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_scopes_have_unique_values() {
        let scopes = search_scopes();
        assert_eq!(scopes.first().map(|(v, _)| v.as_str()), Some("all"));
        let mut values: Vec<&str> = scopes.iter().map(|(v, _)| v.as_str()).collect();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), scopes.len());
    }
}
