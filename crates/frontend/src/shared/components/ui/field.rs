use contracts::shared::field::{FieldLabel, FieldLayout, NecessityMark};
use leptos::prelude::*;

/// Field wrapper: optional label followed by the field body
#[component]
pub fn Field(
    /// Derived wrapper and label layout
    #[prop(into)]
    layout: Signal<FieldLayout>,
    /// Inline style for the wrapper
    #[prop(optional, into)]
    style: MaybeProp<String>,
    /// Field body
    children: Children,
) -> impl IntoView {
    view! {
        <div class=move || layout.with(|l| l.class_name.clone()) style=move || style.get().unwrap_or_default()>
            {move || layout.with(|l| l.label.clone()).map(|label| view! { <FieldLabelView label=label /> })}
            {children()}
        </div>
    }
}

/// Label element with its necessity indicator
#[component]
pub fn FieldLabelView(label: FieldLabel) -> impl IntoView {
    let necessity = label.necessity.map(|mark| match mark {
        NecessityMark::Asterisk => view! {
            <span class="spectrum-FieldLabel-requiredIcon" aria-label=mark.aria_label()>
                {mark.text()}
            </span>
        }
        .into_any(),
        _ => view! { <span class="spectrum-FieldLabel-necessity">{format!(" {}", mark.text())}</span> }
            .into_any(),
    });

    view! {
        <label id=label.id for=label.html_for class=label.class_name>
            {label.text}
            {necessity}
        </label>
    }
}
