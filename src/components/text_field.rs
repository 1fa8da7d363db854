//! Text Field Component
//!
//! Labelled input bound to one field of the form.

use leptos::prelude::*;

use crate::models::FormField;
use crate::store::{Action, CreatePointStore, CreatePointStateStoreFields};

#[component]
pub fn TextField(
    store: CreatePointStore,
    field: FormField,
    #[prop(into)] name: String,
    #[prop(into)] label: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(into)] on_action: Callback<Action>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=name.clone()>{label}</label>
            <input
                type=input_type
                name=name.clone()
                id=name
                prop:value=move || store.form().with(|form| form.get(field).to_string())
                on:input=move |ev| on_action.run(Action::SetField(field, event_target_value(&ev)))
            />
        </div>
    }
}
