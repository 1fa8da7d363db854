//! Region Select Component
//!
//! Cascading UF -> city dropdowns. The empty option means "nothing selected".

use leptos::prelude::*;

use crate::store::{Action, CreatePointStore, CreatePointStateStoreFields};

/// `<select>` value -> selection
fn selection(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn RegionSelect(
    store: CreatePointStore,
    #[prop(into)] on_action: Callback<Action>,
) -> impl IntoView {
    let city_placeholder = move || {
        if store.cities_loading().get() {
            "Carregando cidades..."
        } else {
            "Selecione uma cidade"
        }
    };

    view! {
        <div class="field-group">
            <div class="field">
                <label for="uf">"Estado (UF)"</label>
                <select
                    name="uf"
                    id="uf"
                    prop:value=move || store.selected_uf().get().unwrap_or_default()
                    on:change=move |ev| on_action.run(Action::SelectUf(selection(event_target_value(&ev))))
                >
                    <option value="">"Selecione uma UF"</option>
                    {move || store.ufs().get().into_iter().map(|uf| {
                        let label = uf.initial.clone();
                        view! { <option value=uf.initial>{label}</option> }
                    }).collect_view()}
                </select>
            </div>

            <div class="field">
                <label for="city">"Cidade"</label>
                <select
                    name="city"
                    id="city"
                    prop:value=move || store.selected_city().get().unwrap_or_default()
                    on:change=move |ev| on_action.run(Action::SelectCity(selection(event_target_value(&ev))))
                >
                    <option value="">{city_placeholder}</option>
                    {move || store.cities().get().into_iter().map(|city| {
                        let label = city.clone();
                        view! { <option value=city>{label}</option> }
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
