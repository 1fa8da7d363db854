//! Item Grid Component
//!
//! Clickable tiles for the collectable item categories.

use leptos::prelude::*;

use crate::store::{Action, CreatePointStore, CreatePointStateStoreFields};

#[component]
pub fn ItemGrid(
    store: CreatePointStore,
    #[prop(into)] on_action: Callback<Action>,
) -> impl IntoView {
    view! {
        <ul class="items-grid">
            <For
                each=move || store.items().get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let is_selected = move || store.selected_items().with(|ids| ids.contains(&id));
                    view! {
                        <li
                            class=move || if is_selected() { "selected" } else { "" }
                            on:click=move |_| on_action.run(Action::ToggleItem(id))
                        >
                            <img src=item.image_url.clone() alt=item.title.clone() />
                            <span>{item.title.clone()}</span>
                        </li>
                    }
                }
            />
        </ul>
    }
}
