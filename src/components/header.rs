//! Page Header Component
//!
//! Logo plus the back link to the home page.

use leptos::prelude::*;

use crate::app::Route;
use crate::context::AppContext;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="page-header">
            <img src="/assets/logo.svg" alt="Ecoleta" />
            <a
                href=Route::Home.path()
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Route::Home);
                }
            >
                <span class="back-arrow">"←"</span>
                "Voltar para home"
            </a>
        </header>
    }
}
