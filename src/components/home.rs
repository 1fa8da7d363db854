//! Home Page Component

use leptos::prelude::*;

use crate::app::Route;
use crate::context::AppContext;

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div id="page-home">
            <header>
                <img src="/assets/logo.svg" alt="Ecoleta" />
            </header>
            <main>
                <h1>"Seu marketplace de coleta de resíduos."</h1>
                <p>"Ajudamos pessoas a encontrarem pontos de coleta de forma eficiente."</p>
                <a
                    class="cta"
                    href=Route::CreatePoint.path()
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::CreatePoint);
                    }
                >
                    "Cadastre um ponto de coleta"
                </a>
            </main>
        </div>
    }
}
