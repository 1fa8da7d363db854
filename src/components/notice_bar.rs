//! Notice Bar Component
//!
//! Non-blocking error notices with dismiss and, when possible, retry.

use leptos::prelude::*;

use crate::context::{AppContext, Retry};

#[component]
pub fn NoticeBar(#[prop(into)] on_retry: Callback<Retry>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="notice-bar" role="status">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let retry = notice.retry;
                    view! {
                        <div class="notice">
                            <span class="notice-text">{notice.error.to_string()}</span>
                            {retry.map(|retry| view! {
                                <button
                                    type="button"
                                    class="notice-retry"
                                    on:click=move |_| {
                                        ctx.dismiss(id);
                                        on_retry.run(retry);
                                    }
                                >
                                    "Tentar novamente"
                                </button>
                            })}
                            <button type="button" class="notice-close" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
