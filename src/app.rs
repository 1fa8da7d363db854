//! Ecoleta Frontend App
//!
//! Routing shell: picks the page from the URL path and keeps it in sync
//! with browser history.

use leptos::prelude::*;

use crate::components::{CreatePoint, Home};
use crate::context::{AppContext, Notice};

const CREATE_POINT_PATH: &str = "/create-point";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    CreatePoint,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            CREATE_POINT_PATH => Route::CreatePoint,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::CreatePoint => CREATE_POINT_PATH,
        }
    }
}

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let (route, set_route) = signal(current_route());
    let (notices, set_notices) = signal(Vec::<Notice>::new());

    // Provide context to all children
    let ctx = AppContext::new((route, set_route), (notices, set_notices));
    provide_context(ctx);

    // Back/forward buttons; the shell never unmounts, so the listener is never removed
    let _popstate = window_event_listener(leptos::ev::popstate, move |_| ctx.show(current_route()));

    view! {
        {move || match route.get() {
            Route::Home => view! { <Home /> }.into_any(),
            Route::CreatePoint => view! { <CreatePoint /> }.into_any(),
        }}
    }
}
