//! Application Context
//!
//! Shared state provided via Leptos Context API: the current page and the
//! notices shown to the user.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::app::Route;
use crate::error::AppError;

/// How long a notice without a retry stays on screen
const NOTICE_TIMEOUT_MS: u32 = 6_000;

/// What a notice's retry button reloads
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Retry {
    Items,
    Ufs,
    Cities,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub error: AppError,
    pub retry: Option<Retry>,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Visible notices, oldest first - read
    pub notices: ReadSignal<Vec<Notice>>,
    /// Visible notices - write
    set_notices: WriteSignal<Vec<Notice>>,
    next_notice_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        notices: (ReadSignal<Vec<Notice>>, WriteSignal<Vec<Notice>>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            notices: notices.0,
            set_notices: notices.1,
            next_notice_id: StoredValue::new(0),
        }
    }

    /// Go to another page and record it in browser history
    pub fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
                log::warn!("[NAV] pushState failed: {:?}", e);
            }
        }
        self.show(route);
    }

    /// Show a page without touching history (back/forward buttons)
    pub fn show(&self, route: Route) {
        log::info!("[NAV] -> {:?}", route);
        self.set_notices.set(Vec::new());
        self.set_route.set(route);
    }

    /// Show a non-blocking notice. Notices without a retry go away by themselves.
    pub fn notify(&self, error: AppError, retry: Option<Retry>) {
        log::warn!("[NOTICE] {}", error);
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id.wrapping_add(1));

        let auto_dismiss = retry.is_none();
        self.set_notices.update(|notices| notices.push(Notice { id, error, retry }));

        if auto_dismiss {
            let ctx = *self;
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                ctx.dismiss(id);
            });
        }
    }

    /// Drop every notice offering the given retry
    pub fn dismiss_retry(&self, retry: Retry) {
        self.set_notices.try_update(|notices| notices.retain(|n| n.retry != Some(retry)));
    }

    pub fn dismiss(&self, id: u32) {
        self.set_notices.try_update(|notices| notices.retain(|n| n.id != id));
    }
}
