//! Create Point Page
//!
//! The registration form. Owns the form store for as long as the page is
//! mounted and runs the network effects the store asks for.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_leaflet::{LatLng, LeafletMap};
use reactive_stores::Store;

use crate::api;
use crate::app::Route;
use crate::components::{Header, ItemGrid, NoticeBar, RegionSelect, TextField};
use crate::config::CONFIG;
use crate::context::{AppContext, Retry};
use crate::geolocation;
use crate::models::{FormField, Position};
use crate::store::{store_dispatch, Action, CreatePointState, CreatePointStateStoreFields, CreatePointStore, Command};

const CREATED_MESSAGE: &str = "Ponto de coleta criado!";

/// False once the page has been unmounted and its store disposed
fn is_mounted(store: &CreatePointStore) -> bool {
    store.try_with_untracked(|_| ()).is_some()
}

#[component]
pub fn CreatePoint() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let map_config = &CONFIG.map;

    let store: CreatePointStore = Store::new(CreatePointState::new(Position::new(
        map_config.default_center_lat,
        map_config.default_center_lng,
    )));
    let (submitting, set_submitting) = signal(false);

    let run_command = move |command: Option<Command>| {
        let Some(Command::FetchCities { generation, code }) = command else { return };
        spawn_local(async move {
            match api::list_cities(&code).await {
                Ok(cities) => {
                    store_dispatch(&store, Action::CitiesLoaded { generation, cities });
                }
                Err(err) => {
                    let current = store.try_with_untracked(|s| s.city_generation == generation);
                    store_dispatch(&store, Action::CityLookupFailed { generation });
                    if current == Some(true) {
                        ctx.notify(err, Some(Retry::Cities));
                    }
                }
            }
        });
    };

    let dispatch = move |action: Action| {
        // A retry for the previous state's cities no longer applies
        if matches!(action, Action::SelectUf(_)) {
            ctx.dismiss_retry(Retry::Cities);
        }
        run_command(store_dispatch(&store, action))
    };

    let load_items = move || {
        spawn_local(async move {
            match api::list_items().await {
                Ok(items) => {
                    store_dispatch(&store, Action::ItemsLoaded(items));
                }
                Err(err) if is_mounted(&store) => ctx.notify(err, Some(Retry::Items)),
                Err(err) => log::debug!("[CREATE_POINT] Ignoring error after unmount: {}", err),
            }
        });
    };

    let load_ufs = move || {
        spawn_local(async move {
            match api::list_ufs().await {
                Ok(ufs) => {
                    store_dispatch(&store, Action::UfsLoaded(ufs));
                }
                Err(err) if is_mounted(&store) => ctx.notify(err, Some(Retry::Ufs)),
                Err(err) => log::debug!("[CREATE_POINT] Ignoring error after unmount: {}", err),
            }
        });
    };

    // Load reference data and seed the map center on mount
    Effect::new(move |_| {
        log::info!("[CREATE_POINT] Loading reference data");
        load_items();
        load_ufs();
        spawn_local(async move {
            match geolocation::current_position().await {
                Ok(position) => {
                    store_dispatch(&store, Action::GeolocationResolved(position));
                }
                Err(err) if is_mounted(&store) => ctx.notify(err, None),
                Err(err) => log::debug!("[CREATE_POINT] Ignoring error after unmount: {}", err),
            }
        });
    });

    let on_retry = move |retry: Retry| match retry {
        Retry::Items => load_items(),
        Retry::Ufs => load_ufs(),
        Retry::Cities => dispatch(Action::RetryCityLookup),
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(point) = store.try_with_untracked(|s| s.submission()) else { return };
        set_submitting.set(true);

        spawn_local(async move {
            match api::create_point(&point).await {
                Ok(()) => {
                    log::info!("[CREATE_POINT] Point {:?} created", point.name);
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(CREATED_MESSAGE);
                    }
                    ctx.navigate(Route::Home);
                }
                Err(err) => {
                    set_submitting.try_set(false);
                    if is_mounted(&store) {
                        ctx.notify(err, None);
                    }
                }
            }
        });
    };

    let center = Signal::derive(move || {
        let p = store.initial_position().get();
        LatLng::new(p.latitude, p.longitude)
    });
    let marker = Signal::derive(move || {
        store
            .selected_position()
            .get()
            .map(|p| LatLng::new(p.latitude, p.longitude))
    });

    view! {
        <div id="page-create-point">
            <Header />

            <NoticeBar on_retry=on_retry />

            <form on:submit=on_submit>
                <h1>"Cadastro do " <br /> "ponto de coleta"</h1>

                <fieldset>
                    <legend>
                        <h2>"Dados"</h2>
                    </legend>

                    <TextField store=store field=FormField::Name name="name" label="Nome da entidade" on_action=dispatch />

                    <div class="field-group">
                        <TextField store=store field=FormField::Email name="email" label="E-mail" input_type="email" on_action=dispatch />
                        <TextField store=store field=FormField::Whatsapp name="whatsapp" label="Whatsapp" on_action=dispatch />
                    </div>
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Endereço"</h2>
                        <span>"Selecione o endereço no mapa"</span>
                    </legend>

                    <LeafletMap
                        center=center
                        marker=marker
                        zoom=map_config.default_zoom
                        tile_url=map_config.tile_url.clone()
                        attribution=map_config.attribution.clone()
                        on_click=move |ll: LatLng| dispatch(Action::MapClicked(Position::new(ll.lat, ll.lng)))
                    />

                    <RegionSelect store=store on_action=dispatch />
                </fieldset>

                <fieldset>
                    <legend>
                        <h2>"Ítens de coleta"</h2>
                        <span>"Selecione um ou mais ítens abaixo"</span>
                    </legend>

                    <ItemGrid store=store on_action=dispatch />
                </fieldset>

                <button type="submit" disabled=move || submitting.get()>
                    "Cadastrar ponto de coleta"
                </button>
            </form>
        </div>
    }
}
