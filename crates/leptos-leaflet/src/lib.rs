//! Leptos Leaflet Bindings
//!
//! Minimal Leaflet map for Leptos: tile layer, one marker, click callback.
//! Expects the Leaflet script to be loaded globally as `L`.

use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    type Map;
    type TileLayer;
    type Marker;
    type LeafletMouseEvent;
    type JsLatLng;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(container: &web_sys::HtmlElement) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &Map, center: &JsValue, zoom: f64) -> Map;

    #[wasm_bindgen(method)]
    fn on(this: &Map, event: &str, handler: &js_sys::Function) -> Map;

    #[wasm_bindgen(method)]
    fn remove(this: &Map) -> Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn create_tile_layer(url: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_layer_to(this: &TileLayer, map: &Map) -> TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn create_marker(position: &JsValue) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method, js_name = setLatLng)]
    fn set_lat_lng(this: &Marker, position: &JsValue) -> Marker;

    #[wasm_bindgen(method, getter)]
    fn latlng(this: &LeafletMouseEvent) -> JsLatLng;

    #[wasm_bindgen(method, getter)]
    fn lat(this: &JsLatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    fn lng(this: &JsLatLng) -> f64;
}

/// Geographic coordinate as Leaflet sees it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    fn to_js(self) -> JsValue {
        js_sys::Array::of2(&JsValue::from_f64(self.lat), &JsValue::from_f64(self.lng)).into()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

const MAX_ZOOM: u8 = 19;

/// Live map objects. The click closure must outlive the map.
struct MapHandle {
    map: Map,
    marker: Option<Marker>,
    _on_click: Closure<dyn FnMut(LeafletMouseEvent)>,
}

impl MapHandle {
    fn place_marker(&mut self, position: LatLng) -> Result<(), JsValue> {
        match &self.marker {
            Some(marker) => {
                marker.set_lat_lng(&position.to_js());
            }
            None => {
                let marker = create_marker(&position.to_js())?;
                marker.add_marker_to(&self.map);
                self.marker = Some(marker);
            }
        }
        Ok(())
    }
}

fn mount_map(
    container: &web_sys::HtmlElement,
    center: LatLng,
    zoom: f64,
    tile_url: &str,
    attribution: &str,
    on_click: Callback<LatLng>,
) -> Result<MapHandle, JsValue> {
    let map = create_map(container)?;
    map.set_view(&center.to_js(), zoom);

    let options = serde_wasm_bindgen::to_value(&TileOptions { attribution, max_zoom: MAX_ZOOM })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    create_tile_layer(tile_url, &options)?.add_layer_to(&map);

    let click = Closure::<dyn FnMut(LeafletMouseEvent)>::new(move |ev: LeafletMouseEvent| {
        let latlng = ev.latlng();
        on_click.run(LatLng::new(latlng.lat(), latlng.lng()));
    });
    map.on("click", click.as_ref().unchecked_ref());

    Ok(MapHandle { map, marker: None, _on_click: click })
}

/// Leaflet map with an OSM-style tile layer.
///
/// `center` re-centers the view whenever it changes, `marker` places (or
/// moves) a single marker, and `on_click` receives every map click.
#[component]
pub fn LeafletMap(
    #[prop(into)] center: Signal<LatLng>,
    #[prop(into)] marker: Signal<Option<LatLng>>,
    #[prop(default = 15.0)] zoom: f64,
    #[prop(into)] tile_url: String,
    #[prop(into, optional)] attribution: String,
    #[prop(into)] on_click: Callback<LatLng>,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let handle = StoredValue::new_local(None::<MapHandle>);

    // Create once the container is in the DOM
    Effect::new(move |_| {
        let Some(el) = container.get() else { return };
        if handle.with_value(|h| h.is_some()) {
            return;
        }
        match mount_map(&el, center.get_untracked(), zoom, &tile_url, &attribution, on_click) {
            Ok(mut h) => {
                if let Some(position) = marker.get_untracked() {
                    if let Err(err) = h.place_marker(position) {
                        log::warn!("[MAP] Failed to place marker: {:?}", err);
                    }
                }
                handle.set_value(Some(h));
            }
            Err(err) => log::error!("[MAP] Failed to create map: {:?}", err),
        }
    });

    Effect::new(move |_| {
        let c = center.get();
        handle.with_value(|h| {
            if let Some(h) = h {
                h.map.set_view(&c.to_js(), zoom);
            }
        });
    });

    Effect::new(move |_| {
        let Some(position) = marker.get() else { return };
        handle.update_value(|h| {
            if let Some(h) = h {
                if let Err(err) = h.place_marker(position) {
                    log::warn!("[MAP] Failed to place marker: {:?}", err);
                }
            }
        });
    });

    on_cleanup(move || {
        handle.try_update_value(|h| {
            if let Some(h) = h.take() {
                h.map.remove();
            }
        });
    });

    view! {
        <div class="leaflet-map" node_ref=container></div>
    }
}
