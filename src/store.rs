//! Create-Point Form Store
//!
//! All state of one mounted form lives in a single `CreatePointState`,
//! held in a `reactive_stores::Store` for field-level reactivity.
//! Every change goes through `dispatch`, which is pure: network work is
//! returned as a `Command` for the component to run.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{FormData, FormField, Item, NewPoint, Position, Uf};

#[derive(Clone, Debug, Default, Store)]
pub struct CreatePointState {
    /// Collectable item categories from the backend
    pub items: Vec<Item>,
    /// States from GeoNames
    pub ufs: Vec<Uf>,
    /// Cities of the selected state (latest lookup only)
    pub cities: Vec<String>,
    pub cities_loading: bool,
    pub selected_uf: Option<String>,
    pub selected_city: Option<String>,
    pub form: FormData,
    /// Selected item ids, in toggle order, no duplicates
    pub selected_items: Vec<u32>,
    /// Map center, seeded from geolocation
    pub initial_position: Position,
    /// Last map click
    pub selected_position: Option<Position>,
    /// Bumped for every city lookup; older responses are stale
    pub city_generation: u64,
}

/// User input and async results
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ItemsLoaded(Vec<Item>),
    UfsLoaded(Vec<Uf>),
    SelectUf(Option<String>),
    CitiesLoaded { generation: u64, cities: Vec<String> },
    CityLookupFailed { generation: u64 },
    RetryCityLookup,
    SelectCity(Option<String>),
    SetField(FormField, String),
    ToggleItem(u32),
    MapClicked(Position),
    GeolocationResolved(Position),
}

/// Network work requested by a state transition
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    FetchCities { generation: u64, code: String },
}

pub type CreatePointStore = Store<CreatePointState>;

impl CreatePointState {
    pub fn new(initial_position: Position) -> Self {
        Self {
            initial_position,
            ..Default::default()
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::ItemsLoaded(items) => {
                self.items = items;
                None
            }
            Action::UfsLoaded(ufs) => {
                self.ufs = ufs;
                None
            }
            Action::SelectUf(uf) => {
                if uf == self.selected_uf {
                    return None;
                }
                self.selected_uf = uf;
                self.request_cities()
            }
            Action::CitiesLoaded { generation, cities } => {
                if generation != self.city_generation {
                    log::debug!(
                        "[STORE] Dropping stale cities (generation {}, current {})",
                        generation,
                        self.city_generation
                    );
                    return None;
                }
                self.cities = cities;
                self.cities_loading = false;
                None
            }
            Action::CityLookupFailed { generation } => {
                if generation == self.city_generation {
                    self.cities_loading = false;
                }
                None
            }
            Action::RetryCityLookup => self.request_cities(),
            Action::SelectCity(city) => {
                self.selected_city = city;
                None
            }
            Action::SetField(field, value) => {
                self.form.set(field, value);
                None
            }
            Action::ToggleItem(id) => {
                if self.selected_items.contains(&id) {
                    self.selected_items.retain(|selected| *selected != id);
                } else {
                    self.selected_items.push(id);
                }
                None
            }
            Action::MapClicked(position) => {
                self.selected_position = Some(position);
                None
            }
            Action::GeolocationResolved(position) => {
                self.initial_position = position;
                None
            }
        }
    }

    /// Start a new city lookup for the selected state, invalidating any
    /// lookup still in flight. The selected city goes with the old list.
    fn request_cities(&mut self) -> Option<Command> {
        self.city_generation += 1;
        self.cities.clear();
        self.selected_city = None;
        self.cities_loading = false;

        let initial = self.selected_uf.as_deref()?;
        // First match wins if GeoNames ever lists an initial twice
        let Some(uf) = self.ufs.iter().find(|uf| uf.initial == initial) else {
            log::warn!("[STORE] Unknown UF {}, no city lookup", initial);
            return None;
        };

        self.cities_loading = true;
        Some(Command::FetchCities {
            generation: self.city_generation,
            code: uf.code.clone(),
        })
    }

    pub fn is_item_selected(&self, id: u32) -> bool {
        self.selected_items.contains(&id)
    }

    /// Payload for `POST /points`. Unselected values are sent empty; the
    /// backend decides what is acceptable.
    pub fn submission(&self) -> NewPoint {
        let position = self.selected_position.unwrap_or_default();
        NewPoint {
            name: self.form.name.clone(),
            email: self.form.email.clone(),
            whatsapp: self.form.whatsapp.clone(),
            uf: self.selected_uf.clone().unwrap_or_default(),
            city: self.selected_city.clone().unwrap_or_default(),
            latitude: position.latitude,
            longitude: position.longitude,
            items: self.selected_items.clone(),
        }
    }
}

/// Apply an action to the store. Returns `None` when the store is gone
/// (the form was unmounted) or the action produced no effect.
pub fn store_dispatch(store: &CreatePointStore, action: Action) -> Option<Command> {
    store.try_update(|state| state.dispatch(action)).flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uf(initial: &str, code: &str) -> Uf {
        Uf { initial: initial.to_string(), code: code.to_string() }
    }

    fn item(id: u32) -> Item {
        Item {
            id,
            title: format!("Item {}", id),
            image_url: format!("http://localhost:3333/uploads/{}.svg", id),
        }
    }

    fn state_with_ufs(ufs: Vec<Uf>) -> CreatePointState {
        let mut state = CreatePointState::default();
        state.dispatch(Action::UfsLoaded(ufs));
        state
    }

    #[test]
    fn test_toggle_parity() {
        // Toggle ids 1..=4 in a fixed interleaving; id n is toggled n times
        let sequence = [4, 3, 2, 1, 4, 3, 2, 4, 3, 4];
        let mut state = CreatePointState::default();
        for (step, id) in sequence.iter().enumerate() {
            state.dispatch(Action::ToggleItem(*id));
            for candidate in 1..=4u32 {
                let toggles = sequence[..=step].iter().filter(|x| **x == candidate).count();
                let occurrences = state.selected_items.iter().filter(|x| **x == candidate).count();
                assert_eq!(occurrences, toggles % 2, "id {} after step {}", candidate, step);
            }
        }
        assert_eq!(state.selected_items, vec![1, 3]);
    }

    #[test]
    fn test_two_items_then_first_off() {
        let mut state = CreatePointState::default();
        state.dispatch(Action::ItemsLoaded(vec![item(1), item(2)]));
        state.dispatch(Action::ToggleItem(1));
        state.dispatch(Action::ToggleItem(2));
        state.dispatch(Action::ToggleItem(1));
        assert_eq!(state.selected_items, vec![2]);
        assert!(state.is_item_selected(2));
        assert!(!state.is_item_selected(1));
    }

    #[test]
    fn test_unselected_uf_issues_no_lookup() {
        let mut state = state_with_ufs(vec![uf("RN", "123")]);
        assert_eq!(state.dispatch(Action::SelectUf(None)), None);
        state.dispatch(Action::SelectUf(Some("RN".to_string())));
        assert_eq!(state.dispatch(Action::SelectUf(None)), None);
        assert!(state.cities.is_empty());
        assert!(!state.cities_loading);
    }

    #[test]
    fn test_rn_natal_scenario() {
        let mut state = state_with_ufs(vec![uf("RN", "123")]);
        let effect = state.dispatch(Action::SelectUf(Some("RN".to_string())));
        let Some(Command::FetchCities { generation, code }) = effect else {
            panic!("expected a city lookup, got {:?}", effect);
        };
        assert_eq!(code, "123");
        assert!(state.cities_loading);

        state.dispatch(Action::CitiesLoaded { generation, cities: vec!["Natal".to_string()] });
        assert_eq!(state.cities, vec!["Natal"]);
        assert!(!state.cities_loading);
    }

    #[test]
    fn test_one_lookup_per_selection_change() {
        let mut state = state_with_ufs(vec![uf("RN", "1"), uf("PB", "2")]);
        let mut lookups = 0;
        for selection in ["RN", "RN", "PB", "PB", "RN"] {
            if state.dispatch(Action::SelectUf(Some(selection.to_string()))).is_some() {
                lookups += 1;
            }
        }
        assert_eq!(lookups, 3);
    }

    #[test]
    fn test_stale_cities_are_dropped() {
        let mut state = state_with_ufs(vec![uf("RN", "1"), uf("PB", "2")]);
        let first = state.dispatch(Action::SelectUf(Some("RN".to_string())));
        let second = state.dispatch(Action::SelectUf(Some("PB".to_string())));
        let (Some(Command::FetchCities { generation: g1, .. }), Some(Command::FetchCities { generation: g2, .. })) =
            (first, second)
        else {
            panic!("expected two lookups");
        };
        assert!(g2 > g1);

        // PB answers first, then the late RN response arrives
        state.dispatch(Action::CitiesLoaded { generation: g2, cities: vec!["João Pessoa".to_string()] });
        state.dispatch(Action::CitiesLoaded { generation: g1, cities: vec!["Natal".to_string()] });
        assert_eq!(state.cities, vec!["João Pessoa"]);

        // A failure of the stale request does not touch the loading flag
        state.dispatch(Action::SelectUf(Some("RN".to_string())));
        state.dispatch(Action::CityLookupFailed { generation: g2 });
        assert!(state.cities_loading);
    }

    #[test]
    fn test_duplicate_initials_use_first_match() {
        let mut state = state_with_ufs(vec![uf("RN", "first"), uf("RN", "second")]);
        let effect = state.dispatch(Action::SelectUf(Some("RN".to_string())));
        assert_eq!(effect, Some(Command::FetchCities { generation: 1, code: "first".to_string() }));
    }

    #[test]
    fn test_unknown_uf_issues_no_lookup() {
        let mut state = state_with_ufs(vec![uf("RN", "1")]);
        assert_eq!(state.dispatch(Action::SelectUf(Some("ZZ".to_string()))), None);
        assert!(!state.cities_loading);
    }

    #[test]
    fn test_changing_uf_resets_city() {
        let mut state = state_with_ufs(vec![uf("RN", "1"), uf("PB", "2")]);
        state.dispatch(Action::SelectUf(Some("RN".to_string())));
        state.dispatch(Action::SelectCity(Some("Natal".to_string())));
        state.dispatch(Action::SelectUf(Some("PB".to_string())));
        assert_eq!(state.selected_city, None);
        assert!(state.cities.is_empty());
    }

    #[test]
    fn test_retry_reissues_lookup_with_new_generation() {
        let mut state = state_with_ufs(vec![uf("RN", "1")]);
        state.dispatch(Action::SelectUf(Some("RN".to_string())));
        state.dispatch(Action::CityLookupFailed { generation: 1 });
        assert!(!state.cities_loading);

        let retry = state.dispatch(Action::RetryCityLookup);
        assert_eq!(retry, Some(Command::FetchCities { generation: 2, code: "1".to_string() }));

        let mut empty = CreatePointState::default();
        assert_eq!(empty.dispatch(Action::RetryCityLookup), None);
    }

    #[test]
    fn test_retry_after_uf_change_drops_selected_city() {
        let mut state = state_with_ufs(vec![uf("RN", "1"), uf("PB", "2")]);
        state.dispatch(Action::SelectUf(Some("RN".to_string())));
        state.dispatch(Action::CityLookupFailed { generation: 1 });
        state.dispatch(Action::SelectUf(Some("PB".to_string())));
        state.dispatch(Action::CitiesLoaded { generation: 2, cities: vec!["João Pessoa".to_string()] });
        state.dispatch(Action::SelectCity(Some("João Pessoa".to_string())));

        // Late click on the retry left over from the RN failure
        let retry = state.dispatch(Action::RetryCityLookup);
        assert_eq!(retry, Some(Command::FetchCities { generation: 3, code: "2".to_string() }));
        assert!(state.cities.is_empty());
        assert_eq!(state.selected_city, None);
        assert_eq!(state.submission().city, "");
    }

    #[test]
    fn test_dispatch_after_unmount_is_noop() {
        let owner = Owner::new();
        let store = owner.with(|| Store::new(state_with_ufs(vec![uf("RN", "1"), uf("PB", "2")])));
        assert_eq!(
            store_dispatch(&store, Action::SelectUf(Some("RN".to_string()))),
            Some(Command::FetchCities { generation: 1, code: "1".to_string() })
        );

        drop(owner);

        // Late responses and input after disposal change nothing and do not panic
        assert_eq!(
            store_dispatch(&store, Action::CitiesLoaded { generation: 1, cities: vec!["Natal".to_string()] }),
            None
        );
        assert_eq!(store_dispatch(&store, Action::SelectUf(Some("PB".to_string()))), None);
    }

    #[test]
    fn test_default_submission_forwards_empty_values() {
        let state = CreatePointState::default();
        assert_eq!(
            state.submission(),
            NewPoint {
                name: String::new(),
                email: String::new(),
                whatsapp: String::new(),
                uf: String::new(),
                city: String::new(),
                latitude: 0.0,
                longitude: 0.0,
                items: vec![],
            }
        );
    }

    #[test]
    fn test_map_click_flows_into_submission() {
        let mut state = CreatePointState::new(Position::new(-6.4, -35.1));
        state.dispatch(Action::MapClicked(Position::new(-1.0, -1.0)));
        state.dispatch(Action::MapClicked(Position::new(-5.8, -35.2)));
        let point = state.submission();
        assert_eq!(point.latitude, -5.8);
        assert_eq!(point.longitude, -35.2);
        // The map center is not the selection
        assert_eq!(state.initial_position, Position::new(-6.4, -35.1));
    }

    #[test]
    fn test_full_submission() {
        let mut state = state_with_ufs(vec![uf("RN", "1")]);
        state.dispatch(Action::SetField(FormField::Name, "Recicla".to_string()));
        state.dispatch(Action::SetField(FormField::Email, "r@c.br".to_string()));
        state.dispatch(Action::SetField(FormField::Whatsapp, "84988887777".to_string()));
        state.dispatch(Action::SelectUf(Some("RN".to_string())));
        state.dispatch(Action::CitiesLoaded { generation: 1, cities: vec!["Natal".to_string()] });
        state.dispatch(Action::SelectCity(Some("Natal".to_string())));
        state.dispatch(Action::ToggleItem(6));
        state.dispatch(Action::ToggleItem(2));

        let point = state.submission();
        assert_eq!(point.name, "Recicla");
        assert_eq!(point.email, "r@c.br");
        assert_eq!(point.whatsapp, "84988887777");
        assert_eq!(point.uf, "RN");
        assert_eq!(point.city, "Natal");
        assert_eq!(point.items, vec![6, 2]);
    }

    #[test]
    fn test_geolocation_only_moves_center() {
        let mut state = CreatePointState::default();
        state.dispatch(Action::GeolocationResolved(Position::new(-5.79, -35.21)));
        assert_eq!(state.initial_position, Position::new(-5.79, -35.21));
        assert_eq!(state.selected_position, None);
    }
}
