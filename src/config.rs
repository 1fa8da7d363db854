//! Build-time configuration
//!
//! Values come from the environment (or `.env`, see `build.rs`) at compile
//! time and fall back to the defaults below.

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub geonames_url: String,
    /// GeoNames id of the country whose states are listed (Brazil)
    pub country_geoname_id: String,
    pub map: MapConfig,
    pub log_level: log::Level,
}

#[derive(Debug, Clone)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
    pub tile_url: String,
    pub attribution: String,
}

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_GEONAMES_URL: &str = "https://www.geonames.org";
const DEFAULT_COUNTRY_GEONAME_ID: &str = "3469034";
const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: -6.419492,
            default_center_lng: -35.1818588,
            default_zoom: 15.0,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: ATTRIBUTION.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            geonames_url: DEFAULT_GEONAMES_URL.to_string(),
            country_geoname_id: DEFAULT_COUNTRY_GEONAME_ID.to_string(),
            map: MapConfig::default(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Load configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = MapConfig::default();
        Self {
            api_url: trim_base(option_env!("API_URL").unwrap_or(DEFAULT_API_URL)),
            geonames_url: trim_base(option_env!("GEONAMES_URL").unwrap_or(DEFAULT_GEONAMES_URL)),
            country_geoname_id: option_env!("COUNTRY_GEONAME_ID")
                .unwrap_or(DEFAULT_COUNTRY_GEONAME_ID)
                .to_string(),
            map: MapConfig {
                default_center_lat: parse_or(option_env!("DEFAULT_MAP_CENTER_LAT"), defaults.default_center_lat),
                default_center_lng: parse_or(option_env!("DEFAULT_MAP_CENTER_LNG"), defaults.default_center_lng),
                default_zoom: parse_or(option_env!("DEFAULT_MAP_ZOOM"), defaults.default_zoom),
                tile_url: option_env!("TILE_URL").unwrap_or(DEFAULT_TILE_URL).to_string(),
                attribution: defaults.attribution,
            },
            log_level: parse_or(option_env!("LOG_LEVEL"), log::Level::Info),
        }
    }

    pub fn items_url(&self) -> String {
        format!("{}/items", self.api_url)
    }

    pub fn points_url(&self) -> String {
        format!("{}/points", self.api_url)
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, fallback: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(fallback)
}

fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
