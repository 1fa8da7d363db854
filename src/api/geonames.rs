//! GeoNames Requests
//!
//! Region hierarchy lookups: states of the country, cities of a state.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::CONFIG;
use crate::error::AppError;
use crate::models::{CityGeoname, GeonamesResponse, Uf, UfGeoname};

fn children_url(base: &str, geoname_id: &str) -> String {
    format!(
        "{}/childrenJSON?geonameId={}",
        base,
        utf8_percent_encode(geoname_id, NON_ALPHANUMERIC)
    )
}

async fn fetch_children<T>(geoname_id: &str) -> Result<GeonamesResponse<T>, String>
where
    T: serde::de::DeserializeOwned,
{
    let url = children_url(&CONFIG.geonames_url, geoname_id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }
    response
        .json::<GeonamesResponse<T>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// States (UFs) of the configured country
pub async fn list_ufs() -> Result<Vec<Uf>, AppError> {
    let ufs = fetch_children::<UfGeoname>(&CONFIG.country_geoname_id)
        .await
        .map_err(AppError::ReferenceDataUnavailable)?
        .into_ufs();
    log::info!("[GEONAMES] Loaded {} states", ufs.len());
    Ok(ufs)
}

/// City names under the state identified by `code`
pub async fn list_cities(code: &str) -> Result<Vec<String>, AppError> {
    let cities = fetch_children::<CityGeoname>(code)
        .await
        .map_err(AppError::RegionLookupFailed)?
        .into_city_names();
    log::info!("[GEONAMES] Loaded {} cities for {}", cities.len(), code);
    Ok(cities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_url() {
        assert_eq!(
            children_url("https://www.geonames.org", "3469034"),
            "https://www.geonames.org/childrenJSON?geonameId=3469034"
        );
    }

    #[test]
    fn test_children_url_escapes_code() {
        assert_eq!(
            children_url("http://g", "12&x=1"),
            "http://g/childrenJSON?geonameId=12%26x%3D1"
        );
    }
}
