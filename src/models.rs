//! Frontend Models
//!
//! Data structures matching the backend and the GeoNames wire format.

use serde::{Deserialize, Serialize};

/// Collectable item category (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub image_url: String,
}

/// Brazilian state (UF) with the GeoNames id used to list its cities
#[derive(Debug, Clone, PartialEq)]
pub struct Uf {
    pub initial: String,
    pub code: String,
}

/// Free text fields of the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Whatsapp,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Whatsapp => &self.whatsapp,
        }
    }

    /// Overwrite one field, leaving the others untouched
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Whatsapp => self.whatsapp = value,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Body of `POST /points`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPoint {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}

// ========================
// GeoNames wire types
// ========================

#[derive(Debug, Deserialize)]
pub struct GeonamesResponse<T> {
    #[serde(default = "Vec::new")]
    pub geonames: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct AdminCodes {
    #[serde(rename = "ISO3166_2")]
    pub iso3166_2: Option<String>,
}

/// GeoNames sends ids as numbers; older payloads used strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GeonameId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for GeonameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeonameId::Number(n) => write!(f, "{}", n),
            GeonameId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UfGeoname {
    #[serde(rename = "adminCodes1")]
    pub admin_codes: Option<AdminCodes>,
    #[serde(rename = "geonameId")]
    pub geoname_id: GeonameId,
}

#[derive(Debug, Deserialize)]
pub struct CityGeoname {
    pub name: String,
}

impl GeonamesResponse<UfGeoname> {
    /// States in response order; entries without an ISO code are skipped
    pub fn into_ufs(self) -> Vec<Uf> {
        self.geonames
            .into_iter()
            .filter_map(|g| {
                let initial = g.admin_codes?.iso3166_2?;
                Some(Uf { initial, code: g.geoname_id.to_string() })
            })
            .collect()
    }
}

impl GeonamesResponse<CityGeoname> {
    pub fn into_city_names(self) -> Vec<String> {
        self.geonames.into_iter().map(|c| c.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_set_touches_one_field() {
        let mut form = FormData {
            name: "Mercado".to_string(),
            email: "a@b.c".to_string(),
            whatsapp: String::new(),
        };
        form.set(FormField::Whatsapp, "8499999".to_string());
        assert_eq!(form.name, "Mercado");
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.whatsapp, "8499999");
    }

    #[test]
    fn test_parse_ufs() {
        let body = r#"{"totalResultsCount":3,"geonames":[
            {"adminCodes1":{"ISO3166_2":"RN"},"geonameId":3390290,"name":"Rio Grande do Norte"},
            {"geonameId":999,"name":"No code"},
            {"adminCodes1":{"ISO3166_2":"PB"},"geonameId":"3393098"}
        ]}"#;
        let parsed: GeonamesResponse<UfGeoname> = serde_json::from_str(body).unwrap();
        let ufs = parsed.into_ufs();
        assert_eq!(ufs, vec![
            Uf { initial: "RN".to_string(), code: "3390290".to_string() },
            Uf { initial: "PB".to_string(), code: "3393098".to_string() },
        ]);
    }

    #[test]
    fn test_parse_cities() {
        let body = r#"{"geonames":[{"name":"Natal","geonameId":3394023},{"name":"Mossoró"}]}"#;
        let parsed: GeonamesResponse<CityGeoname> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.into_city_names(), vec!["Natal", "Mossoró"]);
    }

    #[test]
    fn test_missing_geonames_is_empty() {
        let parsed: GeonamesResponse<CityGeoname> = serde_json::from_str("{}").unwrap();
        assert!(parsed.into_city_names().is_empty());
    }

    #[test]
    fn test_new_point_wire_keys() {
        let point = NewPoint {
            name: "Coleta".to_string(),
            email: "c@d.e".to_string(),
            whatsapp: "84".to_string(),
            uf: "RN".to_string(),
            city: "Natal".to_string(),
            latitude: -5.8,
            longitude: -35.2,
            items: vec![1, 3],
        };
        let value = serde_json::to_value(&point).unwrap();
        assert_eq!(value["uf"], "RN");
        assert_eq!(value["latitude"], -5.8);
        assert_eq!(value["items"], serde_json::json!([1, 3]));
        assert_eq!(value.as_object().unwrap().len(), 8);
    }
}
