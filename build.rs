use std::env;
use std::fs;

/// Keys read by `option_env!` in src/config.rs
const CONFIG_KEYS: [&str; 8] = [
    "API_URL",
    "GEONAMES_URL",
    "COUNTRY_GEONAME_ID",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "TILE_URL",
    "LOG_LEVEL",
];

/// `KEY=value` or `KEY="value"`; blank lines and comments yield nothing
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim().trim_matches('"')))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=.env not found, building with default config (see .env.example)");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env: ignoring unknown key {}", key);
            continue;
        }
        // A variable set in the build environment overrides .env
        if env::var_os(key).is_none() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
