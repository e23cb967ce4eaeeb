// Runtime settings for the server and fieldctl.
// Every FIELDOPS_* variable also accepts the unprefixed name the mobile shell used.
use crate::lookup::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::lookup::LatLng;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub lookup_timeout_ms: u64,
    pub locale: String,
    pub home_location: Option<LatLng>,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = match env_or_fallback("FIELDOPS_BIND_ADDR", "BIND_ADDR") {
            Some(v) => normalize_optional_addr(&v),
            None => Some("127.0.0.1:8080".to_string()),
        };

        // API_KEY is what the mobile shell was configured with
        let gemini_api_key = env_or_fallback("FIELDOPS_GEMINI_API_KEY", "API_KEY");

        let gemini_model = env_or_fallback("FIELDOPS_GEMINI_MODEL", "GEMINI_MODEL")
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let gemini_base_url = env_or_fallback("FIELDOPS_GEMINI_BASE_URL", "GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let lookup_timeout_ms = env_or_fallback("FIELDOPS_LOOKUP_TIMEOUT_MS", "LOOKUP_TIMEOUT_MS")
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(10_000)
            .clamp(500, 60_000);

        let locale =
            env_or_fallback("FIELDOPS_LOCALE", "LANG").unwrap_or_else(|| "en-US".to_string());

        let home_location = parse_location(
            env_or_fallback("FIELDOPS_HOME_LAT", "HOME_LAT").as_deref(),
            env_or_fallback("FIELDOPS_HOME_LNG", "HOME_LNG").as_deref(),
        )?;

        let seed_demo_data = env_bool("FIELDOPS_SEED_DEMO_DATA").unwrap_or(true);

        Ok(Self {
            bind_addr,
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            lookup_timeout_ms,
            locale,
            home_location,
            seed_demo_data,
        })
    }

    pub fn currency_symbol(&self) -> &'static str {
        currency_symbol(&self.locale)
    }
}

/// `£` for British and Irish English locales, `$` otherwise.
pub fn currency_symbol(locale: &str) -> &'static str {
    // LANG uses en_GB.UTF-8, browsers use en-GB
    let normalized = locale.trim().replace('_', "-");
    if normalized.starts_with("en-GB") || normalized.starts_with("en-IE") {
        "£"
    } else {
        "$"
    }
}

fn parse_location(lat: Option<&str>, lng: Option<&str>) -> anyhow::Result<Option<LatLng>> {
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => {
            let lat: f64 = lat
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("FIELDOPS_HOME_LAT is not a number"))?;
            let lng: f64 = lng
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("FIELDOPS_HOME_LNG is not a number"))?;
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                anyhow::bail!("home location out of range: lat={lat} lng={lng}");
            }
            Ok(Some(LatLng { lat, lng }))
        }
        _ => anyhow::bail!("FIELDOPS_HOME_LAT and FIELDOPS_HOME_LNG must be set together"),
    }
}

fn env_or_fallback(primary: &str, fallback: &str) -> Option<String> {
    std::env::var(primary)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .or_else(|| std::env::var(fallback).ok().filter(|s| !s.trim().is_empty()))
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn normalize_optional_addr(value: &str) -> Option<String> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }
    if matches!(v.to_lowercase().as_str(), "0" | "off" | "false" | "none") {
        return None;
    }
    Some(v.to_string())
}
