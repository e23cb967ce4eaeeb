use reqwest::Url;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapsPlatform {
    Apple,
    Google,
}

impl MapsPlatform {
    /// iPhone / iPad / iPod browsers open Apple Maps, everything else Google Maps.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if ["iPad", "iPhone", "iPod"]
            .iter()
            .any(|device| user_agent.contains(device))
        {
            MapsPlatform::Apple
        } else {
            MapsPlatform::Google
        }
    }
}

/// Deep link that opens turn-by-turn navigation to `address`.
pub fn maps_link(address: &str, platform: MapsPlatform) -> anyhow::Result<String> {
    let url = match platform {
        MapsPlatform::Apple => Url::parse_with_params("maps://", &[("q", address)])?,
        MapsPlatform::Google => Url::parse_with_params(
            "https://www.google.com/maps/search/",
            &[("api", "1"), ("query", address)],
        )?,
    };
    Ok(url.to_string())
}
