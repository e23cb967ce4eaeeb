// crates/fieldops/src/lookup/gemini.rs

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lookup::{LatLng, LocationLookup, LookupError, LookupResult, MapLink, NO_DETAILS_TEXT};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const SYSTEM_INSTRUCTION: &str = "You are a logistics assistant for a window cleaning business. \
Help dispatch crews and check locations. If searching for UK addresses/postcodes, use the Google \
Maps tool to verify. Always prioritize accuracy for navigation. If the user provides a UK postcode \
like 'SW1A 1AA', look it up directly.";

/// `generateContent` client with the Google Maps grounding tool enabled.
#[derive(Clone)]
pub struct GeminiLookup {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiLookup {
    pub fn new(api_key: &str, model: &str, base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LocationLookup for GeminiLookup {
    async fn lookup(&self, query: &str, near: Option<LatLng>) -> Result<LookupResult, LookupError> {
        let body = GenerateRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: query }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            tools: vec![Tool {
                google_maps: GoogleMaps {},
            }],
            tool_config: near.map(|p| ToolConfig {
                retrieval_config: RetrievalConfig {
                    lat_lng: LatLngBody {
                        latitude: p.lat,
                        longitude: p.lng,
                    },
                },
            }),
        };

        debug!(model = %self.model, has_location = near.is_some(), "sending location lookup");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body: String = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(512)
                .collect();
            return Err(LookupError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))?;

        Ok(parsed.into_result())
    }
}

// ----------------------------
// Wire types
// ----------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<ToolConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_maps: GoogleMaps,
}

#[derive(Serialize)]
struct GoogleMaps {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: LatLngBody,
}

#[derive(Serialize)]
struct LatLngBody {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    maps: Option<MapsChunk>,
}

#[derive(Deserialize)]
struct MapsChunk {
    uri: Option<String>,
    title: Option<String>,
}

impl GenerateResponse {
    fn into_result(self) -> LookupResult {
        let Some(first) = self.candidates.into_iter().next() else {
            return LookupResult {
                text: NO_DETAILS_TEXT.to_string(),
                links: Vec::new(),
            };
        };

        let text: String = first
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let links = first
            .grounding_metadata
            .map(|g| g.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|chunk| chunk.maps)
            .filter_map(|maps| {
                let uri = maps.uri?;
                let title = maps.title.unwrap_or_else(|| uri.clone());
                Some(MapLink { uri, title })
            })
            .collect();

        LookupResult {
            text: if text.trim().is_empty() {
                NO_DETAILS_TEXT.to_string()
            } else {
                text
            },
            links,
        }
    }
}
