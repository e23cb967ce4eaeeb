//! Address / place lookup through an external generative-AI service.
//!
//! The remote call is a black box: callers only see [`LookupResult`], and
//! [`lookup_or_fallback`] collapses every failure into one fixed reply.

pub mod gemini;
pub mod maps_link;

pub use gemini::GeminiLookup;
pub use maps_link::{maps_link, MapsPlatform};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const FALLBACK_TEXT: &str = "Sorry, I had trouble reaching the maps service. Please try again.";
pub const NO_DETAILS_TEXT: &str = "I couldn't find specific details for that location.";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLink {
    pub uri: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub text: String,
    pub links: Vec<MapLink>,
}

impl LookupResult {
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_TEXT.to_string(),
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("location lookup disabled: no API key configured")]
    Disabled,

    #[error("lookup transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("lookup service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("lookup response could not be decoded: {0}")]
    Decode(String),
}

#[async_trait]
pub trait LocationLookup: Send + Sync {
    async fn lookup(&self, query: &str, near: Option<LatLng>) -> Result<LookupResult, LookupError>;
}

/// Used when no API key is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLookup;

#[async_trait]
impl LocationLookup for DisabledLookup {
    async fn lookup(&self, _query: &str, _near: Option<LatLng>) -> Result<LookupResult, LookupError> {
        Err(LookupError::Disabled)
    }
}

pub async fn lookup_or_fallback(
    lookup: &dyn LocationLookup,
    query: &str,
    near: Option<LatLng>,
) -> LookupResult {
    match lookup.lookup(query, near).await {
        Ok(result) => result,
        Err(e) => {
            warn!(error = %e, "location lookup failed, serving fallback");
            LookupResult::fallback()
        }
    }
}
