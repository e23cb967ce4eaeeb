// crates/fieldops/src/api/models.rs
use serde::{Deserialize, Serialize};

use crate::crews::{Crew, CrewStatusSummary};
use crate::customers::{ActivityKind, CustomerFilter};
use crate::jobs::{ChecklistProgress, Job, JobFilter, RecurrencePattern};
use crate::lookup::{LatLng, MapsPlatform};
use crate::projection::{PipelineStage, SortKey};

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Projected list. `empty` lets the shell pick its empty state without counting.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub empty: bool,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            items,
            total,
            empty: total == 0,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListJobsQuery {
    pub q: Option<String>,
    pub filter: Option<JobFilter>,
    pub sort: Option<SortKey>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListCustomersQuery {
    pub q: Option<String>,
    pub pipeline: Option<PipelineStage>,
    pub filter: Option<CustomerFilter>,
    pub sort: Option<SortKey>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecurringRequest {
    pub client_name: String,
    #[serde(default = "default_pattern")]
    pub pattern: RecurrencePattern,
}

fn default_pattern() -> RecurrencePattern {
    RecurrencePattern::Weekly
}

#[derive(Debug, Serialize)]
pub struct JobDetail {
    #[serde(flatten)]
    pub job: Job,
    pub progress: ChecklistProgress,
}

#[derive(Debug, Serialize)]
pub struct MapsLinkResponse {
    pub url: String,
    pub platform: MapsPlatform,
}

#[derive(Debug, Deserialize)]
pub struct AddNoteRequest {
    pub note: String,
}

#[derive(Debug, Deserialize)]
pub struct LogActivityRequest {
    pub kind: ActivityKind,
    pub content: String,
    pub author: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CrewsResponse {
    pub crews: Vec<Crew>,
    pub summary: CrewStatusSummary,
}

#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub query: String,
    pub location: Option<LatLng>,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub locale: String,
    pub currency_symbol: &'static str,
    pub lookup_enabled: bool,
}
