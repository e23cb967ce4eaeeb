use serde::{Deserialize, Serialize};

use crate::jobs::checklist::ChecklistItem;
use crate::projection::Projectable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub client_name: String,
    pub address: String,
    /// 12-hour clock, e.g. "09:00 AM".
    pub time: String,
    pub service_type: String,
    pub crew: String,
    pub status: JobStatus,

    pub completion_status: Option<String>,
    pub notes: Option<String>,
    pub thumbnail: Option<String>,
    pub recurrence: Option<RecurrencePattern>,
    pub invoice_number: Option<String>,

    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

impl Job {
    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct NewRecurringJob {
    pub client_name: String,
    pub pattern: RecurrencePattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Upcoming,
    InProgress,
    Completed,
    Conflict,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Upcoming => "upcoming",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Conflict => "conflict",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
}

impl RecurrencePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrencePattern::Daily => "daily",
            RecurrencePattern::Weekly => "weekly",
            RecurrencePattern::Monthly => "monthly",
        }
    }
}

/// Schedule list filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobFilter {
    #[default]
    All,
    Recurring,
    Upcoming,
    InProgress,
    Completed,
    Conflict,
}

impl Projectable for Job {
    type Category = JobFilter;

    fn in_category(&self, category: &JobFilter) -> bool {
        match category {
            JobFilter::All => true,
            JobFilter::Recurring => self.is_recurring(),
            JobFilter::Upcoming => self.status == JobStatus::Upcoming,
            JobFilter::InProgress => self.status == JobStatus::InProgress,
            JobFilter::Completed => self.status == JobStatus::Completed,
            JobFilter::Conflict => self.status == JobStatus::Conflict,
        }
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client_name.as_str(),
            self.address.as_str(),
            self.crew.as_str(),
            self.service_type.as_str(),
        ]
    }

    fn time_of_day(&self) -> Option<&str> {
        Some(self.time.as_str())
    }

    fn crew(&self) -> Option<&str> {
        Some(self.crew.as_str())
    }
}
