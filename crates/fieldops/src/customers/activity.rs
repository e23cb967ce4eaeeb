use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One CRM log line on a customer profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub id: Uuid,
    pub customer_id: String,
    pub at: DateTime<Utc>,
    pub kind: ActivityKind,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Call,
    Email,
    Note,
    /// Written by crews when a visit completes; not loggable by hand.
    Service,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Call => "call",
            ActivityKind::Email => "email",
            ActivityKind::Note => "note",
            ActivityKind::Service => "service",
        }
    }

    pub fn is_manual(&self) -> bool {
        !matches!(self, ActivityKind::Service)
    }
}
