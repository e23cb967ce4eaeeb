use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crew {
    pub id: String,
    pub name: String,
    pub leader: String,
    pub members: Vec<String>,
    pub status: CrewStatus,
    pub current_job_id: Option<String>,
    pub current_job_name: Option<String>,
    /// Human-readable, e.g. "2 mins ago".
    pub last_seen: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrewStatus {
    OnJob,
    Transit,
    Available,
    Off,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CrewStatusSummary {
    pub on_job: usize,
    pub transit: usize,
    pub available: usize,
    pub off: usize,
}

impl CrewStatusSummary {
    pub fn from_crews(crews: &[Crew]) -> Self {
        crews.iter().fold(Self::default(), |mut acc, crew| {
            match crew.status {
                CrewStatus::OnJob => acc.on_job += 1,
                CrewStatus::Transit => acc.transit += 1,
                CrewStatus::Available => acc.available += 1,
                CrewStatus::Off => acc.off += 1,
            }
            acc
        })
    }
}
