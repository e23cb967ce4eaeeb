pub mod model;

pub use model::{Crew, CrewStatus, CrewStatusSummary};

use std::sync::Arc;

use tokio::sync::RwLock;

/// Read-mostly crew roster.
#[derive(Clone, Default)]
pub struct CrewsRepo {
    crews: Arc<RwLock<Arc<Vec<Crew>>>>,
}

impl CrewsRepo {
    pub fn new(crews: Vec<Crew>) -> Self {
        Self {
            crews: Arc::new(RwLock::new(Arc::new(crews))),
        }
    }

    pub async fn snapshot(&self) -> Arc<Vec<Crew>> {
        self.crews.read().await.clone()
    }

    pub async fn status_summary(&self) -> CrewStatusSummary {
        CrewStatusSummary::from_crews(&self.snapshot().await)
    }
}
