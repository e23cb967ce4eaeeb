// crates/fieldops/src/jobs/repo.rs

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::jobs::checklist::{progress, ChecklistProgress};
use crate::jobs::model::{Job, JobStatus, NewRecurringJob};

/// Slot a recurring job gets until dispatch reschedules it.
pub const RECURRING_DEFAULT_TIME: &str = "08:00 AM";
pub const RECURRING_DEFAULT_CREW: &str = "Support Team";
pub const RECURRING_DEFAULT_SERVICE: &str = "Recurring Service";
pub const RECURRING_DEFAULT_ADDRESS: &str = "On File";

/// In-memory schedule store.
///
/// Readers get an `Arc` snapshot and never observe a half-applied edit.
/// Every edit clones the current vector, mutates the clone and swaps it in,
/// so concurrent edits resolve as last-write-wins.
#[derive(Clone, Default)]
pub struct JobsRepo {
    jobs: Arc<RwLock<Arc<Vec<Job>>>>,
}

impl JobsRepo {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self {
            jobs: Arc::new(RwLock::new(Arc::new(jobs))),
        }
    }

    pub async fn snapshot(&self) -> Arc<Vec<Job>> {
        self.jobs.read().await.clone()
    }

    pub async fn get_job(&self, job_id: &str) -> Option<Job> {
        self.snapshot()
            .await
            .iter()
            .find(|j| j.id == job_id)
            .cloned()
    }

    // ----------------------------
    // Edits
    // ----------------------------

    pub async fn create_recurring(&self, new: NewRecurringJob) -> anyhow::Result<Job> {
        let client_name = new.client_name.trim();
        if client_name.is_empty() {
            anyhow::bail!("CLIENT_NAME_REQUIRED");
        }

        let job = Job {
            id: format!("job-{}", Uuid::new_v4()),
            client_name: client_name.to_string(),
            address: RECURRING_DEFAULT_ADDRESS.to_string(),
            time: RECURRING_DEFAULT_TIME.to_string(),
            service_type: RECURRING_DEFAULT_SERVICE.to_string(),
            crew: RECURRING_DEFAULT_CREW.to_string(),
            status: JobStatus::Upcoming,
            completion_status: None,
            notes: None,
            thumbnail: None,
            recurrence: Some(new.pattern),
            invoice_number: None,
            checklist: Vec::new(),
        };

        let stored = job.clone();
        self.replace(move |jobs| jobs.push(stored)).await;

        info!(
            job_id = %job.id,
            pattern = new.pattern.as_str(),
            "recurring job created"
        );
        Ok(job)
    }

    /// Returns false when no job had that id.
    pub async fn delete_job(&self, job_id: &str) -> bool {
        let removed = self
            .replace(|jobs| {
                let before = jobs.len();
                jobs.retain(|j| j.id != job_id);
                jobs.len() != before
            })
            .await;

        if removed {
            info!(job_id, "job deleted");
        }
        removed
    }

    /// Flip one checklist item. `None` when the job or the item is unknown.
    pub async fn toggle_checklist_item(
        &self,
        job_id: &str,
        item_id: u32,
    ) -> Option<ChecklistProgress> {
        self.replace(|jobs| {
            let job = jobs.iter_mut().find(|j| j.id == job_id)?;
            let item = job.checklist.iter_mut().find(|i| i.id == item_id)?;
            item.completed = !item.completed;
            debug!(job_id, item_id, completed = item.completed, "checklist item toggled");
            Some(progress(&job.checklist))
        })
        .await
    }

    async fn replace<T>(&self, edit: impl FnOnce(&mut Vec<Job>) -> T) -> T {
        let mut current = self.jobs.write().await;
        let mut next = (**current).clone();
        let out = edit(&mut next);
        *current = Arc::new(next);
        out
    }
}
