// crates/fieldops/src/customers/repo.rs

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::customers::activity::{ActivityKind, ActivityLog};
use crate::customers::model::Customer;

/// In-memory CRM store. Same snapshot discipline as `JobsRepo`:
/// edits copy, mutate and swap, last write wins.
#[derive(Clone, Default)]
pub struct CustomersRepo {
    customers: Arc<RwLock<Arc<Vec<Customer>>>>,
    activity: Arc<RwLock<Arc<Vec<ActivityLog>>>>,
}

impl CustomersRepo {
    pub fn new(customers: Vec<Customer>, activity: Vec<ActivityLog>) -> Self {
        Self {
            customers: Arc::new(RwLock::new(Arc::new(customers))),
            activity: Arc::new(RwLock::new(Arc::new(activity))),
        }
    }

    pub async fn snapshot(&self) -> Arc<Vec<Customer>> {
        self.customers.read().await.clone()
    }

    pub async fn get_customer(&self, customer_id: &str) -> Option<Customer> {
        self.snapshot()
            .await
            .iter()
            .find(|c| c.id == customer_id)
            .cloned()
    }

    /// Append a trimmed note. `Ok(None)` when the customer is unknown.
    pub async fn add_note(&self, customer_id: &str, note: &str) -> anyhow::Result<Option<Customer>> {
        let note = note.trim();
        if note.is_empty() {
            anyhow::bail!("NOTE_EMPTY");
        }

        let mut current = self.customers.write().await;
        let mut next = (**current).clone();

        let Some(customer) = next.iter_mut().find(|c| c.id == customer_id) else {
            return Ok(None);
        };
        customer.notes.push(note.to_string());
        let updated = customer.clone();

        *current = Arc::new(next);
        info!(customer_id, notes = updated.notes.len(), "customer note added");

        Ok(Some(updated))
    }

    /// Record a call, email or note. `Ok(None)` when the customer is unknown.
    pub async fn log_activity(
        &self,
        customer_id: &str,
        kind: ActivityKind,
        content: &str,
        author: &str,
    ) -> anyhow::Result<Option<ActivityLog>> {
        if !kind.is_manual() {
            anyhow::bail!("ACTIVITY_KIND_RESERVED");
        }
        let content = content.trim();
        if content.is_empty() {
            anyhow::bail!("ACTIVITY_EMPTY");
        }

        if self.get_customer(customer_id).await.is_none() {
            return Ok(None);
        }

        let entry = ActivityLog {
            id: Uuid::new_v4(),
            customer_id: customer_id.to_string(),
            at: Utc::now(),
            kind,
            content: content.to_string(),
            author: author.trim().to_string(),
        };

        let mut current = self.activity.write().await;
        let mut next = (**current).clone();
        next.push(entry.clone());
        *current = Arc::new(next);

        info!(customer_id, kind = kind.as_str(), "activity logged");
        Ok(Some(entry))
    }

    /// Activity for one customer, newest first.
    pub async fn activity_for(&self, customer_id: &str) -> Vec<ActivityLog> {
        let snapshot = self.activity.read().await.clone();
        let mut out: Vec<ActivityLog> = snapshot
            .iter()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect();
        out.sort_by(|a, b| b.at.cmp(&a.at));
        out
    }
}
