pub mod checklist;
pub mod model;
pub mod repo;

pub use checklist::{progress, ChecklistItem, ChecklistProgress};
pub use model::{Job, JobFilter, JobStatus, NewRecurringJob, RecurrencePattern};
pub use repo::JobsRepo;
