pub mod activity;
pub mod model;
pub mod repo;

pub use activity::{ActivityKind, ActivityLog};
pub use model::{Customer, CustomerFilter, CustomerFlag, CustomerStatus, CustomerType};
pub use repo::CustomersRepo;
