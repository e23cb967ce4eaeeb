use std::sync::Arc;

use fieldops::api::{self, ApiState};
use fieldops::crews::CrewsRepo;
use fieldops::customers::{Customer, CustomerStatus, CustomerType, CustomersRepo};
use fieldops::jobs::{Job, JobStatus, JobsRepo};
use fieldops::lookup::DisabledLookup;
use fieldops::seed;

#[allow(dead_code)]
pub fn job(id: &str, client_name: &str, time: &str, crew: &str) -> Job {
    Job {
        id: id.to_string(),
        client_name: client_name.to_string(),
        address: format!("{id} Test Lane"),
        time: time.to_string(),
        service_type: "Exterior Wash".to_string(),
        crew: crew.to_string(),
        status: JobStatus::Upcoming,
        completion_status: None,
        notes: None,
        thumbnail: None,
        recurrence: None,
        invoice_number: None,
        checklist: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn customer(id: &str, name: &str, customer_type: CustomerType, status: CustomerStatus) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        phone: None,
        email: format!("{id}@example.com"),
        address: format!("{id} Main St"),
        last_clean: "N/A".to_string(),
        last_service: None,
        customer_type,
        avatar: None,
        status,
        flags: Vec::new(),
        notes: Vec::new(),
        total_spend: None,
        job_count: None,
        tags: Vec::new(),
        source: None,
    }
}

/// Seeded stores with lookup disabled.
#[allow(dead_code)]
pub fn seeded_state() -> ApiState {
    ApiState {
        jobs: JobsRepo::new(seed::jobs()),
        customers: CustomersRepo::new(seed::customers(), seed::activity()),
        crews: CrewsRepo::new(seed::crews()),
        lookup: Arc::new(DisabledLookup),
        lookup_enabled: false,
        home_location: None,
        locale: "en-GB".to_string(),
    }
}

/// Serve the router on an ephemeral port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_api(state: ApiState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("listener has no local addr");

    tokio::spawn(async move {
        axum::serve(listener, api::router(state))
            .await
            .expect("api server crashed");
    });

    format!("http://{addr}")
}
