//! Demo records the stores start with.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::crews::{Crew, CrewStatus};
use crate::customers::{
    ActivityKind, ActivityLog, Customer, CustomerFlag, CustomerStatus, CustomerType,
};
use crate::jobs::{ChecklistItem, Job, JobStatus, RecurrencePattern};

fn standard_checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem {
            completed: true,
            ..ChecklistItem::new(1, "Exterior glass cleaning")
        },
        ChecklistItem {
            count: Some("24 count".to_string()),
            ..ChecklistItem::new(2, "Screen washing")
        },
        ChecklistItem::new(3, "Track vacuuming"),
    ]
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "job-9am".to_string(),
            client_name: "Johnathan Smith".to_string(),
            address: "124 Oak St".to_string(),
            time: "09:00 AM".to_string(),
            service_type: "Exterior Wash".to_string(),
            crew: "East Side Crew".to_string(),
            status: JobStatus::Upcoming,
            completion_status: None,
            notes: Some("Gate code is 1234. Customer requested back windows first.".to_string()),
            thumbnail: None,
            recurrence: Some(RecurrencePattern::Weekly),
            invoice_number: None,
            checklist: standard_checklist(),
        },
        Job {
            id: "job-11am".to_string(),
            client_name: "Elena Rodriguez".to_string(),
            address: "456 West Blvd".to_string(),
            time: "11:00 AM".to_string(),
            service_type: "Full Package".to_string(),
            crew: "West Wing Team".to_string(),
            status: JobStatus::Completed,
            completion_status: Some("Paid".to_string()),
            notes: None,
            thumbnail: None,
            recurrence: None,
            invoice_number: Some("INV-2023".to_string()),
            checklist: standard_checklist(),
        },
        Job {
            id: "job-2pm".to_string(),
            client_name: "Tech Hub Office Park".to_string(),
            address: "88 Innovation Way".to_string(),
            time: "02:00 PM".to_string(),
            service_type: "Commercial Glass".to_string(),
            crew: "East Side Crew".to_string(),
            status: JobStatus::InProgress,
            completion_status: None,
            notes: None,
            thumbnail: None,
            recurrence: Some(RecurrencePattern::Monthly),
            invoice_number: None,
            checklist: standard_checklist(),
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "cust1".to_string(),
            name: "Johnathan Doe".to_string(),
            phone: Some("555-010-2233".to_string()),
            email: "j.doe@example.com".to_string(),
            address: "124 Oak St, North Loop".to_string(),
            last_clean: "Oct 12, 2023".to_string(),
            last_service: Some("Full Exterior Wash".to_string()),
            customer_type: CustomerType::Resi,
            avatar: None,
            status: CustomerStatus::Normal,
            flags: vec![CustomerFlag::Pets],
            notes: vec![
                "Gate code is 1234".to_string(),
                "Watch for the rose bushes".to_string(),
            ],
            total_spend: Some(1450.0),
            job_count: Some(8),
            tags: Vec::new(),
            source: None,
        },
        Customer {
            id: "cust2".to_string(),
            name: "Sunshine Cafe".to_string(),
            phone: Some("555-999-1234".to_string()),
            email: "hello@sunshinecafe.biz".to_string(),
            address: "Suite 400, Innovation Blvd".to_string(),
            last_clean: "Nov 05, 2023".to_string(),
            last_service: Some("Monthly Maintenance".to_string()),
            customer_type: CustomerType::Comm,
            avatar: None,
            status: CustomerStatus::Normal,
            flags: vec![CustomerFlag::Lock],
            notes: Vec::new(),
            total_spend: Some(3200.0),
            job_count: Some(12),
            tags: Vec::new(),
            source: None,
        },
        Customer {
            id: "cust3".to_string(),
            name: "Sarah Smith".to_string(),
            phone: Some("555-443-2211".to_string()),
            email: "sarah.smith88@webmail.com".to_string(),
            address: "789 Pine Rd, South Loop".to_string(),
            last_clean: "Aug 22, 2023".to_string(),
            last_service: Some("Deep Clean + Gutters".to_string()),
            customer_type: CustomerType::Resi,
            avatar: None,
            status: CustomerStatus::Overdue,
            flags: Vec::new(),
            notes: vec!["Always call 15 mins ahead".to_string()],
            total_spend: Some(890.0),
            job_count: Some(4),
            tags: Vec::new(),
            source: None,
        },
        Customer {
            id: "lead1".to_string(),
            name: "Robert Fox".to_string(),
            phone: Some("555-222-3344".to_string()),
            email: "r.fox@example.com".to_string(),
            address: "332 Silver Creek Ct".to_string(),
            last_clean: "N/A".to_string(),
            last_service: None,
            customer_type: CustomerType::Resi,
            avatar: None,
            status: CustomerStatus::Lead,
            flags: Vec::new(),
            notes: Vec::new(),
            total_spend: None,
            job_count: None,
            tags: Vec::new(),
            source: Some("Google Maps".to_string()),
        },
    ]
}

fn at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

pub fn activity() -> Vec<ActivityLog> {
    let entry = |at: DateTime<Utc>, kind: ActivityKind, content: &str, author: &str| ActivityLog {
        id: Uuid::new_v4(),
        customer_id: "cust1".to_string(),
        at,
        kind,
        content: content.to_string(),
        author: author.to_string(),
    };

    vec![
        entry(
            at(10, 24, 14, 30),
            ActivityKind::Call,
            "Inquired about gutter cleaning discount for winter.",
            "Alex",
        ),
        entry(
            at(10, 20, 11, 15),
            ActivityKind::Email,
            "Sent automated follow-up after service.",
            "System",
        ),
        entry(
            at(10, 12, 9, 0),
            ActivityKind::Service,
            "Completed Full Exterior Wash - 5/5 Rating.",
            "Crew A",
        ),
    ]
}

pub fn crews() -> Vec<Crew> {
    vec![
        Crew {
            id: "c1".to_string(),
            name: "East Side Crew".to_string(),
            leader: "Mike Henderson".to_string(),
            members: vec!["Mike H.".into(), "Steve T.".into(), "Chris L.".into()],
            status: CrewStatus::OnJob,
            current_job_id: Some("job-9am".to_string()),
            current_job_name: Some("Smith Residence".to_string()),
            last_seen: "2 mins ago".to_string(),
        },
        Crew {
            id: "c2".to_string(),
            name: "West Wing Team".to_string(),
            leader: "Sarah Jenkins".to_string(),
            members: vec!["Sarah J.".into(), "Kevin B.".into()],
            status: CrewStatus::Transit,
            current_job_id: None,
            current_job_name: Some("Tech Hub Office Park".to_string()),
            last_seen: "12 mins ago".to_string(),
        },
        Crew {
            id: "c3".to_string(),
            name: "Support Unit".to_string(),
            leader: "Dave Miller".to_string(),
            members: vec!["Dave M.".into()],
            status: CrewStatus::Available,
            current_job_id: None,
            current_job_name: None,
            last_seen: "Just now".to_string(),
        },
    ]
}
