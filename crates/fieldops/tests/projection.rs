mod common;

use common::{customer, job};
use fieldops::customers::{Customer, CustomerFilter, CustomerStatus, CustomerType};
use fieldops::jobs::{Job, JobFilter, RecurrencePattern};
use fieldops::projection::{
    matches, project, sort_minutes, PipelineStage, SortKey, ViewParameters, END_OF_DAY,
};

fn job_ids(view: &[&Job]) -> Vec<String> {
    view.iter().map(|j| j.id.clone()).collect()
}

fn customer_ids(view: &[&Customer]) -> Vec<String> {
    view.iter().map(|c| c.id.clone()).collect()
}

fn day() -> Vec<Job> {
    vec![
        job("late", "Priya Patel", "04:30 PM", "West Wing Team"),
        job("early", "Johnathan Smith", "09:00 AM", "East Side Crew"),
        job("broken", "Mystery Client", "garbage", "East Side Crew"),
        job("noon", "Sunshine Cafe", "12:00 PM", "Support Unit"),
        job("midnight", "Night Owl Bar", "12:00 AM", "West Wing Team"),
    ]
}

#[test]
fn by_time_orders_by_minutes_and_puts_malformed_last() {
    let jobs = day();
    let view = project(&jobs, &ViewParameters::new(JobFilter::All));

    assert_eq!(
        job_ids(&view),
        vec!["midnight", "early", "noon", "late", "broken"]
    );

    for pair in view.windows(2) {
        assert!(
            sort_minutes(&pair[0].time) <= sort_minutes(&pair[1].time),
            "{} should not come after {}",
            pair[0].time,
            pair[1].time
        );
    }
    assert_eq!(sort_minutes("garbage"), END_OF_DAY);
}

#[test]
fn crew_grouping_orders_groups_by_name_then_time() {
    let jobs = vec![
        job("a-9", "Client 1", "09:00 AM", "A"),
        job("b-11", "Client 2", "11:00 AM", "B"),
        job("a-2", "Client 3", "02:00 PM", "A"),
    ];

    let params = ViewParameters::new(JobFilter::All).sort_by(SortKey::ByCrewThenTime);
    let view = project(&jobs, &params);

    assert_eq!(job_ids(&view), vec!["a-9", "a-2", "b-11"]);
}

#[test]
fn equal_keys_keep_input_order() {
    let jobs = vec![
        job("first", "Client 1", "10:00 AM", "A"),
        job("second", "Client 2", "10:00 AM", "A"),
        job("bad-1", "Client 3", "nope", "A"),
        job("bad-2", "Client 4", "", "A"),
        job("third", "Client 5", "10:00 AM", "A"),
    ];

    for sort in [SortKey::ByTime, SortKey::ByCrewThenTime] {
        let view = project(&jobs, &ViewParameters::new(JobFilter::All).sort_by(sort));
        assert_eq!(
            job_ids(&view),
            vec!["first", "second", "third", "bad-1", "bad-2"],
            "{sort:?}"
        );
    }
}

#[test]
fn input_sort_keeps_snapshot_order() {
    let jobs = day();
    let view = project(&jobs, &ViewParameters::new(JobFilter::All).sort_by(SortKey::Input));

    let expected: Vec<String> = jobs.iter().map(|j| j.id.clone()).collect();
    assert_eq!(job_ids(&view), expected);
}

#[test]
fn search_is_case_insensitive_trimmed_and_spans_fields() {
    let jobs = day();

    let by_name = project(&jobs, &ViewParameters::new(JobFilter::All).search("  smith "));
    assert_eq!(job_ids(&by_name), vec!["early"]);

    let by_crew = project(&jobs, &ViewParameters::new(JobFilter::All).search("WEST WING"));
    assert_eq!(job_ids(&by_crew), vec!["midnight", "late"]);

    let by_address = project(&jobs, &ViewParameters::new(JobFilter::All).search("noon test lane"));
    assert_eq!(job_ids(&by_address), vec!["noon"]);

    let by_service = project(&jobs, &ViewParameters::new(JobFilter::All).search("exterior"));
    assert_eq!(by_service.len(), jobs.len());
}

#[test]
fn empty_or_blank_query_matches_everything() {
    let jobs = day();
    for q in ["", "   "] {
        let view = project(&jobs, &ViewParameters::new(JobFilter::All).search(q));
        assert_eq!(view.len(), jobs.len());
    }
}

#[test]
fn recurring_filter_combines_with_search() {
    let mut jobs = day();
    jobs[1].recurrence = Some(RecurrencePattern::Weekly);
    jobs[3].recurrence = Some(RecurrencePattern::Daily);

    let recurring = project(&jobs, &ViewParameters::new(JobFilter::Recurring));
    assert_eq!(job_ids(&recurring), vec!["early", "noon"]);

    let params = ViewParameters::new(JobFilter::Recurring).search("cafe");
    assert_eq!(job_ids(&project(&jobs, &params)), vec!["noon"]);
}

#[test]
fn category_with_no_matches_is_an_empty_view() {
    let jobs = day();
    let view = project(&jobs, &ViewParameters::new(JobFilter::Conflict));
    assert!(view.is_empty());

    let none: Vec<Job> = Vec::new();
    assert!(project(&none, &ViewParameters::new(JobFilter::All)).is_empty());
}

#[test]
fn output_is_a_subset_satisfying_every_predicate() {
    let jobs = day();
    let params = ViewParameters::new(JobFilter::All)
        .search("e")
        .sort_by(SortKey::ByCrewThenTime);

    let view = project(&jobs, &params);

    let mut seen = std::collections::HashSet::new();
    for j in &view {
        assert!(seen.insert(j.id.clone()), "duplicate {}", j.id);
        assert!(jobs.iter().any(|orig| std::ptr::eq(orig, *j)));
        assert!(matches(*j, &params));
    }

    let rejected = jobs.iter().filter(|j| !seen.contains(&j.id));
    for j in rejected {
        assert!(!matches(j, &params), "{} was wrongly dropped", j.id);
    }
}

#[test]
fn projection_is_deterministic_and_idempotent() {
    let jobs = day();
    let params = ViewParameters::new(JobFilter::All)
        .search("crew")
        .sort_by(SortKey::ByCrewThenTime);

    let once = project(&jobs, &params);
    let again = project(&jobs, &params);
    assert_eq!(job_ids(&once), job_ids(&again));

    let materialized: Vec<Job> = once.iter().map(|j| (*j).clone()).collect();
    let twice = project(&materialized, &params);
    assert_eq!(job_ids(&twice), job_ids(&once));
}

#[test]
fn projection_leaves_input_untouched() {
    let jobs = day();
    let before = jobs.clone();

    let _ = project(&jobs, &ViewParameters::new(JobFilter::All).sort_by(SortKey::ByCrewThenTime));

    assert_eq!(jobs, before);
}

// ----------------------------
// Customers
// ----------------------------

fn book() -> Vec<Customer> {
    vec![
        customer("c1", "Johnathan Doe", CustomerType::Resi, CustomerStatus::Normal),
        customer("c2", "Sunshine Cafe", CustomerType::Comm, CustomerStatus::Normal),
        customer("c3", "Sarah Smith", CustomerType::Resi, CustomerStatus::Overdue),
        customer("l1", "Robert Fox", CustomerType::Resi, CustomerStatus::Lead),
        customer("c4", "Old Mill Offices", CustomerType::Comm, CustomerStatus::Inactive),
    ]
}

fn clients(filter: CustomerFilter) -> ViewParameters<CustomerFilter> {
    ViewParameters::new(filter)
        .sort_by(SortKey::Input)
        .pipeline(PipelineStage::Clients)
}

#[test]
fn pipeline_splits_leads_from_clients() {
    let book = book();

    let client_view = project(&book, &clients(CustomerFilter::All));
    assert_eq!(customer_ids(&client_view), vec!["c1", "c2", "c3", "c4"]);

    let leads = ViewParameters::new(CustomerFilter::All)
        .sort_by(SortKey::Input)
        .pipeline(PipelineStage::Leads);
    assert_eq!(customer_ids(&project(&book, &leads)), vec!["l1"]);

    let unpartitioned = ViewParameters::new(CustomerFilter::All).sort_by(SortKey::Input);
    assert_eq!(project(&book, &unpartitioned).len(), book.len());
}

#[test]
fn customer_categories() {
    let book = book();

    let resi = project(&book, &clients(CustomerFilter::Residential));
    assert_eq!(customer_ids(&resi), vec!["c1", "c3"]);

    let comm = project(&book, &clients(CustomerFilter::Commercial));
    assert_eq!(customer_ids(&comm), vec!["c2", "c4"]);

    let overdue = project(&book, &clients(CustomerFilter::Overdue));
    assert_eq!(customer_ids(&overdue), vec!["c3"]);

    // a lead never shows in the client pipeline, even when asked for by category
    assert!(project(&book, &clients(CustomerFilter::Lead)).is_empty());
}

#[test]
fn customer_search_covers_name_address_and_email() {
    let book = book();

    let by_name = project(&book, &clients(CustomerFilter::All).search("smith"));
    assert_eq!(customer_ids(&by_name), vec!["c3"]);

    let by_email = project(&book, &clients(CustomerFilter::All).search("C2@EXAMPLE"));
    assert_eq!(customer_ids(&by_email), vec!["c2"]);

    let by_address = project(&book, &clients(CustomerFilter::All).search("c4 main"));
    assert_eq!(customer_ids(&by_address), vec!["c4"]);

    let miss = project(&book, &clients(CustomerFilter::Commercial).search("smith"));
    assert!(miss.is_empty());
}

#[test]
fn customers_without_times_keep_order_under_time_sort() {
    let book = book();
    let params = ViewParameters::new(CustomerFilter::All).sort_by(SortKey::ByTime);

    let expected: Vec<String> = book.iter().map(|c| c.id.clone()).collect();
    assert_eq!(customer_ids(&project(&book, &params)), expected);
}
