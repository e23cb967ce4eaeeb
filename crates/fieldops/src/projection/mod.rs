//! Filtered, ordered views over record snapshots.
//!
//! A projection never mutates or clones records: it borrows the snapshot and
//! returns references in display order. Every predicate is independent and
//! they are applied conjunctively.

mod time;

pub use time::{parse_time_to_minutes, sort_minutes, END_OF_DAY};

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep snapshot order.
    Input,
    #[default]
    ByTime,
    /// Crew name ascending, then time within a crew.
    ByCrewThenTime,
}

/// Coarse CRM partition: which top-level list a customer belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Leads,
    #[default]
    Clients,
}

/// A record that can flow through [`project`].
pub trait Projectable {
    /// Closed set of category filters for this record kind.
    type Category;

    fn in_category(&self, category: &Self::Category) -> bool;

    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// 12-hour clock string, if the record is scheduled.
    fn time_of_day(&self) -> Option<&str> {
        None
    }

    fn crew(&self) -> Option<&str> {
        None
    }

    /// `None` means the record is not partitioned and passes any pipeline filter.
    fn pipeline_stage(&self) -> Option<PipelineStage> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParameters<C> {
    pub search_query: String,
    pub category: C,
    pub sort_key: SortKey,
    pub pipeline: Option<PipelineStage>,
}

impl<C: Default> Default for ViewParameters<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> ViewParameters<C> {
    pub fn new(category: C) -> Self {
        Self {
            search_query: String::new(),
            category,
            sort_key: SortKey::default(),
            pipeline: None,
        }
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn sort_by(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    pub fn pipeline(mut self, stage: PipelineStage) -> Self {
        self.pipeline = Some(stage);
        self
    }
}

/// True when `record` passes every active predicate of `params`.
pub fn matches<R: Projectable>(record: &R, params: &ViewParameters<R::Category>) -> bool {
    let needle = params.search_query.trim().to_lowercase();
    matches_normalized(record, params, &needle)
}

fn matches_normalized<R: Projectable>(
    record: &R,
    params: &ViewParameters<R::Category>,
    needle: &str,
) -> bool {
    let in_pipeline = match (params.pipeline, record.pipeline_stage()) {
        (Some(wanted), Some(stage)) => wanted == stage,
        _ => true,
    };

    in_pipeline
        && record.in_category(&params.category)
        && (needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle)))
}

/// Compute the visible, ordered subset of `records`.
///
/// Sorting is stable: records with equal keys keep their snapshot order.
/// Unparseable times sort as [`END_OF_DAY`].
pub fn project<'a, R: Projectable>(
    records: &'a [R],
    params: &ViewParameters<R::Category>,
) -> Vec<&'a R> {
    let needle = params.search_query.trim().to_lowercase();

    let mut out: Vec<&R> = records
        .iter()
        .filter(|r| matches_normalized(*r, params, &needle))
        .collect();

    match params.sort_key {
        SortKey::Input => {}
        SortKey::ByTime => out.sort_by_key(|r| time_key(*r)),
        SortKey::ByCrewThenTime => out.sort_by(|a, b| {
            compare_crew(a.crew(), b.crew()).then_with(|| time_key(*a).cmp(&time_key(*b)))
        }),
    }

    out
}

fn time_key<R: Projectable>(record: &R) -> u32 {
    record.time_of_day().map(sort_minutes).unwrap_or(END_OF_DAY)
}

// crewless records go last
fn compare_crew(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
