use std::env;

use fieldops::api::ApiState;
use fieldops::config::Config;
use fieldops::customers::CustomerFilter;
use fieldops::jobs::JobFilter;
use fieldops::lookup::{lookup_or_fallback, maps_link, MapsPlatform};
use fieldops::projection::{project, PipelineStage, SortKey, ViewParameters};
use fieldops::telemetry;
use serde::de::DeserializeOwned;

const USAGE: &str = "fieldctl <command>\n\
Commands:\n\
- schedule [--q <text>] [--filter all|recurring|upcoming|in_progress|completed|conflict] [--sort by_time|by_crew_then_time|input]\n\
- customers [--q <text>] [--pipeline clients|leads] [--filter all|residential|commercial|overdue|lead]\n\
- crews\n\
- lookup <free text query>\n\
- maps-link <address> [--apple]\n\
\n\
Reads FIELDOPS_* settings from the environment or .env.\n";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("{USAGE}");
        std::process::exit(2);
    }

    telemetry::init_tracing()?;
    let cfg = Config::from_env()?;
    let state = ApiState::from_config(&cfg);
    let rest = &args[2..];

    match args[1].as_str() {
        "schedule" => schedule(&state, rest).await?,
        "customers" => customers(&state, rest).await?,
        "crews" => crews(&state).await,
        "lookup" => {
            let query = rest.join(" ");
            if query.trim().is_empty() {
                eprintln!("usage: fieldctl lookup <query>");
                std::process::exit(2);
            }
            let result =
                lookup_or_fallback(state.lookup.as_ref(), &query, state.home_location).await;
            println!("{}", result.text);
            for link in result.links {
                println!("  - {} <{}>", link.title, link.uri);
            }
        }
        "maps-link" => {
            let Some(address) = rest.first() else {
                eprintln!("usage: fieldctl maps-link <address> [--apple]");
                std::process::exit(2);
            };
            let platform = if rest.iter().any(|a| a == "--apple") {
                MapsPlatform::Apple
            } else {
                MapsPlatform::Google
            };
            println!("{}", maps_link(address, platform)?);
        }
        other => {
            eprintln!("Unknown command: {other}");
            std::process::exit(2);
        }
    }

    Ok(())
}

async fn schedule(state: &ApiState, args: &[String]) -> anyhow::Result<()> {
    let filter: JobFilter = parse_flag(args, "filter")?.unwrap_or_default();
    let sort: SortKey = parse_flag(args, "sort")?.unwrap_or(SortKey::ByTime);
    let params = ViewParameters::new(filter)
        .search(flag(args, "q").unwrap_or_default())
        .sort_by(sort);

    let snapshot = state.jobs.snapshot().await;
    let view = project(snapshot.as_slice(), &params);

    if view.is_empty() {
        println!("No jobs matching your view.");
        return Ok(());
    }

    for job in view {
        let recurring = job
            .recurrence
            .map(|p| format!(" [{} subscription]", p.as_str()))
            .unwrap_or_default();
        println!(
            "{:>8}  {:<16}  {} ({}, {}) {}{}",
            job.time,
            job.crew,
            job.client_name,
            job.service_type,
            job.address,
            job.status.as_str(),
            recurring
        );
    }
    Ok(())
}

async fn customers(state: &ApiState, args: &[String]) -> anyhow::Result<()> {
    let filter: CustomerFilter = parse_flag(args, "filter")?.unwrap_or_default();
    let pipeline: PipelineStage = parse_flag(args, "pipeline")?.unwrap_or_default();
    let params = ViewParameters::new(filter)
        .search(flag(args, "q").unwrap_or_default())
        .sort_by(SortKey::Input)
        .pipeline(pipeline);

    let snapshot = state.customers.snapshot().await;
    let view = project(snapshot.as_slice(), &params);

    if view.is_empty() {
        println!("No customers matching your view.");
        return Ok(());
    }

    for c in view {
        println!(
            "{:<6} {:<20} {:?}/{:?}  {}  last clean: {}  notes={}",
            c.id,
            c.name,
            c.customer_type,
            c.status,
            c.email,
            c.last_clean,
            c.notes.len()
        );
    }
    Ok(())
}

async fn crews(state: &ApiState) {
    let summary = state.crews.status_summary().await;
    println!(
        "on job={} transit={} available={} off={}",
        summary.on_job, summary.transit, summary.available, summary.off
    );

    for crew in state.crews.snapshot().await.iter() {
        println!(
            "{:<16} lead={:<14} members={} {:?} {} (seen {})",
            crew.name,
            crew.leader,
            crew.members.len(),
            crew.status,
            crew.current_job_name.as_deref().unwrap_or("-"),
            crew.last_seen
        );
    }
}

fn flag(args: &[String], name: &str) -> Option<String> {
    let key = format!("--{name}");
    args.iter()
        .position(|a| *a == key)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

/// Parse a flag value with the same spelling the HTTP API accepts.
fn parse_flag<T: DeserializeOwned>(args: &[String], name: &str) -> anyhow::Result<Option<T>> {
    let Some(raw) = flag(args, name) else {
        return Ok(None);
    };
    serde_json::from_value(serde_json::Value::String(raw.clone()))
        .map(Some)
        .map_err(|_| anyhow::anyhow!("invalid --{name}: {raw}"))
}
