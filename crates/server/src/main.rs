use fieldops::api;
use fieldops::config;
use fieldops::telemetry;

use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing()?;
    let cfg = config::Config::from_env()?;

    info!(
        bind_addr = cfg.bind_addr.as_deref().unwrap_or("disabled"),
        lookup = if cfg.gemini_api_key.is_some() { "enabled" } else { "disabled" },
        model = %cfg.gemini_model,
        lookup_timeout_ms = cfg.lookup_timeout_ms,
        locale = %cfg.locale,
        currency = cfg.currency_symbol(),
        seed_demo_data = cfg.seed_demo_data,
        "fieldops starting"
    );

    let Some(addr) = cfg.bind_addr.clone() else {
        warn!("FIELDOPS_BIND_ADDR is off, nothing to serve");
        return Ok(());
    };

    let state = api::ApiState::from_config(&cfg);
    info!(
        jobs = state.jobs.snapshot().await.len(),
        customers = state.customers.snapshot().await.len(),
        crews = state.crews.snapshot().await.len(),
        "stores ready"
    );
    let app = api::router(state);

    // ---- API task ----
    let api_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("api listening on http://{addr}");
        axum::serve(listener, app).await?;
        Ok::<(), anyhow::Error>(())
    });

    tokio::select! {
        res = api_handle => res??,
        _ = tokio::signal::ctrl_c() => info!("shutdown requested"),
    }

    Ok(())
}
