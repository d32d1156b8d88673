use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use labstack_api::{app, config, jobs, middleware};
use persistence::DashboardStores;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging
    middleware::logging::init_logging(&config.logging);

    info!("Starting Labstack API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize metrics recorder
    middleware::init_metrics();

    // Create database pool
    let db_config = persistence::db::DatabaseConfig::from(&config.database);
    let pool = persistence::db::create_pool(&db_config).await?;

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await?;
    info!("Migrations completed");

    // In-memory dashboard stores, pre-seeded with a few known records
    let stores = DashboardStores::with_capacity(config.threat_feed.capacity);
    stores.seed_samples();

    // Background jobs
    let mut scheduler = jobs::JobScheduler::new();
    if config.threat_feed.enabled {
        scheduler.register(jobs::ThreatFeedJob::new(
            Arc::clone(&stores.threats),
            config.threat_feed.interval_secs,
        ));
    }
    scheduler.register(jobs::PoolMetricsJob::new(pool.clone()));
    scheduler.start();

    // Build application
    let app = app::create_app(config.clone(), pool, stores);

    // Start server
    let addr = config.socket_addr();
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop background jobs before exiting
    scheduler.shutdown();
    scheduler.wait_for_shutdown(Duration::from_secs(10)).await;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
    info!("Shutdown signal received");
}
