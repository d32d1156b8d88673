use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use persistence::DashboardStores;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, rate_limit_middleware, security_headers_middleware,
    trace_id, RateLimiterState,
};
use crate::routes::{dashboard, events, health, movies, threats, users, vulnerabilities};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub stores: DashboardStores,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

pub fn create_app(config: Config, pool: PgPool, stores: DashboardStores) -> Router {
    let config = Arc::new(config);

    // Rate limiting is enabled when the configured per-minute limit is > 0
    let rate_limiter = if config.security.rate_limit_per_minute > 0 {
        Some(Arc::new(RateLimiterState::new(
            config.security.rate_limit_per_minute,
        )))
    } else {
        None
    };

    let state = AppState {
        pool,
        config: config.clone(),
        stores,
        rate_limiter,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Versioned API surface, rate limited per client
    let api_routes = Router::new()
        // Movie catalog (v1)
        .route("/api/v1/movies", get(movies::list_movies))
        .route("/api/v1/movies", post(movies::create_movie))
        .route("/api/v1/movies/:id", get(movies::get_movie))
        .route("/api/v1/movies/:id", put(movies::update_movie))
        .route("/api/v1/movies/:id", delete(movies::delete_movie))
        // User registration (v1)
        .route("/api/v1/users/register", post(users::register_user))
        .route("/api/v1/users", get(users::list_users))
        .route("/api/v1/users/stats", get(users::get_user_stats))
        .route("/api/v1/users/:id", get(users::get_user))
        .route("/api/v1/users/:id", put(users::update_user))
        .route("/api/v1/users/:id", delete(users::delete_user))
        .route("/api/v1/users/:id/confirm-email", put(users::confirm_email))
        // Security dashboard (v1)
        .route("/api/v1/threats", get(threats::list_threats))
        .route("/api/v1/threats", post(threats::create_threat))
        .route("/api/v1/events", get(events::list_events))
        .route("/api/v1/events", post(events::create_event))
        .route("/api/v1/vulnerabilities", get(vulnerabilities::list_vulnerabilities))
        .route("/api/v1/vulnerabilities", post(vulnerabilities::create_vulnerability))
        .route("/api/v1/dashboard/stats", get(dashboard::get_dashboard_stats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ));

    // Public routes (no rate limiting)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
