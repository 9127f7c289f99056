//! HTTP backend for browsing Mergington High School activities and managing signups.

use std::path::Path;
use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::Redirect,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod services;

/// Landing page the root path redirects to.
pub const LANDING_PAGE: &str = "/static/index.html";

/// Shared state handed to every handler.
pub struct AppState {
    pub activities: services::ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(activities: services::ActivityServiceInMemory) -> Self {
        Self {
            activities,
            started_at: chrono::Utc::now(),
        }
    }

    /// State with a freshly seeded roster.
    pub fn seeded() -> Self {
        Self::new(services::ActivityServiceInMemory::seeded())
    }
}

fn cors() -> CorsLayer {
    let origins: Vec<HeaderValue> = if cfg!(debug_assertions) {
        let dev_ports = [3000, 5173, 8000, 8080];
        dev_ports
            .iter()
            .flat_map(|port| {
                [
                    format!("http://localhost:{port}"),
                    format!("http://127.0.0.1:{port}"),
                ]
            })
            .filter_map(|origin| origin.parse().ok())
            .collect()
    } else {
        // Production origins - add your domains here
        Vec::new()
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_headers([header::CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST])
}

/// Build the application router over `state`, serving static files from `static_dir`.
pub fn router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .route("/health", get(handlers::health::get))
        .route("/activities", get(handlers::activities::list))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::activities::signup),
        )
        .route(
            "/activities/{activity_name}/unregister",
            post(handlers::activities::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
