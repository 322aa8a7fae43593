use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::handlers::{analytics, health, panel};
use crate::services::{AnalyticsService, PanelService};

#[derive(Clone)]
pub struct AppState {
    pub panels: PanelService,
    pub analytics: AnalyticsService,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/panel", post(panel::register))
        .route("/api/v1/panel/{serial}", get(panel::get_by_serial))
        .route(
            "/api/v1/panel/{serial}/analytics",
            get(analytics::list).post(analytics::record),
        )
        .route(
            "/api/v1/panel/{serial}/analytics/day",
            get(analytics::day_summaries),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
