use panel_analytics_api::repositories::{
    PanelRepository, PanelStore, ReadingRepository, ReadingStore,
};
use panel_analytics_api::services::{AnalyticsService, PanelService};
use panel_analytics_api::{create_pool, routes, Config};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded");

    // Create database pool
    let pool = create_pool(&config).await?;
    info!("Database connection pool created");

    // Wire stores and services
    let panels: Arc<dyn PanelStore> = Arc::new(PanelRepository::new(pool.clone()));
    let readings: Arc<dyn ReadingStore> = Arc::new(ReadingRepository::new(pool));

    let state = routes::AppState {
        panels: PanelService::new(panels.clone()),
        analytics: AnalyticsService::new(panels, readings),
    };

    // Create router
    let app = routes::create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
