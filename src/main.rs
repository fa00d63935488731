// CMS Server - content API for the page/section composition model

use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use cms_core::{api::create_cms_router, app_state::AppState, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize application state (store, services, catalog seed)
    let app_state = AppState::new(config.clone()).await?;

    // Build main application router
    let cms_router = create_cms_router(app_state);
    let app = Router::new()
        .nest("/api/v1", cms_router)
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()));

    let addr = config.server_address();
    info!("CMS server starting on http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
