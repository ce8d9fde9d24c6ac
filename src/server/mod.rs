pub mod handlers;
pub mod types;

use crate::{config::Config, diagnosis::Diagnoser, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn app(diagnoser: Arc<Diagnoser>, max_upload_bytes: usize) -> Router {
    let state = AppState { diagnoser };

    Router::new()
        .route("/", get(handlers::index))
        .route("/analyze", post(handlers::analyze))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let diagnoser = Diagnoser::from_config(&config.provider)?;
    info!("Using Gemini model {}", diagnoser.model());

    let app = app(Arc::new(diagnoser), config.server.max_upload_bytes);

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
