mod handlers;
mod types;

pub use handlers::AppState;
pub use types::{OutcomeKind, OutcomeResponse};

use crate::{Result, config::Config};
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the console router over the given adapters.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/translate", post(handlers::translate))
        .route("/api/fill-mask", post(handlers::fill_mask))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let state = AppState::new(&config);
    let app = app(state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting console on {}", addr);
    info!(
        "Translation requests route via Host: {}",
        config.gateway.translate_hostname
    );
    info!(
        "Fill-mask requests route via Host: {}",
        config.gateway.fillmask_hostname
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
