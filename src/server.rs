//! Open the store, bind the listener, serve until shutdown.

use crate::config::ServerConfig;
use crate::routes::app_router;
use crate::state::AppState;
use crate::store::open_store;
use tokio::net::TcpListener;

pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pool = open_store(&config.store).await?;
    let app = app_router(AppState::new(pool), config.body_limit_bytes);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
    }
    tracing::info!("shutting down");
}
