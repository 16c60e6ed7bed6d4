//! Book API server. Reads `DATABASE_URL`, `BIND_ADDR` and `BODY_LIMIT_BYTES`
//! (a `.env` file is honored) and serves the book routes.

use bookshelf::{serve, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bookshelf=info,book_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    serve(config).await
}
