use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod handlers;
mod models;
mod services;
mod state;

use config::Config;
use handlers::router;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "excerpt=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting Excerpt PDF text extraction service");
    tracing::info!("Max upload size: {}MB", config.max_upload_mb);
    tracing::info!("Thumbnail probe timeout: {}s", config.probe_timeout_seconds);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let app = router(AppState::new(config));

    tracing::info!("Server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
