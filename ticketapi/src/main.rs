use ticketapi::core::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ticketapi=info")),
        )
        .init();

    let config = Config::from_env()?;
    tokio::fs::create_dir_all(&config.output_dir).await?;
    tracing::info!(output_dir = %config.output_dir.display(), "writing receipts");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    let app = ticketapi::app(AppState::new(config));

    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
