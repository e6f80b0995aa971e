use anyhow::{Context, Error as AnyhowError};
use clap::Parser;
use server::{Deployment, cli::Cli, routes};
use services::services::values::ValuesService;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, prelude::*};
use utils::socket::bind_unix_listener;

#[derive(Debug, Error)]
pub enum VolumesServiceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] AnyhowError),
}

#[tokio::main]
async fn main() -> Result<(), VolumesServiceError> {
    let cli = Cli::parse();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_string = format!(
        "warn,server={level},services={level},utils={level}",
        level = log_level
    );
    let env_filter = EnvFilter::try_new(filter_string).context("Failed to create tracing filter")?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let deployment = Deployment::new(ValuesService::default_location());
    let app_router = routes::router(deployment);

    let listener = bind_unix_listener(&cli.socket)
        .await
        .with_context(|| format!("Failed to listen on {}", cli.socket.display()))?;
    tracing::info!("Starting listening on {}", cli.socket.display());

    axum::serve(listener, app_router.into_make_service()).await?;
    Ok(())
}
