use anyhow::Context;
use course_enrollment::modules::courses::course::Course;
use course_enrollment::shell::{config::AppConfig, http::router, state::AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    let state = AppState::new(Course::new(config.capacity));

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    tracing::info!(%address, capacity = config.capacity.get(), "course enrollment listening");

    axum::serve(listener, router(state))
        .await
        .context("server stopped unexpectedly")?;
    Ok(())
}
