/// Application entry point
use moon_phase::config::AppConfig;
use moon_phase::handlers::AppState;
use moon_phase::routes::build_router;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    if config.nasa_api_key.is_empty() {
        info!("NASA_API_KEY not set, APOD requests go out without a key");
    }
    info!("Configuration loaded successfully");

    let bind_addr = config.bind_addr;
    let static_dir = config.static_dir.clone();

    // Initialize application state
    let state = AppState::from_config(config)?;

    // Build router
    let app = build_router(state, &static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(static_dir = %static_dir.display(), "moon_phase service listening on {bind_addr}");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
