use micro_json_services::{config::Config, routes, AppState};
use tracing::info;

const SERVICE_NAME: &str = "user-service";
const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,micro_json_services=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env(DEFAULT_PORT)?;

    let state = AppState::new(SERVICE_NAME);
    let app = routes::user_router(state);

    let addr = config.addr();
    info!("user service running on port {}", config.port);
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
