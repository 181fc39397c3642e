//! Holiday Entitlement Engine server entry point.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use holiday_engine::api::{AppState, create_router};
use holiday_engine::config::{ConfigLoader, HolidayPolicy};

const DEFAULT_CONFIG_DIR: &str = "config/holiday_policy";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,holiday_engine=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Holiday Entitlement Engine v{}", env!("CARGO_PKG_VERSION"));

    let config_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());

    let config = if std::path::Path::new(&config_dir).exists() {
        info!("Loading holiday policy from {}", config_dir);
        ConfigLoader::load(&config_dir)?
    } else {
        info!("Using built-in holiday policy");
        ConfigLoader::from_policy(HolidayPolicy::default())?
    };

    let addr = std::env::var("HOLIDAY_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
