use dotenvy::dotenv;

mod api;
mod config;
mod setup;
#[cfg(test)]
mod test_helpers;

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Products REST API entry point
///
/// - config/: environment driven settings (server, CORS, database)
/// - setup/: dependency wiring, HTTP server and shutdown
/// - api/: route handlers, DTOs and error mapping
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let config = AppConfig::from_env()?;
    let pool = database_config::init_database(&config.database).await?;
    let container = DependencyContainer::new(pool);

    Server::run(config, container).await?;

    Ok(())
}
