use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DatabaseSettingsError {
    #[error("DATABASE_URL must be set")]
    MissingUrl,
    #[error("DATABASE_MAX_CONNECTIONS must be a positive integer, got `{0}`")]
    InvalidMaxConnections(String),
}

/// Database settings read from the environment
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub migrations_path: String,
}

impl DatabaseSettings {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
    /// - MIGRATIONS_PATH: Directory holding the SQL migrations
    ///   (default: "infrastructure/persistence/migrations")
    pub fn from_env() -> Result<Self, DatabaseSettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DatabaseSettingsError> {
        let url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(DatabaseSettingsError::MissingUrl)?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(DatabaseSettingsError::InvalidMaxConnections(raw)),
            },
            None => None,
        };

        let migrations_path =
            lookup("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

/// Connects the pool and brings the schema up to date
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let mut config = DatabaseConfig::new(settings.url.clone());
    if let Some(max_connections) = settings.max_connections {
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "database ready"
    );
    Ok(pool)
}
