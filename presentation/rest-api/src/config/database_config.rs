use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings read at startup
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory of SQL migrations
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let max_connections = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok())?;
        let migrations_path =
            env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }

    fn pool_config(&self) -> DatabaseConfig {
        let config = DatabaseConfig::new(self.url.clone());
        match self.max_connections {
            Some(max) => config.with_max_connections(max),
            None => config,
        }
    }
}

fn parse_max_connections(raw: Option<String>) -> anyhow::Result<Option<u32>> {
    raw.map(|raw| {
        raw.trim()
            .parse::<u32>()
            .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))
    })
    .transpose()
}

/// Open the connection pool and bring the schema up to date
///
/// # Errors
/// Returns error if the connection or a migration fails.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&settings.pool_config()).await?;

    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!("Database migrations applied from {}", settings.migrations_path);

    Ok(pool)
}
