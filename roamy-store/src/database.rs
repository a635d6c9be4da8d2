use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;
use crate::app_config::StoreConfig;

#[derive(Clone)]
pub struct DbClient {
    pub pool: Pool<Postgres>,
}

impl DbClient {
    pub async fn new(connection_string: &str, max_connections: u32, acquire_timeout: Duration) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect(connection_string)
            .await?;

        info!("Connected to catalog database (max {} connections)", max_connections);
        Ok(Self { pool })
    }

    pub async fn from_config(config: &StoreConfig, connection_string: &str) -> Result<Self, sqlx::Error> {
        Self::new(
            connection_string,
            config.max_connections,
            Duration::from_secs(config.acquire_timeout_secs),
        )
        .await
    }
}
