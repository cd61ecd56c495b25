use std::sync::Arc;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::{config::Config, consts::rsvp_const::RSVP_TABLE, errors::Result};

#[derive(Debug, Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn init(config: Config) -> Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(5)
            .connect(&config.database_url)
            .await?;

        ensure_schema(&db).await?;
        info!("Connected to database");

        Ok(Self {
            db,
            config: Arc::new(config),
        })
    }
}

// Idempotent bootstrap, not a migration system.
async fn ensure_schema(db: &PgPool) -> Result<()> {
    let ddl = format!(
        "CREATE TABLE IF NOT EXISTS {RSVP_TABLE} (
            id BIGSERIAL PRIMARY KEY,
            submitted_at TIMESTAMPTZ NOT NULL,
            name VARCHAR(200) NOT NULL,
            attending VARCHAR(20) NOT NULL,
            guests INT NOT NULL,
            diet VARCHAR(1000),
            note VARCHAR(2000),
            wedding_groom VARCHAR(100) NOT NULL,
            wedding_bride VARCHAR(100) NOT NULL,
            wedding_date_iso VARCHAR(50) NOT NULL,
            source VARCHAR(50) NOT NULL,
            ip TEXT,
            user_agent TEXT
        )"
    );
    sqlx::query(&ddl).execute(db).await?;

    Ok(())
}
