//! Init command handler.

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::config::Config;
use crate::migrations::run_migrations;
use crate::store::backends::postgres::PostgresClient;

use super::App;

impl App {
    /// Run the init command to create the schema and apply migrations.
    pub async fn run_init(&self) -> Result<()> {
        let config = Config::load()?;
        let database = config
            .database
            .ok_or_else(|| eyre!("No [database] configured; set MYTHREALMS_DATABASE__URI"))?;

        tracing::info!("Connecting to PostgreSQL (schema: {})", database.name);
        let client = PostgresClient::connect(&database.uri, &database.name)
            .await
            .map_err(|e| eyre!("Failed to connect: {}", e))?;
        tracing::info!("Connected to PostgreSQL");

        tracing::info!("Running migrations...");
        let result = run_migrations(&client, &database.name)
            .await
            .map_err(|e| eyre!("Migration failed: {}", e))?;

        if result.applied_migrations.is_empty() {
            tracing::info!(
                "Database already at v{}, no migrations needed",
                result.current_version
            );
        } else {
            tracing::info!(
                "Migrations complete: v{} -> v{}, applied: {:?}",
                result.previous_version,
                result.current_version,
                result.applied_migrations
            );
        }

        Ok(())
    }
}
