//! Migration runner with version tracking.

use futures::TryStreamExt;

use crate::error::AppError;
use crate::migrations::{M001Collections, Register};
use crate::store::backends::postgres::quote_ident;
use crate::store::{SqlClient, SqlExecutor, Transaction};

/// Result of running migrations.
#[derive(Debug, Clone)]
pub struct MigrationResult {
    pub previous_version: u32,
    pub current_version: u32,
    pub applied_migrations: Vec<String>,
}

/// Creates the migrations register for a schema.
pub fn create_register(schema: &str) -> Register {
    Register::new().register(M001Collections::new(schema))
}

/// Runs all pending migrations in `schema`, creating the schema and its
/// `schema_version` table first when absent.
pub async fn run_migrations<C: SqlClient>(
    client: &C,
    schema: &str,
) -> Result<MigrationResult, AppError> {
    ensure_schema_version_table(client, schema).await?;

    let previous_version = get_schema_version(client, schema).await?;
    let register = create_register(schema);

    let (current_version, applied_migrations) =
        register.run_pending(client, previous_version).await?;

    for migration_id in &applied_migrations {
        let version = register
            .iter()
            .find(|m| m.id() == migration_id)
            .map(|m| m.version())
            .unwrap_or(current_version);
        update_schema_version(client, schema, version, migration_id).await?;
    }

    Ok(MigrationResult {
        previous_version,
        current_version,
        applied_migrations,
    })
}

fn version_table(schema: &str) -> String {
    format!("{}.schema_version", quote_ident(schema))
}

async fn ensure_schema_version_table<C: SqlClient>(
    client: &C,
    schema: &str,
) -> Result<(), AppError> {
    let table = version_table(schema);
    let sql = format!(
        r#"
        CREATE SCHEMA IF NOT EXISTS {schema};
        CREATE TABLE IF NOT EXISTS {table} (
            id INTEGER PRIMARY KEY DEFAULT 1 CHECK (id = 1),
            version INTEGER NOT NULL DEFAULT 0,
            applied_migrations TEXT[] NOT NULL DEFAULT '{{}}',
            last_applied_at TIMESTAMPTZ DEFAULT NOW()
        );
        INSERT INTO {table} (id, version) VALUES (1, 0) ON CONFLICT (id) DO NOTHING;
        "#,
        schema = quote_ident(schema),
        table = table,
    );

    let txn = client.begin().await?;
    txn.execute_sql(&sql).await?;
    txn.commit().await?;
    Ok(())
}

async fn get_schema_version<C: SqlClient>(client: &C, schema: &str) -> Result<u32, AppError> {
    let sql = format!("SELECT version FROM {} WHERE id = 1", version_table(schema));

    let txn = client.begin().await?;
    let rows: Vec<_> = txn.query_sql(&sql).await?.try_collect().await?;
    txn.commit().await?;

    Ok(rows
        .first()
        .and_then(|r| r.get::<i64>("version").ok())
        .unwrap_or(0) as u32)
}

async fn update_schema_version<C: SqlClient>(
    client: &C,
    schema: &str,
    version: u32,
    migration_id: &str,
) -> Result<(), AppError> {
    let sql = format!(
        "UPDATE {} SET version = {}, applied_migrations = array_append(applied_migrations, '{}'), last_applied_at = NOW() WHERE id = 1",
        version_table(schema),
        version,
        migration_id
    );

    let txn = client.begin().await?;
    txn.execute_sql(&sql).await?;
    txn.commit().await?;
    Ok(())
}
