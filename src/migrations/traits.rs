//! Migration trait and registry.

use futures::future::BoxFuture;

use crate::error::AppError;
use crate::store::{SqlClient, SqlExecutor, Transaction as _};

/// A versioned schema change.
///
/// Uses `BoxFuture` to avoid `'static` requirements from `#[async_trait]`.
pub trait Migration: Send + Sync {
    fn id(&self) -> &'static str;
    fn version(&self) -> u32;
    fn description(&self) -> &'static str;
    fn up<'a>(&'a self, ctx: &'a (dyn SqlExecutor + Sync)) -> BoxFuture<'a, Result<(), AppError>>;
}

/// Ordered set of migrations.
pub struct Register {
    migrations: Vec<Box<dyn Migration>>,
}

impl Register {
    pub fn new() -> Self {
        Self {
            migrations: Vec::new(),
        }
    }

    pub fn register(mut self, migration: impl Migration + 'static) -> Self {
        self.migrations.push(Box::new(migration));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Migration> {
        self.migrations.iter().map(|m| m.as_ref())
    }

    /// Runs every migration above `current_version`, each in its own
    /// transaction.
    ///
    /// Returns the new version and the ids of the applied migrations.
    pub async fn run_pending<C: SqlClient>(
        &self,
        client: &C,
        current_version: u32,
    ) -> Result<(u32, Vec<String>), AppError> {
        let mut applied = vec![];
        let mut new_version = current_version;

        for migration in self.iter() {
            if migration.version() <= current_version {
                continue;
            }

            tracing::info!(
                id = migration.id(),
                version = migration.version(),
                "Applying migration: {}",
                migration.description()
            );

            let txn = client.begin().await?;
            match migration.up(&txn).await {
                Ok(()) => txn.commit().await?,
                Err(e) => {
                    tracing::error!("Migration {} failed: {}", migration.id(), e);
                    txn.rollback().await?;
                    return Err(e);
                }
            }

            new_version = migration.version();
            applied.push(migration.id().to_string());
        }

        Ok((new_version, applied))
    }
}

impl Default for Register {
    fn default() -> Self {
        Self::new()
    }
}
