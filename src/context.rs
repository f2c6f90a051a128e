//! Application context providing the dependency injection root.

use std::sync::Arc;

use crate::assets::AssetStore;
use crate::config::Config;
use crate::di::{Context as ContextDerive, FromRef};
use crate::error::AppError;
use crate::migrations::run_migrations;
use crate::store::backends::memory::MemoryStore;
use crate::store::backends::postgres::PostgresClient;
use crate::store::DocumentStore;

/// Shared document store handle. Handlers never see the concrete backend.
pub type AppStore = Arc<dyn DocumentStore>;

/// Shared asset store handle.
pub type AppAssets = Arc<AssetStore>;

/// Root application context for dependency injection.
///
/// `#[derive(Context)]` generates a `FromRef` implementation for each field,
/// so repositories can declare the handles they need and be resolved with
/// [`Context::resolve`].
#[derive(ContextDerive, Clone)]
pub struct Context {
    /// Document store shared by all repositories.
    pub store: AppStore,
    /// Disk storage for uploaded files.
    pub assets: AppAssets,
    /// Application configuration.
    pub config: Arc<Config>,
}

impl Context {
    /// Connects to PostgreSQL, applies pending migrations and builds the context.
    pub async fn from_config(config: Config) -> Result<Self, AppError> {
        let database = config.database.clone().ok_or_else(|| {
            AppError::Internal(
                "no [database] configured; set MYTHREALMS_DATABASE__URI or use --in-memory".into(),
            )
        })?;

        tracing::info!(schema = %database.name, "Connecting to PostgreSQL");
        let client = PostgresClient::connect(&database.uri, &database.name).await?;

        let result = run_migrations(&client, &database.name).await?;
        if !result.applied_migrations.is_empty() {
            tracing::info!(
                "Migrations complete: v{} -> v{}, applied: {:?}",
                result.previous_version,
                result.current_version,
                result.applied_migrations
            );
        }

        Ok(Self::new(Arc::new(client), config))
    }

    /// Builds a context over a fresh in-memory store.
    pub fn in_memory(config: Config) -> Self {
        Self::new(Arc::new(MemoryStore::new()), config)
    }

    /// Builds a context over an existing store.
    pub fn new(store: AppStore, config: Config) -> Self {
        let assets = AssetStore::new(&config.server.upload_dir);
        Self {
            store,
            assets: Arc::new(assets),
            config: Arc::new(config),
        }
    }

    /// Resolves a dependency from this context.
    pub fn resolve<T: FromRef<Self>>(&self) -> T {
        T::from_ref(self)
    }
}
