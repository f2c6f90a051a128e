//! Collection tables.

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::error::AppError;
use crate::migrations::Migration;
use crate::models::Collection;
use crate::store::backends::postgres::quote_ident;
use crate::store::SqlExecutor;

/// Creates one JSONB table per collection in the configured schema.
pub struct M001Collections {
    schema: String,
}

impl M001Collections {
    pub fn new(schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
        }
    }

    fn statements(&self) -> String {
        let schema = quote_ident(&self.schema);
        Collection::all()
            .iter()
            .map(|collection| {
                let name = collection.name();
                format!(
                    r#"
                    CREATE TABLE IF NOT EXISTS {schema}.{table} (
                        seq BIGSERIAL NOT NULL,
                        id TEXT PRIMARY KEY,
                        doc JSONB NOT NULL
                    );
                    CREATE INDEX IF NOT EXISTS {seq_idx} ON {schema}.{table} (seq);
                    CREATE INDEX IF NOT EXISTS {doc_idx} ON {schema}.{table} USING GIN (doc);
                    "#,
                    schema = schema,
                    table = quote_ident(name),
                    seq_idx = quote_ident(&format!("{}_seq_idx", name)),
                    doc_idx = quote_ident(&format!("{}_doc_idx", name)),
                )
            })
            .collect()
    }
}

impl Migration for M001Collections {
    fn id(&self) -> &'static str {
        "m001_collections"
    }

    fn version(&self) -> u32 {
        1
    }

    fn description(&self) -> &'static str {
        "Collection tables (documents, characters, weapons, quests, music_tracks, assets)"
    }

    fn up<'a>(&'a self, ctx: &'a (dyn SqlExecutor + Sync)) -> BoxFuture<'a, Result<(), AppError>> {
        async move { ctx.execute_sql(&self.statements()).await }.boxed()
    }
}
