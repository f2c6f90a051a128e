//! In-memory backend.
//!
//! Collections are insertion-ordered vectors behind a single lock. Used by
//! `serve --in-memory` and by the HTTP tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::Collection;
use crate::store::{DocumentStore, Filter, Record, RecordStream};

/// Process-local document store. Cheap to clone; clones share data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<Record>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(&self, collection: Collection, record: Record) -> Result<(), AppError> {
        let id = record
            .id()
            .ok_or_else(|| AppError::Internal("record has no string id".into()))?
            .to_string();

        let mut collections = self.collections.write().await;
        let records = collections.entry(collection).or_default();
        if records.iter().any(|r| r.id() == Some(id.as_str())) {
            return Err(AppError::Query {
                message: format!("duplicate id in {}: {}", collection, id),
                query: format!("insert into {}", collection),
            });
        }
        records.push(record);
        Ok(())
    }

    async fn find(
        &self,
        collection: Collection,
        filter: Filter,
        limit: usize,
    ) -> Result<RecordStream<'_>, AppError> {
        let collections = self.collections.read().await;
        let matched: Vec<Record> = collections
            .get(&collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| filter.matches(r))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(Box::pin(futures::stream::iter(matched.into_iter().map(Ok))))
    }

    async fn find_one(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Record>, AppError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|records| records.iter().find(|r| r.id() == Some(id)))
            .cloned())
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        patch: Record,
    ) -> Result<Option<Record>, AppError> {
        let mut collections = self.collections.write().await;
        let Some(record) = collections
            .get_mut(&collection)
            .and_then(|records| records.iter_mut().find(|r| r.id() == Some(id)))
        else {
            return Ok(None);
        };

        record.merge(patch);
        Ok(Some(record.clone()))
    }

    async fn count(&self, collection: Collection) -> Result<u64, AppError> {
        let collections = self.collections.read().await;
        Ok(collections.get(&collection).map_or(0, |r| r.len() as u64))
    }
}
