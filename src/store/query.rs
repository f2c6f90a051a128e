//! Query builder for fluent finds against a [`DocumentStore`].

use futures::{StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use crate::error::AppError;
use crate::models::Collection;
use crate::store::filter::Filter;
use crate::store::record::{Record, RecordStream};
use crate::store::traits::DocumentStore;

/// Result cap applied when the caller sets none.
pub const DEFAULT_LIMIT: usize = 100;

/// A builder for a filtered, limited find on one collection.
///
/// Filters added to the builder are combined with AND.
///
/// # Example
///
/// ```ignore
/// let swords: Vec<Weapon> = store
///     .query(Collection::Weapons)
///     .eq("weapon_type", "sword")
///     .limit(20)
///     .fetch_all_as()
///     .await?;
/// ```
pub struct Query<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
    collection: Collection,
    filters: Vec<Filter>,
    limit: usize,
}

impl<'a, S: DocumentStore + ?Sized> Query<'a, S> {
    pub fn new(store: &'a S, collection: Collection) -> Self {
        Self {
            store,
            collection,
            filters: Vec::new(),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Requires `field` to equal `value`.
    pub fn eq(mut self, field: &str, value: impl Into<JsonValue>) -> Self {
        self.filters.push(Filter::eq(field, value));
        self
    }

    /// Requires `field` to equal `value` when a value is given.
    pub fn eq_opt(self, field: &str, value: Option<impl Into<JsonValue>>) -> Self {
        match value {
            Some(value) => self.eq(field, value),
            None => self,
        }
    }

    /// Requires at least one of `fields` to contain `needle`, ignoring case.
    pub fn contains_any(mut self, fields: &[&str], needle: &str) -> Self {
        self.filters.push(Filter::Any(
            fields.iter().map(|f| Filter::contains(*f, needle)).collect(),
        ));
        self
    }

    /// Caps the number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Executes the find and returns a stream of records.
    pub async fn execute(self) -> Result<RecordStream<'a>, AppError> {
        self.store
            .find(self.collection, Filter::All(self.filters), self.limit)
            .await
    }

    /// Executes the find and collects all records.
    pub async fn fetch_all(self) -> Result<Vec<Record>, AppError> {
        self.execute().await?.try_collect().await
    }

    /// Executes the find and decodes every record into `T`.
    pub async fn fetch_all_as<T: DeserializeOwned>(self) -> Result<Vec<T>, AppError> {
        self.execute()
            .await?
            .map(|record| record.and_then(Record::decode))
            .try_collect()
            .await
    }
}

/// Extension trait providing `store.query(collection)`.
pub trait QueryExt: DocumentStore {
    fn query(&self, collection: Collection) -> Query<'_, Self> {
        Query::new(self, collection)
    }
}

impl<S: DocumentStore + ?Sized> QueryExt for S {}
