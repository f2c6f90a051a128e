//! Document repository, including versioned updates.

use chrono::Utc;

use crate::context::{AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Collection, Document, DocumentPatch, DocumentType, NewDocument, StampedPatch};
use crate::store::{QueryExt, Record, DEFAULT_LIMIT};

use super::{find_entity, insert_entity};

/// Filters for listing documents.
#[derive(Debug, Clone)]
pub struct ListDocumentsParams {
    pub document_type: Option<DocumentType>,
    pub limit: usize,
}

impl Default for ListDocumentsParams {
    fn default() -> Self {
        Self {
            document_type: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Repository for Document operations.
#[derive(FromContext, Clone)]
pub struct DocumentRepository {
    store: AppStore,
}

impl DocumentRepository {
    /// Create a document with version 1.
    pub async fn create(&self, input: NewDocument) -> Result<Document, AppError> {
        let document = Document::new(input);
        insert_entity(&self.store, &document).await?;

        tracing::info!(
            id = %document.id,
            document_type = %document.document_type,
            "Created document '{}'",
            document.title
        );
        Ok(document)
    }

    /// List documents in insertion order.
    pub async fn list(&self, params: ListDocumentsParams) -> Result<Vec<Document>, AppError> {
        self.store
            .query(Collection::Documents)
            .eq_opt("document_type", params.document_type.map(|t| t.as_str()))
            .limit(params.limit)
            .fetch_all_as()
            .await
    }

    /// Find a document by ID.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Document>, AppError> {
        find_entity(&self.store, id).await
    }

    /// Get a document by ID, failing with `NotFound` if absent.
    pub async fn get(&self, id: &str) -> Result<Document, AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(Collection::Documents, id))
    }

    /// Apply a patch, refreshing `updated_at` and bumping `version`.
    ///
    /// The read of the current version and the write are separate store
    /// operations. Concurrent updates race: the last write wins and the
    /// version may under-count.
    pub async fn update(&self, id: &str, patch: DocumentPatch) -> Result<Document, AppError> {
        let current = self.get(id).await?;

        let stamped = StampedPatch {
            patch,
            updated_at: Utc::now().max(current.updated_at),
            version: current.version + 1,
        };

        let merged = self
            .store
            .update(Collection::Documents, id, Record::from_entity(&stamped)?)
            .await?
            .ok_or_else(|| AppError::not_found(Collection::Documents, id))?;
        let document: Document = merged.decode()?;

        tracing::info!(id = %document.id, version = document.version, "Updated document");
        Ok(document)
    }

    /// Documents whose title or any tag contains `query`, ignoring case.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<Document>, AppError> {
        self.store
            .query(Collection::Documents)
            .contains_any(&["title", "tags"], query)
            .limit(limit)
            .fetch_all_as()
            .await
    }
}
