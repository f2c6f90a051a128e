//! Asset repository: metadata records for uploaded files.

use crate::context::{AppAssets, AppStore, Context};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Asset, Collection, NewAsset};
use crate::store::{QueryExt, DEFAULT_LIMIT};

use super::insert_entity;

#[derive(Debug, Clone)]
pub struct ListAssetsParams {
    pub category: Option<String>,
    pub limit: usize,
}

impl Default for ListAssetsParams {
    fn default() -> Self {
        Self {
            category: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Repository for Asset operations.
#[derive(FromContext, Clone)]
pub struct AssetRepository {
    store: AppStore,
    assets: AppAssets,
}

impl AssetRepository {
    /// Writes the uploaded bytes, then records the asset.
    ///
    /// If the record insert fails the file stays on disk unreferenced.
    pub async fn upload(
        &self,
        input: NewAsset,
        bytes: &[u8],
        filename: &str,
        content_type: Option<String>,
    ) -> Result<Asset, AppError> {
        let stored = self.assets.store(bytes, filename).await?;
        let asset = Asset::new(input, stored.file_path, content_type);
        insert_entity(&self.store, &asset).await?;

        tracing::info!(
            id = %asset.id,
            file_path = %asset.file_path,
            file_type = %asset.file_type,
            size = bytes.len(),
            "Uploaded asset '{}'",
            asset.name
        );
        Ok(asset)
    }

    pub async fn list(&self, params: ListAssetsParams) -> Result<Vec<Asset>, AppError> {
        self.store
            .query(Collection::Assets)
            .eq_opt("category", params.category)
            .limit(params.limit)
            .fetch_all_as()
            .await
    }
}
