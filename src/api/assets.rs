//! `/api/assets` handlers, including multipart upload.

use axum::extract::multipart::{Field, MultipartRejection};
use axum::extract::rejection::QueryRejection;
use axum::extract::{DefaultBodyLimit, Multipart, Query, State};
use axum::Json;
use bytes::Bytes;
use serde::Deserialize;

use crate::context::Context;
use crate::error::AppError;
use crate::models::{Asset, NewAsset};
use crate::repositories::{AssetRepository, ListAssetsParams};
use crate::store::DEFAULT_LIMIT;

use super::non_empty;

/// Largest accepted upload request.
const MAX_UPLOAD_BYTES: usize = 256 * 1024 * 1024;

pub fn body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(MAX_UPLOAD_BYTES)
}

#[derive(Debug, Deserialize)]
pub struct ListAssetsQuery {
    category: Option<String>,
    limit: Option<usize>,
}

/// The `file` part of an upload.
struct UploadedFile {
    filename: String,
    content_type: Option<String>,
    bytes: Bytes,
}

/// Accepts `file`, `name`, `category`, optional `description` and optional
/// `tags` (a JSON array of strings). Unknown parts are ignored.
///
/// All fields are validated before anything is written to disk.
pub async fn upload(
    State(ctx): State<Context>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Asset>, AppError> {
    let mut multipart = multipart?;

    let mut file: Option<UploadedFile> = None;
    let mut name: Option<String> = None;
    let mut category: Option<String> = None;
    let mut description: Option<String> = None;
    let mut tags_raw: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    bytes,
                });
            }
            Some("name") => name = Some(text(field).await?),
            Some("category") => category = Some(text(field).await?),
            Some("description") => description = Some(text(field).await?),
            Some("tags") => tags_raw = Some(text(field).await?),
            _ => {}
        }
    }

    let file = file.ok_or_else(|| AppError::validation("file", "field required"))?;
    let input = NewAsset {
        name: name.ok_or_else(|| AppError::validation("name", "field required"))?,
        category: category.ok_or_else(|| AppError::validation("category", "field required"))?,
        tags: parse_tags(tags_raw.as_deref())?,
        description,
    };

    let asset = ctx
        .resolve::<AssetRepository>()
        .upload(input, &file.bytes, &file.filename, file.content_type)
        .await?;
    Ok(Json(asset))
}

pub async fn list(
    State(ctx): State<Context>,
    query: Result<Query<ListAssetsQuery>, QueryRejection>,
) -> Result<Json<Vec<Asset>>, AppError> {
    let Query(query) = query?;
    let params = ListAssetsParams {
        category: non_empty(query.category),
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
    };
    let assets = ctx.resolve::<AssetRepository>().list(params).await?;
    Ok(Json(assets))
}

async fn text(field: Field<'_>) -> Result<String, AppError> {
    Ok(field.text().await?)
}

/// Decodes the `tags` form field. Absent means no tags.
fn parse_tags(raw: Option<&str>) -> Result<Vec<String>, AppError> {
    match raw {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(raw).map_err(|e| {
            AppError::MalformedUpload(format!("tags must be a JSON array of strings: {}", e))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert!(parse_tags(None).unwrap().is_empty());
        assert_eq!(parse_tags(Some(r#"["forest","boss"]"#)).unwrap(), vec!["forest", "boss"]);
        assert!(matches!(
            parse_tags(Some("forest,boss")),
            Err(AppError::MalformedUpload(_))
        ));
        assert!(matches!(
            parse_tags(Some("[1, 2]")),
            Err(AppError::MalformedUpload(_))
        ));
    }
}
