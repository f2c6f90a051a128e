//! `/api/documents` handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::AppError;
use crate::models::{Document, DocumentPatch, NewDocument};
use crate::repositories::{DocumentRepository, ListDocumentsParams};
use crate::store::DEFAULT_LIMIT;

use super::parse_filter;

#[derive(Debug, Deserialize)]
pub struct ListDocumentsQuery {
    document_type: Option<String>,
    limit: Option<usize>,
}

pub async fn create(
    State(ctx): State<Context>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Document>, AppError> {
    let Json(body) = body?;
    let input = NewDocument::from_json(&body)?;
    let document = ctx.resolve::<DocumentRepository>().create(input).await?;
    Ok(Json(document))
}

pub async fn list(
    State(ctx): State<Context>,
    query: Result<Query<ListDocumentsQuery>, QueryRejection>,
) -> Result<Json<Vec<Document>>, AppError> {
    let Query(query) = query?;
    let params = ListDocumentsParams {
        document_type: parse_filter("document_type", query.document_type)?,
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
    };
    let documents = ctx.resolve::<DocumentRepository>().list(params).await?;
    Ok(Json(documents))
}

pub async fn get(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> Result<Json<Document>, AppError> {
    let document = ctx.resolve::<DocumentRepository>().get(&id).await?;
    Ok(Json(document))
}

pub async fn update(
    State(ctx): State<Context>,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Document>, AppError> {
    let Json(body) = body?;
    let patch = DocumentPatch::from_json(&body)?;
    let document = ctx.resolve::<DocumentRepository>().update(&id, patch).await?;
    Ok(Json(document))
}
