//! `/api/search` handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::context::Context;
use crate::error::AppError;
use crate::services::{SearchResults, SearchService, DEFAULT_SEARCH_LIMIT};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    query: Option<String>,
    limit: Option<usize>,
}

pub async fn search(
    State(ctx): State<Context>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<SearchResults>, AppError> {
    let Query(params) = query?;
    let keyword = params
        .query
        .ok_or_else(|| AppError::validation("query", "field required"))?;

    let results = ctx
        .resolve::<SearchService>()
        .search(&keyword, params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT))
        .await?;
    Ok(Json(results))
}
