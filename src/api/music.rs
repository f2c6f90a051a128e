//! `/api/music` handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::AppError;
use crate::models::{MusicTrack, NewMusicTrack};
use crate::repositories::{ListMusicParams, MusicRepository};
use crate::store::DEFAULT_LIMIT;

use super::{non_empty, parse_filter};

#[derive(Debug, Deserialize)]
pub struct ListMusicQuery {
    realm: Option<String>,
    mood: Option<String>,
    limit: Option<usize>,
}

pub async fn create(
    State(ctx): State<Context>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<MusicTrack>, AppError> {
    let Json(body) = body?;
    let input = NewMusicTrack::from_json(&body)?;
    let track = ctx.resolve::<MusicRepository>().create(input).await?;
    Ok(Json(track))
}

pub async fn list(
    State(ctx): State<Context>,
    query: Result<Query<ListMusicQuery>, QueryRejection>,
) -> Result<Json<Vec<MusicTrack>>, AppError> {
    let Query(query) = query?;
    let params = ListMusicParams {
        realm: parse_filter("realm", query.realm)?,
        mood: non_empty(query.mood),
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
    };
    let tracks = ctx.resolve::<MusicRepository>().list(params).await?;
    Ok(Json(tracks))
}
