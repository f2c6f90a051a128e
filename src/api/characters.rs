//! `/api/characters` handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::AppError;
use crate::models::{Character, NewCharacter};
use crate::repositories::{CharacterRepository, ListCharactersParams};
use crate::store::DEFAULT_LIMIT;

use super::{non_empty, parse_filter};

#[derive(Debug, Deserialize)]
pub struct ListCharactersQuery {
    realm: Option<String>,
    character_type: Option<String>,
    limit: Option<usize>,
}

pub async fn create(
    State(ctx): State<Context>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Character>, AppError> {
    let Json(body) = body?;
    let input = NewCharacter::from_json(&body)?;
    let character = ctx.resolve::<CharacterRepository>().create(input).await?;
    Ok(Json(character))
}

pub async fn list(
    State(ctx): State<Context>,
    query: Result<Query<ListCharactersQuery>, QueryRejection>,
) -> Result<Json<Vec<Character>>, AppError> {
    let Query(query) = query?;
    let params = ListCharactersParams {
        realm: parse_filter("realm", query.realm)?,
        character_type: non_empty(query.character_type),
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
    };
    let characters = ctx.resolve::<CharacterRepository>().list(params).await?;
    Ok(Json(characters))
}

pub async fn get(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> Result<Json<Character>, AppError> {
    let character = ctx.resolve::<CharacterRepository>().get(&id).await?;
    Ok(Json(character))
}
