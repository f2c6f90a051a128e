//! `/api/quests` handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::AppError;
use crate::models::{NewQuest, Quest};
use crate::repositories::{ListQuestsParams, QuestRepository};
use crate::store::DEFAULT_LIMIT;

use super::{non_empty, parse_filter};

#[derive(Debug, Deserialize)]
pub struct ListQuestsQuery {
    realm: Option<String>,
    quest_type: Option<String>,
    limit: Option<usize>,
}

pub async fn create(
    State(ctx): State<Context>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Quest>, AppError> {
    let Json(body) = body?;
    let input = NewQuest::from_json(&body)?;
    let quest = ctx.resolve::<QuestRepository>().create(input).await?;
    Ok(Json(quest))
}

pub async fn list(
    State(ctx): State<Context>,
    query: Result<Query<ListQuestsQuery>, QueryRejection>,
) -> Result<Json<Vec<Quest>>, AppError> {
    let Query(query) = query?;
    let params = ListQuestsParams {
        realm: parse_filter("realm", query.realm)?,
        quest_type: non_empty(query.quest_type),
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
    };
    let quests = ctx.resolve::<QuestRepository>().list(params).await?;
    Ok(Json(quests))
}
