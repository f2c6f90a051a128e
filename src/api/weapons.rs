//! `/api/weapons` handlers.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::AppError;
use crate::models::{NewWeapon, Weapon};
use crate::repositories::{ListWeaponsParams, WeaponRepository};
use crate::store::DEFAULT_LIMIT;

use super::parse_filter;

#[derive(Debug, Deserialize)]
pub struct ListWeaponsQuery {
    weapon_type: Option<String>,
    limit: Option<usize>,
}

pub async fn create(
    State(ctx): State<Context>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Weapon>, AppError> {
    let Json(body) = body?;
    let input = NewWeapon::from_json(&body)?;
    let weapon = ctx.resolve::<WeaponRepository>().create(input).await?;
    Ok(Json(weapon))
}

pub async fn list(
    State(ctx): State<Context>,
    query: Result<Query<ListWeaponsQuery>, QueryRejection>,
) -> Result<Json<Vec<Weapon>>, AppError> {
    let Query(query) = query?;
    let params = ListWeaponsParams {
        weapon_type: parse_filter("weapon_type", query.weapon_type)?,
        limit: query.limit.unwrap_or(DEFAULT_LIMIT),
    };
    let weapons = ctx.resolve::<WeaponRepository>().list(params).await?;
    Ok(Json(weapons))
}
