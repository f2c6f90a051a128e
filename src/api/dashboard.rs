//! `/api/dashboard` handlers.

use axum::extract::State;
use axum::Json;

use crate::context::Context;
use crate::error::AppError;
use crate::services::{DashboardService, DashboardStats};

pub async fn stats(State(ctx): State<Context>) -> Result<Json<DashboardStats>, AppError> {
    let stats = ctx.resolve::<DashboardService>().stats().await?;
    Ok(Json(stats))
}
