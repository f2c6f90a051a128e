//! HTTP API.
//!
//! JSON endpoints live under `/api`; uploaded files are served statically
//! under `/uploads`. Every handler resolves its repository or service from
//! the shared [`Context`].

mod assets;
mod characters;
mod dashboard;
mod documents;
mod music;
mod quests;
mod search;
mod weapons;

use std::str::FromStr;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value as JsonValue};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::assets::UPLOADS_MOUNT;
use crate::config::{CorsOrigins, ServerConfig};
use crate::context::Context;
use crate::error::AppError;

/// Body of `GET /api/`.
pub const ROOT_MESSAGE: &str = "MythRealms GDD & Content Management Platform API";

/// Builds the application router.
pub fn router(ctx: Context) -> Router {
    let uploads = ServeDir::new(ctx.assets.root());
    let cors = cors_layer(&ctx.config.server);

    let api = Router::new()
        .route("/", get(root))
        .route("/documents", get(documents::list).post(documents::create))
        .route("/documents/{id}", get(documents::get).put(documents::update))
        .route("/characters", get(characters::list).post(characters::create))
        .route("/characters/{id}", get(characters::get))
        .route("/weapons", get(weapons::list).post(weapons::create))
        .route("/quests", get(quests::list).post(quests::create))
        .route("/music", get(music::list).post(music::create))
        .route("/assets", get(assets::list).post(assets::upload).layer(assets::body_limit()))
        .route("/dashboard/stats", get(dashboard::stats))
        .route("/search", get(search::search));

    Router::new()
        .route("/api/", get(root))
        .nest("/api", api)
        .nest_service(&format!("/{}", UPLOADS_MOUNT), uploads)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(ctx)
}

async fn root() -> Json<JsonValue> {
    Json(json!({ "message": ROOT_MESSAGE }))
}

/// Builds the CORS policy. Credentials are only allowed for an explicit
/// origin list.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    match server.allowed_origins() {
        CorsOrigins::Any => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsOrigins::List(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            tracing::info!("CORS configured for origins: {:?}", origins);

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(AllowMethods::mirror_request())
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}

/// Drops empty query values, which mean "no filter".
fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

/// Parses an optional closed-enum query filter, naming the parameter on failure.
fn parse_filter<T>(param: &str, raw: Option<String>) -> Result<Option<T>, AppError>
where
    T: FromStr<Err = String>,
{
    non_empty(raw)
        .map(|s| s.parse().map_err(|e| AppError::validation(param, e)))
        .transpose()
}
