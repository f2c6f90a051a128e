//! End-to-end tests of the HTTP API over the in-memory store.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use mythrealms::api::{router, ROOT_MESSAGE};
use mythrealms::config::Config;
use mythrealms::context::Context;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

struct TestApp {
    router: Router,
    uploads: TempDir,
}

fn app() -> TestApp {
    let uploads = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.server.upload_dir = uploads.path().to_path_buf();
    TestApp {
        router: router(Context::in_memory(config)),
        uploads,
    }
}

impl TestApp {
    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    async fn send_json(&self, method: Method, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let (status, body) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json(Method::POST, uri, body).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send_json(Method::PUT, uri, body).await
    }
}

const BOUNDARY: &str = "mythrealms-test-boundary";

/// Builds a multipart body from text parts and an optional file part.
fn multipart(texts: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in texts {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, content_type, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::post("/api/assets")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_root_message() {
    let app = app();
    for uri in ["/api/", "/api"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], ROOT_MESSAGE);
    }
}

#[tokio::test]
async fn test_document_lifecycle() {
    let app = app();

    let (status, created) = app
        .post(
            "/api/documents",
            json!({"title": "Ancient Forest", "document_type": "gdd", "tags": ["forest"]}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["version"], 1);
    assert_eq!(created["content"], json!({}));
    let id = created["id"].as_str().unwrap().to_string();

    let (status, fetched) = app.get(&format!("/api/documents/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = app
        .put(
            &format!("/api/documents/{id}"),
            json!({"title": "Elder Forest", "version": 40}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Elder Forest");
    assert_eq!(updated["version"], 2);
    assert_eq!(updated["created_at"], created["created_at"]);
    assert_eq!(updated["tags"], json!(["forest"]));

    let (status, listed) = app.get("/api/documents?document_type=gdd").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([updated]));

    let (_, others) = app.get("/api/documents?document_type=dialogue").await;
    assert_eq!(others, json!([]));
}

#[tokio::test]
async fn test_document_errors() {
    let app = app();

    let (status, body) = app.get("/api/documents/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");

    let (status, _) = app.put("/api/documents/missing", json!({"title": "x"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app
        .post("/api/documents", json!({"document_type": "gdd"}))
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "title");

    let (status, body) = app.get("/api/documents?document_type=spreadsheet").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "document_type");

    let (status, _) = app.get("/api/documents?limit=-1").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_limit() {
    let app = app();
    for i in 0..3 {
        app.post(
            "/api/weapons",
            json!({"name": format!("Blade {i}"), "weapon_type": "sword", "lore": "Forged"}),
        )
        .await;
    }

    let (_, two) = app.get("/api/weapons?limit=2").await;
    assert_eq!(two.as_array().unwrap().len(), 2);
    assert_eq!(two[0]["name"], "Blade 0");

    let (_, none) = app.get("/api/weapons?limit=0").await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_character_filters() {
    let app = app();
    let (status, hero) = app
        .post(
            "/api/characters",
            json!({
                "name": "Lyra",
                "description": "Archer of the canopy",
                "character_type": "hero",
                "realm": "forest",
                "emotions": {"joy": "smile.png"}
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    app.post(
        "/api/characters",
        json!({"name": "Vex", "description": "Star thief", "character_type": "villain", "realm": "galaxy"}),
    )
    .await;

    let (_, forest) = app.get("/api/characters?realm=forest").await;
    assert_eq!(forest, json!([hero.clone()]));

    let (_, heroes) = app.get("/api/characters?character_type=hero&realm=").await;
    assert_eq!(heroes, json!([hero.clone()]));

    let id = hero["id"].as_str().unwrap();
    let (status, fetched) = app.get(&format!("/api/characters/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["emotions"]["joy"], "smile.png");

    let (status, body) = app
        .post(
            "/api/characters",
            json!({"name": "X", "description": "", "character_type": "npc", "realm": "forest", "emotions": {"bored": "x.png"}}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_quest_and_music() {
    let app = app();

    let (status, body) = app
        .post(
            "/api/quests",
            json!({"title": "Lost Relic", "description": "Find it", "quest_type": "main", "realm": "underworld", "required_level": 0}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "required_level");

    let (status, quest) = app
        .post(
            "/api/quests",
            json!({"title": "Lost Relic", "description": "Find it", "quest_type": "main", "realm": "underworld"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quest["required_level"], 1);

    let (status, track) = app
        .post(
            "/api/music",
            json!({"name": "Night Drums", "realm": "underworld", "mood": "tense", "tempo": 90, "key": "D minor"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, quests) = app.get("/api/quests?realm=underworld&quest_type=main").await;
    assert_eq!(quests, json!([quest]));
    let (_, tracks) = app.get("/api/music?mood=tense").await;
    assert_eq!(tracks, json!([track]));
    let (_, calm) = app.get("/api/music?mood=calm").await;
    assert_eq!(calm, json!([]));
}

#[tokio::test]
async fn test_asset_upload_and_static_serving() {
    let app = app();

    let request = multipart(
        &[
            ("name", "Forest Theme"),
            ("category", "audio"),
            ("tags", r#"["forest","ambient"]"#),
        ],
        Some(("../theme.mp3", "audio/mpeg", b"ID3-bytes")),
    );
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    let asset: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(asset["file_type"], "audio/mpeg");
    assert_eq!(asset["tags"], json!(["forest", "ambient"]));

    let file_path = asset["file_path"].as_str().unwrap();
    assert!(file_path.starts_with("uploads/"));
    assert!(file_path.ends_with("_theme.mp3"));

    let request = Request::get(format!("/{file_path}")).body(Body::empty()).unwrap();
    let (status, bytes) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"ID3-bytes");

    let (_, audio) = app.get("/api/assets?category=audio").await;
    assert_eq!(audio, json!([asset]));
    let (_, images) = app.get("/api/assets?category=image").await;
    assert_eq!(images, json!([]));
}

#[tokio::test]
async fn test_asset_upload_rejections_write_nothing() {
    let app = app();

    let bad_tags = multipart(
        &[("name", "Map"), ("category", "image"), ("tags", "forest,map")],
        Some(("map.png", "image/png", b"png")),
    );
    let (status, _) = app.send(bad_tags).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let no_name = multipart(&[("category", "image")], Some(("map.png", "image/png", b"png")));
    let (status, _) = app.send(no_name).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let no_file = multipart(&[("name", "Map"), ("category", "image")], None);
    let (status, _) = app.send(no_file).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let not_multipart = Request::post("/api/assets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let (status, _) = app.send(not_multipart).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let written = std::fs::read_dir(app.uploads.path())
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(written, 0);

    let (_, stats) = app.get("/api/dashboard/stats").await;
    assert_eq!(stats["assets"], 0);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = app();
    app.post("/api/documents", json!({"title": "A", "document_type": "dialogue"}))
        .await;
    app.post("/api/documents", json!({"title": "B", "document_type": "dialogue"}))
        .await;
    app.post(
        "/api/music",
        json!({"name": "Theme", "realm": "galaxy", "mood": "epic", "tempo": 120, "key": "C major"}),
    )
    .await;

    let (status, stats) = app.get("/api/dashboard/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({
            "documents": 2,
            "characters": 0,
            "weapons": 0,
            "quests": 0,
            "music_tracks": 1,
            "assets": 0
        })
    );
}

#[tokio::test]
async fn test_search() {
    let app = app();
    app.post(
        "/api/documents",
        json!({"title": "Combat Rules", "document_type": "gdd", "tags": ["forest"]}),
    )
    .await;
    app.post(
        "/api/characters",
        json!({"name": "Forest Warden", "description": "Guards the grove", "character_type": "npc", "realm": "forest"}),
    )
    .await;
    app.post(
        "/api/weapons",
        json!({"name": "Staff", "weapon_type": "staff", "lore": "Cut from a FOREST oak"}),
    )
    .await;

    let (status, results) = app.get("/api/search?query=forest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(results["documents"].as_array().unwrap().len(), 1);
    assert_eq!(results["characters"].as_array().unwrap().len(), 1);
    assert_eq!(results["weapons"].as_array().unwrap().len(), 1);
    assert_eq!(results["quests"], json!([]));
    assert_eq!(results["music"], json!([]));

    let (status, body) = app.get("/api/search").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "query");

    let (_, limited) = app.get("/api/search?query=&limit=0").await;
    assert_eq!(limited["documents"], json!([]));
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = app();
    let request = Request::get("/api/")
        .header(header::ORIGIN, "https://studio.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_weapon_create_then_list_by_type() {
    let app = app();

    let (status, weapon) = app
        .post(
            "/api/weapons",
            json!({
                "name": "Test Sword",
                "weapon_type": "sword",
                "lore": "...",
                "damage_profile": {"physical": 75, "spirit": 25},
                "combo_path": ["light", "heavy", "ability"]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(!weapon["id"].as_str().unwrap().is_empty());
    assert!(weapon["created_at"].is_string());
    assert_eq!(weapon["name"], "Test Sword");
    assert_eq!(weapon["damage_profile"], json!({"physical": 75, "spirit": 25}));
    assert_eq!(weapon["combo_path"], json!(["light", "heavy", "ability"]));

    let (_, swords) = app.get("/api/weapons?weapon_type=sword").await;
    assert!(swords
        .as_array()
        .unwrap()
        .iter()
        .any(|w| w["id"] == weapon["id"]));

    let (_, bows) = app.get("/api/weapons?weapon_type=bow").await;
    assert_eq!(bows, json!([]));
}

#[tokio::test]
async fn test_repeated_list_returns_identical_results() {
    let app = app();
    for (name, realm) in [("Lyra", "forest"), ("Vex", "galaxy"), ("Oak", "forest")] {
        app.post(
            "/api/characters",
            json!({"name": name, "description": "", "character_type": "npc", "realm": realm}),
        )
        .await;
    }

    let (status, first) = app.get("/api/characters?realm=forest").await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = app.get("/api/characters?realm=forest").await;
    assert_eq!(first.as_array().unwrap().len(), 2);
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_music_accepts_integral_float_tempo() {
    let app = app();
    let (status, track) = app
        .post(
            "/api/music",
            json!({"name": "Night Drums", "realm": "underworld", "mood": "tense", "tempo": 90.0, "key": "D minor"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(track["tempo"], 90);
}
