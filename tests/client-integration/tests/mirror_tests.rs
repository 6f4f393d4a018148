//! HTTP-level tests: the real mirror router behind an ephemeral listener,
//! exercised through the client's HTTP types and raw reqwest.

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use corkboard_client::error::ErrorKind;
use corkboard_client::mirror::{HttpMirror, MirrorApi};
use corkboard_client::profile::ProfileClient;
use corkboard_common::profile::Profile;
use corkboard_mirror::http::{router, AppState};

/// Bind the given router on an ephemeral port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn serve_mirror() -> String {
    serve(router(AppState::new())).await
}

#[tokio::test]
async fn health_reports_version() {
    let base = serve_mirror().await;
    let body: Value = reqwest::get(format!("{base}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn feed_round_trip_through_the_client() {
    let base = serve_mirror().await;
    let mirror = HttpMirror::new(&base);
    assert!(mirror.messages().await.unwrap().is_empty());

    let http = reqwest::Client::new();
    let response = http
        .post(format!("{base}/api/messages"))
        .json(&json!({"sender": "0xabc", "content": "gm"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert!(body["txHash"].as_str().unwrap().starts_with("0x"));

    let feed = mirror.messages().await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].sender, "0xabc");
    assert_eq!(feed[0].content, "gm");
    assert_eq!(feed[0].likes, 0);
}

#[tokio::test]
async fn repeat_like_by_the_same_sender_is_rejected() {
    let base = serve_mirror().await;
    let http = reqwest::Client::new();
    http.post(format!("{base}/api/messages"))
        .json(&json!({"sender": "0xabc", "content": "gm"}))
        .send()
        .await
        .unwrap();

    let like = json!({"sender": "0xdef", "messageId": 0});
    let first = http
        .post(format!("{base}/api/messages/like"))
        .json(&like)
        .send()
        .await
        .unwrap();
    assert!(first.status().is_success());

    let second = http
        .post(format!("{base}/api/messages/like"))
        .json(&like)
        .send()
        .await
        .unwrap();
    assert_eq!(second.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = second.json().await.unwrap();
    assert_eq!(body["error"], "you already liked this message");
}

#[tokio::test]
async fn out_of_range_like_is_rejected() {
    let base = serve_mirror().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/messages/like"))
        .json(&json!({"sender": "0xdef", "messageId": 0}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "message does not exist");
}

#[tokio::test]
async fn profile_crud_round_trip() {
    let base = serve_mirror().await;
    let profiles = ProfileClient::new(&base);

    assert_eq!(profiles.fetch("0xabc").await.unwrap(), None);

    let saved = profiles
        .save(&Profile {
            address: "0xabc".into(),
            username: "nomad".into(),
            bio: "gm".into(),
            avatar_url: None,
            social_links: None,
            created_at: 0,
            updated_at: 0,
        })
        .await
        .unwrap();
    assert!(saved.created_at > 0, "mirror stamps creation time");
    assert_eq!(profiles.fetch("0xabc").await.unwrap(), Some(saved.clone()));

    let mut update = saved.clone();
    update.bio = "gn".into();
    let updated = profiles.save(&update).await.unwrap();
    assert_eq!(updated.created_at, saved.created_at);
    assert_eq!(updated.bio, "gn");
}

#[tokio::test]
async fn profile_without_address_is_rejected() {
    let base = serve_mirror().await;
    let response = reqwest::Client::new()
        .post(format!("{base}/api/profiles"))
        .json(&json!({
            "address": "",
            "username": "nomad",
            "bio": "",
            "createdAt": 0,
            "updatedAt": 0,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_payload_is_distinguished_from_unreachable() {
    let app = Router::new().route(
        "/api/messages",
        get(|| async { Json(json!({"not": "an array"})) }),
    );
    let base = serve(app).await;
    let err = HttpMirror::new(&base).messages().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn http_error_status_reads_as_unreachable() {
    let app = Router::new().route(
        "/api/messages",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = serve(app).await;
    let err = HttpMirror::new(&base).messages().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BackendUnreachable);
}

#[tokio::test]
async fn connection_refused_reads_as_unreachable() {
    let mirror = HttpMirror::new("http://127.0.0.1:1");
    let err = mirror.messages().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BackendUnreachable);
}
