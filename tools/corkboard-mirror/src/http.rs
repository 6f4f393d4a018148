//! HTTP surface: routes, wire types, handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

use corkboard_common::message::Message;
use corkboard_common::profile::Profile;

use crate::board::SimulatedBoard;
use crate::profiles::ProfileStore;

pub struct AppState {
    pub board: SimulatedBoard,
    pub profiles: ProfileStore,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            board: SimulatedBoard::new(),
            profiles: ProfileStore::default(),
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostMessageRequest {
    sender: String,
    content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LikeRequest {
    sender: String,
    message_id: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TxResponse {
    tx_hash: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type Rejection = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> Rejection {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

/// Build the full router. CORS is permissive; browser clients call the
/// mirror from arbitrary origins.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/health", get(health))
        .route("/api/messages", get(get_messages).post(post_message))
        .route("/api/messages/like", post(like_message))
        .route("/api/profiles", post(save_profile))
        .route("/api/profiles/{address}", get(get_profile))
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn get_messages(State(state): State<Arc<AppState>>) -> Json<Vec<Message>> {
    let messages = state.board.messages().await;
    tracing::info!(count = messages.len(), "feed served");
    Json(messages)
}

async fn post_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PostMessageRequest>,
) -> (StatusCode, Json<TxResponse>) {
    tracing::info!(sender = %req.sender, "message accepted");
    let tx_hash = state.board.post(&req.sender, &req.content).await;
    (StatusCode::CREATED, Json(TxResponse { tx_hash }))
}

async fn like_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LikeRequest>,
) -> Result<Json<TxResponse>, Rejection> {
    match state.board.like(&req.sender, req.message_id).await {
        Ok(tx_hash) => {
            tracing::info!(sender = %req.sender, id = req.message_id, "like accepted");
            Ok(Json(TxResponse { tx_hash }))
        }
        Err(rejection) => {
            tracing::warn!(sender = %req.sender, id = req.message_id, %rejection, "like rejected");
            Err(bad_request(rejection.to_string()))
        }
    }
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(address): Path<String>,
) -> Result<Json<Profile>, Rejection> {
    match state.profiles.get(&address).await {
        Some(profile) => Ok(Json(profile)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "profile not found".into(),
            }),
        )),
    }
}

async fn save_profile(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<Profile>,
) -> Result<Json<Profile>, Rejection> {
    if profile.address.is_empty() {
        return Err(bad_request("address is required"));
    }
    let stored = state.profiles.upsert(profile).await;
    tracing::info!(address = %stored.address, "profile saved");
    Ok(Json(stored))
}
