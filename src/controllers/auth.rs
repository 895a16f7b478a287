use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::models::User;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

// POST /register
async fn register(
    State(state): State<Arc<AppState>>,
    Json(user): Json<User>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let username = user.username.clone();
    state
        .identity
        .register(user)
        .map_err(|e| (e.status(), e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(json!({"message": format!("Пользователь {} зарегистрирован", username)})),
    ))
}

// POST /login
#[derive(Debug, Deserialize)]
struct LoginRequest {
    username: String,
    password: String,
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let user = state
        .identity
        .authenticate(&req.username, &req.password)
        .map_err(|e| (e.status(), e.to_string()))?;

    Ok((StatusCode::OK, Json(user)))
}
