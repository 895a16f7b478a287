use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::models::Session;
use crate::services::{access, booking};
use crate::store::SessionNotFound;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sessions/{id}", get(list_sessions).delete(delete_session))
        .route("/sessions/{id}/edit", put(edit_session))
        .route("/sessions/{id}/booking", delete(remove_booking))
}

// GET /sessions/{movie_id} - сеансы выбранного фильма
async fn list_sessions(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<i64>,
) -> Json<Vec<Session>> {
    Json(state.sessions.list_by_movie(movie_id))
}

// PUT /sessions/{session_id}/edit?time=...&username=...
#[derive(Debug, Deserialize)]
struct EditSessionQuery {
    time: String,
    username: String,
}

async fn edit_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<i64>,
    Query(params): Query<EditSessionQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    access::require_admin(&state.identity, &params.username)
        .map_err(|e| (e.status(), e.to_string()))?;

    state
        .sessions
        .set_time(session_id, &params.time)
        .map_err(|e| (e.status(), e.to_string()))?;

    tracing::info!("Сеанс {} обновлён, новое время {}", session_id, params.time);
    Ok(Json(json!({
        "message": format!("Сеанс {} обновлён, новое время {}", session_id, params.time)
    })))
}

// DELETE /sessions/{session_id}?username=...
#[derive(Debug, Deserialize)]
struct DeleteSessionQuery {
    username: String,
}

async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<i64>,
    Query(params): Query<DeleteSessionQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    access::require_admin(&state.identity, &params.username)
        .map_err(|e| (e.status(), e.to_string()))?;

    // Контракт обещает успешный ответ и для несуществующего id: удаление
    // отсутствующего сеанса считается выполненным
    match state.sessions.delete(session_id) {
        Ok(()) => tracing::info!("Сеанс {} удалён", session_id),
        Err(SessionNotFound) => debug!("Сеанс {} отсутствует, удалять нечего", session_id),
    }

    Ok(Json(json!({
        "message": format!("Сеанс {} удалён", session_id)
    })))
}

// DELETE /sessions/{session_id}/booking?seat_number=...&username=...&admin_username=...
#[derive(Debug, Deserialize)]
struct RemoveBookingQuery {
    seat_number: i32,
    username: String,
    admin_username: String,
}

async fn remove_booking(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<i64>,
    Query(params): Query<RemoveBookingQuery>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    access::require_admin(&state.identity, &params.admin_username)
        .map_err(|e| (e.status(), e.to_string()))?;

    booking::admin_remove(&state, session_id, params.seat_number, &params.username)
        .map_err(|e| (e.status(), e.to_string()))?;

    Ok(Json(json!({
        "message": format!(
            "Бронь места {} пользователя {} удалена",
            params.seat_number, params.username
        )
    })))
}
