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

use crate::services::booking;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/book", post(book_seat))
        .route("/cancel", post(cancel_booking))
}

// Тело запросов /book и /cancel
#[derive(Debug, Deserialize)]
struct BookingRequest {
    session_id: i64,
    seat_number: i32,
    username: String,
}

// POST /book
async fn book_seat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    booking::book(&state, req.session_id, req.seat_number, &req.username)
        .map_err(|e| (e.status(), e.to_string()))?;

    Ok(Json(json!({
        "message": format!(
            "Место {} забронировано пользователем {}",
            req.seat_number, req.username
        )
    })))
}

// POST /cancel
async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    booking::cancel(&state, req.session_id, req.seat_number, &req.username)
        .map_err(|e| (e.status(), e.to_string()))?;

    Ok(Json(json!({
        "message": format!(
            "Бронь места {} отменена пользователем {}",
            req.seat_number, req.username
        )
    })))
}
