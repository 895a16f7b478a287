use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::models::Movie;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/movies", get(list_movies))
}

// GET /movies - афиша в порядке добавления
async fn list_movies(State(state): State<Arc<AppState>>) -> Json<Vec<Movie>> {
    Json(state.catalog.list_movies().to_vec())
}
