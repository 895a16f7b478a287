pub mod auth;
pub mod movies;
pub mod sessions;
pub mod bookings;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(auth::routes())
        .merge(movies::routes())
        .merge(sessions::routes())
        .merge(bookings::routes())
}
