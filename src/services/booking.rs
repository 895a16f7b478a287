use axum::http::StatusCode;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::BookingRecord;
use crate::store::SessionNotFound;
use crate::AppState;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    #[error("Сеанс не найден")]
    SessionNotFound,
    #[error("Зал не найден")]
    HallNotFound,
    #[error("Неверный номер места")]
    InvalidSeat,
    #[error("Место уже забронировано")]
    SeatTaken,
    #[error("Бронь не найдена")]
    BookingNotFound,
}

impl BookingError {
    pub fn status(&self) -> StatusCode {
        match self {
            BookingError::SessionNotFound | BookingError::HallNotFound => StatusCode::NOT_FOUND,
            BookingError::InvalidSeat | BookingError::SeatTaken | BookingError::BookingNotFound => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl From<SessionNotFound> for BookingError {
    fn from(_: SessionNotFound) -> Self {
        BookingError::SessionNotFound
    }
}

/// Забронировать место за пользователем.
///
/// Имя пользователя не сверяется с реестром пользователей: бронь может
/// держать и незарегистрированное имя.
pub fn book(
    state: &AppState,
    session_id: i64,
    seat_number: i32,
    username: &str,
) -> Result<(), BookingError> {
    // hall_id сеанса не меняется за время его жизни, поэтому зал можно
    // разрешить до захвата блокировки на запись
    let hall_id = state
        .sessions
        .get_session(session_id)
        .ok_or(BookingError::SessionNotFound)?
        .hall_id;
    let seats_total = state
        .catalog
        .get_hall(hall_id)
        .ok_or(BookingError::HallNotFound)?
        .seats_total;

    state.sessions.with_session(session_id, |session| {
        if seat_number < 1 || seat_number > seats_total {
            debug!(
                "Отказ в брони: место {} вне диапазона 1..{}",
                seat_number, seats_total
            );
            return Err(BookingError::InvalidSeat);
        }
        // Место занято, кем бы оно ни было забронировано
        if session.seat_taken(seat_number) {
            debug!("Отказ в брони: место {} уже занято", seat_number);
            return Err(BookingError::SeatTaken);
        }
        session.seats_booked.push(BookingRecord {
            seat_number,
            username: username.to_string(),
        });
        info!(
            "Место {} сеанса {} забронировано пользователем {}",
            seat_number, session_id, username
        );
        Ok(())
    })?
}

/// Снять собственную бронь: требуется точное совпадение пары
/// (место, пользователь).
pub fn cancel(
    state: &AppState,
    session_id: i64,
    seat_number: i32,
    username: &str,
) -> Result<(), BookingError> {
    remove_record(state, session_id, seat_number, username)?;
    info!(
        "Бронь места {} сеанса {} отменена пользователем {}",
        seat_number, session_id, username
    );
    Ok(())
}

/// Принудительно снять чужую бронь. Семантика поиска и удаления та же,
/// что у `cancel`; права вызывающего проверяет вызывающая сторона.
pub fn admin_remove(
    state: &AppState,
    session_id: i64,
    seat_number: i32,
    username: &str,
) -> Result<(), BookingError> {
    remove_record(state, session_id, seat_number, username)?;
    warn!(
        "Бронь места {} пользователя {} в сеансе {} удалена администратором",
        seat_number, username, session_id
    );
    Ok(())
}

fn remove_record(
    state: &AppState,
    session_id: i64,
    seat_number: i32,
    username: &str,
) -> Result<(), BookingError> {
    state.sessions.with_session(session_id, |session| {
        match session.find_booking(seat_number, username) {
            Some(index) => {
                session.seats_booked.remove(index);
                Ok(())
            }
            None => Err(BookingError::BookingNotFound),
        }
    })?
}
