use std::collections::BTreeMap;
use std::sync::RwLock;

use axum::http::StatusCode;
use thiserror::Error;

use crate::models::{BookingRecord, Session};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Сеанс не найден")]
pub struct SessionNotFound;

impl SessionNotFound {
    pub fn status(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

// Реестр сеансов, ключ - id сеанса. Идентификаторы растут монотонно,
// поэтому обход BTreeMap отдает сеансы в порядке добавления.
//
// Реестр - низкоуровневый мутатор: правила бронирования (границы зала,
// занятость места, владелец брони) проверяет сервис бронирования.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<BTreeMap<i64, Session>>,
}

impl SessionRegistry {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self {
            sessions: RwLock::new(sessions.into_iter().map(|s| (s.id, s)).collect()),
        }
    }

    pub fn seed() -> Self {
        Self::new(vec![
            Session::new(1, 1, 1, "18:00"),
            Session::new(2, 1, 1, "21:00"),
            Session::new(3, 2, 1, "19:00"),
        ])
    }

    pub fn get_session(&self, id: i64) -> Option<Session> {
        self.sessions.read().unwrap().get(&id).cloned()
    }

    pub fn list_by_movie(&self, movie_id: i64) -> Vec<Session> {
        self.sessions
            .read()
            .unwrap()
            .values()
            .filter(|session| session.movie_id == movie_id)
            .cloned()
            .collect()
    }

    // Держит блокировку записи на все время работы f: проверка и изменение
    // одного сеанса проходят как единое целое, параллельный запрос их не
    // расслоит.
    pub fn with_session<R>(
        &self,
        id: i64,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, SessionNotFound> {
        let mut sessions = self.sessions.write().unwrap();
        sessions.get_mut(&id).map(f).ok_or(SessionNotFound)
    }

    pub fn set_time(&self, id: i64, new_time: &str) -> Result<(), SessionNotFound> {
        self.with_session(id, |session| session.time = new_time.to_string())
    }

    // Удаляет сеанс вместе со всеми его бронями
    pub fn delete(&self, id: i64) -> Result<(), SessionNotFound> {
        self.sessions
            .write()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionNotFound)
    }

    pub fn add_booking(&self, id: i64, record: BookingRecord) -> Result<(), SessionNotFound> {
        self.with_session(id, |session| session.seats_booked.push(record))
    }

    pub fn remove_booking(&self, id: i64, record: &BookingRecord) -> Result<(), SessionNotFound> {
        self.with_session(id, |session| {
            session.seats_booked.retain(|booked| booked != record)
        })
    }
}
