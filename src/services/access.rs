use axum::http::StatusCode;
use thiserror::Error;

use crate::store::IdentityStore;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    #[error("Доступ запрещён")]
    Forbidden,
}

impl AccessError {
    pub fn status(&self) -> StatusCode {
        match self {
            AccessError::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

// Предусловие для административных операций: редактирование времени сеанса,
// удаление сеанса, принудительное снятие чужой брони.
pub fn require_admin(identity: &IdentityStore, username: &str) -> Result<(), AccessError> {
    if identity.is_admin(username) {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}
