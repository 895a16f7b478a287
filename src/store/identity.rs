use std::collections::HashMap;
use std::sync::RwLock;

use axum::http::StatusCode;
use thiserror::Error;
use tracing::info;

use crate::config::SeedConfig;
use crate::models::{AuthenticatedUser, User};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Пользователь уже существует")]
    AlreadyExists,
    #[error("Неверные имя пользователя или пароль")]
    InvalidCredentials,
}

impl IdentityError {
    pub fn status(&self) -> StatusCode {
        match self {
            IdentityError::AlreadyExists => StatusCode::BAD_REQUEST,
            IdentityError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        }
    }
}

// Реестр пользователей, ключ - username (точное совпадение, с учетом
// регистра). Пользователи не обновляются и не удаляются.
#[derive(Debug, Default)]
pub struct IdentityStore {
    users: RwLock<HashMap<String, User>>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Стартовый администратор из конфигурации
    pub fn with_admin(seed: &SeedConfig) -> Self {
        let admin = User {
            username: seed.admin_username.clone(),
            password: seed.admin_password.clone(),
            is_admin: true,
        };
        let mut users = HashMap::new();
        users.insert(admin.username.clone(), admin);
        Self {
            users: RwLock::new(users),
        }
    }

    pub fn register(&self, user: User) -> Result<(), IdentityError> {
        let mut users = self.users.write().unwrap();
        if users.contains_key(&user.username) {
            return Err(IdentityError::AlreadyExists);
        }
        info!("Зарегистрирован пользователь {}", user.username);
        users.insert(user.username.clone(), user);
        Ok(())
    }

    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, IdentityError> {
        let users = self.users.read().unwrap();
        match users.get(username) {
            Some(user) if user.verify_password(password) => Ok(AuthenticatedUser {
                username: user.username.clone(),
                is_admin: user.is_admin,
            }),
            _ => Err(IdentityError::InvalidCredentials),
        }
    }

    // false и для незарегистрированных пользователей
    pub fn is_admin(&self, username: &str) -> bool {
        self.users
            .read()
            .unwrap()
            .get(username)
            .map(|user| user.is_admin)
            .unwrap_or(false)
    }
}
