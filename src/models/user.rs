use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    // Проверить пароль (пароли хранятся открытым текстом, хеширование
    // вне рамок системы)
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }
}

// Ответ на успешный /login - пароль наружу не отдаем
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
    pub is_admin: bool,
}
