use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hall {
    pub id: i64,
    pub name: String,
    pub seats_total: i32,
}
