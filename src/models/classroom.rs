use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Classroom {
    pub id: i32,
    pub name: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Classroom {
    pub fn new(name: String, is_active: bool) -> Self {
        Self {
            id: 0, // Will be set by database
            name,
            is_active,
        }
    }

    /// True until the gateway has assigned an identifier
    pub fn is_new(&self) -> bool {
        self.id == 0
    }
}
