use serde::{Deserialize, Serialize};

use crate::shared::Identifiable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// "admin", "instructor" or "customer"
    pub role: String,
    pub is_active: bool,
    pub created_at: String,
}

impl Identifiable for User {
    fn id(&self) -> &str {
        &self.id
    }
}
