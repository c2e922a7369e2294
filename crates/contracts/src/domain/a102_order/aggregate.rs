use serde::{Deserialize, Serialize};

use crate::shared::Identifiable;

/// Shop order (equipment, courses, gift cards)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub total_amount: f64,
    pub currency: String,
    /// "pending", "paid", "shipped", "refunded", "cancelled"
    pub status: String,
    pub created_at: String,
}

impl Identifiable for Order {
    fn id(&self) -> &str {
        &self.id
    }
}
