use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::Identifiable;

/// A customer's reservation on a course session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub course_title: String,
    pub customer_name: String,
    pub scheduled_date: NaiveDate,
    pub participants: u32,
    /// "requested", "confirmed", "cancelled"
    pub status: String,
    pub created_at: String,
}

impl Identifiable for Booking {
    fn id(&self) -> &str {
        &self.id
    }
}
