use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::Identifiable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Draft,
    Open,
    Full,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Draft => "Draft",
            TripStatus::Open => "Open",
            TripStatus::Full => "Full",
            TripStatus::Completed => "Completed",
            TripStatus::Cancelled => "Cancelled",
        }
    }
}

/// Dive trip offered for booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub capacity: u32,
    pub booked_seats: u32,
    pub status: TripStatus,
}

impl Trip {
    pub fn free_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.booked_seats)
    }
}

impl Identifiable for Trip {
    fn id(&self) -> &str {
        &self.id
    }
}
