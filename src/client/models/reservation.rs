//! Reservation models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Room;
use crate::error::{ApiError, Result};

/// Reservation of a room for a date range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Reservation ID
    pub id: i64,

    /// Reserved room
    pub room_id: i64,

    /// Guest full name
    pub guest_name: String,

    /// Guest contact email
    pub guest_email: String,

    /// First night
    pub start_date: NaiveDate,

    /// Checkout day (exclusive)
    pub end_date: NaiveDate,

    /// Creation time as formatted by the server
    pub created_at: String,

    /// Embedded room, present on some listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
}

impl Reservation {
    /// Number of nights covered
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Request body for creating a reservation
#[derive(Debug, Clone, Serialize)]
pub struct NewReservation {
    pub room_id: i64,
    pub guest_name: String,
    pub guest_email: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewReservation {
    /// Reject empty date ranges before they reach the server
    pub fn validate(&self) -> Result<()> {
        if self.start_date >= self.end_date {
            return Err(
                ApiError::BadRequest("End date must be after start date".to_string()).into(),
            );
        }
        if self.guest_name.trim().is_empty() {
            return Err(ApiError::BadRequest("Guest name is required".to_string()).into());
        }
        Ok(())
    }
}
