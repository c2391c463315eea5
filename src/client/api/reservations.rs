//! Reservation API trait

use async_trait::async_trait;

use crate::client::models::{NewReservation, Reservation};
use crate::error::Result;

/// Reservation operations
#[async_trait]
pub trait ReservationsApi: Send + Sync {
    /// Reservations booked on one room
    async fn room_reservations(&self, room_id: i64) -> Result<Vec<Reservation>>;

    /// Reservations on rooms owned by the token's user
    async fn my_reservations(&self, token: &str) -> Result<Vec<Reservation>>;

    /// Book a room; guests do not need an account
    async fn create_reservation(&self, reservation: &NewReservation) -> Result<Reservation>;
}
