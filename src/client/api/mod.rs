//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Session operations (login, register, current user)
//! - [`RoomsApi`] - Room catalogue
//! - [`ReservationsApi`] - Bookings
//!
//! The [`ReservationApi`](super::ReservationApi) super-trait combines all three.

mod auth;
mod reservations;
mod rooms;

pub use auth::AuthApi;
pub use reservations::ReservationsApi;
pub use rooms::RoomsApi;
