//! Reservation API data models
//!
//! Mirrors of the backend schemas, organized by resource type.

mod auth;
mod reservation;
mod room;
mod user;

pub use auth::{AccessToken, Credentials};
pub use reservation::{NewReservation, Reservation};
pub use room::{NewRoom, Room};
pub use user::UserProfile;
