//! Room reservation API client

pub mod api;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod reservation_client;

pub use api::{AuthApi, ReservationsApi, RoomsApi};
#[cfg(test)]
pub use mock::MockReservationClient;
pub use reservation_client::ReservationClient;

/// Complete reservation API surface.
///
/// Blanket-implemented for anything providing the three sub-traits, so views
/// can take a single bound.
pub trait ReservationApi: AuthApi + RoomsApi + ReservationsApi {}

impl<T: AuthApi + RoomsApi + ReservationsApi> ReservationApi for T {}
