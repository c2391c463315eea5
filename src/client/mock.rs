//! Mock reservation API client for testing
//!
//! Provides a mock implementation of the API traits for unit testing
//! without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

use super::api::{AuthApi, ReservationsApi, RoomsApi};
use super::models::{
    AccessToken, Credentials, NewReservation, NewRoom, Reservation, Room, UserProfile,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockReservationClient::new()
///     .with_user(profile())
///     .await;
///
/// let user = mock.current_user("mock-token").await?;
/// ```
#[derive(Default)]
pub struct MockReservationClient {
    /// Token returned from login
    access_token: Arc<Mutex<Option<String>>>,
    /// Profile returned from current_user; `None` answers 401
    user: Arc<Mutex<Option<UserProfile>>>,
    /// Rooms returned from the room listings
    rooms: Arc<Mutex<Vec<Room>>>,
    /// Reservations returned from the reservation listings
    reservations: Arc<Mutex<Vec<Reservation>>>,
    /// One-shot errors per operation
    login_error: Arc<Mutex<Option<ApiError>>>,
    register_error: Arc<Mutex<Option<ApiError>>>,
    current_user_error: Arc<Mutex<Option<ApiError>>>,
    /// When set, current_user blocks until notified
    current_user_gate: Arc<Mutex<Option<Arc<Notify>>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Bearer tokens presented to protected calls, in order
    tokens_seen: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub current_user: usize,
    pub list_rooms: usize,
    pub my_rooms: usize,
    pub get_room: usize,
    pub create_room: usize,
    pub delete_room: usize,
    pub room_reservations: usize,
    pub my_reservations: usize,
    pub create_reservation: usize,
}

impl MockReservationClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token returned from login.
    pub async fn with_access_token(self, token: &str) -> Self {
        *self.access_token.lock().await = Some(token.to_string());
        self
    }

    /// Configure the profile returned from current_user.
    pub async fn with_user(self, user: UserProfile) -> Self {
        *self.user.lock().await = Some(user);
        self
    }

    /// Configure rooms to return from the room listings.
    pub async fn with_rooms(self, rooms: Vec<Room>) -> Self {
        *self.rooms.lock().await = rooms;
        self
    }

    /// Configure reservations to return from the reservation listings.
    pub async fn with_reservations(self, reservations: Vec<Reservation>) -> Self {
        *self.reservations.lock().await = reservations;
        self
    }

    /// Fail the next login with `error`.
    pub async fn with_login_error(self, error: ApiError) -> Self {
        *self.login_error.lock().await = Some(error);
        self
    }

    /// Fail the next register with `error`.
    pub async fn with_register_error(self, error: ApiError) -> Self {
        *self.register_error.lock().await = Some(error);
        self
    }

    /// Fail the next current_user with `error`.
    pub async fn with_current_user_error(self, error: ApiError) -> Self {
        *self.current_user_error.lock().await = Some(error);
        self
    }

    /// Hold every current_user call until `gate` is notified.
    pub async fn with_current_user_gate(self, gate: Arc<Notify>) -> Self {
        *self.current_user_gate.lock().await = Some(gate);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Bearer tokens presented so far.
    pub async fn tokens_seen(&self) -> Vec<String> {
        self.tokens_seen.lock().await.clone()
    }

    async fn take_error(slot: &Mutex<Option<ApiError>>) -> Result<()> {
        match slot.lock().await.take() {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    async fn record_token(&self, token: &str) {
        self.tokens_seen.lock().await.push(token.to_string());
    }
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockReservationClient {
    async fn login(&self, _credentials: &Credentials) -> Result<AccessToken> {
        self.call_count.lock().await.login += 1;
        Self::take_error(&self.login_error).await?;

        let token = self.access_token.lock().await.clone();
        Ok(AccessToken {
            access_token: token.unwrap_or_else(|| "mock-token".to_string()),
            token_type: Some("bearer".to_string()),
        })
    }

    async fn register(&self, _credentials: &Credentials) -> Result<()> {
        self.call_count.lock().await.register += 1;
        Self::take_error(&self.register_error).await
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile> {
        self.call_count.lock().await.current_user += 1;
        self.record_token(token).await;

        let gate = self.current_user_gate.lock().await.clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        Self::take_error(&self.current_user_error).await?;

        self.user.lock().await.clone().ok_or_else(|| {
            ApiError::Unauthorized("Could not validate credentials".to_string()).into()
        })
    }
}

// ============================================================================
// RoomsApi Implementation
// ============================================================================

#[async_trait]
impl RoomsApi for MockReservationClient {
    async fn list_rooms(&self) -> Result<Vec<Room>> {
        self.call_count.lock().await.list_rooms += 1;
        Ok(self.rooms.lock().await.clone())
    }

    async fn my_rooms(&self, token: &str) -> Result<Vec<Room>> {
        self.call_count.lock().await.my_rooms += 1;
        self.record_token(token).await;

        let owner = self.user.lock().await.as_ref().map(|u| u.id);
        Ok(self
            .rooms
            .lock()
            .await
            .iter()
            .filter(|room| Some(room.owner_id) == owner)
            .cloned()
            .collect())
    }

    async fn get_room(&self, room_id: i64) -> Result<Room> {
        self.call_count.lock().await.get_room += 1;
        self.rooms
            .lock()
            .await
            .iter()
            .find(|room| room.id == room_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Room not found".to_string()).into())
    }

    async fn create_room(&self, token: &str, room: &NewRoom) -> Result<Room> {
        self.call_count.lock().await.create_room += 1;
        self.record_token(token).await;

        let owner_id = self.user.lock().await.as_ref().map(|u| u.id).unwrap_or(1);
        let mut rooms = self.rooms.lock().await;
        let created = Room {
            id: rooms.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            name: room.name.clone(),
            owner_id,
            created_at: "2024-01-01T00:00:00".to_string(),
        };
        rooms.push(created.clone());
        Ok(created)
    }

    async fn delete_room(&self, token: &str, room_id: i64) -> Result<()> {
        self.call_count.lock().await.delete_room += 1;
        self.record_token(token).await;

        let mut rooms = self.rooms.lock().await;
        let before = rooms.len();
        rooms.retain(|room| room.id != room_id);
        if rooms.len() == before {
            return Err(ApiError::NotFound("Room not found or unauthorized".to_string()).into());
        }
        Ok(())
    }
}

// ============================================================================
// ReservationsApi Implementation
// ============================================================================

#[async_trait]
impl ReservationsApi for MockReservationClient {
    async fn room_reservations(&self, room_id: i64) -> Result<Vec<Reservation>> {
        self.call_count.lock().await.room_reservations += 1;
        Ok(self
            .reservations
            .lock()
            .await
            .iter()
            .filter(|r| r.room_id == room_id)
            .cloned()
            .collect())
    }

    async fn my_reservations(&self, token: &str) -> Result<Vec<Reservation>> {
        self.call_count.lock().await.my_reservations += 1;
        self.record_token(token).await;
        Ok(self.reservations.lock().await.clone())
    }

    async fn create_reservation(&self, reservation: &NewReservation) -> Result<Reservation> {
        self.call_count.lock().await.create_reservation += 1;
        reservation.validate()?;

        let mut reservations = self.reservations.lock().await;
        let created = Reservation {
            id: reservations.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            room_id: reservation.room_id,
            guest_name: reservation.guest_name.clone(),
            guest_email: reservation.guest_email.clone(),
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            created_at: "2024-01-01T00:00:00".to_string(),
            room: None,
        };
        reservations.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            email: "owner@example.com".to_string(),
            created_at: "2024-01-01T00:00:00".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_login_default_token() {
        let mock = MockReservationClient::new();
        let token = mock
            .login(&Credentials::new("a@example.com", "pw"))
            .await
            .unwrap();
        assert_eq!(token.access_token, "mock-token");
        assert_eq!(mock.call_counts().await.login, 1);
    }

    #[tokio::test]
    async fn test_mock_current_user_without_profile_is_unauthorized() {
        let mock = MockReservationClient::new();
        let err = mock.current_user("t").await.unwrap_err();
        assert!(err.to_string().contains("Could not validate credentials"));
        assert_eq!(mock.tokens_seen().await, vec!["t".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_errors_are_one_shot() {
        let mock = MockReservationClient::new()
            .with_user(profile())
            .await
            .with_current_user_error(ApiError::Network("down".to_string()))
            .await;

        assert!(mock.current_user("t").await.is_err());
        assert!(mock.current_user("t").await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_my_rooms_filters_by_owner() {
        let room = |id, owner_id| Room {
            id,
            name: format!("Room {}", id),
            owner_id,
            created_at: "2024-01-01T00:00:00".to_string(),
        };
        let mock = MockReservationClient::new()
            .with_user(profile())
            .await
            .with_rooms(vec![room(1, 1), room(2, 2), room(3, 1)])
            .await;

        let mine = mock.my_rooms("t").await.unwrap();
        assert_eq!(mine.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(mock.list_rooms().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_mock_delete_missing_room() {
        let mock = MockReservationClient::new();
        assert!(mock.delete_room("t", 42).await.is_err());
    }
}
