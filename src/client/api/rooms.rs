//! Room API trait

use async_trait::async_trait;

use crate::client::models::{NewRoom, Room};
use crate::error::Result;

/// Room catalogue operations
#[async_trait]
pub trait RoomsApi: Send + Sync {
    /// List every room
    async fn list_rooms(&self) -> Result<Vec<Room>>;

    /// List rooms owned by the token's user
    async fn my_rooms(&self, token: &str) -> Result<Vec<Room>>;

    /// Get a single room
    async fn get_room(&self, room_id: i64) -> Result<Room>;

    /// List a new room owned by the token's user
    async fn create_room(&self, token: &str, room: &NewRoom) -> Result<Room>;

    /// Delete a room owned by the token's user
    async fn delete_room(&self, token: &str, room_id: i64) -> Result<()>;
}
