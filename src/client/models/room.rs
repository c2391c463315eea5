//! Room models

use serde::{Deserialize, Serialize};

/// Bookable room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room ID
    pub id: i64,

    /// Display name
    pub name: String,

    /// ID of the user who listed the room
    pub owner_id: i64,

    /// Creation time as formatted by the server
    pub created_at: String,
}

/// Request body for creating a room
#[derive(Debug, Clone, Serialize)]
pub struct NewRoom {
    pub name: String,
}
