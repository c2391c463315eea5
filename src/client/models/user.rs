//! User models

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as returned by `/auth/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// User ID
    pub id: i64,

    /// User email address
    pub email: String,

    /// Account creation time, kept as the server formats it
    pub created_at: String,
}
