//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{AccessToken, Credentials, UserProfile};
use crate::error::Result;

/// Authentication operations for the reservation API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a bearer token
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken>;

    /// Create an account; the caller signs in separately
    async fn register(&self, credentials: &Credentials) -> Result<()>;

    /// Fetch the profile the bearer token belongs to
    async fn current_user(&self, token: &str) -> Result<UserProfile>;
}
