//! Authentication models

use serde::{Deserialize, Serialize};

/// Email and password pair sent to the login and register endpoints.
///
/// Never persisted; `Debug` redacts the password so credentials cannot leak
/// through logging.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    /// Bearer token for subsequent requests
    pub access_token: String,

    /// Token scheme, normally `bearer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}
