//! Durable client-side key-value storage
//!
//! The session keeps exactly one key here, [`TOKEN_KEY`], holding the raw
//! bearer token. An absent key means the user is signed out.

use crate::error::Result;

mod file;
#[cfg(test)]
mod memory;

pub use file::FileStorage;
#[cfg(test)]
pub use memory::MemoryStorage;

/// Key under which the bearer token is persisted
pub const TOKEN_KEY: &str = "token";

/// Persistent string storage surviving process restarts
pub trait DurableStorage: Send + Sync {
    /// Read a value, `None` when the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> Result<()>;
}
