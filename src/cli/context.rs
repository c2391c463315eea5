//! Command execution context
//!
//! One context is one application load: config read, API client built,
//! durable storage opened, and the session restored from it.

use std::path::PathBuf;
use std::sync::Arc;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::ReservationClient;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::session::Session;
use crate::storage::FileStorage;
use crate::views::ViewContext;

/// Session type used by the CLI
pub type AppSession = Session<ReservationClient, FileStorage>;

/// Context for command execution containing config, client, session and
/// runtime options.
pub struct CommandContext {
    /// Resolved config file location
    pub config_path: PathBuf,
    /// API client, shared with the session
    pub client: Arc<ReservationClient>,
    /// Durable storage backing the session
    pub storage: Arc<FileStorage>,
    /// Session restored from storage
    pub session: AppSession,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// The session is opened but not refreshed; commands that behave like an
    /// application start call [`AppSession::init_session`] themselves.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be parsed, or the
    /// HTTP client cannot be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_from(&config_path)?;

        let api_host = config.api_host(opts.api_host_ref());
        log::debug!("Using API at {}", api_host);
        let client = Arc::new(ReservationClient::new(api_host, config.timeout())?);

        let storage = Arc::new(FileStorage::new(Config::storage_path(&config_path)));
        let session = Session::open(Arc::clone(&client), Arc::clone(&storage));

        Ok(Self {
            config_path,
            client,
            storage,
            session,
            format: opts.format,
        })
    }

    /// Context handed to views
    pub fn view_context(&self) -> ViewContext<'_, ReservationClient, FileStorage> {
        ViewContext {
            api: self.client.as_ref(),
            session: &self.session,
            format: self.format,
        }
    }

    /// Bearer token, or an error telling the user to sign in
    pub fn require_token(&self) -> Result<String> {
        self.session
            .token()
            .ok_or_else(|| ApiError::NotSignedIn.into())
    }
}
