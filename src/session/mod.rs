//! Authentication session store
//!
//! One [`Session`] exists per application load. It owns the bearer token and
//! a best-effort cache of the signed-in user's profile, and mirrors the token
//! into [`DurableStorage`] so it survives restarts.
//!
//! The token alone decides whether the user is signed in. The profile is
//! filled in by [`Session::refresh_profile`]; any failure there is taken to
//! mean the token is no longer good and ends the session.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::task::JoinHandle;

use crate::client::AuthApi;
use crate::client::models::{Credentials, UserProfile};
use crate::error::{ApiError, Result};
use crate::router::TokenSource;
use crate::storage::{DurableStorage, TOKEN_KEY};

pub mod token;

/// In-memory session state.
///
/// `token == None` implies `user == None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

/// Shared authentication session.
///
/// Cloning is cheap and every clone observes the same state. The lock is
/// never held across an `.await`, so reads from the navigation guard are
/// always immediate.
pub struct Session<A: ?Sized, S: ?Sized> {
    api: Arc<A>,
    storage: Arc<S>,
    state: Arc<RwLock<SessionState>>,
}

impl<A: ?Sized, S: ?Sized> Clone for Session<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            storage: Arc::clone(&self.storage),
            state: Arc::clone(&self.state),
        }
    }
}

impl<A, S> Session<A, S>
where
    A: AuthApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    /// Open the session, restoring any token left in durable storage.
    ///
    /// Unreadable storage is treated as signed out.
    pub fn open(api: Arc<A>, storage: Arc<S>) -> Self {
        let token = match storage.get_item(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("Could not read stored session, starting signed out: {}", e);
                None
            }
        };

        if token.is_some() {
            log::debug!("Restored session token from storage");
        }

        Self {
            api,
            storage,
            state: Arc::new(RwLock::new(SessionState { token, user: None })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current bearer token
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    /// Cached profile of the signed-in user
    pub fn user(&self) -> Option<UserProfile> {
        self.read().user.clone()
    }

    /// Copy of the whole state
    pub fn snapshot(&self) -> SessionState {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    /// Sign in and load the profile.
    ///
    /// The token is persisted before it becomes visible in memory, under the
    /// same write lock that clears a rejected session. If the
    /// backend rejects the credentials, cannot be reached, or the token cannot
    /// be persisted, the previous session is left exactly as it was. An active
    /// session is replaced.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        let issued = self.api.login(credentials).await?;
        if issued.access_token.trim().is_empty() {
            return Err(
                ApiError::InvalidResponse("login response carried an empty token".to_string()).into(),
            );
        }

        {
            let mut state = self.write();
            self.storage.set_item(TOKEN_KEY, &issued.access_token)?;
            if state.token.is_some() {
                log::info!("Replacing active session");
            }
            state.token = Some(issued.access_token);
            state.user = None;
        }
        log::info!("Signed in as {}", credentials.email);

        self.refresh_profile().await;
        Ok(())
    }

    /// Create an account. The session is untouched; sign in separately.
    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        self.api.register(credentials).await?;
        log::info!("Registered {}", credentials.email);
        Ok(())
    }

    /// End the session locally. No backend call is made.
    pub fn logout(&self) {
        let mut state = self.write();
        *state = SessionState::default();
        self.forget_stored_token();
        drop(state);
        log::debug!("Session cleared");
    }

    /// Callers hold the write lock so memory and storage change together
    fn forget_stored_token(&self) {
        if let Err(e) = self.storage.remove_item(TOKEN_KEY) {
            log::warn!("Could not remove stored session token: {}", e);
        }
    }

    /// Fetch and cache the signed-in user's profile.
    ///
    /// Without a token this does nothing. Any failure (rejected token,
    /// unreachable backend, bad payload) ends the session. A result that
    /// arrives after the token changed is discarded, so a stale refresh can
    /// neither cache a profile for nor end a newer session. The comparison and
    /// the clear happen under one write lock.
    pub async fn refresh_profile(&self) -> Option<UserProfile> {
        let token = self.token()?;

        match self.api.current_user(&token).await {
            Ok(user) => {
                let mut state = self.write();
                if state.token.as_deref() == Some(token.as_str()) {
                    state.user = Some(user.clone());
                    Some(user)
                } else {
                    log::debug!("Session changed during profile fetch, discarding result");
                    None
                }
            }
            Err(e) => {
                let mut state = self.write();
                if state.token.as_deref() == Some(token.as_str()) {
                    *state = SessionState::default();
                    self.forget_stored_token();
                    drop(state);
                    log::warn!("Session is no longer valid: {}", e);
                } else {
                    log::debug!("Session changed during profile fetch, ignoring: {}", e);
                }
                None
            }
        }
    }
}

impl<A, S> Session<A, S>
where
    A: AuthApi + ?Sized + 'static,
    S: DurableStorage + ?Sized + 'static,
{
    /// Bootstrap the session after [`open`](Session::open).
    ///
    /// With a restored token, starts a background profile refresh and returns
    /// immediately. Navigation may proceed on the restored token while the
    /// refresh is in flight; if the refresh fails the session is cleared.
    pub fn init_session(&self) -> SessionInit {
        if !self.is_authenticated() {
            return SessionInit { task: None };
        }

        let session = self.clone();
        let task = tokio::spawn(async move { session.refresh_profile().await });
        SessionInit { task: Some(task) }
    }
}

impl<A, S> TokenSource for Session<A, S>
where
    A: AuthApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    fn has_token(&self) -> bool {
        self.is_authenticated()
    }
}

/// Handle to the startup profile refresh.
///
/// Dropping it leaves the refresh running in the background.
#[derive(Debug)]
pub struct SessionInit {
    task: Option<JoinHandle<Option<UserProfile>>>,
}

impl SessionInit {
    /// Whether a refresh was started and has not finished yet
    pub fn is_pending(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Wait for the refresh, yielding the profile if it succeeded
    pub async fn finished(self) -> Option<UserProfile> {
        let task = self.task?;
        match task.await {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Session refresh task failed: {}", e);
                None
            }
        }
    }
}
