//! Views named by the route table
//!
//! Each view fetches what it needs through the injected API client and
//! returns the rendered text; printing is left to the caller.

use crate::cli::OutputFormat;
use crate::client::ReservationApi;
use crate::error::{ApiError, Result};
use crate::router::{RouteMatch, View};
use crate::session::Session;
use crate::storage::DurableStorage;

mod account;
mod auth;
mod rooms;

/// Everything a view may depend on
pub struct ViewContext<'a, A: ?Sized, S: ?Sized> {
    pub api: &'a A,
    pub session: &'a Session<A, S>,
    pub format: OutputFormat,
}

impl<A, S> ViewContext<'_, A, S>
where
    A: ReservationApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    /// Token for protected calls. The guard has already run, but the startup
    /// refresh may have ended the session since.
    fn require_token(&self) -> Result<String> {
        self.session
            .token()
            .ok_or_else(|| ApiError::NotSignedIn.into())
    }
}

/// Render the view for a resolved route
pub async fn render<A, S>(ctx: &ViewContext<'_, A, S>, to: &RouteMatch) -> Result<String>
where
    A: ReservationApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    log::debug!("Rendering {:?} for {}", to.route.view, to.path);

    match to.route.view {
        View::Home => rooms::home(ctx, to).await,
        View::Login => auth::login(ctx, to),
        View::Register => auth::register(ctx, to),
        View::Dashboard => account::dashboard(ctx, to).await,
        View::RoomDetail => rooms::room_detail(ctx, to).await,
        View::MyReservations => account::my_reservations(ctx, to).await,
    }
}
