//! Signed-in pages

use colored::Colorize;
use serde::Serialize;

use super::ViewContext;
use crate::cli::OutputFormat;
use crate::client::ReservationApi;
use crate::client::models::UserProfile;
use crate::error::Result;
use crate::output::display::{ReservationDisplay, RoomDisplay};
use crate::output::{format_rows, json, table};
use crate::router::RouteMatch;
use crate::storage::DurableStorage;

#[derive(Serialize)]
struct Dashboard {
    user: Option<UserProfile>,
    rooms: Vec<RoomDisplay>,
}

/// The user's own rooms
pub(super) async fn dashboard<A, S>(ctx: &ViewContext<'_, A, S>, to: &RouteMatch) -> Result<String>
where
    A: ReservationApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    let token = ctx.require_token()?;
    let rooms = ctx.api.my_rooms(&token).await?;
    let rows: Vec<RoomDisplay> = rooms.iter().map(RoomDisplay::from).collect();

    // The profile may still be loading; it is not needed to show the page
    let user = ctx.session.user();

    match ctx.format {
        OutputFormat::Json => Ok(json::format_json(
            &Dashboard { user, rooms: rows },
            Some(&to.path),
        )?),
        OutputFormat::Table => {
            let greeting = match user {
                Some(user) => format!("Signed in as {}", user.email.bold()),
                None => "Signed in".to_string(),
            };
            Ok(format!(
                "{}\n\n{}\n{}",
                greeting,
                "Your rooms".bold(),
                table::format_table(&rows)
            ))
        }
    }
}

/// Bookings made on the user's rooms
pub(super) async fn my_reservations<A, S>(
    ctx: &ViewContext<'_, A, S>,
    to: &RouteMatch,
) -> Result<String>
where
    A: ReservationApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    let token = ctx.require_token()?;
    let reservations = ctx.api.my_reservations(&token).await?;
    let rows: Vec<ReservationDisplay> = reservations.iter().map(ReservationDisplay::from).collect();

    let body = format_rows(&rows, Some(&to.path), ctx.format)?;
    Ok(match ctx.format {
        OutputFormat::Table => format!("{}\n{}", "Reservations on your rooms".bold(), body),
        OutputFormat::Json => body,
    })
}
