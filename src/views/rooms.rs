//! Public room pages

use colored::Colorize;
use serde::Serialize;

use super::ViewContext;
use crate::cli::OutputFormat;
use crate::client::ReservationApi;
use crate::client::models::Room;
use crate::error::Result;
use crate::output::display::{ReservationDisplay, RoomDisplay};
use crate::output::formatters::short_date;
use crate::output::{format_rows, json, table};
use crate::router::RouteMatch;
use crate::storage::DurableStorage;

/// Every listed room
pub(super) async fn home<A, S>(ctx: &ViewContext<'_, A, S>, to: &RouteMatch) -> Result<String>
where
    A: ReservationApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    let rooms = ctx.api.list_rooms().await?;
    let rows: Vec<RoomDisplay> = rooms.iter().map(RoomDisplay::from).collect();

    let body = format_rows(&rows, Some(&to.path), ctx.format)?;
    Ok(match ctx.format {
        OutputFormat::Table => format!("{}\n{}", "Available rooms".bold(), body),
        OutputFormat::Json => body,
    })
}

#[derive(Serialize)]
struct RoomDetail<'a> {
    room: &'a Room,
    reservations: Vec<ReservationDisplay>,
}

/// One room and its bookings
pub(super) async fn room_detail<A, S>(
    ctx: &ViewContext<'_, A, S>,
    to: &RouteMatch,
) -> Result<String>
where
    A: ReservationApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    let room_id = to.id_param("id")?;

    let (room, reservations) = futures::try_join!(
        ctx.api.get_room(room_id),
        ctx.api.room_reservations(room_id)
    )?;
    let rows: Vec<ReservationDisplay> = reservations.iter().map(ReservationDisplay::from).collect();

    match ctx.format {
        OutputFormat::Json => Ok(json::format_json(
            &RoomDetail {
                room: &room,
                reservations: rows,
            },
            Some(&to.path),
        )?),
        OutputFormat::Table => {
            let fields = table::format_fields(&[
                ("Room", room.name.clone()),
                ("ID", room.id.to_string()),
                ("Owner", room.owner_id.to_string()),
                ("Listed", short_date(&room.created_at)),
            ]);
            Ok(format!(
                "{}\n\n{}\n{}",
                fields,
                "Reservations".bold(),
                table::format_table(&rows)
            ))
        }
    }
}
