//! Reserve command implementation

use colored::Colorize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat, ReserveArgs};
use crate::client::ReservationsApi;
use crate::client::models::NewReservation;
use crate::error::Result;
use crate::output::display::ReservationDisplay;
use crate::output::format_rows;

/// Book a room. Guests do not need an account.
pub async fn run(opts: &GlobalOptions, args: &ReserveArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let request = new_reservation(args);
    let reservation = ctx.client.create_reservation(&request).await?;
    log::debug!("Created reservation {}", reservation.id);

    match ctx.format {
        OutputFormat::Json => {
            let rows = [ReservationDisplay::from(&reservation)];
            println!("{}", format_rows(&rows, None, ctx.format)?);
        }
        OutputFormat::Table => {
            eprintln!(
                "{} Reserved room {} for {} ({} to {}, {} nights)",
                "✓".green(),
                reservation.room_id,
                reservation.guest_name.bold(),
                reservation.start_date,
                reservation.end_date,
                reservation.nights()
            );
        }
    }

    Ok(())
}

fn new_reservation(args: &ReserveArgs) -> NewReservation {
    NewReservation {
        room_id: args.room,
        guest_name: args.guest_name.trim().to_string(),
        guest_email: args.guest_email.trim().to_string(),
        start_date: args.from,
        end_date: args.to,
    }
}
