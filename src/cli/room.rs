//! Room management commands

use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::RoomsApi;
use crate::client::models::NewRoom;
use crate::error::{ApiError, Result};
use crate::output::display::RoomDisplay;
use crate::output::{format_rows, json};

/// Create a room owned by the signed-in user
pub async fn create(opts: &GlobalOptions, name: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.require_token()?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Room name must not be empty".to_string()).into());
    }

    let room = ctx
        .client
        .create_room(
            &token,
            &NewRoom {
                name: name.to_string(),
            },
        )
        .await?;
    log::debug!("Created room {}", room.id);

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", format_rows(&[RoomDisplay::from(&room)], None, ctx.format)?);
        }
        OutputFormat::Table => {
            eprintln!("{} Room \"{}\" listed (ID {})", "✓".green(), room.name, room.id);
            eprintln!("  → Run 'roomctl open /room/{}' to view it", room.id);
        }
    }

    Ok(())
}

/// Delete one of the signed-in user's rooms
pub async fn delete(opts: &GlobalOptions, room_id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.require_token()?;

    let room = ctx.client.get_room(room_id).await?;

    if !yes {
        eprintln!(
            "{} Delete room \"{}\"? Its reservations go with it.",
            "⚠".yellow(),
            room.name
        );

        let confirm = Confirm::new()
            .with_prompt("Confirm deletion?")
            .default(false)
            .interact()?;

        if !confirm {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    ctx.client.delete_room(&token, room_id).await?;

    match ctx.format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "deleted": true, "room_id": room.id, "room_name": room.name });
            println!("{}", json::format_json(&output, None)?);
        }
        OutputFormat::Table => {
            eprintln!("{} Room \"{}\" deleted", "✓".green(), room.name);
        }
    }

    Ok(())
}
