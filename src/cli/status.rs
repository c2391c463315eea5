//! Status command implementation

use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::models::UserProfile;
use crate::error::Result;
use crate::output::formatters::format_remaining;
use crate::output::json;
use crate::session::token;

#[derive(Debug, Serialize)]
struct StatusReport {
    config_file: String,
    api_host: String,
    storage_file: String,
    signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<UserProfile>,
}

/// Run the status command to display configuration and session status.
///
/// The stored session is validated against the backend the same way an
/// application start does; a rejected token is cleared.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let restored = ctx.session.token();
    let user = ctx.session.init_session().finished().await;
    let state = ctx.session.snapshot();

    let expires_at = state.token.as_deref().and_then(token::expires_at);

    if ctx.format == OutputFormat::Json {
        let report = StatusReport {
            config_file: ctx.config_path.display().to_string(),
            api_host: ctx.client.base_url().to_string(),
            storage_file: ctx.storage.path().display().to_string(),
            signed_in: state.token.is_some(),
            token_expires_at: expires_at.map(|exp| exp.to_rfc3339()),
            user: state.user,
        };
        println!("{}", json::format_json(&report, None)?);
        return Ok(());
    }

    println!("{}\n", "roomctl Status".bold());
    println!("Config file: {}", ctx.config_path.display().to_string().cyan());
    println!("API host: {}", ctx.client.base_url().cyan());
    println!("Session file: {}", ctx.storage.path().display().to_string().cyan());
    println!();

    match (&restored, &user) {
        (None, _) => {
            println!("{} Not signed in", "○".dimmed());
            println!("  → Run 'roomctl login' to sign in");
        }
        (Some(_), Some(user)) => {
            println!("{} Signed in as {}", "✓".green(), user.email.bold());
            if let Some(exp) = expires_at {
                let remaining = exp.signed_duration_since(Utc::now());
                println!(
                    "{} Session token valid (expires in {})",
                    "✓".green(),
                    format_remaining(remaining)
                );
            }
        }
        (Some(_), None) if state.token.is_none() => {
            println!("{} Stored session was rejected and has been cleared", "✗".red());
            println!("  → Run 'roomctl login' to sign in again");
        }
        (Some(_), None) => {
            println!("{} Signed in, but the profile could not be loaded", "⚠".yellow());
        }
    }

    println!();
    Ok(())
}
