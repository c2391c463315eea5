//! Login, register and logout commands

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{CommandContext, CredentialArgs, GlobalOptions};
use crate::client::models::Credentials;
use crate::error::{ApiError, Result};

/// Run the login command
///
/// Signing in while a session is active replaces it.
pub async fn login(opts: &GlobalOptions, args: &CredentialArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let credentials = prompt_credentials(args, false)?;
    sign_in(&ctx, &credentials).await
}

/// Run the register command, optionally signing in afterwards
pub async fn register(opts: &GlobalOptions, args: &CredentialArgs, then_login: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let credentials = prompt_credentials(args, true)?;

    let spinner = spinner("Creating account...");
    let result = ctx.session.register(&credentials).await;
    spinner.finish_and_clear();
    result?;

    eprintln!("{} Account created for {}", "✓".green(), credentials.email.bold());

    if then_login {
        sign_in(&ctx, &credentials).await
    } else {
        eprintln!("  → Run {} to sign in", "roomctl login".cyan());
        Ok(())
    }
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if ctx.session.is_authenticated() {
        ctx.session.logout();
        eprintln!("{} Signed out", "✓".green());
    } else {
        eprintln!("{} Not signed in", "○".dimmed());
    }
    Ok(())
}

async fn sign_in(ctx: &CommandContext, credentials: &Credentials) -> Result<()> {
    let spinner = spinner("Signing in...");
    let result = ctx.session.login(credentials).await;
    spinner.finish_and_clear();
    result?;

    // The profile fetch that follows a login ends the session when it fails
    match ctx.session.user() {
        Some(user) => {
            eprintln!("{} Signed in as {}", "✓".green(), user.email.bold());
            Ok(())
        }
        None => Err(ApiError::Unauthorized(
            "signed in, but the profile could not be loaded".to_string(),
        )
        .into()),
    }
}

/// Fill in whatever the flags and environment left out
fn prompt_credentials(args: &CredentialArgs, confirm_password: bool) -> Result<Credentials> {
    let theme = ColorfulTheme::default();

    let email = match &args.email {
        Some(email) => email.clone(),
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Email")
            .interact_text()?,
    };

    let password = match &args.password {
        Some(password) => password.clone(),
        None => {
            let prompt = Password::with_theme(&theme).with_prompt("Password");
            if confirm_password {
                prompt
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()?
            } else {
                prompt.interact()?
            }
        }
    };

    Ok(Credentials::new(email.trim(), password))
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
