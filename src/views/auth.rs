//! Sign-in and sign-up pages
//!
//! The forms are interactive and live in the `login` / `register` commands;
//! navigating here only points at them.

use colored::Colorize;
use serde::Serialize;

use super::ViewContext;
use crate::cli::OutputFormat;
use crate::client::ReservationApi;
use crate::error::Result;
use crate::output::json;
use crate::router::RouteMatch;
use crate::storage::DurableStorage;

#[derive(Serialize)]
struct Hint<'a> {
    view: &'a str,
    signed_in: bool,
    command: &'a str,
}

fn hint<A: ?Sized, S: ?Sized>(
    ctx: &ViewContext<'_, A, S>,
    to: &RouteMatch,
    command: &str,
    text: &str,
    signed_in: bool,
) -> Result<String> {
    match ctx.format {
        OutputFormat::Json => Ok(json::format_json(
            &Hint {
                view: to.route.name,
                signed_in,
                command,
            },
            Some(&to.path),
        )?),
        OutputFormat::Table => Ok(format!("{} Run {}", text, command.cyan())),
    }
}

pub(super) fn login<A, S>(ctx: &ViewContext<'_, A, S>, to: &RouteMatch) -> Result<String>
where
    A: ReservationApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    let signed_in = ctx.session.is_authenticated();
    let text = if signed_in {
        "You are already signed in. To switch accounts,"
    } else {
        "Sign in to manage your rooms and reservations."
    };
    hint(ctx, to, "roomctl login", text, signed_in)
}

pub(super) fn register<A, S>(ctx: &ViewContext<'_, A, S>, to: &RouteMatch) -> Result<String>
where
    A: ReservationApi + ?Sized,
    S: DurableStorage + ?Sized,
{
    hint(
        ctx,
        to,
        "roomctl register",
        "Create an account to list rooms.",
        ctx.session.is_authenticated(),
    )
}
