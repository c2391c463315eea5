//! CLI command definitions and handlers

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

pub mod args;
pub mod auth;
pub mod context;
pub mod open;
pub mod reserve;
pub mod room;
pub mod routes;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// roomctl - browse rooms and manage reservations from the terminal
#[derive(Parser, Debug)]
#[command(name = "roomctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "ROOMCTL_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "ROOMCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the reservation API base URL
    #[arg(long, global = true, env = "ROOMCTL_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ROOMCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Navigate to a page, e.g. `/`, `/room/3`, `/dashboard`, or a route name
    Open {
        /// Path or route name
        #[arg(default_value = "/")]
        path: String,
    },

    /// Sign in and remember the session
    Login {
        #[command(flatten)]
        credentials: CredentialArgs,
    },

    /// Create an account
    Register {
        #[command(flatten)]
        credentials: CredentialArgs,

        /// Sign in right after the account is created
        #[arg(long)]
        login: bool,
    },

    /// Forget the stored session
    Logout,

    /// Show configuration and session status
    Status,

    /// List the pages `open` can navigate to
    Routes,

    /// Manage your rooms
    #[command(subcommand)]
    Room(RoomCommands),

    /// Book a room for a guest
    Reserve(ReserveArgs),

    /// Display version information
    Version,
}

/// Email/password flags; missing values are prompted for
#[derive(Clone, clap::Args)]
pub struct CredentialArgs {
    /// Account email
    #[arg(long, env = "ROOMCTL_EMAIL", hide_env = true)]
    pub email: Option<String>,

    /// Account password
    #[arg(long, env = "ROOMCTL_PASSWORD", hide_env = true, hide_env_values = true)]
    pub password: Option<String>,
}

impl std::fmt::Debug for CredentialArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialArgs")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Room management subcommands
#[derive(Subcommand, Debug)]
pub enum RoomCommands {
    /// List a new room
    Create {
        /// Room name
        name: String,
    },

    /// Remove one of your rooms
    Delete {
        /// Room ID
        room_id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Reservation details
#[derive(Debug, Clone, clap::Args)]
pub struct ReserveArgs {
    /// Room ID
    #[arg(long)]
    pub room: i64,

    /// Guest full name
    #[arg(long)]
    pub guest_name: String,

    /// Guest email
    #[arg(long)]
    pub guest_email: String,

    /// First night (YYYY-MM-DD)
    #[arg(long)]
    pub from: NaiveDate,

    /// Checkout day (YYYY-MM-DD)
    #[arg(long)]
    pub to: NaiveDate,
}
