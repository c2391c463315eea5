//! roomctl - room listing and reservation client

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod router;
mod session;
mod storage;
mod views;

use cli::{Cli, Commands, GlobalOptions, RoomCommands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` forces debug output; otherwise `RUST_LOG` applies, defaulting to warnings
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Open { path } => cli::open::run(&opts, &path).await,
        Commands::Login { credentials } => cli::auth::login(&opts, &credentials).await,
        Commands::Register { credentials, login } => {
            cli::auth::register(&opts, &credentials, login).await
        }
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Status => cli::status::run(&opts).await,
        Commands::Routes => cli::routes::run(&opts),
        Commands::Room(room_cmd) => match room_cmd {
            RoomCommands::Create { name } => cli::room::create(&opts, &name).await,
            RoomCommands::Delete { room_id, yes } => cli::room::delete(&opts, room_id, yes).await,
        },
        Commands::Reserve(args) => cli::reserve::run(&opts, &args).await,
        Commands::Version => {
            println!("roomctl version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
