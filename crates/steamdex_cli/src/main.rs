#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;
mod logging;

#[derive(Parser)]
#[command(name = "steamdex", about = "Steam library catalog tools")]
struct Cli {
	/// Steam install root. Defaults to the platform's usual location.
	#[arg(long = "steam-path", env = "STEAM_PATH", global = true)]
	steam_path: Option<PathBuf>,
	/// Log per-file and per-record detail to stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// List installed applications and shortcuts.
	Games(cmd::games::Args),
	/// List local Steam accounts.
	Users(cmd::users::Args),
	/// Decode one KeyValues/VDF file to JSON.
	Dump(cmd::dump::Args),
	/// Convert between SteamID3 and SteamID64.
	Id(cmd::id::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> steamdex::steam::Result<()> {
	let cli = Cli::parse();
	logging::init(cli.verbose);

	match cli.command {
		Commands::Games(args) => cmd::games::run(args, cmd::util::resolve_steam_root(cli.steam_path), cli.verbose),
		Commands::Users(args) => cmd::users::run(args, cmd::util::resolve_steam_root(cli.steam_path)),
		Commands::Dump(args) => cmd::dump::run(args),
		Commands::Id(args) => cmd::id::run(args),
	}
}
