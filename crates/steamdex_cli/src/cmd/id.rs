use steamdex::steam::{Result, STEAM_ID64_OFFSET, UserIdentity};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// SteamID3 account number or SteamID64.
	pub value: String,
	#[arg(long)]
	pub json: bool,
}

/// Print both identifier forms of one account.
pub fn run(args: Args) -> Result<()> {
	let identity = identify(&args.value)?;

	if args.json {
		emit_json(&identity)?;
		return Ok(());
	}

	println!("short_id: {}", identity.short_id);
	println!("long_id: {}", identity.long_id);
	Ok(())
}

/// Values at or above the SteamID64 offset are read as long ids.
fn identify(value: &str) -> Result<UserIdentity> {
	match value.parse::<u64>() {
		Ok(number) if number >= STEAM_ID64_OFFSET => UserIdentity::from_long_id(value),
		_ => UserIdentity::from_short_id(value),
	}
}
