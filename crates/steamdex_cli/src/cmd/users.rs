use std::path::PathBuf;

use steamdex::steam::{Result, SteamLibrary};

use crate::cmd::util::{emit_json, or_dash};

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// Print accounts found under `userdata/`.
pub fn run(args: Args, steam_root: PathBuf) -> Result<()> {
	let users = SteamLibrary::new(&steam_root).users()?;

	if args.json {
		emit_json(&users)?;
		return Ok(());
	}

	println!("steam_path: {}", steam_root.display());
	println!("users: {}", users.len());
	println!("short_id\tlong_id\tname\taccount\tmost_recent");
	for user in users {
		println!(
			"{}\t{}\t{}\t{}\t{}",
			user.identity.short_id,
			user.identity.long_id,
			user.display_name,
			or_dash(user.account_name.as_deref()),
			user.most_recent
		);
	}

	Ok(())
}
