use std::path::PathBuf;

use steamdex::steam::{CatalogOptions, CatalogRecord, Diagnostic, Platform, RecordKind, Result, SteamLibrary};

use crate::cmd::util::{emit_json, or_dash};

#[derive(clap::Args)]
pub struct Args {
	/// SteamID3 account whose local config and shortcuts are merged.
	#[arg(long)]
	pub user: Option<String>,
	/// Only list one record kind.
	#[arg(long, value_enum)]
	pub kind: Option<KindFilter>,
	#[arg(long)]
	pub json: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindFilter {
	Installed,
	Shortcut,
}

impl From<KindFilter> for RecordKind {
	fn from(value: KindFilter) -> Self {
		match value {
			KindFilter::Installed => RecordKind::Installed,
			KindFilter::Shortcut => RecordKind::Shortcut,
		}
	}
}

/// Build and print the catalog for one Steam install.
pub fn run(args: Args, steam_root: PathBuf, verbose: bool) -> Result<()> {
	let Args { user, kind, json } = args;

	let library = SteamLibrary::new(&steam_root);
	let user = user.or_else(|| default_user(&library));
	let options = CatalogOptions {
		steam_root: steam_root.clone(),
		platform: Platform::current(),
		verbose,
	};

	let mut catalog = library.catalog(user.as_deref(), &options);
	if let Some(kind) = kind {
		let kind = RecordKind::from(kind);
		catalog.records.retain(|record| record.kind == kind);
	}

	if json {
		emit_json(&GamesJson {
			steam_path: steam_root.display().to_string(),
			user,
			records: &catalog.records,
			diagnostics: &catalog.diagnostics,
		})?;
		return Ok(());
	}

	println!("steam_path: {}", steam_root.display());
	println!("user: {}", or_dash(user.as_deref()));
	println!("records: {}", catalog.records.len());
	println!("kind\tapp_id\tname\tlaunch");
	for record in &catalog.records {
		print_row(record);
	}

	if !catalog.diagnostics.is_empty() {
		println!("diagnostics:");
		for item in &catalog.diagnostics {
			println!("  {}: {}", item.path.display(), item.message);
		}
	}

	Ok(())
}

/// Most recently signed-in account, else the first one found.
fn default_user(library: &SteamLibrary) -> Option<String> {
	let users = match library.users() {
		Ok(users) => users,
		Err(err) => {
			tracing::warn!(error = %err, "no local users, listing installed applications only");
			return None;
		}
	};
	let chosen = users.iter().find(|user| user.most_recent).or_else(|| users.first())?;
	tracing::debug!(user = %chosen.identity.short_id, name = %chosen.display_name, "using account");
	Some(chosen.identity.short_id.clone())
}

fn print_row(record: &CatalogRecord) {
	let kind = match record.kind {
		RecordKind::Installed => "installed",
		RecordKind::Shortcut => "shortcut",
	};
	println!("{}\t{}\t{}\t{}", kind, record.application_id, record.display_name, record.launch_command);
}

#[derive(serde::Serialize)]
struct GamesJson<'a> {
	steam_path: String,
	user: Option<String>,
	records: &'a [CatalogRecord],
	diagnostics: &'a [Diagnostic],
}
