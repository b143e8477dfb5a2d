use std::path::{Path, PathBuf};

use directories::BaseDirs;
use steamdex::steam::{Platform, Result, SteamError};

/// Resolve the Steam root from the CLI flag or the platform default.
pub(crate) fn resolve_steam_root(flag: Option<PathBuf>) -> PathBuf {
	let home = home_dir();
	match flag {
		Some(path) => expand_home(&path, &home),
		None => Platform::current().default_steam_path(&home),
	}
}

/// Expand a leading `~` component to `home`.
pub(crate) fn expand_home(path: &Path, home: &Path) -> PathBuf {
	match path.strip_prefix("~") {
		Ok(rest) => home.join(rest),
		Err(_) => path.to_path_buf(),
	}
}

fn home_dir() -> PathBuf {
	BaseDirs::new()
		.map(|dirs| dirs.home_dir().to_path_buf())
		.unwrap_or_else(|| PathBuf::from("."))
}

/// Print a pretty JSON document to stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload).map_err(|err| SteamError::Encode { message: err.to_string() })?;
	println!("{text}");
	Ok(())
}

/// Render an optional string for tab-separated output.
pub(crate) fn or_dash(value: Option<&str>) -> &str {
	value.unwrap_or("-")
}

#[cfg(test)]
mod tests {
	use std::path::{Path, PathBuf};

	use steamdex::steam::{SteamError, parse_text_kv_nested};

	use super::{emit_json, expand_home};

	#[test]
	fn tilde_prefix_expands_to_home() {
		let home = Path::new("/home/user");
		assert_eq!(expand_home(Path::new("~/.steam/steam"), home), PathBuf::from("/home/user/.steam/steam"));
		assert_eq!(expand_home(Path::new("~"), home), PathBuf::from("/home/user"));
	}

	#[test]
	fn other_paths_are_untouched() {
		let home = Path::new("/home/user");
		assert_eq!(expand_home(Path::new("/opt/steam"), home), PathBuf::from("/opt/steam"));
		assert_eq!(expand_home(Path::new("~other/steam"), home), PathBuf::from("~other/steam"));
	}

	#[test]
	fn encoder_failure_is_an_error() {
		let text = format!("{}{}", "\"n\" {\n".repeat(1_000), "}\n".repeat(1_000));
		let tree = parse_text_kv_nested(&text).expect("deep text parses");

		let err = emit_json(&tree).expect_err("deep tree does not encode");
		assert!(matches!(err, SteamError::Encode { .. }), "got {err:?}");
	}
}
