use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::steam::{
	CatalogOptions, CatalogRecord, Manifest, Result, SteamError, SteamUser, ValueNode, build_catalog, parse_binary_vdf, parse_text_kv, parse_text_kv_nested,
	resolve_users,
};

const MANIFEST_PREFIX: &str = "appmanifest_";
const MANIFEST_SUFFIX: &str = ".acf";

/// Problem with one input file that was left out of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
	/// Offending file.
	pub path: PathBuf,
	/// Rendered error.
	pub message: String,
}

impl Diagnostic {
	fn new(path: &Path, err: &SteamError) -> Self {
		Self {
			path: path.to_path_buf(),
			message: err.to_string(),
		}
	}
}

/// Catalog scan output.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
	/// Installed records followed by shortcut records.
	pub records: Vec<CatalogRecord>,
	/// Files that failed to read or decode.
	pub diagnostics: Vec<Diagnostic>,
}

/// Steam installation directory reader.
#[derive(Debug, Clone)]
pub struct SteamLibrary {
	root: PathBuf,
}

impl SteamLibrary {
	/// Reader rooted at a Steam install directory; nothing is read yet.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Install root.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// `userdata/<user>/config/<name>`.
	pub fn user_config_path(&self, user: &str, name: &str) -> PathBuf {
		self.root.join("userdata").join(user).join("config").join(name)
	}

	/// Read a text file, replacing invalid UTF-8.
	pub fn read_text_file(&self, path: &Path) -> Result<String> {
		let bytes = self.read_binary_file(path)?;
		Ok(String::from_utf8_lossy(&bytes).into_owned())
	}

	/// Read a file's raw bytes.
	pub fn read_binary_file(&self, path: &Path) -> Result<Vec<u8>> {
		fs::read(path).map_err(|err| map_io(path, err))
	}

	/// List entry names of a directory, sorted.
	pub fn list_directory(&self, path: &Path) -> Result<Vec<String>> {
		let mut names = Vec::new();
		for entry in fs::read_dir(path).map_err(|err| map_io(path, err))? {
			let entry = entry?;
			names.push(entry.file_name().to_string_lossy().into_owned());
		}
		names.sort();
		Ok(names)
	}

	/// Parse every `steamapps/appmanifest_*.acf`.
	pub fn manifests(&self) -> (Vec<Manifest>, Vec<Diagnostic>) {
		let dir = self.root.join("steamapps");
		let mut diagnostics = Vec::new();
		let names = match self.list_directory(&dir) {
			Ok(names) => names,
			Err(err) => {
				tracing::warn!(path = %dir.display(), error = %err, "steamapps folder unavailable");
				diagnostics.push(Diagnostic::new(&dir, &err));
				return (Vec::new(), diagnostics);
			}
		};

		let mut manifests = Vec::new();
		for file_name in names.into_iter().filter(|name| is_manifest_name(name)) {
			let path = dir.join(&file_name);
			tracing::debug!(path = %path.display(), "reading manifest");
			match self.read_text_file(&path) {
				Ok(text) => manifests.push(Manifest {
					file_name,
					tree: parse_text_kv(&text),
				}),
				Err(err) => {
					tracing::warn!(path = %path.display(), error = %err, "manifest unreadable, skipped");
					diagnostics.push(Diagnostic::new(&path, &err));
				}
			}
		}
		(manifests, diagnostics)
	}

	/// Parse `userdata/<user>/config/localconfig.vdf`; a missing file is `None`.
	pub fn local_config(&self, user: &str) -> Result<Option<ValueNode>> {
		let path = self.user_config_path(user, "localconfig.vdf");
		self.read_optional(&path)?.map(|bytes| parse_text_kv_nested(&String::from_utf8_lossy(&bytes))).transpose()
	}

	/// Parse `userdata/<user>/config/shortcuts.vdf`; a missing file is `None`.
	pub fn shortcuts(&self, user: &str) -> Result<Option<ValueNode>> {
		let path = self.user_config_path(user, "shortcuts.vdf");
		self.read_optional(&path)?.map(|bytes| parse_binary_vdf(&bytes)).transpose()
	}

	/// Parse `config/loginusers.vdf`; a missing file is `None`.
	pub fn login_users(&self) -> Result<Option<ValueNode>> {
		let path = self.root.join("config").join("loginusers.vdf");
		self.read_optional(&path)?.map(|bytes| parse_text_kv_nested(&String::from_utf8_lossy(&bytes))).transpose()
	}

	/// Accounts with a `userdata/<id>` directory, named from `loginusers.vdf`.
	pub fn users(&self) -> Result<Vec<SteamUser>> {
		let dirs = self.list_directory(&self.root.join("userdata"))?;
		let login = match self.login_users() {
			Ok(login) => login,
			Err(err) => {
				tracing::warn!(error = %err, "loginusers.vdf unusable, names unknown");
				None
			}
		};
		Ok(resolve_users(&dirs, login.as_ref()))
	}

	/// Build the catalog, optionally merging one user's local config and shortcuts.
	///
	/// Unreadable or undecodable files are reported in [`Catalog::diagnostics`] and
	/// otherwise ignored.
	pub fn catalog(&self, user: Option<&str>, options: &CatalogOptions) -> Catalog {
		let (manifests, mut diagnostics) = self.manifests();

		let mut load = |name: &str, result: Result<Option<ValueNode>>| match result {
			Ok(tree) => tree,
			Err(err) => {
				let path = user.map(|user| self.user_config_path(user, name)).unwrap_or_default();
				tracing::warn!(path = %path.display(), error = %err, "user file skipped");
				diagnostics.push(Diagnostic::new(&path, &err));
				None
			}
		};
		let overrides = user.and_then(|user| load("localconfig.vdf", self.local_config(user)));
		let shortcuts = user.and_then(|user| load("shortcuts.vdf", self.shortcuts(user)));

		let records = build_catalog(&manifests, overrides.as_ref(), shortcuts.as_ref(), options);
		tracing::debug!(records = records.len(), diagnostics = diagnostics.len(), "catalog scan finished");
		Catalog { records, diagnostics }
	}

	fn read_optional(&self, path: &Path) -> Result<Option<Vec<u8>>> {
		match self.read_binary_file(path) {
			Ok(bytes) => Ok(Some(bytes)),
			Err(SteamError::NotFound { .. }) => {
				tracing::debug!(path = %path.display(), "optional file absent");
				Ok(None)
			}
			Err(err) => Err(err),
		}
	}
}

fn is_manifest_name(name: &str) -> bool {
	name.starts_with(MANIFEST_PREFIX) && name.ends_with(MANIFEST_SUFFIX)
}

fn map_io(path: &Path, err: std::io::Error) -> SteamError {
	if err.kind() == ErrorKind::NotFound {
		SteamError::NotFound { path: path.to_path_buf() }
	} else {
		SteamError::Io(err)
	}
}

#[cfg(test)]
mod tests;
