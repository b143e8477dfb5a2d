//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Reference binary VDF encoder used to build test fixtures.
#[derive(Debug, Default, Clone)]
pub struct VdfBuilder {
	buf: Vec<u8>,
}

impl VdfBuilder {
	/// Start an empty entry sequence.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a nested object built by `build`.
	pub fn object(mut self, key: &str, build: impl FnOnce(VdfBuilder) -> VdfBuilder) -> Self {
		let inner = build(VdfBuilder::new());
		self.entry(0x00, key);
		self.buf.extend_from_slice(&inner.buf);
		self.buf.push(0x08);
		self
	}

	/// Append a string entry.
	pub fn string(mut self, key: &str, value: &str) -> Self {
		self.entry(0x01, key);
		self.cstring(value);
		self
	}

	/// Append a signed 32-bit entry.
	pub fn int32(mut self, key: &str, value: i32) -> Self {
		self.entry(0x02, key);
		self.buf.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a 32-bit float entry.
	pub fn float32(mut self, key: &str, value: f32) -> Self {
		self.entry(0x03, key);
		self.buf.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a pointer entry.
	pub fn pointer(mut self, key: &str, value: u32) -> Self {
		self.entry(0x04, key);
		self.buf.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a UTF-16LE string entry.
	pub fn wstring(mut self, key: &str, value: &str) -> Self {
		self.entry(0x05, key);
		for unit in value.encode_utf16() {
			self.buf.extend_from_slice(&unit.to_le_bytes());
		}
		self.buf.extend_from_slice(&[0, 0]);
		self
	}

	/// Append a color entry.
	pub fn color(mut self, key: &str, value: u32) -> Self {
		self.entry(0x06, key);
		self.buf.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append an unsigned 64-bit entry.
	pub fn uint64(mut self, key: &str, value: u64) -> Self {
		self.entry(0x07, key);
		self.buf.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a signed 64-bit entry.
	pub fn int64(mut self, key: &str, value: i64) -> Self {
		self.entry(0x0a, key);
		self.buf.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Close the root sequence and return the encoded bytes.
	pub fn finish(mut self) -> Vec<u8> {
		self.buf.push(0x08);
		self.buf
	}

	fn entry(&mut self, tag: u8, key: &str) {
		self.buf.push(tag);
		self.cstring(key);
	}

	fn cstring(&mut self, value: &str) {
		self.buf.extend_from_slice(value.as_bytes());
		self.buf.push(0);
	}
}

/// Encode a `shortcuts.vdf` body from per-entry builders, keyed `0..n`.
pub fn shortcuts_vdf(entries: Vec<VdfBuilder>) -> Vec<u8> {
	VdfBuilder::new()
		.object("shortcuts", |mut list| {
			for (idx, entry) in entries.into_iter().enumerate() {
				list = list.object(&idx.to_string(), |_| entry);
			}
			list
		})
		.finish()
}

/// Temporary Steam install tree.
pub struct SteamDir {
	dir: TempDir,
}

impl SteamDir {
	/// Create an empty tree in a fresh temporary directory.
	pub fn new() -> Self {
		Self {
			dir: tempfile::tempdir().expect("temp dir is created"),
		}
	}

	/// Root of the tree.
	pub fn root(&self) -> &Path {
		self.dir.path()
	}

	/// Write `contents` to a root-relative path, creating parent directories.
	pub fn write(&self, relative: &str, contents: impl AsRef<[u8]>) -> PathBuf {
		let path = self.root().join(relative);
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).expect("parent dirs are created");
		}
		fs::write(&path, contents).expect("fixture file is written");
		path
	}

	/// Create a directory under the root.
	pub fn mkdir(&self, relative: &str) -> PathBuf {
		let path = self.root().join(relative);
		fs::create_dir_all(&path).expect("dir is created");
		path
	}

	/// Write `steamapps/<file_name>`.
	pub fn manifest(&self, file_name: &str, body: &str) -> PathBuf {
		self.write(&format!("steamapps/{file_name}"), body)
	}

	/// Write `userdata/<user>/config/<name>`.
	pub fn user_config(&self, user: &str, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
		self.write(&format!("userdata/{user}/config/{name}"), contents)
	}

	/// Write `config/loginusers.vdf`.
	pub fn login_users(&self, body: &str) -> PathBuf {
		self.write("config/loginusers.vdf", body)
	}
}

impl Default for SteamDir {
	fn default() -> Self {
		Self::new()
	}
}

/// Render a minimal `appmanifest_*.acf` body from key/value pairs.
pub fn manifest_text(pairs: &[(&str, &str)]) -> String {
	let mut out = String::from("\"AppState\"\n{\n");
	for (key, value) in pairs {
		out.push_str(&format!("\t\"{key}\"\t\t\"{value}\"\n"));
	}
	out.push_str("}\n");
	out
}
