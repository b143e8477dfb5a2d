use serde::Serialize;

/// Input that last set a catalog field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
	/// `appmanifest_*.acf`.
	Manifest,
	/// Per-user `localconfig.vdf` override.
	LocalConfig,
	/// Per-user `shortcuts.vdf` entry.
	Shortcut,
}

/// Field value paired with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
	/// Field payload.
	pub value: T,
	/// Input that supplied the payload.
	pub source: Source,
}

impl<T> Sourced<T> {
	/// Pair `value` with `source`.
	pub fn new(value: T, source: Source) -> Self {
		Self { value, source }
	}
}

impl Sourced<String> {
	/// Borrow the string payload.
	pub fn as_str(&self) -> &str {
		&self.value
	}
}

/// Origin category of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
	/// Installed application described by a manifest.
	Installed,
	/// User-added non-Steam shortcut.
	Shortcut,
}

/// One merged catalog entry.
///
/// Installed and shortcut records share this shape but never share populated
/// source-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
	/// Origin category.
	pub kind: RecordKind,
	/// Canonical application key: manifest `appid` or shortcut entry key.
	pub application_id: String,
	/// Human-readable name.
	pub display_name: String,
	/// URL or `file://` command that launches the entry.
	pub launch_command: String,
	/// Artwork path, possibly empty.
	pub image_path: String,
	/// Manifest `Universe`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub universe: Option<Sourced<String>>,
	/// Manifest `StateFlags`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub state_flags: Option<Sourced<String>>,
	/// Manifest `installdir`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub install_dir: Option<Sourced<String>>,
	/// Manifest `LastUpdated`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_updated: Option<Sourced<String>>,
	/// Manifest `SizeOnDisk`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub size_on_disk: Option<Sourced<String>>,
	/// Manifest `buildid`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub build_id: Option<Sourced<String>>,
	/// `LastPlayed`, local config first.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub last_played: Option<Sourced<String>>,
	/// Shortcut `Exe`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub exe: Option<Sourced<String>>,
	/// Shortcut `StartDir`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub start_dir: Option<Sourced<String>>,
	/// Shortcut `ShortcutPath`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub shortcut_path: Option<Sourced<String>>,
	/// `LaunchOptions`; local config first for installed records.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub launch_options: Option<Sourced<String>>,
	/// Shortcut hidden flag.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hidden: Option<Sourced<bool>>,
	/// Shortcut tag list.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tags: Option<Sourced<Vec<String>>>,
}

impl CatalogRecord {
	pub(crate) fn new(kind: RecordKind, application_id: String, display_name: String, launch_command: String, image_path: String) -> Self {
		Self {
			kind,
			application_id,
			display_name,
			launch_command,
			image_path,
			universe: None,
			state_flags: None,
			install_dir: None,
			last_updated: None,
			size_on_disk: None,
			build_id: None,
			last_played: None,
			exe: None,
			start_dir: None,
			shortcut_path: None,
			launch_options: None,
			hidden: None,
			tags: None,
		}
	}
}
