use std::path::PathBuf;

use crate::steam::{CatalogRecord, Platform, RecordKind, Scalar, Source, Sourced, ValueMap, ValueNode, image_path, launch_command};

/// Key path from the `localconfig.vdf` root to the per-application settings map.
pub const LOCAL_CONFIG_APPS_PATH: [&str; 5] = ["UserLocalConfigStore", "Software", "Valve", "Steam", "apps"];

const SHORTCUT_UNKNOWN_COMMAND: &str = "steam://run/unknown";

/// Parsed manifest file.
#[derive(Debug, Clone)]
pub struct Manifest {
	/// File name, reported when the manifest is skipped.
	pub file_name: String,
	/// Parsed `appmanifest_*.acf` contents.
	pub tree: ValueNode,
}

/// Inputs for templated fields and log verbosity.
#[derive(Debug, Clone)]
pub struct CatalogOptions {
	/// Steam install root used for image paths.
	pub steam_root: PathBuf,
	/// Platform for URL and cache layouts.
	pub platform: Platform,
	/// Emit per-record debug events.
	pub verbose: bool,
}

impl Default for CatalogOptions {
	fn default() -> Self {
		Self {
			steam_root: PathBuf::new(),
			platform: Platform::current(),
			verbose: false,
		}
	}
}

/// Merge manifests, the local-config override and shortcuts into catalog records.
///
/// Installed records come first in manifest order, then shortcut records in entry order.
/// Manifests without an `appid` are skipped.
pub fn build_catalog(manifests: &[Manifest], overrides: Option<&ValueNode>, shortcuts: Option<&ValueNode>, options: &CatalogOptions) -> Vec<CatalogRecord> {
	let apps = overrides.and_then(local_config_apps);
	let mut records = Vec::with_capacity(manifests.len());

	for manifest in manifests {
		match installed_record(manifest, apps, options) {
			Some(record) => {
				if options.verbose {
					tracing::debug!(file = %manifest.file_name, app_id = %record.application_id, name = %record.display_name, "manifest parsed");
				}
				records.push(record);
			}
			None => tracing::warn!(file = %manifest.file_name, "manifest has no appid, skipped"),
		}
	}

	if let Some(tree) = shortcuts {
		records.extend(shortcut_records(tree, options));
	}

	if options.verbose {
		tracing::debug!(records = records.len(), "catalog built");
	}
	records
}

fn local_config_apps(tree: &ValueNode) -> Option<&ValueMap> {
	LOCAL_CONFIG_APPS_PATH
		.iter()
		.try_fold(tree, |node, key| node.as_map()?.get_loose(key))?
		.as_map()
}

fn installed_record(manifest: &Manifest, apps: Option<&ValueMap>, options: &CatalogOptions) -> Option<CatalogRecord> {
	let root = manifest.tree.as_map()?;
	let fields = root.get_loose("AppState").and_then(ValueNode::as_map).unwrap_or(root);

	let app_id = text(fields, "appid").filter(|id| !id.is_empty())?;
	let name = text(fields, "name").filter(|name| !name.is_empty()).unwrap_or_else(|| format!("Steam Game {app_id}"));
	let mut record = CatalogRecord::new(
		RecordKind::Installed,
		app_id.clone(),
		name,
		launch_command(options.platform, &app_id),
		image_path(options.platform, &options.steam_root, &app_id),
	);

	let from_manifest = |key: &str| text(fields, key).map(|value| Sourced::new(value, Source::Manifest));
	record.universe = from_manifest("Universe");
	record.state_flags = from_manifest("StateFlags");
	record.install_dir = from_manifest("installdir");
	record.last_updated = from_manifest("LastUpdated");
	record.size_on_disk = from_manifest("SizeOnDisk");
	record.build_id = from_manifest("buildid");

	let app_override = apps.and_then(|apps| apps.get_loose(&app_id)).and_then(ValueNode::as_map);
	let overridable = |key: &str| {
		app_override
			.and_then(|app| text(app, key))
			.map(|value| Sourced::new(value, Source::LocalConfig))
			.or_else(|| from_manifest(key))
	};
	record.last_played = overridable("LastPlayed");
	record.launch_options = overridable("LaunchOptions");

	Some(record)
}

fn shortcut_records(tree: &ValueNode, options: &CatalogOptions) -> Vec<CatalogRecord> {
	let Some(entries) = tree.as_map().and_then(|root| root.get_loose("shortcuts")).and_then(ValueNode::as_map) else {
		tracing::warn!("shortcuts tree has no shortcuts map");
		return Vec::new();
	};

	let mut records = Vec::with_capacity(entries.len());
	for (key, entry) in entries.iter() {
		let Some(entry) = entry.as_map() else {
			tracing::warn!(key, "shortcut entry is not a map, skipped");
			continue;
		};
		let record = shortcut_record(key, entry);
		if options.verbose {
			tracing::debug!(key, name = %record.display_name, "shortcut parsed");
		}
		records.push(record);
	}
	records
}

fn shortcut_record(key: &str, entry: &ValueMap) -> CatalogRecord {
	let exe = text(entry, "Exe");
	let name = text(entry, "AppName").filter(|name| !name.is_empty()).unwrap_or_else(|| format!("Non-Steam Game {key}"));
	let command = match exe.as_deref() {
		Some(path) if !path.is_empty() => format!("file://{path}"),
		_ => SHORTCUT_UNKNOWN_COMMAND.to_owned(),
	};
	let icon = text(entry, "icon").unwrap_or_default();

	let mut record = CatalogRecord::new(RecordKind::Shortcut, key.to_owned(), name, command, icon);
	let from_entry = |key: &str| text(entry, key).map(|value| Sourced::new(value, Source::Shortcut));
	record.exe = exe.map(|value| Sourced::new(value, Source::Shortcut));
	record.start_dir = from_entry("StartDir");
	record.shortcut_path = from_entry("ShortcutPath");
	record.launch_options = from_entry("LaunchOptions");
	record.hidden = Some(Sourced::new(is_hidden(entry), Source::Shortcut));
	record.tags = Some(Sourced::new(tag_list(entry.get_loose("tags")), Source::Shortcut));
	record
}

/// An empty or zero `hidden` defers to `IsHidden`.
fn is_hidden(entry: &ValueMap) -> bool {
	["hidden", "IsHidden"]
		.iter()
		.filter_map(|key| entry.get_loose(key))
		.find(|node| !is_unset(node))
		.and_then(node_text)
		.is_some_and(|value| value == "1" || value == "true")
}

fn is_unset(node: &ValueNode) -> bool {
	match node {
		ValueNode::Scalar(Scalar::String(value) | Scalar::WString(value)) => value.is_empty(),
		ValueNode::Scalar(Scalar::Int32(0) | Scalar::Int64(0) | Scalar::UInt64(0) | Scalar::Pointer(0) | Scalar::Color(0)) => true,
		ValueNode::Scalar(Scalar::Float32(value)) => *value == 0.0,
		_ => false,
	}
}

/// Tags may be a map with ordinal keys; ordinals sort numerically ahead of other keys.
fn tag_list(node: Option<&ValueNode>) -> Vec<String> {
	match node {
		None => Vec::new(),
		Some(ValueNode::Scalar(scalar)) => {
			let tag = scalar.to_string();
			if tag.is_empty() { Vec::new() } else { vec![tag] }
		}
		Some(ValueNode::Map(map)) => {
			let mut ordinal = Vec::new();
			let mut named = Vec::new();
			for (key, value) in map.iter() {
				match key.parse::<u64>() {
					Ok(idx) if idx.to_string() == key => ordinal.push((idx, value)),
					_ => named.push(value),
				}
			}
			ordinal.sort_by_key(|(idx, _)| *idx);
			ordinal.into_iter().map(|(_, value)| value).chain(named).filter_map(node_text).collect()
		}
	}
}

fn text(map: &ValueMap, key: &str) -> Option<String> {
	map.get_loose(key).and_then(node_text)
}

fn node_text(node: &ValueNode) -> Option<String> {
	node.as_scalar().map(ToString::to_string)
}
