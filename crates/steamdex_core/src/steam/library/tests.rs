use steamdex_testkit::{SteamDir, VdfBuilder, manifest_text, shortcuts_vdf};

use crate::steam::{CatalogOptions, Platform, RecordKind, Source, SteamError, SteamLibrary};

const LOCAL_CONFIG: &str = r#""UserLocalConfigStore"
{
	"Software"
	{
		"Valve"
		{
			"Steam"
			{
				"apps"
				{
					"10"
					{
						"LastPlayed"		"200"
						"LaunchOptions"		"-novid"
					}
				}
			}
		}
	}
}
"#;

fn options(dir: &SteamDir) -> CatalogOptions {
	CatalogOptions {
		steam_root: dir.root().to_path_buf(),
		platform: Platform::Linux,
		verbose: false,
	}
}

fn populated() -> SteamDir {
	let dir = SteamDir::new();
	dir.manifest("appmanifest_10.acf", &manifest_text(&[("appid", "10"), ("name", "Foo"), ("LastPlayed", "100")]));
	dir.manifest("appmanifest_20.acf", &manifest_text(&[("name", "Missing Id")]));
	dir.manifest("libraryfolders.vdf", "\"libraryfolders\" {}");
	dir.user_config("5", "localconfig.vdf", LOCAL_CONFIG);
	dir.user_config(
		"5",
		"shortcuts.vdf",
		shortcuts_vdf(vec![VdfBuilder::new().string("AppName", "Bar").string("Exe", "/bin/bar")]),
	);
	dir
}

#[test]
fn scans_manifests_local_config_and_shortcuts() {
	let dir = populated();
	let library = SteamLibrary::new(dir.root());
	let catalog = library.catalog(Some("5"), &options(&dir));

	assert!(catalog.diagnostics.is_empty(), "unexpected diagnostics: {:?}", catalog.diagnostics);
	assert_eq!(catalog.records.len(), 2);
	assert_eq!(catalog.records[0].application_id, "10");
	assert_eq!(catalog.records[0].display_name, "Foo");
	let last_played = catalog.records[0].last_played.as_ref().expect("last played");
	assert_eq!((last_played.as_str(), last_played.source), ("200", Source::LocalConfig));
	assert_eq!(catalog.records[1].kind, RecordKind::Shortcut);
	assert_eq!(catalog.records[1].display_name, "Bar");
}

#[test]
fn scan_without_user_uses_manifests_only() {
	let dir = populated();
	let catalog = SteamLibrary::new(dir.root()).catalog(None, &options(&dir));

	assert_eq!(catalog.records.len(), 1);
	let last_played = catalog.records[0].last_played.as_ref().expect("last played");
	assert_eq!(last_played.source, Source::Manifest);
}

#[test]
fn corrupt_shortcuts_file_is_reported_not_fatal() {
	let dir = populated();
	dir.user_config("5", "shortcuts.vdf", [0x00, b's', 0x00, 0xff]);
	let catalog = SteamLibrary::new(dir.root()).catalog(Some("5"), &options(&dir));

	assert_eq!(catalog.records.len(), 1);
	assert_eq!(catalog.diagnostics.len(), 1);
	assert!(catalog.diagnostics[0].path.ends_with("shortcuts.vdf"));
	assert!(catalog.diagnostics[0].message.contains("0xff"));
}

#[test]
fn unbalanced_local_config_is_reported_and_manifest_values_kept() {
	let dir = populated();
	dir.user_config("5", "localconfig.vdf", "\"UserLocalConfigStore\"\n{\n");
	let catalog = SteamLibrary::new(dir.root()).catalog(Some("5"), &options(&dir));

	assert_eq!(catalog.records.len(), 2);
	assert_eq!(catalog.diagnostics.len(), 1);
	let last_played = catalog.records[0].last_played.as_ref().expect("last played");
	assert_eq!(last_played.source, Source::Manifest);
}

#[test]
fn missing_steamapps_yields_diagnostic_and_shortcuts_still_load() {
	let dir = SteamDir::new();
	dir.user_config("5", "shortcuts.vdf", shortcuts_vdf(vec![VdfBuilder::new().string("AppName", "Only")]));
	let catalog = SteamLibrary::new(dir.root()).catalog(Some("5"), &options(&dir));

	assert_eq!(catalog.records.len(), 1);
	assert_eq!(catalog.records[0].display_name, "Only");
	assert_eq!(catalog.diagnostics.len(), 1);
	assert!(catalog.diagnostics[0].message.starts_with("not found"));
}

#[test]
fn missing_optional_user_files_are_none() {
	let dir = SteamDir::new();
	let library = SteamLibrary::new(dir.root());
	assert!(library.local_config("5").expect("absent is ok").is_none());
	assert!(library.shortcuts("5").expect("absent is ok").is_none());
	assert!(library.login_users().expect("absent is ok").is_none());
}

#[test]
fn list_directory_is_sorted_and_reports_missing_path() {
	let dir = SteamDir::new();
	dir.write("d/b.txt", "");
	dir.write("d/a.txt", "");
	dir.mkdir("d/c");
	let library = SteamLibrary::new(dir.root());

	assert_eq!(library.list_directory(&dir.root().join("d")).expect("lists"), ["a.txt", "b.txt", "c"]);
	let err = library.list_directory(&dir.root().join("nope")).expect_err("missing dir fails");
	assert!(matches!(err, SteamError::NotFound { .. }));
}

#[test]
fn users_combine_userdata_dirs_with_login_records() {
	let dir = SteamDir::new();
	dir.mkdir("userdata/5");
	dir.mkdir("userdata/anonymous");
	dir.login_users("\"users\"\n{\n\"76561197960265733\"\n{\n\"AccountName\" \"alice\"\n}\n}\n");

	let users = SteamLibrary::new(dir.root()).users().expect("users resolve");
	assert_eq!(users.len(), 1);
	assert_eq!(users[0].identity.short_id, "5");
	assert_eq!(users[0].display_name, "alice");
}

#[test]
fn users_without_userdata_folder_fail() {
	let dir = SteamDir::new();
	let err = SteamLibrary::new(dir.root()).users().expect_err("missing userdata fails");
	assert!(matches!(err, SteamError::NotFound { .. }));
}
