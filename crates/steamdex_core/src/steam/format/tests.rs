use std::path::{Path, PathBuf};

use crate::steam::{Platform, image_path, launch_command};

#[test]
fn launch_command_depends_on_platform() {
	assert_eq!(launch_command(Platform::Windows, "10"), "steam://run/10");
	assert_eq!(launch_command(Platform::Linux, "10"), "steam://rungameid/10");
	assert_eq!(launch_command(Platform::MacOs, "10"), "steam://rungameid/10");
}

#[test]
fn image_path_uses_per_app_folder_only_on_windows() {
	let root = Path::new("steam");
	let windows = PathBuf::from(image_path(Platform::Windows, root, "10"));
	let linux = PathBuf::from(image_path(Platform::Linux, root, "10"));

	assert_eq!(windows, root.join("appcache").join("librarycache").join("10").join("library_600x900.jpg"));
	assert_eq!(linux, root.join("appcache").join("librarycache").join("10_library_600x900.jpg"));
}

#[test]
fn default_paths_follow_home_except_on_windows() {
	let home = Path::new("/home/user");
	assert_eq!(Platform::Linux.default_steam_path(home), home.join(".steam").join("steam"));
	assert_eq!(
		Platform::MacOs.default_steam_path(home),
		home.join("Library").join("Application Support").join("Steam")
	);
	assert_eq!(Platform::Windows.default_steam_path(home), PathBuf::from(r"C:\Program Files (x86)\Steam"));
}
