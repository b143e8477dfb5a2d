use std::path::{Path, PathBuf};

/// Host operating system family, which decides Steam's URL and cache layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
	/// Microsoft Windows.
	Windows,
	/// Apple macOS.
	MacOs,
	/// Linux and other Unix-likes.
	Linux,
}

impl Platform {
	/// Platform this binary was compiled for.
	pub fn current() -> Self {
		if cfg!(windows) {
			Self::Windows
		} else if cfg!(target_os = "macos") {
			Self::MacOs
		} else {
			Self::Linux
		}
	}

	/// Conventional Steam install location for this platform.
	pub fn default_steam_path(self, home: &Path) -> PathBuf {
		match self {
			Self::Windows => PathBuf::from(r"C:\Program Files (x86)\Steam"),
			Self::MacOs => home.join("Library").join("Application Support").join("Steam"),
			Self::Linux => home.join(".steam").join("steam"),
		}
	}
}

impl Default for Platform {
	fn default() -> Self {
		Self::current()
	}
}

/// Steam URL that launches an installed application.
pub fn launch_command(platform: Platform, app_id: &str) -> String {
	match platform {
		Platform::Windows => format!("steam://run/{app_id}"),
		Platform::MacOs | Platform::Linux => format!("steam://rungameid/{app_id}"),
	}
}

/// Cached library capsule image for an installed application.
pub fn image_path(platform: Platform, steam_root: &Path, app_id: &str) -> String {
	let cache = steam_root.join("appcache").join("librarycache");
	let path = match platform {
		Platform::Windows => cache.join(app_id).join("library_600x900.jpg"),
		Platform::MacOs | Platform::Linux => cache.join(format!("{app_id}_library_600x900.jpg")),
	};
	path.display().to_string()
}

#[cfg(test)]
mod tests;
