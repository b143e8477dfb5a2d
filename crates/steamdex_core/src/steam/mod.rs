mod binary;
mod bytes;
mod catalog;
mod error;
mod format;
mod identity;
mod library;
mod record;
mod text;
mod users;
mod value;

/// Binary VDF decoding entry point.
pub use binary::parse_binary_vdf;
/// Catalog merge entry point and options.
pub use catalog::{CatalogOptions, LOCAL_CONFIG_APPS_PATH, Manifest, build_catalog};
/// Error and result aliases.
pub use error::{Result, SteamError};
/// Platform-dependent launch command and image path templating.
pub use format::{Platform, image_path, launch_command};
/// SteamID3/SteamID64 conversion.
pub use identity::{STEAM_ID64_OFFSET, UserIdentity, to_long_id};
/// Filesystem-backed Steam directory reader.
pub use library::{Catalog, Diagnostic, SteamLibrary};
/// Merged catalog record types.
pub use record::{CatalogRecord, RecordKind, Source, Sourced};
/// Text KeyValues decoding entry points.
pub use text::{parse_text_kv, parse_text_kv_nested};
/// Login user resolution.
pub use users::{SteamUser, resolve_users};
/// Decoded KeyValues tree types.
pub use value::{SERIALIZE_DEPTH_LIMIT, Scalar, ValueMap, ValueNode};
