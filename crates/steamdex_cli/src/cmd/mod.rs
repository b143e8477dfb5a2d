/// VDF/KeyValues file dump command.
pub mod dump;
/// Installed application and shortcut listing command.
pub mod games;
/// Identifier conversion command.
pub mod id;
/// Local account listing command.
pub mod users;
/// Shared CLI helpers.
pub mod util;
