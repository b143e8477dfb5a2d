use serde::Serialize;

use crate::steam::{UserIdentity, ValueMap, ValueNode};

const UNKNOWN_USER: &str = "Unknown";

/// Local Steam account discovered under `userdata/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SteamUser {
	/// Account identifiers.
	#[serde(flatten)]
	pub identity: UserIdentity,
	/// `AccountName` from `loginusers.vdf`.
	pub account_name: Option<String>,
	/// `PersonaName` from `loginusers.vdf`.
	pub persona_name: Option<String>,
	/// Account name, else persona name, else `Unknown`.
	pub display_name: String,
	/// `MostRecent` flag from `loginusers.vdf`.
	pub most_recent: bool,
}

/// Pair `userdata` directory names with their `loginusers.vdf` entries.
///
/// Directories that are not account numbers are skipped. Output follows `user_dirs` order.
pub fn resolve_users(user_dirs: &[String], login_users: Option<&ValueNode>) -> Vec<SteamUser> {
	let entries = login_users.and_then(|tree| tree.as_map()?.get_loose("users")).and_then(ValueNode::as_map);

	let mut users = Vec::with_capacity(user_dirs.len());
	for dir in user_dirs {
		let identity = match UserIdentity::from_short_id(dir) {
			Ok(identity) => identity,
			Err(err) => {
				tracing::warn!(dir = %dir, error = %err, "userdata entry is not an account id, skipped");
				continue;
			}
		};

		let login = entries.and_then(|map| map.get(&identity.long_id)).and_then(ValueNode::as_map);
		if login.is_none() {
			tracing::debug!(long_id = %identity.long_id, "no loginusers entry for account");
		}

		let account_name = login.and_then(|map| non_empty(map, "AccountName"));
		let persona_name = login.and_then(|map| non_empty(map, "PersonaName"));
		let display_name = account_name
			.clone()
			.or_else(|| persona_name.clone())
			.unwrap_or_else(|| UNKNOWN_USER.to_owned());
		let most_recent = login
			.and_then(|map| map.get_loose("MostRecent"))
			.and_then(ValueNode::as_scalar)
			.and_then(|scalar| scalar.as_bool())
			.unwrap_or(false);

		users.push(SteamUser {
			identity,
			account_name,
			persona_name,
			display_name,
			most_recent,
		});
	}
	users
}

fn non_empty(map: &ValueMap, key: &str) -> Option<String> {
	map.get_loose(key)
		.and_then(ValueNode::as_str)
		.filter(|value| !value.is_empty())
		.map(str::to_owned)
}
