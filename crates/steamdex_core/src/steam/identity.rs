use serde::Serialize;

use crate::steam::{Result, SteamError};

/// Fixed offset between a SteamID3 account number and its SteamID64 form.
pub const STEAM_ID64_OFFSET: u64 = 76_561_197_960_265_728;

/// Convert a SteamID3 account number to its SteamID64 decimal form.
pub fn to_long_id(short_id: &str) -> Result<String> {
	let short = parse_id(short_id)?;
	let long = short.checked_add(STEAM_ID64_OFFSET).ok_or_else(|| invalid(short_id))?;
	Ok(long.to_string())
}

/// Both encodings of one Steam account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UserIdentity {
	/// SteamID3 account number, as used for `userdata/<id>` directories.
	pub short_id: String,
	/// SteamID64, as used for `loginusers.vdf` keys.
	pub long_id: String,
}

impl UserIdentity {
	/// Build from a SteamID3 account number.
	pub fn from_short_id(short_id: &str) -> Result<Self> {
		let long_id = to_long_id(short_id)?;
		Ok(Self {
			short_id: parse_id(short_id)?.to_string(),
			long_id,
		})
	}

	/// Build from a SteamID64; values below the offset are rejected.
	pub fn from_long_id(long_id: &str) -> Result<Self> {
		let long = parse_id(long_id)?;
		let short = long.checked_sub(STEAM_ID64_OFFSET).ok_or_else(|| invalid(long_id))?;
		Ok(Self {
			short_id: short.to_string(),
			long_id: long.to_string(),
		})
	}
}

fn parse_id(value: &str) -> Result<u64> {
	if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
		return Err(invalid(value));
	}
	value.parse::<u64>().map_err(|_| invalid(value))
}

fn invalid(value: &str) -> SteamError {
	SteamError::InvalidIdentifier { value: value.to_owned() }
}

#[cfg(test)]
mod tests;
