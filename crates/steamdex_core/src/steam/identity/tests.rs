use crate::steam::{STEAM_ID64_OFFSET, SteamError, UserIdentity, to_long_id};

#[test]
fn converts_short_ids_with_fixed_offset() {
	assert_eq!(to_long_id("0").expect("zero converts"), "76561197960265728");
	assert_eq!(to_long_id("5").expect("five converts"), "76561197960265733");
	assert_eq!(to_long_id("4294967295").expect("max account converts"), "76561202255233023");
}

#[test]
fn rejects_non_numeric_and_signed_input() {
	for value in ["", "abc", "-1", "+5", " 5", "1.0", "12a"] {
		let err = to_long_id(value).expect_err("invalid id should fail");
		assert!(matches!(err, SteamError::InvalidIdentifier { value: ref got } if got == value), "{value:?} gave {err:?}");
	}
}

#[test]
fn rejects_overflowing_input() {
	let near_max = (u64::MAX - STEAM_ID64_OFFSET + 1).to_string();
	assert!(matches!(to_long_id(&near_max), Err(SteamError::InvalidIdentifier { .. })));
	assert!(matches!(to_long_id("99999999999999999999"), Err(SteamError::InvalidIdentifier { .. })));
}

#[test]
fn identity_round_trips_between_forms() {
	let from_short = UserIdentity::from_short_id("0042").expect("short parses");
	assert_eq!(from_short.short_id, "42");
	assert_eq!(from_short.long_id, "76561197960265770");

	let from_long = UserIdentity::from_long_id(&from_short.long_id).expect("long parses");
	assert_eq!(from_long, from_short);
}

#[test]
fn long_id_below_offset_is_invalid() {
	assert!(matches!(UserIdentity::from_long_id("12345"), Err(SteamError::InvalidIdentifier { .. })));
}
