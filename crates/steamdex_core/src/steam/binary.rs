use crate::steam::bytes::Cursor;
use crate::steam::{Result, Scalar, SteamError, ValueMap, ValueNode};

const TAG_MAP: u8 = 0x00;
const TAG_STRING: u8 = 0x01;
const TAG_INT32: u8 = 0x02;
const TAG_FLOAT32: u8 = 0x03;
const TAG_POINTER: u8 = 0x04;
const TAG_WSTRING: u8 = 0x05;
const TAG_COLOR: u8 = 0x06;
const TAG_UINT64: u8 = 0x07;
const TAG_END: u8 = 0x08;
const TAG_INT64: u8 = 0x0a;

/// Decode a binary VDF buffer into its root map.
///
/// The root entry sequence must be closed by its own end marker; trailing bytes after
/// it are ignored. Nesting is tracked on an explicit stack.
pub fn parse_binary_vdf(bytes: &[u8]) -> Result<ValueNode> {
	let mut cursor = Cursor::new(bytes);
	let mut stack: Vec<(Box<str>, ValueMap)> = Vec::new();
	let mut current = ValueMap::new();

	loop {
		let at = cursor.pos();
		let tag = cursor.read_u8()?;
		if tag == TAG_END {
			match stack.pop() {
				Some((key, mut parent)) => {
					parent.insert(key, ValueNode::Map(current));
					current = parent;
					continue;
				}
				None => return Ok(ValueNode::Map(current)),
			}
		}

		if !is_known_tag(tag) {
			return Err(SteamError::UnsupportedTag { tag, at });
		}

		let key = read_string(&mut cursor)?;
		if tag == TAG_MAP {
			stack.push((key, std::mem::take(&mut current)));
			continue;
		}

		let value = read_scalar(&mut cursor, tag, at)?;
		current.insert(key, ValueNode::Scalar(value));
	}
}

fn is_known_tag(tag: u8) -> bool {
	matches!(
		tag,
		TAG_MAP | TAG_STRING | TAG_INT32 | TAG_FLOAT32 | TAG_POINTER | TAG_WSTRING | TAG_COLOR | TAG_UINT64 | TAG_INT64
	)
}

fn read_scalar(cursor: &mut Cursor<'_>, tag: u8, at: usize) -> Result<Scalar> {
	Ok(match tag {
		TAG_STRING => Scalar::String(read_string(cursor)?),
		TAG_INT32 => Scalar::Int32(cursor.read_i32_le()?),
		TAG_FLOAT32 => Scalar::Float32(cursor.read_f32_le()?),
		TAG_POINTER => Scalar::Pointer(cursor.read_u32_le()?),
		TAG_WSTRING => Scalar::WString(String::from_utf16_lossy(&cursor.read_wide_cstring()?).into_boxed_str()),
		TAG_COLOR => Scalar::Color(cursor.read_u32_le()?),
		TAG_UINT64 => Scalar::UInt64(cursor.read_u64_le()?),
		TAG_INT64 => Scalar::Int64(cursor.read_i64_le()?),
		other => return Err(SteamError::UnsupportedTag { tag: other, at }),
	})
}

fn read_string(cursor: &mut Cursor<'_>) -> Result<Box<str>> {
	let bytes = cursor.read_cstring_bytes()?;
	Ok(String::from_utf8_lossy(bytes).into_owned().into_boxed_str())
}
