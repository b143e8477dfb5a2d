use std::collections::HashMap;
use std::fmt;

use serde::ser::{Error as _, Serialize, SerializeMap, Serializer};

/// Deepest map nesting [`ValueMap`] serializes before failing with an encoder error.
pub const SERIALIZE_DEPTH_LIMIT: usize = 256;

/// Leaf value decoded from text or binary KeyValues.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	/// Byte string, lossily decoded as UTF-8.
	String(Box<str>),
	/// Signed 32-bit integer. Binary booleans are stored this way.
	Int32(i32),
	/// Signed 64-bit integer.
	Int64(i64),
	/// Unsigned 64-bit integer.
	UInt64(u64),
	/// 32-bit float.
	Float32(f32),
	/// UTF-16 string.
	WString(Box<str>),
	/// 32-bit pointer value.
	Pointer(u32),
	/// Packed RGBA color.
	Color(u32),
}

impl Scalar {
	/// Return string content for `String`/`WString` leaves.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) | Self::WString(value) => Some(value.as_ref()),
			_ => None,
		}
	}

	/// Interpret `0`/`1` integers and `"0"`/`"1"`/`"false"`/`"true"` strings as booleans.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Int32(0) => Some(false),
			Self::Int32(1) => Some(true),
			Self::String(value) | Self::WString(value) => match value.as_ref() {
				"0" | "false" => Some(false),
				"1" | "true" => Some(true),
				_ => None,
			},
			_ => None,
		}
	}
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::String(value) | Self::WString(value) => f.write_str(value),
			Self::Int32(value) => write!(f, "{value}"),
			Self::Int64(value) => write!(f, "{value}"),
			Self::UInt64(value) => write!(f, "{value}"),
			Self::Float32(value) => write!(f, "{value}"),
			Self::Pointer(value) | Self::Color(value) => write!(f, "{value}"),
		}
	}
}

/// Node of a decoded KeyValues tree.
#[derive(Debug, Clone)]
pub enum ValueNode {
	/// Typed leaf.
	Scalar(Scalar),
	/// Nested ordered mapping.
	Map(ValueMap),
}

impl ValueNode {
	/// Look up a direct child when this node is a map.
	pub fn get(&self, key: &str) -> Option<&ValueNode> {
		self.as_map().and_then(|map| map.get(key))
	}

	/// Follow a sequence of map keys from this node.
	pub fn get_path(&self, path: &[&str]) -> Option<&ValueNode> {
		path.iter().try_fold(self, |node, key| node.get(key))
	}

	/// Borrow the map when this node is a map.
	pub fn as_map(&self) -> Option<&ValueMap> {
		match self {
			Self::Map(map) => Some(map),
			Self::Scalar(_) => None,
		}
	}

	/// Borrow the leaf when this node is a scalar.
	pub fn as_scalar(&self) -> Option<&Scalar> {
		match self {
			Self::Scalar(scalar) => Some(scalar),
			Self::Map(_) => None,
		}
	}

	/// Borrow string content when this node is a string leaf.
	pub fn as_str(&self) -> Option<&str> {
		self.as_scalar().and_then(Scalar::as_str)
	}
}

/// Ordered string-keyed mapping with last-write-wins inserts.
///
/// A repeated key keeps the slot where it was first seen and takes the newer value.
#[derive(Debug, Default)]
pub struct ValueMap {
	entries: Vec<(Box<str>, ValueNode)>,
	index: HashMap<Box<str>, usize>,
}

impl ValueMap {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	pub(crate) fn insert(&mut self, key: Box<str>, value: ValueNode) {
		if let Some(&slot) = self.index.get(&key) {
			self.entries[slot].1 = value;
			return;
		}
		self.index.insert(key.clone(), self.entries.len());
		self.entries.push((key, value));
	}

	/// Look up a child by exact key.
	pub fn get(&self, key: &str) -> Option<&ValueNode> {
		self.index.get(key).map(|&slot| &self.entries[slot].1)
	}

	/// Look up a child by exact key, falling back to an ASCII case-insensitive match.
	pub fn get_loose(&self, key: &str) -> Option<&ValueNode> {
		self.get(key).or_else(|| {
			self.entries
				.iter()
				.find(|(name, _)| name.eq_ignore_ascii_case(key))
				.map(|(_, value)| value)
		})
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueNode)> {
		self.entries.iter().map(|(key, value)| (key.as_ref(), value))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(key, _)| key.as_ref())
	}

	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Drop for ValueMap {
	fn drop(&mut self) {
		// Children are detached onto a heap stack so deep trees never drop recursively.
		let mut pending: Vec<ValueMap> = Vec::new();
		detach_children(self, &mut pending);
		while let Some(mut map) = pending.pop() {
			detach_children(&mut map, &mut pending);
		}
	}
}

fn detach_children(map: &mut ValueMap, pending: &mut Vec<ValueMap>) {
	map.index.clear();
	for (_, value) in map.entries.drain(..) {
		if let ValueNode::Map(child) = value {
			pending.push(child);
		}
	}
}

impl Clone for ValueMap {
	fn clone(&self) -> Self {
		// Frames hold the source map, the next entry to copy and the copy built so far.
		let mut stack: Vec<(&ValueMap, usize, ValueMap)> = vec![(self, 0, ValueMap::new())];
		loop {
			let Some(top) = stack.last_mut() else {
				return ValueMap::new();
			};
			let src = top.0;
			if let Some((key, value)) = src.entries.get(top.1) {
				match value {
					ValueNode::Scalar(scalar) => {
						top.2.insert(key.clone(), ValueNode::Scalar(scalar.clone()));
						top.1 += 1;
					}
					ValueNode::Map(child) => stack.push((child, 0, ValueMap::new())),
				}
				continue;
			}

			let Some((_, _, done)) = stack.pop() else {
				return ValueMap::new();
			};
			match stack.last_mut() {
				Some(parent) => {
					let key = parent.0.entries[parent.1].0.clone();
					parent.2.insert(key, ValueNode::Map(done));
					parent.1 += 1;
				}
				None => return done,
			}
		}
	}
}

impl PartialEq for ValueMap {
	fn eq(&self, other: &Self) -> bool {
		let mut pending: Vec<(&ValueMap, &ValueMap)> = vec![(self, other)];
		while let Some((left, right)) = pending.pop() {
			if left.entries.len() != right.entries.len() {
				return false;
			}
			for ((left_key, left_value), (right_key, right_value)) in left.entries.iter().zip(&right.entries) {
				if left_key != right_key {
					return false;
				}
				match (left_value, right_value) {
					(ValueNode::Scalar(a), ValueNode::Scalar(b)) if a == b => {}
					(ValueNode::Map(a), ValueNode::Map(b)) => pending.push((a, b)),
					_ => return false,
				}
			}
		}
		true
	}
}

impl PartialEq for ValueNode {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Scalar(a), Self::Scalar(b)) => a == b,
			(Self::Map(a), Self::Map(b)) => a == b,
			_ => false,
		}
	}
}

impl Serialize for Scalar {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::String(value) | Self::WString(value) => serializer.serialize_str(value),
			Self::Int32(value) => serializer.serialize_i32(*value),
			Self::Int64(value) => serializer.serialize_i64(*value),
			Self::UInt64(value) => serializer.serialize_u64(*value),
			Self::Float32(value) => serializer.serialize_f32(*value),
			Self::Pointer(value) | Self::Color(value) => serializer.serialize_u32(*value),
		}
	}
}

/// Serializer recursion follows nesting, so depth is capped at [`SERIALIZE_DEPTH_LIMIT`].
struct Nested<'a> {
	map: &'a ValueMap,
	depth: usize,
}

impl Serialize for Nested<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		if self.depth > SERIALIZE_DEPTH_LIMIT {
			return Err(S::Error::custom(format!("tree nesting exceeds {SERIALIZE_DEPTH_LIMIT} levels")));
		}
		let mut map = serializer.serialize_map(Some(self.map.len()))?;
		for (key, value) in self.map.iter() {
			match value {
				ValueNode::Scalar(scalar) => map.serialize_entry(key, scalar)?,
				ValueNode::Map(child) => map.serialize_entry(
					key,
					&Nested {
						map: child,
						depth: self.depth + 1,
					},
				)?,
			}
		}
		map.end()
	}
}

impl Serialize for ValueMap {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		Nested { map: self, depth: 1 }.serialize(serializer)
	}
}

impl Serialize for ValueNode {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Scalar(scalar) => scalar.serialize(serializer),
			Self::Map(map) => map.serialize(serializer),
		}
	}
}

#[cfg(test)]
mod tests;
