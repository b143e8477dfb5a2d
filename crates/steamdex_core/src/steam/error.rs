use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SteamError>;

/// Errors produced while reading and decoding Steam store files.
#[derive(Debug, Error)]
pub enum SteamError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Requested file or directory does not exist.
	#[error("not found: {}", .path.display())]
	NotFound {
		/// Missing path.
		path: PathBuf,
	},
	/// Binary entry started with a type tag outside the supported set.
	#[error("unsupported binary vdf tag 0x{tag:02x} at offset {at}")]
	UnsupportedTag {
		/// Offending tag byte.
		tag: u8,
		/// Byte offset of the tag.
		at: usize,
	},
	/// Not enough bytes remained for a required field or terminator.
	#[error("truncated input at offset {at}, need {need} bytes, remaining {rem}")]
	TruncatedInput {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Account identifier is not a non-negative decimal integer in range.
	#[error("invalid identifier: {value:?}")]
	InvalidIdentifier {
		/// User-provided identifier text.
		value: String,
	},
	/// Stray closing brace or unclosed block in nested text input.
	#[error("unbalanced braces at line {line}")]
	UnbalancedBraces {
		/// One-based line number.
		line: usize,
	},
	/// Key token without a following value or block.
	#[error("key without value at line {line}")]
	DanglingKey {
		/// One-based line number of the key.
		line: usize,
	},
	/// Output document could not be encoded.
	#[error("failed to encode output: {message}")]
	Encode {
		/// Encoder message.
		message: String,
	},
	/// Quoted string never closed.
	#[error("unterminated string starting at line {line}")]
	UnterminatedString {
		/// One-based line number where the string opened.
		line: usize,
	},
}
