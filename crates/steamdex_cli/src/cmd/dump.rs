use std::path::PathBuf;

use steamdex::steam::{Result, ValueNode, parse_binary_vdf, parse_text_kv, parse_text_kv_nested};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long, value_enum, default_value = "auto")]
	pub format: DumpFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DumpFormat {
	/// Binary when the first byte is a type tag, nested text otherwise.
	Auto,
	/// Flat quoted-pair text parse, as used for manifests.
	Flat,
	/// Block-aware text parse.
	Nested,
	/// Binary VDF.
	Binary,
}

/// Decode a file and print its tree as JSON.
pub fn run(args: Args) -> Result<()> {
	let bytes = std::fs::read(&args.path)?;
	let tree = decode(&bytes, args.format)?;
	emit_json(&tree)?;
	Ok(())
}

pub(crate) fn decode(bytes: &[u8], format: DumpFormat) -> Result<ValueNode> {
	let format = match format {
		DumpFormat::Auto => detect(bytes),
		other => other,
	};
	tracing::debug!(?format, len = bytes.len(), "decoding file");

	match format {
		DumpFormat::Binary => parse_binary_vdf(bytes),
		DumpFormat::Flat => Ok(parse_text_kv(&String::from_utf8_lossy(bytes))),
		DumpFormat::Nested | DumpFormat::Auto => parse_text_kv_nested(&String::from_utf8_lossy(bytes)),
	}
}

fn detect(bytes: &[u8]) -> DumpFormat {
	match bytes.first() {
		Some(0x00..=0x08) => DumpFormat::Binary,
		_ => DumpFormat::Nested,
	}
}
