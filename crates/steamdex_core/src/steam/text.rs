use std::sync::LazyLock;

use regex::Regex;

use crate::steam::{Result, Scalar, SteamError, ValueMap, ValueNode};

static PAIR_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)"\s+"([^"]+)""#).expect("pair pattern compiles"));

/// Decode text KeyValues into a flat map of every quoted key/value line.
///
/// Block structure is ignored: a line contributes iff it holds two quoted, non-empty
/// strings separated by whitespace. Later lines overwrite earlier keys. Manifest files
/// are flat in practice, so this never fails; see [`parse_text_kv_nested`] for files
/// whose nesting matters.
pub fn parse_text_kv(text: &str) -> ValueNode {
	let mut map = ValueMap::new();
	for line in text.split('\n') {
		if let Some(caps) = PAIR_LINE.captures(line) {
			map.insert(Box::from(&caps[1]), ValueNode::Scalar(Scalar::String(Box::from(&caps[2]))));
		}
	}
	ValueNode::Map(map)
}

/// Decode text KeyValues preserving nested blocks.
pub fn parse_text_kv_nested(text: &str) -> Result<ValueNode> {
	let mut tokens = Tokenizer::new(text);
	let mut stack: Vec<(Box<str>, ValueMap)> = Vec::new();
	let mut current = ValueMap::new();

	while let Some(token) = tokens.next_token()? {
		match token.kind {
			TokenKind::Open => return Err(SteamError::DanglingKey { line: token.line }),
			TokenKind::Close => {
				let Some((key, mut parent)) = stack.pop() else {
					return Err(SteamError::UnbalancedBraces { line: token.line });
				};
				parent.insert(key, ValueNode::Map(std::mem::take(&mut current)));
				current = parent;
			}
			TokenKind::Text(key) => {
				let Some(next) = tokens.next_token()? else {
					return Err(SteamError::DanglingKey { line: token.line });
				};
				match next.kind {
					TokenKind::Text(value) => current.insert(key, ValueNode::Scalar(Scalar::String(value))),
					TokenKind::Open => stack.push((key, std::mem::take(&mut current))),
					TokenKind::Close => return Err(SteamError::DanglingKey { line: token.line }),
				}
			}
		}
	}

	if !stack.is_empty() {
		return Err(SteamError::UnbalancedBraces { line: tokens.line });
	}
	Ok(ValueNode::Map(current))
}

struct Token {
	kind: TokenKind,
	line: usize,
}

enum TokenKind {
	Open,
	Close,
	Text(Box<str>),
}

struct Tokenizer<'a> {
	chars: std::iter::Peekable<std::str::Chars<'a>>,
	line: usize,
}

impl<'a> Tokenizer<'a> {
	fn new(text: &'a str) -> Self {
		Self {
			chars: text.chars().peekable(),
			line: 1,
		}
	}

	fn bump(&mut self) -> Option<char> {
		let ch = self.chars.next()?;
		if ch == '\n' {
			self.line += 1;
		}
		Some(ch)
	}

	fn next_token(&mut self) -> Result<Option<Token>> {
		loop {
			let Some(&ch) = self.chars.peek() else {
				return Ok(None);
			};
			let line = self.line;
			match ch {
				c if c.is_whitespace() || c == '\u{feff}' => {
					self.bump();
				}
				'{' => {
					self.bump();
					return Ok(Some(Token { kind: TokenKind::Open, line }));
				}
				'}' => {
					self.bump();
					return Ok(Some(Token { kind: TokenKind::Close, line }));
				}
				'"' => {
					self.bump();
					let text = self.quoted(line)?;
					return Ok(Some(Token {
						kind: TokenKind::Text(text),
						line,
					}));
				}
				'[' => self.skip_conditional(),
				'/' => {
					self.bump();
					if self.chars.peek() == Some(&'/') {
						self.skip_line();
					} else {
						let mut text = String::from('/');
						text.push_str(&self.bare());
						return Ok(Some(Token {
							kind: TokenKind::Text(text.into()),
							line,
						}));
					}
				}
				_ => {
					let text = self.bare();
					return Ok(Some(Token {
						kind: TokenKind::Text(text.into()),
						line,
					}));
				}
			}
		}
	}

	fn quoted(&mut self, line: usize) -> Result<Box<str>> {
		let mut out = String::new();
		loop {
			match self.bump() {
				None => return Err(SteamError::UnterminatedString { line }),
				Some('"') => return Ok(out.into()),
				Some('\\') => match self.bump() {
					None => return Err(SteamError::UnterminatedString { line }),
					Some('n') => out.push('\n'),
					Some('t') => out.push('\t'),
					Some('\\') => out.push('\\'),
					Some('"') => out.push('"'),
					Some(other) => {
						out.push('\\');
						out.push(other);
					}
				},
				Some(ch) => out.push(ch),
			}
		}
	}

	fn bare(&mut self) -> String {
		let mut out = String::new();
		while let Some(&ch) = self.chars.peek() {
			if ch.is_whitespace() || matches!(ch, '{' | '}' | '"') {
				break;
			}
			out.push(ch);
			self.bump();
		}
		out
	}

	fn skip_line(&mut self) {
		while let Some(ch) = self.bump() {
			if ch == '\n' {
				break;
			}
		}
	}

	fn skip_conditional(&mut self) {
		while let Some(ch) = self.bump() {
			if ch == ']' || ch == '\n' {
				break;
			}
		}
	}
}
