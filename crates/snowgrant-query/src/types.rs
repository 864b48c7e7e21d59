//! Object name types.
//!
//! Grantable objects are addressed by a dotted path (`DB`, `DB.SCHEMA`,
//! `DB.SCHEMA.TABLE`). A part may be wrapped in double quotes to carry a dot or a
//! quote character; inside quotes `""` stands for one `"`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing a [`QualifiedName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
	/// The name was empty.
	#[error("object name is empty")]
	Empty,

	/// A dot-separated part was empty (e.g. `DB..TABLE`).
	#[error("object name {0:?} contains an empty part")]
	EmptyPart(String),

	/// A quoted part was never closed.
	#[error("object name {0:?} has an unterminated quoted part")]
	UnterminatedQuote(String),

	/// Something other than `.` followed a closing quote.
	#[error("object name {name:?} has unexpected character {found:?} after a quoted part")]
	UnexpectedCharacter {
		/// The name being parsed.
		name: String,
		/// The offending character.
		found: char,
	},
}

/// A dotted object name, stored as its unquoted parts.
///
/// # Examples
///
/// ```
/// use snowgrant_query::QualifiedName;
///
/// let name = QualifiedName::parse("ANALYTICS.PUBLIC").unwrap();
/// assert_eq!(name.parts(), &["ANALYTICS".to_string(), "PUBLIC".to_string()]);
///
/// let quoted = QualifiedName::parse(r#""my.db".PUBLIC"#).unwrap();
/// assert_eq!(quoted.parts()[0], "my.db");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
	parts: Vec<String>,
}

impl QualifiedName {
	/// Parse a dotted name, honouring double-quoted parts.
	pub fn parse(name: &str) -> Result<Self, NameError> {
		if name.is_empty() {
			return Err(NameError::Empty);
		}

		let mut parts = Vec::new();
		let mut chars = name.chars().peekable();

		loop {
			let mut part = String::new();

			if chars.peek() == Some(&'"') {
				chars.next();
				let mut closed = false;
				while let Some(c) = chars.next() {
					if c == '"' {
						if chars.peek() == Some(&'"') {
							chars.next();
							part.push('"');
						} else {
							closed = true;
							break;
						}
					} else {
						part.push(c);
					}
				}
				if !closed {
					return Err(NameError::UnterminatedQuote(name.to_string()));
				}
				match chars.peek() {
					None | Some('.') => {}
					Some(&found) => {
						return Err(NameError::UnexpectedCharacter {
							name: name.to_string(),
							found,
						});
					}
				}
			} else {
				while let Some(&c) = chars.peek() {
					if c == '.' {
						break;
					}
					part.push(c);
					chars.next();
				}
			}

			if part.is_empty() {
				return Err(NameError::EmptyPart(name.to_string()));
			}
			parts.push(part);

			match chars.next() {
				Some('.') => continue,
				_ => break,
			}
		}

		Ok(Self { parts })
	}

	/// Build a name from already-unquoted parts.
	pub fn from_parts<I, S>(parts: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			parts: parts.into_iter().map(Into::into).collect(),
		}
	}

	/// The unquoted parts of this name.
	pub fn parts(&self) -> &[String] {
		&self.parts
	}

	/// The final part (the object's own name).
	pub fn object_name(&self) -> Option<&str> {
		self.parts.last().map(String::as_str)
	}
}

impl From<&str> for QualifiedName {
	/// Lenient conversion: a name that does not parse is kept as a single part.
	fn from(name: &str) -> Self {
		Self::parse(name).unwrap_or_else(|_| Self::from_parts([name]))
	}
}

impl fmt::Display for QualifiedName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, part) in self.parts.iter().enumerate() {
			if i > 0 {
				f.write_str(".")?;
			}
			if part.contains(['.', '"']) {
				write!(f, "\"{}\"", part.replace('"', "\"\""))?;
			} else {
				f.write_str(part)?;
			}
		}
		Ok(())
	}
}
