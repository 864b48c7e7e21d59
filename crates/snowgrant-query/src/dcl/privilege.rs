//! Privilege tokens for GRANT and REVOKE statements

use std::fmt;

use serde::{Deserialize, Serialize};

/// A privilege token such as `USAGE`, `MONITOR` or `CREATE SCHEMA`.
///
/// Snowflake defines dozens of privileges per object type, so a privilege is a
/// normalized token rather than a closed enum. Tokens are trimmed and
/// upper-cased; runs of whitespace collapse to a single space.
///
/// # Examples
///
/// ```
/// use snowgrant_query::dcl::Privilege;
///
/// let privilege = Privilege::new("create  schema");
/// assert_eq!(privilege.as_str(), "CREATE SCHEMA");
/// assert_eq!(Privilege::all().as_sql(), "ALL PRIVILEGES");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Privilege(String);

impl Privilege {
	/// Token for the `ALL [PRIVILEGES]` wildcard
	pub const ALL: &'static str = "ALL";
	/// Token for the `OWNERSHIP` privilege
	pub const OWNERSHIP: &'static str = "OWNERSHIP";

	/// Create a privilege from a token, normalizing case and spacing
	pub fn new(token: impl AsRef<str>) -> Self {
		let normalized = token
			.as_ref()
			.split_whitespace()
			.collect::<Vec<_>>()
			.join(" ")
			.to_uppercase();

		if normalized == "ALL PRIVILEGES" {
			Self(Self::ALL.to_string())
		} else {
			Self(normalized)
		}
	}

	/// The `ALL PRIVILEGES` wildcard
	pub fn all() -> Self {
		Self(Self::ALL.to_string())
	}

	/// The normalized token
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Whether this is the `ALL` wildcard
	pub fn is_all(&self) -> bool {
		self.0 == Self::ALL
	}

	/// Whether this is the `OWNERSHIP` privilege
	pub fn is_ownership(&self) -> bool {
		self.0 == Self::OWNERSHIP
	}

	/// Whether the token is empty after normalization
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns the SQL keyword(s) for this privilege
	pub fn as_sql(&self) -> &str {
		if self.is_all() {
			"ALL PRIVILEGES"
		} else {
			&self.0
		}
	}
}

impl fmt::Display for Privilege {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<String> for Privilege {
	fn from(token: String) -> Self {
		Self::new(token)
	}
}

impl From<&str> for Privilege {
	fn from(token: &str) -> Self {
		Self::new(token)
	}
}

impl From<Privilege> for String {
	fn from(privilege: Privilege) -> Self {
		privilege.0
	}
}
