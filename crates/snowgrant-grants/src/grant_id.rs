//! Grant identity codec
//!
//! A grant is persisted locally as one opaque string:
//!
//! ```text
//! <resource name>|<privilege>|<true|false>[|<role>]*
//! ```
//!
//! Inside a field `\` is written `\\` and `|` is written `\|`. A resource name
//! that starts with `!` is written with a leading `\!`, because an unescaped
//! `!` at the very start of an ID opens a versioned envelope
//! (`!<version>|<fields>`). Only version 1 exists; it is emitted bare, and
//! `!1|...` is accepted as an equivalent spelling.
//!
//! An ID without roles is globally scoped. It tracks no role of its own, so
//! reads report an empty role set and deletes revoke nothing.

use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::{GrantError, GrantResult};

const SEPARATOR: char = '|';
const ESCAPE: char = '\\';
const VERSION_MARKER: char = '!';
const CURRENT_VERSION: &str = "1";

/// Decoded identity of one grant.
///
/// # Examples
///
/// ```
/// use snowgrant_grants::grant_id::GrantId;
///
/// let id = GrantId::new("WH_MONITOR", "MONITOR", false).with_roles(["ANALYST"]);
/// let encoded = id.encode().unwrap();
/// assert_eq!(encoded, "WH_MONITOR|MONITOR|false|ANALYST");
/// assert_eq!(GrantId::decode(&encoded).unwrap(), id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GrantId {
	resource_name: String,
	privilege: String,
	grant_option: bool,
	roles: BTreeSet<String>,
}

impl GrantId {
	/// Globally scoped identity with no roles.
	pub fn new(
		resource_name: impl Into<String>,
		privilege: impl Into<String>,
		grant_option: bool,
	) -> Self {
		Self {
			resource_name: resource_name.into(),
			privilege: privilege.into(),
			grant_option,
			roles: BTreeSet::new(),
		}
	}

	/// Replace the role list.
	pub fn with_roles<I, S>(mut self, roles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.roles = roles.into_iter().map(Into::into).collect();
		self
	}

	pub fn resource_name(&self) -> &str {
		&self.resource_name
	}

	pub fn privilege(&self) -> &str {
		&self.privilege
	}

	pub fn grant_option(&self) -> bool {
		self.grant_option
	}

	pub fn roles(&self) -> &BTreeSet<String> {
		&self.roles
	}

	/// Whether the ID names its roles, as opposed to being globally scoped.
	pub fn is_role_enumerated(&self) -> bool {
		!self.roles.is_empty()
	}

	/// Encode into the persisted string form.
	///
	/// Roles are written in sorted order, so equal identities always encode
	/// to the same string.
	pub fn encode(&self) -> GrantResult<String> {
		check_field("resource_name", &self.resource_name)?;
		check_field("privilege", &self.privilege)?;
		for role in &self.roles {
			check_field("role", role)?;
		}

		let mut out = String::new();
		if self.resource_name.starts_with(VERSION_MARKER) {
			out.push(ESCAPE);
		}
		push_escaped(&mut out, &self.resource_name);
		out.push(SEPARATOR);
		push_escaped(&mut out, &self.privilege);
		out.push(SEPARATOR);
		out.push_str(if self.grant_option { "true" } else { "false" });
		for role in &self.roles {
			out.push(SEPARATOR);
			push_escaped(&mut out, role);
		}
		Ok(out)
	}

	/// Decode a persisted string.
	pub fn decode(id: &str) -> GrantResult<Self> {
		let payload = match id.strip_prefix(VERSION_MARKER) {
			Some(envelope) => {
				let (version, rest) = envelope
					.split_once(SEPARATOR)
					.ok_or_else(|| GrantError::malformed(id, "version marker without fields"))?;
				if version != CURRENT_VERSION {
					return Err(GrantError::malformed(
						id,
						format!("unsupported grant ID version {version:?}"),
					));
				}
				if rest.starts_with(VERSION_MARKER) {
					return Err(GrantError::malformed(id, "nested version marker"));
				}
				rest
			}
			None => id,
		};

		let fields = split_fields(id, payload)?;
		if fields.len() < 3 {
			return Err(GrantError::malformed(
				id,
				format!("expected at least 3 fields, found {}", fields.len()),
			));
		}

		let mut fields = fields.into_iter();
		let resource_name = non_empty(id, "resource name", fields.next())?;
		let privilege = non_empty(id, "privilege", fields.next())?;
		let grant_option = match fields.next().unwrap_or_default().as_str() {
			"true" => true,
			"false" => false,
			other => {
				return Err(GrantError::malformed(
					id,
					format!("grant option must be true or false, found {other:?}"),
				));
			}
		};

		let mut roles = BTreeSet::new();
		for role in fields {
			if role.is_empty() {
				return Err(GrantError::malformed(id, "empty role"));
			}
			if !roles.insert(role.clone()) {
				return Err(GrantError::malformed(id, format!("duplicate role {role:?}")));
			}
		}

		Ok(Self {
			resource_name,
			privilege,
			grant_option,
			roles,
		})
	}
}

impl FromStr for GrantId {
	type Err = GrantError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::decode(s)
	}
}

fn check_field(field: &'static str, value: &str) -> GrantResult<()> {
	if value.is_empty() {
		return Err(GrantError::encoding(field, "must not be empty"));
	}
	if let Some(c) = value.chars().find(|c| c.is_control()) {
		return Err(GrantError::encoding(
			field,
			format!("contains control character {c:?}"),
		));
	}
	Ok(())
}

fn push_escaped(out: &mut String, value: &str) {
	for c in value.chars() {
		if c == ESCAPE || c == SEPARATOR {
			out.push(ESCAPE);
		}
		out.push(c);
	}
}

fn split_fields(id: &str, payload: &str) -> GrantResult<Vec<String>> {
	let mut fields = Vec::new();
	let mut current = String::new();
	let mut chars = payload.chars();
	let mut at_start = true;

	while let Some(c) = chars.next() {
		match c {
			ESCAPE => match chars.next() {
				Some(escaped @ (ESCAPE | SEPARATOR)) => current.push(escaped),
				// `\!` only guards the first character of the ID
				Some(VERSION_MARKER) if at_start => current.push(VERSION_MARKER),
				Some(other) => {
					return Err(GrantError::malformed(
						id,
						format!("unknown escape sequence \\{other}"),
					));
				}
				None => return Err(GrantError::malformed(id, "dangling escape at end of ID")),
			},
			SEPARATOR => fields.push(std::mem::take(&mut current)),
			other => current.push(other),
		}
		at_start = false;
	}
	fields.push(current);
	Ok(fields)
}

fn non_empty(id: &str, what: &str, field: Option<String>) -> GrantResult<String> {
	match field {
		Some(value) if !value.is_empty() => Ok(value),
		_ => Err(GrantError::malformed(id, format!("empty {what}"))),
	}
}
