//! Observed grant state

use std::collections::BTreeSet;
use std::fmt;

use snowgrant_query::dcl::Privilege;

use crate::executor::Row;

/// Lifecycle state of a grant, used to label log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantState {
	Absent,
	Creating,
	Present,
	Deleting,
}

impl fmt::Display for GrantState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			GrantState::Absent => "absent",
			GrantState::Creating => "creating",
			GrantState::Present => "present",
			GrantState::Deleting => "deleting",
		})
	}
}

/// A grant as last observed on the remote system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantRecord {
	pub resource_name: String,
	pub privilege: String,
	/// Roles that currently hold the privilege
	pub roles: BTreeSet<String>,
	pub grant_option: bool,
}

/// One row of `SHOW GRANTS` output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantRow {
	pub created_on: String,
	pub privilege: String,
	pub granted_on: String,
	pub name: String,
	pub granted_to: String,
	pub grantee_name: String,
	pub grant_option: bool,
	pub granted_by: String,
}

impl GrantRow {
	/// Parse a result row.
	///
	/// `privilege`, `granted_to` and `grantee_name` are required. Other
	/// columns default to empty, and `grant_option` to `false`.
	pub fn from_row(row: &Row) -> Result<Self, String> {
		let required = |column: &str| {
			row.get(column)
				.map(str::to_string)
				.ok_or_else(|| format!("missing column {column:?}"))
		};
		let optional = |column: &str| row.get(column).unwrap_or_default().to_string();

		let grant_option = match row.get("grant_option").map(str::trim) {
			None | Some("") => false,
			Some(value) if value.eq_ignore_ascii_case("true") => true,
			Some(value) if value.eq_ignore_ascii_case("false") => false,
			Some(value) => return Err(format!("invalid grant_option value {value:?}")),
		};

		Ok(Self {
			created_on: optional("created_on"),
			privilege: required("privilege")?,
			granted_on: optional("granted_on"),
			name: optional("name"),
			granted_to: required("granted_to")?,
			grantee_name: required("grantee_name")?,
			grant_option,
			granted_by: optional("granted_by"),
		})
	}

	/// Whether the grantee is a role, as opposed to a share or a user
	pub fn is_role_grant(&self) -> bool {
		self.granted_to.eq_ignore_ascii_case("ROLE")
	}

	/// Whether this row grants `privilege`.
	///
	/// With `wildcard` set, every privilege except OWNERSHIP matches.
	pub fn matches_privilege(&self, privilege: &str, wildcard: bool) -> bool {
		let row_privilege = Privilege::new(&self.privilege);
		if wildcard {
			!row_privilege.is_ownership()
		} else {
			row_privilege == Privilege::new(privilege)
		}
	}
}
