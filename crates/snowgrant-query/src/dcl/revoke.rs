//! REVOKE statement builder

use super::grant::validate_target;
use super::{ObjectType, Privilege};
use crate::types::QualifiedName;

/// REVOKE statement builder
///
/// # Examples
///
/// ```
/// use snowgrant_query::dcl::{RevokeStatement, ObjectType, Privilege};
///
/// let stmt = RevokeStatement::new()
///     .privilege(Privilege::new("MONITOR"))
///     .on(ObjectType::ResourceMonitor, "WH_MONITOR")
///     .from("ANALYST");
///
/// assert!(stmt.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RevokeStatement {
	/// List of privileges to revoke
	pub privileges: Vec<Privilege>,
	/// Type of object
	pub object_type: ObjectType,
	/// Object name, absent for ACCOUNT
	pub object: Option<QualifiedName>,
	/// Roles losing the privileges
	pub roles: Vec<String>,
}

impl RevokeStatement {
	/// Create a new empty REVOKE statement
	pub fn new() -> Self {
		Self {
			privileges: Vec::new(),
			object_type: ObjectType::Account,
			object: None,
			roles: Vec::new(),
		}
	}

	/// Add a single privilege to revoke
	pub fn privilege(mut self, privilege: impl Into<Privilege>) -> Self {
		self.privileges.push(privilege.into());
		self
	}

	/// Set all privileges at once
	pub fn privileges(mut self, privileges: Vec<Privilege>) -> Self {
		self.privileges = privileges;
		self
	}

	/// Target a named object
	pub fn on(mut self, object_type: ObjectType, object: impl Into<QualifiedName>) -> Self {
		self.object_type = object_type;
		self.object = Some(object.into());
		self
	}

	/// Target the account itself
	pub fn on_account(mut self) -> Self {
		self.object_type = ObjectType::Account;
		self.object = None;
		self
	}

	/// Revoke from a role
	pub fn from<S: Into<String>>(mut self, role: S) -> Self {
		self.roles.push(role.into());
		self
	}

	/// Validate the REVOKE statement
	///
	/// Same rules as [`GrantStatement::validate`](super::GrantStatement::validate).
	pub fn validate(&self) -> Result<(), String> {
		validate_target(&self.privileges, self.object_type, self.object.as_ref())?;

		if self.roles.is_empty() {
			return Err("At least one role must be specified".to_string());
		}
		if self.roles.iter().any(|role| role.trim().is_empty()) {
			return Err("Role names must not be empty".to_string());
		}

		Ok(())
	}
}

impl Default for RevokeStatement {
	fn default() -> Self {
		Self::new()
	}
}
