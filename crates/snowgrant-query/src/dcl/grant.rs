//! GRANT statement builder

use super::{ObjectType, Privilege};
use crate::types::QualifiedName;

/// GRANT statement builder
///
/// This struct provides a fluent API for building GRANT statements.
///
/// # Examples
///
/// ```
/// use snowgrant_query::dcl::{GrantStatement, ObjectType, Privilege};
///
/// let stmt = GrantStatement::new()
///     .privilege(Privilege::new("USAGE"))
///     .on(ObjectType::Warehouse, "LOADING")
///     .to("ETL")
///     .with_grant_option(true);
///
/// assert!(stmt.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GrantStatement {
	/// List of privileges to grant
	pub privileges: Vec<Privilege>,
	/// Type of object (WAREHOUSE, SCHEMA, etc.)
	pub object_type: ObjectType,
	/// Object name, absent for ACCOUNT
	pub object: Option<QualifiedName>,
	/// Roles receiving the privileges
	pub roles: Vec<String>,
	/// WITH GRANT OPTION flag
	pub with_grant_option: bool,
}

impl GrantStatement {
	/// Create a new empty GRANT statement
	pub fn new() -> Self {
		Self {
			privileges: Vec::new(),
			object_type: ObjectType::Account,
			object: None,
			roles: Vec::new(),
			with_grant_option: false,
		}
	}

	/// Add a single privilege to grant
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

	/// Add a role grantee
	pub fn to<S: Into<String>>(mut self, role: S) -> Self {
		self.roles.push(role.into());
		self
	}

	/// Set WITH GRANT OPTION flag
	pub fn with_grant_option(mut self, flag: bool) -> Self {
		self.with_grant_option = flag;
		self
	}

	/// Validate the GRANT statement
	///
	/// # Validation Rules
	///
	/// 1. At least one privilege must be specified, none of them empty
	/// 2. Named object types require an object, ACCOUNT forbids one
	/// 3. At least one role must be specified, none of them empty
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

impl Default for GrantStatement {
	fn default() -> Self {
		Self::new()
	}
}

/// Checks shared by GRANT and REVOKE.
pub(super) fn validate_target(
	privileges: &[Privilege],
	object_type: ObjectType,
	object: Option<&QualifiedName>,
) -> Result<(), String> {
	if privileges.is_empty() {
		return Err("At least one privilege must be specified".to_string());
	}
	if privileges.iter().any(Privilege::is_empty) {
		return Err("Privileges must not be empty".to_string());
	}

	match (object_type.is_named(), object) {
		(true, None) => Err(format!(
			"An object name is required for object type {}",
			object_type.as_sql()
		)),
		(false, Some(_)) => Err(format!(
			"Object type {} does not take an object name",
			object_type.as_sql()
		)),
		_ => Ok(()),
	}
}
