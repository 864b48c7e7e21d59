//! SHOW GRANTS statement builder

use super::ObjectType;
use crate::types::QualifiedName;

/// SHOW GRANTS ON statement builder
///
/// # Examples
///
/// ```
/// use snowgrant_query::dcl::{ShowGrantsStatement, ObjectType};
///
/// let stmt = ShowGrantsStatement::new().on(ObjectType::Database, "ANALYTICS");
/// assert!(stmt.validate().is_ok());
///
/// let stmt = ShowGrantsStatement::new().on_account();
/// assert!(stmt.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ShowGrantsStatement {
	/// Type of object
	pub object_type: ObjectType,
	/// Object name, absent for ACCOUNT
	pub object: Option<QualifiedName>,
}

impl ShowGrantsStatement {
	/// Create a statement targeting the account
	pub fn new() -> Self {
		Self {
			object_type: ObjectType::Account,
			object: None,
		}
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

	/// Validate the object target
	pub fn validate(&self) -> Result<(), String> {
		match (self.object_type.is_named(), &self.object) {
			(true, None) => Err(format!(
				"An object name is required for object type {}",
				self.object_type.as_sql()
			)),
			(false, Some(_)) => Err(format!(
				"Object type {} does not take an object name",
				self.object_type.as_sql()
			)),
			_ => Ok(()),
		}
	}
}

impl Default for ShowGrantsStatement {
	fn default() -> Self {
		Self::new()
	}
}
