//! Grantable object types

use serde::{Deserialize, Serialize};

/// Object types that can be the target of GRANT, REVOKE and SHOW GRANTS.
///
/// # Examples
///
/// ```
/// use snowgrant_query::dcl::ObjectType;
///
/// assert_eq!(ObjectType::ResourceMonitor.as_sql(), "RESOURCE MONITOR");
/// assert!(!ObjectType::Account.is_named());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ObjectType {
	/// The account itself (account-level privileges)
	Account,
	/// Databases
	Database,
	/// Schemas within a database
	Schema,
	/// Virtual warehouses
	Warehouse,
	/// Resource monitors
	ResourceMonitor,
	/// Integrations (storage, API, notification, security)
	Integration,
	/// Tables within a schema
	Table,
	/// Views within a schema
	View,
}

impl ObjectType {
	/// Returns the SQL keyword for this object type
	pub fn as_sql(&self) -> &'static str {
		match self {
			ObjectType::Account => "ACCOUNT",
			ObjectType::Database => "DATABASE",
			ObjectType::Schema => "SCHEMA",
			ObjectType::Warehouse => "WAREHOUSE",
			ObjectType::ResourceMonitor => "RESOURCE MONITOR",
			ObjectType::Integration => "INTEGRATION",
			ObjectType::Table => "TABLE",
			ObjectType::View => "VIEW",
		}
	}

	/// Whether statements on this object type carry an object name.
	///
	/// `ACCOUNT` is the only type addressed without one.
	pub fn is_named(&self) -> bool {
		!matches!(self, ObjectType::Account)
	}

	/// Number of dotted name parts a fully qualified name has for this type.
	///
	/// Returns `0` for `ACCOUNT`.
	///
	/// # Examples
	///
	/// ```
	/// use snowgrant_query::dcl::ObjectType;
	///
	/// assert_eq!(ObjectType::Warehouse.name_depth(), 1);
	/// assert_eq!(ObjectType::Schema.name_depth(), 2);
	/// assert_eq!(ObjectType::Table.name_depth(), 3);
	/// ```
	pub fn name_depth(&self) -> usize {
		match self {
			ObjectType::Account => 0,
			ObjectType::Database
			| ObjectType::Warehouse
			| ObjectType::ResourceMonitor
			| ObjectType::Integration => 1,
			ObjectType::Schema => 2,
			ObjectType::Table | ObjectType::View => 3,
		}
	}
}
