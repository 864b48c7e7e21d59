//! Resource-kind adapters
//!
//! Every grantable kind shares one lifecycle. A kind only contributes its
//! object type, the privileges it accepts and a statement builder; this
//! module describes that contract ([`ResourceKind`]), the concrete adapter
//! ([`GrantKind`]) and the registry of standard kinds ([`KindRegistry`]).

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use snowgrant_query::builder::{CurrentGrantBuilder, GrantBuilder};
use snowgrant_query::dcl::{ObjectType, Privilege};
use snowgrant_query::types::QualifiedName;

use crate::error::{GrantError, GrantResult};
use crate::privilege::PrivilegeSet;

/// What the grant protocol needs to know about one kind of resource.
pub trait ResourceKind: Send + Sync {
	/// Registry key, e.g. `resource_monitor`
	fn name(&self) -> &str;

	/// Object type used in statements
	fn object_type(&self) -> ObjectType;

	/// Privileges accepted for this kind
	fn privileges(&self) -> &PrivilegeSet;

	/// Privilege used when a request does not name one
	fn default_privilege(&self) -> &str;

	/// The wildcard privilege, when the kind accepts one
	fn all_privilege(&self) -> Option<&str> {
		self.privileges().canonical(Privilege::ALL)
	}

	/// This kind's spelling of `token`, after case and spacing normalization.
	///
	/// Anything outside [`privileges`](Self::privileges) is rejected with
	/// [`GrantError::InvalidPrivilege`].
	fn resolve_privilege(&self, token: &str) -> GrantResult<&str> {
		self.privileges()
			.canonical(Privilege::new(token).as_str())
			.ok_or_else(|| GrantError::InvalidPrivilege {
				kind: self.name().to_string(),
				privilege: token.to_string(),
				allowed: self.privileges().to_list(),
			})
	}

	/// Whether reads verify the grant option against remote rows
	fn verifies_grant_option(&self) -> bool;

	/// Statement builder for the named resource
	fn builder(&self, resource_name: &str) -> Box<dyn GrantBuilder>;
}

/// Table-driven [`ResourceKind`].
///
/// # Examples
///
/// ```
/// use snowgrant_grants::kinds::{GrantKind, ResourceKind};
///
/// let kind = GrantKind::resource_monitor();
/// assert_eq!(kind.name(), "resource_monitor");
/// assert_eq!(kind.default_privilege(), "MONITOR");
/// assert!(kind.privileges().contains("modify"));
/// ```
#[derive(Clone)]
pub struct GrantKind {
	name: String,
	object_type: ObjectType,
	privileges: PrivilegeSet,
	default_privilege: String,
	verifies_grant_option: bool,
}

impl GrantKind {
	/// Create a kind. Grant-option verification is off until enabled with
	/// [`GrantKind::verifying_grant_option`].
	pub fn new<I, S>(
		name: impl Into<String>,
		object_type: ObjectType,
		privileges: I,
		default_privilege: impl Into<String>,
	) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			name: name.into(),
			object_type,
			privileges: PrivilegeSet::new(privileges),
			default_privilege: default_privilege.into(),
			verifies_grant_option: false,
		}
	}

	pub fn verifying_grant_option(mut self, verify: bool) -> Self {
		self.verifies_grant_option = verify;
		self
	}

	pub fn account() -> Self {
		Self::new(
			"account",
			ObjectType::Account,
			[
				"CREATE ROLE",
				"CREATE USER",
				"CREATE WAREHOUSE",
				"CREATE DATABASE",
				"CREATE INTEGRATION",
				"CREATE SHARE",
				"CREATE NETWORK POLICY",
				"IMPORT SHARE",
				"OVERRIDE SHARE RESTRICTIONS",
				"EXECUTE TASK",
				"MANAGE GRANTS",
				"MONITOR EXECUTION",
				"MONITOR USAGE",
				"APPLY MASKING POLICY",
				"APPLY ROW ACCESS POLICY",
				"APPLY TAG",
			],
			"MONITOR USAGE",
		)
	}

	pub fn database() -> Self {
		Self::new(
			"database",
			ObjectType::Database,
			[
				"ALL",
				"CREATE SCHEMA",
				"IMPORTED PRIVILEGES",
				"MODIFY",
				"MONITOR",
				"OWNERSHIP",
				"REFERENCE_USAGE",
				"USAGE",
			],
			"USAGE",
		)
		.verifying_grant_option(true)
	}

	pub fn schema() -> Self {
		Self::new(
			"schema",
			ObjectType::Schema,
			[
				"ALL",
				"ADD SEARCH OPTIMIZATION",
				"CREATE EXTERNAL TABLE",
				"CREATE FILE FORMAT",
				"CREATE FUNCTION",
				"CREATE MASKING POLICY",
				"CREATE MATERIALIZED VIEW",
				"CREATE PIPE",
				"CREATE PROCEDURE",
				"CREATE ROW ACCESS POLICY",
				"CREATE SEQUENCE",
				"CREATE STAGE",
				"CREATE STREAM",
				"CREATE TABLE",
				"CREATE TAG",
				"CREATE TASK",
				"CREATE TEMPORARY TABLE",
				"CREATE VIEW",
				"MODIFY",
				"MONITOR",
				"OWNERSHIP",
				"USAGE",
			],
			"USAGE",
		)
		.verifying_grant_option(true)
	}

	pub fn warehouse() -> Self {
		Self::new(
			"warehouse",
			ObjectType::Warehouse,
			["ALL", "MODIFY", "MONITOR", "OPERATE", "OWNERSHIP", "USAGE"],
			"USAGE",
		)
		.verifying_grant_option(true)
	}

	pub fn resource_monitor() -> Self {
		Self::new(
			"resource_monitor",
			ObjectType::ResourceMonitor,
			["ALL", "MODIFY", "MONITOR"],
			"MONITOR",
		)
	}

	pub fn integration() -> Self {
		Self::new(
			"integration",
			ObjectType::Integration,
			["ALL", "OWNERSHIP", "USAGE"],
			"USAGE",
		)
	}

	pub fn table() -> Self {
		Self::new(
			"table",
			ObjectType::Table,
			[
				"ALL",
				"DELETE",
				"INSERT",
				"OWNERSHIP",
				"REFERENCES",
				"SELECT",
				"TRUNCATE",
				"UPDATE",
			],
			"SELECT",
		)
		.verifying_grant_option(true)
	}

	pub fn view() -> Self {
		Self::new(
			"view",
			ObjectType::View,
			["ALL", "OWNERSHIP", "REFERENCES", "SELECT"],
			"SELECT",
		)
		.verifying_grant_option(true)
	}
}

impl ResourceKind for GrantKind {
	fn name(&self) -> &str {
		&self.name
	}

	fn object_type(&self) -> ObjectType {
		self.object_type
	}

	fn privileges(&self) -> &PrivilegeSet {
		&self.privileges
	}

	fn default_privilege(&self) -> &str {
		&self.default_privilege
	}

	fn verifies_grant_option(&self) -> bool {
		self.verifies_grant_option
	}

	fn builder(&self, resource_name: &str) -> Box<dyn GrantBuilder> {
		if self.object_type.is_named() {
			Box::new(CurrentGrantBuilder::new(
				self.object_type,
				QualifiedName::from(resource_name),
			))
		} else {
			Box::new(CurrentGrantBuilder::account())
		}
	}
}

impl fmt::Debug for GrantKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GrantKind")
			.field("name", &self.name)
			.field("object_type", &self.object_type)
			.field("privileges", &self.privileges.len())
			.field("default_privilege", &self.default_privilege)
			.field("verifies_grant_option", &self.verifies_grant_option)
			.finish()
	}
}

/// Kinds keyed by name, in registration order.
#[derive(Clone, Default)]
pub struct KindRegistry {
	kinds: IndexMap<String, Arc<dyn ResourceKind>>,
}

impl KindRegistry {
	/// An empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry holding every built-in kind
	pub fn standard() -> Self {
		let mut registry = Self::new();
		for kind in [
			GrantKind::account(),
			GrantKind::database(),
			GrantKind::schema(),
			GrantKind::warehouse(),
			GrantKind::resource_monitor(),
			GrantKind::integration(),
			GrantKind::table(),
			GrantKind::view(),
		] {
			registry.register(kind);
		}
		registry
	}

	/// Add a kind, replacing any kind already registered under its name
	pub fn register(&mut self, kind: impl ResourceKind + 'static) {
		self.kinds
			.insert(kind.name().to_string(), Arc::new(kind));
	}

	/// Look up a kind by name
	pub fn get(&self, name: &str) -> GrantResult<Arc<dyn ResourceKind>> {
		self.kinds
			.get(name)
			.cloned()
			.ok_or_else(|| GrantError::UnknownKind(name.to_string()))
	}

	/// Registered kind names
	pub fn names(&self) -> Vec<&str> {
		self.kinds.keys().map(String::as_str).collect()
	}

	pub fn len(&self) -> usize {
		self.kinds.len()
	}

	pub fn is_empty(&self) -> bool {
		self.kinds.is_empty()
	}
}

impl fmt::Debug for KindRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("KindRegistry")
			.field("kinds", &self.names())
			.finish()
	}
}
