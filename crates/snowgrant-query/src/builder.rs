//! Per-object grant statement builders.
//!
//! A [`GrantBuilder`] captures one object (type and name) and produces the
//! statements the grant lifecycle runs against it. GRANT and REVOKE are
//! produced as a [`RoleStatement`] that is rendered once per role.

use crate::backend::{QueryBuilder, SnowflakeQueryBuilder};
use crate::dcl::{GrantStatement, ObjectType, Privilege, RevokeStatement, ShowGrantsStatement};
use crate::types::QualifiedName;

/// Statement construction for one grantable object.
pub trait GrantBuilder: Send + Sync {
	/// The object type this builder targets
	fn object_type(&self) -> ObjectType;

	/// GRANT of `privilege`, optionally with the grant option
	fn grant(&self, privilege: &str, with_grant_option: bool) -> RoleStatement;

	/// REVOKE of `privilege`
	fn revoke(&self, privilege: &str) -> RoleStatement;

	/// SHOW GRANTS on the object
	fn show(&self) -> Result<String, String>;
}

/// A GRANT or REVOKE that still needs its grantee.
#[derive(Debug, Clone)]
pub enum RoleStatement {
	/// Pending GRANT
	Grant(GrantStatement),
	/// Pending REVOKE
	Revoke(RevokeStatement),
}

impl RoleStatement {
	/// Render the statement for a single role.
	///
	/// The completed statement is validated first, so a blank role or
	/// privilege is reported instead of rendered.
	pub fn to_role(&self, role: &str) -> Result<String, String> {
		let builder = SnowflakeQueryBuilder::new();
		match self {
			RoleStatement::Grant(stmt) => {
				let stmt = stmt.clone().to(role);
				stmt.validate()?;
				Ok(builder.build_grant(&stmt))
			}
			RoleStatement::Revoke(stmt) => {
				let stmt = stmt.clone().from(role);
				stmt.validate()?;
				Ok(builder.build_revoke(&stmt))
			}
		}
	}
}

/// Builder for grants on objects that currently exist.
///
/// # Examples
///
/// ```
/// use snowgrant_query::builder::{CurrentGrantBuilder, GrantBuilder};
/// use snowgrant_query::dcl::ObjectType;
///
/// let builder = CurrentGrantBuilder::new(ObjectType::Warehouse, "LOADING");
/// assert_eq!(
///     builder.grant("usage", true).to_role("ETL").unwrap(),
///     r#"GRANT USAGE ON WAREHOUSE "LOADING" TO ROLE "ETL" WITH GRANT OPTION"#
/// );
/// assert!(builder.revoke("usage").to_role("").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CurrentGrantBuilder {
	object_type: ObjectType,
	name: Option<QualifiedName>,
}

impl CurrentGrantBuilder {
	/// Create a builder for the given object.
	///
	/// The name is ignored for [`ObjectType::Account`].
	pub fn new(object_type: ObjectType, name: impl Into<QualifiedName>) -> Self {
		let name = object_type.is_named().then(|| name.into());
		Self { object_type, name }
	}

	/// Builder for account-level grants
	pub fn account() -> Self {
		Self {
			object_type: ObjectType::Account,
			name: None,
		}
	}

	/// The captured object name, absent for ACCOUNT
	pub fn name(&self) -> Option<&QualifiedName> {
		self.name.as_ref()
	}
}

impl GrantBuilder for CurrentGrantBuilder {
	fn object_type(&self) -> ObjectType {
		self.object_type
	}

	fn grant(&self, privilege: &str, with_grant_option: bool) -> RoleStatement {
		let stmt = GrantStatement::new()
			.privilege(Privilege::new(privilege))
			.with_grant_option(with_grant_option);
		RoleStatement::Grant(match &self.name {
			Some(name) => stmt.on(self.object_type, name.clone()),
			None => stmt.on_account(),
		})
	}

	fn revoke(&self, privilege: &str) -> RoleStatement {
		let stmt = RevokeStatement::new().privilege(Privilege::new(privilege));
		RoleStatement::Revoke(match &self.name {
			Some(name) => stmt.on(self.object_type, name.clone()),
			None => stmt.on_account(),
		})
	}

	fn show(&self) -> Result<String, String> {
		let stmt = match &self.name {
			Some(name) => ShowGrantsStatement::new().on(self.object_type, name.clone()),
			None => ShowGrantsStatement::new().on_account(),
		};
		stmt.validate()?;
		Ok(SnowflakeQueryBuilder::new().build_show_grants(&stmt))
	}
}
