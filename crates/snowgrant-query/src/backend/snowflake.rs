//! Snowflake query builder backend
//!
//! This module implements DCL SQL generation for Snowflake.

use super::{QueryBuilder, SqlWriter};
use crate::dcl::{GrantStatement, ObjectType, Privilege, RevokeStatement, ShowGrantsStatement};
use crate::types::QualifiedName;

/// Snowflake query builder
///
/// Conventions:
/// - Identifiers: Double quotes (`"WH_MONITOR"`), each dotted part quoted separately
/// - Grantees: always `ROLE "<name>"`
///
/// # Examples
///
/// ```rust
/// use snowgrant_query::backend::{QueryBuilder, SnowflakeQueryBuilder};
/// use snowgrant_query::dcl::{GrantStatement, ObjectType};
///
/// let builder = SnowflakeQueryBuilder::new();
/// let stmt = GrantStatement::new()
///     .privilege("USAGE")
///     .on(ObjectType::Schema, "ANALYTICS.PUBLIC")
///     .to("REPORTING");
///
/// assert_eq!(
///     builder.build_grant(&stmt),
///     r#"GRANT USAGE ON SCHEMA "ANALYTICS"."PUBLIC" TO ROLE "REPORTING""#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SnowflakeQueryBuilder;

impl SnowflakeQueryBuilder {
	/// Create a new Snowflake query builder
	pub fn new() -> Self {
		Self
	}

	/// Escape an identifier for Snowflake
	///
	/// Snowflake uses double quotes for identifiers; embedded quotes are doubled.
	fn escape_iden(&self, ident: &str) -> String {
		let escaped = ident.replace('"', "\"\"");
		format!("\"{}\"", escaped)
	}

	fn write_privileges(&self, writer: &mut SqlWriter, privileges: &[Privilege]) {
		writer.push_list(privileges, ", ", |w, privilege| {
			w.push(privilege.as_sql());
		});
	}

	fn write_target(
		&self,
		writer: &mut SqlWriter,
		object_type: ObjectType,
		object: Option<&QualifiedName>,
	) {
		writer.push_keyword("ON");
		writer.push_keyword(object_type.as_sql());

		if let Some(name) = object {
			writer.push_space();
			writer.push_list(name.parts(), ".", |w, part| {
				w.push_identifier(part, |s| self.escape_iden(s));
			});
		}
	}

	fn write_roles(&self, writer: &mut SqlWriter, roles: &[String]) {
		writer.push_space();
		writer.push_list(roles, ", ", |w, role| {
			w.push("ROLE ");
			w.push_identifier(role, |s| self.escape_iden(s));
		});
	}
}

impl QueryBuilder for SnowflakeQueryBuilder {
	fn build_grant(&self, stmt: &GrantStatement) -> String {
		let mut writer = SqlWriter::new();

		writer.push("GRANT");
		writer.push_space();
		self.write_privileges(&mut writer, &stmt.privileges);

		self.write_target(&mut writer, stmt.object_type, stmt.object.as_ref());

		writer.push_keyword("TO");
		self.write_roles(&mut writer, &stmt.roles);

		if stmt.with_grant_option {
			writer.push_keyword("WITH GRANT OPTION");
		}

		writer.into_string()
	}

	fn build_revoke(&self, stmt: &RevokeStatement) -> String {
		let mut writer = SqlWriter::new();

		writer.push("REVOKE");
		writer.push_space();
		self.write_privileges(&mut writer, &stmt.privileges);

		self.write_target(&mut writer, stmt.object_type, stmt.object.as_ref());

		writer.push_keyword("FROM");
		self.write_roles(&mut writer, &stmt.roles);

		writer.into_string()
	}

	fn build_show_grants(&self, stmt: &ShowGrantsStatement) -> String {
		let mut writer = SqlWriter::new();

		writer.push("SHOW GRANTS");
		self.write_target(&mut writer, stmt.object_type, stmt.object.as_ref());

		writer.into_string()
	}

	fn escape_identifier(&self, ident: &str) -> String {
		self.escape_iden(ident)
	}
}
