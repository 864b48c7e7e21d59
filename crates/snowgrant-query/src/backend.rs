//! SQL Backend implementations
//!
//! This module provides dialect-specific SQL generation for DCL statements.

use crate::dcl::{GrantStatement, RevokeStatement, ShowGrantsStatement};

mod snowflake;
mod sql_writer;

pub use snowflake::SnowflakeQueryBuilder;
pub use sql_writer::SqlWriter;

/// Query builder trait for generating SQL from DCL statements
///
/// DCL statements carry no bind parameters, so each method returns the
/// finished SQL text.
///
/// # Implementations
///
/// - [`SnowflakeQueryBuilder`] - Snowflake dialect
pub trait QueryBuilder {
	/// Build GRANT statement
	fn build_grant(&self, stmt: &GrantStatement) -> String;

	/// Build REVOKE statement
	fn build_revoke(&self, stmt: &RevokeStatement) -> String;

	/// Build SHOW GRANTS statement
	fn build_show_grants(&self, stmt: &ShowGrantsStatement) -> String;

	/// Escape a single identifier
	fn escape_identifier(&self, ident: &str) -> String;
}
