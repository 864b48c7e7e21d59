//! # snowgrant-query
//!
//! Statement builders for the access-control side of a Snowflake-style account.
//!
//! This crate turns a resource kind and a resource name into the three statements
//! a grant lifecycle needs: `GRANT`, `REVOKE` and `SHOW GRANTS`. Identifiers are
//! always quoted, so resource and role names are passed through verbatim.
//!
//! ## Architecture
//!
//! - [`types`]: [`QualifiedName`], a dotted object name such as `DB.SCHEMA.TABLE`
//! - [`dcl`]: statement values ([`GrantStatement`], [`RevokeStatement`],
//!   [`ShowGrantsStatement`]) together with [`Privilege`] and [`ObjectType`]
//! - [`backend`]: SQL generation ([`SnowflakeQueryBuilder`])
//! - [`builder`]: the per-object [`GrantBuilder`] seam used by the grant protocol
//!
//! ## Quick Start
//!
//! ```rust
//! use snowgrant_query::prelude::*;
//!
//! let builder = CurrentGrantBuilder::new(ObjectType::ResourceMonitor, "WH_MONITOR");
//!
//! assert_eq!(
//!     builder.grant("MONITOR", false).to_role("ANALYST")?,
//!     r#"GRANT MONITOR ON RESOURCE MONITOR "WH_MONITOR" TO ROLE "ANALYST""#
//! );
//! assert_eq!(
//!     builder.revoke("MONITOR").to_role("ANALYST")?,
//!     r#"REVOKE MONITOR ON RESOURCE MONITOR "WH_MONITOR" FROM ROLE "ANALYST""#
//! );
//! assert_eq!(builder.show()?, r#"SHOW GRANTS ON RESOURCE MONITOR "WH_MONITOR""#);
//! # Ok::<(), String>(())
//! ```

pub mod backend;
pub mod builder;
pub mod dcl;
pub mod types;

pub use backend::{QueryBuilder, SnowflakeQueryBuilder, SqlWriter};
pub use builder::{CurrentGrantBuilder, GrantBuilder, RoleStatement};
pub use dcl::{GrantStatement, ObjectType, Privilege, RevokeStatement, ShowGrantsStatement};
pub use types::{NameError, QualifiedName};

/// Commonly used types, for glob import.
pub mod prelude {
	pub use crate::backend::{QueryBuilder, SnowflakeQueryBuilder};
	pub use crate::builder::{CurrentGrantBuilder, GrantBuilder, RoleStatement};
	pub use crate::dcl::{
		GrantStatement, ObjectType, Privilege, RevokeStatement, ShowGrantsStatement,
	};
	pub use crate::types::QualifiedName;
}
