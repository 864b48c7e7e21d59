//! # snowgrant
//!
//! Declarative privilege grants for a Snowflake-style account.
//!
//! snowgrant keeps grants (an object, a privilege and the roles holding it) in
//! sync with the remote access-control system. Each grant is identified by a
//! single opaque string that can be persisted and later used to read or
//! revoke it.
//!
//! ## Feature Flags
//!
//! - `full` (default) - everything below
//! - `query` - GRANT, REVOKE and SHOW GRANTS statement builders
//! - `grants` - the grant lifecycle built on top of `query`
//!
//! ## Quick Example
//!
//! ```rust
//! # #[cfg(feature = "grants")]
//! # {
//! use snowgrant::grants::{GrantId, KindRegistry};
//!
//! let registry = KindRegistry::standard();
//! let kind = registry.get("resource_monitor").unwrap();
//! assert!(kind.privileges().contains("monitor"));
//!
//! let id = GrantId::decode("WH_MONITOR|MONITOR|false|ANALYST").unwrap();
//! assert!(id.roles().contains("ANALYST"));
//! # }
//! ```

#[cfg(feature = "grants")]
pub mod grants;
#[cfg(feature = "query")]
pub mod query;

/// Commonly used types, for glob import.
pub mod prelude {
	#[cfg(feature = "grants")]
	pub use snowgrant_grants::prelude::*;
	#[cfg(feature = "query")]
	pub use snowgrant_query::prelude::*;
}
