//! # snowgrant-grants
//!
//! Generic lifecycle for privilege grants on a Snowflake-style account.
//!
//! A grant ties one object, one privilege and a set of roles together, with an
//! optional "may re-grant" flag. This crate keeps that association in sync with
//! the remote system through create, read and delete operations that work the
//! same way for every kind of object.
//!
//! ## Architecture
//!
//! - [`privilege`]: [`PrivilegeSet`], the privileges a kind accepts
//! - [`grant_id`]: [`GrantId`], the reversible string identity of a grant
//! - [`kinds`]: [`ResourceKind`] adapters and the [`KindRegistry`]
//! - [`executor`]: the [`GrantExecutor`] seam to the remote system
//! - [`protocol`]: [`GrantProtocol`], the create/read/delete state machine
//! - [`settings`]: [`GrantSettings`], loadable from TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use snowgrant_grants::prelude::*;
//!
//! let registry = KindRegistry::standard();
//! let kind = registry.get("resource_monitor").unwrap();
//!
//! let resolved = GrantRequest::new("WH_MONITOR")
//!     .role("ANALYST")
//!     .resolve(kind.as_ref())
//!     .unwrap();
//!
//! assert_eq!(
//!     resolved.grant_id().encode().unwrap(),
//!     "WH_MONITOR|MONITOR|false|ANALYST"
//! );
//! ```

pub mod error;
pub mod executor;
pub mod grant_id;
pub mod kinds;
pub mod privilege;
pub mod protocol;
pub mod record;
pub mod request;
pub mod settings;

pub use error::{GrantError, GrantResult, Operation};
pub use executor::{ExecutionError, ExecutionErrorKind, GrantExecutor, Row};
pub use grant_id::GrantId;
pub use kinds::{GrantKind, KindRegistry, ResourceKind};
pub use privilege::PrivilegeSet;
pub use protocol::{AppliedGrant, GrantProtocol};
pub use record::{GrantRecord, GrantRow, GrantState};
pub use request::{GrantRequest, ResolvedGrant};
pub use settings::{GrantSettings, SettingsError};

/// Commonly used types, for glob import.
pub mod prelude {
	pub use crate::error::{GrantError, GrantResult};
	pub use crate::executor::{ExecutionError, ExecutionErrorKind, GrantExecutor, Row};
	pub use crate::grant_id::GrantId;
	pub use crate::kinds::{GrantKind, KindRegistry, ResourceKind};
	pub use crate::privilege::PrivilegeSet;
	pub use crate::protocol::{AppliedGrant, GrantProtocol};
	pub use crate::record::GrantRecord;
	pub use crate::request::GrantRequest;
	pub use crate::settings::GrantSettings;
}
