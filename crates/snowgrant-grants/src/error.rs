//! Error types for the grant lifecycle.
//!
//! Every variant carries enough context (kind, resource, privilege, role and
//! the remote message) for an operator to reconcile drifted state by hand.

use std::fmt;

use thiserror::Error;

use crate::executor::ExecutionError;

/// Remote operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
	/// GRANT statement
	Grant,
	/// REVOKE statement
	Revoke,
	/// SHOW GRANTS statement
	ShowGrants,
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Operation::Grant => "GRANT",
			Operation::Revoke => "REVOKE",
			Operation::ShowGrants => "SHOW GRANTS",
		})
	}
}

/// Errors that can occur while managing grants.
#[derive(Debug, Error)]
pub enum GrantError {
	/// Requested privilege is not valid for the resource kind.
	#[error("Invalid privilege {privilege:?} for {kind}; expected one of: {}", allowed.join(", "))]
	InvalidPrivilege {
		/// Resource kind name
		kind: String,
		/// Privilege as requested
		privilege: String,
		/// Privileges the kind accepts
		allowed: Vec<String>,
	},

	/// Request fields failed validation before any remote call.
	#[error("Invalid grant request: {0}")]
	InvalidRequest(String),

	/// Grant identifier does not match the codec's schema.
	#[error("Malformed grant ID {id:?}: {reason}")]
	MalformedId {
		/// The identifier as persisted
		id: String,
		/// What was wrong with it
		reason: String,
	},

	/// A field could not be encoded into a grant identifier.
	#[error("Cannot encode grant ID field {field}: {reason}")]
	Encoding {
		/// Field name
		field: &'static str,
		/// What was wrong with it
		reason: String,
	},

	/// A remote statement failed.
	#[error(
		"{operation} failed on {resource:?} (privilege {privilege}{}): {source}",
		role.as_ref().map(|r| format!(", role {r:?}")).unwrap_or_default()
	)]
	RemoteExecution {
		/// Which statement failed
		operation: Operation,
		/// Target resource name
		resource: String,
		/// Privilege involved
		privilege: String,
		/// Role the statement targeted, if any
		role: Option<String>,
		/// Underlying failure
		#[source]
		source: ExecutionError,
	},

	/// No adapter is registered under the given kind name.
	#[error("Unknown resource kind: {0}")]
	UnknownKind(String),
}

impl GrantError {
	pub(crate) fn malformed(id: &str, reason: impl Into<String>) -> Self {
		GrantError::MalformedId {
			id: id.to_string(),
			reason: reason.into(),
		}
	}

	pub(crate) fn encoding(field: &'static str, reason: impl Into<String>) -> Self {
		GrantError::Encoding {
			field,
			reason: reason.into(),
		}
	}
}

/// Result type alias for grant operations.
pub type GrantResult<T> = Result<T, GrantError>;
