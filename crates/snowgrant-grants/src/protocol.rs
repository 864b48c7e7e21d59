//! Generic grant protocol
//!
//! [`GrantProtocol`] drives one grant through its lifecycle for any
//! [`ResourceKind`]:
//!
//! - **create** validates the request, runs one GRANT per role and returns the
//!   encoded [`GrantId`]
//! - **read** runs SHOW GRANTS and reconciles the remote rows with the ID
//! - **delete** runs one REVOKE per role and treats already-absent grants as
//!   revoked
//!
//! Nothing is rolled back. A create that fails on its third role leaves the
//! first two granted; the error names the role that failed, and the next read
//! reports what actually exists.

use std::collections::BTreeSet;

use snowgrant_query::builder::RoleStatement;
use tracing::{debug, error, info, warn};

use crate::error::{GrantError, GrantResult, Operation};
use crate::executor::{ExecutionError, ExecutionErrorKind, GrantExecutor};
use crate::grant_id::GrantId;
use crate::kinds::ResourceKind;
use crate::record::{GrantRecord, GrantRow, GrantState};
use crate::request::GrantRequest;
use crate::settings::GrantSettings;

/// Result of [`GrantProtocol::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedGrant {
	/// Identity to persist
	pub id: String,
	/// State observed right after creation, `None` if the object vanished
	pub record: Option<GrantRecord>,
}

/// Create, read and delete grants through a [`GrantExecutor`].
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use snowgrant_grants::executor::{ExecutionError, GrantExecutor, Row};
/// use snowgrant_grants::kinds::GrantKind;
/// use snowgrant_grants::protocol::GrantProtocol;
/// use snowgrant_grants::request::GrantRequest;
///
/// struct AcceptAll;
///
/// #[async_trait]
/// impl GrantExecutor for AcceptAll {
///     async fn execute(&self, _sql: &str) -> Result<(), ExecutionError> {
///         Ok(())
///     }
///
///     async fn query(&self, _sql: &str) -> Result<Vec<Row>, ExecutionError> {
///         Ok(Vec::new())
///     }
/// }
///
/// # tokio_test::block_on(async {
/// let protocol = GrantProtocol::new(AcceptAll);
/// let request = GrantRequest::new("WH_MONITOR").role("ANALYST");
/// let id = protocol
///     .create(&GrantKind::resource_monitor(), &request)
///     .await
///     .unwrap();
///
/// assert_eq!(id, "WH_MONITOR|MONITOR|false|ANALYST");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct GrantProtocol<E> {
	executor: E,
	settings: GrantSettings,
}

impl<E: GrantExecutor> GrantProtocol<E> {
	/// Protocol with default settings
	pub fn new(executor: E) -> Self {
		Self::with_settings(executor, GrantSettings::default())
	}

	pub fn with_settings(executor: E, settings: GrantSettings) -> Self {
		Self { executor, settings }
	}

	pub fn executor(&self) -> &E {
		&self.executor
	}

	pub fn settings(&self) -> &GrantSettings {
		&self.settings
	}

	/// Grant the requested privilege to every requested role.
	///
	/// Validation happens before any statement runs, including rendering of
	/// every GRANT. Roles are granted in sorted order and the first failure is
	/// returned as is, without undoing the grants that already succeeded.
	pub async fn create(&self, kind: &dyn ResourceKind, request: &GrantRequest) -> GrantResult<String> {
		let resolved = request.resolve(kind)?;
		let statement = kind
			.builder(&resolved.resource_name)
			.grant(&resolved.privilege, resolved.with_grant_option);
		let statements = render_per_role(&statement, &resolved.roles)?;

		for (role, sql) in &statements {
			debug!(
				kind = kind.name(),
				resource = %resolved.resource_name,
				privilege = %resolved.privilege,
				role = %role,
				state = %GrantState::Creating,
				sql = %sql,
				"executing grant"
			);

			self.executor
				.execute(sql)
				.await
				.map_err(|source| GrantError::RemoteExecution {
					operation: Operation::Grant,
					resource: resolved.resource_name.clone(),
					privilege: resolved.privilege.clone(),
					role: Some(role.to_string()),
					source,
				})?;

			info!(
				kind = kind.name(),
				resource = %resolved.resource_name,
				privilege = %resolved.privilege,
				role = %role,
				"granted privilege"
			);
		}

		resolved.grant_id().encode().inspect_err(|e| {
			error!(
				kind = kind.name(),
				resource = %resolved.resource_name,
				privilege = %resolved.privilege,
				roles = ?resolved.roles,
				error = %e,
				"grants were applied but no grant ID could be encoded; remote grants are orphaned"
			);
		})
	}

	/// Observe the grant identified by `id`.
	///
	/// Returns `Ok(None)` when the target object no longer exists. The record
	/// holds the ID's roles that still hold the privilege remotely; roles
	/// granted by anyone else are never adopted, so an ID without roles reads
	/// with an empty role set.
	pub async fn read(&self, kind: &dyn ResourceKind, id: &str) -> GrantResult<Option<GrantRecord>> {
		let grant = GrantId::decode(id)?;
		let privilege = kind.resolve_privilege(grant.privilege())?;
		let sql = kind
			.builder(grant.resource_name())
			.show()
			.map_err(GrantError::InvalidRequest)?;
		debug!(
			kind = kind.name(),
			resource = grant.resource_name(),
			privilege,
			sql = %sql,
			"reading grants"
		);

		let rows = match self.executor.query(&sql).await {
			Ok(rows) => rows,
			Err(error) if self.settings.classify(&error) == ExecutionErrorKind::ObjectNotFound => {
				warn!(
					kind = kind.name(),
					resource = grant.resource_name(),
					privilege,
					state = %GrantState::Absent,
					error = %error,
					"object not found, treating grant as absent"
				);
				return Ok(None);
			}
			Err(source) => return Err(remote_error(Operation::ShowGrants, &grant, None, source)),
		};

		let wildcard = kind.all_privilege() == Some(privilege);

		let mut matching = Vec::new();
		for row in &rows {
			let row = GrantRow::from_row(row).map_err(|reason| {
				remote_error(
					Operation::ShowGrants,
					&grant,
					None,
					ExecutionError::other(format!("unexpected SHOW GRANTS row: {reason}")),
				)
			})?;
			if row.is_role_grant() && row.matches_privilege(privilege, wildcard) {
				matching.push(row);
			}
		}

		let remote_roles: BTreeSet<&str> = matching
			.iter()
			.map(|row| row.grantee_name.as_str())
			.collect();

		let (roles, dropped): (BTreeSet<String>, BTreeSet<String>) = grant
			.roles()
			.iter()
			.cloned()
			.partition(|role| remote_roles.contains(role.as_str()));
		for role in &dropped {
			debug!(
				kind = kind.name(),
				resource = grant.resource_name(),
				privilege,
				role = %role,
				"role no longer holds the privilege, dropping it"
			);
		}

		let grant_option = if self
			.settings
			.verifies_grant_option(kind.name(), kind.verifies_grant_option())
		{
			let mut ours = matching
				.iter()
				.filter(|row| roles.contains(&row.grantee_name))
				.peekable();
			ours.peek().is_some() && ours.all(|row| row.grant_option)
		} else {
			grant.grant_option()
		};

		debug!(
			kind = kind.name(),
			resource = grant.resource_name(),
			privilege,
			state = %GrantState::Present,
			roles = ?roles,
			grant_option,
			"grant read"
		);

		Ok(Some(GrantRecord {
			resource_name: grant.resource_name().to_string(),
			privilege: privilege.to_string(),
			roles,
			grant_option,
		}))
	}

	/// Revoke the grant identified by `id`.
	///
	/// Only the roles named in the ID are revoked; an ID without roles revokes
	/// nothing. Grants that are already gone, or whose object is gone, count
	/// as revoked, so the call can be retried after a partial failure.
	pub async fn delete(&self, kind: &dyn ResourceKind, id: &str) -> GrantResult<()> {
		let grant = GrantId::decode(id)?;
		let privilege = kind.resolve_privilege(grant.privilege())?;
		let statement = kind.builder(grant.resource_name()).revoke(privilege);
		let statements = render_per_role(&statement, grant.roles())?;

		if !grant.is_role_enumerated() {
			debug!(
				kind = kind.name(),
				resource = grant.resource_name(),
				privilege,
				"grant ID names no roles, nothing to revoke"
			);
		}

		for (role, sql) in &statements {
			debug!(
				kind = kind.name(),
				resource = grant.resource_name(),
				privilege,
				role = %role,
				state = %GrantState::Deleting,
				sql = %sql,
				"executing revoke"
			);

			match self.executor.execute(sql).await {
				Ok(()) => info!(
					kind = kind.name(),
					resource = grant.resource_name(),
					privilege,
					role = %role,
					"revoked privilege"
				),
				Err(error) => match self.settings.classify(&error) {
					ExecutionErrorKind::ObjectNotFound | ExecutionErrorKind::GrantNotFound => warn!(
						kind = kind.name(),
						resource = grant.resource_name(),
						privilege,
						role = %role,
						state = %GrantState::Absent,
						error = %error,
						"grant already absent, treating revoke as done"
					),
					_ => {
						return Err(remote_error(Operation::Revoke, &grant, Some(*role), error));
					}
				},
			}
		}

		Ok(())
	}

	/// Create the grant, then read it back.
	pub async fn apply(&self, kind: &dyn ResourceKind, request: &GrantRequest) -> GrantResult<AppliedGrant> {
		let id = self.create(kind, request).await?;
		let record = self.read(kind, &id).await?;
		Ok(AppliedGrant { id, record })
	}
}

/// Render `statement` for every role up front, so a role that cannot be
/// rendered is reported before anything runs.
fn render_per_role<'a>(
	statement: &RoleStatement,
	roles: &'a BTreeSet<String>,
) -> GrantResult<Vec<(&'a str, String)>> {
	roles
		.iter()
		.map(|role| {
			statement
				.to_role(role)
				.map(|sql| (role.as_str(), sql))
				.map_err(GrantError::InvalidRequest)
		})
		.collect()
}

fn remote_error(
	operation: Operation,
	grant: &GrantId,
	role: Option<&str>,
	source: ExecutionError,
) -> GrantError {
	GrantError::RemoteExecution {
		operation,
		resource: grant.resource_name().to_string(),
		privilege: grant.privilege().to_string(),
		role: role.map(str::to_string),
		source,
	}
}
