//! Desired grant state, as declared by a caller

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use snowgrant_query::types::QualifiedName;

use crate::error::{GrantError, GrantResult};
use crate::grant_id::GrantId;
use crate::kinds::ResourceKind;

/// A grant to create.
///
/// Every field identifies the grant, so changing any of them means a new
/// grant rather than an update of the old one.
///
/// # Examples
///
/// ```
/// use snowgrant_grants::request::GrantRequest;
///
/// let request = GrantRequest::new("WH_MONITOR").privilege("MONITOR").role("ANALYST");
/// assert_eq!(request.roles.len(), 1);
/// assert!(!request.with_grant_option);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRequest {
	/// Name of the object the privilege is on
	pub resource_name: String,

	/// Privilege to grant; the kind's default when absent
	#[serde(default)]
	pub privilege: Option<String>,

	/// Roles receiving the privilege
	#[serde(default)]
	pub roles: BTreeSet<String>,

	/// Whether the roles may re-grant the privilege
	#[serde(default)]
	pub with_grant_option: bool,
}

impl GrantRequest {
	pub fn new(resource_name: impl Into<String>) -> Self {
		Self {
			resource_name: resource_name.into(),
			..Default::default()
		}
	}

	pub fn privilege(mut self, privilege: impl Into<String>) -> Self {
		self.privilege = Some(privilege.into());
		self
	}

	pub fn role(mut self, role: impl Into<String>) -> Self {
		self.roles.insert(role.into());
		self
	}

	pub fn roles<I, S>(mut self, roles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.roles.extend(roles.into_iter().map(Into::into));
		self
	}

	pub fn with_grant_option(mut self, with_grant_option: bool) -> Self {
		self.with_grant_option = with_grant_option;
		self
	}

	/// Validate the request for `kind` and fill in defaults.
	///
	/// Nothing here touches the remote system, so a request that fails to
	/// resolve never causes a statement to run.
	pub fn resolve(&self, kind: &dyn ResourceKind) -> GrantResult<ResolvedGrant> {
		let resource_name = self.resource_name.as_str();
		if resource_name.trim().is_empty() {
			return Err(GrantError::InvalidRequest(
				"resource name must not be empty".to_string(),
			));
		}
		if resource_name.trim() != resource_name {
			return Err(GrantError::InvalidRequest(format!(
				"resource name {resource_name:?} has surrounding whitespace"
			)));
		}

		let object_type = kind.object_type();
		if object_type.is_named() {
			let name = QualifiedName::parse(resource_name).map_err(|e| {
				GrantError::InvalidRequest(format!("invalid resource name {resource_name:?}: {e}"))
			})?;
			let depth = object_type.name_depth();
			if name.parts().len() != depth {
				return Err(GrantError::InvalidRequest(format!(
					"{} names have {} part(s), found {} in {:?}",
					kind.name(),
					depth,
					name.parts().len(),
					resource_name
				)));
			}
		}

		let requested = self
			.privilege
			.as_deref()
			.filter(|p| !p.trim().is_empty())
			.unwrap_or_else(|| kind.default_privilege());
		let privilege = kind.resolve_privilege(requested)?.to_string();

		if self.roles.iter().any(|role| role.trim().is_empty()) {
			return Err(GrantError::InvalidRequest(
				"role names must not be blank".to_string(),
			));
		}

		Ok(ResolvedGrant {
			resource_name: resource_name.to_string(),
			privilege,
			roles: self.roles.clone(),
			with_grant_option: self.with_grant_option,
		})
	}
}

/// A request that passed validation, with its privilege resolved to the
/// kind's own spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGrant {
	pub resource_name: String,
	pub privilege: String,
	pub roles: BTreeSet<String>,
	pub with_grant_option: bool,
}

impl ResolvedGrant {
	/// Identity to persist once the grant exists
	pub fn grant_id(&self) -> GrantId {
		GrantId::new(
			self.resource_name.as_str(),
			self.privilege.as_str(),
			self.with_grant_option,
		)
		.with_roles(self.roles.iter().cloned())
	}
}
