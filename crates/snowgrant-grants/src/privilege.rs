//! Privilege sets
//!
//! A [`PrivilegeSet`] is the ordered list of privilege tokens a resource kind
//! accepts. Membership is case-insensitive. Duplicates are dropped on
//! construction and the first spelling keeps its position.

use indexmap::IndexMap;

use crate::error::{GrantError, GrantResult};

/// Ordered, deduplicated, case-insensitive set of privilege tokens.
///
/// # Examples
///
/// ```
/// use snowgrant_grants::privilege::PrivilegeSet;
///
/// let set = PrivilegeSet::new(["MONITOR", "MODIFY", "monitor"]);
/// assert_eq!(set.to_list(), vec!["MONITOR", "MODIFY"]);
/// assert!(set.contains("Monitor"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivilegeSet {
	// upper-cased key -> spelling as first supplied
	tokens: IndexMap<String, String>,
}

impl PrivilegeSet {
	/// Build a set from zero or more tokens.
	///
	/// Tokens are trimmed and blank tokens are skipped.
	pub fn new<I, S>(privileges: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut tokens = IndexMap::new();
		for privilege in privileges {
			let token = privilege.as_ref().trim();
			if token.is_empty() {
				continue;
			}
			tokens
				.entry(token.to_uppercase())
				.or_insert_with(|| token.to_string());
		}
		Self { tokens }
	}

	/// Tokens in insertion order.
	pub fn to_list(&self) -> Vec<String> {
		self.tokens.values().cloned().collect()
	}

	/// Case-insensitive membership test.
	pub fn contains(&self, token: &str) -> bool {
		self.tokens.contains_key(&token.trim().to_uppercase())
	}

	/// The set's own spelling of `token`, if it is a member.
	pub fn canonical(&self, token: &str) -> Option<&str> {
		self.tokens
			.get(&token.trim().to_uppercase())
			.map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.tokens.values().map(String::as_str)
	}

	/// Check `token` against the set on behalf of `kind`.
	///
	/// Returns the canonical spelling on success.
	pub fn validate(&self, kind: &str, token: &str) -> GrantResult<&str> {
		self.canonical(token)
			.ok_or_else(|| GrantError::InvalidPrivilege {
				kind: kind.to_string(),
				privilege: token.to_string(),
				allowed: self.to_list(),
			})
	}
}

impl<S: AsRef<str>> FromIterator<S> for PrivilegeSet {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self::new(iter)
	}
}
