//! Remote executor seam
//!
//! The grant protocol never talks to the network itself. It hands statement
//! text to a [`GrantExecutor`] and reads back [`Row`]s.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

/// Classification of a remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ExecutionErrorKind {
	/// The target object does not exist or is not visible
	ObjectNotFound,
	/// The grant being revoked is not held
	GrantNotFound,
	/// The session lacks the rights to run the statement
	PermissionDenied,
	/// Anything else
	Other,
}

/// Error returned by a [`GrantExecutor`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ExecutionError {
	kind: ExecutionErrorKind,
	message: String,
}

impl ExecutionError {
	pub fn new(kind: ExecutionErrorKind, message: impl Into<String>) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn object_not_found(message: impl Into<String>) -> Self {
		Self::new(ExecutionErrorKind::ObjectNotFound, message)
	}

	pub fn grant_not_found(message: impl Into<String>) -> Self {
		Self::new(ExecutionErrorKind::GrantNotFound, message)
	}

	pub fn permission_denied(message: impl Into<String>) -> Self {
		Self::new(ExecutionErrorKind::PermissionDenied, message)
	}

	pub fn other(message: impl Into<String>) -> Self {
		Self::new(ExecutionErrorKind::Other, message)
	}

	pub fn kind(&self) -> ExecutionErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

/// One result row. Column names are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
	data: HashMap<String, String>,
}

impl Row {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, column: impl AsRef<str>, value: impl Into<String>) {
		self.data
			.insert(column.as_ref().to_lowercase(), value.into());
	}

	/// Builder-style [`Row::insert`]
	pub fn with(mut self, column: impl AsRef<str>, value: impl Into<String>) -> Self {
		self.insert(column, value);
		self
	}

	pub fn get(&self, column: &str) -> Option<&str> {
		self.data.get(&column.to_lowercase()).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for Row
where
	K: AsRef<str>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut row = Row::new();
		for (column, value) in iter {
			row.insert(column, value);
		}
		row
	}
}

/// Runs statements against the remote access-control system.
///
/// Implementations must be shareable across tasks; the protocol only ever
/// borrows the executor.
#[async_trait]
pub trait GrantExecutor: Send + Sync {
	/// Run a statement that returns no rows (GRANT, REVOKE).
	async fn execute(&self, sql: &str) -> Result<(), ExecutionError>;

	/// Run a statement and collect its rows (SHOW GRANTS).
	async fn query(&self, sql: &str) -> Result<Vec<Row>, ExecutionError>;
}

#[async_trait]
impl<E: GrantExecutor + ?Sized> GrantExecutor for std::sync::Arc<E> {
	async fn execute(&self, sql: &str) -> Result<(), ExecutionError> {
		(**self).execute(sql).await
	}

	async fn query(&self, sql: &str) -> Result<Vec<Row>, ExecutionError> {
		(**self).query(sql).await
	}
}
