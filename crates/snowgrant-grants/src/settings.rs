//! Grant protocol settings
//!
//! This module provides [`GrantSettings`], which tunes how the protocol
//! interprets remote failures and whether the grant option is verified.
//! Settings can be built in code or loaded from a TOML file:
//!
//! ```toml
//! missing_object_patterns = ["does not exist"]
//! missing_grant_patterns = ["is not granted"]
//!
//! [verify_grant_option]
//! resource_monitor = true
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::executor::{ExecutionError, ExecutionErrorKind};

/// Error type for settings loading
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Protocol settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrantSettings {
	/// Per-kind override of grant-option verification, keyed by kind name
	pub verify_grant_option: HashMap<String, bool>,

	/// Message fragments that mark an error as "object does not exist"
	pub missing_object_patterns: Vec<String>,

	/// Message fragments that mark an error as "grant is not held"
	pub missing_grant_patterns: Vec<String>,
}

impl Default for GrantSettings {
	fn default() -> Self {
		Self {
			verify_grant_option: HashMap::new(),
			missing_object_patterns: vec![
				"does not exist".to_string(),
			],
			missing_grant_patterns: vec![
				"is not granted".to_string(),
				"no privileges".to_string(),
			],
		}
	}
}

impl GrantSettings {
	/// Parse settings from TOML text. Missing keys take their defaults.
	///
	/// # Examples
	///
	/// ```
	/// use snowgrant_grants::settings::GrantSettings;
	///
	/// let settings = GrantSettings::from_toml_str(
	///     "[verify_grant_option]\nresource_monitor = true\n",
	/// ).unwrap();
	///
	/// assert!(settings.verifies_grant_option("resource_monitor", false));
	/// assert_eq!(settings.missing_object_patterns.len(), 2);
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(content)?)
	}

	/// Load settings from a TOML file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let content = std::fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&content)
	}

	/// Set the grant-option verification policy for one kind
	pub fn with_grant_option_verification(mut self, kind: impl Into<String>, verify: bool) -> Self {
		self.verify_grant_option.insert(kind.into(), verify);
		self
	}

	/// Whether `kind` verifies the grant option, falling back to `default`
	pub fn verifies_grant_option(&self, kind: &str, default: bool) -> bool {
		self.verify_grant_option
			.get(kind)
			.copied()
			.unwrap_or(default)
	}

	/// Classify an execution error.
	///
	/// Errors the executor already classified keep their kind. Errors of
	/// kind [`ExecutionErrorKind::Other`] are matched against the configured
	/// message patterns, case-insensitively.
	pub fn classify(&self, error: &ExecutionError) -> ExecutionErrorKind {
		if error.kind() != ExecutionErrorKind::Other {
			return error.kind();
		}

		let message = error.message().to_lowercase();
		let matches = |patterns: &[String]| {
			patterns
				.iter()
				.any(|pattern| message.contains(&pattern.to_lowercase()))
		};

		if matches(&self.missing_object_patterns) {
			ExecutionErrorKind::ObjectNotFound
		} else if matches(&self.missing_grant_patterns) {
			ExecutionErrorKind::GrantNotFound
		} else {
			ExecutionErrorKind::Other
		}
	}
}
