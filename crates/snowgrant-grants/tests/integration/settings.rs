//! Protocol behavior driven by settings files

use rstest::rstest;
use snowgrant_grants::{GrantError, GrantKind, GrantProtocol, GrantSettings};
use std::io::Write;

use crate::common::fake_account::FakeAccount;
use crate::common::fixtures::account;

fn settings_file(content: &str) -> tempfile::NamedTempFile {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(content.as_bytes()).unwrap();
	file
}

/// Test: grant option verification enabled from a file
///
/// **Category**: Configuration
/// **Verifies**: per-kind override loaded through `GrantSettings::from_file`
#[rstest]
#[tokio::test]
async fn test_verification_override_from_file(account: FakeAccount) {
	let kind = GrantKind::resource_monitor();
	account.seed_grant(&kind, "WH_MONITOR", "MONITOR", "ANALYST", false);
	let file = settings_file("[verify_grant_option]\nresource_monitor = true\n");
	let settings = GrantSettings::from_file(file.path()).unwrap();
	let protocol = GrantProtocol::with_settings(account.clone(), settings);

	let record = protocol
		.read(&kind, "WH_MONITOR|MONITOR|true|ANALYST")
		.await
		.unwrap()
		.unwrap();

	assert!(!record.grant_option);
}

/// Test: custom missing-object patterns replace the defaults
///
/// **Category**: Configuration
/// **Verifies**: an unmatched message is a real error, not an absent object
#[rstest]
#[tokio::test]
async fn test_custom_missing_object_patterns(account: FakeAccount) {
	let kind = GrantKind::warehouse();
	let file = settings_file("missing_object_patterns = [\"has vanished\"]\n");
	let settings = GrantSettings::from_file(file.path()).unwrap();
	let protocol = GrantProtocol::with_settings(account.clone(), settings);

	let error = protocol
		.read(&kind, "NO_SUCH_WAREHOUSE|USAGE|false")
		.await
		.unwrap_err();

	assert!(matches!(error, GrantError::RemoteExecution { .. }));
}
