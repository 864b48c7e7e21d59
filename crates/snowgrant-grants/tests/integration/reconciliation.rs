//! Read-side reconciliation of stored identities with remote rows

use rstest::rstest;
use snowgrant_grants::GrantKind;
use std::collections::BTreeSet;

use crate::common::fake_account::FakeAccount;
use crate::common::fixtures::{account, protocol_for};

fn roles(names: &[&str]) -> BTreeSet<String> {
	names.iter().map(|name| name.to_string()).collect()
}

/// Test: roles revoked out of band disappear from the record
///
/// **Category**: Reconciliation
/// **Verifies**: a role-enumerated ID reads as the intersection with remote roles
#[rstest]
#[tokio::test]
async fn test_out_of_band_revoke_is_observed(account: FakeAccount) {
	let kind = GrantKind::database();
	account.seed_grant(&kind, "ANALYTICS", "USAGE", "A", false);
	account.seed_grant(&kind, "ANALYTICS", "USAGE", "C", false);
	let protocol = protocol_for(&account);

	let record = protocol
		.read(&kind, "ANALYTICS|USAGE|false|A|B|C")
		.await
		.unwrap()
		.unwrap();

	assert_eq!(record.roles, roles(&["A", "C"]));
	// read never writes
	assert_eq!(account.statements_starting_with("GRANT").len(), 0);
}

/// Test: roles granted by someone else are not adopted by an enumerated ID
///
/// **Category**: Reconciliation
/// **Verifies**: foreign grants are tolerated and ignored
#[rstest]
#[tokio::test]
async fn test_foreign_roles_are_ignored(account: FakeAccount) {
	let kind = GrantKind::warehouse();
	account.seed_grant(&kind, "LOADING", "USAGE", "ETL", false);
	account.seed_grant(&kind, "LOADING", "USAGE", "SOMEONE_ELSE", false);
	account.seed_share_grant(&kind, "LOADING", "USAGE", "PARTNER_SHARE");
	let protocol = protocol_for(&account);

	let record = protocol
		.read(&kind, "LOADING|USAGE|false|ETL")
		.await
		.unwrap()
		.unwrap();

	assert_eq!(record.roles, roles(&["ETL"]));
}

/// Test: an ID without roles never adopts roles granted elsewhere
///
/// **Category**: Reconciliation
/// **Verifies**: the record's roles are a subset of the ID's roles
#[rstest]
#[tokio::test]
async fn test_id_without_roles_adopts_no_roles(account: FakeAccount) {
	let kind = GrantKind::warehouse();
	account.seed_grant(&kind, "LOADING", "USAGE", "ETL", false);
	account.seed_grant(&kind, "LOADING", "USAGE", "OPS", false);
	let protocol = protocol_for(&account);

	let record = protocol
		.read(&kind, "LOADING|USAGE|false")
		.await
		.unwrap()
		.unwrap();

	assert!(record.roles.is_empty());
}

/// Test: ALL matches every privilege except OWNERSHIP
///
/// **Category**: Reconciliation
/// **Verifies**: wildcard privilege matching
#[rstest]
#[tokio::test]
async fn test_all_wildcard_matches_individual_privileges(account: FakeAccount) {
	let kind = GrantKind::warehouse();
	account.seed_grant(&kind, "LOADING", "MODIFY", "R1", false);
	account.seed_grant(&kind, "LOADING", "USAGE", "R2", false);
	account.seed_grant(&kind, "LOADING", "OWNERSHIP", "R3", false);
	let protocol = protocol_for(&account);

	let record = protocol
		.read(&kind, "LOADING|ALL|false|R1|R2|R3")
		.await
		.unwrap()
		.unwrap();

	assert_eq!(record.roles, roles(&["R1", "R2"]));
}

/// Test: the stored privilege is compared case-insensitively
///
/// **Category**: Reconciliation
/// **Verifies**: privilege matching ignores case
#[rstest]
#[tokio::test]
async fn test_privilege_match_ignores_case(account: FakeAccount) {
	let kind = GrantKind::resource_monitor();
	account.seed_grant(&kind, "WH_MONITOR", "MONITOR", "ANALYST", false);
	let protocol = protocol_for(&account);

	let record = protocol
		.read(&kind, "WH_MONITOR|monitor|false|ANALYST")
		.await
		.unwrap()
		.unwrap();

	assert_eq!(record.roles, roles(&["ANALYST"]));
	assert_eq!(record.privilege, "MONITOR");
}

/// Test: a missing object reads as absent
///
/// **Category**: Reconciliation
/// **Verifies**: "does not exist" maps to `None`, not an error
#[rstest]
#[tokio::test]
async fn test_missing_object_reads_as_absent(account: FakeAccount) {
	let kind = GrantKind::resource_monitor();
	let protocol = protocol_for(&account);

	let record = protocol
		.read(&kind, "NO_SUCH_MONITOR|MONITOR|false|ANALYST")
		.await
		.unwrap();

	assert!(record.is_none());
}

/// Test: grant option verification only looks at the ID's own roles
///
/// **Category**: Reconciliation
/// **Verifies**: a foreign row without grant option does not flip the flag
#[rstest]
#[case(&[("A", true), ("B", true)], true)]
#[case(&[("A", true), ("B", false)], false)]
#[case(&[("A", true), ("FOREIGN", false)], true)]
#[tokio::test]
async fn test_grant_option_is_verified_for_own_roles(
	account: FakeAccount,
	#[case] grants: &[(&str, bool)],
	#[case] expected: bool,
) {
	let kind = GrantKind::table();
	for (role, option) in grants {
		account.seed_grant(&kind, "ANALYTICS.PUBLIC.ORDERS", "SELECT", role, *option);
	}
	let protocol = protocol_for(&account);

	let record = protocol
		.read(&kind, "ANALYTICS.PUBLIC.ORDERS|SELECT|true|A|B")
		.await
		.unwrap()
		.unwrap();

	assert_eq!(record.grant_option, expected);
}

/// Test: kinds that do not verify the grant option keep the stored value
///
/// **Category**: Reconciliation
/// **Verifies**: resource monitors echo the ID's flag
#[rstest]
#[tokio::test]
async fn test_unverified_grant_option_is_echoed(account: FakeAccount) {
	let kind = GrantKind::resource_monitor();
	account.seed_grant(&kind, "WH_MONITOR", "MONITOR", "ANALYST", false);
	let protocol = protocol_for(&account);

	let record = protocol
		.read(&kind, "WH_MONITOR|MONITOR|true|ANALYST")
		.await
		.unwrap()
		.unwrap();

	assert!(record.grant_option);
}
