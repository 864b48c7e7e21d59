//! Create, read and delete round trips against the in-memory account

use rstest::rstest;
use snowgrant_grants::{GrantKind, GrantRequest, KindRegistry};
use std::collections::{BTreeMap, BTreeSet};

use crate::common::fake_account::FakeAccount;
use crate::common::fixtures::{account, protocol_for, registry};

fn roles(names: &[&str]) -> BTreeSet<String> {
	names.iter().map(|name| name.to_string()).collect()
}

// ============================================================================
// Happy path
// ============================================================================

/// Test: resource monitor grant from creation to deletion
///
/// **Category**: Happy Path
/// **Verifies**: the ID format, the statements issued and the observed state
#[rstest]
#[tokio::test]
async fn test_resource_monitor_end_to_end(account: FakeAccount, registry: KindRegistry) {
	let protocol = protocol_for(&account);
	let kind = registry.get("resource_monitor").unwrap();
	let request = GrantRequest::new("WH_MONITOR")
		.privilege("MONITOR")
		.role("ANALYST");

	// Create
	let id = protocol.create(kind.as_ref(), &request).await.unwrap();
	assert_eq!(id, "WH_MONITOR|MONITOR|false|ANALYST");
	assert_eq!(
		account.statements(),
		vec![r#"GRANT MONITOR ON RESOURCE MONITOR "WH_MONITOR" TO ROLE "ANALYST""#]
	);

	// Read
	let record = protocol.read(kind.as_ref(), &id).await.unwrap().unwrap();
	assert_eq!(record.resource_name, "WH_MONITOR");
	assert_eq!(record.privilege, "MONITOR");
	assert_eq!(record.roles, roles(&["ANALYST"]));
	assert!(!record.grant_option);

	// Delete
	protocol.delete(kind.as_ref(), &id).await.unwrap();
	assert_eq!(
		account.statements_starting_with("REVOKE"),
		vec![r#"REVOKE MONITOR ON RESOURCE MONITOR "WH_MONITOR" FROM ROLE "ANALYST""#]
	);
	assert!(
		account
			.role_grants(kind.as_ref(), "WH_MONITOR", "MONITOR")
			.is_empty()
	);
}

/// Test: apply returns the ID together with the observed record
///
/// **Category**: Happy Path
/// **Verifies**: create followed by read
#[rstest]
#[tokio::test]
async fn test_apply_reads_back_created_grant(account: FakeAccount) {
	let protocol = protocol_for(&account);
	let kind = GrantKind::warehouse();

	let applied = protocol
		.apply(
			&kind,
			&GrantRequest::new("LOADING")
				.privilege("operate")
				.roles(["ETL", "OPS"])
				.with_grant_option(true),
		)
		.await
		.unwrap();

	assert_eq!(applied.id, "LOADING|OPERATE|true|ETL|OPS");
	let record = applied.record.unwrap();
	assert_eq!(record.roles, roles(&["ETL", "OPS"]));
	assert!(record.grant_option);
	assert_eq!(
		account.statements(),
		vec![
			r#"GRANT OPERATE ON WAREHOUSE "LOADING" TO ROLE "ETL" WITH GRANT OPTION"#,
			r#"GRANT OPERATE ON WAREHOUSE "LOADING" TO ROLE "OPS" WITH GRANT OPTION"#,
			r#"SHOW GRANTS ON WAREHOUSE "LOADING""#,
		]
	);
}

/// Test: table grants quote each part of the qualified name
///
/// **Category**: Happy Path
/// **Verifies**: dotted names flow through create and read
#[rstest]
#[tokio::test]
async fn test_table_grant_uses_qualified_name(account: FakeAccount) {
	let protocol = protocol_for(&account);
	let kind = GrantKind::table();

	let id = protocol
		.create(
			&kind,
			&GrantRequest::new("ANALYTICS.PUBLIC.ORDERS").role("REPORTING"),
		)
		.await
		.unwrap();

	assert_eq!(id, "ANALYTICS.PUBLIC.ORDERS|SELECT|false|REPORTING");
	assert_eq!(
		account.statements(),
		vec![r#"GRANT SELECT ON TABLE "ANALYTICS"."PUBLIC"."ORDERS" TO ROLE "REPORTING""#]
	);

	let record = protocol.read(&kind, &id).await.unwrap().unwrap();
	assert_eq!(record.roles, roles(&["REPORTING"]));
}

/// Test: account-level privileges have no object name in statements
///
/// **Category**: Happy Path
/// **Verifies**: the ACCOUNT kind end to end
#[rstest]
#[tokio::test]
async fn test_account_level_grant() {
	let kind = GrantKind::account();
	let account = FakeAccount::new().with_object(&kind, "ignored");
	let protocol = protocol_for(&account);

	let id = protocol
		.create(
			&kind,
			&GrantRequest::new("prod").privilege("manage grants").role("SECURITYADMIN"),
		)
		.await
		.unwrap();

	assert_eq!(id, "prod|MANAGE GRANTS|false|SECURITYADMIN");
	assert_eq!(
		account.statements(),
		vec![r#"GRANT MANAGE GRANTS ON ACCOUNT TO ROLE "SECURITYADMIN""#]
	);

	protocol.delete(&kind, &id).await.unwrap();
	assert_eq!(
		account.statements_starting_with("REVOKE"),
		vec![r#"REVOKE MANAGE GRANTS ON ACCOUNT FROM ROLE "SECURITYADMIN""#]
	);
}

/// Test: every standard kind completes a lifecycle
///
/// **Category**: Happy Path
/// **Verifies**: one mechanism serves all kinds
#[rstest]
#[case("database", "ANALYTICS")]
#[case("schema", "ANALYTICS.PUBLIC")]
#[case("warehouse", "LOADING")]
#[case("resource_monitor", "WH_MONITOR")]
#[case("integration", "S3_INT")]
#[case("table", "ANALYTICS.PUBLIC.ORDERS")]
#[case("view", "ANALYTICS.PUBLIC.DAILY")]
#[tokio::test]
async fn test_every_kind_round_trips(
	registry: KindRegistry,
	#[case] kind_name: &str,
	#[case] resource: &str,
) {
	let kind = registry.get(kind_name).unwrap();
	let account = FakeAccount::new().with_object(kind.as_ref(), resource);
	let protocol = protocol_for(&account);

	let id = protocol
		.create(kind.as_ref(), &GrantRequest::new(resource).role("R"))
		.await
		.unwrap();
	let record = protocol.read(kind.as_ref(), &id).await.unwrap().unwrap();
	assert_eq!(record.privilege, kind.default_privilege());
	assert_eq!(record.roles, roles(&["R"]));

	protocol.delete(kind.as_ref(), &id).await.unwrap();
	let record = protocol.read(kind.as_ref(), &id).await.unwrap().unwrap();
	assert!(record.roles.is_empty());
}

// ============================================================================
// Idempotency
// ============================================================================

/// Test: deleting twice succeeds both times
///
/// **Category**: Idempotency
/// **Verifies**: already-revoked grants count as revoked
#[rstest]
#[tokio::test]
async fn test_delete_is_idempotent(account: FakeAccount) {
	let protocol = protocol_for(&account);
	let kind = GrantKind::resource_monitor();
	let id = protocol
		.create(&kind, &GrantRequest::new("WH_MONITOR").role("ANALYST"))
		.await
		.unwrap();

	protocol.delete(&kind, &id).await.unwrap();
	protocol.delete(&kind, &id).await.unwrap();

	assert_eq!(account.statements_starting_with("REVOKE").len(), 2);
}

/// Test: deleting after the object itself was dropped
///
/// **Category**: Idempotency
/// **Verifies**: object-not-found on revoke counts as revoked
#[rstest]
#[tokio::test]
async fn test_delete_after_object_dropped(account: FakeAccount) {
	let protocol = protocol_for(&account);
	let kind = GrantKind::warehouse();
	let id = protocol
		.create(&kind, &GrantRequest::new("LOADING").roles(["A", "B"]))
		.await
		.unwrap();

	account.drop_object(&kind, "LOADING");

	protocol.delete(&kind, &id).await.unwrap();
	assert_eq!(account.statements_starting_with("REVOKE").len(), 2);
}

/// Test: a grant created without roles leaves foreign grants alone
///
/// **Category**: Lifecycle
/// **Verifies**: create and delete of a role-less grant issue no statements
#[rstest]
#[tokio::test]
async fn test_role_less_grant_never_touches_foreign_roles(account: FakeAccount) {
	let kind = GrantKind::warehouse();
	account.seed_grant(&kind, "LOADING", "USAGE", "FOREIGN_ADMIN", false);
	let protocol = protocol_for(&account);

	let id = protocol
		.create(&kind, &GrantRequest::new("LOADING"))
		.await
		.unwrap();
	assert_eq!(id, "LOADING|USAGE|false");

	let record = protocol.read(&kind, &id).await.unwrap().unwrap();
	assert!(record.roles.is_empty());

	protocol.delete(&kind, &id).await.unwrap();

	assert!(account.statements_starting_with("GRANT").is_empty());
	assert!(account.statements_starting_with("REVOKE").is_empty());
	assert_eq!(
		account.role_grants(&kind, "LOADING", "USAGE"),
		BTreeMap::from([("FOREIGN_ADMIN".to_string(), false)])
	);
}

/// Test: a previously persisted ID in the version 1 envelope
///
/// **Category**: Compatibility
/// **Verifies**: `!1|` IDs read like bare ones
#[rstest]
#[tokio::test]
async fn test_enveloped_id_is_readable(account: FakeAccount) {
	let kind = GrantKind::resource_monitor();
	account.seed_grant(&kind, "WH_MONITOR", "MONITOR", "ANALYST", false);
	let protocol = protocol_for(&account);

	let record = protocol
		.read(&kind, "!1|WH_MONITOR|MONITOR|false|ANALYST")
		.await
		.unwrap()
		.unwrap();

	assert_eq!(record.roles, roles(&["ANALYST"]));
}
