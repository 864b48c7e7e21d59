//! Common test fixtures for snowgrant-grants tests
//!
//! This module provides reusable test fixtures using rstest framework.

use rstest::*;
use snowgrant_grants::{GrantKind, GrantProtocol, KindRegistry};

use super::fake_account::FakeAccount;

/// Registry with every built-in kind
#[fixture]
pub fn registry() -> KindRegistry {
	KindRegistry::standard()
}

/// Account holding one object per kind used across the suite:
/// - resource monitor `WH_MONITOR`
/// - warehouse `LOADING`
/// - database `ANALYTICS`
/// - table `ANALYTICS.PUBLIC.ORDERS`
#[fixture]
pub fn account() -> FakeAccount {
	FakeAccount::new()
		.with_object(&GrantKind::resource_monitor(), "WH_MONITOR")
		.with_object(&GrantKind::warehouse(), "LOADING")
		.with_object(&GrantKind::database(), "ANALYTICS")
		.with_object(&GrantKind::table(), "ANALYTICS.PUBLIC.ORDERS")
}

/// Protocol over a clone of the account fixture, so tests can inspect the
/// account while the protocol drives it
pub fn protocol_for(account: &FakeAccount) -> GrantProtocol<FakeAccount> {
	GrantProtocol::new(account.clone())
}
