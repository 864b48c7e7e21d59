//! Grant lifecycle module.
//!
//! This module provides privilege sets, the grant ID codec, resource-kind
//! adapters and the create/read/delete protocol.
//!
//! # Examples
//!
//! ```rust
//! use snowgrant::grants::PrivilegeSet;
//!
//! let set = PrivilegeSet::new(["USAGE", "usage", "OPERATE"]);
//! assert_eq!(set.to_list(), vec!["USAGE", "OPERATE"]);
//! ```

#[cfg(feature = "grants")]
pub use snowgrant_grants::*;
