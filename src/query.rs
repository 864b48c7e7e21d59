//! Statement builders module.
//!
//! This module provides the GRANT, REVOKE and SHOW GRANTS builders used by the
//! grant lifecycle.
//!
//! # Examples
//!
//! ```rust
//! use snowgrant::query::{CurrentGrantBuilder, GrantBuilder, ObjectType};
//!
//! let builder = CurrentGrantBuilder::new(ObjectType::Warehouse, "LOADING");
//! assert_eq!(builder.show().unwrap(), r#"SHOW GRANTS ON WAREHOUSE "LOADING""#);
//! ```

#[cfg(feature = "query")]
pub use snowgrant_query::*;
