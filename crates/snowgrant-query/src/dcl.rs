//! Data Control Language (DCL) support for snowgrant-query
//!
//! This module provides type-safe builders for GRANT, REVOKE and SHOW GRANTS
//! statements.
//!
//! # Examples
//!
//! ```
//! use snowgrant_query::dcl::{Privilege, ObjectType};
//!
//! let privilege = Privilege::new("usage");
//! assert_eq!(privilege.as_sql(), "USAGE");
//!
//! let object_type = ObjectType::Warehouse;
//! assert_eq!(object_type.as_sql(), "WAREHOUSE");
//! ```

mod grant;
mod object;
mod privilege;
mod revoke;
mod show_grants;


pub use grant::GrantStatement;
pub use object::ObjectType;
pub use privilege::Privilege;
pub use revoke::RevokeStatement;
pub use show_grants::ShowGrantsStatement;
