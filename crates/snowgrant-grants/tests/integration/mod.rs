//! Protocol scenarios grouped by concern

pub mod lifecycle;
pub mod reconciliation;
pub mod settings;
