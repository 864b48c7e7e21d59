//! Shared helpers for snowgrant-grants integration tests

pub mod fixtures;
