//! Infrastructure adapters. Implement outbound ports.
//!
//! Catalog file, AI service, report writers, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod persistence;
pub mod report;
pub mod ui;
