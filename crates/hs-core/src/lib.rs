//! Table schema, validation, and the read-only table store for Heldenschmiede.
//!
//! This crate defines the four tables the character generator draws from
//! (races, classes, skills, backgrounds), parses them from JSON, and checks
//! that they are internally consistent. A [`Tables`] value can only be
//! obtained through validation, so anything holding one may sample from it
//! without further checks.

/// Error types used throughout the crate.
pub mod error;
/// Reading table files from disk or from strings.
pub mod loader;
/// Entity schemas for each table.
pub mod schema;
/// The validated, read-only table store.
pub mod tables;
/// Structural and referential checks over a raw table set.
pub mod validate;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export schema types.
pub use schema::{AffinityMap, Background, ClassInfo, DEFAULT_AFFINITY, Race};
/// Re-export table store types.
pub use tables::{MIN_SKILLS, TableSet, Tables};
/// Re-export validation types.
pub use validate::{IssueKind, ValidationIssue, validate_tables};
