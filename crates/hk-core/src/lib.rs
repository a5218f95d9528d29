//! # hk-core
//!
//! Core definitions shared by every crate in the holidayskr workspace.
//!
//! This crate provides the single error hierarchy used across the
//! workspace, the `ensure!` / `fail!` macros that build it, and the strict
//! parsers applied to strings at the query boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Miscellaneous utilities (boundary parsers).
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
