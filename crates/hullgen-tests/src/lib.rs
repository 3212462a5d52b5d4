//! Hullgen End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the texture pipeline:
//!
//! - Generation: config -> eight bitmap files on disk
//! - Validation: bitmap headers parse and agree with the file contents
//! - **Determinism**: byte-identical output across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p hullgen-tests
//! ```

pub mod determinism;
pub mod format_validators;

// Re-export commonly used items
pub use determinism::{compute_hash, verify_determinism, DeterminismResult, DiffInfo};
pub use format_validators::{validate_bmp, BmpFormatError, BmpInfo};
