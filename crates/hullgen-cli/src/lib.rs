//! Hullgen CLI library.
//!
//! Holds the command implementation behind the `hullgen` binary so it can be
//! driven from tests.

pub mod commands;
