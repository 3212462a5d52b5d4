//! Binary format validators for test infrastructure.
//!
//! Validators parse the bitmap header and report structured information
//! about the file, or the first field that is wrong.

mod bmp;

pub use bmp::{validate_bmp, BmpFormatError, BmpInfo};
