//! Determinism verification for generated textures.
//!
//! Runs a generation function several times and compares the outputs byte by
//! byte, reporting the first difference with surrounding context.
//!
//! # Example
//!
//! ```rust,ignore
//! use hullgen_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| render_all(&config).unwrap().concat(), 3);
//! result.assert_deterministic();
//! ```

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the reference output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the reference output.
    pub hash: String,
    /// If non-deterministic, the first difference found.
    pub diff_info: Option<DiffInfo>,
}

/// Information about the first byte difference found between runs.
#[derive(Debug, Clone)]
pub struct DiffInfo {
    /// Byte offset where the difference was found.
    pub offset: usize,
    /// Value from the first run, if it has a byte at `offset`.
    pub expected: Option<u8>,
    /// Value from the differing run, if it has a byte at `offset`.
    pub actual: Option<u8>,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
    /// Up to 8 reference bytes before the difference.
    pub before: Vec<u8>,
}

fn fmt_byte(byte: Option<u8>) -> String {
    match byte {
        Some(b) => format!("0x{:02X}", b),
        None => "EOF".to_string(),
    }
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {}: expected {}, got {} (run {})",
            self.offset,
            fmt_byte(self.expected),
            fmt_byte(self.actual),
            self.run_index
        )?;
        if !self.before.is_empty() {
            write!(f, "\n  Preceding bytes:")?;
            for b in &self.before {
                write!(f, " {:02X}", b)?;
            }
        }
        Ok(())
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Run generation `runs` times and verify all outputs are identical.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference_bytes = reference.as_ref();
    let hash = compute_hash(reference_bytes);

    let mut diff_info = None;
    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = find_first_difference(reference_bytes, output.as_ref(), run_index) {
            diff_info = Some(diff);
            break;
        }
    }

    DeterminismResult {
        is_deterministic: diff_info.is_none(),
        runs,
        output_size: reference_bytes.len(),
        hash,
        diff_info,
    }
}

/// Find the first byte difference between two outputs, including length
/// mismatches.
pub fn find_first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let offset = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then(|| expected.len().min(actual.len())))?;

    Some(DiffInfo {
        offset,
        expected: expected.get(offset).copied(),
        actual: actual.get(offset).copied(),
        run_index,
        before: expected[offset.saturating_sub(8)..offset.min(expected.len())].to_vec(),
    })
}

/// Compute BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_outputs() {
        let result = verify_determinism(|| vec![1u8, 2, 3, 4], 3);
        assert!(result.is_deterministic);
        assert_eq!(result.output_size, 4);
        assert_eq!(result.hash, compute_hash(&[1, 2, 3, 4]));
        result.assert_deterministic();
    }

    #[test]
    fn test_detects_changed_byte() {
        let counter = std::cell::Cell::new(0u8);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![0u8, 0, counter.get()]
            },
            2,
        );

        assert!(!result.is_deterministic);
        let diff = result.diff_info.unwrap();
        assert_eq!(diff.offset, 2);
        assert_eq!(diff.expected, Some(1));
        assert_eq!(diff.actual, Some(2));
        assert_eq!(diff.before, vec![0, 0]);
    }

    #[test]
    fn test_detects_length_mismatch() {
        let diff = find_first_difference(&[1, 2, 3], &[1, 2], 1).unwrap();
        assert_eq!(diff.offset, 2);
        assert_eq!(diff.expected, Some(3));
        assert_eq!(diff.actual, None);
        assert!(diff.to_string().contains("EOF"));
    }

    #[test]
    #[should_panic(expected = "Non-deterministic output detected")]
    fn test_assert_panics_on_difference() {
        let counter = std::cell::Cell::new(0u8);
        verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![counter.get()]
            },
            2,
        )
        .assert_deterministic();
    }
}
