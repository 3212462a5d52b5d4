//! Generate command implementation
//!
//! Writes the full texture set into the output directory and prints a single
//! confirmation line.

use anyhow::{Context, Result};
use colored::Colorize;
use hullgen_texture::{generate_all, GenerateConfig, GenerationReport};
use std::path::Path;
use std::process::ExitCode;

/// Run the generate command
///
/// # Arguments
/// * `out_dir` - Directory to write the textures into (created if absent)
///
/// # Returns
/// Exit code: 0 on success; I/O failures are returned as errors
pub fn run(out_dir: &Path) -> Result<ExitCode> {
    let report = generate(out_dir, &GenerateConfig::default())?;
    println!("{}", confirmation_line(&report));
    Ok(ExitCode::SUCCESS)
}

/// Generate textures with an explicit config, without printing.
pub fn generate(out_dir: &Path, config: &GenerateConfig) -> Result<GenerationReport> {
    generate_all(out_dir, config)
        .with_context(|| format!("Failed to generate textures in {}", out_dir.display()))
}

/// The line printed after a successful run.
pub fn confirmation_line(report: &GenerationReport) -> String {
    format!(
        "{} {}",
        "Generated textures in".green().bold(),
        report.out_dir.display()
    )
}
