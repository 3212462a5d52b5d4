//! Hullgen CLI - procedural texture generator
//!
//! Writes the eight industrial textures into `assets/textures` under the
//! current directory. Takes no arguments.

use clap::Parser;
use hullgen_texture::default_output_dir;
use std::process::ExitCode;

use hullgen_cli::commands;

/// Hullgen - generate the steel, rust, grate, water, hull, pipe, hazard paint
/// and deck plate bitmaps into assets/textures
#[derive(Parser)]
#[command(name = "hullgen")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let result = commands::generate::run(&default_output_dir());

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
