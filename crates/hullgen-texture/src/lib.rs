//! Hullgen Texture Generation
//!
//! This crate synthesizes a fixed set of small industrial textures (steel,
//! rust, grating, water, hull plating, pipework, hazard paint and deck
//! plating) and encodes them as uncompressed 24-bit bitmaps. All output is
//! byte-identical given the same seeds, dimensions and stream layout.
//!
//! # Features
//!
//! - **Bitmap Encoder**: 54-byte header, bottom-up rows, B-G-R byte order,
//!   4-byte row alignment, pixels streamed from a callback
//! - **Pattern Primitives**: grid lines, vertical stripes, sinusoidal bands
//! - **Materials**: eight per-pixel color functions driven by seeded noise
//!
//! # Example
//!
//! ```no_run
//! use hullgen_texture::generate::{generate_all, GenerateConfig};
//! use std::path::Path;
//!
//! let report = generate_all(Path::new("assets/textures"), &GenerateConfig::default()).unwrap();
//! for texture in &report.textures {
//!     println!("{} {}", texture.path.display(), texture.hash);
//! }
//! ```
//!
//! # Determinism
//!
//! - PCG32 RNG is used for all random draws
//! - Each pixel draws exactly three values (R, G, B) from its material's stream
//! - Pixels are visited row-major with x innermost, starting at the bottom row
//! - Materials sharing a stream are generated strictly in [`Material::ALL`] order

pub mod bmp;
pub mod color;
pub mod generate;
pub mod materials;
pub mod pattern;
pub mod rng;

// Re-export main types for convenience
pub use bmp::{BmpError, BmpHeader};
pub use color::{clamp_channel, Rgb};
pub use generate::{
    default_output_dir, generate_all, render_all, render_material, GenerateConfig, GenerateError,
    GeneratedTexture, GenerationReport, StreamLayout,
};
pub use materials::{Material, StreamGroup, UnknownMaterial};
pub use pattern::{GridPattern, Pattern2D, StripesPattern, WaveAxis, WavePattern};
pub use rng::DeterministicRng;
