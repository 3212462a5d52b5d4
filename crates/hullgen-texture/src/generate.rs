//! Main entry point for texture generation.
//!
//! Binds each material to its random stream and output path and hands it to
//! the bitmap encoder, strictly one material at a time.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::bmp::{self, BmpError};
use crate::materials::{Material, StreamGroup};
use crate::rng::DeterministicRng;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/textures";

/// Errors from texture generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("BMP error: {0}")]
    Bmp(#[from] BmpError),

    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Stable error code.
    pub fn code(&self) -> &'static str {
        match self {
            GenerateError::Bmp(BmpError::Io(_)) => "TEXTURE_001",
            GenerateError::Bmp(BmpError::InvalidDimensions(_)) => "TEXTURE_002",
            GenerateError::CreateDir { .. } => "TEXTURE_003",
        }
    }

    /// Error category.
    pub fn category(&self) -> &'static str {
        "texture"
    }
}

/// How random streams are assigned to materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamLayout {
    /// One stream per group, shared in generation order.
    #[default]
    Grouped,
    /// An independent stream per material, derived from its group seed.
    PerTexture,
}

/// Generation settings.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Seed for stream A.
    pub seed_a: u32,
    /// Seed for stream B.
    pub seed_b: u32,
    /// Stream assignment.
    pub layout: StreamLayout,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            seed_a: 42,
            seed_b: 7,
            layout: StreamLayout::Grouped,
        }
    }
}

impl GenerateConfig {
    /// Seed of the stream for `group`.
    pub fn group_seed(&self, group: StreamGroup) -> u32 {
        match group {
            StreamGroup::A => self.seed_a,
            StreamGroup::B => self.seed_b,
        }
    }
}

/// The default output directory.
pub fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Random streams for one generation run.
///
/// Under [`StreamLayout::Grouped`] the two group streams persist across
/// materials; under [`StreamLayout::PerTexture`] a fresh stream is derived for
/// each material.
pub struct StreamSet {
    layout: StreamLayout,
    seed_a: u32,
    seed_b: u32,
    stream_a: DeterministicRng,
    stream_b: DeterministicRng,
    scratch: Option<DeterministicRng>,
}

impl StreamSet {
    /// Create fresh streams for `config`.
    pub fn new(config: &GenerateConfig) -> Self {
        Self {
            layout: config.layout,
            seed_a: config.seed_a,
            seed_b: config.seed_b,
            stream_a: DeterministicRng::new(config.seed_a),
            stream_b: DeterministicRng::new(config.seed_b),
            scratch: None,
        }
    }

    /// The stream `material` should draw from next.
    pub fn stream_for(&mut self, material: Material) -> &mut DeterministicRng {
        match self.layout {
            StreamLayout::Grouped => match material.group() {
                StreamGroup::A => &mut self.stream_a,
                StreamGroup::B => &mut self.stream_b,
            },
            StreamLayout::PerTexture => {
                let base = match material.group() {
                    StreamGroup::A => self.seed_a,
                    StreamGroup::B => self.seed_b,
                };
                let seed = DeterministicRng::derive_texture_seed(base, material.name());
                self.scratch.insert(DeterministicRng::new(seed))
            }
        }
    }
}

/// One texture written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedTexture {
    /// The material.
    pub material: Material,
    /// Path of the written file.
    pub path: PathBuf,
    /// File size in bytes.
    pub size_bytes: u64,
    /// BLAKE3 hash of the file contents.
    pub hash: String,
}

/// Result of a full generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Output directory.
    pub out_dir: PathBuf,
    /// Written textures in generation order.
    pub textures: Vec<GeneratedTexture>,
}

/// Encode one material into memory, drawing noise from `rng`.
pub fn render_material(
    material: Material,
    config: &GenerateConfig,
    rng: &mut DeterministicRng,
) -> Result<Vec<u8>, BmpError> {
    bmp::write_bmp_to_vec(config.width, config.height, |x, y| {
        material.shade(x, y, rng)
    })
}

/// Encode every material into memory, in generation order.
pub fn render_all(config: &GenerateConfig) -> Result<Vec<(Material, Vec<u8>)>, BmpError> {
    let mut streams = StreamSet::new(config);
    Material::ALL
        .into_iter()
        .map(|material| {
            let data = render_material(material, config, streams.stream_for(material))?;
            Ok((material, data))
        })
        .collect()
}

/// Generate all eight textures into `out_dir`.
///
/// The directory (and its parents) is created if absent. Files are written
/// in [`Material::ALL`] order and overwritten if present. The first error
/// aborts the run; files already written stay on disk.
pub fn generate_all(
    out_dir: &Path,
    config: &GenerateConfig,
) -> Result<GenerationReport, GenerateError> {
    std::fs::create_dir_all(out_dir).map_err(|source| GenerateError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut streams = StreamSet::new(config);
    let mut textures = Vec::with_capacity(Material::ALL.len());

    for material in Material::ALL {
        let path = out_dir.join(material.file_name());
        let rng = streams.stream_for(material);
        let (size_bytes, hash) =
            bmp::write_bmp_file_with_hash(&path, config.width, config.height, |x, y| {
                material.shade(x, y, rng)
            })?;

        textures.push(GeneratedTexture {
            material,
            path,
            size_bytes,
            hash,
        });
    }

    Ok(GenerationReport {
        out_dir: out_dir.to_path_buf(),
        textures,
    })
}
