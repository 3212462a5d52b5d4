//! The eight material generators.
//!
//! Every material maps a pixel coordinate plus three draws from a random
//! stream (R, then G, then B) to a clamped color:
//!
//! ```text
//! channel = clamp(base + pattern(x, y) + noise)
//! ```
//!
//! Materials are grouped by the kind of pattern they use: flat noise,
//! grid lines, sinusoidal bands, and painted stripes.

mod banded;
mod flat;
mod gridded;
mod striped;

use std::fmt;
use std::str::FromStr;

use crate::color::Rgb;
use crate::rng::DeterministicRng;

/// Which of the two shared random streams a material draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamGroup {
    /// First stream, shared by the first four materials.
    A,
    /// Second stream, shared by the last four materials.
    B,
}

/// A named procedural material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    SteelPlate,
    RustPanel,
    GrateFloor,
    WaterView,
    HullBrushed,
    PipeOil,
    WarningPaint,
    DeckPlate,
}

impl Material {
    /// All materials in generation order.
    ///
    /// Materials sharing a stream consume it in this order, so the order is
    /// part of the output.
    pub const ALL: [Material; 8] = [
        Material::SteelPlate,
        Material::RustPanel,
        Material::GrateFloor,
        Material::WaterView,
        Material::HullBrushed,
        Material::PipeOil,
        Material::WarningPaint,
        Material::DeckPlate,
    ];

    /// Snake-case material name.
    pub const fn name(self) -> &'static str {
        match self {
            Material::SteelPlate => "steel_plate",
            Material::RustPanel => "rust_panel",
            Material::GrateFloor => "grate_floor",
            Material::WaterView => "water_view",
            Material::HullBrushed => "hull_brushed",
            Material::PipeOil => "pipe_oil",
            Material::WarningPaint => "warning_paint",
            Material::DeckPlate => "deck_plate",
        }
    }

    /// Output file name.
    pub fn file_name(self) -> String {
        format!("{}.bmp", self.name())
    }

    /// The stream this material draws its noise from.
    pub const fn group(self) -> StreamGroup {
        match self {
            Material::SteelPlate
            | Material::RustPanel
            | Material::GrateFloor
            | Material::WaterView => StreamGroup::A,
            Material::HullBrushed
            | Material::PipeOil
            | Material::WarningPaint
            | Material::DeckPlate => StreamGroup::B,
        }
    }

    /// Compute the color of one pixel.
    ///
    /// Consumes exactly three draws from `rng`, one per channel in R, G, B
    /// order.
    pub fn shade(self, x: u32, y: u32, rng: &mut DeterministicRng) -> Rgb {
        match self {
            Material::SteelPlate => flat::steel_plate(rng),
            Material::RustPanel => flat::rust_panel(rng),
            Material::GrateFloor => gridded::grate_floor(x, y, rng),
            Material::WaterView => banded::water_view(x, y, rng),
            Material::HullBrushed => banded::hull_brushed(x, y, rng),
            Material::PipeOil => banded::pipe_oil(x, y, rng),
            Material::WarningPaint => striped::warning_paint(x, rng),
            Material::DeckPlate => gridded::deck_plate(x, y, rng),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown material name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown material '{0}'")]
pub struct UnknownMaterial(pub String);

impl FromStr for Material {
    type Err = UnknownMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Material::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMaterial(s.to_string()))
    }
}
