//! Pixel-level property tests on the generated textures.
//!
//! Each test renders the default 256x256 set, decodes the bitmaps and checks
//! a structural property of one material.

use hullgen_texture::{render_all, GenerateConfig, Material, Rgb};
use hullgen_tests::format_validators::{validate_bmp, BmpInfo};

struct Decoded {
    info: BmpInfo,
    data: Vec<u8>,
}

impl Decoded {
    fn pixel(&self, x: u32, y: u32) -> Rgb {
        self.info.pixel(&self.data, x, y)
    }
}

fn render(material: Material) -> Decoded {
    let (_, data) = render_all(&GenerateConfig::default())
        .unwrap()
        .into_iter()
        .find(|(m, _)| *m == material)
        .unwrap();
    let info = validate_bmp(&data).unwrap();
    Decoded { info, data }
}

fn assert_all_pixels(decoded: &Decoded, check: impl Fn(u32, u32, Rgb)) {
    for y in 0..256 {
        for x in 0..256 {
            check(x, y, decoded.pixel(x, y));
        }
    }
}

#[test]
fn test_grate_floor_lines_brighter_than_cells() {
    let grate = render(Material::GrateFloor);

    let line = grate.pixel(0, 0);
    let cell = grate.pixel(10, 10);

    assert!(line.r as i32 - cell.r as i32 > 14, "{:?} vs {:?}", line, cell);
    assert!(line.g as i32 - cell.g as i32 > 9, "{:?} vs {:?}", line, cell);
    assert!(line.b as i32 - cell.b as i32 > 9, "{:?} vs {:?}", line, cell);
}

#[test]
fn test_grate_floor_channel_bounds() {
    let grate = render(Material::GrateFloor);
    assert_all_pixels(&grate, |x, y, c| {
        let on_line = x % 20 < 2 || y % 20 < 2;
        let base_r = if on_line { 110 } else { 80 };
        assert!(
            (base_r - 8..=base_r + 8).contains(&(c.r as i32)),
            "({}, {}) r = {}",
            x,
            y,
            c.r
        );
    });
}

#[test]
fn test_warning_paint_stripes() {
    let paint = render(Material::WarningPaint);

    for y in 0..256 {
        let yellow = paint.pixel(0, y);
        assert!((140..=190).contains(&yellow.r), "y = {}: r = {}", y, yellow.r);

        let black = paint.pixel(22, y);
        assert!((10..=40).contains(&black.r), "y = {}: r = {}", y, black.r);
    }
}

#[test]
fn test_warning_paint_every_column() {
    let paint = render(Material::WarningPaint);
    assert_all_pixels(&paint, |x, y, c| {
        if (x / 22) % 2 == 0 {
            assert!(c.r >= 140 && c.g >= 95, "({}, {}) {:?}", x, y, c);
        } else {
            assert!(c.r <= 40 && c.g <= 40, "({}, {}) {:?}", x, y, c);
        }
    });
}

#[test]
fn test_steel_plate_ranges() {
    let steel = render(Material::SteelPlate);
    assert_all_pixels(&steel, |_, _, c| {
        assert!((83..=107).contains(&c.r));
        assert!((95..=115).contains(&c.g));
        assert!((102..=122).contains(&c.b));
    });
}

#[test]
fn test_rust_panel_ranges() {
    let rust = render(Material::RustPanel);
    assert_all_pixels(&rust, |_, _, c| {
        assert!((90..=150).contains(&c.r));
        assert!((55..=95).contains(&c.g));
        assert!((30..=70).contains(&c.b));
    });
}

#[test]
fn test_water_view_red_is_flat() {
    let water = render(Material::WaterView);
    assert_all_pixels(&water, |_, _, c| {
        assert!((17..=33).contains(&c.r));
    });
}

#[test]
fn test_hull_brushed_follows_rows() {
    let hull = render(Material::HullBrushed);
    assert_all_pixels(&hull, |x, y, c| {
        let band = 110.0 + 35.0 * (y as f64 * 0.25).sin();
        let lo = (band - 12.0).round() as i32;
        let hi = (band + 12.0).round() as i32;
        assert!(
            (lo..=hi).contains(&(c.r as i32)),
            "({}, {}) r = {} outside [{}, {}]",
            x,
            y,
            c.r,
            lo,
            hi
        );
    });
}

#[test]
fn test_pipe_oil_green_follows_columns() {
    let pipe = render(Material::PipeOil);
    assert_all_pixels(&pipe, |x, _, c| {
        let band = 90.0 + 28.0 * (x as f64 * 0.12).sin();
        let lo = (band - 8.0).round() as i32;
        let hi = (band + 8.0).round() as i32;
        assert!((lo..=hi).contains(&(c.g as i32)));
    });
}

#[test]
fn test_deck_plate_seams() {
    let deck = render(Material::DeckPlate);
    assert_all_pixels(&deck, |x, y, c| {
        let on_seam = x % 32 < 2 || y % 32 < 2;
        let base_b = if on_seam { 124 } else { 108 };
        assert!((base_b - 8..=base_b + 8).contains(&(c.b as i32)));
    });
}
