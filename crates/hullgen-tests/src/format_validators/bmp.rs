//! BMP file format validator.

use hullgen_texture::Rgb;

const HEADER_SIZE: usize = 54;

/// Information extracted from a 24-bit BMP header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpInfo {
    /// Total file size declared in the file header.
    pub file_size: u32,
    /// Offset of the pixel array.
    pub data_offset: u32,
    /// Info header size (40 for BITMAPINFOHEADER).
    pub dib_header_size: u32,
    /// Image width in pixels.
    pub width: i32,
    /// Image height in pixels (positive = bottom-up).
    pub height: i32,
    /// Color planes (always 1).
    pub planes: u16,
    /// Bits per pixel.
    pub bits_per_pixel: u16,
    /// Compression method (0 = none).
    pub compression: u32,
    /// Declared size of the pixel array.
    pub image_size: u32,
    /// Horizontal resolution in pixels per meter.
    pub x_pixels_per_meter: i32,
    /// Vertical resolution in pixels per meter.
    pub y_pixels_per_meter: i32,
    /// Palette color count.
    pub colors_used: u32,
    /// Important color count.
    pub colors_important: u32,
}

impl BmpInfo {
    /// Padded byte length of one pixel row.
    pub fn row_stride(&self) -> usize {
        (self.width as usize * 3 + 3) & !3
    }

    /// Decode the pixel at top-down coordinate `(x, y)`.
    ///
    /// Rows are stored bottom-up, so `y = 0` is the last stored row.
    pub fn pixel(&self, data: &[u8], x: u32, y: u32) -> Rgb {
        let row = (self.height as usize - 1) - y as usize;
        let offset = self.data_offset as usize + row * self.row_stride() + x as usize * 3;
        Rgb::new(data[offset + 2], data[offset + 1], data[offset])
    }

    /// Padding bytes at the end of stored row `row` (0 = bottom row).
    pub fn row_padding<'a>(&self, data: &'a [u8], row: usize) -> &'a [u8] {
        let start = self.data_offset as usize + row * self.row_stride();
        &data[start + self.width as usize * 3..start + self.row_stride()]
    }
}

fn read_u16(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

fn read_i32(data: &[u8], offset: usize) -> i32 {
    read_u32(data, offset) as i32
}

/// Why a byte buffer is not a valid 24-bit uncompressed bitmap.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BmpFormatError {
    #[error("file too short: {len} bytes, header needs 54")]
    TooShort { len: usize },

    #[error("bad signature {0:02x?}, expected \"BM\"")]
    Signature([u8; 2]),

    #[error("declared file size {declared} but buffer holds {actual} bytes")]
    FileSize { declared: u32, actual: usize },

    #[error("{field} at offset {offset} is {found}, expected {expected}")]
    Field {
        field: &'static str,
        offset: usize,
        found: u32,
        expected: u32,
    },

    #[error("non-positive dimensions {width}x{height}")]
    Dimensions { width: i32, height: i32 },

    #[error("image size {declared} does not match padded rows ({expected} bytes)")]
    ImageSize { declared: u32, expected: u64 },
}

impl BmpFormatError {
    /// Header offset of the offending field, when there is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            BmpFormatError::TooShort { .. } => None,
            BmpFormatError::Signature(_) => Some(0),
            BmpFormatError::FileSize { .. } => Some(2),
            BmpFormatError::Field { offset, .. } => Some(*offset),
            BmpFormatError::Dimensions { .. } => Some(18),
            BmpFormatError::ImageSize { .. } => Some(34),
        }
    }
}

/// Check a fixed header field, reporting its name and offset on mismatch.
fn expect_field(
    field: &'static str,
    offset: usize,
    found: u32,
    expected: u32,
) -> Result<(), BmpFormatError> {
    if found == expected {
        Ok(())
    } else {
        Err(BmpFormatError::Field {
            field,
            offset,
            found,
            expected,
        })
    }
}

/// Validate a 24-bit uncompressed BMP file and extract header information.
///
/// Checks the `BM` signature, that the declared file size matches the
/// buffer, the fixed header fields (reserved words, pixel offset 54, a
/// 40-byte info header, one plane, 24 bits per pixel, no compression), and
/// that the declared image size equals the padded row stride times the
/// height.
pub fn validate_bmp(data: &[u8]) -> Result<BmpInfo, BmpFormatError> {
    if data.len() < HEADER_SIZE {
        return Err(BmpFormatError::TooShort { len: data.len() });
    }

    if &data[0..2] != b"BM" {
        return Err(BmpFormatError::Signature([data[0], data[1]]));
    }

    let info = BmpInfo {
        file_size: read_u32(data, 2),
        data_offset: read_u32(data, 10),
        dib_header_size: read_u32(data, 14),
        width: read_i32(data, 18),
        height: read_i32(data, 22),
        planes: read_u16(data, 26),
        bits_per_pixel: read_u16(data, 28),
        compression: read_u32(data, 30),
        image_size: read_u32(data, 34),
        x_pixels_per_meter: read_i32(data, 38),
        y_pixels_per_meter: read_i32(data, 42),
        colors_used: read_u32(data, 46),
        colors_important: read_u32(data, 50),
    };

    if info.file_size as usize != data.len() {
        return Err(BmpFormatError::FileSize {
            declared: info.file_size,
            actual: data.len(),
        });
    }

    expect_field("reserved word", 6, read_u16(data, 6) as u32, 0)?;
    expect_field("reserved word", 8, read_u16(data, 8) as u32, 0)?;
    expect_field("pixel data offset", 10, info.data_offset, HEADER_SIZE as u32)?;
    expect_field("info header size", 14, info.dib_header_size, 40)?;

    if info.width <= 0 || info.height <= 0 {
        return Err(BmpFormatError::Dimensions {
            width: info.width,
            height: info.height,
        });
    }

    expect_field("color planes", 26, info.planes as u32, 1)?;
    expect_field("bits per pixel", 28, info.bits_per_pixel as u32, 24)?;
    expect_field("compression", 30, info.compression, 0)?;

    let expected = info.row_stride() as u64 * info.height as u64;
    if info.image_size as u64 != expected || HEADER_SIZE as u64 + expected != data.len() as u64 {
        return Err(BmpFormatError::ImageSize {
            declared: info.image_size,
            expected,
        });
    }

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hullgen_texture::bmp::write_bmp_to_vec;

    fn sample_bmp(width: u32, height: u32) -> Vec<u8> {
        write_bmp_to_vec(width, height, |x, y| Rgb::new(x as u8, y as u8, 77)).unwrap()
    }

    #[test]
    fn test_valid_bmp() {
        let data = sample_bmp(5, 3);
        let info = validate_bmp(&data).unwrap();

        assert_eq!(info.width, 5);
        assert_eq!(info.height, 3);
        assert_eq!(info.bits_per_pixel, 24);
        assert_eq!(info.compression, 0);
        assert_eq!(info.row_stride(), 16);
        assert_eq!(info.x_pixels_per_meter, 2835);
        assert_eq!(info.y_pixels_per_meter, 2835);
    }

    #[test]
    fn test_pixel_decoding() {
        let data = sample_bmp(5, 3);
        let info = validate_bmp(&data).unwrap();

        assert_eq!(info.pixel(&data, 0, 0), Rgb::new(0, 0, 77));
        assert_eq!(info.pixel(&data, 4, 2), Rgb::new(4, 2, 77));
        assert_eq!(info.row_padding(&data, 1), &[0]);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate_bmp(b"BM").unwrap_err(),
            BmpFormatError::TooShort { len: 2 }
        );
    }

    #[test]
    fn test_bad_signature() {
        let mut data = sample_bmp(4, 4);
        data[0] = b'X';
        let err = validate_bmp(&data).unwrap_err();
        assert_eq!(err, BmpFormatError::Signature([b'X', b'M']));
        assert_eq!(err.offset(), Some(0));
    }

    #[test]
    fn test_truncated_file() {
        let data = sample_bmp(4, 4);
        let err = validate_bmp(&data[..data.len() - 1]).unwrap_err();
        assert!(matches!(err, BmpFormatError::FileSize { .. }));
        assert_eq!(err.offset(), Some(2));
    }

    #[test]
    fn test_wrong_bit_depth() {
        let mut data = sample_bmp(4, 4);
        data[28] = 32;
        let err = validate_bmp(&data).unwrap_err();
        assert_eq!(
            err,
            BmpFormatError::Field {
                field: "bits per pixel",
                offset: 28,
                found: 32,
                expected: 24,
            }
        );
        assert_eq!(
            err.to_string(),
            "bits per pixel at offset 28 is 32, expected 24"
        );
    }

    #[test]
    fn test_compressed_rejected() {
        let mut data = sample_bmp(4, 4);
        data[30] = 1;
        assert_eq!(validate_bmp(&data).unwrap_err().offset(), Some(30));
    }

    #[test]
    fn test_image_size_mismatch() {
        let mut data = sample_bmp(5, 3);
        data[34] = 45;
        assert_eq!(
            validate_bmp(&data).unwrap_err(),
            BmpFormatError::ImageSize {
                declared: 45,
                expected: 48,
            }
        );
    }
}
