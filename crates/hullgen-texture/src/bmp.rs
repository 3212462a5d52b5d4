//! Uncompressed 24-bit bitmap writer.
//!
//! Output is a 54-byte header (14-byte file header plus 40-byte
//! BITMAPINFOHEADER) followed by pixel rows stored bottom-up, each row in
//! B, G, R byte order and zero-padded to a multiple of 4 bytes. The pixel
//! callback is invoked once per pixel, rows from `y = height - 1` down to
//! `y = 0`, and `x = 0..width` within a row.

use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::color::Rgb;

/// Size of the file header plus the info header.
pub const HEADER_SIZE: u32 = 54;

/// Size of the BITMAPINFOHEADER.
pub const DIB_HEADER_SIZE: u32 = 40;

/// Bits per pixel for the only supported layout.
pub const BITS_PER_PIXEL: u16 = 24;

/// Resolution written to both axes, in pixels per meter (about 72 DPI).
pub const PIXELS_PER_METER: i32 = 2835;

/// Errors from bitmap operations.
#[derive(Debug, Error)]
pub enum BmpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Byte length of one stored pixel row, rounded up to a multiple of 4.
///
/// Computed in 64 bits so any `u32` width is accepted; [`BmpHeader::new`]
/// decides whether the result fits the header.
#[inline]
pub const fn row_stride(width: u32) -> u64 {
    (width as u64 * 3 + 3) & !3
}

/// Total file size for a bitmap of the given dimensions.
#[inline]
pub const fn file_size(width: u32, height: u32) -> u64 {
    HEADER_SIZE as u64 + row_stride(width) * height as u64
}

/// The fixed 54-byte header of a 24-bit uncompressed bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub width: u32,
    pub height: u32,
}

impl BmpHeader {
    /// Create a header, rejecting dimensions the format cannot describe.
    pub fn new(width: u32, height: u32) -> Result<Self, BmpError> {
        if width == 0 || height == 0 {
            return Err(BmpError::InvalidDimensions(format!(
                "{}x{} (width and height must be positive)",
                width, height
            )));
        }
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(BmpError::InvalidDimensions(format!(
                "{}x{} (exceeds signed 32-bit header fields)",
                width, height
            )));
        }
        if file_size(width, height) > u32::MAX as u64 {
            return Err(BmpError::InvalidDimensions(format!(
                "{}x{} (file size exceeds 4 GiB)",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Padded row length in bytes.
    pub fn row_stride(&self) -> u32 {
        // Bounded by the file size check in `new`.
        row_stride(self.width) as u32
    }

    /// Size of the pixel array in bytes.
    pub fn image_size(&self) -> u32 {
        self.row_stride() * self.height
    }

    /// Total file size in bytes.
    pub fn file_size(&self) -> u32 {
        HEADER_SIZE + self.image_size()
    }

    /// Encode the header into its on-disk form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE as usize);
        self.write(&mut out).expect("writing to a Vec should not fail");
        out
    }

    /// Write the header fields in order, all little-endian.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        // File header
        writer.write_all(b"BM")?;
        writer.write_all(&self.file_size().to_le_bytes())?;
        writer.write_all(&0u16.to_le_bytes())?; // Reserved
        writer.write_all(&0u16.to_le_bytes())?; // Reserved
        writer.write_all(&HEADER_SIZE.to_le_bytes())?; // Pixel data offset

        // BITMAPINFOHEADER
        writer.write_all(&DIB_HEADER_SIZE.to_le_bytes())?;
        writer.write_all(&(self.width as i32).to_le_bytes())?;
        writer.write_all(&(self.height as i32).to_le_bytes())?;
        writer.write_all(&1u16.to_le_bytes())?; // Color planes
        writer.write_all(&BITS_PER_PIXEL.to_le_bytes())?;
        writer.write_all(&0u32.to_le_bytes())?; // Compression (none)
        writer.write_all(&self.image_size().to_le_bytes())?;
        writer.write_all(&PIXELS_PER_METER.to_le_bytes())?;
        writer.write_all(&PIXELS_PER_METER.to_le_bytes())?;
        writer.write_all(&0u32.to_le_bytes())?; // Palette colors
        writer.write_all(&0u32.to_le_bytes())?; // Important colors

        Ok(())
    }
}

/// Write a bitmap to any writer, pulling pixels from `pixel_fn`.
pub fn write_bmp<W, F>(writer: &mut W, width: u32, height: u32, mut pixel_fn: F) -> Result<(), BmpError>
where
    W: Write,
    F: FnMut(u32, u32) -> Rgb,
{
    let header = BmpHeader::new(width, height)?;
    header.write(writer)?;

    let stride = header.row_stride() as usize;
    let mut row = Vec::with_capacity(stride);

    for y in (0..height).rev() {
        row.clear();
        for x in 0..width {
            row.extend_from_slice(&pixel_fn(x, y).to_bgr());
        }
        row.resize(stride, 0);
        writer.write_all(&row)?;
    }

    Ok(())
}

/// Write a bitmap to a file, creating or truncating it.
///
/// A failure part-way through leaves a truncated file behind.
pub fn write_bmp_file<F>(path: &Path, width: u32, height: u32, pixel_fn: F) -> Result<(), BmpError>
where
    F: FnMut(u32, u32) -> Rgb,
{
    // Validate before touching the filesystem.
    BmpHeader::new(width, height)?;

    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_bmp(&mut writer, width, height, pixel_fn)?;
    writer.flush()?;

    Ok(())
}

/// Write a bitmap to a file and return its size and BLAKE3 hash.
///
/// Pixels are streamed straight to the file; the image is never held in
/// memory as a whole.
pub fn write_bmp_file_with_hash<F>(
    path: &Path,
    width: u32,
    height: u32,
    pixel_fn: F,
) -> Result<(u64, String), BmpError>
where
    F: FnMut(u32, u32) -> Rgb,
{
    BmpHeader::new(width, height)?;

    let file = std::fs::File::create(path)?;
    let mut writer = HashingWriter::new(BufWriter::new(file));
    write_bmp(&mut writer, width, height, pixel_fn)?;
    writer.flush()?;

    Ok((writer.bytes_written(), writer.hex_digest()))
}

/// Writer adapter that hashes everything passing through it.
pub struct HashingWriter<W> {
    inner: W,
    hasher: blake3::Hasher,
    written: u64,
}

impl<W: Write> HashingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: blake3::Hasher::new(),
            written: 0,
        }
    }

    /// Number of bytes accepted by the inner writer.
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// BLAKE3 hex digest of the bytes written so far.
    pub fn hex_digest(&self) -> String {
        self.hasher.finalize().to_hex().to_string()
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Encode a bitmap into memory.
pub fn write_bmp_to_vec<F>(width: u32, height: u32, pixel_fn: F) -> Result<Vec<u8>, BmpError>
where
    F: FnMut(u32, u32) -> Rgb,
{
    let header = BmpHeader::new(width, height)?;
    let mut data = Vec::with_capacity(header.file_size() as usize);
    write_bmp(&mut data, width, height, pixel_fn)?;
    Ok(data)
}

/// Compute the BLAKE3 hash of encoded bitmap data.
pub fn hash_bmp(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}
