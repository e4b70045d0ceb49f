//! The combined header block of a BMP file.

use alloc::vec::Vec;
use core::fmt;

use crate::{
  error::BmpError,
  file_header::BmpFileHeader,
  info_header::{DibField, DibHeader},
};

/// Everything in a BMP file before the pixel array.
///
/// Parsing keeps every byte it reads, decoded or not, so writing the header
/// back out is byte-for-byte identical to the input. Only a handful of
/// fields are individually decoded; the rest ride along opaquely.
#[derive(Debug, Clone)]
pub struct BmpHeaderInfo {
  file: BmpFileHeader,
  dib: DibHeader,
}

impl BmpHeaderInfo {
  /// Parses the headers off the front of a BMP file's bytes.
  ///
  /// The returned remainder starts at the pixel array.
  pub fn try_from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), BmpError> {
    let (file, rest) = BmpFileHeader::try_from_bytes(bytes)?;
    let (dib, rest) = DibHeader::try_from_bytes(rest, file.pixel_array_offset.get())?;
    Ok((Self { file, dib }, rest))
  }

  /// The fixed 14 byte file header.
  #[inline]
  #[must_use]
  pub fn file_header(&self) -> &BmpFileHeader {
    &self.file
  }

  /// The DIB header block.
  #[inline]
  #[must_use]
  pub fn dib_header(&self) -> &DibHeader {
    &self.dib
  }

  /// The total file size declared by the file header.
  #[inline]
  #[must_use]
  pub fn file_size(&self) -> u32 {
    self.file.file_size.get()
  }

  /// Where the pixel array starts, as a byte offset from the file start.
  #[inline]
  #[must_use]
  pub fn pixel_array_offset(&self) -> u32 {
    self.file.pixel_array_offset.get()
  }

  /// Image width in pixels.
  #[inline]
  pub fn width(&self) -> Result<u32, BmpError> {
    self.dib.field(DibField::Width)
  }

  /// Image height in pixels, as declared by the DIB header.
  ///
  /// [Bitmap::height](crate::Bitmap::height) derives height from the actual
  /// pixel buffer instead; for a well-formed file the two agree.
  #[inline]
  pub fn height(&self) -> Result<u32, BmpError> {
    self.dib.field(DibField::Height)
  }

  /// Number of color planes. Should always be 1.
  #[inline]
  pub fn color_plane_count(&self) -> Result<u32, BmpError> {
    self.dib.field(DibField::ColorPlaneCount)
  }

  /// Bits per pixel.
  #[inline]
  pub fn bits_per_pixel(&self) -> Result<u32, BmpError> {
    self.dib.field(DibField::BitsPerPixel)
  }

  /// Bytes per pixel.
  ///
  /// Fails with [UnsupportedColorDepth](BmpError::UnsupportedColorDepth)
  /// unless the bit depth is a nonzero whole number of bytes. Packed
  /// sub-byte depths (1/4 bpp indexed images) are not supported.
  pub fn bytes_per_pixel(&self) -> Result<usize, BmpError> {
    let bits = self.bits_per_pixel()?;
    if bits == 0 || bits % 8 != 0 {
      return Err(BmpError::UnsupportedColorDepth);
    }
    Ok((bits / 8) as usize)
  }

  /// The compression method field. 0 means uncompressed RGB.
  #[inline]
  pub fn compression_method(&self) -> Result<u32, BmpError> {
    self.dib.field(DibField::CompressionMethod)
  }

  /// Size of the raw pixel data in bytes, as declared. May be 0 for
  /// uncompressed images.
  #[inline]
  pub fn raw_image_size(&self) -> Result<u32, BmpError> {
    self.dib.field(DibField::RawImageSize)
  }

  /// Horizontal resolution, pixels per meter.
  #[inline]
  pub fn horizontal_resolution(&self) -> Result<u32, BmpError> {
    self.dib.field(DibField::HorizontalResolution)
  }

  /// Vertical resolution, pixels per meter.
  #[inline]
  pub fn vertical_resolution(&self) -> Result<u32, BmpError> {
    self.dib.field(DibField::VerticalResolution)
  }

  /// Number of palette entries, 0 meaning the full default palette.
  #[inline]
  pub fn color_palette_count(&self) -> Result<u32, BmpError> {
    self.dib.field(DibField::ColorPaletteCount)
  }

  /// Number of "important" colors, 0 meaning all of them. Generally ignored.
  #[inline]
  pub fn important_color_count(&self) -> Result<u32, BmpError> {
    self.dib.field(DibField::ImportantColorCount)
  }

  /// Appends the complete header block to `out`, byte-for-byte as parsed:
  /// file header, DIB length bytes, DIB body, trailing blob.
  pub fn write_into(&self, out: &mut Vec<u8>) {
    out.extend_from_slice(self.file.as_bytes());
    self.dib.write_into(out);
  }

  /// The serialized header block.
  #[must_use]
  pub fn to_vec(&self) -> Vec<u8> {
    let mut out = Vec::new();
    self.write_into(&mut out);
    out
  }
}

impl fmt::Display for BmpHeaderInfo {
  /// One line of the vitals.
  ///
  /// Fields the header version doesn't define print as 0; the registered
  /// version defines them all.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Size in bytes: {}, width: {}, height: {}, bits per pixel: {}",
      self.file_size(),
      self.width().unwrap_or(0),
      self.height().unwrap_or(0),
      self.bits_per_pixel().unwrap_or(0),
    )
  }
}
