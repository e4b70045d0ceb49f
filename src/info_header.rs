//! The variable-size DIB header that follows the file header.
//!
//! The first 4 bytes of a DIB header are always the full header length, and
//! every header version is a different length, so the length doubles as the
//! version tag. Rather than modeling each version as its own struct, this
//! module keeps the header as raw bytes and decodes named fields through a
//! per-version layout table. That buys two things:
//!
//! * Serialization is a verbatim replay of the captured bytes, so files
//!   round-trip exactly even when a field isn't individually understood.
//! * Supporting another header version (`BITMAPV4HEADER`, `BITMAPV5HEADER`,
//!   ...) is one more entry in [DIB_LAYOUTS], not a new struct and a new
//!   parser arm.
//!
//! Only the 40 byte `BITMAPINFOHEADER` is registered right now.

use alloc::vec::Vec;

use crate::{
  error::BmpError,
  util::{try_pull_byte_array, u16_le, u32_le},
};

/// The named fields a DIB header can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum DibField {
  Width,
  Height,
  ColorPlaneCount,
  BitsPerPixel,
  CompressionMethod,
  RawImageSize,
  HorizontalResolution,
  VerticalResolution,
  ColorPaletteCount,
  ImportantColorCount,
}

/// On-disk width of a DIB header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldWidth {
  /// 2 bytes, little-endian.
  U16,
  /// 4 bytes, little-endian.
  U32,
}

impl FieldWidth {
  #[inline]
  #[must_use]
  const fn byte_len(self) -> usize {
    match self {
      Self::U16 => 2,
      Self::U32 => 4,
    }
  }
}

/// Field layout of one DIB header version.
///
/// The `tag` is the header length. Field offsets are relative to the start
/// of the header *body*, the bytes after the 4 byte length field.
#[derive(Debug, Clone, Copy)]
pub struct DibLayout {
  /// The header length that selects this layout.
  pub tag: u32,
  /// The name Windows gives this header version.
  pub name: &'static str,
  /// `(field, body offset, width)` for every field the version defines.
  pub fields: &'static [(DibField, usize, FieldWidth)],
}

/// Every DIB header version this crate can address fields in.
///
/// Parsing only succeeds for headers whose length matches one of these
/// entries.
pub static DIB_LAYOUTS: &[DibLayout] = &[DibLayout {
  tag: 40,
  name: "BITMAPINFOHEADER",
  fields: &[
    (DibField::Width, 0, FieldWidth::U32),
    (DibField::Height, 4, FieldWidth::U32),
    (DibField::ColorPlaneCount, 8, FieldWidth::U16),
    (DibField::BitsPerPixel, 10, FieldWidth::U16),
    (DibField::CompressionMethod, 12, FieldWidth::U32),
    (DibField::RawImageSize, 16, FieldWidth::U32),
    (DibField::HorizontalResolution, 20, FieldWidth::U32),
    (DibField::VerticalResolution, 24, FieldWidth::U32),
    (DibField::ColorPaletteCount, 28, FieldWidth::U32),
    (DibField::ImportantColorCount, 32, FieldWidth::U32),
  ],
}];

impl DibLayout {
  /// Looks up the layout registered for a header length.
  #[inline]
  #[must_use]
  pub fn for_tag(tag: u32) -> Option<&'static DibLayout> {
    DIB_LAYOUTS.iter().find(|layout| layout.tag == tag)
  }

  #[inline]
  fn span(&self, field: DibField) -> Option<(usize, FieldWidth)> {
    self
      .fields
      .iter()
      .find(|(f, _, _)| *f == field)
      .map(|(_, offset, width)| (*offset, *width))
  }
}

/// A DIB header captured as raw bytes.
///
/// Named fields are decoded on demand through the layout table; the bytes
/// themselves are kept exactly as read so that [write_into](Self::write_into)
/// is a verbatim replay. The trailing blob holds whatever sits between the
/// end of the DIB header and the pixel array (a color table, bitfield
/// masks), also verbatim.
#[derive(Debug, Clone)]
pub struct DibHeader {
  len_bytes: [u8; 4],
  body: Vec<u8>,
  trailing: Vec<u8>,
  layout: &'static DibLayout,
}

impl DibHeader {
  /// Pulls a DIB header, and any trailing pre-pixel bytes, off the front of
  /// `bytes`.
  ///
  /// `bytes` must start immediately after the 14 byte file header, and
  /// `pixel_array_offset` is the pixel array position that file header
  /// declared. Everything between the end of the DIB header and that offset
  /// is captured as the trailing blob; an offset *before* that point is
  /// [CorruptHeader](BmpError::CorruptHeader).
  pub fn try_from_bytes(
    bytes: &[u8], pixel_array_offset: u32,
  ) -> Result<(Self, &[u8]), BmpError> {
    let (len_bytes, rest) = try_pull_byte_array::<4>(bytes)?;
    let header_len = u32::from_le_bytes(len_bytes);
    let layout = DibLayout::for_tag(header_len).ok_or(BmpError::UnsupportedHeaderType)?;
    // Registered lengths are all comfortably above 4, so no underflow.
    let body_len = (header_len - 4) as usize;
    if rest.len() < body_len {
      return Err(BmpError::TruncatedHeader);
    }
    let (body, rest) = rest.split_at(body_len);
    // The file header is always 14 bytes, so the headers end at
    // 14 + header_len.
    let trailing_len = i64::from(pixel_array_offset) - (14 + i64::from(header_len));
    let trailing_len = usize::try_from(trailing_len).map_err(|_| BmpError::CorruptHeader)?;
    if rest.len() < trailing_len {
      return Err(BmpError::TruncatedHeader);
    }
    let (trailing, rest) = rest.split_at(trailing_len);
    let dib = Self { len_bytes, body: body.to_vec(), trailing: trailing.to_vec(), layout };
    Ok((dib, rest))
  }

  /// The header length field, which doubles as the header version tag.
  #[inline]
  #[must_use]
  pub fn tag(&self) -> u32 {
    u32::from_le_bytes(self.len_bytes)
  }

  /// Name of the header version, eg `"BITMAPINFOHEADER"`.
  #[inline]
  #[must_use]
  pub fn type_name(&self) -> &'static str {
    self.layout.name
  }

  /// Decodes one named field out of the header body.
  ///
  /// Fields the active header version doesn't define fail with
  /// [UnsupportedField](BmpError::UnsupportedField) rather than producing a
  /// default.
  pub fn field(&self, field: DibField) -> Result<u32, BmpError> {
    let (offset, width) = self.layout.span(field).ok_or(BmpError::UnsupportedField)?;
    let bytes =
      self.body.get(offset..offset + width.byte_len()).ok_or(BmpError::TruncatedHeader)?;
    Ok(match width {
      FieldWidth::U16 => u32::from(u16_le(bytes)),
      FieldWidth::U32 => u32_le(bytes),
    })
  }

  /// The bytes between the DIB header and the pixel array, if any.
  #[inline]
  #[must_use]
  pub fn trailing_bytes(&self) -> &[u8] {
    &self.trailing
  }

  /// Appends the header to `out` exactly as it was read: length bytes, then
  /// body, then trailing blob. No field is re-encoded.
  pub fn write_into(&self, out: &mut Vec<u8>) {
    out.extend_from_slice(&self.len_bytes);
    out.extend_from_slice(&self.body);
    out.extend_from_slice(&self.trailing);
  }
}
