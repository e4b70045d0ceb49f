//! The fixed-size header at the very start of every BMP file.

use core::fmt::{self, Write};

use pack1::{U16LE, U32LE};

use crate::{error::BmpError, util::try_pull_pod};

/// The two-byte type tag at offset 0 of a BMP file.
///
/// `BM` for essentially every file made this century, with a handful of
/// OS/2 relics (`BA`, `CI`, `CP`, `IC`, `PT`) in the wild. The tag is
/// carried through as-is and never validated: apart from the two decoded
/// offset fields the file header is opaque passthrough data.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(transparent)]
pub struct BmpTag(pub [u8; 2]);

impl fmt::Debug for BmpTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    f.write_char('"')
  }
}

impl From<[u8; 2]> for BmpTag {
  #[inline]
  #[must_use]
  fn from(array: [u8; 2]) -> Self {
    Self(array)
  }
}

/// The 14 byte header at the start of all BMP files.
///
/// This struct is a byte-exact image of the on-disk layout (alignment 1, no
/// padding), so [as_bytes](Self::as_bytes) reproduces the original bytes,
/// reserved fields included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, bytemuck::Zeroable, bytemuck::Pod)]
#[repr(C)]
pub struct BmpFileHeader {
  /// The file type tag, nominally `BM`.
  pub tag: BmpTag,

  /// Total size of the file in bytes, as declared when the file was written.
  ///
  /// This is the stored value; it is never re-derived from the actual data.
  pub file_size: U32LE,

  /// Reserved; meaning (if any) decided by whatever wrote the file.
  pub reserved1: U16LE,

  /// Reserved; meaning (if any) decided by whatever wrote the file.
  pub reserved2: U16LE,

  /// Byte index within the file where the pixel array starts.
  pub pixel_array_offset: U32LE,
}

impl BmpFileHeader {
  /// Pulls the file header off the front of `bytes`.
  ///
  /// The rest of the bytes should be used to get the
  /// [DibHeader](crate::DibHeader).
  #[inline]
  pub fn try_from_bytes(bytes: &[u8]) -> Result<(Self, &[u8]), BmpError> {
    try_pull_pod::<Self>(bytes)
  }

  /// The header as it will appear on disk.
  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytemuck::bytes_of(self)
  }
}
