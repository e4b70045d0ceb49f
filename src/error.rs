use core::fmt;

/// An error from the `retouch` crate.
///
/// Every operation that can fail reports one of these at the point of
/// detection. There is no internal retry or recovery: inputs are fully
/// buffered, so an operation either completes or fails without partially
/// mutating anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum BmpError {
  /// The data ended partway through the headers.
  TruncatedHeader,

  /// The DIB header length is not a registered header type.
  UnsupportedHeaderType,

  /// The pixel array offset points inside the headers.
  CorruptHeader,

  /// The bit depth is not a nonzero whole number of bytes per pixel.
  UnsupportedColorDepth,

  /// The active DIB header type does not define the requested field.
  ///
  /// Can't happen with the currently registered header type, which defines
  /// every named field, but lookups on future header types must fail rather
  /// than invent a default.
  UnsupportedField,

  /// A channel slice of the wrong length was passed to a pixel write.
  InvalidPixelFormat,

  /// A coordinate lies outside the pixel buffer.
  PixelOutOfRange,

  /// The pixel byte count does not divide evenly into pixels and rows.
  InconsistentBufferSize,

  /// A file operation failed.
  #[cfg(feature = "std")]
  Io(std::io::ErrorKind),
}

impl fmt::Display for BmpError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let msg = match self {
      Self::TruncatedHeader => "the data ended partway through the headers",
      Self::UnsupportedHeaderType => "the DIB header length is not a registered header type",
      Self::CorruptHeader => "the pixel array offset points inside the headers",
      Self::UnsupportedColorDepth => "bits per pixel is not a nonzero whole number of bytes",
      Self::UnsupportedField => "the header type does not define that field",
      Self::InvalidPixelFormat => "channel data has the wrong number of bytes for this image",
      Self::PixelOutOfRange => "pixel coordinates are outside the image",
      Self::InconsistentBufferSize => "the pixel array does not divide evenly into rows of pixels",
      #[cfg(feature = "std")]
      Self::Io(kind) => return write!(f, "io error: {kind:?}"),
    };
    f.write_str(msg)
  }
}

#[cfg(feature = "std")]
impl std::error::Error for BmpError {}

#[cfg(feature = "std")]
impl From<std::io::Error> for BmpError {
  /// Only the [kind](std::io::Error::kind) is kept, so that [BmpError] stays
  /// `Copy`.
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Io(e.kind())
  }
}
