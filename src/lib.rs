#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(docs_rs, feature(doc_cfg))]

//! A crate for reading, retouching, and re-saving Windows BMP files.
//!
//! The goal is pixel surgery with round-trip fidelity: open a file, poke
//! individual pixels, save it back out, and every byte you didn't touch is
//! exactly the byte that was there before. To make that work the headers are
//! captured raw and replayed verbatim, rather than being decoded into fields
//! and re-encoded on save.
//!
//! ```no_run
//! # fn demo() -> Result<(), retouch::BmpError> {
//! let mut bmp = retouch::Bitmap::open("image.bmp")?;
//! let pixel = bmp.get_pixel(0, 0)?;
//! println!("{pixel}");
//! bmp.set_pixel(0, 0, &[0xFF, 0xFF, 0xFF])?;
//! bmp.save_as("image-edited.bmp")?;
//! # Ok(())
//! # }
//! ```
//!
//! Only uncompressed direct-color images with whole-byte bit depths and the
//! 40 byte `BITMAPINFOHEADER` are supported. Compressed variants, indexed
//! color, and the other DIB header versions are extension points, not
//! current behavior.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod error;
pub use error::*;

mod util;

pub mod file_header;
pub use file_header::*;

pub mod info_header;
pub use info_header::*;

pub mod headers;
pub use headers::*;

pub mod bitmap;
pub use bitmap::*;

pub mod pixel;
pub use pixel::*;
