// BSL 1.0 License

//! A small library for the Netpbm image formats.
//!
//! Netpbm images come in three families, each with an ASCII and a binary
//! encoding:
//!
//! | family | pixel | ASCII | binary |
//! |--------|-------|-------|--------|
//! | bitmap | `bool` | `P1` | `P4` |
//! | gray map | `u8` | `P2` | `P5` |
//! | pixel map | [`Rgb`] | `P3` | `P6` |
//!
//! ## The [`Image`] structure
//!
//! [`Image<P>`] owns a [`PixelGrid`] of pixels of type `P`, a [`Magic`] tag
//! and a max value. The pixel type fixes the family, so a [`Bitmap`] can
//! never be written out as a pixel map. The encoding, on the other hand, can
//! be switched freely with [`set_encoding`].
//!
//! When the family of a file is not known ahead of time, [`AnyImage`] decodes
//! any of the six encodings and forwards the family-independent operations
//! to whichever image it holds.
//!
//! ## Editing
//!
//! Images can be edited pixel by pixel through [`get`] and [`set`], with
//! whole-image transforms such as [`invert`] and [`rotate_90_clockwise`],
//! or by drawing shapes onto the grid (see [`PixelGrid::draw_line`] and
//! friends, behind the default `raster` feature).
//!
//! ```
//! use netpbm::{AnyImage, Encoding, Point, Rgb, Pixmap};
//!
//! let mut image = Pixmap::new(Encoding::Ascii, 4, 4, 255);
//! image.grid_mut().draw_line(Point::new(0, 0), Point::new(3, 3), Rgb::new(255, 0, 0));
//! image.flip_horizontal();
//! image.set_encoding(Encoding::Binary);
//!
//! let bytes = image.encode();
//! let decoded = AnyImage::decode(&bytes).unwrap();
//! assert_eq!(decoded.as_pixmap(), Some(&image));
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. Out-of-range writes through
//! [`set`] are reported with `warn!`; decoding and encoding details are
//! reported with `debug!`.
//!
//! [`set_encoding`]: crate::Image::set_encoding
//! [`get`]: crate::Image::get
//! [`set`]: crate::Image::set
//! [`invert`]: crate::Image::invert
//! [`rotate_90_clockwise`]: crate::Image::rotate_90_clockwise
//! [`log`]: https://crates.io/crates/log

#![forbid(unsafe_code, future_incompatible, rust_2018_idioms)]

mod codec;

mod error;
pub use error::{Error, FormatError, OutOfBounds, Result};

mod grid;
pub use grid::PixelGrid;

mod image;
pub use image::{AnyImage, Bitmap, Graymap, Image, Pixmap};

mod magic;
pub use magic::{Encoding, Family, Magic};

mod pixel;
pub use pixel::{Intensity, Pixel, Rgb, Samples};

#[cfg(feature = "raster")]
mod raster;
#[cfg(feature = "raster")]
pub use raster::{Point, CIRCLE_RADIUS_SCALE};

mod transform;
