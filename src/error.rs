// BSL 1.0 License

//! Error types for decoding, encoding and pixel access.

use crate::{Family, Magic};

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Top-level error returned by the stream and file helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying stream could not be opened, read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes do not describe a valid Netpbm image.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

/// Reasons a byte stream is rejected by the decoder.
///
/// Decoding stops at the first of these; no partially populated image is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The first header token is not one of `P1`..`P6`.
    #[error("unrecognized magic tag {0:?}")]
    UnknownMagic(String),

    /// The stream ended before a header field was read.
    #[error("missing header field: {0}")]
    MissingField(&'static str),

    /// A header field is not a valid integer in range.
    #[error("invalid {field}: {token:?}")]
    InvalidField {
        field: &'static str,
        token: String,
    },

    /// A typed decode met an image of another family.
    #[error("expected a {expected} image, found {found}")]
    FamilyMismatch { expected: Family, found: Magic },

    /// The pixel payload is shorter than the header demands.
    #[error("truncated payload: expected {expected} {unit}, found {found}")]
    Truncated {
        expected: usize,
        found: usize,
        unit: &'static str,
    },

    /// An ASCII bitmap token other than `0` or `1`.
    #[error("invalid bitmap token {0:?}")]
    InvalidBit(String),

    /// An ASCII sample that is not a decimal byte.
    #[error("invalid sample {0:?}")]
    InvalidSample(String),

    /// A gray or color sample above the declared maximum.
    #[error("sample {value} exceeds maximum {max}")]
    SampleOutOfRange { value: u8, max: u8 },

    /// ASCII tokens left over after the last pixel.
    #[error("{0} unexpected trailing samples")]
    TrailingSamples(usize),
}

/// A pixel write outside of the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("pixel ({x}, {y}) is outside of a {width}x{height} grid")]
pub struct OutOfBounds {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
}
