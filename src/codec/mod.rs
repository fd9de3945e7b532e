// BSL 1.0 License

//! Reading and writing the six Netpbm encodings.
//!
//! Every file starts with a header of whitespace separated tokens: the magic
//! tag, the width, the height and, for gray and color images, the max value.
//! Lines starting with `#` are comments. The payload that follows depends on
//! the [`Magic`]:
//!
//! | magic | payload |
//! |-------|---------|
//! | `P1`  | `0`/`1` tokens |
//! | `P2`, `P3` | decimal samples, one per channel |
//! | `P4`  | 1 bit per pixel, MSB first, rows padded to a byte |
//! | `P5`, `P6` | raw bytes, one per channel, read from the end of the input |

use crate::{AnyImage, Encoding, Family, FormatError, Image, Magic, Pixel, PixelGrid};
use core::str::{self, FromStr};

mod ascii;
mod binary;
mod bits;
mod stream;
mod tokens;

use tokens::{text, Tokens};

/// The parsed header of an image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    pub(crate) magic: Magic,
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) max: u8,
}

impl Header {
    fn read(tokens: &mut Tokens<'_>) -> Result<Self, FormatError> {
        let token = tokens.next().ok_or(FormatError::MissingField("magic tag"))?;
        let magic: Magic = str::from_utf8(token)
            .map_err(|_| FormatError::UnknownMagic(text(token)))?
            .parse()?;

        let width = field(tokens, "width")?;
        let height = field(tokens, "height")?;
        let max = if magic.family().has_max() {
            match field(tokens, "max value")? {
                0 => {
                    log::debug!("{} header has a max value of 0, using 1", magic);
                    1
                }
                max => max,
            }
        } else {
            1
        };

        Ok(Header {
            magic,
            width,
            height,
            max,
        })
    }

    /// Total number of samples in the payload.
    pub(crate) fn sample_count(&self) -> Result<usize, FormatError> {
        self.width
            .checked_mul(self.height)
            .and_then(|pixels| pixels.checked_mul(self.magic.family().channels()))
            .ok_or_else(|| FormatError::InvalidField {
                field: "dimensions",
                token: format!("{}x{}", self.width, self.height),
            })
    }
}

fn field<T: FromStr>(tokens: &mut Tokens<'_>, field: &'static str) -> Result<T, FormatError> {
    let token = tokens.next().ok_or(FormatError::MissingField(field))?;
    str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| FormatError::InvalidField {
            field,
            token: text(token),
        })
}

/// Decode the payload described by `header` into an image.
fn decode_body<P: Pixel>(header: Header, tokens: Tokens<'_>) -> Result<Image<P>, FormatError> {
    let samples = match header.magic.encoding() {
        Encoding::Ascii => ascii::read(tokens, &header)?,
        Encoding::Binary => binary::read(tokens.rest(), &header)?,
    };

    if P::FAMILY.has_max() {
        if let Some(&value) = samples.iter().find(|&&value| value > header.max) {
            return Err(FormatError::SampleOutOfRange {
                value,
                max: header.max,
            });
        }
    }

    let pixels = P::collect_samples(&samples);
    let found = pixels.len();
    let grid =
        PixelGrid::from_pixels(header.width, header.height, pixels).ok_or(FormatError::Truncated {
            expected: header.width.saturating_mul(header.height),
            found,
            unit: "pixels",
        })?;

    log::debug!(
        "decoded {} image, {}x{}, max {}",
        header.magic,
        header.width,
        header.height,
        header.max
    );

    Ok(Image {
        magic: header.magic,
        max: header.max,
        grid,
    })
}

impl<P: Pixel> Image<P> {
    /// Decode an image of this family from an in-memory file.
    ///
    /// ```
    /// use netpbm::Bitmap;
    ///
    /// let image = Bitmap::decode(b"P1\n3 2\n1 0 1\n0 1 0\n").unwrap();
    /// assert_eq!(image.size(), (3, 2));
    /// assert_eq!(image.get(1, 1), Some(true));
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<Self, FormatError> {
        let mut tokens = Tokens::new(bytes);
        let header = Header::read(&mut tokens)?;
        if header.magic.family() != P::FAMILY {
            return Err(FormatError::FamilyMismatch {
                expected: P::FAMILY,
                found: header.magic,
            });
        }

        decode_body(header, tokens)
    }

    /// Encode the image in the encoding named by its magic tag.
    pub fn encode(&self) -> Vec<u8> {
        let (width, height) = self.size();
        let mut out = format!("{}\n{} {}\n", self.magic, width, height).into_bytes();
        if P::FAMILY.has_max() {
            out.extend_from_slice(format!("{}\n", self.max).as_bytes());
        }

        match self.encoding() {
            Encoding::Ascii => ascii::write(self, &mut out),
            Encoding::Binary => binary::write(self, &mut out),
        }

        log::debug!(
            "encoded {} image, {}x{}, into {} bytes",
            self.magic,
            width,
            height,
            out.len()
        );
        out
    }
}

impl AnyImage {
    /// Decode an image of any family from an in-memory file.
    pub fn decode(bytes: &[u8]) -> Result<Self, FormatError> {
        let mut tokens = Tokens::new(bytes);
        let header = Header::read(&mut tokens)?;
        Ok(match header.magic.family() {
            Family::Bitmap => AnyImage::Bitmap(decode_body(header, tokens)?),
            Family::Graymap => AnyImage::Graymap(decode_body(header, tokens)?),
            Family::Pixmap => AnyImage::Pixmap(decode_body(header, tokens)?),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        crate::image::dispatch!(self, encode())
    }
}
