// BSL 1.0 License

use crate::FormatError;
use core::{fmt, str::FromStr};

/// The family of an image, which decides the pixel type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    /// Two-value bitmap (PBM).
    Bitmap,
    /// Single channel gray map (PGM).
    Graymap,
    /// Three channel color pixel map (PPM).
    Pixmap,
}

impl Family {
    /// Number of samples stored for each pixel.
    pub const fn channels(self) -> usize {
        match self {
            Family::Bitmap | Family::Graymap => 1,
            Family::Pixmap => 3,
        }
    }

    /// Whether the header carries a max value.
    pub const fn has_max(self) -> bool {
        !matches!(self, Family::Bitmap)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Family::Bitmap => "bitmap",
            Family::Graymap => "graymap",
            Family::Pixmap => "pixmap",
        })
    }
}

/// How the payload is written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Encoding {
    /// Whitespace separated decimal samples.
    Ascii,
    /// Packed bits for bitmaps, raw bytes otherwise.
    Binary,
}

/// One of the six Netpbm magic tags.
///
/// ```
/// use netpbm::{Encoding, Family, Magic};
///
/// let magic: Magic = "P6".parse().unwrap();
/// assert_eq!(magic.family(), Family::Pixmap);
/// assert_eq!(magic.encoding(), Encoding::Binary);
/// assert_eq!(magic.to_string(), "P6");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Magic {
    /// `P1`
    BitmapAscii,
    /// `P4`
    BitmapBinary,
    /// `P2`
    GraymapAscii,
    /// `P5`
    GraymapBinary,
    /// `P3`
    PixmapAscii,
    /// `P6`
    PixmapBinary,
}

impl Magic {
    /// Combine a family and an encoding into a tag.
    pub const fn new(family: Family, encoding: Encoding) -> Self {
        match (family, encoding) {
            (Family::Bitmap, Encoding::Ascii) => Magic::BitmapAscii,
            (Family::Bitmap, Encoding::Binary) => Magic::BitmapBinary,
            (Family::Graymap, Encoding::Ascii) => Magic::GraymapAscii,
            (Family::Graymap, Encoding::Binary) => Magic::GraymapBinary,
            (Family::Pixmap, Encoding::Ascii) => Magic::PixmapAscii,
            (Family::Pixmap, Encoding::Binary) => Magic::PixmapBinary,
        }
    }

    pub const fn family(self) -> Family {
        match self {
            Magic::BitmapAscii | Magic::BitmapBinary => Family::Bitmap,
            Magic::GraymapAscii | Magic::GraymapBinary => Family::Graymap,
            Magic::PixmapAscii | Magic::PixmapBinary => Family::Pixmap,
        }
    }

    pub const fn encoding(self) -> Encoding {
        match self {
            Magic::BitmapAscii | Magic::GraymapAscii | Magic::PixmapAscii => Encoding::Ascii,
            _ => Encoding::Binary,
        }
    }

    /// The same family with another encoding.
    pub const fn with_encoding(self, encoding: Encoding) -> Self {
        Magic::new(self.family(), encoding)
    }

    /// The tag as it appears on the first header line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Magic::BitmapAscii => "P1",
            Magic::GraymapAscii => "P2",
            Magic::PixmapAscii => "P3",
            Magic::BitmapBinary => "P4",
            Magic::GraymapBinary => "P5",
            Magic::PixmapBinary => "P6",
        }
    }
}

impl fmt::Display for Magic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Magic {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "P1" => Magic::BitmapAscii,
            "P2" => Magic::GraymapAscii,
            "P3" => Magic::PixmapAscii,
            "P4" => Magic::BitmapBinary,
            "P5" => Magic::GraymapBinary,
            "P6" => Magic::PixmapBinary,
            other => return Err(FormatError::UnknownMagic(other.to_owned())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Magic; 6] = [
        Magic::BitmapAscii,
        Magic::BitmapBinary,
        Magic::GraymapAscii,
        Magic::GraymapBinary,
        Magic::PixmapAscii,
        Magic::PixmapBinary,
    ];

    #[test]
    fn tags_parse_back() {
        for magic in ALL {
            assert_eq!(magic.as_str().parse::<Magic>(), Ok(magic));
            assert_eq!(Magic::new(magic.family(), magic.encoding()), magic);
        }
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(
            "P7".parse::<Magic>(),
            Err(FormatError::UnknownMagic("P7".into()))
        );
        assert!("p1".parse::<Magic>().is_err());
    }

    #[test]
    fn retag_keeps_family() {
        let magic = Magic::PixmapAscii.with_encoding(Encoding::Binary);
        assert_eq!(magic, Magic::PixmapBinary);
        assert_eq!(magic.family().channels(), 3);
        assert!(!Family::Bitmap.has_max());
    }
}
