// BSL 1.0 License

use crate::{Encoding, Magic, Pixel, PixelGrid, Rgb};

/// A two-value (PBM) image.
pub type Bitmap = Image<bool>;
/// A single channel gray (PGM) image.
pub type Graymap = Image<u8>;
/// A three channel color (PPM) image.
pub type Pixmap = Image<Rgb>;

/// A Netpbm image: a magic tag, a max value and a pixel grid.
///
/// The pixel type fixes the family, so the magic tag can only ever change its
/// [`Encoding`]. The max value is kept at least 1 and is meaningless for
/// bitmaps, where [`max`](Self::max) reports `None`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image<P> {
    pub(crate) magic: Magic,
    pub(crate) max: u8,
    pub(crate) grid: PixelGrid<P>,
}

impl<P: Pixel> Image<P> {
    /// A blank image of the given size.
    pub fn new(encoding: Encoding, width: usize, height: usize, max: u8) -> Self {
        Self::from_grid(encoding, max, PixelGrid::new(width, height))
    }

    /// Wrap an existing grid. A `max` of zero is stored as 1.
    pub fn from_grid(encoding: Encoding, max: u8, grid: PixelGrid<P>) -> Self {
        let max = if P::FAMILY.has_max() { max.max(1) } else { 1 };
        Self {
            magic: Magic::new(P::FAMILY, encoding),
            max,
            grid,
        }
    }

    pub fn magic(&self) -> Magic {
        self.magic
    }

    pub fn encoding(&self) -> Encoding {
        self.magic.encoding()
    }

    /// Re-tag the image as ASCII or binary. Pixel data is untouched.
    pub fn set_encoding(&mut self, encoding: Encoding) {
        self.magic = self.magic.with_encoding(encoding);
    }

    /// The max value, or `None` for bitmaps.
    pub fn max(&self) -> Option<u8> {
        P::FAMILY.has_max().then(|| self.max)
    }

    /// `(width, height)` in pixels.
    pub fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: i32, y: i32) -> Option<P> {
        self.grid.get(x, y)
    }

    /// Store a pixel; see [`PixelGrid::set`].
    pub fn set(&mut self, x: i32, y: i32, value: P) {
        self.grid.set(x, y, value)
    }

    pub fn grid(&self) -> &PixelGrid<P> {
        &self.grid
    }

    /// Mutable access to the pixels, for drawing.
    pub fn grid_mut(&mut self) -> &mut PixelGrid<P> {
        &mut self.grid
    }

    pub fn into_grid(self) -> PixelGrid<P> {
        self.grid
    }
}

/// An image whose family is only known at runtime, such as a freshly
/// decoded file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyImage {
    Bitmap(Bitmap),
    Graymap(Graymap),
    Pixmap(Pixmap),
}

/// Forward a method call to whichever image is inside.
macro_rules! dispatch {
    ($self: expr, $fnname: ident $($args: tt)*) => {{
        match $self {
            AnyImage::Bitmap(image) => image.$fnname $($args)*,
            AnyImage::Graymap(image) => image.$fnname $($args)*,
            AnyImage::Pixmap(image) => image.$fnname $($args)*,
        }
    }};
}

pub(crate) use dispatch;

impl AnyImage {
    pub fn magic(&self) -> Magic {
        dispatch!(self, magic())
    }

    pub fn set_encoding(&mut self, encoding: Encoding) {
        dispatch!(self, set_encoding(encoding))
    }

    pub fn max(&self) -> Option<u8> {
        dispatch!(self, max())
    }

    pub fn size(&self) -> (usize, usize) {
        dispatch!(self, size())
    }

    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        match self {
            AnyImage::Bitmap(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_graymap(&self) -> Option<&Graymap> {
        match self {
            AnyImage::Graymap(image) => Some(image),
            _ => None,
        }
    }

    pub fn as_pixmap(&self) -> Option<&Pixmap> {
        match self {
            AnyImage::Pixmap(image) => Some(image),
            _ => None,
        }
    }
}

impl From<Bitmap> for AnyImage {
    fn from(image: Bitmap) -> Self {
        AnyImage::Bitmap(image)
    }
}

impl From<Graymap> for AnyImage {
    fn from(image: Graymap) -> Self {
        AnyImage::Graymap(image)
    }
}

impl From<Pixmap> for AnyImage {
    fn from(image: Pixmap) -> Self {
        AnyImage::Pixmap(image)
    }
}
