// BSL 1.0 License

use crate::Family;
use core::fmt;
use tinyvec::ArrayVec;

mod rgb;
pub use rgb::Rgb;

/// The samples of one pixel, at most three.
pub type Samples = ArrayVec<[u8; 3]>;

/// A value stored in a [`PixelGrid`].
///
/// This is implemented for exactly three types, one for each [`Family`]:
///
/// - `bool` for bitmaps, where `true` is the foreground ("set") value.
/// - `u8` for gray maps.
/// - [`Rgb`] for color pixel maps.
///
/// The trait is sealed; the codec relies on [`Pixel::FAMILY`] matching the
/// sample layout.
///
/// [`PixelGrid`]: crate::PixelGrid
pub trait Pixel: Copy + Default + PartialEq + Eq + fmt::Debug + sealed::Sealed {
    /// The image family this pixel type belongs to.
    const FAMILY: Family;

    /// The channel samples of this pixel, in file order.
    ///
    /// Bitmaps yield a single `1` for a set pixel and `0` otherwise.
    fn samples(self) -> Samples;

    /// Build a pixel from exactly `FAMILY.channels()` samples.
    fn from_samples(samples: &[u8]) -> Self;

    /// The pixel with every channel replaced by `max - value`.
    fn inverted(self, max: u8) -> Self;

    /// The pixel with every channel scaled from `old_max` to `new_max`.
    fn rescaled(self, old_max: u8, new_max: u8) -> Self;

    /// Turn a flat run of samples into pixels.
    #[doc(hidden)]
    fn collect_samples(samples: &[u8]) -> Vec<Self> {
        samples
            .chunks_exact(Self::FAMILY.channels())
            .map(Self::from_samples)
            .collect()
    }

    /// Append the samples of every pixel to `out`.
    #[doc(hidden)]
    fn extend_samples(pixels: &[Self], out: &mut Vec<u8>) {
        for &pixel in pixels {
            out.extend(pixel.samples());
        }
    }
}

/// Pixels that have a gray level.
pub trait Intensity: Pixel {
    /// The integer average of the channels.
    fn average(self) -> u8;
}

impl Pixel for bool {
    const FAMILY: Family = Family::Bitmap;

    fn samples(self) -> Samples {
        ArrayVec::from_array_len([self as u8, 0, 0], 1)
    }

    fn from_samples(samples: &[u8]) -> Self {
        samples[0] != 0
    }

    fn inverted(self, _max: u8) -> Self {
        !self
    }

    fn rescaled(self, _old_max: u8, _new_max: u8) -> Self {
        self
    }
}

impl Pixel for u8 {
    const FAMILY: Family = Family::Graymap;

    fn samples(self) -> Samples {
        ArrayVec::from_array_len([self, 0, 0], 1)
    }

    fn from_samples(samples: &[u8]) -> Self {
        samples[0]
    }

    fn inverted(self, max: u8) -> Self {
        max.saturating_sub(self)
    }

    fn rescaled(self, old_max: u8, new_max: u8) -> Self {
        rescale_sample(self, old_max, new_max)
    }

    fn collect_samples(samples: &[u8]) -> Vec<Self> {
        samples.to_vec()
    }

    fn extend_samples(pixels: &[Self], out: &mut Vec<u8>) {
        out.extend_from_slice(pixels);
    }
}

impl Intensity for u8 {
    fn average(self) -> u8 {
        self
    }
}

/// `value * new_max / old_max`, truncating.
pub(crate) fn rescale_sample(value: u8, old_max: u8, new_max: u8) -> u8 {
    let scaled = u32::from(value) * u32::from(new_max) / u32::from(old_max.max(1));
    scaled.min(u32::from(u8::MAX)) as u8
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for bool {}
    impl Sealed for u8 {}
    impl Sealed for super::Rgb {}
}
