// BSL 1.0 License

use super::{rescale_sample, Intensity, Pixel, Samples};
use crate::Family;
use bytemuck::{Pod, Zeroable};
use tinyvec::ArrayVec;

/// An RGB color triplet.
///
/// The layout matches the byte order of a binary pixel map, so a slice of
/// `Rgb` can be viewed as raw payload bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Rgb {
    /// The red component of the color.
    pub red: u8,
    /// The green component of the color.
    pub green: u8,
    /// The blue component of the color.
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    fn map(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}

impl Pixel for Rgb {
    const FAMILY: Family = Family::Pixmap;

    fn samples(self) -> Samples {
        ArrayVec::from([self.red, self.green, self.blue])
    }

    fn from_samples(samples: &[u8]) -> Self {
        Self::new(samples[0], samples[1], samples[2])
    }

    fn inverted(self, max: u8) -> Self {
        self.map(|value| max.saturating_sub(value))
    }

    fn rescaled(self, old_max: u8, new_max: u8) -> Self {
        self.map(|value| rescale_sample(value, old_max, new_max))
    }

    fn collect_samples(samples: &[u8]) -> Vec<Self> {
        // callers only hand over whole triplets
        bytemuck::cast_slice(samples).to_vec()
    }

    fn extend_samples(pixels: &[Self], out: &mut Vec<u8>) {
        out.extend_from_slice(bytemuck::cast_slice(pixels));
    }
}

impl Intensity for Rgb {
    fn average(self) -> u8 {
        let sum = u16::from(self.red) + u16::from(self.green) + u16::from(self.blue);
        (sum / 3) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_view_is_channel_order() {
        let pixels = [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
        let mut out = Vec::new();
        Rgb::extend_samples(&pixels, &mut out);
        assert_eq!(out, [1, 2, 3, 4, 5, 6]);
        assert_eq!(Rgb::collect_samples(&out), pixels.to_vec());
    }

    #[test]
    fn average_truncates() {
        assert_eq!(Rgb::new(255, 255, 255).average(), 255);
        assert_eq!(Rgb::new(1, 1, 0).average(), 0);
        assert_eq!(Rgb::new(10, 20, 31).average(), 20);
    }

    #[test]
    fn invert_each_channel() {
        assert_eq!(Rgb::new(0, 50, 100).inverted(100), Rgb::new(100, 50, 0));
    }
}
