// BSL 1.0 License

//! Whole-image transforms and conversions between families.

use crate::{
    image::dispatch, AnyImage, Bitmap, Encoding, Graymap, Image, Intensity, Pixel, PixelGrid,
    Pixmap,
};

impl<P: Pixel> Image<P> {
    /// Replace every channel with `max - value`. Bitmaps are negated.
    pub fn invert(&mut self) {
        let max = self.max;
        for pixel in self.grid.pixels_mut() {
            *pixel = pixel.inverted(max);
        }
    }

    /// Mirror the image left to right.
    pub fn flip_horizontal(&mut self) {
        for y in 0..self.height() {
            self.grid.row_mut(y).reverse();
        }
    }

    /// Mirror the image top to bottom.
    pub fn flip_vertical(&mut self) {
        let (width, height) = self.size();
        let pixels = self.grid.pixels_mut();
        for y in 0..height / 2 {
            let (top, bottom) = pixels.split_at_mut((height - 1 - y) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
        }
    }

    /// Rotate a quarter turn clockwise, swapping width and height.
    pub fn rotate_90_clockwise(&mut self) {
        let (width, height) = self.size();
        let old = self.grid.pixels();
        let mut rotated = Vec::with_capacity(old.len());
        // row `x` of the result is column `x` read bottom to top
        for x in 0..width {
            rotated.extend((0..height).rev().map(|y| old[y * width + x]));
        }
        self.grid = PixelGrid::from_pixels_unchecked(height, width, rotated);
    }

    /// Rescale every channel to a new max value.
    ///
    /// Each sample becomes `value * new_max / old_max`, truncated. A new max
    /// of zero is treated as 1. Bitmaps have no max and are left alone.
    pub fn rescale_max(&mut self, new_max: u8) {
        if !P::FAMILY.has_max() {
            return;
        }

        let new_max = new_max.max(1);
        let old_max = self.max;
        for pixel in self.grid.pixels_mut() {
            *pixel = pixel.rescaled(old_max, new_max);
        }
        self.max = new_max;
    }
}

impl<P: Intensity> Image<P> {
    /// Threshold into a new ASCII bitmap.
    ///
    /// A pixel is set when its channel average is below half of the max,
    /// both divisions truncating. This image is left unchanged.
    pub fn to_bitmap(&self) -> Bitmap {
        let threshold = self.max / 2;
        let grid = self.grid.map(|pixel| pixel.average() < threshold);
        Image::from_grid(Encoding::Ascii, 1, grid)
    }
}

impl Pixmap {
    /// Average the channels into a new ASCII gray map with the same max.
    pub fn to_graymap(&self) -> Graymap {
        let grid = self.grid.map(Intensity::average);
        Image::from_grid(Encoding::Ascii, self.max, grid)
    }
}

impl AnyImage {
    pub fn invert(&mut self) {
        dispatch!(self, invert())
    }

    pub fn flip_horizontal(&mut self) {
        dispatch!(self, flip_horizontal())
    }

    pub fn flip_vertical(&mut self) {
        dispatch!(self, flip_vertical())
    }

    pub fn rotate_90_clockwise(&mut self) {
        dispatch!(self, rotate_90_clockwise())
    }

    pub fn rescale_max(&mut self, new_max: u8) {
        dispatch!(self, rescale_max(new_max))
    }
}
