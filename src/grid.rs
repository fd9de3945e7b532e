// BSL 1.0 License

use crate::OutOfBounds;

/// A row-major matrix of pixels backed by one flat buffer.
///
/// Pixel `(x, y)` lives at index `y * width + x`. Coordinates are signed so
/// that callers (and the rasterizer) can talk about positions left of or
/// above the grid; those positions are simply never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid<P> {
    width: usize,
    height: usize,
    data: Vec<P>,
}

impl<P: Copy + Default> PixelGrid<P> {
    /// A grid with every pixel set to `P::default()`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, P::default())
    }
}

impl<P: Copy> PixelGrid<P> {
    /// A grid with every pixel set to `value`.
    pub fn filled(width: usize, height: usize, value: P) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Wrap an existing row-major buffer.
    ///
    /// Returns `None` if `data` does not hold exactly `width * height` pixels.
    pub fn from_pixels(width: usize, height: usize, data: Vec<P>) -> Option<Self> {
        (width.checked_mul(height)? == data.len()).then(|| Self {
            width,
            height,
            data,
        })
    }

    /// Wrap a buffer already known to hold `width * height` pixels.
    pub(crate) fn from_pixels_unchecked(width: usize, height: usize, data: Vec<P>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            width,
            height,
            data,
        }
    }

    /// `(width, height)` of the grid.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` names a stored pixel.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// The pixel at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<P> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Store a pixel, reporting writes outside the grid as an error.
    pub fn try_set(&mut self, x: i32, y: i32, value: P) -> Result<(), OutOfBounds> {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = value;
                Ok(())
            }
            None => Err(OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Store a pixel.
    ///
    /// Writes outside the grid leave it untouched and are logged as a
    /// warning. Use [`try_set`](Self::try_set) to observe them instead.
    pub fn set(&mut self, x: i32, y: i32, value: P) {
        if let Err(err) = self.try_set(x, y, value) {
            log::warn!("ignoring write: {}", err);
        }
    }

    /// Store a pixel if it is on the grid, silently skipping it otherwise.
    pub(crate) fn plot(&mut self, x: i32, y: i32, value: P) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = value;
        }
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[P] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.data
    }

    /// The pixels of row `y`.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[P] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> &mut [P] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    /// Iterate over the rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[P]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Apply `f` to every pixel, producing a grid of the same size.
    pub fn map<Q>(&self, f: impl FnMut(P) -> Q) -> PixelGrid<Q> {
        PixelGrid {
            width: self.width,
            height: self.height,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    pub(crate) fn into_pixels(self) -> Vec<P> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    #[test]
    fn row_major_layout() {
        let grid = PixelGrid::from_pixels(3, 2, vec![0u8, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(grid.size(), (3, 2));
        assert_eq!(grid.get(2, 0), Some(2));
        assert_eq!(grid.get(0, 1), Some(3));
        assert_eq!(grid.row(1), &[3, 4, 5]);
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    fn from_pixels_checks_length() {
        assert!(PixelGrid::from_pixels(3, 2, vec![0u8; 5]).is_none());
        assert!(PixelGrid::<u8>::from_pixels(0, 4, Vec::new()).is_some());
    }

    #[test]
    fn out_of_range_set_is_a_no_op() {
        let mut grid = PixelGrid::<bool>::new(4, 3);
        let before = grid.clone();

        grid.set(4, 0, true);
        grid.set(0, -1, true);
        grid.set(-1, 2, true);
        grid.set(0, 3, true);
        assert_eq!(grid, before);

        let err = grid.try_set(4, 0, true).unwrap_err();
        assert_eq!(
            err,
            OutOfBounds {
                x: 4,
                y: 0,
                width: 4,
                height: 3
            }
        );
    }

    #[test]
    fn get_outside_is_none() {
        let grid = PixelGrid::<u8>::new(2, 2);
        for (x, y) in iproduct!(-1..=2, -1..=2) {
            let inside = (0..2).contains(&x) && (0..2).contains(&y);
            assert_eq!(grid.get(x, y).is_some(), inside, "({}, {})", x, y);
        }
    }

    #[test]
    fn zero_width_rows() {
        let grid = PixelGrid::<u8>::new(0, 3);
        assert!(grid.rows().all(<[u8]>::is_empty));
        assert_eq!(grid.rows().len(), 3);
    }
}
