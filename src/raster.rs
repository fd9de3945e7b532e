// BSL 1.0 License

//! Shape drawing on a [`PixelGrid`].
//!
//! Every shape is built on [`PixelGrid::draw_line`]. Points that fall off
//! the grid are skipped without complaint, so shapes may hang over the edge.
//!
//! The circle and the filled shapes are not the textbook algorithms: the
//! circle uses a radius scaled by [`CIRCLE_RADIUS_SCALE`], filled circles
//! are stacked outlines and filled triangles are a fan of lines. Their
//! exact pixel output is relied upon, so they are kept as they are.

use crate::PixelGrid;

/// Factor applied to the radius of [`PixelGrid::draw_circle`].
pub const CIRCLE_RADIUS_SCALE: f64 = 0.85;

/// A position on (or off) a grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Whether the run from `from` to `to` crosses `0..len`.
fn spans(from: i64, to: i64, len: i64) -> bool {
    from.min(to) < len && from.max(to) >= 0
}

impl<P: Copy> PixelGrid<P> {
    /// Draw a straight line from `a` to `b`, both ends included.
    ///
    /// Uses integer error accumulation (Bresenham), so each step moves one
    /// pixel along the major axis and every pixel is written once. The walk
    /// stops early once the rest of the line can no longer touch the grid.
    pub fn draw_line(&mut self, a: Point, b: Point, color: P) {
        let (width, height) = (self.width() as i64, self.height() as i64);
        let (mut x, mut y) = (i64::from(a.x), i64::from(a.y));
        let (end_x, end_y) = (i64::from(b.x), i64::from(b.y));

        let dx = (end_x - x).abs();
        let dy = (end_y - y).abs();
        let sx = (end_x - x).signum();
        let sy = (end_y - y).signum();
        let mut err = dx - dy;

        loop {
            if (0..width).contains(&x) && (0..height).contains(&y) {
                // x and y stay between the two endpoints, so they fit in i32
                self.plot(x as i32, y as i32, color);
            } else if !spans(x, end_x, width) || !spans(y, end_y, height) {
                break;
            }
            if x == end_x && y == end_y {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Outline the rectangle with corners `origin` and
    /// `origin + (width, height)`.
    pub fn draw_rectangle(&mut self, origin: Point, width: i32, height: i32, color: P) {
        let top_right = origin.offset(width, 0);
        let bottom_left = origin.offset(0, height);
        let bottom_right = origin.offset(width, height);

        self.draw_line(origin, top_right, color);
        self.draw_line(top_right, bottom_right, color);
        self.draw_line(bottom_right, bottom_left, color);
        self.draw_line(bottom_left, origin, color);
    }

    /// Fill the same area [`draw_rectangle`](Self::draw_rectangle) outlines,
    /// one row per line from `origin.y` to `origin.y + height` inclusive.
    pub fn draw_filled_rectangle(&mut self, origin: Point, width: i32, height: i32, color: P) {
        // rows off the grid draw nothing
        let first = (-i64::from(origin.y)).max(0);
        let last = i64::from(height).min(self.height() as i64 - 1 - i64::from(origin.y));
        for dy in first..=last {
            let start = origin.offset(0, dy as i32);
            self.draw_line(start, start.offset(width, 0), color);
        }
    }

    /// Mark every pixel whose distance to `center` is within half a pixel
    /// of `radius * CIRCLE_RADIUS_SCALE`.
    ///
    /// This visits the whole grid whatever the radius.
    pub fn draw_circle(&mut self, center: Point, radius: i32, color: P) {
        let target = f64::from(radius) * CIRCLE_RADIUS_SCALE;
        let (width, height) = self.size();

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let dx = f64::from(x) - f64::from(center.x);
                let dy = f64::from(y) - f64::from(center.y);
                let distance = (dx * dx + dy * dy).sqrt();
                if (distance - target).abs() < 0.5 {
                    self.plot(x, y, color);
                }
            }
        }
    }

    /// Draw circles for every radius from `radius` down to 0.
    ///
    /// This costs `radius` full passes over the grid.
    pub fn draw_filled_circle(&mut self, center: Point, radius: i32, color: P) {
        for r in (0..=radius).rev() {
            self.draw_circle(center, r, color);
        }
    }

    pub fn draw_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: P) {
        self.draw_line(p1, p2, color);
        self.draw_line(p2, p3, color);
        self.draw_line(p3, p1, color);
    }

    /// Fill a triangle with a fan of lines from `p3`.
    ///
    /// A walker starts at `p1` and moves toward `p2`, one step in x and then
    /// one step in y per iteration. A line from `p3` to the walker is drawn
    /// before every move and once more when it arrives.
    pub fn draw_filled_triangle(&mut self, p1: Point, p2: Point, p3: Point, color: P) {
        let mut walker = p1;
        while walker != p2 {
            self.draw_line(p3, walker, color);
            walker.x += p2.x.cmp(&walker.x) as i32;
            walker.y += p2.y.cmp(&walker.y) as i32;
        }
        self.draw_line(p3, walker, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::iproduct;

    fn set_points(grid: &PixelGrid<bool>) -> Vec<(i32, i32)> {
        let (width, height) = grid.size();
        iproduct!(0..height as i32, 0..width as i32)
            .filter(|&(y, x)| grid.get(x, y) == Some(true))
            .map(|(y, x)| (x, y))
            .collect()
    }

    #[test]
    fn diagonal_line() {
        let mut grid = PixelGrid::new(6, 6);
        grid.draw_line(Point::new(0, 0), Point::new(3, 3), true);
        assert_eq!(set_points(&grid), [(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn line_direction_does_not_matter_for_axes() {
        let mut forward = PixelGrid::new(5, 5);
        forward.draw_line(Point::new(0, 2), Point::new(4, 2), true);
        let mut backward = PixelGrid::new(5, 5);
        backward.draw_line(Point::new(4, 2), Point::new(0, 2), true);

        assert_eq!(forward, backward);
        assert_eq!(set_points(&forward).len(), 5);
    }

    #[test]
    fn steep_line_has_one_pixel_per_row() {
        let mut grid = PixelGrid::new(5, 9);
        grid.draw_line(Point::new(4, 8), Point::new(1, 0), true);
        let points = set_points(&grid);
        assert_eq!(points.len(), 9);
        assert!(points.contains(&(1, 0)));
        assert!(points.contains(&(4, 8)));
    }

    #[test]
    fn degenerate_line_is_one_pixel() {
        let mut grid = PixelGrid::new(3, 3);
        grid.draw_line(Point::new(1, 2), Point::new(1, 2), true);
        assert_eq!(set_points(&grid), [(1, 2)]);
    }

    #[test]
    fn off_grid_points_are_skipped() {
        let mut grid = PixelGrid::new(3, 3);
        grid.draw_line(Point::new(-2, -2), Point::new(5, 5), true);
        assert_eq!(set_points(&grid), [(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn far_endpoints() {
        let mut grid = PixelGrid::new(4, 2);
        grid.draw_line(Point::new(2_000_000_000, 5), Point::new(-2_000_000_000, 5), true);
        grid.draw_line(Point::new(i32::MIN, 1), Point::new(-1, 1), true);
        assert!(set_points(&grid).is_empty());

        grid.draw_line(Point::new(0, 0), Point::new(i32::MAX, i32::MAX), true);
        assert_eq!(set_points(&grid), [(0, 0), (1, 1)]);
    }

    #[test]
    fn huge_rectangles_clip() {
        let mut grid = PixelGrid::new(8, 2);
        grid.draw_rectangle(Point::new(10, 0), i32::MAX, 0, true);
        grid.draw_filled_rectangle(Point::new(i32::MIN, i32::MIN), i32::MAX, i32::MAX, true);
        assert!(set_points(&grid).is_empty());

        grid.draw_filled_rectangle(Point::new(-5, -5), i32::MAX, i32::MAX, true);
        assert_eq!(set_points(&grid).len(), 16);
    }

    #[test]
    fn rectangle_outline() {
        let mut grid = PixelGrid::new(6, 5);
        grid.draw_rectangle(Point::new(1, 1), 3, 2, true);
        for (x, y) in [(1, 1), (4, 1), (1, 3), (4, 3), (2, 1), (1, 2), (4, 2), (3, 3)] {
            assert_eq!(grid.get(x, y), Some(true), "({}, {})", x, y);
        }
        assert_eq!(grid.get(2, 2), Some(false));
        assert_eq!(set_points(&grid).len(), 10);
    }

    #[test]
    fn filled_rectangle_includes_last_row() {
        let mut grid = PixelGrid::new(6, 6);
        grid.draw_filled_rectangle(Point::new(1, 1), 2, 3, true);
        // rows 1..=4, columns 1..=3
        assert_eq!(set_points(&grid).len(), 4 * 3);
        assert_eq!(grid.get(3, 4), Some(true));
        assert_eq!(grid.get(1, 5), Some(false));
    }

    #[test]
    fn zero_radius_circle_is_the_center() {
        let mut grid = PixelGrid::new(5, 5);
        grid.draw_circle(Point::new(2, 2), 0, true);
        assert_eq!(set_points(&grid), [(2, 2)]);
    }

    #[test]
    fn circle_uses_scaled_radius() {
        let mut grid = PixelGrid::new(9, 9);
        // 2 * 0.85 = 1.7, so distance 2 is on the ring and distance 1 is not
        grid.draw_circle(Point::new(4, 4), 2, true);
        assert_eq!(grid.get(6, 4), Some(true));
        assert_eq!(grid.get(5, 5), Some(true));
        assert_eq!(grid.get(5, 4), Some(false));
        assert_eq!(grid.get(4, 4), Some(false));
    }

    #[test]
    fn filled_circle_stacks_rings() {
        let mut grid = PixelGrid::new(9, 9);
        grid.draw_filled_circle(Point::new(4, 4), 2, true);
        for (x, y) in [(4, 4), (5, 4), (6, 4), (5, 5), (4, 2)] {
            assert_eq!(grid.get(x, y), Some(true), "({}, {})", x, y);
        }
        assert_eq!(grid.get(7, 4), Some(false));
        assert_eq!(grid.get(6, 6), Some(false));
    }

    #[test]
    fn circle_clips_to_grid() {
        let mut grid = PixelGrid::new(4, 4);
        grid.draw_filled_circle(Point::new(-1, -1), 3, true);
        assert_eq!(grid.get(0, 0), Some(true));
        assert_eq!(grid.get(3, 3), Some(false));
    }

    #[test]
    fn circle_far_away() {
        let mut grid = PixelGrid::new(4, 4);
        grid.draw_circle(Point::new(i32::MIN, i32::MAX), 5, true);
        assert!(set_points(&grid).is_empty());
    }

    #[test]
    fn triangle_outline() {
        let mut grid = PixelGrid::new(5, 5);
        grid.draw_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), true);
        for i in 0..5 {
            assert_eq!(grid.get(i, 0), Some(true));
            assert_eq!(grid.get(0, i), Some(true));
            assert_eq!(grid.get(i, 4 - i), Some(true));
        }
        assert_eq!(grid.get(1, 1), Some(false));
    }

    #[test]
    fn filled_triangle_fans_from_third_point() {
        let mut grid = PixelGrid::new(5, 5);
        grid.draw_filled_triangle(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4), true);
        for i in 0..5 {
            assert_eq!(grid.get(i, 0), Some(true));
            assert_eq!(grid.get(0, i), Some(true));
            assert_eq!(grid.get(i, 4 - i), Some(true));
        }
        assert_eq!(grid.get(1, 1), Some(true));
        assert_eq!(grid.get(3, 3), Some(false));
        assert_eq!(grid.get(4, 4), Some(false));
    }

    #[test]
    fn filled_triangle_walks_both_axes() {
        let mut grid = PixelGrid::new(4, 4);
        grid.draw_filled_triangle(Point::new(0, 0), Point::new(3, 1), Point::new(0, 3), 7u8);
        // the walker visits (0,0), (1,1), (2,1) and ends on (3,1)
        for (x, y) in [(0, 0), (1, 1), (2, 1), (3, 1), (0, 3)] {
            assert_eq!(grid.get(x, y), Some(7), "({}, {})", x, y);
        }
        assert_eq!(grid.get(1, 0), Some(0));
    }
}
