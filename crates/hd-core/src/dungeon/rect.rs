//! Room rectangles
//!
//! Axis-aligned rectangles in offset coordinates with inclusive bounds. The
//! boundary ring is the room's wall; everything strictly inside is floor.

use serde::{Deserialize, Serialize};

use super::{GridNav, TileKey};

/// An axis-aligned rectangle, inclusive on all four sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomRect {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl RoomRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// A `width` x `height` rectangle centered on `(cx, cy)`.
    ///
    /// For even sizes the extra column/row lands on the left/top.
    pub fn centered(cx: i32, cy: i32, width: i32, height: i32) -> Self {
        let left = cx - width / 2;
        let top = cy - height / 2;
        Self::new(left, top, left + width - 1, top + height - 1)
    }

    /// Width including the wall columns
    pub fn width(&self) -> i32 {
        self.right - self.left + 1
    }

    /// Height including the wall rows
    pub fn height(&self) -> i32 {
        self.bottom - self.top + 1
    }

    pub fn center(&self) -> (i32, i32) {
        ((self.left + self.right) / 2, (self.top + self.bottom) / 2)
    }

    /// Check if a cell is inside or on the rectangle
    pub fn contains(&self, col: i32, row: i32) -> bool {
        col >= self.left && col <= self.right && row >= self.top && row <= self.bottom
    }

    /// Check if a cell is strictly inside the wall ring
    pub fn is_interior(&self, col: i32, row: i32) -> bool {
        col > self.left && col < self.right && row > self.top && row < self.bottom
    }

    /// Check if a cell lies on the wall ring
    pub fn is_perimeter(&self, col: i32, row: i32) -> bool {
        self.contains(col, row) && !self.is_interior(col, row)
    }

    /// Grow the rectangle by `pad` on every side, saturating at the `i32` range
    pub fn inflate(&self, pad: i32) -> Self {
        Self::new(
            self.left.saturating_sub(pad),
            self.top.saturating_sub(pad),
            self.right.saturating_add(pad),
            self.bottom.saturating_add(pad),
        )
    }

    /// Check if this rectangle intersects another
    pub fn intersects(&self, other: &RoomRect) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.bottom < other.top
            || self.top > other.bottom)
    }

    /// Check whether `other` comes within `pad` tiles of this rectangle.
    ///
    /// The pair is clear only when one lies strictly outside the padded other
    /// along some axis.
    pub fn overlaps_padded(&self, other: &RoomRect, pad: i32) -> bool {
        self.inflate(pad).intersects(other)
    }

    /// Check that the rectangle keeps `margin` tiles from every grid edge
    pub fn fits_within<G: GridNav + ?Sized>(&self, grid: &G, margin: i32) -> bool {
        self.left >= margin
            && self.top >= margin
            && self.right <= grid.width() - 1 - margin
            && self.bottom <= grid.height() - 1 - margin
    }

    /// Cells strictly inside the wall ring, row by row
    pub fn interior(&self, level: i32) -> impl Iterator<Item = TileKey> + '_ {
        ((self.top + 1)..self.bottom).flat_map(move |row| {
            ((self.left + 1)..self.right).map(move |col| TileKey::new(col, row, level))
        })
    }

    /// Cells on the wall ring, row by row
    pub fn perimeter(&self, level: i32) -> impl Iterator<Item = TileKey> + '_ {
        (self.top..=self.bottom).flat_map(move |row| {
            let full_row = row == self.top || row == self.bottom;
            (self.left..=self.right)
                .filter(move |&col| full_row || col == self.left || col == self.right)
                .map(move |col| TileKey::new(col, row, level))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::World;

    #[test]
    fn test_rect_dimensions() {
        let r = RoomRect::new(10, 20, 15, 25);
        assert_eq!(r.width(), 6);
        assert_eq!(r.height(), 6);
        assert_eq!(r.center(), (12, 22));
    }

    #[test]
    fn test_centered_odd_size() {
        let r = RoomRect::centered(7, 7, 9, 7);
        assert_eq!(r, RoomRect::new(3, 4, 11, 10));
        assert_eq!(r.center(), (7, 7));
        assert_eq!(r.width(), 9);
        assert_eq!(r.height(), 7);
    }

    #[test]
    fn test_centered_even_size() {
        let r = RoomRect::centered(10, 10, 8, 6);
        assert_eq!(r.width(), 8);
        assert_eq!(r.height(), 6);
        assert_eq!(r.left, 6);
        assert_eq!(r.top, 7);
    }

    #[test]
    fn test_interior_and_perimeter_partition() {
        let r = RoomRect::new(0, 0, 8, 6);
        let interior: Vec<_> = r.interior(0).collect();
        let perimeter: Vec<_> = r.perimeter(0).collect();
        assert_eq!(interior.len(), 7 * 5);
        assert_eq!(perimeter.len(), 9 * 7 - 7 * 5);
        assert!(interior.iter().all(|k| r.is_interior(k.col, k.row)));
        assert!(perimeter.iter().all(|k| r.is_perimeter(k.col, k.row)));
    }

    #[test]
    fn test_rect_intersects() {
        let r1 = RoomRect::new(0, 0, 10, 10);
        let r2 = RoomRect::new(5, 5, 15, 15);
        let r3 = RoomRect::new(20, 20, 30, 30);

        assert!(r1.intersects(&r2));
        assert!(r2.intersects(&r1));
        assert!(!r1.intersects(&r3));
    }

    #[test]
    fn test_padded_overlap() {
        let a = RoomRect::new(0, 0, 6, 4);
        // two clear columns between a.right and b.left
        let b = RoomRect::new(9, 0, 15, 4);
        assert!(!a.overlaps_padded(&b, 2));
        assert!(a.overlaps_padded(&b, 3));
        assert!(!b.overlaps_padded(&a, 2));
    }

    #[test]
    fn test_fits_within_margin() {
        let world = World::new(15, 15).unwrap();
        assert!(RoomRect::new(2, 2, 12, 12).fits_within(&world, 2));
        assert!(!RoomRect::new(1, 2, 12, 12).fits_within(&world, 2));
        assert!(!RoomRect::new(2, 2, 13, 12).fits_within(&world, 2));
    }

    #[test]
    fn test_inflate_saturates() {
        let a = RoomRect::new(10, 10, 20, 16);
        let grown = a.inflate(i32::MAX);
        assert_eq!(grown.left, 10 - i32::MAX);
        assert_eq!(grown.right, i32::MAX);
        assert_eq!(grown.bottom, i32::MAX);

        let far = RoomRect::new(1000, 1000, 1010, 1006);
        assert!(a.overlaps_padded(&far, i32::MAX));
        assert!(far.overlaps_padded(&a, i32::MAX));
    }
}
