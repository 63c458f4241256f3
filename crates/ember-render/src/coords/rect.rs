use super::Point;

/// Extents in pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle in screen pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn right(self) -> i32 {
        self.origin.x + self.size.width as i32
    }

    #[inline]
    pub fn bottom(self) -> i32 {
        self.origin.y + self.size.height as i32
    }

    /// Half-open containment: `[min, max)`.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < self.right() && p.y < self.bottom()
    }

    /// True if the rectangles share any area. Edge-adjacent rects do not.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        self.origin.x < other.right()
            && other.origin.x < self.right()
            && self.origin.y < other.bottom()
            && other.origin.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_and_min_edge() {
        let rect = r(0, 0, 10, 10);
        assert!(rect.contains(Point::new(5, 5)));
        assert!(rect.contains(Point::new(0, 0)));
    }

    #[test]
    fn contains_max_edge_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(Point::new(10, 10)));
    }

    // ── overlaps ──────────────────────────────────────────────────────────

    #[test]
    fn overlaps_intersecting() {
        assert!(r(0, 0, 10, 10).overlaps(r(5, 5, 10, 10)));
    }

    #[test]
    fn overlaps_edge_adjacent_is_false() {
        assert!(!r(0, 0, 10, 10).overlaps(r(10, 0, 10, 10)));
    }

    #[test]
    fn overlaps_disjoint_is_false() {
        assert!(!r(0, 0, 5, 5).overlaps(r(20, 20, 5, 5)));
    }

    // ── edges ─────────────────────────────────────────────────────────────

    #[test]
    fn right_and_bottom() {
        let rect = r(-3, 2, 5, 7);
        assert_eq!(rect.right(), 2);
        assert_eq!(rect.bottom(), 9);
    }
}
