/// Integer size measured in terminal character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Rectangle area anchored within the terminal grid.
///
/// Stored as origin plus extent. The inclusive corner accessors (`x0`, `y0`,
/// `x1`, `y1`) satisfy `width == x1 - x0 + 1` for any non-empty rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin covering `size`.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn x0(&self) -> u16 {
        self.x
    }

    pub fn y0(&self) -> u16 {
        self.y
    }

    /// Inclusive right column. Equal to `x0` for empty rectangles.
    pub fn x1(&self) -> u16 {
        self.right().saturating_sub(1).max(self.x)
    }

    /// Inclusive bottom row. Equal to `y0` for empty rectangles.
    pub fn y1(&self) -> u16 {
        self.bottom().saturating_sub(1).max(self.y)
    }

    pub fn area(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True when the two rectangles share at least one cell.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_bounds_match_extent() {
        let rect = Rect::new(3, 2, 10, 4);
        assert_eq!(rect.x0(), 3);
        assert_eq!(rect.x1(), 12);
        assert_eq!(rect.y1(), 5);
        assert_eq!(rect.x1() - rect.x0() + 1, rect.width);
        assert_eq!(rect.y1() - rect.y0() + 1, rect.height);
    }

    #[test]
    fn adjacent_rects_do_not_overlap() {
        let left = Rect::new(0, 0, 30, 10);
        let right = Rect::new(30, 0, 60, 10);
        assert!(!left.overlaps(&right));
        assert!(left.overlaps(&Rect::new(29, 9, 5, 5)));
    }

    #[test]
    fn empty_rect_has_no_area() {
        let rect = Rect::new(4, 4, 0, 7);
        assert!(rect.is_empty());
        assert_eq!(rect.area(), 0);
        assert!(!rect.contains(4, 4));
    }
}
