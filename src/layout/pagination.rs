//! Pagination for multi-page documents
//!
//! The write position is a plain value threaded through the layout calls:
//! every reservation takes a cursor and returns where the line goes and
//! where the next write starts, so page-break logic can be exercised
//! without any drawing backend.

/// Printable area of a page, in page units measured from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFrame {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl PageFrame {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Current write position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    /// Page index (0-based)
    pub page: usize,
    /// Top of the next line on that page
    pub y: f32,
}

/// Result of reserving room for one line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Where the line is drawn (its top edge)
    pub at: PageCursor,
    /// Where the following write starts
    pub next: PageCursor,
    /// Whether a new page was started for this line
    pub page_break: bool,
}

impl PageCursor {
    /// Cursor at the top of the first page
    pub fn start(frame: &PageFrame) -> Self {
        Self {
            page: 0,
            y: frame.top,
        }
    }

    /// Check if nothing has been written on the current page yet
    pub fn at_page_top(&self, frame: &PageFrame) -> bool {
        self.y <= frame.top
    }

    /// Check if `height` more units fit above the bottom margin
    pub fn fits(&self, height: f32, frame: &PageFrame) -> bool {
        self.y + height <= frame.bottom
    }

    /// Top of the following page
    pub fn next_page(self, frame: &PageFrame) -> Self {
        Self {
            page: self.page + 1,
            y: frame.top,
        }
    }

    /// Reserve a line of `height`, breaking to a new page first when the
    /// line would cross the bottom margin.
    ///
    /// A line is never split and never moved back; a fresh page always
    /// accepts it because option validation guarantees the tallest line fits.
    pub fn reserve(self, height: f32, frame: &PageFrame) -> Placement {
        let (at, page_break) = if self.fits(height, frame) || self.at_page_top(frame) {
            (self, false)
        } else {
            (self.next_page(frame), true)
        };

        Placement {
            at,
            next: PageCursor {
                page: at.page,
                y: at.y + height,
            },
            page_break,
        }
    }

    /// Advance by vertical spacing. Spacing never crosses the bottom margin;
    /// it is absorbed by the page break that the next line triggers.
    pub fn advance(self, gap: f32, frame: &PageFrame) -> Self {
        Self {
            page: self.page,
            y: (self.y + gap).min(frame.bottom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> PageFrame {
        PageFrame {
            top: 20.0,
            bottom: 277.0,
            left: 20.0,
            right: 190.0,
        }
    }

    #[test]
    fn test_reserve_on_same_page() {
        let frame = frame();
        let placement = PageCursor::start(&frame).reserve(6.0, &frame);
        assert!(!placement.page_break);
        assert_eq!(placement.at, PageCursor { page: 0, y: 20.0 });
        assert_eq!(placement.next, PageCursor { page: 0, y: 26.0 });
    }

    #[test]
    fn test_reserve_exactly_to_bottom() {
        let frame = frame();
        let cursor = PageCursor { page: 0, y: 271.0 };
        let placement = cursor.reserve(6.0, &frame);
        assert!(!placement.page_break);
        assert_eq!(placement.next.y, 277.0);
    }

    #[test]
    fn test_reserve_breaks_page() {
        let frame = frame();
        let cursor = PageCursor { page: 2, y: 272.0 };
        let placement = cursor.reserve(6.0, &frame);
        assert!(placement.page_break);
        assert_eq!(placement.at, PageCursor { page: 3, y: 20.0 });
        assert_eq!(placement.next, PageCursor { page: 3, y: 26.0 });
    }

    #[test]
    fn test_advance_is_clamped() {
        let frame = frame();
        let cursor = PageCursor { page: 0, y: 275.0 }.advance(5.0, &frame);
        assert_eq!(cursor.y, 277.0);
        assert!(cursor.fits(0.0, &frame));
        assert!(!cursor.fits(0.5, &frame));
    }

    #[test]
    fn test_page_top() {
        let frame = frame();
        let cursor = PageCursor::start(&frame);
        assert!(cursor.at_page_top(&frame));
        assert!(!cursor.advance(1.0, &frame).at_page_top(&frame));
        assert!(cursor.advance(1.0, &frame).next_page(&frame).at_page_top(&frame));
    }
}
