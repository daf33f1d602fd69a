//! Bounding box accumulator for drawn pixels

use crate::clip::Rect;

/// Running bounding box of every pixel a draw call has modified
///
/// Starts out empty and grows as pixels and spans are absorbed. Converting an
/// accumulator that never absorbed anything yields `None`, which the drawing
/// entry points turn into a zero-size rectangle at the primitive's anchor.
///
///     use pixdraw::DrawnArea;
///
///     let mut area = DrawnArea::new();
///     assert_eq!(area.to_rect(), None);
///     area.absorb_point(3, 4);
///     area.absorb_point(5, 2);
///     let r = area.to_rect().unwrap();
///     assert_eq!((r.x, r.y, r.w, r.h), (3, 2, 3, 3));
///
#[derive(Debug, Copy, Clone)]
pub struct DrawnArea {
    minx: i32,
    miny: i32,
    maxx: i32,
    maxy: i32,
}

impl Default for DrawnArea {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawnArea {
    /// Create an empty accumulator
    pub fn new() -> Self {
        DrawnArea {
            minx: i32::MAX,
            miny: i32::MAX,
            maxx: i32::MIN,
            maxy: i32::MIN,
        }
    }
    /// Forget everything absorbed so far
    pub fn reset(&mut self) {
        *self = Self::new();
    }
    /// True if nothing has been absorbed yet
    pub fn is_empty(&self) -> bool {
        self.minx == i32::MAX || self.miny == i32::MAX || self.maxx == i32::MIN || self.maxy == i32::MIN
    }
    /// Grow the box to include the pixel (`x`,`y`)
    pub fn absorb_point(&mut self, x: i32, y: i32) {
        if x < self.minx {
            self.minx = x;
        }
        if y < self.miny {
            self.miny = y;
        }
        if x > self.maxx {
            self.maxx = x;
        }
        if y > self.maxy {
            self.maxy = y;
        }
    }
    /// Grow the box to include an ordered span
    ///
    /// Requires `x1 <= x2` and `y1 <= y2`; only the low corner is folded into
    /// the minima and the high corner into the maxima.
    pub fn absorb_span(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        if x1 < self.minx {
            self.minx = x1;
        }
        if y1 < self.miny {
            self.miny = y1;
        }
        if x2 > self.maxx {
            self.maxx = x2;
        }
        if y2 > self.maxy {
            self.maxy = y2;
        }
    }
    /// The accumulated box, or `None` if nothing was drawn
    pub fn to_rect(&self) -> Option<Rect> {
        if self.is_empty() {
            None
        } else {
            Some(Rect::new(
                self.minx,
                self.miny,
                self.maxx - self.minx + 1,
                self.maxy - self.miny + 1,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let area = DrawnArea::new();
        assert!(area.is_empty());
        assert_eq!(area.to_rect(), None);
    }

    #[test]
    fn single_pixel() {
        let mut area = DrawnArea::new();
        area.absorb_point(7, 9);
        assert_eq!(area.to_rect(), Some(Rect::new(7, 9, 1, 1)));
    }

    #[test]
    fn spans_and_points() {
        let mut area = DrawnArea::new();
        area.absorb_span(2, 5, 8, 5);
        area.absorb_point(4, 1);
        assert_eq!(area.to_rect(), Some(Rect::new(2, 1, 7, 5)));

        area.reset();
        assert!(area.is_empty());
    }
}
