//! Line rasterizer
//!
//! Aliased line drawing: a Bresenham core with horizontal, vertical, and
//! single-point fast paths, widened to an arbitrary stroke width by drawing a
//! perpendicular span at every step. Antialiased lines live in `aaline`.

use log::trace;

use crate::bbox::DrawnArea;
use crate::buffer::PixelBuffer;
use crate::clip::{ClipRect, Rect};
use crate::error::Error;
use crate::pixel::{fill_hspan, fill_vspan, set_pixel_tracked};

/// Draw a line segment of the given stroke width
///
/// Widths below 1 draw nothing. Returns the bounding box of the modified
/// pixels, or a zero-size rectangle at `start` if no pixel changed.
pub fn line(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    start: (i32, i32),
    end: (i32, i32),
    width: i32,
) -> Rect {
    if width < 1 {
        return Rect::empty_at(start.0, start.1);
    }
    let clip = clip.intersect(&buf.bounds());
    let mut area = DrawnArea::new();
    line_width(buf, &clip, color, start.0, start.1, end.0, end.1, width, &mut area);
    area.to_rect().unwrap_or_else(|| Rect::empty_at(start.0, start.1))
}

/// Draw connected line segments through `points`
///
/// Needs at least two points. When `closed`, a final segment joins the last
/// point back to the first.
pub fn lines(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    closed: bool,
    points: &[(i32, i32)],
    width: i32,
) -> Result<Rect, Error> {
    if points.len() < 2 {
        return Err(Error::TooFewPoints { expected: 2, found: points.len() });
    }
    let (ax, ay) = points[0];
    if width < 1 {
        return Ok(Rect::empty_at(ax, ay));
    }
    trace!("lines: {} points, width {}, closed {}", points.len(), width, closed);
    let clip = clip.intersect(&buf.bounds());
    let mut area = DrawnArea::new();
    for pair in points.windows(2) {
        line_width(
            buf, &clip, color, pair[0].0, pair[0].1, pair[1].0, pair[1].1, width, &mut area,
        );
    }
    if closed && points.len() > 2 {
        let (lx, ly) = points[points.len() - 1];
        line_width(buf, &clip, color, lx, ly, ax, ay, width, &mut area);
    }
    Ok(area.to_rect().unwrap_or_else(|| Rect::empty_at(ax, ay)))
}

/// Bresenham line of width one
pub(crate) fn line_thin(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    mut x1: i32,
    mut y1: i32,
    x2: i32,
    y2: i32,
    color: u32,
    area: &mut DrawnArea,
) {
    if x1 == x2 && y1 == y2 {
        set_pixel_tracked(buf, clip, x1, y1, color, area);
        return;
    }
    if y1 == y2 {
        let dx = if x1 < x2 { 1 } else { -1 };
        for sx in 0..=(x1 - x2).abs() {
            set_pixel_tracked(buf, clip, x1 + dx * sx, y1, color, area);
        }
        return;
    }
    if x1 == x2 {
        let dy = if y1 < y2 { 1 } else { -1 };
        for sy in 0..=(y1 - y2).abs() {
            set_pixel_tracked(buf, clip, x1, y1 + dy * sy, color, area);
        }
        return;
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = if dx > dy { dx } else { -dy } / 2;
    while x1 != x2 || y1 != y2 {
        set_pixel_tracked(buf, clip, x1, y1, color, area);
        let e2 = err;
        if e2 > -dx {
            err -= dy;
            x1 += sx;
        }
        if e2 < dy {
            err += dx;
            y1 += sy;
        }
    }
    set_pixel_tracked(buf, clip, x2, y2, color, area);
}

/// Bresenham line widened with a perpendicular span at every step
///
/// The stroke grows along x when the segment is steep (flat caps at top and
/// bottom), along y otherwise. Even widths place the extra pixel on the low
/// side of the center line.
pub(crate) fn line_width(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    mut x1: i32,
    mut y1: i32,
    x2: i32,
    y2: i32,
    mut width: i32,
    area: &mut DrawnArea,
) {
    if width < 1 {
        return;
    }
    if width == 1 {
        line_thin(buf, clip, x1, y1, x2, y2, color, area);
        return;
    }

    let end_x = clip.right() - 1;
    let end_y = clip.bottom() - 1;
    let extra_width = 1 - (width % 2);
    width /= 2;

    // Steep segments grow their thickness along x instead of y.
    let grow_x = (x1 - x2).abs() <= (y1 - y2).abs();

    if !near_clip(clip, x1, y1, x2, y2, width, grow_x) {
        return;
    }

    if x1 == x2 && y1 == y2 {
        // Single point
        let start = (x1 - width + extra_width).max(clip.x);
        let end = (x1 + width).min(end_x);
        if start <= end {
            fill_hspan(buf, color, start, y1, end);
            area.absorb_span(start, y1, end, y1);
        }
        return;
    }

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x2 > x1 { 1 } else { -1 };
    let sy = if y2 > y1 { 1 } else { -1 };
    let mut err = if dx > dy { dx } else { -dy } / 2;
    if grow_x {
        while y1 != y2 + sy {
            if clip.y <= y1 && y1 <= end_y {
                let start = (x1 - width + extra_width).max(clip.x);
                let end = (x1 + width).min(end_x);
                if start <= end {
                    fill_hspan(buf, color, start, y1, end);
                    area.absorb_span(start, y1, end, y1);
                }
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x1 += sx;
            }
            if e2 < dy {
                err += dx;
                y1 += sy;
            }
        }
    } else {
        while x1 != x2 + sx {
            if clip.x <= x1 && x1 <= end_x {
                let start = (y1 - width + extra_width).max(clip.y);
                let end = (y1 + width).min(end_y);
                if start <= end {
                    fill_vspan(buf, color, x1, start, end);
                    area.absorb_span(x1, start, x1, end);
                }
            }
            let e2 = err;
            if e2 > -dx {
                err -= dy;
                x1 += sx;
            }
            if e2 < dy {
                err += dx;
                y1 += sy;
            }
        }
    }
}

/// Whether the segment's stroke box can touch the clip at all
fn near_clip(clip: &ClipRect, x1: i32, y1: i32, x2: i32, y2: i32, width: i32, grow_x: bool) -> bool {
    let (left, right, top, bottom) = if grow_x {
        (x1.min(x2) - width, x1.max(x2) + width, y1.min(y2), y1.max(y2))
    } else {
        (x1.min(x2), x1.max(x2), y1.min(y2) - width, y1.max(y2) + width)
    };
    !(clip.x > right || clip.y > bottom || clip.right() <= left || clip.bottom() <= top)
}
