//! Rectangle drawing
//!
//! Plain rectangles are filled as a clipped block or stroked as nested
//! horizontal bands. Rounded rectangles are composed from the other
//! rasterizers: an octagonal core polygon plus four quadrant-gated circle
//! corners when filled, four thick edge lines plus four quadrant strokes
//! when outlined.

use log::trace;

use crate::bbox::DrawnArea;
use crate::buffer::PixelBuffer;
use crate::circle::{circle_quadrants, Quadrants};
use crate::clip::{ClipRect, Rect};
use crate::line::line_width;
use crate::pixel::{fill_hspan, fill_hspan_clipped, set_pixel_tracked};
use crate::poly::fill_polygon;

/// Per-corner radius overrides for [`rect`]
///
/// A corner left unset falls back to the call's shared radius.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CornerRadii {
    pub top_left: Option<i32>,
    pub top_right: Option<i32>,
    pub bottom_left: Option<i32>,
    pub bottom_right: Option<i32>,
}

impl CornerRadii {
    /// No overrides: every corner uses the shared radius
    pub fn none() -> Self {
        Self::default()
    }
    fn all_unrounded(&self, radius: i32) -> bool {
        radius <= 0
            && self.top_left.map_or(true, |v| v <= 0)
            && self.top_right.map_or(true, |v| v <= 0)
            && self.bottom_left.map_or(true, |v| v <= 0)
            && self.bottom_right.map_or(true, |v| v <= 0)
    }
}

/// Draw a rectangle, filled or stroked, with optionally rounded corners
///
/// `width` 0 fills; positive widths stroke inward. `radius` rounds every
/// corner, individually overridable through `corners`. Adjacent radii too
/// big for an edge are scaled down proportionally, all four by the same
/// factor. Rectangles thinner than two pixels in either direction are drawn
/// as plain rectangles regardless of radius.
pub fn rect(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    r: Rect,
    width: i32,
    radius: i32,
    corners: CornerRadii,
) -> Rect {
    if width < 0 {
        return Rect::empty_at(r.x, r.y);
    }
    let clip = clip.intersect(&buf.bounds());

    if corners.all_unrounded(radius) || r.w.abs() < 2 || r.h.abs() < 2 {
        let clipped = clip.intersect(&ClipRect::new(r.x, r.y, r.w, r.h));
        if clipped.is_empty() {
            return Rect::empty_at(r.x, r.y);
        }
        if width > 0 && (width * 2) < clipped.w && (width * 2) < clipped.h {
            stroke_rect(buf, &clip, r.x, r.y, r.x + r.w - 1, r.y + r.h - 1, width, color);
        } else {
            for y in clipped.y..clipped.bottom() {
                fill_hspan(buf, color, clipped.x, y, clipped.right() - 1);
            }
        }
        return Rect::new(clipped.x, clipped.y, clipped.w, clipped.h);
    }

    // The rounded composer needs a normalized rectangle.
    let mut r = r;
    if r.w < 0 {
        r.x += r.w;
        r.w = -r.w;
    }
    if r.h < 0 {
        r.y += r.h;
        r.h = -r.h;
    }
    let mut width = width;
    if width > r.w / 2 || width > r.h / 2 {
        width = (r.w / 2).max(r.h / 2);
    }

    let mut area = DrawnArea::new();
    round_rect(
        buf,
        &clip,
        r.x,
        r.y,
        r.x + r.w - 1,
        r.y + r.h - 1,
        radius,
        width,
        color,
        corners,
        &mut area,
    );
    area.to_rect().unwrap_or_else(|| Rect::empty_at(r.x, r.y))
}

/// Plain stroked rectangle as nested horizontal bands
fn stroke_rect(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    width: i32,
    color: u32,
) {
    for i in 0..width {
        fill_hspan_clipped(buf, clip, color, x1, y1 + i, x2);
        fill_hspan_clipped(buf, clip, color, x1, y2 - i, x2);
    }
    for i in 0..(y2 - y1) - 2 * width + 1 {
        fill_hspan_clipped(buf, clip, color, x1, y1 + width + i, x1 + width - 1);
        fill_hspan_clipped(buf, clip, color, x2 - width + 1, y1 + width + i, x2);
    }
}

/// Rounded rectangle composed from polygon, line, and quadrant-circle calls
#[allow(clippy::too_many_arguments)]
fn round_rect(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    radius: i32,
    width: i32,
    color: u32,
    corners: CornerRadii,
    area: &mut DrawnArea,
) {
    let mut top_left = corners.top_left.unwrap_or(radius);
    let mut top_right = corners.top_right.unwrap_or(radius);
    let mut bottom_left = corners.bottom_left.unwrap_or(radius);
    let mut bottom_right = corners.bottom_right.unwrap_or(radius);

    if (top_left + top_right) > (x2 - x1 + 1)
        || (bottom_left + bottom_right) > (x2 - x1 + 1)
        || (top_left + bottom_left) > (y2 - y1 + 1)
        || (top_right + bottom_right) > (y2 - y1 + 1)
    {
        // scale all four radii by the tightest edge-capacity ratio
        let q_top = (x2 - x1 + 1) as f32 / (top_left + top_right) as f32;
        let q_left = (y2 - y1 + 1) as f32 / (top_left + bottom_left) as f32;
        let q_bottom = (x2 - x1 + 1) as f32 / (bottom_left + bottom_right) as f32;
        let q_right = (y2 - y1 + 1) as f32 / (top_right + bottom_right) as f32;
        let f = q_top.min(q_left).min(q_bottom).min(q_right);
        trace!("round_rect: scaling corner radii by {}", f);
        top_left = (top_left as f32 * f) as i32;
        top_right = (top_right as f32 * f) as i32;
        bottom_left = (bottom_left as f32 * f) as i32;
        bottom_right = (bottom_right as f32 * f) as i32;
    }

    if width == 0 {
        // Filled: the rectangle minus its corner wedges, then each corner
        // as a filled quadrant.
        let pts = [
            (x1, y1 + top_left),
            (x1 + top_left, y1),
            (x2 - top_right, y1),
            (x2, y1 + top_right),
            (x2, y2 - bottom_right),
            (x2 - bottom_right, y2),
            (x1 + bottom_left, y2),
            (x1, y2 - bottom_left),
        ];
        fill_polygon(buf, clip, &pts, color, area);
        circle_quadrants(
            buf, clip, x2 - top_right + 1, y1 + top_right, top_right, 0, color,
            Quadrants { top_right: true, ..Quadrants::none() }, area,
        );
        circle_quadrants(
            buf, clip, x1 + top_left, y1 + top_left, top_left, 0, color,
            Quadrants { top_left: true, ..Quadrants::none() }, area,
        );
        circle_quadrants(
            buf, clip, x1 + bottom_left, y2 - bottom_left + 1, bottom_left, 0, color,
            Quadrants { bottom_left: true, ..Quadrants::none() }, area,
        );
        circle_quadrants(
            buf, clip, x2 - bottom_right + 1, y2 - bottom_right + 1, bottom_right, 0, color,
            Quadrants { bottom_right: true, ..Quadrants::none() }, area,
        );
    } else {
        // Stroked: four straight edges, each collapsing to a pixel column
        // when a reduced radius leaves it no length, plus four quadrant
        // strokes.
        if x2 - top_right == x1 + top_left {
            for i in 0..width {
                set_pixel_tracked(buf, clip, x1 + top_left, y1 + i, color, area);
            }
        } else {
            let y = y1 + width / 2 - 1 + width % 2;
            line_width(buf, clip, color, x1 + top_left, y, x2 - top_right, y, width, area);
        }
        if y2 - bottom_left == y1 + top_left {
            for i in 0..width {
                set_pixel_tracked(buf, clip, x1 + i, y1 + top_left, color, area);
            }
        } else {
            let x = x1 + width / 2 - 1 + width % 2;
            line_width(buf, clip, color, x, y1 + top_left, x, y2 - bottom_left, width, area);
        }
        if x2 - bottom_right == x1 + bottom_left {
            for i in 0..width {
                set_pixel_tracked(buf, clip, x1 + bottom_left, y2 - i, color, area);
            }
        } else {
            let y = y2 - width / 2;
            line_width(buf, clip, color, x1 + bottom_left, y, x2 - bottom_right, y, width, area);
        }
        if y2 - bottom_right == y1 + top_right {
            for i in 0..width {
                set_pixel_tracked(buf, clip, x2 - i, y1 + top_right, color, area);
            }
        } else {
            let x = x2 - width / 2;
            line_width(buf, clip, color, x, y1 + top_right, x, y2 - bottom_right, width, area);
        }

        circle_quadrants(
            buf, clip, x2 - top_right + 1, y1 + top_right, top_right, width, color,
            Quadrants { top_right: true, ..Quadrants::none() }, area,
        );
        circle_quadrants(
            buf, clip, x1 + top_left, y1 + top_left, top_left, width, color,
            Quadrants { top_left: true, ..Quadrants::none() }, area,
        );
        circle_quadrants(
            buf, clip, x1 + bottom_left, y2 - bottom_left + 1, bottom_left, width, color,
            Quadrants { bottom_left: true, ..Quadrants::none() }, area,
        );
        circle_quadrants(
            buf, clip, x2 - bottom_right + 1, y2 - bottom_right + 1, bottom_right, width, color,
            Quadrants { bottom_right: true, ..Quadrants::none() }, area,
        );
    }
}
