//! Circle rasterizer
//!
//! Midpoint circle drawing in four flavors: a filled disc emitting merged
//! horizontal spans, an eight-point thin outline, a stroked ring traced with
//! two simultaneous midpoint walks (outer and inner radius), and a
//! quadrant-gated variant used standalone and by the rounded rectangle
//! corners. Antialiased circles live in `aacircle`.

use crate::bbox::DrawnArea;
use crate::buffer::PixelBuffer;
use crate::clip::{ClipRect, Rect};
use crate::pixel::{fill_hspan_tracked, set_pixel_tracked};

/// Quadrant selection for circle drawing
///
/// With no quadrant selected the full circle is drawn; otherwise only the
/// chosen quarters are, each gated independently.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Quadrants {
    pub top_right: bool,
    pub top_left: bool,
    pub bottom_left: bool,
    pub bottom_right: bool,
}

impl Quadrants {
    /// No quadrant selected: draw the full circle
    pub fn none() -> Self {
        Self::default()
    }
    /// Every quadrant selected
    pub fn all() -> Self {
        Quadrants {
            top_right: true,
            top_left: true,
            bottom_left: true,
            bottom_right: true,
        }
    }
    /// True if any quadrant is selected
    pub fn any(&self) -> bool {
        self.top_right || self.top_left || self.bottom_left || self.bottom_right
    }
}

/// Draw a circle, filled or stroked
///
/// A `width` of 0 (or equal to the radius) fills the disc; 1 draws a thin
/// outline; larger widths draw a ring growing inward from the radius.
/// Radii below 1 and negative widths draw nothing.
pub fn circle(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    center: (i32, i32),
    radius: i32,
    width: i32,
    quadrants: Quadrants,
) -> Rect {
    let (cx, cy) = center;
    if radius < 1 || width < 0 {
        return Rect::empty_at(cx, cy);
    }
    let width = width.min(radius);
    let clip = clip.intersect(&buf.bounds());
    if cx > clip.right() + radius
        || cx < clip.x - radius
        || cy > clip.bottom() + radius
        || cy < clip.y - radius
    {
        return Rect::empty_at(cx, cy);
    }

    let mut area = DrawnArea::new();
    if !quadrants.any() {
        if width == 0 || width == radius {
            circle_filled(buf, &clip, cx, cy, radius, color, &mut area);
        } else if width == 1 {
            circle_thin(buf, &clip, cx, cy, radius, color, &mut area);
        } else {
            circle_ring(buf, &clip, cx, cy, radius, width, color, &mut area);
        }
    } else {
        circle_quadrants(buf, &clip, cx, cy, radius, width, color, quadrants, &mut area);
    }
    area.to_rect().unwrap_or_else(|| Rect::empty_at(cx, cy))
}

/// Filled disc as merged horizontal spans
///
/// One midpoint octant walk; a span pair at the octant's y extent is only
/// emitted when y is about to step, so no row is drawn twice.
pub(crate) fn circle_filled(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x0: i32,
    y0: i32,
    radius: i32,
    color: u32,
    area: &mut DrawnArea,
) {
    let mut f = 1 - radius;
    let mut ddf_x = 0;
    let mut ddf_y = -2 * radius;
    let mut x = 0;
    let mut y = radius;
    // keeps x0 + x from running past the integer range for extreme centers
    let xmax = i32::MAX.saturating_sub(x0);

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x + 1;

        if f >= 0 {
            fill_hspan_tracked(buf, clip, color, x0 - x, y0 + y - 1, x0 + (x - 1).min(xmax), area);
            fill_hspan_tracked(buf, clip, color, x0 - x, y0 - y, x0 + (x - 1).min(xmax), area);
        }
        fill_hspan_tracked(buf, clip, color, x0 - y, y0 + x - 1, x0 + (y - 1).min(xmax), area);
        fill_hspan_tracked(buf, clip, color, x0 - y, y0 - x, x0 + (y - 1).min(xmax), area);
    }
}

/// Thin circle outline from the eight symmetric octant points
fn circle_thin(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x0: i32,
    y0: i32,
    radius: i32,
    color: u32,
    area: &mut DrawnArea,
) {
    let mut f = 1 - radius;
    let mut ddf_x = 0;
    let mut ddf_y = -2 * radius;
    let mut x = 0;
    let mut y = radius;

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x + 1;

        set_pixel_tracked(buf, clip, x0 + x - 1, y0 + y - 1, color, area);
        set_pixel_tracked(buf, clip, x0 - x, y0 + y - 1, color, area);
        set_pixel_tracked(buf, clip, x0 + x - 1, y0 - y, color, area);
        set_pixel_tracked(buf, clip, x0 - x, y0 - y, color, area);
        set_pixel_tracked(buf, clip, x0 + y - 1, y0 + x - 1, color, area);
        set_pixel_tracked(buf, clip, x0 + y - 1, y0 - x, color, area);
        set_pixel_tracked(buf, clip, x0 - y, y0 + x - 1, color, area);
        set_pixel_tracked(buf, clip, x0 - y, y0 - x, color, area);
    }
}

/// Stroked ring from two simultaneous midpoint walks
///
/// The outer walk traces the given radius, the inner one
/// `radius - thickness + 1`. While the outer y is still above the inner
/// radius the cap region gets full spans; after that each row is two partial
/// spans around the inner hole.
fn circle_ring(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x0: i32,
    y0: i32,
    radius: i32,
    thickness: i32,
    color: u32,
    area: &mut DrawnArea,
) {
    let mut x: i64 = 0;
    let mut y: i64 = i64::from(radius);
    let radius_squared = i64::from(radius) * i64::from(radius);
    let double_radius_squared = 2 * radius_squared;
    let mut d1 = radius_squared as f64 * (1.25 - f64::from(radius));
    let mut dx: i64 = 0;
    let mut dy: i64 = double_radius_squared * y;

    let mut line = true;
    let radius_inner = i64::from(radius - thickness + 1);
    let mut x_inner: i64 = 0;
    let mut y_inner: i64 = radius_inner;
    let radius_inner_squared = radius_inner * radius_inner;
    let double_radius_inner_squared = 2 * radius_inner_squared;
    let mut d1_inner = radius_inner_squared as f64 * (1.25 - radius_inner as f64);
    let mut d2_inner = 0.0f64;
    let mut dx_inner: i64 = 0;
    let mut dy_inner: i64 = double_radius_inner_squared * y_inner;

    let rows = |buf: &mut PixelBuffer, area: &mut DrawnArea, x: i64, y: i64, x_inner: i64, full: bool| {
        let (x, y, x_inner) = (x as i32, y as i32, x_inner as i32);
        if full {
            fill_hspan_tracked(buf, clip, color, x0 - x, y0 - y, x0 + x - 1, area);
            fill_hspan_tracked(buf, clip, color, x0 - x, y0 + y - 1, x0 + x - 1, area);
        } else {
            fill_hspan_tracked(buf, clip, color, x0 - x, y0 - y, x0 - x_inner, area);
            fill_hspan_tracked(buf, clip, color, x0 - x, y0 + y - 1, x0 - x_inner, area);
            fill_hspan_tracked(buf, clip, color, x0 + x_inner - 1, y0 - y, x0 + x - 1, area);
            fill_hspan_tracked(buf, clip, color, x0 + x_inner - 1, y0 + y - 1, x0 + x - 1, area);
        }
    };

    while dx < dy {
        while d1 < 0.0 {
            x += 1;
            dx += double_radius_squared;
            d1 += (dx + radius_squared) as f64;
        }
        rows(buf, area, x, y, x_inner, line);
        x += 1;
        y -= 1;
        dx += double_radius_squared;
        dy -= double_radius_squared;
        d1 += (dx - dy + radius_squared) as f64;
        if line && y < radius_inner {
            line = false;
        }
        if !line {
            while d1_inner < 0.0 {
                x_inner += 1;
                dx_inner += double_radius_inner_squared;
                d1_inner += (dx_inner + radius_inner_squared) as f64;
            }
            x_inner += 1;
            y_inner -= 1;
            dx_inner += double_radius_inner_squared;
            dy_inner -= double_radius_inner_squared;
            d1_inner += (dx_inner - dy_inner + radius_inner_squared) as f64;
        }
    }
    d1 = radius_squared as f64
        * ((x as f64 + 0.5) * (x as f64 + 0.5) + ((y - 1) as f64) * ((y - 1) as f64)
            - radius_squared as f64);
    while y >= 0 {
        rows(buf, area, x, y, x_inner, line);
        if d1 > 0.0 {
            y -= 1;
            dy -= double_radius_squared;
            d1 += (radius_squared - dy) as f64;
        } else {
            y -= 1;
            x += 1;
            dx += double_radius_squared;
            dy -= double_radius_squared;
            d1 += (dx - dy + radius_squared) as f64;
        }
        if line && y < radius_inner {
            line = false;
        }
        if !line {
            if dx_inner < dy_inner {
                while d1_inner < 0.0 {
                    x_inner += 1;
                    dx_inner += double_radius_inner_squared;
                    d1_inner += (dx_inner + radius_inner_squared) as f64;
                }
                x_inner += 1;
                y_inner -= 1;
                dx_inner += double_radius_inner_squared;
                dy_inner -= double_radius_inner_squared;
                d1_inner += (dx_inner - dy_inner + radius_inner_squared) as f64;
            } else {
                if d2_inner == 0.0 {
                    d2_inner = radius_inner_squared as f64
                        * ((x_inner as f64 + 0.5) * (x_inner as f64 + 0.5)
                            + ((y_inner - 1) as f64) * ((y_inner - 1) as f64)
                            - radius_inner_squared as f64);
                }
                if d2_inner > 0.0 {
                    y_inner -= 1;
                    dy_inner -= double_radius_inner_squared;
                    d2_inner += (radius_inner_squared - dy_inner) as f64;
                } else {
                    y_inner -= 1;
                    x_inner += 1;
                    dx_inner += double_radius_inner_squared;
                    dy_inner -= double_radius_inner_squared;
                    d2_inner += (dx_inner - dy_inner + radius_inner_squared) as f64;
                }
            }
        }
    }
}

/// Quadrant-gated circle, stroked or filled
///
/// Each symmetric octant pair is gated by its quadrant flag. A thickness of 0
/// fills the selected quadrants solid; otherwise only the stroke is drawn.
/// The octant numbering in the comments counts eighth-turns of the circle.
#[allow(clippy::too_many_arguments)]
pub(crate) fn circle_quadrants(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x0: i32,
    y0: i32,
    radius: i32,
    mut thickness: i32,
    color: u32,
    quadrants: Quadrants,
    area: &mut DrawnArea,
) {
    let mut f = 1 - radius;
    let mut ddf_x = 0;
    let mut ddf_y = -2 * radius;
    let mut x = 0;
    let mut y = radius;
    let mut i_y = radius - thickness;
    let mut i_f = 1 - i_y;
    let mut i_ddf_x = 0;
    let mut i_ddf_y = -2 * i_y;

    if radius == 1 {
        if quadrants.top_right {
            set_pixel_tracked(buf, clip, x0, y0 - 1, color, area);
        }
        if quadrants.top_left {
            set_pixel_tracked(buf, clip, x0 - 1, y0 - 1, color, area);
        }
        if quadrants.bottom_left {
            set_pixel_tracked(buf, clip, x0 - 1, y0, color, area);
        }
        if quadrants.bottom_right {
            set_pixel_tracked(buf, clip, x0, y0, color, area);
        }
        return;
    }

    if thickness != 0 {
        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            if i_f >= 0 {
                i_y -= 1;
                i_ddf_y += 2;
                i_f += i_ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x + 1;

            i_ddf_x += 2;
            i_f += i_ddf_x + 1;

            if thickness > 1 {
                thickness = y - i_y;
            }

            if quadrants.top_right {
                for i in 0..thickness {
                    let y1 = y - i;
                    if (y0 - y1) < (y0 - x) {
                        set_pixel_tracked(buf, clip, x0 + x - 1, y0 - y1, color, area); /* 2 */
                    }
                    if (x0 + y1 - 1) >= (x0 + x - 1) {
                        set_pixel_tracked(buf, clip, x0 + y1 - 1, y0 - x, color, area); /* 1 */
                    }
                }
            }
            if quadrants.top_left {
                for i in 0..thickness {
                    let y1 = y - i;
                    if (y0 - y1) <= (y0 - x) {
                        set_pixel_tracked(buf, clip, x0 - x, y0 - y1, color, area); /* 3 */
                    }
                    if (x0 - y1) < (x0 - x) {
                        set_pixel_tracked(buf, clip, x0 - y1, y0 - x, color, area); /* 4 */
                    }
                }
            }
            if quadrants.bottom_left {
                for i in 0..thickness {
                    let y1 = y - i;
                    if (x0 - y1) <= (x0 - x) {
                        set_pixel_tracked(buf, clip, x0 - y1, y0 + x - 1, color, area); /* 5 */
                    }
                    if (y0 + y1 - 1) > (y0 + x - 1) {
                        set_pixel_tracked(buf, clip, x0 - x, y0 + y1 - 1, color, area); /* 6 */
                    }
                }
            }
            if quadrants.bottom_right {
                for i in 0..thickness {
                    let y1 = y - i;
                    if (y0 + y1 - 1) >= (y0 + x - 1) {
                        set_pixel_tracked(buf, clip, x0 + x - 1, y0 + y1 - 1, color, area); /* 7 */
                    }
                    if (x0 + y1 - 1) > (x0 + x - 1) {
                        set_pixel_tracked(buf, clip, x0 + y1 - 1, y0 + x - 1, color, area); /* 8 */
                    }
                }
            }
        }
    } else {
        while x < y {
            if f >= 0 {
                y -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            x += 1;
            ddf_x += 2;
            f += ddf_x + 1;
            if quadrants.top_right {
                for y1 in (y0 - x)..=y0 {
                    set_pixel_tracked(buf, clip, x0 + y - 1, y1, color, area); /* 1 */
                }
                for y1 in (y0 - y)..=y0 {
                    set_pixel_tracked(buf, clip, x0 + x - 1, y1, color, area); /* 2 */
                }
            }
            if quadrants.top_left {
                for y1 in (y0 - x)..=y0 {
                    set_pixel_tracked(buf, clip, x0 - y, y1, color, area); /* 4 */
                }
                for y1 in (y0 - y)..=y0 {
                    set_pixel_tracked(buf, clip, x0 - x, y1, color, area); /* 3 */
                }
            }
            if quadrants.bottom_left {
                for y1 in y0..(y0 + x) {
                    set_pixel_tracked(buf, clip, x0 - y, y1, color, area); /* 4 */
                }
                for y1 in y0..(y0 + y) {
                    set_pixel_tracked(buf, clip, x0 - x, y1, color, area); /* 3 */
                }
            }
            if quadrants.bottom_right {
                for y1 in y0..(y0 + x) {
                    set_pixel_tracked(buf, clip, x0 + y - 1, y1, color, area); /* 1 */
                }
                for y1 in y0..(y0 + y) {
                    set_pixel_tracked(buf, clip, x0 + x - 1, y1, color, area); /* 2 */
                }
            }
        }
    }
}
