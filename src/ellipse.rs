//! Ellipse rasterizer
//!
//! Two-region midpoint ellipse trace (region 1 while the tangent slope is
//! shallower than -1, region 2 after), emitting horizontal spans per
//! scanline. The stroked variant runs an inner trace alongside the outer
//! one, with the two regions' step cadence tracked independently per axis.

use crate::bbox::DrawnArea;
use crate::buffer::PixelBuffer;
use crate::clip::{ClipRect, Rect};
use crate::line::line_thin;
use crate::pixel::fill_hspan_tracked;

/// Draw an ellipse inscribed in `rect`, filled or stroked
///
/// A `width` of 0 fills; a width reaching the smaller semi-axis also fills;
/// negative widths draw nothing.
pub fn ellipse(buf: &mut PixelBuffer, clip: &ClipRect, color: u32, rect: Rect, width: i32) -> Rect {
    if width < 0 {
        return Rect::empty_at(rect.x, rect.y);
    }
    let clip = clip.intersect(&buf.bounds());
    let mut area = DrawnArea::new();
    if width == 0 || width >= (rect.w / 2 + rect.w % 2).min(rect.h / 2 + rect.h % 2) {
        ellipse_filled(buf, &clip, rect.x, rect.y, rect.w, rect.h, color, &mut area);
    } else {
        ellipse_ring(buf, &clip, rect.x, rect.y, rect.w, rect.h, width - 1, color, &mut area);
    }
    area.to_rect().unwrap_or_else(|| Rect::empty_at(rect.x, rect.y))
}

/// Filled ellipse as horizontal spans
///
/// One-pixel-wide or -tall ellipses degenerate to a straight line.
pub(crate) fn ellipse_filled(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x0: i32,
    y0: i32,
    width: i32,
    height: i32,
    color: u32,
    area: &mut DrawnArea,
) {
    if width == 1 {
        line_thin(buf, clip, x0, y0, x0, y0 + height - 1, color, area);
        return;
    }
    if height == 1 {
        fill_hspan_tracked(buf, clip, color, x0, y0, x0 + width - 1, area);
        return;
    }
    let x0 = x0 + width / 2;
    let y0 = y0 + height / 2;
    let x_offset = (width + 1) % 2;
    let y_offset = (height + 1) % 2;
    let width = i64::from(width / 2);
    let height = i64::from(height / 2);
    let mut x: i64 = 0;
    let mut y: i64 = height;
    let mut d1 = (height * height - width * width * height) as f64 + 0.25 * (width * width) as f64;
    let mut dx = 2 * height * height * x;
    let mut dy = 2 * width * width * y;
    while dx < dy {
        fill_hspan_tracked(
            buf, clip, color, x0 - x as i32, y0 - y as i32, x0 + x as i32 - x_offset, area,
        );
        fill_hspan_tracked(
            buf, clip, color, x0 - x as i32, y0 + y as i32 - y_offset, x0 + x as i32 - x_offset, area,
        );
        if d1 < 0.0 {
            x += 1;
            dx += 2 * height * height;
            d1 += (dx + height * height) as f64;
        } else {
            x += 1;
            y -= 1;
            dx += 2 * height * height;
            dy -= 2 * width * width;
            d1 += (dx - dy + height * height) as f64;
        }
    }
    let mut d2 = (height * height) as f64 * (x as f64 + 0.5) * (x as f64 + 0.5)
        + (width * width) as f64 * ((y - 1) as f64) * ((y - 1) as f64)
        - (width * width * height * height) as f64;
    while y >= 0 {
        fill_hspan_tracked(
            buf, clip, color, x0 - x as i32, y0 - y as i32, x0 + x as i32 - x_offset, area,
        );
        fill_hspan_tracked(
            buf, clip, color, x0 - x as i32, y0 + y as i32 - y_offset, x0 + x as i32 - x_offset, area,
        );
        if d2 > 0.0 {
            y -= 1;
            dy -= 2 * width * width;
            d2 += (width * width - dy) as f64;
        } else {
            y -= 1;
            x += 1;
            dx += 2 * height * height;
            dy -= 2 * width * width;
            d2 += (dx - dy + width * width) as f64;
        }
    }
}

/// Stroked ellipse from simultaneous outer and inner midpoint traces
fn ellipse_ring(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x0: i32,
    y0: i32,
    width: i32,
    height: i32,
    thickness: i32,
    color: u32,
    area: &mut DrawnArea,
) {
    let x0 = x0 + width / 2;
    let y0 = y0 + height / 2;
    let x_offset = (width + 1) % 2;
    let y_offset = (height + 1) % 2;
    let width = i64::from(width / 2);
    let height = i64::from(height / 2);
    let thickness = i64::from(thickness);
    let wi = width - thickness;
    let hi = height - thickness;

    let mut line = true;
    let mut x: i64 = 0;
    let mut y: i64 = height;
    let mut x_inner: i64 = 0;
    let mut y_inner: i64 = hi;
    let mut d1 = (height * height - width * width * height) as f64 + 0.25 * (width * width) as f64;
    let mut d1_inner = (hi * hi - wi * wi * hi) as f64 + 0.25 * (wi * wi) as f64;
    let mut d2_inner = 0.0f64;
    let mut dx = 2 * height * height * x;
    let mut dy = 2 * width * width * y;
    let mut dx_inner = 2 * hi * hi * x_inner;
    let mut dy_inner = 2 * wi * wi * y_inner;

    let rows = |buf: &mut PixelBuffer,
                area: &mut DrawnArea,
                x: i64,
                y: i64,
                x_inner: i64,
                full: bool| {
        let (x, y, x_inner) = (x as i32, y as i32, x_inner as i32);
        if full {
            fill_hspan_tracked(buf, clip, color, x0 - x, y0 - y, x0 + x - x_offset, area);
            fill_hspan_tracked(buf, clip, color, x0 - x, y0 + y - y_offset, x0 + x - x_offset, area);
        } else {
            fill_hspan_tracked(buf, clip, color, x0 - x, y0 - y, x0 - x_inner, area);
            fill_hspan_tracked(buf, clip, color, x0 - x, y0 + y - y_offset, x0 - x_inner, area);
            fill_hspan_tracked(
                buf, clip, color, x0 + x - x_offset, y0 - y, x0 + x_inner - x_offset, area,
            );
            fill_hspan_tracked(
                buf, clip, color, x0 + x - x_offset, y0 + y - y_offset, x0 + x_inner - x_offset,
                area,
            );
        }
    };

    while dx < dy {
        rows(buf, area, x, y, x_inner, line);
        if d1 < 0.0 {
            x += 1;
            dx += 2 * height * height;
            d1 += (dx + height * height) as f64;
        } else {
            x += 1;
            y -= 1;
            dx += 2 * height * height;
            dy -= 2 * width * width;
            d1 += (dx - dy + height * height) as f64;
            if line && y < hi {
                line = false;
            }
            if !line && dx_inner < dy_inner {
                while d1_inner < 0.0 {
                    x_inner += 1;
                    dx_inner += 2 * hi * hi;
                    d1_inner += (dx_inner + hi * hi) as f64;
                }
                x_inner += 1;
                y_inner -= 1;
                dx_inner += 2 * hi * hi;
                dy_inner -= 2 * wi * wi;
                d1_inner += (dx_inner - dy_inner + hi * hi) as f64;
            }
        }
    }
    let mut d2 = (height * height) as f64 * (x as f64 + 0.5) * (x as f64 + 0.5)
        + (width * width) as f64 * ((y - 1) as f64) * ((y - 1) as f64)
        - (width * width * height * height) as f64;
    while y >= 0 {
        rows(buf, area, x, y, x_inner, line);
        if d2 > 0.0 {
            y -= 1;
            dy -= 2 * width * width;
            d2 += (width * width - dy) as f64;
        } else {
            y -= 1;
            x += 1;
            dx += 2 * height * height;
            dy -= 2 * width * width;
            d2 += (dx - dy + width * width) as f64;
        }
        if line && y < hi {
            line = false;
        }
        if !line {
            if dx_inner < dy_inner {
                while d1_inner < 0.0 {
                    x_inner += 1;
                    dx_inner += 2 * hi * hi;
                    d1_inner += (dx_inner + hi * hi) as f64;
                }
                x_inner += 1;
                y_inner -= 1;
                dx_inner += 2 * hi * hi;
                dy_inner -= 2 * wi * wi;
                d1_inner += (dx_inner - dy_inner + hi * hi) as f64;
            } else if y_inner >= 0 {
                if d2_inner == 0.0 {
                    d2_inner = (hi * hi) as f64 * (x_inner as f64 + 0.5) * (x_inner as f64 + 0.5)
                        + (wi * wi) as f64 * ((y_inner - 1) as f64) * ((y_inner - 1) as f64)
                        - (wi * wi * hi * hi) as f64;
                }
                if d2_inner > 0.0 {
                    y_inner -= 1;
                    dy_inner -= 2 * wi * wi;
                    d2_inner += (wi * wi - dy_inner) as f64;
                } else {
                    y_inner -= 1;
                    x_inner += 1;
                    dx_inner += 2 * hi * hi;
                    dy_inner -= 2 * wi * wi;
                    d2_inner += (dx_inner - dy_inner + wi * wi) as f64;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PixelFormat;
    use crate::pixel::read_pixel;

    #[test]
    fn negative_width_draws_nothing() {
        let mut b = PixelBuffer::new(10, 10, PixelFormat::rgba8888());
        let clip = b.bounds();
        let r = ellipse(&mut b, &clip, 1, Rect::new(1, 1, 8, 6), -1);
        assert_eq!(r, Rect::empty_at(1, 1));
        assert!(b.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn one_pixel_tall_is_a_row() {
        let mut b = PixelBuffer::new(10, 10, PixelFormat::rgba8888());
        let clip = b.bounds();
        let r = ellipse(&mut b, &clip, 5, Rect::new(2, 3, 6, 1), 0);
        assert_eq!(r, Rect::new(2, 3, 6, 1));
        for x in 2..8 {
            assert_eq!(read_pixel(&b, x, 3), 5);
        }
    }

    #[test]
    fn filled_ellipse_is_mirror_symmetric() {
        let mut b = PixelBuffer::new(20, 14, PixelFormat::rgba8888());
        let clip = b.bounds();
        ellipse(&mut b, &clip, 1, Rect::new(2, 2, 16, 10), 0);
        // spans mirror about the rect's vertical and horizontal middle
        for y in 0..14 {
            for x in 0..20 {
                let v = read_pixel(&b, x, y);
                let mx = 2 + 16 - 1 - (x - 2);
                let my = 2 + 10 - 1 - (y - 2);
                if (0..20).contains(&mx) {
                    assert_eq!(v, read_pixel(&b, mx, y), "({}, {}) vs ({}, {})", x, y, mx, y);
                }
                if (0..14).contains(&my) {
                    assert_eq!(v, read_pixel(&b, x, my), "({}, {}) vs ({}, {})", x, y, x, my);
                }
            }
        }
    }

    #[test]
    fn stroked_ellipse_has_a_hole() {
        let mut b = PixelBuffer::new(24, 20, PixelFormat::rgba8888());
        let clip = b.bounds();
        ellipse(&mut b, &clip, 1, Rect::new(2, 2, 20, 16), 3);
        assert_eq!(read_pixel(&b, 12, 10), 0);
        assert_ne!(read_pixel(&b, 2, 10), 0);
    }
}
