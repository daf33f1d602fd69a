//! Antialiased circle rasterizer
//!
//! Xiaolin Wu circle drawing extended with a stroke thickness and quadrant
//! gating. Each integer layer radius from `radius - thickness` to `radius`
//! is traced through one octant; per column the exact fractional height of
//! the circle boundary splits the coverage between two adjacent pixels. The
//! innermost and outermost layers weight their opacity toward the stroke
//! interior so stacked layers composite into a seamless ring.

use crate::bbox::DrawnArea;
use crate::buffer::PixelBuffer;
use crate::circle::{circle_filled, Quadrants};
use crate::clip::{ClipRect, Rect};
use crate::pixel::{antialiased_color, set_pixel_tracked};

/// Draw an antialiased circle, filled or stroked
///
/// Same dispatch rules as [`circle`](crate::circle::circle): width 0 or the
/// radius fills (a hard-edged disc core under a two-layer blended rim),
/// width 1 draws a thin blended outline, larger widths a blended ring.
pub fn aacircle(
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
            circle_filled(buf, &clip, cx, cy, radius - 1, color, &mut area);
            wu_circle(buf, &clip, cx, cy, radius, 2, color, Quadrants::all(), &mut area);
        } else if width == 1 {
            wu_circle_thin(buf, &clip, cx, cy, radius, color, Quadrants::all(), &mut area);
        } else {
            wu_circle(buf, &clip, cx, cy, radius, width, color, Quadrants::all(), &mut area);
        }
    } else if width == 0 || width == radius {
        wu_circle(buf, &clip, cx, cy, radius, radius, color, quadrants, &mut area);
    } else if width == 1 {
        wu_circle_thin(buf, &clip, cx, cy, radius, color, quadrants, &mut area);
    } else {
        wu_circle(buf, &clip, cx, cy, radius, width, color, quadrants, &mut area);
    }
    area.to_rect().unwrap_or_else(|| Rect::empty_at(cx, cy))
}

/// Blend the eight symmetric octant pixels, gated per quadrant
///
/// `opacity` is coverage in 0..=255.
#[allow(clippy::too_many_arguments)]
fn octant_pixels(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x0: i32,
    y0: i32,
    color: u32,
    x: i32,
    y: i32,
    opacity: f64,
    quadrants: Quadrants,
    area: &mut DrawnArea,
) {
    let brightness = (opacity / 255.0) as f32;
    let put = |buf: &mut PixelBuffer, area: &mut DrawnArea, px: i32, py: i32| {
        let c = antialiased_color(buf, clip, px, py, color, brightness);
        set_pixel_tracked(buf, clip, px, py, c, area);
    };
    if quadrants.top_right {
        put(buf, area, x0 + x, y0 - y);
        put(buf, area, x0 + y, y0 - x);
    }
    if quadrants.top_left {
        put(buf, area, x0 - x, y0 - y);
        put(buf, area, x0 - y, y0 - x);
    }
    if quadrants.bottom_left {
        put(buf, area, x0 - x, y0 + y);
        put(buf, area, x0 - y, y0 + x);
    }
    if quadrants.bottom_right {
        put(buf, area, x0 + x, y0 + y);
        put(buf, area, x0 + y, y0 + x);
    }
}

/// Layered antialiased ring
#[allow(clippy::too_many_arguments)]
fn wu_circle(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x0: i32,
    y0: i32,
    radius: i32,
    thickness: i32,
    color: u32,
    quadrants: Quadrants,
    area: &mut DrawnArea,
) {
    for layer_radius in (radius - thickness)..=radius {
        let mut x = 0;
        let mut y = layer_radius;
        let pow_layer_r = f64::from(layer_radius) * f64::from(layer_radius);
        let mut prev_opacity = 0.0f64;
        if layer_radius == radius - thickness {
            // inner edge: solid toward the stroke, blend fading inward
            while x < y {
                let height = (pow_layer_r - f64::from(x) * f64::from(x)).sqrt();
                let opacity = 255.0 * (height.ceil() - height);
                if opacity < prev_opacity {
                    y -= 1;
                }
                prev_opacity = opacity;
                octant_pixels(buf, clip, x0, y0, color, x, y, 255.0, quadrants, area);
                octant_pixels(buf, clip, x0, y0, color, x, y - 1, opacity, quadrants, area);
                x += 1;
            }
        } else if layer_radius == radius {
            // outer edge: blend fading outward, solid toward the stroke
            while x < y {
                let height = (pow_layer_r - f64::from(x) * f64::from(x)).sqrt();
                let opacity = 255.0 * (height.ceil() - height);
                if opacity < prev_opacity {
                    y -= 1;
                }
                prev_opacity = opacity;
                octant_pixels(buf, clip, x0, y0, color, x, y, 255.0 - opacity, quadrants, area);
                octant_pixels(buf, clip, x0, y0, color, x, y - 1, 255.0, quadrants, area);
                x += 1;
            }
        } else {
            while x < y {
                let height = (pow_layer_r - f64::from(x) * f64::from(x)).sqrt();
                let opacity = 255.0 * (height.ceil() - height);
                if opacity < prev_opacity {
                    y -= 1;
                }
                prev_opacity = opacity;
                octant_pixels(buf, clip, x0, y0, color, x, y, 255.0, quadrants, area);
                octant_pixels(buf, clip, x0, y0, color, x, y - 1, 255.0, quadrants, area);
                x += 1;
            }
        }
    }
}

/// Thin antialiased circle outline
fn wu_circle_thin(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x0: i32,
    y0: i32,
    radius: i32,
    color: u32,
    quadrants: Quadrants,
    area: &mut DrawnArea,
) {
    let mut x = 0;
    let mut y = radius;
    let pow_r = f64::from(radius) * f64::from(radius);
    let mut prev_opacity = 0.0f64;
    while x < y {
        let height = (pow_r - f64::from(x) * f64::from(x)).sqrt();
        let opacity = 255.0 * (height.ceil() - height);
        if opacity < prev_opacity {
            y -= 1;
        }
        prev_opacity = opacity;
        octant_pixels(buf, clip, x0, y0, color, x, y, 255.0 - opacity, quadrants, area);
        octant_pixels(buf, clip, x0, y0, color, x, y - 1, opacity, quadrants, area);
        x += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PixelFormat;
    use crate::pixel::read_pixel;

    #[test]
    fn tiny_radius_rejected() {
        let mut b = PixelBuffer::new(8, 8, PixelFormat::rgba8888());
        let clip = b.bounds();
        let r = aacircle(&mut b, &clip, 1, (4, 4), 0, 1, Quadrants::none());
        assert_eq!(r, Rect::empty_at(4, 4));
        assert!(b.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn filled_center_is_solid() {
        let mut b = PixelBuffer::new(24, 24, PixelFormat::rgba8888());
        let clip = b.bounds();
        aacircle(&mut b, &clip, 0xffff_ffff, (12, 12), 6, 0, Quadrants::none());
        assert_eq!(read_pixel(&b, 12, 12), 0xffff_ffff);
        assert_eq!(read_pixel(&b, 12, 8), 0xffff_ffff);
        // far corner untouched
        assert_eq!(read_pixel(&b, 0, 0), 0);
    }

    #[test]
    fn thin_outline_coverage_sums_to_full() {
        let mut b = PixelBuffer::new(24, 24, PixelFormat::rgba8888());
        let clip = b.bounds();
        aacircle(&mut b, &clip, 0xffff_ffff, (10, 10), 8, 1, Quadrants::none());
        let fmt = PixelFormat::rgba8888();
        // a column away from the diagonal crosses the rim in exactly one
        // blended pixel pair above the center
        let mut total = 0u32;
        for y in 0..10 {
            total += u32::from(fmt.decode(read_pixel(&b, 12, y)).r);
        }
        assert!((253..=256).contains(&total), "total {}", total);
    }

    #[test]
    fn outline_is_four_way_symmetric() {
        let mut b = PixelBuffer::new(24, 24, PixelFormat::rgba8888());
        let clip = b.bounds();
        let (x0, y0) = (12, 12);
        aacircle(&mut b, &clip, 0xffff_ffff, (x0, y0), 7, 1, Quadrants::none());
        for y in 0..24 {
            for x in 0..24 {
                let v = read_pixel(&b, x, y);
                assert_eq!(v, read_pixel(&b, 2 * x0 - x, y), "x mirror at ({},{})", x, y);
                assert_eq!(v, read_pixel(&b, x, 2 * y0 - y), "y mirror at ({},{})", x, y);
            }
        }
    }

    #[test]
    fn quadrant_selection_limits_output() {
        let mut b = PixelBuffer::new(24, 24, PixelFormat::rgba8888());
        let clip = b.bounds();
        let q = Quadrants { bottom_left: true, ..Quadrants::none() };
        aacircle(&mut b, &clip, 0xffff_ffff, (12, 12), 7, 1, q);
        for y in 0..24 {
            for x in 0..24 {
                if read_pixel(&b, x, y) != 0 {
                    assert!(x <= 12 && y >= 12, "pixel ({},{}) outside bottom left", x, y);
                }
            }
        }
    }
}
