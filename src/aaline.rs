//! Antialiased line rasterizer
//!
//! Xiaolin Wu style line drawing. The segment is normalized into a frame
//! where it always runs shallow and left to right (coordinates swapped when
//! steep, endpoints swapped when backwards), then every column blends two
//! vertically adjacent pixels by the fractional intersection of the true
//! line. The wide variant draws a solid perpendicular span per column and
//! blends only the two outer edge pixels.

use std::mem;

use log::trace;

use crate::bbox::DrawnArea;
use crate::buffer::PixelBuffer;
use crate::clip::{ClipRect, Rect};
use crate::error::Error;
use crate::pixel::{antialiased_color, fill_hspan_tracked, fill_vspan_tracked, set_pixel_tracked};

/// Draw an antialiased line segment of the given stroke width
///
/// Endpoints may lie between pixels; widths below 1 draw nothing.
pub fn aaline(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    start: (f32, f32),
    end: (f32, f32),
    width: i32,
) -> Rect {
    let anchor = (start.0 as i32, start.1 as i32);
    if width < 1 {
        return Rect::empty_at(anchor.0, anchor.1);
    }
    let clip = clip.intersect(&buf.bounds());
    let mut area = DrawnArea::new();
    if width > 1 {
        aaline_width(buf, &clip, color, start.0, start.1, end.0, end.1, width, &mut area);
    } else {
        aaline_thin(
            buf, &clip, color, start.0, start.1, end.0, end.1, &mut area, false, false, false,
        );
    }
    area.to_rect().unwrap_or_else(|| Rect::empty_at(anchor.0, anchor.1))
}

/// Draw connected antialiased segments of width one through `points`
///
/// Consecutive segments compare their steepness classification: when it flips
/// at a joint, one extra blended pixel is emitted there so the polyline shows
/// no notch. Endpoint pixel pairs are suppressed at shared points that sit
/// off the integer grid, where the neighboring segment provides the coverage.
pub fn aalines(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    closed: bool,
    points: &[(f32, f32)],
) -> Result<Rect, Error> {
    if points.len() < 2 {
        return Err(Error::TooFewPoints { expected: 2, found: points.len() });
    }
    let anchor = (points[0].0 as i32, points[0].1 as i32);
    trace!("aalines: {} points, closed {}", points.len(), closed);
    let clip = clip.intersect(&buf.bounds());
    let mut area = DrawnArea::new();
    let n = points.len();

    if n == 2 {
        let (a, b) = (points[0], points[1]);
        aaline_thin(buf, &clip, color, a.0, a.1, b.0, b.1, &mut area, false, false, false);
        return Ok(area.to_rect().unwrap_or_else(|| Rect::empty_at(anchor.0, anchor.1)));
    }

    let steep = |a: (f32, f32), b: (f32, f32)| (b.0 - a.0).abs() < (b.1 - a.1).abs();
    let on_grid = |p: (f32, f32)| p.0.round() == p.0 && p.1.round() == p.1;

    // First segment. Its joint compares against the second segment, with the
    // y extent measured from the polyline start.
    let (mut prev_a, mut prev_b) = (points[0], points[1]);
    let steep_prev = steep(prev_a, prev_b);
    let steep_curr = (points[2].0 - points[1].0).abs() < (points[2].1 - points[0].1).abs();
    let extra_px = steep_prev && !steep_curr;
    let disable = !on_grid(points[1]);
    let first_disable = if closed { disable } else { false };
    aaline_thin(
        buf, &clip, color, prev_a.0, prev_a.1, prev_b.0, prev_b.1, &mut area, first_disable,
        disable, extra_px,
    );

    for i in 2..n - 1 {
        let a = points[i - 1];
        let b = points[i];
        let extra_px = steep(prev_a, prev_b) != steep(a, b);
        let disable = !on_grid(b);
        prev_a = a;
        prev_b = b;
        aaline_thin(buf, &clip, color, a.0, a.1, b.0, b.1, &mut area, disable, disable, extra_px);
    }

    // Last segment.
    let a = points[n - 2];
    let b = points[n - 1];
    let extra_px = steep(prev_a, prev_b) != steep(a, b);
    let disable = !on_grid(b);
    prev_a = a;
    prev_b = b;
    let second_disable = if closed { disable } else { false };
    aaline_thin(
        buf, &clip, color, a.0, a.1, b.0, b.1, &mut area, disable, second_disable, extra_px,
    );

    if closed {
        let a = points[n - 1];
        let b = points[0];
        let extra_px = steep(prev_a, prev_b) != steep(a, b);
        let disable = !on_grid(b);
        aaline_thin(buf, &clip, color, a.0, a.1, b.0, b.1, &mut area, disable, disable, extra_px);
    }

    Ok(area.to_rect().unwrap_or_else(|| Rect::empty_at(anchor.0, anchor.1)))
}

/// Antialiased line of width one
///
/// `disable_first_endpoint`/`disable_second_endpoint` skip the blended
/// endpoint pixel pairs; `extra_pixel` forces one additional blended pixel at
/// a joint where consecutive polyline segments change steepness.
#[allow(clippy::too_many_arguments)]
pub(crate) fn aaline_thin(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    mut from_x: f32,
    mut from_y: f32,
    mut to_x: f32,
    mut to_y: f32,
    area: &mut DrawnArea,
    disable_first_endpoint: bool,
    disable_second_endpoint: bool,
    extra_pixel: bool,
) {
    let mut dx = to_x - from_x;
    let mut dy = to_y - from_y;

    // A line with length 0 is drawn as a single pixel at full brightness.
    if dx.abs() < 0.0001 && dy.abs() < 0.0001 {
        let px = (from_x + 0.5).floor() as i32;
        let py = (from_y + 0.5).floor() as i32;
        let c = antialiased_color(buf, clip, px, py, color, 1.0);
        set_pixel_tracked(buf, clip, px, py, c, area);
        return;
    }

    // Pixels at the border of the clipping area still receive coverage from
    // a line crossing it, so clip one pixel wider in all four directions.
    let mut clip_left = clip.x as f32 - 1.0;
    let mut clip_right = clip_left + clip.w as f32 + 1.0;
    let mut clip_top = clip.y as f32 - 1.0;
    let mut clip_bottom = clip_top + clip.h as f32 + 1.0;

    let steep = dx.abs() < dy.abs();
    if steep {
        mem::swap(&mut from_x, &mut from_y);
        mem::swap(&mut to_x, &mut to_y);
        mem::swap(&mut dx, &mut dy);
        mem::swap(&mut clip_left, &mut clip_top);
        mem::swap(&mut clip_right, &mut clip_bottom);
    }
    if dx < 0.0 {
        mem::swap(&mut from_x, &mut to_x);
        mem::swap(&mut from_y, &mut to_y);
        dx = -dx;
        dy = -dy;
    }

    if to_x <= clip_left || from_x >= clip_right {
        return;
    }

    // dx cannot be zero here: a zero dx either meant a single point (handled
    // above) or was swapped with a non-zero dy.
    let gradient = dy / dx;

    if from_x < clip_left {
        from_y += gradient * (clip_left - from_x);
        from_x = clip_left;
    }
    if to_x > clip_right {
        to_y += gradient * (clip_right - to_x);
        to_x = clip_right;
    }

    if gradient > 0.0 {
        // from_ is the topmost endpoint
        if to_y <= clip_top || from_y >= clip_bottom {
            return;
        }
        if from_y < clip_top {
            from_x += (clip_top - from_y) / gradient;
            from_y = clip_top;
        }
        if to_y > clip_bottom {
            to_x += (clip_bottom - to_y) / gradient;
            to_y = clip_bottom;
        }
    } else {
        // to_ is the topmost endpoint
        if from_y <= clip_top || to_y >= clip_bottom {
            return;
        }
        if to_y < clip_top {
            to_x += (clip_top - to_y) / gradient;
            to_y = clip_top;
        }
        if from_y > clip_bottom {
            from_x += (clip_bottom - from_y) / gradient;
            from_y = clip_bottom;
        }
    }

    // Shifting everything one pixel down keeps y non-negative, so truncation
    // rounds down like floor(); the pixels are then drawn one row higher.
    from_y += 1.0;
    to_y += 1.0;

    let mut x_pixel_start = from_x as i32;
    let mut intersect_y = from_y + gradient * (x_pixel_start as f32 - from_x);

    // First endpoint. Endpoints are a pixel wide and tall themselves; a joint
    // of two polyline segments may request the extra pixel even when the
    // endpoint pair is disabled.
    if !disable_first_endpoint || extra_pixel {
        let y_endpoint = intersect_y;
        if to_x > clip_left + 1.0 {
            let x_gap = 1.0 + x_pixel_start as f32 - from_x;
            let mut brightness = y_endpoint - y_endpoint.trunc();
            let (mut x, mut y) = if steep {
                (y_endpoint as i32, x_pixel_start)
            } else {
                (x_pixel_start, y_endpoint as i32)
            };
            if (y_endpoint as i32 as f32) < y_endpoint {
                let c = antialiased_color(buf, clip, x, y, color, brightness * x_gap);
                set_pixel_tracked(buf, clip, x, y, c, area);
            }
            if steep {
                x -= 1;
            } else {
                y -= 1;
            }
            brightness = 1.0 - brightness;
            let c = antialiased_color(buf, clip, x, y, color, brightness * x_gap);
            set_pixel_tracked(buf, clip, x, y, c, area);
            intersect_y += gradient;
            x_pixel_start += 1;
        }
    }
    if disable_first_endpoint {
        // Make sure the main loop skips the first endpoint column.
        x_pixel_start = from_x.ceil() as i32;
        intersect_y = from_y + gradient * (x_pixel_start as f32 - from_x);
    }

    // Second endpoint.
    let x_pixel_end = to_x.ceil() as i32;
    if (!disable_second_endpoint || extra_pixel) && from_x < clip_right - 1.0 {
        let y_endpoint = to_y + gradient * (x_pixel_end as f32 - to_x);
        let x_gap = 1.0 - x_pixel_end as f32 + to_x;
        let mut brightness = y_endpoint - y_endpoint.trunc();
        let (mut x, mut y) = if steep {
            (y_endpoint as i32, x_pixel_end)
        } else {
            (x_pixel_end, y_endpoint as i32)
        };
        if (y_endpoint as i32 as f32) < y_endpoint {
            let c = antialiased_color(buf, clip, x, y, color, brightness * x_gap);
            set_pixel_tracked(buf, clip, x, y, c, area);
        }
        if steep {
            x -= 1;
        } else {
            y -= 1;
        }
        brightness = 1.0 - brightness;
        let c = antialiased_color(buf, clip, x, y, color, brightness * x_gap);
        set_pixel_tracked(buf, clip, x, y, c, area);
    }

    // Main loop: two candidate pixels per column, blended by the fractional
    // intersection of the true line.
    for x in x_pixel_start..x_pixel_end {
        let y = intersect_y as i32;
        let mut brightness = 1.0 - intersect_y + y as f32;
        if steep {
            let c = antialiased_color(buf, clip, y - 1, x, color, brightness);
            set_pixel_tracked(buf, clip, y - 1, x, c, area);
            if (y as f32) < intersect_y {
                brightness = 1.0 - brightness;
                let c = antialiased_color(buf, clip, y, x, color, brightness);
                set_pixel_tracked(buf, clip, y, x, c, area);
            }
        } else {
            let c = antialiased_color(buf, clip, x, y - 1, color, brightness);
            set_pixel_tracked(buf, clip, x, y - 1, c, area);
            if (y as f32) < intersect_y {
                brightness = 1.0 - brightness;
                let c = antialiased_color(buf, clip, x, y, color, brightness);
                set_pixel_tracked(buf, clip, x, y, c, area);
            }
        }
        intersect_y += gradient;
    }
}

/// Antialiased line of width greater than one
///
/// Same normalized frame as the thin variant; every column becomes a solid
/// perpendicular span whose two outer edge pixels carry the blend.
#[allow(clippy::too_many_arguments)]
pub(crate) fn aaline_width(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    mut from_x: f32,
    mut from_y: f32,
    mut to_x: f32,
    mut to_y: f32,
    width: i32,
    area: &mut DrawnArea,
) {
    let extra_width = 1 - (width % 2);
    let width = width / 2;

    let mut dx = to_x - from_x;
    let mut dy = to_y - from_y;
    let steep = dx.abs() < dy.abs();

    // A line with length 0 is drawn as a full-width point.
    if dx.abs() < 0.0001 && dy.abs() < 0.0001 {
        let x = (from_x + 0.5).floor() as i32;
        let y = (from_y + 0.5).floor() as i32;
        let c = antialiased_color(buf, clip, x, y, color, 1.0);
        set_pixel_tracked(buf, clip, x, y, c, area);
        if dx != 0.0 && dy != 0.0 {
            if steep {
                let start = x - width + extra_width;
                let end = x + width - 1;
                fill_hspan_tracked(buf, clip, color, start, y, end, area);
            } else {
                let start = y - width + extra_width;
                let end = y + width - 1;
                fill_vspan_tracked(buf, clip, color, x, start, end, area);
            }
        }
        return;
    }

    // Clip one pixel wider in all four directions, plus the stroke width.
    let mut clip_left = clip.x as f32 - 1.0;
    let mut clip_right = clip_left + clip.w as f32 + 1.0;
    let mut clip_top = clip.y as f32 - 1.0;
    let mut clip_bottom = clip_top + clip.h as f32 + 1.0;

    if steep {
        mem::swap(&mut from_x, &mut from_y);
        mem::swap(&mut to_x, &mut to_y);
        mem::swap(&mut dx, &mut dy);
        mem::swap(&mut clip_left, &mut clip_top);
        mem::swap(&mut clip_right, &mut clip_bottom);
    }
    if dx < 0.0 {
        mem::swap(&mut from_x, &mut to_x);
        mem::swap(&mut from_y, &mut to_y);
        dx = -dx;
        dy = -dy;
    }

    if to_x <= clip_left || from_x >= clip_right {
        // The line is completely to the side of the surface
        return;
    }

    let gradient = dy / dx;

    // No need to waste time on columns not on the surface.
    if from_x < clip_left + 1.0 {
        from_y += gradient * (clip_left + 1.0 - from_x);
        from_x = clip_left + 1.0;
    }
    if to_x > clip_right - 1.0 {
        to_y += gradient * (clip_right - 1.0 - to_x);
        to_x = clip_right - 1.0;
    }

    from_y += 1.0;
    to_y += 1.0;

    let mut x_pixel_start = from_x as i32;
    let mut intersect_y = from_y + gradient * (x_pixel_start as f32 - from_x);

    // First endpoint.
    if to_x > clip_left + 1.0 {
        let y_endpoint = intersect_y;
        let mut brightness = y_endpoint - y_endpoint.trunc();
        let (x, y) = if steep {
            (y_endpoint as i32, x_pixel_start)
        } else {
            (x_pixel_start, y_endpoint as i32)
        };
        if (y_endpoint as i32 as f32) < y_endpoint {
            if steep {
                let c = antialiased_color(buf, clip, x + width, y, color, brightness);
                set_pixel_tracked(buf, clip, x + width, y, c, area);
            } else {
                let c = antialiased_color(buf, clip, x, y + width, color, brightness);
                set_pixel_tracked(buf, clip, x, y + width, c, area);
            }
        }
        brightness = 1.0 - brightness;
        if steep {
            let c = antialiased_color(buf, clip, x - width, y, color, brightness);
            set_pixel_tracked(buf, clip, x - width + extra_width - 1, y, c, area);
            let start = x - width + extra_width;
            let end = x + width - 1;
            fill_hspan_tracked(buf, clip, color, start, y, end, area);
        } else {
            let c = antialiased_color(buf, clip, x, y - width + extra_width - 1, color, brightness);
            set_pixel_tracked(buf, clip, x, y - width + extra_width - 1, c, area);
            let start = y - width + extra_width;
            let end = y + width - 1;
            fill_vspan_tracked(buf, clip, color, x, start, end, area);
        }
        intersect_y += gradient;
        x_pixel_start += 1;
    }

    // Second endpoint.
    let x_pixel_end = to_x.ceil() as i32;
    if from_x < clip_right - 1.0 {
        let y_endpoint = to_y + gradient * (x_pixel_end as f32 - to_x);
        let mut brightness = y_endpoint - y_endpoint.trunc();
        let (x, y) = if steep {
            (y_endpoint as i32, x_pixel_end)
        } else {
            (x_pixel_end, y_endpoint as i32)
        };
        if (y_endpoint as i32 as f32) < y_endpoint {
            if steep {
                let c = antialiased_color(buf, clip, x + width, y, color, brightness);
                set_pixel_tracked(buf, clip, x + width, y, c, area);
            } else {
                let c = antialiased_color(buf, clip, x, y + width, color, brightness);
                set_pixel_tracked(buf, clip, x, y + width, c, area);
            }
        }
        brightness = 1.0 - brightness;
        if steep {
            let c = antialiased_color(buf, clip, x - width + extra_width - 1, y, color, brightness);
            set_pixel_tracked(buf, clip, x - width + extra_width - 1, y, c, area);
            let start = x - width;
            let end = x + width - 1;
            fill_hspan_tracked(buf, clip, color, start, y, end, area);
        } else {
            let c = antialiased_color(buf, clip, x, y - width + extra_width - 1, color, brightness);
            set_pixel_tracked(buf, clip, x, y - width + extra_width - 1, c, area);
            let start = y - width + extra_width;
            let end = y + width - 1;
            fill_vspan_tracked(buf, clip, color, x, start, end, area);
        }
    }

    // Main loop: solid span per column, blended pixel on each outer edge.
    for x in x_pixel_start..x_pixel_end {
        let y = intersect_y as i32;
        let mut brightness = 1.0 - intersect_y + y as f32;
        if steep {
            let c = antialiased_color(buf, clip, y - width + extra_width - 1, x, color, brightness);
            set_pixel_tracked(buf, clip, y - width + extra_width - 1, x, c, area);
            if (y as f32) < intersect_y {
                brightness = 1.0 - brightness;
                let c = antialiased_color(buf, clip, y + width, x, color, brightness);
                set_pixel_tracked(buf, clip, y + width, x, c, area);
            }
            let start = y - width + extra_width;
            let end = y + width - 1;
            fill_hspan_tracked(buf, clip, color, start, x, end, area);
        } else {
            let c = antialiased_color(buf, clip, x, y - width + extra_width - 1, color, brightness);
            set_pixel_tracked(buf, clip, x, y - width + extra_width - 1, c, area);
            if (y as f32) < intersect_y {
                brightness = 1.0 - brightness;
                let c = antialiased_color(buf, clip, x, y + width, color, brightness);
                set_pixel_tracked(buf, clip, x, y + width, c, area);
            }
            let start = y - width + extra_width;
            let end = y + width - 1;
            fill_vspan_tracked(buf, clip, color, x, start, end, area);
        }
        intersect_y += gradient;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PixelFormat;
    use crate::pixel::read_pixel;

    fn buf() -> PixelBuffer {
        PixelBuffer::new(16, 16, PixelFormat::rgba8888())
    }

    #[test]
    fn zero_length_draws_single_full_pixel() {
        let mut b = buf();
        let clip = b.bounds();
        let r = aaline(&mut b, &clip, 0xff00_00ff, (5.0, 5.0), (5.0, 5.0), 1);
        assert_eq!(r, Rect::new(5, 5, 1, 1));
        assert_eq!(read_pixel(&b, 5, 5), 0xff00_00ff);
    }

    #[test]
    fn horizontal_on_grid_is_solid() {
        let mut b = buf();
        let clip = b.bounds();
        aaline(&mut b, &clip, 0xffff_ffff, (2.0, 4.0), (9.0, 4.0), 1);
        for x in 2..=9 {
            assert_eq!(read_pixel(&b, x, 4), 0xffff_ffff, "x {}", x);
        }
    }

    #[test]
    fn pair_coverage_sums_to_full() {
        let mut b = buf();
        let clip = b.bounds();
        // a gentle slope crossing pixel rows at fractional heights
        aaline(&mut b, &clip, 0xffff_ffff, (1.0, 2.25), (12.0, 5.75), 1);
        let fmt = PixelFormat::rgba8888();
        for x in 3..11 {
            let mut total = 0u32;
            for y in 0..16 {
                total += u32::from(fmt.decode(read_pixel(&b, x, y)).r);
            }
            // the two blended pixels of each column sum to one full intensity
            assert!((254..=256).contains(&total), "x {} total {}", x, total);
        }
    }

    #[test]
    fn width_below_one_draws_nothing() {
        let mut b = buf();
        let clip = b.bounds();
        let r = aaline(&mut b, &clip, 1, (2.0, 2.0), (9.0, 9.0), 0);
        assert_eq!(r, Rect::empty_at(2, 2));
        assert!(b.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn aalines_requires_two_points() {
        let mut b = buf();
        let clip = b.bounds();
        let err = aalines(&mut b, &clip, 1, false, &[(0.0, 0.0)]);
        assert_eq!(err.unwrap_err(), Error::TooFewPoints { expected: 2, found: 1 });
    }
}
