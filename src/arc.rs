//! Arc rasterizer
//!
//! An arc is the set of integer points inside an annulus (outer and inner
//! elliptical radii) and inside an angular sector. Sector membership is a
//! dot-product test against the sector's bisecting unit vector, so no
//! per-pixel trigonometry is needed. Before scanning, the bounding box is
//! tightened edge by edge until every remaining row and column contains at
//! least one arc pixel; the main loop then writes without clip tests.

use std::f64::consts::PI;

use log::trace;

use crate::bbox::DrawnArea;
use crate::buffer::PixelBuffer;
use crate::clip::{ClipRect, Rect};
use crate::pixel::set_pixel_raw;

/// Draw an elliptical arc inside `rect` between two angles, in radians
///
/// Angles grow counterclockwise with 0 pointing right; a stop angle behind
/// the start wraps once around. Equal angles or a non-positive width draw
/// nothing.
pub fn arc(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    rect: Rect,
    start_angle: f64,
    stop_angle: f64,
    width: i32,
) -> Rect {
    if width < 0 {
        return Rect::empty_at(rect.x, rect.y);
    }
    let mut width = width;
    if width > rect.w / 2 || width > rect.h / 2 {
        width = (rect.w / 2).max(rect.h / 2);
    }
    let mut stop_angle = stop_angle;
    if stop_angle < start_angle {
        stop_angle += 2.0 * PI;
    }
    width = width.min(rect.w.min(rect.h) / 2);

    let clip = clip.intersect(&buf.bounds());
    let mut area = DrawnArea::new();
    draw_arc(
        buf,
        &clip,
        rect.x + rect.w / 2,
        rect.y + rect.h / 2,
        rect.w / 2,
        rect.h / 2,
        width,
        start_angle,
        stop_angle,
        color,
        &mut area,
    );
    area.to_rect().unwrap_or_else(|| Rect::empty_at(rect.x, rect.y))
}

/// Annulus-sector membership parameters, center-relative
struct Sector {
    /// Bisector unit vector (y negated: raster y grows downward)
    x_mid: f64,
    y_mid: f64,
    /// Minimum normalized dot product against the bisector
    min_dot: f64,
    inv_sq_r1: f64,
    inv_sq_r2: f64,
    inv_sq_inner_r1: f64,
    inv_sq_inner_r2: f64,
}

impl Sector {
    fn contains(&self, x: i32, y: i32) -> bool {
        let (xf, yf) = (f64::from(x), f64::from(y));
        // outer boundary
        let x_adj = xf * xf * self.inv_sq_r1;
        let y_adj = yf * yf * self.inv_sq_r2;
        if x_adj + y_adj > 1.0 {
            return false;
        }
        // inner boundary
        let x_inner = xf * xf * self.inv_sq_inner_r1;
        let y_inner = yf * yf * self.inv_sq_inner_r2;
        if x_inner + y_inner < 1.0 {
            return false;
        }
        // angular range
        xf * self.x_mid + yf * self.y_mid >= self.min_dot * (xf * xf + yf * yf).sqrt()
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_arc(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    x_center: i32,
    y_center: i32,
    radius1: i32,
    radius2: i32,
    width: i32,
    angle_start: f64,
    angle_stop: f64,
    color: u32,
    area: &mut DrawnArea,
) {
    if width <= 0 {
        return;
    }
    let mut angle_stop = angle_stop;
    if angle_stop < angle_start {
        angle_stop += 2.0 * PI;
    }
    if angle_stop <= angle_start {
        return;
    }

    // The halfway angle is guaranteed to lie inside the sector; points are
    // accepted when their normalized dot product with it stays above the
    // half-span cosine. Sectors of half a turn or more pass every angle.
    let angle_middle = 0.5 * (angle_start + angle_stop);
    let angle_distance = angle_middle - angle_start;
    let x_middle = angle_middle.cos();
    let y_middle = -angle_middle.sin();

    let inner_radius1 = radius1 - width;
    let inner_radius2 = radius2 - width;
    let sector = Sector {
        x_mid: x_middle,
        y_mid: y_middle,
        min_dot: if angle_distance < PI {
            (angle_middle - angle_start).cos()
        } else {
            -1.0
        },
        inv_sq_r1: 1.0 / (f64::from(radius1) * f64::from(radius1)),
        inv_sq_r2: 1.0 / (f64::from(radius2) * f64::from(radius2)),
        inv_sq_inner_r1: 1.0 / (f64::from(inner_radius1) * f64::from(inner_radius1)),
        inv_sq_inner_r2: 1.0 / (f64::from(inner_radius2) * f64::from(inner_radius2)),
    };

    let bounds = arc_bounds(
        clip,
        &sector,
        angle_start,
        angle_stop,
        radius1,
        radius2,
        inner_radius1,
        inner_radius2,
        x_center,
        y_center,
    );
    let (minx, miny, maxx, maxy) = match bounds {
        Some(b) => b,
        None => return,
    };
    if minx >= maxx || miny >= maxy {
        return;
    }
    trace!(
        "arc bounds tightened to ({},{})..({},{}) around ({},{})",
        minx, miny, maxx, maxy, x_center, y_center
    );

    // Scan rows of the annulus once per |y| and mirror into all four
    // quadrants; the tightened bounds are clip-safe, so writes skip the
    // per-pixel clip test.
    let max_required_y = maxy.max(-miny);
    for y in 0..=max_required_y {
        let pos_y = y >= miny && y <= maxy;
        let neg_y = -y >= miny && -y <= maxy;

        let y2 = i64::from(y) * i64::from(y);

        let x_outer = (f64::from(radius1) * (1.0 - y2 as f64 * sector.inv_sq_r2).sqrt()) as i32;
        let mut x_inner = 0;
        if y < inner_radius2 {
            x_inner =
                (f64::from(inner_radius1) * (1.0 - y2 as f64 * sector.inv_sq_inner_r2).sqrt()) as i32;
        }

        let py_offset = y_center + y;
        let ny_offset = y_center - y;
        let y_dot = f64::from(y) * sector.y_mid;

        for x in x_inner..=x_outer {
            let pos_x = x >= minx && x <= maxx;
            let neg_x = -x >= minx && -x <= maxx;
            if !(pos_x || neg_x) {
                continue;
            }

            let px_offset = x_center + x;
            let nx_offset = x_center - x;

            let cmp = sector.min_dot * ((i64::from(x) * i64::from(x) + y2) as f64).sqrt();
            let x_dot = f64::from(x) * sector.x_mid;

            if pos_y && pos_x && (x_dot + y_dot >= cmp) {
                set_pixel_raw(buf, px_offset, py_offset, color);
            }
            if pos_y && neg_x && (-x_dot + y_dot >= cmp) {
                set_pixel_raw(buf, nx_offset, py_offset, color);
            }
            if neg_y && pos_x && (x_dot - y_dot >= cmp) {
                set_pixel_raw(buf, px_offset, ny_offset, color);
            }
            if neg_y && neg_x && (-x_dot - y_dot >= cmp) {
                set_pixel_raw(buf, nx_offset, ny_offset, color);
            }
        }
    }

    area.absorb_span(
        minx + x_center,
        miny + y_center,
        maxx + x_center,
        maxy + y_center,
    );
}

/// Tightened center-relative bounding box of the sector, clamped to the clip
///
/// Starts from the rotated sector corner points at both radii, then shrinks
/// each edge inward one row or column at a time while that edge contains no
/// arc pixel. The edges are tightened strictly in the order miny, maxy,
/// minx, maxx; the result can be a sliver looser than optimal for concave
/// sectors, and existing output depends on that exact order.
#[allow(clippy::too_many_arguments)]
fn arc_bounds(
    clip: &ClipRect,
    sector: &Sector,
    angle_start: f64,
    angle_stop: f64,
    radius1: i32,
    radius2: i32,
    inner_radius1: i32,
    inner_radius2: i32,
    x_center: i32,
    y_center: i32,
) -> Option<(i32, i32, i32, i32)> {
    let x_start = angle_start.cos();
    let y_start = -angle_start.sin();
    let x_stop = angle_stop.cos();
    let y_stop = -angle_stop.sin();

    let x_start_inner = (x_start * f64::from(inner_radius1) + 0.5) as i32;
    let y_start_inner = (y_start * f64::from(inner_radius2) + 0.5) as i32;
    let x_stop_inner = (x_stop * f64::from(inner_radius1) + 0.5) as i32;
    let y_stop_inner = (y_stop * f64::from(inner_radius2) + 0.5) as i32;
    let x_start_outer = (x_start * f64::from(radius1) + 0.5) as i32;
    let y_start_outer = (y_start * f64::from(radius2) + 0.5) as i32;
    let x_stop_outer = (x_stop * f64::from(radius1) + 0.5) as i32;
    let y_stop_outer = (y_stop * f64::from(radius2) + 0.5) as i32;

    // Corner candidates only bound the box when the sector does not cross
    // the axis extreme in that direction; otherwise the full radius stands.
    let mut minx = -radius1;
    if -sector.x_mid < sector.min_dot {
        minx = x_start_inner.min(x_stop_inner).min(x_start_outer.min(x_stop_outer));
    }
    minx = minx.max(clip.x - x_center);

    let mut miny = -radius2;
    if -sector.y_mid < sector.min_dot {
        miny = y_start_inner.min(y_stop_inner).min(y_start_outer.min(y_stop_outer));
    }
    miny = miny.max(clip.y - y_center);

    let mut maxx = radius1;
    if sector.x_mid < sector.min_dot {
        maxx = x_start_inner.max(x_stop_inner).max(x_start_outer.max(x_stop_outer));
    }
    maxx = maxx.min(clip.right() - x_center - 1);

    let mut maxy = radius2;
    if sector.y_mid < sector.min_dot {
        maxy = y_start_inner.max(y_stop_inner).max(y_start_outer.max(y_stop_outer));
    }
    maxy = maxy.min(clip.bottom() - y_center - 1);

    if minx >= maxx || miny >= maxy {
        return None;
    }

    // Shrink the top edge while it holds no arc pixel.
    loop {
        if miny >= maxy {
            return None;
        }
        if (minx..=maxx).any(|x| sector.contains(x, miny)) {
            break;
        }
        miny += 1;
    }
    // Bottom edge.
    loop {
        if maxy <= miny {
            return None;
        }
        if (minx..=maxx).any(|x| sector.contains(x, maxy)) {
            break;
        }
        maxy -= 1;
    }
    // Left edge.
    loop {
        if minx >= maxx {
            return None;
        }
        if (miny..=maxy).any(|y| sector.contains(minx, y)) {
            break;
        }
        minx += 1;
    }
    // Right edge.
    loop {
        if minx >= maxx {
            return None;
        }
        if (miny..=maxy).any(|y| sector.contains(maxx, y)) {
            break;
        }
        maxx -= 1;
    }

    Some((minx, miny, maxx, maxy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PixelFormat;
    use crate::pixel::read_pixel;

    #[test]
    fn equal_angles_draw_nothing() {
        let mut b = PixelBuffer::new(12, 12, PixelFormat::rgba8888());
        let clip = b.bounds();
        let r = arc(&mut b, &clip, 1, Rect::new(1, 1, 10, 10), 1.0, 1.0, 2);
        assert_eq!(r, Rect::empty_at(1, 1));
        assert!(b.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_width_draws_nothing() {
        let mut b = PixelBuffer::new(12, 12, PixelFormat::rgba8888());
        let clip = b.bounds();
        let r = arc(&mut b, &clip, 1, Rect::new(1, 1, 10, 10), 0.0, 1.0, 0);
        assert_eq!(r, Rect::empty_at(1, 1));
    }

    #[test]
    fn upper_half_annulus_stays_above_center() {
        let mut b = PixelBuffer::new(12, 12, PixelFormat::rgba8888());
        let clip = b.bounds();
        let r = arc(&mut b, &clip, 1, Rect::new(1, 1, 10, 10), 0.0, PI, 2);
        assert!(!r.is_empty());
        let cy = 1 + 5;
        for y in 0..12 {
            for x in 0..12 {
                if read_pixel(&b, x, y) != 0 {
                    assert!(y <= cy, "pixel ({},{}) below the center row", x, y);
                }
            }
        }
    }

    #[test]
    fn wrapping_angles_cover_the_gap() {
        let mut b = PixelBuffer::new(20, 20, PixelFormat::rgba8888());
        let clip = b.bounds();
        // from 3/2 pi around through 0 to 1/2 pi: the right half
        let r = arc(&mut b, &clip, 1, Rect::new(2, 2, 16, 16), -PI / 2.0, PI / 2.0, 3);
        assert!(!r.is_empty());
        // rightmost point of the outer ellipse is set
        assert_ne!(read_pixel(&b, 2 + 16 - 1, 10), 0);
        // leftmost point of the full ellipse is not
        assert_eq!(read_pixel(&b, 2, 10), 0);
    }
}
