//! Polygon and triangle filler
//!
//! Classic scanline fill: intersect every non-horizontal edge with each
//! raster line, sort the intersections, and fill between pairs. Successive
//! intersections alternate floor and ceil rounding so adjacent polygons
//! tile without gaps. Horizontal edges are structurally excluded by the
//! scan test, so lower-boundary horizontals get a corrective pass at the
//! end. Three-point polygons take a direct interpolating fast path.

use std::mem;

use crate::bbox::DrawnArea;
use crate::buffer::PixelBuffer;
use crate::clip::{ClipRect, Rect};
use crate::error::Error;
use crate::line::lines;
use crate::pixel::fill_hspan_tracked;

/// Draw a polygon through `points`, filled or stroked
///
/// Needs at least three points when filling (`width` 0). A positive width
/// strokes the outline as a closed polyline of that width instead.
pub fn polygon(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    color: u32,
    points: &[(i32, i32)],
    width: i32,
) -> Result<Rect, Error> {
    if width > 0 {
        return lines(buf, clip, color, true, points, width);
    }
    if points.len() < 3 {
        return Err(Error::TooFewPoints { expected: 3, found: points.len() });
    }
    let (ax, ay) = points[0];
    let clip = clip.intersect(&buf.bounds());
    let mut area = DrawnArea::new();
    if points.len() == 3 {
        fill_triangle(buf, &clip, points, color, &mut area);
    } else {
        fill_polygon(buf, &clip, points, color, &mut area);
    }
    Ok(area.to_rect().unwrap_or_else(|| Rect::empty_at(ax, ay)))
}

/// Scanline fill of an arbitrary polygon
pub(crate) fn fill_polygon(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    points: &[(i32, i32)],
    color: u32,
    area: &mut DrawnArea,
) {
    let n = points.len();
    let mut x_intersect: Vec<i32> = Vec::with_capacity(n);

    let miny = points.iter().map(|p| p.1).min().unwrap();
    let maxy = points.iter().map(|p| p.1).max().unwrap();

    if miny == maxy {
        // Special case: polygon only 1 pixel high.
        let minx = points.iter().map(|p| p.0).min().unwrap();
        let maxx = points.iter().map(|p| p.0).max().unwrap();
        fill_hspan_tracked(buf, clip, color, minx, miny, maxx, area);
        return;
    }

    for y in miny..=maxy {
        x_intersect.clear();
        for i in 0..n {
            let i_previous = if i > 0 { i - 1 } else { n - 1 };

            let (mut x1, mut y1) = points[i_previous];
            let (mut x2, mut y2) = points[i];
            if y1 == y2 {
                // handled by the horizontal-edge pass below
                continue;
            }
            if y1 > y2 {
                mem::swap(&mut x1, &mut x2);
                mem::swap(&mut y1, &mut y2);
            }
            // count the edge where y crosses it (excluding the lower end),
            // or on the very last line
            if (y >= y1 && y < y2) || (y == maxy && y2 == maxy) {
                let intersect = ((y - y1) * (x2 - x1)) as f32 / (y2 - y1) as f32;
                let intersect = if x_intersect.len() % 2 == 0 {
                    intersect.floor()
                } else {
                    intersect.ceil()
                };
                x_intersect.push(intersect as i32 + x1);
            }
        }
        x_intersect.sort_unstable();
        for pair in x_intersect.chunks_exact(2) {
            fill_hspan_tracked(buf, clip, color, pair[0], y, pair[1], area);
        }
    }

    // A horizontal edge between two vertices at the same height is a lower
    // border of the polygon when the scan above left it uncolored; fill
    // those explicitly.
    for i in 0..n {
        let i_previous = if i > 0 { i - 1 } else { n - 1 };
        let y = points[i].1;
        if miny < y && points[i_previous].1 == y && y < maxy {
            fill_hspan_tracked(buf, clip, color, points[i].0, y, points[i_previous].0, area);
        }
    }
}

/// Triangle fast path: two interpolants along the y-sorted edges
pub(crate) fn fill_triangle(
    buf: &mut PixelBuffer,
    clip: &ClipRect,
    points: &[(i32, i32)],
    color: u32,
    area: &mut DrawnArea,
) {
    let mut p0 = points[0];
    let mut p1 = points[1];
    let mut p2 = points[2];

    if p1.1 < p0.1 {
        mem::swap(&mut p1, &mut p0);
    }
    if p2.1 < p1.1 {
        mem::swap(&mut p1, &mut p2);
        if p1.1 < p0.1 {
            mem::swap(&mut p1, &mut p0);
        }
    }
    // collinear flat case: reorder so the interpolants span a width
    if p0.1 == p1.1 && p1.1 == p2.1 && p0.0 == p1.0 && p1.0 != p2.0 {
        mem::swap(&mut p1, &mut p2);
    }

    // the epsilon keeps a flat edge from dividing by zero
    let d1 = ((p2.0 - p0.0) as f64 / ((p2.1 - p0.1) as f64 + 1e-17)) as f32;
    let d2 = ((p1.0 - p0.0) as f64 / ((p1.1 - p0.1) as f64 + 1e-17)) as f32;
    let d3 = ((p2.0 - p1.0) as f64 / ((p2.1 - p1.1) as f64 + 1e-17)) as f32;
    for y in p0.1..=p2.1 {
        let x1 = p0.0 + ((y - p0.1) as f32 * d1) as i32;
        let x2 = if y < p1.1 {
            p0.0 + ((y - p0.1) as f32 * d2) as i32
        } else {
            p1.0 + ((y - p1.1) as f32 * d3) as i32
        };
        fill_hspan_tracked(buf, clip, color, x1, y, x2, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PixelFormat;
    use crate::pixel::read_pixel;

    fn buf() -> PixelBuffer {
        PixelBuffer::new(12, 12, PixelFormat::rgba8888())
    }

    #[test]
    fn requires_three_points_when_filled() {
        let mut b = buf();
        let clip = b.bounds();
        let err = polygon(&mut b, &clip, 1, &[(0, 0), (4, 4)], 0);
        assert_eq!(err.unwrap_err(), Error::TooFewPoints { expected: 3, found: 2 });
    }

    #[test]
    fn square_fills_solid() {
        let mut b = buf();
        let clip = b.bounds();
        let r = polygon(&mut b, &clip, 1, &[(0, 0), (4, 0), (4, 4), (0, 4)], 0).unwrap();
        assert_eq!(r, Rect::new(0, 0, 5, 5));
        for y in 0..=4 {
            for x in 0..=4 {
                assert_eq!(read_pixel(&b, x, y), 1, "hole at ({},{})", x, y);
            }
        }
    }

    #[test]
    fn one_pixel_tall_polygon_is_a_span() {
        let mut b = buf();
        let clip = b.bounds();
        let r = polygon(&mut b, &clip, 1, &[(2, 3), (8, 3), (5, 3)], 0).unwrap();
        assert_eq!(r, Rect::new(2, 3, 7, 1));
    }

    #[test]
    fn triangle_covers_its_vertices() {
        let mut b = buf();
        let clip = b.bounds();
        polygon(&mut b, &clip, 1, &[(1, 1), (9, 1), (1, 9)], 0).unwrap();
        assert_eq!(read_pixel(&b, 1, 1), 1);
        assert_eq!(read_pixel(&b, 9, 1), 1);
        assert_eq!(read_pixel(&b, 1, 9), 1);
        // interior
        assert_eq!(read_pixel(&b, 3, 3), 1);
        // beyond the hypotenuse
        assert_eq!(read_pixel(&b, 8, 8), 0);
    }

    #[test]
    fn convex_fill_has_no_holes() {
        let mut b = buf();
        let clip = b.bounds();
        // hexagon
        let pts = [(5, 0), (9, 3), (9, 7), (5, 10), (1, 7), (1, 3)];
        polygon(&mut b, &clip, 1, &pts, 0).unwrap();
        for y in 0..=10 {
            // every row between the extremes is a single solid run
            let mut runs = 0;
            let mut inside = false;
            for x in 0..12 {
                let set = read_pixel(&b, x, y) != 0;
                if set && !inside {
                    runs += 1;
                }
                inside = set;
            }
            assert!(runs <= 1, "row {} split into {} runs", y, runs);
        }
    }

    #[test]
    fn positive_width_strokes_outline() {
        let mut b = buf();
        let clip = b.bounds();
        polygon(&mut b, &clip, 1, &[(1, 1), (9, 1), (9, 9), (1, 9)], 0).unwrap();
        let mut stroked = buf();
        polygon(&mut stroked, &clip, 1, &[(1, 1), (9, 1), (9, 9), (1, 9)], 1).unwrap();
        // stroked interior stays empty, filled interior does not
        assert_eq!(read_pixel(&stroked, 5, 5), 0);
        assert_eq!(read_pixel(&b, 5, 5), 1);
    }
}
