use pixdraw::pixel::read_pixel;
use pixdraw::{circle, ellipse, line, lines, polygon, rect};
use pixdraw::{ClipRect, CornerRadii, PixelBuffer, PixelFormat, Quadrants, Rect};

const C: u32 = 0x00ff_ffff;

fn buf(w: usize, h: usize) -> PixelBuffer {
    PixelBuffer::new(w, h, PixelFormat::rgba8888())
}

fn drawn_pixels(b: &PixelBuffer) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..b.height() as i32 {
        for x in 0..b.width() as i32 {
            if read_pixel(b, x, y) != 0 {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn t01_horizontal_line_covers_its_row() {
    let mut b = buf(10, 10);
    let clip = b.bounds();
    let r = line(&mut b, &clip, C, (0, 0), (9, 0), 1);
    assert_eq!(r, Rect::new(0, 0, 10, 1));
    let pixels = drawn_pixels(&b);
    assert_eq!(pixels.len(), 10);
    for x in 0..10 {
        assert!(pixels.contains(&(x, 0)));
    }
}

#[test]
fn t02_line_width_one_matches_thin_line() {
    let mut thin = buf(12, 12);
    let mut wide = buf(12, 12);
    let clip = thin.bounds();
    let r1 = line(&mut thin, &clip, C, (1, 2), (10, 7), 1);
    let r2 = line(&mut wide, &clip, C, (1, 2), (10, 7), 1);
    assert_eq!(r1, r2);
    assert_eq!(thin.data(), wide.data());
}

#[test]
fn t03_filled_circle_exact_rows() {
    let mut b = buf(20, 20);
    let clip = b.bounds();
    let r = circle(&mut b, &clip, C, (10, 10), 5, 0, Quadrants::none());
    assert_eq!(r, Rect::new(5, 5, 10, 10));
    // midpoint trace, row by row
    let expect: [(i32, i32, i32); 10] = [
        (5, 8, 11),
        (6, 7, 12),
        (7, 6, 13),
        (8, 5, 14),
        (9, 5, 14),
        (10, 5, 14),
        (11, 5, 14),
        (12, 6, 13),
        (13, 7, 12),
        (14, 8, 11),
    ];
    for &(y, x1, x2) in &expect {
        for x in 0..20 {
            let inside = x >= x1 && x <= x2;
            assert_eq!(read_pixel(&b, x, y) != 0, inside, "row {} col {}", y, x);
        }
    }
}

#[test]
fn t04_polygon_square_fill() {
    let mut b = buf(10, 10);
    let clip = b.bounds();
    let r = polygon(&mut b, &clip, C, &[(0, 0), (4, 0), (4, 4), (0, 4)], 0).unwrap();
    assert_eq!(r, Rect::new(0, 0, 5, 5));
    assert_eq!(drawn_pixels(&b).len(), 25);
}

#[test]
fn t05_ellipse_inscribed_in_rect() {
    let mut b = buf(20, 14);
    let clip = b.bounds();
    let r = ellipse(&mut b, &clip, C, Rect::new(2, 2, 16, 10), 0);
    assert!(!r.is_empty());
    for (x, y) in drawn_pixels(&b) {
        assert!((2..18).contains(&x) && (2..12).contains(&y), "({},{}) outside rect", x, y);
    }
    // axis extremes touch the rect edges
    assert_ne!(read_pixel(&b, 2, 7), 0);
    assert_ne!(read_pixel(&b, 10, 2), 0);
}

#[test]
fn t06_clip_limits_line_and_its_box() {
    let mut b = buf(10, 10);
    let clip = ClipRect::new(0, 0, 5, 10);
    let r = line(&mut b, &clip, C, (0, 3), (9, 3), 1);
    assert_eq!(r, Rect::new(0, 3, 5, 1));
    assert_eq!(read_pixel(&b, 4, 3), C);
    assert_eq!(read_pixel(&b, 5, 3), 0);
}

#[test]
fn t07_empty_clip_draws_nothing() {
    let mut b = buf(10, 10);
    let clip = ClipRect::new(0, 0, 0, 0);
    let r = line(&mut b, &clip, C, (1, 1), (8, 8), 3);
    assert_eq!(r, Rect::empty_at(1, 1));
    let r = circle(&mut b, &clip, C, (5, 5), 3, 0, Quadrants::none());
    assert_eq!(r, Rect::empty_at(5, 5));
    assert!(b.data().iter().all(|&v| v == 0));
}

#[test]
fn t08_lines_box_covers_all_segments() {
    let mut b = buf(16, 16);
    let clip = b.bounds();
    let r = lines(&mut b, &clip, C, false, &[(2, 2), (12, 2), (12, 12)], 1).unwrap();
    assert_eq!(r, Rect::new(2, 2, 11, 11));
}

#[test]
fn t09_thick_line_has_flat_caps() {
    let mut b = buf(12, 12);
    let clip = b.bounds();
    // vertical segment of width 3: spans grow along x
    line(&mut b, &clip, C, (5, 2), (5, 9), 3);
    for y in 2..=9 {
        for x in 4..=6 {
            assert_eq!(read_pixel(&b, x, y), C, "({},{})", x, y);
        }
        assert_eq!(read_pixel(&b, 3, y), 0);
        assert_eq!(read_pixel(&b, 7, y), 0);
    }
}

#[test]
fn t10_rect_stroke_matches_fill_difference() {
    let mut b = buf(16, 16);
    let clip = b.bounds();
    let r = rect(&mut b, &clip, C, Rect::new(3, 3, 9, 9), 1, 0, CornerRadii::none());
    assert_eq!(r, Rect::new(3, 3, 9, 9));
    // border set, interior clear
    for i in 3..12 {
        assert_eq!(read_pixel(&b, i, 3), C);
        assert_eq!(read_pixel(&b, i, 11), C);
        assert_eq!(read_pixel(&b, 3, i), C);
        assert_eq!(read_pixel(&b, 11, i), C);
    }
    assert_eq!(read_pixel(&b, 7, 7), 0);
}

#[test]
fn t11_padded_pitch_renders_like_tight_pitch() {
    let fmt = PixelFormat::rgb888();
    let mut tight = PixelBuffer::new(9, 7, fmt.clone());
    let mut padded = PixelBuffer::from_parts(vec![0; 7 * 40], 9, 7, 40, fmt).unwrap();
    let clip = tight.bounds();
    let r1 = circle(&mut tight, &clip, 0x123456, (4, 3), 3, 1, Quadrants::none());
    let r2 = circle(&mut padded, &clip, 0x123456, (4, 3), 3, 1, Quadrants::none());
    assert_eq!(r1, r2);
    for y in 0..7 {
        for x in 0..9 {
            assert_eq!(read_pixel(&tight, x, y), read_pixel(&padded, x, y), "({},{})", x, y);
        }
    }
}

#[test]
fn t12_negative_rect_sizes_normalize_when_rounded() {
    let mut a = buf(16, 16);
    let mut bb = buf(16, 16);
    let clip = a.bounds();
    let r1 = rect(&mut a, &clip, C, Rect::new(4, 4, 8, 8), 0, 3, CornerRadii::none());
    let r2 = rect(&mut bb, &clip, C, Rect::new(12, 12, -8, -8), 0, 3, CornerRadii::none());
    assert_eq!(r1, r2);
    assert_eq!(a.data(), bb.data());
}

#[test]
fn t13_saving_a_render_to_disk() {
    let mut b = buf(12, 12);
    let clip = b.bounds();
    circle(&mut b, &clip, C, (6, 6), 4, 0, Quadrants::none());
    let path = std::env::temp_dir().join("pixdraw_t13.png");
    pixdraw::ppm::write_file(&b, &path).unwrap();
    let meta = std::fs::metadata(&path).unwrap();
    assert!(meta.len() > 0);
    let _ = std::fs::remove_file(&path);
}
