//! Edge-walking scanline triangle fill

use super::edge::EdgeStepper;
use super::framebuffer::Framebuffer;
use super::math::{ScreenPoint, MAX_COORD};
use super::types::Color;

/// Sort three points by ascending y with pairwise compare-and-swap
///
/// Deterministic, but ties are not kept in input order.
pub fn sort_by_y(mut a: ScreenPoint, mut b: ScreenPoint, mut c: ScreenPoint) -> [ScreenPoint; 3] {
    if b.y < a.y {
        std::mem::swap(&mut a, &mut b);
    }
    if c.y < a.y {
        std::mem::swap(&mut a, &mut c);
    }
    if c.y < b.y {
        std::mem::swap(&mut b, &mut c);
    }
    [a, b, c]
}

/// Walk the rows of a triangle, calling `span(y, left, right)` for each
/// visible row with an inclusive, buffer-clipped x range
///
/// Triangles with a vertex more than `MAX_COORD` pixels from the origin are
/// skipped.
pub fn rasterize_scanline<F>(width: usize, height: usize, points: [ScreenPoint; 3], mut span: F)
where
    F: FnMut(usize, usize, usize),
{
    if width == 0 || height == 0 {
        return;
    }
    if !points.iter().all(ScreenPoint::in_raster_range) {
        log::trace!("skipping triangle beyond +/-{}: {:?}", MAX_COORD, points);
        return;
    }

    let [top, middle, bottom] = sort_by_y(points[0], points[1], points[2]);

    let mut top_middle = EdgeStepper::new(top, middle);
    let mut top_bottom = EdgeStepper::new(top, bottom);
    let mut middle_bottom = EdgeStepper::new(middle, bottom);

    let max_x = width as i32 - 1;

    for y in top.y..=bottom.y {
        if y >= height as i32 {
            break;
        }

        // Steppers advance on every row, including rows above the buffer
        let e1 = if y < middle.y {
            top_middle.next()
        } else {
            middle_bottom.next()
        };
        let e2 = top_bottom.next();

        if y < 0 {
            continue;
        }

        let (lo, hi) = (e1.min(e2), e1.max(e2));
        if hi < 0 || lo > max_x {
            continue;
        }

        let left = lo.clamp(0, max_x) as usize;
        let right = hi.clamp(0, max_x) as usize;
        span(y as usize, left, right);
    }
}

/// Fill a triangle with a flat color, then optionally mark its vertices
pub fn fill_triangle_scanline(
    fb: &mut Framebuffer,
    points: [ScreenPoint; 3],
    color: Color,
    marker: Option<Color>,
) {
    let (width, height) = (fb.width, fb.height);
    rasterize_scanline(width, height, points, |y, left, right| {
        fb.fill_span(y, left, right, color);
    });

    if let Some(marker) = marker {
        for p in points {
            fb.set_pixel_i32(p.x, p.y, marker);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::new(92, 131, 181);
    const FILL: Color = Color::new(200, 180, 40);

    fn spans(width: usize, height: usize, points: [ScreenPoint; 3]) -> Vec<(usize, usize, usize)> {
        let mut rows = Vec::new();
        rasterize_scanline(width, height, points, |y, l, r| rows.push((y, l, r)));
        rows
    }

    /// Filled (non-background) x range of a row, asserting it is contiguous
    fn row_extent(fb: &Framebuffer, y: usize) -> Option<(usize, usize)> {
        let filled: Vec<usize> = (0..fb.width)
            .filter(|&x| fb.get_pixel(x, y) != Some(BG))
            .collect();
        let (&first, &last) = (filled.first()?, filled.last()?);
        assert_eq!(filled.len(), last - first + 1, "gap in row {}", y);
        Some((first, last))
    }

    fn sample_points() -> [ScreenPoint; 3] {
        [ScreenPoint::new(30, 10), ScreenPoint::new(67, 22), ScreenPoint::new(13, 57)]
    }

    #[test]
    fn test_sort_by_y() {
        let a = ScreenPoint::new(0, 9);
        let b = ScreenPoint::new(1, 3);
        let c = ScreenPoint::new(2, 5);
        assert_eq!(sort_by_y(a, b, c), [b, c, a]);
        assert_eq!(sort_by_y(c, a, b), [b, c, a]);

        // Ties resolve deterministically by the swap sequence
        let t1 = ScreenPoint::new(5, 1);
        let t2 = ScreenPoint::new(6, 1);
        let low = ScreenPoint::new(7, 0);
        assert_eq!(sort_by_y(t1, t2, low), [low, t2, t1]);
    }

    #[test]
    fn test_sample_triangle_rows() {
        let rows = spans(320, 180, sample_points());
        assert_eq!(rows.len(), 48);
        assert_eq!(rows.first().map(|r| r.0), Some(10));
        assert_eq!(rows.last().map(|r| r.0), Some(57));

        // Not the single pixel left == right == 30: the top edge is shallow
        // (dx 37, dy 12) and its stepper moves before returning, so the
        // apex row already reaches x = 31. The row still starts at the apex.
        assert_eq!(rows[0], (10, 30, 31));
        // Both bottom edges converge on the bottom vertex
        assert_eq!(rows[47], (57, 13, 13));
    }

    #[test]
    fn test_sample_triangle_fill() {
        let mut fb = Framebuffer::new(320, 180);
        fb.clear(BG);
        fill_triangle_scanline(&mut fb, sample_points(), FILL, Some(Color::RED));

        assert_eq!(row_extent(&fb, 9), None);
        assert_eq!(row_extent(&fb, 58), None);
        assert_eq!(row_extent(&fb, 10).map(|r| r.0), Some(30));
        assert_eq!(row_extent(&fb, 57), Some((13, 13)));

        // Every row between top and bottom is filled edge to edge
        for y in 10..=57 {
            assert!(row_extent(&fb, y).is_some(), "row {} empty", y);
        }

        assert_eq!(fb.get_pixel(30, 10), Some(Color::RED));
        assert_eq!(fb.get_pixel(67, 22), Some(Color::RED));
        assert_eq!(fb.get_pixel(13, 57), Some(Color::RED));
        assert_eq!(fb.get_pixel(30, 30), Some(FILL));
    }

    #[test]
    fn test_widest_row_reaches_middle_vertex() {
        let rows = spans(320, 180, sample_points());
        let max_right = rows.iter().map(|r| r.2).max().unwrap();
        assert!((66..=67).contains(&max_right));
        let min_left = rows.iter().map(|r| r.1).min().unwrap();
        assert_eq!(min_left, 13);
    }

    #[test]
    fn test_flat_top_and_flat_bottom() {
        let flat_top = spans(64, 64, [ScreenPoint::new(10, 5), ScreenPoint::new(40, 5), ScreenPoint::new(25, 20)]);
        assert_eq!(flat_top.len(), 16);
        assert_eq!(flat_top[0], (5, 10, 40));
        assert_eq!(flat_top[15], (20, 25, 25));

        let flat_bottom = spans(64, 64, [ScreenPoint::new(25, 5), ScreenPoint::new(10, 20), ScreenPoint::new(40, 20)]);
        assert_eq!(flat_bottom.len(), 16);
        assert_eq!(flat_bottom[0], (5, 25, 25));
        assert_eq!(flat_bottom[14], (19, 11, 39));
        // The horizontal bottom edge is constant at its end x
        assert_eq!(flat_bottom[15], (20, 40, 40));
    }

    #[test]
    fn test_clipped_to_buffer() {
        let rows = spans(50, 30, [ScreenPoint::new(-20, -10), ScreenPoint::new(80, 5), ScreenPoint::new(10, 60)]);
        assert_eq!(rows.first().map(|r| r.0), Some(0));
        assert_eq!(rows.last().map(|r| r.0), Some(29));
        for &(_, l, r) in &rows {
            assert!(l <= r && r < 50);
        }
    }

    #[test]
    fn test_offscreen_triangle_writes_nothing() {
        let mut fb = Framebuffer::new(32, 32);
        fb.clear(BG);
        fill_triangle_scanline(
            &mut fb,
            [ScreenPoint::new(-30, 2), ScreenPoint::new(-5, 10), ScreenPoint::new(-20, 20)],
            FILL,
            None,
        );
        assert!((0..32).all(|y| row_extent(&fb, y).is_none()));
    }

    #[test]
    fn test_far_vertices() {
        // About +/-160000 px: inside the coordinate bound, filled normally
        let wide = [ScreenPoint::new(-160_000, 90), ScreenPoint::new(160_000, 36), ScreenPoint::new(160, 72_000)];
        let rows = spans(320, 180, wide);
        // Rows 36..=62 lie entirely right of the buffer
        assert_eq!(rows.len(), 117);
        assert_eq!(rows.first(), Some(&(63, 0, 319)));
        assert_eq!(rows.last(), Some(&(179, 0, 319)));
        assert!(rows.iter().all(|&(_, l, r)| (l, r) == (0, 319)));

        // Past the bound the triangle is skipped, markers aside
        let mut fb = Framebuffer::new(320, 180);
        fb.clear(BG);
        let far = [
            ScreenPoint::new(-1_500_000_000, 0),
            ScreenPoint::new(1_500_000_000, 10),
            ScreenPoint::new(0, 1_500_000_000),
        ];
        fill_triangle_scanline(&mut fb, far, FILL, Some(Color::RED));
        assert!((0..180).all(|y| row_extent(&fb, y).is_none()));
    }
}
