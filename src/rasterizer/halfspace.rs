//! Half-space (edge function) triangle fill with barycentric interpolation
//!
//! Coverage is decided on integer pixel coordinates with three incrementally
//! updated edge functions. Edges that are top or left get a +1 bias, so a
//! pixel lying exactly on an edge shared by two triangles belongs to exactly
//! one of them. Edge values are i64; vertices beyond `MAX_COORD` are
//! rejected before any arithmetic.

use super::framebuffer::Framebuffer;
use super::math::{barycentric, ScreenPoint, Vec2, Vec3, MAX_COORD};
use super::types::{Color, Shading, Triangle};

/// Edge function of the directed edge i -> j, tracked across the bounding box
///
/// `E(x, y) = step_y * (y - yi) - step_x * (x - xi)` with
/// `step_x = yi - yj` and `step_y = xi - xj`.
#[derive(Debug, Clone, Copy)]
struct EdgeFunction {
    step_x: i64,
    step_y: i64,
    /// Value at the start of the current row
    row: i64,
}

impl EdgeFunction {
    fn new(pi: ScreenPoint, pj: ScreenPoint, origin_x: i32, origin_y: i32) -> Self {
        let step_x = pi.y as i64 - pj.y as i64;
        let step_y = pi.x as i64 - pj.x as i64;
        let mut row = step_y * (origin_y as i64 - pi.y as i64) - step_x * (origin_x as i64 - pi.x as i64);

        // Top-left rule
        if step_x < 0 || (step_x == 0 && step_y > 0) {
            row += 1;
        }

        Self { step_x, step_y, row }
    }
}

/// Twice the signed area; positive when the edge functions are positive inside
fn signed_area(p: &[ScreenPoint; 3]) -> i64 {
    let [a, b, c] = p.map(|q| (q.x as i64, q.y as i64));
    (a.0 - b.0) * (c.1 - a.1) - (a.1 - b.1) * (c.0 - a.0)
}

/// Call `covered(x, y)` for every pixel inside the triangle
///
/// Either winding is accepted. Zero-area triangles, and triangles with a
/// vertex more than `MAX_COORD` pixels from the origin, cover nothing.
pub fn rasterize_halfspace<F>(width: usize, height: usize, points: [ScreenPoint; 3], mut covered: F)
where
    F: FnMut(usize, usize),
{
    if width == 0 || height == 0 {
        return;
    }
    if !points.iter().all(ScreenPoint::in_raster_range) {
        log::trace!("skipping triangle beyond +/-{}: {:?}", MAX_COORD, points);
        return;
    }

    let mut p = points;
    let area = signed_area(&p);
    if area == 0 {
        log::trace!("skipping zero-area triangle {:?}", points);
        return;
    }
    if area < 0 {
        p.swap(1, 2);
    }

    let min_x = p.iter().map(|q| q.x).min().unwrap_or(0).max(0);
    let max_x = p.iter().map(|q| q.x).max().unwrap_or(0).min(width as i32 - 1);
    let min_y = p.iter().map(|q| q.y).min().unwrap_or(0).max(0);
    let max_y = p.iter().map(|q| q.y).max().unwrap_or(0).min(height as i32 - 1);
    if min_x > max_x || min_y > max_y {
        return;
    }

    let mut edges = [
        EdgeFunction::new(p[0], p[1], min_x, min_y),
        EdgeFunction::new(p[1], p[2], min_x, min_y),
        EdgeFunction::new(p[2], p[0], min_x, min_y),
    ];

    for y in min_y..=max_y {
        let mut e = [edges[0].row, edges[1].row, edges[2].row];

        for x in min_x..=max_x {
            if e[0] > 0 && e[1] > 0 && e[2] > 0 {
                covered(x as usize, y as usize);
            }
            for (value, edge) in e.iter_mut().zip(edges.iter()) {
                *value -= edge.step_x;
            }
        }

        for edge in edges.iter_mut() {
            edge.row += edge.step_y;
        }
    }
}

/// Color of one covered pixel from clamped barycentric weights
fn shade(tri: &Triangle, bc: Vec3, shading: Shading) -> Color {
    let [a, b, c] = &tri.vertices;

    if shading == Shading::UvDebug {
        if let (Some(ua), Some(ub), Some(uc)) = (a.uv, b.uv, c.uv) {
            let uv = ua * bc.x + ub * bc.y + uc * bc.z;
            return Color::from_unit(Vec3::new(uv.x, uv.y, 0.0));
        }
    }

    Color::from_unit(a.color * bc.x + b.color * bc.y + c.color * bc.z)
}

/// Fill a triangle, interpolating its vertex attributes per pixel
///
/// Degenerate triangles (zero area in screen or normalized space) are
/// skipped without touching the buffer.
pub fn fill_triangle_halfspace(fb: &mut Framebuffer, tri: &Triangle, shading: Shading) {
    let (width, height) = (fb.width, fb.height);
    let [a, b, c] = tri.vertices.map(|v| v.pos);

    if barycentric(a, a, b, c).is_none() {
        log::trace!("skipping degenerate triangle {:?}", tri.vertices.map(|v| v.pos));
        return;
    }

    let points = tri.vertices.map(|v| ScreenPoint::from_normalized(v.pos, width, height));
    let inv_w = 1.0 / width as f32;
    let inv_h = 1.0 / height as f32;

    rasterize_halfspace(width, height, points, |x, y| {
        let center = Vec2::new((x as f32 + 0.5) * inv_w, (y as f32 + 0.5) * inv_h);
        // Weights are clamped but not renormalized
        if let Some(bc) = barycentric(center, a, b, c) {
            fb.set_pixel(x, y, shade(tri, bc.saturate(), shading));
        }
    });
}
