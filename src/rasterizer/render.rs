//! Common "fill triangle" entry points over both strategies

use super::framebuffer::Framebuffer;
use super::halfspace::fill_triangle_halfspace;
use super::math::ScreenPoint;
use super::scanline::fill_triangle_scanline;
use super::types::{Color, FillMethod, RasterSettings, Triangle};

/// Rasterize a single triangle with the configured strategy
///
/// The scanline path is flat: it fills with the first vertex's color.
pub fn draw_triangle(fb: &mut Framebuffer, tri: &Triangle, settings: &RasterSettings) {
    match settings.fill {
        FillMethod::Scanline => {
            let points = tri
                .vertices
                .map(|v| ScreenPoint::from_normalized(v.pos, fb.width, fb.height));
            let color = Color::from_unit(tri.vertices[0].color);
            fill_triangle_scanline(fb, points, color, settings.vertex_marker);
        }
        FillMethod::HalfSpace => fill_triangle_halfspace(fb, tri, settings.shading),
    }
}

/// Rasterize triangles in order; later triangles overwrite earlier ones
pub fn render_triangles(fb: &mut Framebuffer, triangles: &[Triangle], settings: &RasterSettings) {
    for tri in triangles {
        draw_triangle(fb, tri, settings);
    }
}
