//! Demo scene: a spinning Gouraud triangle over a uv-mapped quad

use crate::app::Scene;
use crate::rasterizer::{render_triangles, Color, Framebuffer, RasterSettings, Triangle, Vec2, Vec3, Vertex};
use std::f32::consts::TAU;

/// Radians per second
const SPIN_SPEED: f32 = 0.8;

pub struct DemoScene {
    pub settings: RasterSettings,
    background: Color,
    /// Buffer width / height, keeps the spin circular on screen
    aspect: f32,
    angle: f32,
    prev_angle: f32,
    quad: [Triangle; 2],
}

impl DemoScene {
    pub fn new(settings: RasterSettings, background: Color, width: usize, height: usize) -> Self {
        Self {
            settings,
            background,
            aspect: width as f32 / height.max(1) as f32,
            angle: 0.0,
            prev_angle: 0.0,
            quad: Self::quad(),
        }
    }

    /// Two triangles sharing a diagonal, uv spanning [0,1]
    fn quad() -> [Triangle; 2] {
        let corner = |x: f32, y: f32, color: Vec3| Vertex::with_uv(Vec2::new(x, y), color, Vec2::new((x - 0.1) / 0.3, (y - 0.55) / 0.35));
        let tl = corner(0.1, 0.55, Vec3::new(0.9, 0.9, 0.9));
        let tr = corner(0.4, 0.55, Vec3::new(0.9, 0.6, 0.2));
        let br = corner(0.4, 0.9, Vec3::new(0.2, 0.2, 0.3));
        let bl = corner(0.1, 0.9, Vec3::new(0.3, 0.7, 0.9));
        [Triangle::new(tl, tr, br), Triangle::new(tl, br, bl)]
    }

    /// The spinning triangle at the given rotation
    fn spinner(&self, angle: f32) -> Triangle {
        let center = Vec2::new(0.62, 0.5);
        let radius = 0.4;
        let colors = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        let vertex = |i: usize| {
            let a = angle + i as f32 * TAU / 3.0;
            let pos = Vec2::new(center.x + a.cos() * radius / self.aspect, center.y + a.sin() * radius);
            Vertex::with_uv(pos, colors[i], Vec2::new(a.cos() * 0.5 + 0.5, a.sin() * 0.5 + 0.5))
        };
        Triangle::new(vertex(0), vertex(1), vertex(2))
    }

    /// Triangles for one frame, back to front
    pub fn triangles(&self, alpha: f32) -> Vec<Triangle> {
        let angle = self.prev_angle + (self.angle - self.prev_angle) * alpha;
        let mut tris = self.quad.to_vec();
        tris.push(self.spinner(angle));
        tris
    }
}

impl Scene for DemoScene {
    fn load(&mut self) {
        log::info!("demo scene loaded ({} fill)", self.settings.fill.label());
    }

    fn update(&mut self, delta: f32) {
        self.prev_angle = self.angle;
        self.angle += SPIN_SPEED * delta;
        if self.angle >= TAU {
            self.angle -= TAU;
            self.prev_angle -= TAU;
        }
    }

    fn draw(&mut self, fb: &mut Framebuffer, alpha: f32) {
        fb.clear(self.background);
        render_triangles(fb, &self.triangles(alpha), &self.settings);
    }

    fn raster_settings(&mut self) -> Option<&mut RasterSettings> {
        Some(&mut self.settings)
    }
}
