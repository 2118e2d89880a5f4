//! Core types for the rasterizer

use super::math::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Framebuffer cell, stored in blue, green, red, alpha byte order
///
/// Packed as bytes this is the little-endian 32-bit ARGB word the display
/// texture expects, so the field order must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(C)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { b: 0, g: 0, r: 0, a: 255 };
    pub const WHITE: Color = Color { b: 255, g: 255, r: 255, a: 255 };
    pub const RED: Color = Color { b: 0, g: 0, r: 255, a: 255 };
    pub const GREEN: Color = Color { b: 0, g: 255, r: 0, a: 255 };
    pub const BLUE: Color = Color { b: 255, g: 0, r: 0, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r, a: 255 }
    }

    /// Convert a [0,1] RGB attribute to an opaque color
    pub fn from_unit(rgb: Vec3) -> Self {
        let c = rgb.saturate();
        Self::new(
            (c.x * 255.0).round() as u8,
            (c.y * 255.0).round() as u8,
            (c.z * 255.0).round() as u8,
        )
    }

    /// Bytes in framebuffer order (b, g, r, a)
    pub fn to_bytes(self) -> [u8; 4] {
        [self.b, self.g, self.r, self.a]
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self { b: bytes[0], g: bytes[1], r: bytes[2], a: bytes[3] }
    }
}

/// A vertex in normalized [0,1] screen space with its attributes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex {
    pub pos: Vec2,
    /// RGB in [0,1]
    pub color: Vec3,
    pub uv: Option<Vec2>,
}

impl Vertex {
    pub fn new(pos: Vec2, color: Vec3) -> Self {
        Self { pos, color, uv: None }
    }

    pub fn with_uv(pos: Vec2, color: Vec3, uv: Vec2) -> Self {
        Self { pos, color, uv: Some(uv) }
    }
}

/// Three vertices, never mutated by the rasterizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vertex; 3],
}

impl Triangle {
    pub fn new(a: Vertex, b: Vertex, c: Vertex) -> Self {
        Self { vertices: [a, b, c] }
    }
}

/// Triangle fill strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillMethod {
    /// Edge-walking scanline fill, flat colored
    Scanline,
    /// Edge-function fill with barycentric interpolation
    #[default]
    HalfSpace,
}

impl FillMethod {
    pub fn toggled(self) -> Self {
        match self {
            FillMethod::Scanline => FillMethod::HalfSpace,
            FillMethod::HalfSpace => FillMethod::Scanline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FillMethod::Scanline => "scanline",
            FillMethod::HalfSpace => "half-space",
        }
    }
}

/// What the half-space fill writes for each covered pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Shading {
    /// Interpolated vertex colors
    #[default]
    VertexColor,
    /// Interpolated uv as red/green (vertices without uv use their color)
    UvDebug,
}

impl Shading {
    pub fn toggled(self) -> Self {
        match self {
            Shading::VertexColor => Shading::UvDebug,
            Shading::UvDebug => Shading::VertexColor,
        }
    }
}

/// Rasterizer settings
#[derive(Debug, Clone)]
pub struct RasterSettings {
    pub fill: FillMethod,
    pub shading: Shading,
    /// Debug color painted on the vertices by the scanline fill
    pub vertex_marker: Option<Color>,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            fill: FillMethod::HalfSpace,
            shading: Shading::VertexColor,
            vertex_marker: Some(Color::RED),
        }
    }
}
