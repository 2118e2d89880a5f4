//! Pixel buffer written by the rasterizers and uploaded by the display

use super::types::Color;
use std::path::Path;

/// Framebuffer for software rendering
pub struct Framebuffer {
    pixels: Vec<u8>, // BGRA, 4 bytes per pixel, row-major
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        let mut fb = Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        };
        fb.clear(Color::BLACK);
        fb
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for cell in self.pixels.chunks_exact_mut(4) {
            cell.copy_from_slice(&bytes);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    /// Signed variant of `set_pixel`, ignores negative coordinates
    pub fn set_pixel_i32(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize, color);
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            let mut bytes = [0; 4];
            bytes.copy_from_slice(&self.pixels[idx..idx + 4]);
            Some(Color::from_bytes(bytes))
        } else {
            None
        }
    }

    /// Fill `x0..=x1` on row `y`, clipped to the buffer
    pub fn fill_span(&mut self, y: usize, x0: usize, x1: usize, color: Color) {
        if y >= self.height || x0 > x1 || x0 >= self.width {
            return;
        }
        let x1 = x1.min(self.width - 1);
        let start = (y * self.width + x0) * 4;
        let end = (y * self.width + x1 + 1) * 4;
        let bytes = color.to_bytes();
        for cell in self.pixels[start..end].chunks_exact_mut(4) {
            cell.copy_from_slice(&bytes);
        }
    }

    /// Raw BGRA bytes, `width * 4` per row
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Copy of the buffer in RGBA byte order (macroquad / image upload)
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len());
        for cell in self.pixels.chunks_exact(4) {
            out.extend_from_slice(&[cell[2], cell[1], cell[0], cell[3]]);
        }
        out
    }

    /// Write the buffer to a PNG file
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let img = image::RgbaImage::from_raw(self.width as u32, self.height as u32, self.to_rgba8())
            .ok_or_else(|| format!("Framebuffer size mismatch ({}x{})", self.width, self.height))?;
        img.save(path)
            .map_err(|e| format!("Failed to save {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_and_get() {
        let mut fb = Framebuffer::new(4, 3);
        assert_eq!(fb.get_pixel(0, 0), Some(Color::BLACK));
        let bg = Color::new(92, 131, 181);
        fb.clear(bg);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(fb.get_pixel(x, y), Some(bg));
            }
        }
        assert_eq!(fb.get_pixel(4, 0), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_ignored() {
        let mut fb = Framebuffer::new(4, 4);
        fb.set_pixel(10, 1, Color::RED);
        fb.set_pixel_i32(-1, 2, Color::RED);
        fb.set_pixel_i32(1, 2, Color::RED);
        assert_eq!(fb.get_pixel(1, 2), Some(Color::RED));
        let reds = fb.pixels().chunks_exact(4).filter(|c| *c == Color::RED.to_bytes()).count();
        assert_eq!(reds, 1);
    }

    #[test]
    fn test_fill_span_clipped() {
        let mut fb = Framebuffer::new(8, 2);
        fb.fill_span(1, 5, 20, Color::GREEN);
        for x in 0..8 {
            let expected = if x >= 5 { Color::GREEN } else { Color::BLACK };
            assert_eq!(fb.get_pixel(x, 1), Some(expected));
        }
        fb.fill_span(5, 0, 3, Color::WHITE);
        fb.fill_span(0, 3, 2, Color::WHITE);
        assert!(fb.pixels()[..8 * 4].chunks_exact(4).all(|c| c == Color::BLACK.to_bytes()));
    }

    #[test]
    fn test_memory_layout_is_bgra() {
        let mut fb = Framebuffer::new(2, 1);
        fb.set_pixel(1, 0, Color::new(10, 20, 30));
        assert_eq!(&fb.pixels()[4..8], &[30, 20, 10, 255]);
        assert_eq!(&fb.to_rgba8()[4..8], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_save_png() {
        let mut fb = Framebuffer::new(3, 2);
        fb.set_pixel(2, 1, Color::BLUE);
        let path = std::env::temp_dir().join("murom_framebuffer_test.png");
        fb.save_png(&path).unwrap();
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(2, 1).0, [0, 0, 255, 255]);
        let _ = std::fs::remove_file(&path);
    }
}
