//! Scene lifecycle and fixed-step frame driver
//!
//! The app owns one active scene at a time. Scenes are loaded lazily the
//! first time they are driven, updated at a fixed rate, and drawn once per
//! presented frame with the leftover fraction of a step as `alpha`.

use crate::rasterizer::{Framebuffer, RasterSettings};

/// Fixed update step (seconds)
pub const STEP: f32 = 1.0 / 60.0;

/// Upper bound on catch-up updates in a single frame
pub const MAX_STEPS_PER_FRAME: u32 = 8;

/// A unit of content driven by the frame loop
pub trait Scene {
    /// One-time setup, called before the first update
    fn load(&mut self) {}

    /// Advance the simulation by `delta` seconds
    fn update(&mut self, _delta: f32) {}

    /// Render into the framebuffer; `alpha` in [0,1) is the progress
    /// toward the next fixed step
    fn draw(&mut self, _fb: &mut Framebuffer, _alpha: f32) {}

    /// Rasterizer settings the host may toggle at runtime
    fn raster_settings(&mut self) -> Option<&mut RasterSettings> {
        None
    }
}

/// Placeholder scene active until one is set
struct EmptyScene;

impl Scene for EmptyScene {}

/// Owns the active scene and the frame timing state
pub struct App {
    scene: Box<dyn Scene>,
    loaded: bool,
    running: bool,
    accumulator: f32,
}

impl App {
    pub fn new() -> Self {
        Self {
            scene: Box::new(EmptyScene),
            loaded: false,
            running: true,
            accumulator: 0.0,
        }
    }

    pub fn with_scene(scene: Box<dyn Scene>) -> Self {
        let mut app = Self::new();
        app.set_scene(scene);
        app
    }

    /// Replace the active scene; the new one loads on the next frame
    pub fn set_scene(&mut self, scene: Box<dyn Scene>) {
        self.scene = scene;
        self.loaded = false;
        self.accumulator = 0.0;
    }

    pub fn scene_mut(&mut self) -> &mut dyn Scene {
        self.scene.as_mut()
    }

    pub fn request_exit(&mut self) {
        log::info!("exit requested");
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn try_load(&mut self) {
        if !self.loaded {
            self.scene.load();
            self.loaded = true;
        }
    }

    /// Drive one presented frame; returns the number of updates run
    pub fn frame(&mut self, fb: &mut Framebuffer, frame_time: f32) -> u32 {
        self.try_load();

        self.accumulator += frame_time.max(0.0);
        let mut steps = 0;
        while self.accumulator >= STEP {
            if steps == MAX_STEPS_PER_FRAME {
                log::debug!("dropping {:.3}s of frame time", self.accumulator);
                self.accumulator = 0.0;
                break;
            }
            self.scene.update(STEP);
            self.accumulator -= STEP;
            steps += 1;
        }

        let alpha = (self.accumulator / STEP).clamp(0.0, 1.0);
        self.scene.draw(fb, alpha);
        steps
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
