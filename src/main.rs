//! Murom viewer
//!
//! Keys:
//! - Tab: toggle scanline / half-space fill
//! - U: toggle uv debug shading
//! - M: toggle vertex markers (scanline fill)
//! - F12: save a PNG screenshot
//! - Escape: quit

use macroquad::prelude::*;
use murom::app::App;
use murom::config::{load_or_default, Config, CONFIG_FILE};
use murom::demo::DemoScene;
use murom::rasterizer::{self, Framebuffer};
use murom::VERSION;
use std::path::PathBuf;
use std::sync::OnceLock;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Config path from the first argument, or the default file
fn config_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

fn config() -> &'static Config {
    CONFIG.get_or_init(|| load_or_default(config_path()))
}

fn window_conf() -> Conf {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config();
    Conf {
        window_title: format!("{} v{}", config.title, VERSION),
        window_width: (config.width as u32 * config.scale) as i32,
        window_height: (config.height as u32 * config.scale) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

/// Apply the debug toggles to the active scene's settings
fn handle_toggles(app: &mut App) {
    let Some(settings) = app.scene_mut().raster_settings() else {
        return;
    };

    if is_key_pressed(KeyCode::Tab) {
        settings.fill = settings.fill.toggled();
        log::info!("fill method: {}", settings.fill.label());
    }
    if is_key_pressed(KeyCode::U) {
        settings.shading = settings.shading.toggled();
        log::info!("shading: {:?}", settings.shading);
    }
    if is_key_pressed(KeyCode::M) {
        settings.vertex_marker = match settings.vertex_marker {
            Some(_) => None,
            None => Some(rasterizer::Color::RED),
        };
        log::info!("vertex markers: {}", settings.vertex_marker.is_some());
    }
}

/// Largest integer scale that fits the window, at least 1
fn fit_scale(fb: &Framebuffer) -> f32 {
    let sx = screen_width() / fb.width as f32;
    let sy = screen_height() / fb.height as f32;
    sx.min(sy).floor().max(1.0)
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();
    log::info!(
        "framebuffer {}x{} at scale {}",
        config.width,
        config.height,
        config.scale
    );

    let mut fb = Framebuffer::new(config.width, config.height);
    fb.clear(config.background_color());

    let scene = DemoScene::new(
        config.raster_settings(),
        config.background_color(),
        config.width,
        config.height,
    );
    let mut app = App::with_scene(Box::new(scene));

    let (w, h) = (fb.width as u16, fb.height as u16);
    let texture = Texture2D::from_rgba8(w, h, &fb.to_rgba8());
    texture.set_filter(FilterMode::Nearest);

    let mut screenshots = 0;

    while app.is_running() {
        if is_key_pressed(KeyCode::Escape) {
            app.request_exit();
            break;
        }
        handle_toggles(&mut app);

        app.frame(&mut fb, get_frame_time());

        if is_key_pressed(KeyCode::F12) {
            let path = format!("murom-{:03}.png", screenshots);
            match fb.save_png(&path) {
                Ok(()) => {
                    log::info!("saved screenshot {}", path);
                    screenshots += 1;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        // Upload and present, letterboxed at an integer scale
        texture.update(&Image {
            bytes: fb.to_rgba8(),
            width: w,
            height: h,
        });

        let scale = fit_scale(&fb);
        let draw_w = fb.width as f32 * scale;
        let draw_h = fb.height as f32 * scale;
        let draw_x = ((screen_width() - draw_w) / 2.0).floor();
        let draw_y = ((screen_height() - draw_h) / 2.0).floor();

        clear_background(BLACK);
        draw_texture_ex(
            &texture,
            draw_x,
            draw_y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(draw_w, draw_h)),
                ..Default::default()
            },
        );

        next_frame().await;
    }
}
