use std::time::{Duration, Instant};

mod assets;
mod error;
mod gui;
mod input_system;
mod level;
mod render;
mod screen;
mod text;

use assets::TextureCache;
use input_system::InputSystem;
use level::LevelCatalog;
use render::SdlBatch;
use screen::{MAIN_MENU_BACKGROUND, ScreenKind, ScreenManager, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use sdl2::pixels::Color;

const ASSET_ROOT: &str = "assets";
const CLEAR_COLOR: Color = Color::RGB(0, 0, 0);
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Calculate the best window scale based on monitor size
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = (display_mode.w as f32 * 0.9) as i32;
            let usable_h = (display_mode.h as f32 * 0.9) as i32;

            let scale = (usable_w / VIEWPORT_WIDTH as i32).min(usable_h / VIEWPORT_HEIGHT as i32);

            scale.clamp(1, 3) as u32
        }
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem);
    let window_width = VIEWPORT_WIDTH * window_scale;
    let window_height = VIEWPORT_HEIGHT * window_scale;

    log::info!("Window scale: {}x ({}x{})", window_scale, window_width, window_height);

    let window = video_subsystem
        .window("Level Select", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Layout and pointer input are both in logical coordinates
    canvas
        .set_logical_size(VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let mut textures = TextureCache::new(&texture_creator, ASSET_ROOT);
    let catalog = LevelCatalog::locate()?;
    log::info!("{} levels in catalog", catalog.levels.len());

    let mut screens = ScreenManager::new(catalog);
    screens.add_screen(ScreenKind::background(MAIN_MENU_BACKGROUND), None, &mut textures)?;
    screens.add_screen(ScreenKind::MainMenu, None, &mut textures)?;

    let mut input_system = InputSystem::new();
    let mut last_frame = Instant::now();

    'running: loop {
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        let frame = input_system.poll_events(&mut event_pump);
        if frame.quit {
            screens.quit();
        }

        screens.update(elapsed, &frame.events, &mut textures)?;
        if screens.is_quitting() {
            break 'running;
        }

        canvas.set_draw_color(CLEAR_COLOR);
        canvas.clear();

        let mut batch = SdlBatch::new(&mut canvas, &mut textures);
        screens.draw(&mut batch)?;

        canvas.present();

        std::thread::sleep(FRAME_TIME);
    }

    log::info!(
        "Shutting down with {} screens open, {} textures loaded",
        screens.screen_count(),
        textures.len()
    );
    Ok(())
}
