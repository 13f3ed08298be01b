//! Render batch used by screens
//!
//! Screens draw through the [`RenderBatch`] trait so their layout and draw
//! order can be exercised without an SDL2 window. [`SdlBatch`] is the real
//! implementation, borrowing the canvas and texture cache for one frame.

use crate::assets::{ImageHandle, TextureCache};
use crate::text::draw_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Multiplies a color's alpha by `alpha` (0.0 - 1.0)
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    let a = (color.a as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    Color::RGBA(color.r, color.g, color.b, a)
}

/// Linear blend between two colors, `t` = 0 gives `from`
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::RGBA(
        mix(from.r, to.r),
        mix(from.g, to.g),
        mix(from.b, to.b),
        mix(from.a, to.a),
    )
}

/// Drawing primitives available to screens
pub trait RenderBatch {
    /// Logical size of the drawing area in pixels
    fn viewport(&self) -> (u32, u32);

    /// Draws bitmap text with its top-left corner at (`x`, `y`)
    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, scale: u32) -> Result<(), String>;

    /// Draws an image stretched to `dest`, modulated by `alpha` (0-255)
    fn draw_image(&mut self, image: &ImageHandle, dest: Rect, alpha: u8) -> Result<(), String>;

    /// Fills the whole drawing area
    fn fill(&mut self, color: Color) -> Result<(), String>;
}

/// Frame-scoped SDL2 render batch
pub struct SdlBatch<'c, 'a> {
    canvas: &'c mut Canvas<Window>,
    textures: &'c mut TextureCache<'a>,
}

impl<'c, 'a> SdlBatch<'c, 'a> {
    pub fn new(canvas: &'c mut Canvas<Window>, textures: &'c mut TextureCache<'a>) -> Self {
        SdlBatch { canvas, textures }
    }
}

impl RenderBatch for SdlBatch<'_, '_> {
    fn viewport(&self) -> (u32, u32) {
        self.canvas.logical_size()
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, scale: u32) -> Result<(), String> {
        draw_text(self.canvas, text, x, y, color, scale)
    }

    fn draw_image(&mut self, image: &ImageHandle, dest: Rect, alpha: u8) -> Result<(), String> {
        let texture = self
            .textures
            .texture_mut(image)
            .ok_or_else(|| format!("Unknown image handle {}", image.id))?;

        texture.set_alpha_mod(alpha);
        self.canvas.copy(texture, None, Some(dest))
    }

    fn fill(&mut self, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
        Ok(())
    }
}

/// What a [`RecordingBatch`] was asked to draw
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Text { text: String, x: i32, y: i32, color: Color, scale: u32 },
    Image { id: usize, dest: Rect, alpha: u8 },
    Fill(Color),
}

/// Render batch for tests that records every call
#[cfg(test)]
pub struct RecordingBatch {
    pub size: (u32, u32),
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl RecordingBatch {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingBatch {
            size: (width, height),
            calls: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Text { .. }))
            .collect()
    }
}

#[cfg(test)]
impl RenderBatch for RecordingBatch {
    fn viewport(&self) -> (u32, u32) {
        self.size
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Color, scale: u32) -> Result<(), String> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            color,
            scale,
        });
        Ok(())
    }

    fn draw_image(&mut self, image: &ImageHandle, dest: Rect, alpha: u8) -> Result<(), String> {
        self.calls.push(DrawCall::Image {
            id: image.id,
            dest,
            alpha,
        });
        Ok(())
    }

    fn fill(&mut self, color: Color) -> Result<(), String> {
        self.calls.push(DrawCall::Fill(color));
        Ok(())
    }
}
