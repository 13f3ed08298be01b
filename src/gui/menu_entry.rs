//! Text entry of a vertical menu

use crate::render::{RenderBatch, lerp_color, with_alpha};
use crate::screen::PlayerIndex;
use crate::text::measure_text;
use glam::Vec2;
use sdl2::pixels::Color;

/// Fade units per second when an entry gains or loses the selection
pub const FADE_SPEED: f32 = 4.0;

/// Moves a selection fade toward 1 (selected) or 0, clamped to that range
pub fn advance_fade(fade: f32, is_selected: bool, elapsed: f32) -> f32 {
    let step = elapsed * FADE_SPEED;
    if is_selected {
        (fade + step).min(1.0)
    } else {
        (fade - step).max(0.0)
    }
}

/// A selected entry's action, tagged with the player who chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSelection<A> {
    pub action: A,
    pub player: PlayerIndex,
}

/// One line of text in a [`MenuScreen`](super::menu::MenuScreen)
#[derive(Debug, Clone)]
pub struct MenuEntry<A> {
    text: String,
    action: A,
    selection_fade: f32,
    position: Vec2,
}

impl<A: Copy> MenuEntry<A> {
    pub fn new(text: impl Into<String>, action: A) -> Self {
        MenuEntry {
            text: text.into(),
            action,
            selection_fade: 0.0,
            position: Vec2::ZERO,
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[cfg(test)]
    pub fn selection_fade(&self) -> f32 {
        self.selection_fade
    }

    pub fn update(&mut self, is_selected: bool, elapsed: f32) {
        self.selection_fade = advance_fade(self.selection_fade, is_selected, elapsed);
    }

    /// Blends from `normal` to `selected` by the selection fade
    pub fn draw(
        &self,
        batch: &mut dyn RenderBatch,
        normal: Color,
        selected: Color,
        scale: u32,
        transition_alpha: f32,
    ) -> Result<(), String> {
        let color = with_alpha(lerp_color(normal, selected, self.selection_fade), transition_alpha);

        batch.draw_text(
            &self.text,
            self.position.x as i32,
            self.position.y as i32,
            color,
            scale,
        )
    }

    pub fn size(&self, scale: u32) -> (u32, u32) {
        measure_text(&self.text, scale)
    }

    pub fn select(&self, player: PlayerIndex) -> MenuSelection<A> {
        MenuSelection {
            action: self.action,
            player,
        }
    }
}
