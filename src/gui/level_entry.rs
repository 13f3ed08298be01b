//! Level Entry
//!
//! One cell of the level selector grid: the level name, its icon underneath
//! and the earned medal under that. Locked levels show an empty medal plus a
//! padlock overlapping the top-left corner.

use super::menu_entry::advance_fade;
use crate::assets::{AssetLoader, ImageHandle};
use crate::error::MenuError;
use crate::level::{Badge, LevelDefinition, LevelId};
use crate::render::RenderBatch;
use crate::screen::PlayerIndex;
use crate::text::measure_text;
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Space added above and below the entry contents when measuring
pub const ENTRY_CONTENT_PADDING: u32 = 3;

/// Text scale of the level name
pub const LABEL_SCALE: u32 = 2;

/// Padlock offset from the entry's top-left corner
const LOCK_OFFSET: (i32, i32) = (-15, 15);

const LABEL_COLOR: Color = Color::RGB(255, 255, 255);
const SELECTED_LABEL_COLOR: Color = Color::RGB(255, 255, 0);

/// What happens when an entry is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAction {
    Play(LevelId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelSelection {
    pub action: LevelAction,
    pub player: PlayerIndex,
}

#[derive(Debug, Clone)]
pub struct LevelEntry {
    label: String,
    icon: ImageHandle,
    medal: ImageHandle,
    lock: Option<ImageHandle>,
    badge: Badge,
    selection_fade: f32,
    position: Vec2,
    action: Option<LevelAction>,
}

impl LevelEntry {
    /// Loads the images for `level` and creates an entry that plays it
    pub fn load(level: &LevelDefinition, assets: &mut dyn AssetLoader) -> Result<Self, MenuError> {
        let icon = assets.load(&level.icon)?;
        let medal = assets.load(level.badge.medal_asset())?;
        let lock = match level.badge.overlay_asset() {
            Some(name) => Some(assets.load(name)?),
            None => None,
        };

        Ok(LevelEntry {
            label: level.name.clone(),
            icon,
            medal,
            lock,
            badge: level.badge,
            selection_fade: 0.0,
            position: Vec2::ZERO,
            action: Some(LevelAction::Play(level.id)),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn badge(&self) -> Badge {
        self.badge
    }

    #[cfg(test)]
    pub fn selection_fade(&self) -> f32 {
        self.selection_fade
    }

    #[cfg(test)]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn update(&mut self, is_selected: bool, elapsed: f32) {
        self.selection_fade = advance_fade(self.selection_fade, is_selected, elapsed);
    }

    /// Width is the widest of label, icon and medal; heights stack
    pub fn measure(&self) -> (u32, u32) {
        let (label_width, label_height) = measure_text(&self.label, LABEL_SCALE);

        let width = label_width.max(self.icon.width).max(self.medal.width);
        let height = label_height + ENTRY_CONTENT_PADDING * 2 + self.icon.height + self.medal.height;

        (width, height)
    }

    /// Hit rectangle at the current position
    pub fn bounds(&self) -> Rect {
        let (width, height) = self.measure();
        Rect::new(self.position.x as i32, self.position.y as i32, width, height)
    }

    /// Returns the entry's action, if it has one
    ///
    /// Each call produces a selection; callers decide whether the entry may
    /// be selected at all.
    pub fn select(&self, player: PlayerIndex) -> Option<LevelSelection> {
        self.action.map(|action| LevelSelection { action, player })
    }

    /// Highlight is on/off; the fade is not used for color here
    pub fn draw(&self, is_selected: bool, batch: &mut dyn RenderBatch) -> Result<(), String> {
        let color = if is_selected { SELECTED_LABEL_COLOR } else { LABEL_COLOR };
        let x = self.position.x as i32;
        let y = self.position.y as i32;
        let (_, label_height) = measure_text(&self.label, LABEL_SCALE);

        batch.draw_text(&self.label, x, y, color, LABEL_SCALE)?;

        let icon_y = y + label_height as i32;
        batch.draw_image(
            &self.icon,
            Rect::new(x, icon_y, self.icon.width, self.icon.height),
            255,
        )?;

        let medal_y = icon_y + self.icon.height as i32;
        batch.draw_image(
            &self.medal,
            Rect::new(x, medal_y, self.medal.width, self.medal.height),
            255,
        )?;

        if let Some(lock) = &self.lock {
            batch.draw_image(
                lock,
                Rect::new(x + LOCK_OFFSET.0, y + LOCK_OFFSET.1, lock.width, lock.height),
                255,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::FakeAssets;
    use crate::render::{DrawCall, RecordingBatch};

    fn assets() -> FakeAssets {
        FakeAssets::new()
            .with_size("level_select/level_icon", 64, 64)
            .with_size("level_select/no_medal", 32, 16)
            .with_size("level_select/gold", 32, 16)
            .with_size("level_select/locked", 24, 24)
    }

    fn level(id: u32, badge: Badge) -> LevelDefinition {
        LevelDefinition {
            id: LevelId(id),
            name: format!("Level {}", id),
            icon: "level_select/level_icon".to_string(),
            badge,
        }
    }

    #[test]
    fn test_measure_takes_widest_part_and_stacks_heights() {
        let mut assets = assets();
        let entry = LevelEntry::load(&level(1, Badge::Gold), &mut assets).unwrap();

        // "Level 1" at scale 2: 84x14, wider than the 64px icon
        assert_eq!(entry.measure(), (84, 14 + 6 + 64 + 16));
    }

    #[test]
    fn test_icon_wider_than_label() {
        let mut assets = assets().with_size("level_select/level_icon", 120, 80);
        let entry = LevelEntry::load(&level(2, Badge::None), &mut assets).unwrap();
        assert_eq!(entry.measure().0, 120);
    }

    #[test]
    fn test_locked_entry_loads_overlay() {
        let mut assets = assets();
        let entry = LevelEntry::load(&level(7, Badge::Locked), &mut assets).unwrap();

        assert!(entry.badge().is_locked());
        assert!(assets.loaded.contains(&"level_select/locked".to_string()));
        assert!(assets.loaded.contains(&"level_select/no_medal".to_string()));
    }

    #[test]
    fn test_missing_asset_propagates() {
        let mut assets = assets();
        let mut broken = level(1, Badge::None);
        broken.icon = String::new();
        assert!(LevelEntry::load(&broken, &mut assets).is_err());
    }

    #[test]
    fn test_fade_stays_in_range() {
        let mut assets = assets();
        let mut entry = LevelEntry::load(&level(1, Badge::Gold), &mut assets).unwrap();

        for _ in 0..20 {
            entry.update(true, 0.1);
            assert!(entry.selection_fade() <= 1.0);
        }
        assert_eq!(entry.selection_fade(), 1.0);

        for _ in 0..20 {
            entry.update(false, 0.1);
            assert!(entry.selection_fade() >= 0.0);
        }
        assert_eq!(entry.selection_fade(), 0.0);
    }

    #[test]
    fn test_select_returns_play_action() {
        let mut assets = assets();
        let entry = LevelEntry::load(&level(3, Badge::Gold), &mut assets).unwrap();

        let selection = entry.select(PlayerIndex::One).unwrap();
        assert_eq!(selection.action, LevelAction::Play(LevelId(3)));
        assert_eq!(selection.player, PlayerIndex::One);
    }

    #[test]
    fn test_draw_stacks_label_icon_medal_and_lock() {
        let mut assets = assets();
        let mut entry = LevelEntry::load(&level(8, Badge::Locked), &mut assets).unwrap();
        entry.set_position(Vec2::new(100.0, 200.0));

        let mut batch = RecordingBatch::new(800, 480);
        entry.draw(true, &mut batch).unwrap();

        assert_eq!(batch.calls.len(), 4);
        match &batch.calls[0] {
            DrawCall::Text { x, y, color, .. } => {
                assert_eq!((*x, *y), (100, 200));
                assert_eq!(*color, SELECTED_LABEL_COLOR);
            }
            other => panic!("expected label first, got {:?}", other),
        }
        match &batch.calls[1] {
            DrawCall::Image { dest, .. } => assert_eq!(*dest, Rect::new(100, 214, 64, 64)),
            other => panic!("expected icon, got {:?}", other),
        }
        match &batch.calls[2] {
            DrawCall::Image { dest, .. } => assert_eq!(*dest, Rect::new(100, 278, 32, 16)),
            other => panic!("expected medal, got {:?}", other),
        }
        match &batch.calls[3] {
            DrawCall::Image { dest, .. } => assert_eq!(*dest, Rect::new(85, 215, 24, 24)),
            other => panic!("expected lock, got {:?}", other),
        }
    }
}
