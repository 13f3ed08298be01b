//! Gameplay Screen
//!
//! Stand-in for the game itself: announces which level was loaded and for
//! which player. Back returns to the level selector.

use super::menu::draw_title;
use crate::assets::AssetLoader;
use crate::error::MenuError;
use crate::input_system::MenuInput;
use crate::level::LevelId;
use crate::render::{RenderBatch, with_alpha};
use crate::screen::{
    LEVEL_SELECT_BACKGROUND, PlayerIndex, Screen, ScreenKind, ScreenStack, Transition,
};
use crate::text::measure_text;
use sdl2::pixels::Color;

const BACKGROUND_COLOR: Color = Color::RGB(20, 24, 36);
const TITLE_COLOR: Color = Color::RGB(255, 255, 255);
const HINT_COLOR: Color = Color::RGB(150, 150, 160);
const HINT: &str = "Press Esc to return";

pub struct GameplayScreen {
    level: LevelId,
    level_name: String,
    player: Option<PlayerIndex>,
    transition: Transition,
}

impl GameplayScreen {
    pub fn new(level: LevelId, level_name: impl Into<String>, player: Option<PlayerIndex>) -> Self {
        GameplayScreen {
            level,
            level_name: level_name.into(),
            player,
            transition: Transition::new(1.5, 0.5),
        }
    }
}

impl Screen for GameplayScreen {
    fn name(&self) -> &str {
        &self.level_name
    }

    fn load_content(&mut self, _assets: &mut dyn AssetLoader) -> Result<(), MenuError> {
        log::info!("Starting level {} ({})", self.level, self.level_name);
        Ok(())
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    fn handle_input(&mut self, input: &[MenuInput], screens: &mut dyn ScreenStack) {
        if input.contains(&MenuInput::Back) {
            screens.replace(
                vec![ScreenKind::background(LEVEL_SELECT_BACKGROUND), ScreenKind::LevelSelector],
                false,
                self.player,
            );
        }
    }

    fn draw(&mut self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        batch.fill(BACKGROUND_COLOR)?;

        draw_title(batch, &self.level_name, 200.0, 4, TITLE_COLOR, &self.transition)?;

        let (viewport_width, _) = batch.viewport();
        let alpha = self.transition.alpha();

        if let Some(player) = self.player {
            let text = format!("{:?} player", player);
            let (width, _) = measure_text(&text, 2);
            batch.draw_text(
                &text,
                viewport_width as i32 / 2 - width as i32 / 2,
                250,
                with_alpha(HINT_COLOR, alpha),
                2,
            )?;
        }

        let (width, _) = measure_text(HINT, 2);
        batch.draw_text(
            HINT,
            viewport_width as i32 / 2 - width as i32 / 2,
            400,
            with_alpha(HINT_COLOR, alpha),
            2,
        )
    }
}
