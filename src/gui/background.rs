//! Background Screen
//!
//! Draws a single image stretched over the whole viewport behind the menus.
//! It stays visible while other screens cover it and only leaves when it is
//! replaced.

use crate::assets::{AssetLoader, ImageHandle};
use crate::error::MenuError;
use crate::input_system::MenuInput;
use crate::render::RenderBatch;
use crate::screen::{Screen, ScreenStack, Transition};
use sdl2::rect::Rect;

pub struct BackgroundScreen {
    asset: String,
    image: Option<ImageHandle>,
    transition: Transition,
}

impl BackgroundScreen {
    pub fn new(asset: impl Into<String>) -> Self {
        BackgroundScreen {
            asset: asset.into(),
            image: None,
            transition: Transition::new(0.5, 0.5),
        }
    }
}

impl Screen for BackgroundScreen {
    fn name(&self) -> &str {
        &self.asset
    }

    fn load_content(&mut self, assets: &mut dyn AssetLoader) -> Result<(), MenuError> {
        self.image = Some(assets.load(&self.asset)?);
        Ok(())
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    // Covering is ignored so the image stays behind every menu
    fn update(&mut self, elapsed: f32, other_screen_has_focus: bool, _covered: bool) {
        self.transition.update(elapsed, other_screen_has_focus, false);
    }

    fn handle_input(&mut self, _input: &[MenuInput], _screens: &mut dyn ScreenStack) {}

    fn draw(&mut self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        let Some(image) = &self.image else {
            return Ok(());
        };

        let (width, height) = batch.viewport();
        let alpha = (self.transition.alpha() * 255.0).round() as u8;
        batch.draw_image(image, Rect::new(0, 0, width, height), alpha)
    }
}
