//! Screen manager
//!
//! Owns the screen stack. Screens ask for navigation through the
//! [`ScreenStack`] trait while handling input; those requests are queued and
//! applied once every screen has finished its update.

use super::{
    NavigationQueue, NavigationRequest, PlayerIndex, Screen, ScreenKind, ScreenState,
};
use crate::assets::AssetLoader;
use crate::error::MenuError;
use crate::gui::{
    BackgroundScreen, GameplayScreen, LevelSelectorScreen, MainMenuScreen, OptionsMenuScreen,
};
use crate::input_system::MenuInput;
use crate::level::LevelCatalog;
use crate::render::RenderBatch;
use crate::text::measure_text;
use sdl2::pixels::Color;

const LOADING_MESSAGE: &str = "LOADING...";
const LOADING_SCALE: u32 = 3;
const LOADING_COLOR: Color = Color::RGB(255, 255, 255);

/// Screens waiting for the current stack to finish transitioning off
#[derive(Debug, Clone)]
struct PendingReplace {
    screens: Vec<ScreenKind>,
    show_loading: bool,
    player: Option<PlayerIndex>,
    /// The loading message has been on screen for a frame
    loading_drawn: bool,
}

pub struct ScreenManager {
    screens: Vec<Box<dyn Screen>>,
    requests: NavigationQueue,
    pending: Option<PendingReplace>,
    catalog: LevelCatalog,
    quit: bool,
}

impl ScreenManager {
    pub fn new(catalog: LevelCatalog) -> Self {
        ScreenManager {
            screens: Vec::new(),
            requests: NavigationQueue::new(),
            pending: None,
            catalog,
            quit: false,
        }
    }

    pub fn is_quitting(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }

    /// Names of the screens, bottom first
    pub fn screen_names(&self) -> Vec<&str> {
        self.screens.iter().map(|screen| screen.name()).collect()
    }

    /// Builds, loads and pushes a screen immediately
    pub fn add_screen(
        &mut self,
        kind: ScreenKind,
        player: Option<PlayerIndex>,
        assets: &mut dyn AssetLoader,
    ) -> Result<(), MenuError> {
        let mut screen = self.build_screen(&kind, player);
        screen.load_content(assets)?;

        self.screens.push(screen);
        log::debug!("Screen stack: {:?}", self.screen_names());
        Ok(())
    }

    fn build_screen(&self, kind: &ScreenKind, player: Option<PlayerIndex>) -> Box<dyn Screen> {
        match kind {
            ScreenKind::Background(asset) => Box::new(BackgroundScreen::new(asset.clone())),
            ScreenKind::MainMenu => {
                let first_level = self.catalog.first_unlocked().map(|level| level.id);
                Box::new(MainMenuScreen::new(first_level))
            }
            ScreenKind::LevelSelector => Box::new(LevelSelectorScreen::new(&self.catalog)),
            ScreenKind::Options => Box::new(OptionsMenuScreen::new()),
            ScreenKind::Gameplay(level) => {
                let name = self
                    .catalog
                    .get(*level)
                    .map(|definition| definition.name.clone())
                    .unwrap_or_else(|| format!("Level {}", level));
                Box::new(GameplayScreen::new(*level, name, player))
            }
        }
    }

    /// Runs one frame of updates and input
    ///
    /// Screens are visited top to bottom. The first screen that is
    /// transitioning on or active gets the input; every non-popup screen
    /// covers the ones beneath it.
    pub fn update(
        &mut self,
        elapsed: f32,
        input: &[MenuInput],
        assets: &mut dyn AssetLoader,
    ) -> Result<(), MenuError> {
        let mut other_screen_has_focus = false;
        let mut covered = false;

        for screen in self.screens.iter_mut().rev() {
            screen.update(elapsed, other_screen_has_focus, covered);

            if matches!(
                screen.transition().state(),
                ScreenState::TransitionOn | ScreenState::Active
            ) {
                if !other_screen_has_focus {
                    screen.handle_input(input, &mut self.requests);
                    other_screen_has_focus = true;
                }
                if !screen.is_popup() {
                    covered = true;
                }
            }
        }

        self.screens.retain(|screen| {
            let exited = screen.transition().is_exited();
            if exited {
                log::debug!("Removed screen '{}'", screen.name());
            }
            !exited
        });

        self.apply_requests(assets)?;
        self.load_pending(assets)
    }

    fn apply_requests(&mut self, assets: &mut dyn AssetLoader) -> Result<(), MenuError> {
        for request in self.requests.take() {
            match request {
                NavigationRequest::Push { screen, player } => {
                    log::info!("Opening {:?}", screen);
                    self.add_screen(screen, player, assets)?;
                }
                NavigationRequest::Replace {
                    screens,
                    show_loading,
                    player,
                } => {
                    log::info!("Replacing all screens with {:?}", screens);
                    for screen in self.screens.iter_mut() {
                        screen.exit_screen();
                    }
                    self.pending = Some(PendingReplace {
                        screens,
                        show_loading,
                        player,
                        loading_drawn: false,
                    });
                }
                NavigationRequest::Quit => self.quit = true,
            }
        }

        Ok(())
    }

    /// Adds the pending screens once the old ones are gone
    ///
    /// Slow loads wait one extra frame so the loading message gets drawn.
    fn load_pending(&mut self, assets: &mut dyn AssetLoader) -> Result<(), MenuError> {
        let ready = match &self.pending {
            Some(pending) => {
                self.screens.is_empty() && (!pending.show_loading || pending.loading_drawn)
            }
            None => false,
        };
        if !ready {
            return Ok(());
        }

        if let Some(pending) = self.pending.take() {
            for kind in pending.screens {
                self.add_screen(kind, pending.player, assets)?;
            }
        }

        Ok(())
    }

    /// Draws visible screens bottom to top
    pub fn draw(&mut self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        for screen in self.screens.iter_mut() {
            if screen.transition().state() == ScreenState::Hidden {
                continue;
            }
            screen.draw(batch)?;
        }

        if let Some(pending) = self.pending.as_mut() {
            if pending.show_loading && self.screens.is_empty() {
                let (width, height) = batch.viewport();
                let (text_width, text_height) = measure_text(LOADING_MESSAGE, LOADING_SCALE);
                batch.draw_text(
                    LOADING_MESSAGE,
                    (width as i32 - text_width as i32) / 2,
                    (height as i32 - text_height as i32) / 2,
                    LOADING_COLOR,
                    LOADING_SCALE,
                )?;
                pending.loading_drawn = true;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::FakeAssets;
    use crate::level::LevelId;
    use crate::render::{DrawCall, RecordingBatch};
    use crate::screen::{LEVEL_SELECT_BACKGROUND, MAIN_MENU_BACKGROUND};

    fn main_menu_stack(assets: &mut FakeAssets) -> ScreenManager {
        let mut manager = ScreenManager::new(LevelCatalog::default());
        manager
            .add_screen(ScreenKind::background(MAIN_MENU_BACKGROUND), None, assets)
            .unwrap();
        manager.add_screen(ScreenKind::MainMenu, None, assets).unwrap();
        manager.update(1.0, &[], assets).unwrap();
        manager
    }

    #[test]
    fn test_only_top_screen_receives_input() {
        let mut assets = FakeAssets::new();
        let mut manager = main_menu_stack(&mut assets);

        // Back on the main menu quits; the background never sees it
        manager.update(0.016, &[MenuInput::Back], &mut assets).unwrap();
        assert!(manager.is_quitting());
        assert_eq!(manager.screen_count(), 2);
    }

    #[test]
    fn test_push_options_covers_main_menu() {
        let mut assets = FakeAssets::new();
        let mut manager = main_menu_stack(&mut assets);

        manager
            .update(0.016, &[MenuInput::Up, MenuInput::Accept], &mut assets)
            .unwrap();
        assert_eq!(manager.screen_names(), vec![MAIN_MENU_BACKGROUND, "main menu", "options"]);

        manager.update(1.0, &[], &mut assets).unwrap();
        assert_eq!(manager.screens[1].transition().state(), ScreenState::Hidden);
        assert_eq!(manager.screens[0].transition().state(), ScreenState::Active);

        // Hidden screens are skipped when drawing
        let mut batch = RecordingBatch::new(800, 480);
        manager.draw(&mut batch).unwrap();
        assert!(batch.texts().iter().all(|call| !matches!(call, DrawCall::Text { text, .. } if text == "Main Menu")));
    }

    #[test]
    fn test_options_exit_reveals_main_menu() {
        let mut assets = FakeAssets::new();
        let mut manager = main_menu_stack(&mut assets);

        manager.add_screen(ScreenKind::Options, None, &mut assets).unwrap();
        manager.update(1.0, &[], &mut assets).unwrap();

        manager.update(0.016, &[MenuInput::Back], &mut assets).unwrap();
        manager.update(1.0, &[], &mut assets).unwrap();

        assert_eq!(manager.screen_names(), vec![MAIN_MENU_BACKGROUND, "main menu"]);
        assert!(!manager.is_quitting());
    }

    #[test]
    fn test_replace_waits_for_old_screens_then_shows_loading() {
        let mut assets = FakeAssets::new();
        let mut manager = main_menu_stack(&mut assets);

        // Down + Accept is "Select Level"
        manager
            .update(0.016, &[MenuInput::Down, MenuInput::Accept], &mut assets)
            .unwrap();
        assert_eq!(manager.screen_count(), 2);

        // Old screens transition off over half a second
        manager.update(1.0, &[], &mut assets).unwrap();
        assert_eq!(manager.screen_count(), 0);

        let mut batch = RecordingBatch::new(800, 480);
        manager.draw(&mut batch).unwrap();
        assert!(matches!(batch.texts()[0], DrawCall::Text { text, .. } if text == LOADING_MESSAGE));

        manager.update(0.016, &[], &mut assets).unwrap();
        assert_eq!(
            manager.screen_names(),
            vec![LEVEL_SELECT_BACKGROUND, "level selector"]
        );
    }

    #[test]
    fn test_level_tap_loads_gameplay() {
        let mut assets = FakeAssets::new();
        let mut manager = ScreenManager::new(LevelCatalog::default());
        manager.add_screen(ScreenKind::LevelSelector, None, &mut assets).unwrap();
        manager.update(1.0, &[], &mut assets).unwrap();

        // First entry rests at the grid origin
        manager
            .update(0.016, &[MenuInput::Tap { x: 115, y: 130 }], &mut assets)
            .unwrap();
        manager.update(1.0, &[], &mut assets).unwrap();

        let mut batch = RecordingBatch::new(800, 480);
        manager.draw(&mut batch).unwrap();
        manager.update(0.016, &[], &mut assets).unwrap();

        assert_eq!(manager.screen_names(), vec!["Level 1"]);
    }

    #[test]
    fn test_gameplay_for_unknown_level_gets_generic_name() {
        let mut assets = FakeAssets::new();
        let mut manager = ScreenManager::new(LevelCatalog::default());
        manager
            .add_screen(ScreenKind::Gameplay(LevelId(42)), None, &mut assets)
            .unwrap();
        assert_eq!(manager.screen_names(), vec!["Level 42"]);
    }

    #[test]
    fn test_drag_dismisses_level_selector_to_main_menu() {
        let mut assets = FakeAssets::new();
        let mut manager = ScreenManager::new(LevelCatalog::default());
        manager
            .add_screen(ScreenKind::background(LEVEL_SELECT_BACKGROUND), None, &mut assets)
            .unwrap();
        manager.add_screen(ScreenKind::LevelSelector, None, &mut assets).unwrap();
        manager.update(1.0, &[], &mut assets).unwrap();

        manager
            .update(0.016, &[MenuInput::Drag { delta_x: 12.0 }], &mut assets)
            .unwrap();
        manager.update(1.0, &[], &mut assets).unwrap();
        assert_eq!(manager.screen_names(), vec![MAIN_MENU_BACKGROUND, "main menu"]);

        // The main menu takes input again
        manager.update(1.0, &[], &mut assets).unwrap();
        manager.update(0.016, &[MenuInput::Back], &mut assets).unwrap();
        assert!(manager.is_quitting());
    }

    #[test]
    fn test_asset_failure_propagates() {
        let mut assets = FakeAssets::new();
        let mut manager = ScreenManager::new(LevelCatalog::default());

        let result = manager.add_screen(ScreenKind::background(""), None, &mut assets);
        assert!(matches!(result, Err(MenuError::Asset { .. })));
        assert_eq!(manager.screen_count(), 0);
    }
}
