//! Main Menu Screen
//!
//! The first thing shown when the game starts:
//! - Play Game: starts the first unlocked level
//! - Select Level: opens the level selector grid
//! - Options: opens the options menu on top
//!
//! Backing out of the main menu quits the game.

use super::menu::{MenuEvent, MenuScreen};
use super::menu_entry::{MenuEntry, MenuSelection};
use crate::input_system::MenuInput;
use crate::level::LevelId;
use crate::render::RenderBatch;
use crate::screen::{LEVEL_SELECT_BACKGROUND, Screen, ScreenKind, ScreenStack, Transition};

/// Options in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    PlayGame,
    SelectLevel,
    Options,
}

pub struct MainMenuScreen {
    menu: MenuScreen<MainMenuOption>,
    first_level: Option<LevelId>,
}

impl MainMenuScreen {
    /// `first_level` is what "Play Game" starts; `None` disables it
    pub fn new(first_level: Option<LevelId>) -> Self {
        let entries = vec![
            MenuEntry::new("Play Game", MainMenuOption::PlayGame),
            MenuEntry::new("Select Level", MainMenuOption::SelectLevel),
            MenuEntry::new("Options", MainMenuOption::Options),
        ];

        MainMenuScreen {
            menu: MenuScreen::new("Main Menu", entries),
            first_level,
        }
    }

    #[cfg(test)]
    pub fn menu(&self) -> &MenuScreen<MainMenuOption> {
        &self.menu
    }

    fn on_selected(&self, selection: MenuSelection<MainMenuOption>, screens: &mut dyn ScreenStack) {
        let player = Some(selection.player);

        match selection.action {
            MainMenuOption::PlayGame => match self.first_level {
                Some(level) => screens.replace(vec![ScreenKind::Gameplay(level)], true, player),
                None => log::warn!("Play Game chosen but every level is locked"),
            },
            MainMenuOption::SelectLevel => screens.replace(
                vec![ScreenKind::background(LEVEL_SELECT_BACKGROUND), ScreenKind::LevelSelector],
                true,
                player,
            ),
            MainMenuOption::Options => screens.push(ScreenKind::Options, player),
        }
    }
}

impl Screen for MainMenuScreen {
    fn name(&self) -> &str {
        "main menu"
    }

    fn transition(&self) -> &Transition {
        self.menu.transition()
    }

    fn transition_mut(&mut self) -> &mut Transition {
        self.menu.transition_mut()
    }

    fn update(&mut self, elapsed: f32, other_screen_has_focus: bool, covered: bool) {
        self.menu.update(elapsed, other_screen_has_focus, covered);
    }

    fn handle_input(&mut self, input: &[MenuInput], screens: &mut dyn ScreenStack) {
        for event in self.menu.process_input(input) {
            match event {
                MenuEvent::Selected(selection) => self.on_selected(selection, screens),
                MenuEvent::Cancelled(_) => {
                    log::info!("{} cancelled, quitting", self.menu.title());
                    screens.quit();
                }
            }
        }
    }

    fn draw(&mut self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        self.menu.draw(batch)
    }
}
