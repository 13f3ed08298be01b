//! Options Menu Screen
//!
//! Pushed over the main menu. Choosing the difficulty entry cycles through
//! the settings; Back (the entry or the button) closes the screen.

use super::menu::{MenuEvent, MenuScreen};
use super::menu_entry::MenuEntry;
use crate::input_system::MenuInput;
use crate::render::RenderBatch;
use crate::screen::{Screen, ScreenStack, Transition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsMenuOption {
    Difficulty,
    Back,
}

pub struct OptionsMenuScreen {
    menu: MenuScreen<OptionsMenuOption>,
    difficulty: Difficulty,
}

impl OptionsMenuScreen {
    pub fn new() -> Self {
        let difficulty = Difficulty::Normal;
        let entries = vec![
            MenuEntry::new(Self::difficulty_text(difficulty), OptionsMenuOption::Difficulty),
            MenuEntry::new("Back", OptionsMenuOption::Back),
        ];

        OptionsMenuScreen {
            menu: MenuScreen::new("Options", entries),
            difficulty,
        }
    }

    #[cfg(test)]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    fn difficulty_text(difficulty: Difficulty) -> String {
        format!("Difficulty: {}", difficulty.label())
    }

    fn cycle_difficulty(&mut self) {
        self.difficulty = self.difficulty.next();
        let text = Self::difficulty_text(self.difficulty);
        if let Some(entry) = self.menu.entry_mut(0) {
            entry.set_text(text);
        }
        log::debug!("Difficulty set to {:?}", self.difficulty);
    }
}

impl Default for OptionsMenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for OptionsMenuScreen {
    fn name(&self) -> &str {
        "options"
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

    fn handle_input(&mut self, input: &[MenuInput], _screens: &mut dyn ScreenStack) {
        for event in self.menu.process_input(input) {
            match event {
                MenuEvent::Selected(selection) => match selection.action {
                    OptionsMenuOption::Difficulty => self.cycle_difficulty(),
                    OptionsMenuOption::Back => self.exit_screen(),
                },
                MenuEvent::Cancelled(_) => self.exit_screen(),
            }
        }
    }

    fn draw(&mut self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        self.menu.draw(batch)
    }
}
