//! Level Selector Screen
//!
//! Shows every level in the catalog as a grid of [`LevelEntry`]s. Tapping an
//! unlocked entry loads that level; tapping a locked one does nothing. A
//! horizontal drag nudges the grid sideways and, past a small threshold,
//! dismisses the screen back to the main menu, the same place Back goes.

use super::grid::{GridLayout, transition_slide};
use super::level_entry::{LevelAction, LevelEntry, LevelSelection};
use super::menu::draw_title;
use crate::assets::AssetLoader;
use crate::error::MenuError;
use crate::input_system::MenuInput;
use crate::level::{LevelCatalog, LevelDefinition};
use crate::render::RenderBatch;
use crate::screen::{
    MAIN_MENU_BACKGROUND, PlayerIndex, Screen, ScreenKind, ScreenStack, ScreenState, Transition,
};
use sdl2::pixels::Color;

/// Accumulated horizontal drag that dismisses the screen
pub const DRAG_EXIT_THRESHOLD: f32 = 10.0;

/// Transition position per pixel of drag
const DRAG_SLIDE_FACTOR: f32 = 0.1;

const TITLE_Y: f32 = 80.0;
const TITLE_SCALE: u32 = 3;
const TITLE_COLOR: Color = Color::RGB(192, 192, 192);

/// Result of routing one frame of input through the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    Selected(LevelSelection),
    Back,
    /// A horizontal drag crossed the exit threshold
    Dismissed,
}

pub struct LevelSelectorScreen {
    title: String,
    layout: GridLayout,
    levels: Vec<LevelDefinition>,
    entries: Vec<LevelEntry>,
    selected_entry: Option<usize>,
    drag_total: f32,
    transition: Transition,
}

impl LevelSelectorScreen {
    pub fn new(catalog: &LevelCatalog) -> Self {
        LevelSelectorScreen {
            title: catalog.title.clone(),
            layout: catalog.layout.clone(),
            levels: catalog.levels.clone(),
            entries: Vec::new(),
            selected_entry: None,
            drag_total: 0.0,
            transition: Transition::new(0.5, 0.5),
        }
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[LevelEntry] {
        &self.entries
    }

    #[cfg(test)]
    pub fn selected_entry(&self) -> Option<usize> {
        self.selected_entry
    }

    /// Places every entry in its grid cell, shifted by the transition slide
    pub fn update_entry_locations(&mut self) {
        let slide = transition_slide(
            self.transition.position(),
            self.transition.state() == ScreenState::TransitionOn,
        );

        for (i, entry) in self.entries.iter_mut().enumerate() {
            let mut position = self.layout.position(i, entry.measure());
            position.x += slide;
            entry.set_position(position);
        }
    }

    fn is_selected(&self, index: usize) -> bool {
        self.transition.is_active() && self.selected_entry == Some(index)
    }

    /// Routes input to the grid and returns what the player chose
    pub fn process_input(&mut self, input: &[MenuInput]) -> Vec<SelectorEvent> {
        let mut events = Vec::new();

        for event in input {
            match *event {
                MenuInput::Back => events.push(SelectorEvent::Back),
                MenuInput::Tap { x, y } => {
                    for (i, entry) in self.entries.iter().enumerate() {
                        if !entry.bounds().contains_point((x, y)) {
                            continue;
                        }

                        self.selected_entry = Some(i);
                        if entry.badge().is_locked() {
                            log::debug!("{} is locked", entry.label());
                        } else if let Some(selection) = entry.select(PlayerIndex::One) {
                            events.push(SelectorEvent::Selected(selection));
                        }
                    }
                }
                MenuInput::Drag { delta_x } => {
                    self.transition.set_position(-delta_x * DRAG_SLIDE_FACTOR);
                    self.drag_total += delta_x;

                    if self.drag_total.abs() >= DRAG_EXIT_THRESHOLD && !self.transition.is_exiting() {
                        log::debug!("Drag of {} dismisses level selector", self.drag_total);
                        self.transition.exit();
                        events.push(SelectorEvent::Dismissed);
                    }
                }
                MenuInput::DragComplete => self.drag_total = 0.0,
                MenuInput::Up | MenuInput::Down | MenuInput::Accept => {}
            }
        }

        events
    }

    /// Single handler for every level: replace all screens with gameplay
    fn on_level_selected(&self, selection: LevelSelection, screens: &mut dyn ScreenStack) {
        match selection.action {
            LevelAction::Play(level) => {
                log::info!("Level {} selected by {:?}", level, selection.player);
                screens.replace(vec![ScreenKind::Gameplay(level)], true, Some(selection.player));
            }
        }
    }
}

impl Screen for LevelSelectorScreen {
    fn name(&self) -> &str {
        "level selector"
    }

    /// Builds the entries; runs once, later calls keep the existing ones
    fn load_content(&mut self, assets: &mut dyn AssetLoader) -> Result<(), MenuError> {
        if !self.entries.is_empty() {
            return Ok(());
        }

        self.entries = self
            .levels
            .iter()
            .map(|level| LevelEntry::load(level, assets))
            .collect::<Result<Vec<_>, _>>()?;
        self.selected_entry = if self.entries.is_empty() { None } else { Some(0) };
        self.update_entry_locations();

        Ok(())
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    fn update(&mut self, elapsed: f32, other_screen_has_focus: bool, covered: bool) {
        self.transition.update(elapsed, other_screen_has_focus, covered);
        self.update_entry_locations();

        for i in 0..self.entries.len() {
            let is_selected = self.is_selected(i);
            self.entries[i].update(is_selected, elapsed);
        }
    }

    fn handle_input(&mut self, input: &[MenuInput], screens: &mut dyn ScreenStack) {
        for event in self.process_input(input) {
            match event {
                // Both ignore whatever is selected
                SelectorEvent::Back | SelectorEvent::Dismissed => screens.replace(
                    vec![ScreenKind::background(MAIN_MENU_BACKGROUND), ScreenKind::MainMenu],
                    false,
                    None,
                ),
                SelectorEvent::Selected(selection) => self.on_level_selected(selection, screens),
            }
        }
    }

    fn draw(&mut self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        self.update_entry_locations();

        for (i, entry) in self.entries.iter().enumerate() {
            entry.draw(self.is_selected(i), batch)?;
        }

        draw_title(batch, &self.title, TITLE_Y, TITLE_SCALE, TITLE_COLOR, &self.transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::FakeAssets;
    use crate::level::LevelId;
    use crate::render::{DrawCall, RecordingBatch};
    use crate::screen::{NavigationQueue, NavigationRequest};

    fn loaded_selector() -> LevelSelectorScreen {
        let mut assets = FakeAssets::new()
            .with_size("level_select/level_icon", 64, 64)
            .with_size("level_select/no_medal", 32, 16)
            .with_size("level_select/bronze", 32, 16)
            .with_size("level_select/silver", 32, 16)
            .with_size("level_select/gold", 32, 16)
            .with_size("level_select/locked", 24, 24);

        let mut selector = LevelSelectorScreen::new(&LevelCatalog::default());
        selector.load_content(&mut assets).unwrap();
        // Finish transitioning on so entries sit in their cells
        selector.update(1.0, false, false);
        selector
    }

    fn tap_entry(selector: &LevelSelectorScreen, index: usize) -> MenuInput {
        let bounds = selector.entries()[index].bounds();
        MenuInput::Tap {
            x: bounds.x() + bounds.width() as i32 / 2,
            y: bounds.y() + bounds.height() as i32 / 2,
        }
    }

    #[test]
    fn test_load_populates_entries_once() {
        let mut selector = loaded_selector();
        assert_eq!(selector.entries().len(), 10);
        assert_eq!(selector.selected_entry(), Some(0));

        let mut assets = FakeAssets::new();
        selector.load_content(&mut assets).unwrap();
        assert_eq!(selector.entries().len(), 10);
        assert!(assets.loaded.is_empty());
    }

    #[test]
    fn test_empty_catalog_has_no_selection() {
        let catalog = LevelCatalog {
            levels: Vec::new(),
            ..LevelCatalog::default()
        };
        let mut selector = LevelSelectorScreen::new(&catalog);
        selector.load_content(&mut FakeAssets::new()).unwrap();

        assert_eq!(selector.selected_entry(), None);
        assert!(selector.process_input(&[MenuInput::Tap { x: 120, y: 130 }]).is_empty());
    }

    #[test]
    fn test_entries_placed_in_grid() {
        let selector = loaded_selector();
        let entries = selector.entries();

        assert_eq!(entries[0].position().x, 110.0);
        assert_eq!(entries[0].position().y, 125.0);
        assert_eq!(entries[5].position().x, 110.0);
        assert_eq!(entries[5].position().y, 125.0 + entries[5].measure().1 as f32);
        assert!(entries[1].position().x > entries[0].position().x);
    }

    #[test]
    fn test_tap_unlocked_entry_selects_once() {
        let mut selector = loaded_selector();
        let tap = tap_entry(&selector, 1);

        let events = selector.process_input(&[tap]);
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            SelectorEvent::Selected(LevelSelection {
                action: LevelAction::Play(LevelId(2)),
                player: PlayerIndex::One,
            })
        );
        assert_eq!(selector.selected_entry(), Some(1));
    }

    #[test]
    fn test_tap_locked_entry_selects_nothing() {
        let mut selector = loaded_selector();
        let tap = tap_entry(&selector, 7);

        assert!(selector.process_input(&[tap]).is_empty());
    }

    #[test]
    fn test_each_tap_fires_separately() {
        let mut selector = loaded_selector();
        let tap = tap_entry(&selector, 3);

        let events = selector.process_input(&[tap, tap]);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_tap_between_entries_misses() {
        let mut selector = loaded_selector();
        let first = selector.entries()[0].bounds();
        let gap_x = first.x() + first.width() as i32 + 10;

        assert!(selector.process_input(&[MenuInput::Tap { x: gap_x, y: first.y() + 5 }]).is_empty());
    }

    #[test]
    fn test_drag_past_threshold_exits() {
        let mut selector = loaded_selector();
        let events = selector.process_input(&[MenuInput::Drag { delta_x: 12.0 }]);

        assert!(selector.transition().is_exiting());
        assert_eq!(events, vec![SelectorEvent::Dismissed]);

        // Further dragging does not dismiss twice
        assert!(selector.process_input(&[MenuInput::Drag { delta_x: 12.0 }]).is_empty());
    }

    #[test]
    fn test_drag_dismiss_returns_to_main_menu() {
        let mut selector = loaded_selector();
        let mut screens = NavigationQueue::new();

        selector.handle_input(&[MenuInput::Drag { delta_x: -12.0 }], &mut screens);

        assert_eq!(
            screens.requests(),
            &[NavigationRequest::Replace {
                screens: vec![ScreenKind::background(MAIN_MENU_BACKGROUND), ScreenKind::MainMenu],
                show_loading: false,
                player: None,
            }]
        );
    }

    #[test]
    fn test_short_drag_does_not_exit() {
        let mut selector = loaded_selector();
        selector.process_input(&[MenuInput::Drag { delta_x: 5.0 }]);

        assert!(!selector.transition().is_exiting());
        assert!((selector.transition().position() + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_drag_accumulates_until_complete() {
        let mut selector = loaded_selector();
        selector.process_input(&[MenuInput::Drag { delta_x: -5.0 }, MenuInput::DragComplete]);
        selector.process_input(&[MenuInput::Drag { delta_x: -6.0 }]);
        assert!(!selector.transition().is_exiting());

        selector.process_input(&[MenuInput::Drag { delta_x: -6.0 }]);
        assert!(selector.transition().is_exiting());
    }

    #[test]
    fn test_handle_input_replaces_with_gameplay() {
        let mut selector = loaded_selector();
        let mut screens = NavigationQueue::new();
        let tap = tap_entry(&selector, 1);

        selector.handle_input(&[tap], &mut screens);

        assert_eq!(
            screens.requests(),
            &[NavigationRequest::Replace {
                screens: vec![ScreenKind::Gameplay(LevelId(2))],
                show_loading: true,
                player: Some(PlayerIndex::One),
            }]
        );
    }

    #[test]
    fn test_ten_levels_end_to_end() {
        let mut selector = loaded_selector();
        let mut screens = NavigationQueue::new();

        for i in 6..10 {
            assert!(selector.entries()[i].badge().is_locked());
        }

        let tap_one = tap_entry(&selector, 1);
        selector.handle_input(&[tap_one], &mut screens);
        assert_eq!(screens.take().len(), 1);

        let tap_seven = tap_entry(&selector, 7);
        selector.handle_input(&[tap_seven], &mut screens);
        assert!(screens.is_empty());
    }

    #[test]
    fn test_back_returns_to_main_menu() {
        let mut selector = loaded_selector();
        let mut screens = NavigationQueue::new();

        selector.handle_input(&[MenuInput::Back], &mut screens);

        assert_eq!(
            screens.requests(),
            &[NavigationRequest::Replace {
                screens: vec![ScreenKind::background(MAIN_MENU_BACKGROUND), ScreenKind::MainMenu],
                show_loading: false,
                player: None,
            }]
        );
    }

    #[test]
    fn test_only_selected_entry_fades_in() {
        let mut selector = loaded_selector();
        assert_eq!(selector.entries()[0].selection_fade(), 1.0);
        assert_eq!(selector.entries()[1].selection_fade(), 0.0);

        let tap = tap_entry(&selector, 2);
        selector.process_input(&[tap]);
        selector.update(0.1, false, false);

        assert!(selector.entries()[0].selection_fade() < 1.0);
        assert!(selector.entries()[2].selection_fade() > 0.0);
    }

    #[test]
    fn test_draw_ends_with_centered_title() {
        let mut selector = loaded_selector();
        let mut batch = RecordingBatch::new(800, 480);
        selector.draw(&mut batch).unwrap();

        match batch.calls.last() {
            Some(DrawCall::Text { text, x, y, .. }) => {
                assert_eq!(text, "Select Level");
                // 12 chars * 18px = 216px wide, 21px tall, centered on y = 80
                assert_eq!(*x, 400 - 108);
                assert_eq!(*y, 69);
            }
            other => panic!("expected title last, got {:?}", other),
        }
    }

    #[test]
    fn test_entries_slide_in_while_transitioning_on() {
        let mut assets = FakeAssets::new();
        let mut selector = LevelSelectorScreen::new(&LevelCatalog::default());
        selector.load_content(&mut assets).unwrap();
        selector.update(0.25, false, false);

        // Half way on: 0.5^2 * 256 px left of the resting column
        assert_eq!(selector.entries()[0].position().x, 110.0 - 64.0);
    }

    #[test]
    fn test_entries_slide_right_while_transitioning_off() {
        let mut selector = loaded_selector();
        selector.update(0.25, false, true);
        assert_eq!(selector.transition().state(), ScreenState::TransitionOff);

        // Half way off: 0.5^2 * 512 px right of the resting column
        assert_eq!(selector.entries()[0].position().x, 110.0 + 128.0);
    }

    #[test]
    fn test_selection_does_not_fade_in_without_focus() {
        let mut assets = FakeAssets::new();
        let mut selector = LevelSelectorScreen::new(&LevelCatalog::default());
        selector.load_content(&mut assets).unwrap();

        selector.update(1.0, true, false);
        assert_eq!(selector.selected_entry(), Some(0));
        assert_eq!(selector.entries()[0].selection_fade(), 0.0);
    }

    #[test]
    fn test_selection_fades_out_when_focus_is_lost() {
        let mut selector = loaded_selector();
        assert_eq!(selector.entries()[0].selection_fade(), 1.0);

        selector.update(0.1, true, false);
        assert!((selector.entries()[0].selection_fade() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_title_rises_and_fades_mid_transition() {
        let mut assets = FakeAssets::new();
        let mut selector = LevelSelectorScreen::new(&LevelCatalog::default());
        selector.load_content(&mut assets).unwrap();
        selector.update(0.25, false, false);

        let mut batch = RecordingBatch::new(800, 480);
        selector.draw(&mut batch).unwrap();

        match batch.calls.last() {
            Some(DrawCall::Text { text, y, color, .. }) => {
                assert_eq!(text, "Select Level");
                // 80 - 10.5 - 0.5^2 * 100
                assert_eq!(*y, 44);
                assert_eq!(color.a, 128);
            }
            other => panic!("expected title last, got {:?}", other),
        }
    }
}
