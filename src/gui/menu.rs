//! Vertical Menu Screen
//!
//! Reusable single-column menu: a centered title and a list of text entries.
//! Entries are selected by tapping them or with up/down/accept. The menu does
//! not know what its entries do; [`MenuScreen::process_input`] returns the
//! chosen actions and the concrete screen (main menu, options) acts on them.

use super::grid::transition_slide;
use super::menu_entry::{MenuEntry, MenuSelection};
use crate::input_system::MenuInput;
use crate::render::{RenderBatch, with_alpha};
use crate::screen::{PlayerIndex, ScreenState, Transition, VIEWPORT_WIDTH};
use crate::text::measure_text;
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Y of the first entry
    pub first_entry_y: f32,

    /// Space above and below each entry, also widens its hit area
    pub entry_padding: u32,

    pub entry_scale: u32,

    /// Title center line
    pub title_y: f32,

    pub title_scale: u32,

    pub title_color: Color,

    /// Normal item text color
    pub item_color: Color,

    /// Selected item text color
    pub selected_item_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            first_entry_y: 175.0,
            entry_padding: 10,
            entry_scale: 3,
            title_y: 80.0,
            title_scale: 4,
            title_color: Color::RGB(192, 192, 192),
            item_color: Color::RGB(255, 255, 255),
            selected_item_color: Color::RGB(255, 255, 0),
        }
    }
}

/// Outcome of one frame of menu input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent<A> {
    Selected(MenuSelection<A>),
    Cancelled(PlayerIndex),
}

/// A stateful vertical menu with transitions
pub struct MenuScreen<A> {
    title: String,
    entries: Vec<MenuEntry<A>>,
    selected_index: usize,
    style: MenuStyle,
    transition: Transition,
    viewport_width: u32,
}

impl<A: Copy> MenuScreen<A> {
    /// Creates a new menu with default styling and half-second transitions
    pub fn new(title: impl Into<String>, entries: Vec<MenuEntry<A>>) -> Self {
        Self::with_style(title, entries, MenuStyle::default())
    }

    pub fn with_style(title: impl Into<String>, entries: Vec<MenuEntry<A>>, style: MenuStyle) -> Self {
        MenuScreen {
            title: title.into(),
            entries,
            selected_index: 0,
            style,
            transition: Transition::new(0.5, 0.5),
            viewport_width: VIEWPORT_WIDTH,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[MenuEntry<A>] {
        &self.entries
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut MenuEntry<A>> {
        self.entries.get_mut(index)
    }

    /// Currently selected index, `None` for an empty menu
    #[cfg(test)]
    pub fn selected_index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.selected_index)
        }
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    /// Move selection up (wraps to bottom)
    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.entries.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection down (wraps to top)
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.entries.len();
    }

    /// Hit area: full width, entry height plus padding above and below
    pub fn entry_hit_bounds(&self, index: usize) -> Option<Rect> {
        let entry = self.entries.get(index)?;
        let (_, height) = entry.size(self.style.entry_scale);
        let padding = self.style.entry_padding;

        Some(Rect::new(
            0,
            entry.position().y as i32 - padding as i32,
            self.viewport_width,
            height + padding * 2,
        ))
    }

    /// Centers each entry, stacking them down from `first_entry_y`
    pub fn update_entry_locations(&mut self) {
        let slide = transition_slide(
            self.transition.position(),
            self.transition.state() == ScreenState::TransitionOn,
        );
        let mut y = self.style.first_entry_y;

        for entry in self.entries.iter_mut() {
            let (width, height) = entry.size(self.style.entry_scale);
            let x = self.viewport_width as f32 / 2.0 - width as f32 / 2.0 + slide;

            entry.set_position(Vec2::new(x, y));
            y += (height + self.style.entry_padding * 2) as f32;
        }
    }

    pub fn update(&mut self, elapsed: f32, other_screen_has_focus: bool, covered: bool) {
        self.transition.update(elapsed, other_screen_has_focus, covered);
        self.update_entry_locations();

        let active = self.transition.is_active();
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.update(active && i == self.selected_index, elapsed);
        }
    }

    /// Applies navigation and returns what was chosen this frame
    pub fn process_input(&mut self, input: &[MenuInput]) -> Vec<MenuEvent<A>> {
        let mut events = Vec::new();

        for event in input {
            match *event {
                MenuInput::Up => self.select_previous(),
                MenuInput::Down => self.select_next(),
                MenuInput::Accept => {
                    if let Some(entry) = self.entries.get(self.selected_index) {
                        events.push(MenuEvent::Selected(entry.select(PlayerIndex::One)));
                    }
                }
                MenuInput::Back => events.push(MenuEvent::Cancelled(PlayerIndex::One)),
                MenuInput::Tap { x, y } => {
                    for i in 0..self.entries.len() {
                        let hit = self
                            .entry_hit_bounds(i)
                            .is_some_and(|bounds| bounds.contains_point((x, y)));
                        if hit {
                            self.selected_index = i;
                            events.push(MenuEvent::Selected(self.entries[i].select(PlayerIndex::One)));
                        }
                    }
                }
                MenuInput::Drag { .. } | MenuInput::DragComplete => {}
            }
        }

        events
    }

    pub fn draw(&mut self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        self.viewport_width = batch.viewport().0;
        self.update_entry_locations();

        let alpha = self.transition.alpha();
        for entry in &self.entries {
            entry.draw(
                batch,
                self.style.item_color,
                self.style.selected_item_color,
                self.style.entry_scale,
                alpha,
            )?;
        }

        draw_title(
            batch,
            &self.title,
            self.style.title_y,
            self.style.title_scale,
            self.style.title_color,
            &self.transition,
        )
    }
}

/// Draws a title centered horizontally on `center_y`
///
/// The title rises and fades out as the screen transitions off.
pub fn draw_title(
    batch: &mut dyn RenderBatch,
    title: &str,
    center_y: f32,
    scale: u32,
    color: Color,
    transition: &Transition,
) -> Result<(), String> {
    let (viewport_width, _) = batch.viewport();
    let (width, height) = measure_text(title, scale);
    let offset = transition.position().powi(2);

    let x = viewport_width as i32 / 2 - width as i32 / 2;
    let y = center_y - height as f32 / 2.0 - offset * 100.0;

    batch.draw_text(title, x, y as i32, with_alpha(color, transition.alpha()), scale)
}
