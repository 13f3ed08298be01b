//! Menu Screens
//!
//! Every screen the player navigates between, built on the [`Screen`] trait
//! from [`crate::screen`].
//!
//! # Building blocks
//!
//! - [`grid`] - Index to cell/pixel mapping for the level grid
//! - [`menu_entry`] - Text entry with selection fade
//! - [`menu`] - Reusable vertical menu ([`MenuScreen`](menu::MenuScreen))
//! - [`level_entry`] - Level name, icon and badge in one grid cell
//!
//! # Screens
//!
//! - [`MainMenuScreen`] - Play / Select Level / Options
//! - [`OptionsMenuScreen`] - Difficulty setting, pushed over the main menu
//! - [`LevelSelectorScreen`] - Grid of levels from the catalog
//! - [`BackgroundScreen`] - Full-screen image behind a menu
//! - [`GameplayScreen`] - Destination of a level selection
//!
//! # Example Usage
//!
//! ```ignore
//! use crate::gui::menu::{MenuEvent, MenuScreen};
//! use crate::gui::menu_entry::MenuEntry;
//!
//! let mut menu = MenuScreen::new("Pause", vec![
//!     MenuEntry::new("Resume", PauseOption::Resume),
//!     MenuEntry::new("Quit", PauseOption::Quit),
//! ]);
//!
//! menu.update(elapsed, false, false);
//! for event in menu.process_input(&input) {
//!     if let MenuEvent::Selected(selection) = event { /* ... */ }
//! }
//! menu.draw(&mut batch)?;
//! ```
//!
//! [`Screen`]: crate::screen::Screen

pub mod background;
pub mod gameplay;
pub mod grid;
pub mod level_entry;
pub mod level_selector;
pub mod main_menu;
pub mod menu;
pub mod menu_entry;
pub mod options_menu;

pub use background::BackgroundScreen;
pub use gameplay::GameplayScreen;
pub use level_selector::LevelSelectorScreen;
pub use main_menu::MainMenuScreen;
pub use options_menu::OptionsMenuScreen;
