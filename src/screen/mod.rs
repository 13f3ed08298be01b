//! Screen stack
//!
//! A screen is one layer of UI: a background image, a menu, the level grid or
//! the gameplay view. Screens live on a stack owned by the [`ScreenManager`].
//! They never touch the stack directly; navigation goes through the
//! [`ScreenStack`] trait and is applied by the manager between frames.
//!
//! # Frame order
//!
//! 1. `update` every screen, top to bottom
//! 2. `handle_input` on the topmost screen that is transitioning on or active
//! 3. Remove screens that finished transitioning off
//! 4. Apply queued navigation requests
//! 5. `draw` every visible screen, bottom to top

pub mod manager;
pub mod transition;

pub use manager::ScreenManager;
pub use transition::{ScreenState, Transition};

use crate::assets::AssetLoader;
use crate::error::MenuError;
use crate::input_system::MenuInput;
use crate::level::LevelId;
use crate::render::RenderBatch;

/// Logical resolution all layout is expressed in
pub const VIEWPORT_WIDTH: u32 = 800;
pub const VIEWPORT_HEIGHT: u32 = 480;

pub const MAIN_MENU_BACKGROUND: &str = "backgrounds/main_menu";
pub const LEVEL_SELECT_BACKGROUND: &str = "backgrounds/level_select";

/// Which player produced an input
///
/// Pointer gestures and the keyboard carry no player, so every input is
/// attributed to `One`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerIndex {
    One,
}

/// Description of a screen to create
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenKind {
    /// Full-screen image, asset name
    Background(String),
    MainMenu,
    LevelSelector,
    Options,
    Gameplay(LevelId),
}

impl ScreenKind {
    pub fn background(asset: &str) -> Self {
        ScreenKind::Background(asset.to_string())
    }
}

/// Navigation service available to screens while handling input
pub trait ScreenStack {
    /// Adds a screen on top of the current ones
    fn push(&mut self, screen: ScreenKind, player: Option<PlayerIndex>);

    /// Transitions every current screen off, then shows `screens`
    ///
    /// With `show_loading` a loading message is drawn for one frame between
    /// the old screens leaving and the new ones loading.
    fn replace(&mut self, screens: Vec<ScreenKind>, show_loading: bool, player: Option<PlayerIndex>);

    /// Closes the game
    fn quit(&mut self);
}

/// A navigation request queued by a screen
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationRequest {
    Push {
        screen: ScreenKind,
        player: Option<PlayerIndex>,
    },
    Replace {
        screens: Vec<ScreenKind>,
        show_loading: bool,
        player: Option<PlayerIndex>,
    },
    Quit,
}

/// [`ScreenStack`] that records requests for the manager to apply later
#[derive(Debug, Default)]
pub struct NavigationQueue {
    requests: Vec<NavigationRequest>,
}

impl NavigationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn requests(&self) -> &[NavigationRequest] {
        &self.requests
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Takes all requests, leaving the queue empty
    pub fn take(&mut self) -> Vec<NavigationRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl ScreenStack for NavigationQueue {
    fn push(&mut self, screen: ScreenKind, player: Option<PlayerIndex>) {
        self.requests.push(NavigationRequest::Push { screen, player });
    }

    fn replace(&mut self, screens: Vec<ScreenKind>, show_loading: bool, player: Option<PlayerIndex>) {
        self.requests.push(NavigationRequest::Replace {
            screens,
            show_loading,
            player,
        });
    }

    fn quit(&mut self) {
        self.requests.push(NavigationRequest::Quit);
    }
}

/// One layer of the UI
pub trait Screen {
    /// Short name used in log messages
    fn name(&self) -> &str;

    /// Called once, when the screen is added to the stack
    fn load_content(&mut self, _assets: &mut dyn AssetLoader) -> Result<(), MenuError> {
        Ok(())
    }

    fn transition(&self) -> &Transition;

    fn transition_mut(&mut self) -> &mut Transition;

    /// Popups do not cover the screens beneath them
    fn is_popup(&self) -> bool {
        false
    }

    fn update(&mut self, elapsed: f32, other_screen_has_focus: bool, covered: bool) {
        self.transition_mut().update(elapsed, other_screen_has_focus, covered);
    }

    /// Only called on the screen that currently has focus
    fn handle_input(&mut self, input: &[MenuInput], screens: &mut dyn ScreenStack);

    fn draw(&mut self, batch: &mut dyn RenderBatch) -> Result<(), String>;

    /// Starts transitioning off; the manager removes the screen once it is off
    fn exit_screen(&mut self) {
        self.transition_mut().exit();
    }
}
