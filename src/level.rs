//! Level catalog
//!
//! The level selector is driven by a data table instead of per-level code.
//! Each [`LevelDefinition`] names the level, its icon and the badge earned so
//! far. The catalog is read from JSON and falls back to the built-in table.

use crate::error::MenuError;
use crate::gui::grid::GridLayout;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit catalog file
pub const CATALOG_ENV_VAR: &str = "LEVEL_SELECT_CATALOG";

/// Catalog shipped next to the binary's assets
pub const BUNDLED_CATALOG: &str = "assets/config/levels.json";

const DEFAULT_ICON: &str = "level_select/level_icon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelId(pub u32);

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Achievement tier shown under a level icon, or the locked marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Badge {
    #[default]
    None,
    Bronze,
    Silver,
    Gold,
    Locked,
}

impl Badge {
    /// Image drawn under the level icon
    pub fn medal_asset(&self) -> &'static str {
        match self {
            Badge::None | Badge::Locked => "level_select/no_medal",
            Badge::Bronze => "level_select/bronze",
            Badge::Silver => "level_select/silver",
            Badge::Gold => "level_select/gold",
        }
    }

    /// Overlay drawn on top of the entry, only for locked levels
    pub fn overlay_asset(&self) -> Option<&'static str> {
        match self {
            Badge::Locked => Some("level_select/locked"),
            _ => None,
        }
    }

    pub fn is_locked(&self) -> bool {
        *self == Badge::Locked
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub id: LevelId,
    pub name: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub badge: Badge,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCatalog {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub layout: GridLayout,
    pub levels: Vec<LevelDefinition>,
}

fn default_title() -> String {
    "Select Level".to_string()
}

impl Default for LevelCatalog {
    /// Ten levels, the last four locked
    fn default() -> Self {
        let badges = [
            Badge::Bronze,
            Badge::Gold,
            Badge::Silver,
            Badge::None,
            Badge::Gold,
            Badge::Silver,
            Badge::Locked,
            Badge::Locked,
            Badge::Locked,
            Badge::Locked,
        ];

        let levels = badges
            .iter()
            .enumerate()
            .map(|(i, badge)| LevelDefinition {
                id: LevelId(i as u32 + 1),
                name: format!("Level {}", i + 1),
                icon: default_icon(),
                badge: *badge,
            })
            .collect();

        LevelCatalog {
            title: default_title(),
            layout: GridLayout::default(),
            levels,
        }
    }
}

impl LevelCatalog {
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Candidate catalog files, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(path) = std::env::var(CATALOG_ENV_VAR) {
            paths.push(PathBuf::from(path));
        }
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("level_select").join("levels.json"));
        }
        paths.push(PathBuf::from(BUNDLED_CATALOG));

        paths
    }

    /// Loads the first catalog file that exists, or the built-in table
    ///
    /// A file that exists but cannot be parsed is an error rather than
    /// silently replaced by the default.
    pub fn locate() -> Result<Self, MenuError> {
        Self::locate_in(&Self::search_paths())
    }

    pub fn locate_in(paths: &[PathBuf]) -> Result<Self, MenuError> {
        for path in paths {
            if path.is_file() {
                log::info!("Loading level catalog from {}", path.display());
                return Self::load_from_file(path);
            }
        }

        log::warn!("No level catalog found, using built-in levels");
        Ok(Self::default())
    }

    pub fn get(&self, id: LevelId) -> Option<&LevelDefinition> {
        self.levels.iter().find(|level| level.id == id)
    }

    /// First level the player can start, used by "Play Game"
    pub fn first_unlocked(&self) -> Option<&LevelDefinition> {
        self.levels.iter().find(|level| !level.badge.is_locked())
    }
}
