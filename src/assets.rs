//! Image asset loading
//!
//! Screens never hold SDL2 textures directly. They ask an [`AssetLoader`] for
//! an [`ImageHandle`] during `load_content` and pass the handle back to the
//! render batch when drawing. The SDL2-backed loader is [`TextureCache`].

use crate::error::MenuError;
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::collections::HashMap;
use std::path::PathBuf;

/// A loaded image: cache slot plus its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHandle {
    pub id: usize,
    pub width: u32,
    pub height: u32,
}

/// Source of image handles for screens
pub trait AssetLoader {
    /// Loads the named image, e.g. `"level_select/gold"`
    ///
    /// Loading the same name twice returns the same handle.
    fn load(&mut self, name: &str) -> Result<ImageHandle, MenuError>;
}

/// SDL2 texture cache rooted at an asset directory
///
/// Asset names map to `<root>/<name>.png`.
pub struct TextureCache<'a> {
    texture_creator: &'a TextureCreator<WindowContext>,
    root: PathBuf,
    textures: Vec<Texture<'a>>,
    by_name: HashMap<String, ImageHandle>,
}

impl<'a> TextureCache<'a> {
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>, root: impl Into<PathBuf>) -> Self {
        TextureCache {
            texture_creator,
            root: root.into(),
            textures: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Mutable access for drawing (alpha modulation needs `&mut Texture`)
    pub fn texture_mut(&mut self, handle: &ImageHandle) -> Option<&mut Texture<'a>> {
        self.textures.get_mut(handle.id)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}

impl AssetLoader for TextureCache<'_> {
    fn load(&mut self, name: &str) -> Result<ImageHandle, MenuError> {
        if let Some(handle) = self.by_name.get(name) {
            return Ok(*handle);
        }

        let path = self.root.join(format!("{}.png", name));
        let texture = self
            .texture_creator
            .load_texture(&path)
            .map_err(|reason| MenuError::Asset {
                name: name.to_string(),
                reason,
            })?;

        let query = texture.query();
        let handle = ImageHandle {
            id: self.textures.len(),
            width: query.width,
            height: query.height,
        };

        log::debug!("Loaded {} ({}x{})", path.display(), handle.width, handle.height);

        self.textures.push(texture);
        self.by_name.insert(name.to_string(), handle);
        Ok(handle)
    }
}

/// In-memory loader for tests: every name resolves to a fixed size
#[cfg(test)]
pub struct FakeAssets {
    pub sizes: HashMap<String, (u32, u32)>,
    pub default_size: (u32, u32),
    pub loaded: Vec<String>,
}

#[cfg(test)]
impl FakeAssets {
    pub fn new() -> Self {
        FakeAssets {
            sizes: HashMap::new(),
            default_size: (64, 64),
            loaded: Vec::new(),
        }
    }

    pub fn with_size(mut self, name: &str, width: u32, height: u32) -> Self {
        self.sizes.insert(name.to_string(), (width, height));
        self
    }
}

#[cfg(test)]
impl AssetLoader for FakeAssets {
    fn load(&mut self, name: &str) -> Result<ImageHandle, MenuError> {
        if name.is_empty() {
            return Err(MenuError::Asset {
                name: name.to_string(),
                reason: "empty asset name".to_string(),
            });
        }

        let (width, height) = self.sizes.get(name).copied().unwrap_or(self.default_size);
        let id = match self.loaded.iter().position(|n| n == name) {
            Some(id) => id,
            None => {
                self.loaded.push(name.to_string());
                self.loaded.len() - 1
            }
        };

        Ok(ImageHandle { id, width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_assets_reuse_handles() {
        let mut assets = FakeAssets::new().with_size("level_select/gold", 32, 16);

        let gold = assets.load("level_select/gold").unwrap();
        let icon = assets.load("level_select/level_icon").unwrap();
        let gold_again = assets.load("level_select/gold").unwrap();

        assert_eq!(gold, gold_again);
        assert_eq!((gold.width, gold.height), (32, 16));
        assert_eq!((icon.width, icon.height), (64, 64));
        assert_ne!(gold.id, icon.id);
    }

    #[test]
    fn test_fake_assets_reject_empty_name() {
        let mut assets = FakeAssets::new();
        assert!(assets.load("").is_err());
    }
}
