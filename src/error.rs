use std::fmt;

/// Errors that can occur while loading or running the menu screens
#[derive(Debug)]
pub enum MenuError {
    /// An image asset could not be loaded
    Asset { name: String, reason: String },

    /// SDL2 rendering call failed
    Render(String),

    /// Reading a configuration file failed
    Io(std::io::Error),

    /// Configuration file is not valid JSON for the expected shape
    Config(serde_json::Error),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MenuError::Asset { name, reason } => {
                write!(f, "Failed to load asset '{}': {}", name, reason)
            }
            MenuError::Render(msg) => write!(f, "Render error: {}", msg),
            MenuError::Io(e) => write!(f, "IO error: {}", e),
            MenuError::Config(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for MenuError {}

impl From<std::io::Error> for MenuError {
    fn from(err: std::io::Error) -> Self {
        MenuError::Io(err)
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::Config(err)
    }
}

// SDL2 reports failures as plain strings
impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::Render(msg)
    }
}

impl From<MenuError> for String {
    fn from(error: MenuError) -> Self {
        error.to_string()
    }
}
