//! The main config loading module for fyle.
//!
//! Handles loading and deserializing settings from `fyle.toml`.
//!
//! Provides and manages the main [Config] struct, as well as the internal [RawConfig] used for parsing and processing.
//!
//! Also implements default config initialization when `fyle.toml` is not present.

use crate::config::{Display, General, InternalGeneral, Keys};

use serde::Deserialize;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Raw configuration as read from the toml file
/// This struct is deserialized directly from the toml file.
/// It uses owned types and is then converted into the main [Config] struct.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    keys: Keys,
}

/// Main configuration struct for fyle
/// This struct holds the processed configuration options used by fyle.
#[derive(Debug)]
pub struct Config {
    general: InternalGeneral,
    display: Display,
    keys: Keys,
}

/// Conversion from RawConfig to Config
/// This handles any necessary processing of the raw values
impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: InternalGeneral::from(raw.general),
            display: raw.display,
            keys: raw.keys,
        }
    }
}

/// Public methods for loading and accessing the configuration
impl Config {
    /// Load configuration from the default path
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by entry point to load config at startup.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`, falling back to the defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!(
                path = %path.display(),
                "no config file found, using internal defaults (run 'fy --init' to generate one)"
            );
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "config loaded");
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "error parsing config");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read config");
                Self::default()
            }
        }
    }

    /// Parses the contents of a config file.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(content).map(Config::from)
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &InternalGeneral {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the FYLE_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/fyle/fyle.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("FYLE_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("fyle/fyle.toml");
        }

        if let Some(home) = dirs::home_dir() {
            return home.join(".config/fyle/fyle.toml");
        }
        PathBuf::from("fyle.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)?;
        Ok(())
    }
}

/// Default configuration options
impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}

const DEFAULT_TOML: &str = r##"# fyle.toml - default configuration for fyle

# Note:
# Commented values are the internal defaults of fyle
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

[general]
# show_hidden = false
# double_tap_ms = 300

[display]
# selection_icon = "> "
# dir_marker = true

# [display.selection]
# fg = "default"
# bg = "darkgray"

# [display.entry]
# fg = "default"
# bg = "default"

# [display.directory]
# fg = "blue"
# bg = "default"

# [display.path]
# fg = "magenta"
# bg = "default"

# [display.status_line]
# fg = "default"
# bg = "default"

# [keys]
# go_down = ["j", "Down"]
# go_up = ["k", "Up"]
# enter = ["l", "Enter"]
# go_parent = ["h", "Backspace"]
# command = [":"]
# rename = ["r", "F2"]
# search = ["/"]
# search_next = ["n"]
"##;
