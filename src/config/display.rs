//! Display configuration options for fyle
//!
//! This module defines the `[display]` table of fyle.toml: the selection icon, the
//! directory marker and the few colours the terminal front-end uses.

use crate::utils::parse_color;

use ratatui::style::{Color, Style};
use serde::Deserialize;

/// Display configuration options
///
/// Colours are given per element as `fg`/`bg` pairs, e.g.
/// ```toml
/// [display.selection]
/// fg = "black"
/// bg = "#88c0d0"
/// ```
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Display {
    selection_icon: String,
    dir_marker: bool,
    selection: ColorPair,
    entry: ColorPair,
    directory: ColorPair,
    path: ColorPair,
    status_line: ColorPair,
}

/// Public methods for accessing display configuration options
impl Display {
    pub fn selection_icon(&self) -> &str {
        &self.selection_icon
    }

    pub fn dir_marker(&self) -> bool {
        self.dir_marker
    }

    pub fn selection(&self) -> &ColorPair {
        &self.selection
    }

    pub fn entry(&self) -> &ColorPair {
        &self.entry
    }

    pub fn directory(&self) -> &ColorPair {
        &self.directory
    }

    pub fn path(&self) -> &ColorPair {
        &self.path
    }

    pub fn status_line(&self) -> &ColorPair {
        &self.status_line
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            selection_icon: "> ".into(),
            dir_marker: true,
            selection: ColorPair {
                bg: Color::DarkGray,
                ..ColorPair::default()
            },
            entry: ColorPair::default(),
            directory: ColorPair {
                fg: Color::Blue,
                ..ColorPair::default()
            },
            path: ColorPair {
                fg: Color::Magenta,
                ..ColorPair::default()
            },
            status_line: ColorPair::default(),
        }
    }
}

/// ColorPair struct to hold foreground and background colors.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default, deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default, deserialize_with = "deserialize_color_field")]
    bg: Color,
}

/// Sets both foreground and background to Color::Reset
impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    #[inline]
    pub fn fg(&self) -> Color {
        self.fg
    }

    #[inline]
    pub fn bg(&self) -> Color {
        self.bg
    }

    /// Resolves the ColorPair by replacing Reset colors with those from another ColorPair.
    pub fn resolve(&self, other: &ColorPair) -> Self {
        Self {
            fg: if self.fg == Color::Reset {
                other.fg
            } else {
                self.fg
            },
            bg: if self.bg == Color::Reset {
                other.bg
            } else {
                self.bg
            },
        }
    }

    pub fn style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Converts the ColorPair to a Style, falling back to `fallback` for Reset colors.
    pub fn style_or(&self, fallback: &ColorPair) -> Style {
        self.resolve(fallback).style()
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
