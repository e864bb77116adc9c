//! The general configuration settings for fyle.
//!
//! This module defines the [General] struct for deserializing the `[general]` table
//! of fyle.toml and the [InternalGeneral] struct used at runtime.

use crate::app::tap::DOUBLE_TAP_WINDOW;

use serde::Deserialize;
use std::time::Duration;

/// Shortest accepted double-tap window in milliseconds.
pub const MIN_DOUBLE_TAP_MS: u64 = 50;
/// Longest accepted double-tap window in milliseconds.
pub const MAX_DOUBLE_TAP_MS: u64 = 2000;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
    double_tap_ms: u64,
}

impl Default for General {
    fn default() -> Self {
        General {
            show_hidden: false,
            double_tap_ms: DOUBLE_TAP_WINDOW.as_millis() as u64,
        }
    }
}

#[derive(Debug)]
pub struct InternalGeneral {
    show_hidden: bool,
    double_tap: Duration,
}

impl From<General> for InternalGeneral {
    fn from(g: General) -> Self {
        Self {
            show_hidden: g.show_hidden,
            double_tap: Duration::from_millis(clamp_double_tap(g.double_tap_ms)),
        }
    }
}

impl InternalGeneral {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn double_tap(&self) -> Duration {
        self.double_tap
    }
}

/// Clamps the double-tap window into a usable range.
fn clamp_double_tap(value: u64) -> u64 {
    let clamped = value.clamp(MIN_DOUBLE_TAP_MS, MAX_DOUBLE_TAP_MS);
    if clamped != value {
        tracing::warn!(
            value,
            min = MIN_DOUBLE_TAP_MS,
            max = MAX_DOUBLE_TAP_MS,
            clamped,
            "double_tap_ms out of range"
        );
    }
    clamped
}
