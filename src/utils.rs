//! Miscellaneous utility functions for fyle.
//!
//! - [helpers]: color parsing, the default-app opener and home path handling.
//! - [cli]: command-line flags for the `fy` binary.

pub mod cli;
pub mod helpers;

pub use helpers::{
    expand_home_path, normalize_path, open_with_default_app, parse_color, resolve_initial_dir,
    shorten_home_path,
};
