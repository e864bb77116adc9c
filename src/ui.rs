//! Terminal front-end for fyle.
//!
//! - [render]: draws the header, listing and input/status line with ratatui.
//! - [sink]: [TerminalSink], the presentation sink the terminal loop hands to [AppState](crate::app::AppState).

pub mod render;
pub mod sink;

pub use render::render;
pub use sink::{ListView, StatusMessage, TerminalSink};
