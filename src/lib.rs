//! Internal library crate for fyle.
//!
//! The shipped application is the `fy` binary (`src/main.rs`).
//!
//! The browsing core ([app] and [core]) talks to the outside world only through the
//! [FsProvider](core::FsProvider) and [PresentationSink](app::PresentationSink) traits,
//! so it can be driven by the terminal front-end in [ui] or by in-memory fakes in tests.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod ui;
pub mod utils;

pub use error::{Error, Result};
