//! Configuration for fyle.
//!
//! - [load]: the [Config] root, file lookup and `--init` generation.
//! - [general]: `[general]` settings.
//! - [display]: `[display]` settings and colours.
//! - [input]: `[keys]` bindings.

pub mod display;
pub mod general;
pub mod input;
pub mod load;

pub use display::{ColorPair, Display};
pub use general::{General, InternalGeneral};
pub use input::Keys;
pub use load::{Config, RawConfig};
