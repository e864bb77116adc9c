//! Application state and input handling for fyle.
//!
//! This module holds the navigation and interaction state machine:
//! - [state]: [AppState], the controller that owns everything below.
//! - [nav]: current directory, listing and selection.
//! - [selection]: per-directory selection memory.
//! - [search]: incremental substring search over a listing.
//! - [actions]: input modes and the line editor.
//! - [handlers]: key handling for Normal mode actions and the input modes.
//! - [keymap]: Normal mode key bindings.
//! - [sink]: the [PresentationSink] trait the state reports to.
//! - [tap]: double-tap detection for list rows.

pub mod actions;
pub mod handlers;
pub mod keymap;
pub mod nav;
pub mod search;
pub mod selection;
pub mod sink;
pub mod state;
pub mod tap;

pub use actions::{ActionContext, ActionMode, InputMode, LineEditor};
pub use keymap::{Action, Keymap, ModeAction, NavAction};
pub use nav::NavState;
pub use selection::SelectionCache;
pub use sink::PresentationSink;
pub use state::{AppState, KeypressResult};
pub use tap::{Clock, SystemClock, Tap, TapDetector};
