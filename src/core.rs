//! Core engine pieces for fyle, independent of any UI.
//!
//! - [fm]: [FileEntry], [DirectorySnapshot] and the [FsProvider] seam with its [LocalFs] implementation.
//! - [listing]: loading a directory through a provider and sorting it.
//! - [terminal]: terminal setup/teardown and the crossterm/ratatui event loop.

pub mod fm;
pub mod listing;
pub mod terminal;

pub use fm::{DirectorySnapshot, FileEntry, FsProvider, LocalFs};
pub use listing::{load_dir, sort_entries};
