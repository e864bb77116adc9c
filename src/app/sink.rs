//! The presentation side of the navigation core.

use crate::app::actions::ActionMode;
use crate::core::DirectorySnapshot;
use crate::error::Error;

use std::io;
use std::path::Path;

/// Receives state changes from [AppState](crate::app::AppState) and performs the
/// actions that belong to whatever is presenting it.
pub trait PresentationSink {
    /// A new listing was installed: directory change, rename or reload.
    fn on_directory_changed(&mut self, snapshot: &DirectorySnapshot);

    /// The input mode changed; the input line should be shown, hidden or updated.
    fn on_mode_changed(&mut self, mode: &ActionMode);

    /// A non-fatal error occurred while handling input.
    fn on_error(&mut self, error: &Error);

    /// Opens `path` with the platform's default application.
    fn open_path(&mut self, path: &Path) -> io::Result<()>;
}
