//! [PresentationSink] for the terminal front-end.
//!
//! Keeps what the renderer needs between frames: the status message and the
//! listing's scroll state and position on screen.

use crate::app::actions::ActionMode;
use crate::app::sink::PresentationSink;
use crate::core::DirectorySnapshot;
use crate::error::Error;
use crate::utils::open_with_default_app;

use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;

use std::io;
use std::path::Path;

/// A one-line message for the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    is_error: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

/// Where the listing was last drawn and how far it was scrolled.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    area: Rect,
    state: ListState,
}

impl ListView {
    pub fn new(area: Rect, state: ListState) -> Self {
        Self { area, state }
    }

    /// Maps a screen cell to the listing row drawn there.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        Some(self.state.offset() + usize::from(row - self.area.y))
    }
}

#[derive(Debug, Default)]
pub struct TerminalSink {
    status: Option<StatusMessage>,
    view: ListView,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    #[inline]
    pub fn list_state(&self) -> &ListState {
        &self.view.state
    }

    pub fn set_list_view(&mut self, view: ListView) {
        self.view = view;
    }

    /// The listing index under a mouse position. May be past the last entry.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.view.row_at(column, row)
    }
}

impl PresentationSink for TerminalSink {
    fn on_directory_changed(&mut self, _snapshot: &DirectorySnapshot) {
        // scroll offsets belong to the previous listing
        self.view.state = ListState::default();
    }

    fn on_mode_changed(&mut self, mode: &ActionMode) {
        if matches!(mode, ActionMode::Input { .. }) {
            self.status = None;
        }
    }

    fn on_error(&mut self, error: &Error) {
        self.status = Some(StatusMessage::error(error.to_string()));
    }

    fn open_path(&mut self, path: &Path) -> io::Result<()> {
        open_with_default_app(path)?;
        let name = path.file_name().unwrap_or(path.as_os_str());
        self.set_status(StatusMessage::info(format!(
            "Opened {}",
            name.to_string_lossy()
        )));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavError;

    #[test]
    fn row_at_accounts_for_area_and_offset() {
        let mut state = ListState::default();
        *state.offset_mut() = 5;
        let view = ListView::new(Rect::new(0, 1, 40, 10), state);

        assert_eq!(view.row_at(3, 1), Some(5));
        assert_eq!(view.row_at(3, 4), Some(8));
        assert_eq!(view.row_at(3, 0), None, "header row");
        assert_eq!(view.row_at(3, 11), None, "footer row");
        assert_eq!(view.row_at(40, 2), None);
    }

    #[test]
    fn errors_show_until_an_input_line_opens() {
        let mut sink = TerminalSink::new();
        sink.on_error(&Error::from(NavError::NoSelection));
        assert_eq!(sink.status().map(StatusMessage::is_error), Some(true));

        sink.on_directory_changed(&DirectorySnapshot::default());
        assert!(sink.status().is_some(), "a reload keeps the error visible");

        sink.on_mode_changed(&ActionMode::Normal);
        assert!(sink.status().is_some());

        sink.on_mode_changed(&ActionMode::Input {
            mode: crate::app::InputMode::Command,
            label: "Command".into(),
            editor: crate::app::LineEditor::new(":"),
        });
        assert!(sink.status().is_none());
    }
}
