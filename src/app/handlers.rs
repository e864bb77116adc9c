//! Input action handler methods for fyle.
//!
//! This module implements [AppState] methods that process Normal mode actions and
//! key events for the input modes (command, search, rename).

use crate::app::actions::{InputMode, LineEditor};
use crate::app::keymap::{ModeAction, NavAction};
use crate::app::sink::PresentationSink;
use crate::app::state::{AppState, KeypressResult};
use crate::app::tap::Clock;
use crate::core::FsProvider;

use crossterm::event::{KeyCode::*, KeyEvent, KeyModifiers};

/// AppState input and action handlers
impl<'a, P, S, C> AppState<'a, P, S, C>
where
    P: FsProvider,
    S: PresentationSink,
    C: Clock,
{
    // AppState core handlers

    /// Handles key events when in an input mode.
    /// Returns a [KeypressResult] indicating how the key event was handled.
    ///
    /// If not in an input mode, returns [KeypressResult::Continue].
    /// Every other key is consumed so it never reaches the Normal mode keymap.
    pub(super) fn handle_input_mode(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(mode) = self.actions.input_mode() else {
            return KeypressResult::Continue;
        };

        match key.code {
            Enter => {
                let result = match mode {
                    InputMode::Command => self.submit_command(),
                    InputMode::Search => {
                        self.submit_search();
                        KeypressResult::Consumed
                    }
                    InputMode::Rename => {
                        self.submit_rename();
                        KeypressResult::Consumed
                    }
                };
                self.exit_input_mode();
                result
            }

            Esc => {
                self.exit_input_mode();
                KeypressResult::Consumed
            }

            Left => self.edit(|ed| {
                ed.move_left();
                false
            }),
            Right => self.edit(|ed| {
                ed.move_right();
                false
            }),
            Home => self.edit(|ed| {
                ed.home();
                false
            }),
            End => self.edit(|ed| {
                ed.end();
                false
            }),

            Backspace => {
                let result = self.edit(LineEditor::backspace);
                // deleting the ':' or '/' prompt closes the line, as in vim
                if matches!(mode, InputMode::Command | InputMode::Search)
                    && self.actions.editor().is_some_and(LineEditor::is_empty)
                {
                    self.exit_input_mode();
                }
                result
            }
            Delete => self.edit(LineEditor::delete),

            Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.edit(|ed| {
                    ed.insert(c);
                    true
                })
            }

            _ => KeypressResult::Consumed,
        }
    }

    /// Handles navigation actions (up, down, into dir, etc).
    /// Returns a [KeypressResult] indicating how the action was handled.
    pub(super) fn handle_nav_action(&mut self, action: NavAction) -> KeypressResult {
        match action {
            NavAction::GoDown => {
                self.increment_selection();
            }
            NavAction::GoUp => {
                self.decrement_selection();
            }
            NavAction::Enter => {
                let res = self.enter();
                self.report(res);
            }
            NavAction::GoParent => {
                let res = self.go_up();
                self.report(res);
            }
            NavAction::SearchNext => {
                let term = self.actions.last_search().to_string();
                self.search(&term, true);
            }
        }
        KeypressResult::Consumed
    }

    /// Handles the actions that open an input line.
    pub(super) fn handle_mode_action(&mut self, action: ModeAction) -> KeypressResult {
        match action {
            ModeAction::Command => self.prompt_command(),
            ModeAction::Search => self.prompt_search(),
            ModeAction::Rename => self.prompt_rename(),
        }
        KeypressResult::Consumed
    }

    /// Enters an input mode with the given editor and notifies the sink.
    pub(crate) fn enter_input_mode(&mut self, mode: InputMode, editor: LineEditor) {
        self.actions.enter_mode(mode, editor);
        self.sink.on_mode_changed(self.actions.mode());
    }

    // Handlers

    /// Applies `f` to the active line editor.
    ///
    /// `f` returns whether the buffer text changed; in search mode a change re-runs
    /// the search as you type.
    fn edit<F>(&mut self, f: F) -> KeypressResult
    where
        F: FnOnce(&mut LineEditor) -> bool,
    {
        let Some(editor) = self.actions.editor_mut() else {
            return KeypressResult::Continue;
        };

        if f(editor) && self.actions.input_mode() == Some(InputMode::Search) {
            let term = self.search_term();
            self.search(&term, false);
        }
        self.sink.on_mode_changed(self.actions.mode());
        KeypressResult::Consumed
    }

    /// The search term in the input line, without the leading `/`.
    fn search_term(&self) -> String {
        let text = self.actions.editor().map(LineEditor::text).unwrap_or_default();
        text.strip_prefix('/').unwrap_or(text).to_string()
    }

    /// Exits the current input mode and notifies the sink.
    fn exit_input_mode(&mut self) {
        self.actions.exit_mode();
        self.sink.on_mode_changed(self.actions.mode());
    }

    // Submit functions

    /// Runs the command line.
    ///
    /// The first whitespace separated token of the line, prompt included, picks the
    /// command. `:q` and `:quit` quit. `:cd` and `:cwd` are accepted without doing
    /// anything; everything else is ignored.
    fn submit_command(&mut self) -> KeypressResult {
        let text = self.actions.editor().map(LineEditor::text).unwrap_or_default();

        match text.split_whitespace().next() {
            Some(":q" | ":quit") => KeypressResult::Quit,
            Some(cmd @ (":cd" | ":cwd")) => {
                tracing::debug!(command = cmd, "directory commands take no action");
                KeypressResult::Consumed
            }
            Some(other) => {
                tracing::debug!(command = other, "unknown command");
                KeypressResult::Consumed
            }
            None => KeypressResult::Consumed,
        }
    }

    /// Commits the term in the search line as the one `n` repeats.
    fn submit_search(&mut self) {
        let term = self.search_term();
        self.actions.set_last_search(term);
    }

    /// Renames the selected entry to the text in the input line.
    ///
    /// The directory is reloaded afterwards whether or not the rename succeeded.
    fn submit_rename(&mut self) {
        if let Some(index) = self.nav.selected_idx() {
            let new_name = self
                .actions
                .editor()
                .map(|ed| ed.text().to_string())
                .unwrap_or_default();
            let res = self.rename_entry(index, &new_name);
            self.report(res);
        }

        let res = self.reload();
        self.report(res);
    }

    // Prompt functions

    /// Opens the command line with the `:` prompt.
    fn prompt_command(&mut self) {
        self.enter_input_mode(InputMode::Command, LineEditor::new(":"));
    }

    /// Opens the search line with the previous term selected, so typing replaces it.
    fn prompt_search(&mut self) {
        let text = format!("/{}", self.actions.last_search());
        let len = text.len();
        self.enter_input_mode(InputMode::Search, LineEditor::with_selection(text, 1, len, 1));
    }

    /// Opens the rename line for the selected entry with the base name selected.
    /// Does nothing without a selection.
    fn prompt_rename(&mut self) {
        let Some(entry) = self.nav.selected_entry() else {
            return;
        };

        let name = entry.name_str().into_owned();
        let end = rename_selection_end(&name);
        self.enter_input_mode(InputMode::Rename, LineEditor::with_selection(name, 0, end, end));
    }
}

/// End of the part of `name` the rename line pre-selects: everything before the final
/// `.`, or the whole name when there is no extension to keep (`Makefile`, `.bashrc`).
pub(crate) fn rename_selection_end(name: &str) -> usize {
    match name.rfind('.') {
        Some(0) | None => name.len(),
        Some(idx) => idx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_selection_covers_base_name() {
        assert_eq!(rename_selection_end("report.txt"), 6);
        assert_eq!(rename_selection_end("archive.tar.gz"), 11);
        assert_eq!(rename_selection_end("Makefile"), 8);
        assert_eq!(rename_selection_end(".bashrc"), 7);
        assert_eq!(rename_selection_end("trailing."), 8);
    }
}
