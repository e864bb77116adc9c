//! Input mode state for fyle.
//!
//! Contains the [ActionContext] struct, which tracks the active [ActionMode] and the
//! last committed search term, and the [LineEditor] owned by every input mode.

/// Describes the current mode for key handling.
///
/// * `Normal` - Default browsing mode, single keys are commands.
/// * `Input` - A transient input line with its [InputMode], label and editor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ActionMode {
    #[default]
    Normal,
    Input {
        mode: InputMode,
        label: String,
        editor: LineEditor,
    },
}

/// The transient input modes reachable from Normal mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// `:` command line.
    Command,
    /// `/` incremental search.
    Search,
    /// Renaming the selected entry.
    Rename,
}

impl InputMode {
    pub fn label(self) -> &'static str {
        match self {
            InputMode::Command => "Command",
            InputMode::Search => "Search",
            InputMode::Rename => "Rename",
        }
    }
}

/// Single line text buffer with a cursor and an optional selected range.
///
/// Positions are byte offsets that always sit on char boundaries. Typing or deleting
/// while a range is selected replaces the whole range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineEditor {
    buffer: String,
    cursor: usize,
    anchor: Option<usize>,
}

impl LineEditor {
    /// Editor holding `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let buffer = text.into();
        let cursor = buffer.len();
        Self {
            buffer,
            cursor,
            anchor: None,
        }
    }

    /// Editor holding `text` with `start..end` selected and the cursor at `cursor`,
    /// which must be one of the two ends. Out-of-range positions are clamped.
    pub fn with_selection(text: impl Into<String>, start: usize, end: usize, cursor: usize) -> Self {
        let buffer = text.into();
        let clamp = |p: usize| floor_char_boundary(&buffer, p.min(buffer.len()));
        let (start, end, cursor) = (clamp(start), clamp(end), clamp(cursor));
        let anchor = if cursor == start { end } else { start };
        Self {
            buffer,
            cursor,
            anchor: (start != end).then_some(anchor),
        }
    }

    // Getters / accessors

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selected byte range, if any.
    pub fn selection(&self) -> Option<(usize, usize)> {
        let anchor = self.anchor?;
        let (start, end) = if anchor < self.cursor {
            (anchor, self.cursor)
        } else {
            (self.cursor, anchor)
        };
        (start != end).then_some((start, end))
    }

    pub fn selected_text(&self) -> &str {
        self.selection()
            .map(|(s, e)| &self.buffer[s..e])
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    // Editing

    /// Inserts a character at the cursor, replacing the selection if there is one.
    pub fn insert(&mut self, ch: char) {
        self.delete_selection();
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the selection or the character before the cursor.
    /// Returns `true` if the buffer changed.
    pub fn backspace(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor > 0
            && let Some((previous, _)) = self.buffer[..self.cursor].char_indices().next_back()
        {
            self.buffer.remove(previous);
            self.cursor = previous;
            return true;
        }
        false
    }

    /// Deletes the selection or the character at the cursor.
    /// Returns `true` if the buffer changed.
    pub fn delete(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
            return true;
        }
        false
    }

    pub fn move_left(&mut self) {
        if let Some((start, _)) = self.selection() {
            self.cursor = start;
        } else if let Some((previous, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = previous;
        }
        self.anchor = None;
    }

    pub fn move_right(&mut self) {
        if let Some((_, end)) = self.selection() {
            self.cursor = end;
        } else if let Some(ch) = self.buffer[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
        self.anchor = None;
    }

    pub fn home(&mut self) {
        self.cursor = 0;
        self.anchor = None;
    }

    pub fn end(&mut self) {
        self.cursor = self.buffer.len();
        self.anchor = None;
    }

    fn delete_selection(&mut self) -> bool {
        let Some((start, end)) = self.selection() else {
            self.anchor = None;
            return false;
        };
        self.buffer.replace_range(start..end, "");
        self.cursor = start;
        self.anchor = None;
        true
    }
}

fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Tracks the active mode and the search term that survives between searches.
#[derive(Debug, Default)]
pub struct ActionContext {
    mode: ActionMode,
    last_search: String,
}

impl ActionContext {
    // Getters / accessors

    pub fn mode(&self) -> &ActionMode {
        &self.mode
    }

    pub fn input_mode(&self) -> Option<InputMode> {
        match &self.mode {
            ActionMode::Input { mode, .. } => Some(*mode),
            ActionMode::Normal => None,
        }
    }

    pub fn editor(&self) -> Option<&LineEditor> {
        match &self.mode {
            ActionMode::Input { editor, .. } => Some(editor),
            ActionMode::Normal => None,
        }
    }

    pub fn editor_mut(&mut self) -> Option<&mut LineEditor> {
        match &mut self.mode {
            ActionMode::Input { editor, .. } => Some(editor),
            ActionMode::Normal => None,
        }
    }

    pub fn last_search(&self) -> &str {
        &self.last_search
    }

    pub fn set_last_search(&mut self, term: String) {
        self.last_search = term;
    }

    // Mode functions

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, ActionMode::Input { .. })
    }

    pub fn enter_mode(&mut self, mode: InputMode, editor: LineEditor) {
        self.mode = ActionMode::Input {
            mode,
            label: mode.label().to_string(),
            editor,
        };
    }

    /// Leaves any input mode, dropping the editor and its label.
    pub fn exit_mode(&mut self) {
        self.mode = ActionMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_replaces_selection() {
        let mut ed = LineEditor::with_selection("report.txt", 0, 6, 6);
        assert_eq!(ed.selected_text(), "report");
        ed.insert('n');
        ed.insert('o');
        assert_eq!(ed.text(), "no.txt");
        assert_eq!(ed.cursor(), 2);
        assert_eq!(ed.selection(), None);
    }

    #[test]
    fn backspace_removes_selection_then_chars() {
        let mut ed = LineEditor::with_selection("/old", 4, 1, 1);
        assert_eq!(ed.selected_text(), "old");
        assert!(ed.backspace());
        assert_eq!(ed.text(), "/");
        assert!(ed.backspace());
        assert_eq!(ed.text(), "");
        assert!(!ed.backspace());
    }

    #[test]
    fn cursor_moves_respect_multibyte_chars() {
        let mut ed = LineEditor::new("añb");
        ed.move_left();
        ed.move_left();
        assert_eq!(ed.cursor(), 1);
        ed.insert('x');
        assert_eq!(ed.text(), "axñb");
        ed.move_right();
        assert_eq!(ed.cursor(), 4);
        assert!(ed.delete());
        assert_eq!(ed.text(), "axñ");
    }

    #[test]
    fn arrows_collapse_selection() {
        let mut ed = LineEditor::with_selection("name.rs", 0, 4, 4);
        ed.move_left();
        assert_eq!(ed.cursor(), 0);
        assert_eq!(ed.selection(), None);

        let mut ed = LineEditor::with_selection("name.rs", 0, 4, 4);
        ed.move_right();
        assert_eq!(ed.cursor(), 4);
        ed.home();
        assert_eq!(ed.cursor(), 0);
        ed.end();
        assert_eq!(ed.cursor(), 7);
    }

    #[test]
    fn empty_selection_is_no_selection() {
        let ed = LineEditor::with_selection(".bashrc", 0, 0, 0);
        assert_eq!(ed.selection(), None);
        assert_eq!(ed.cursor(), 0);
    }

    #[test]
    fn context_enter_and_exit() {
        let mut ctx = ActionContext::default();
        assert!(!ctx.is_input_mode());
        ctx.enter_mode(InputMode::Command, LineEditor::new(":"));
        assert_eq!(ctx.input_mode(), Some(InputMode::Command));
        assert_eq!(ctx.editor().map(LineEditor::text), Some(":"));

        ctx.exit_mode();
        assert_eq!(ctx.mode(), &ActionMode::Normal);
        assert!(ctx.editor().is_none());
    }
}
