//! Application State and main controller module for fyle.
//!
//! This module defines the overall [AppState] struct, which owns everything the
//! browser needs while it runs:
//! - The configuration and the Normal mode keymap
//! - The navigation state (directory, listing, selection memory)
//! - The input mode context
//! - The filesystem provider and the presentation sink
//!
//! Directory traversal, selection, search and rename live here; key handling for
//! the input modes lives in [handlers](crate::app::handlers).

use crate::app::actions::ActionContext;
use crate::app::keymap::{Action, Keymap};
use crate::app::nav::NavState;
use crate::app::search::find_match;
use crate::app::sink::PresentationSink;
use crate::app::tap::{Clock, SystemClock, Tap, TapDetector};
use crate::config::Config;
use crate::core::{FsProvider, load_dir};
use crate::error::{NavError, Result};
use crate::utils::normalize_path;

use crossterm::event::KeyEvent;

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Enumeration for each individual keypress result processed.
///
/// `Continue` means the key was not handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    Consumed,
    Quit,
}

/// Main struct which holds the central application state of fyle.
///
/// Generic over the filesystem it browses, the sink it reports to and the clock
/// used for double-tap detection, so the whole state machine runs the same way
/// against the real filesystem and against in-memory fakes.
pub struct AppState<'a, P, S, C = SystemClock>
where
    P: FsProvider,
    S: PresentationSink,
    C: Clock,
{
    pub(super) config: &'a Config,
    pub(super) keymap: Keymap,

    pub(super) nav: NavState,
    pub(super) actions: ActionContext,
    pub(super) taps: TapDetector<C>,

    pub(super) fs: P,
    pub(super) sink: S,
}

impl<'a, P: FsProvider, S: PresentationSink> AppState<'a, P, S> {
    /// Starts in the home directory, or `/` if it cannot be resolved.
    pub fn new(config: &'a Config, fs: P, sink: S) -> Result<Self> {
        let start = fs.home_dir().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to /");
            PathBuf::from("/")
        });
        Self::from_dir(config, fs, sink, start)
    }

    pub fn from_dir(config: &'a Config, fs: P, sink: S, path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_clock(config, fs, sink, path, SystemClock)
    }
}

impl<'a, P, S, C> AppState<'a, P, S, C>
where
    P: FsProvider,
    S: PresentationSink,
    C: Clock,
{
    /// Builds the state at `path` with an explicit tap clock and loads the first listing.
    pub fn with_clock(
        config: &'a Config,
        fs: P,
        sink: S,
        path: impl Into<PathBuf>,
        clock: C,
    ) -> Result<Self> {
        let path = normalize_path(&path.into());
        let mut app = Self {
            config,
            keymap: Keymap::from_config(config),
            nav: NavState::new(path.clone()),
            actions: ActionContext::default(),
            taps: TapDetector::new(clock, config.general().double_tap()),
            fs,
            sink,
        };

        app.load_and_apply(path, None)?;
        Ok(app)
    }

    // Getters/ accessors

    #[inline]
    pub fn config(&self) -> &Config {
        self.config
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    #[inline]
    pub fn actions(&self) -> &ActionContext {
        &self.actions
    }

    #[inline]
    pub fn fs(&self) -> &P {
        &self.fs
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[inline]
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    #[inline]
    pub fn current_dir(&self) -> &Path {
        self.nav.current_dir()
    }

    #[inline]
    pub fn selected_idx(&self) -> Option<usize> {
        self.nav.selected_idx()
    }

    pub fn absolute_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.nav.absolute_path(name)
    }

    // Key dispatch

    /// Routes a key event to the active input mode or through the Normal mode keymap.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        if self.actions.is_input_mode() {
            return self.handle_input_mode(key);
        }

        if let Some(action) = self.keymap.lookup(key) {
            match action {
                Action::Nav(nav_act) => return self.handle_nav_action(nav_act),
                Action::Mode(mode_act) => return self.handle_mode_action(mode_act),
            }
        }

        KeypressResult::Continue
    }

    /// Handles a tap or click on the listing row `index`.
    ///
    /// A single tap selects the row; a double tap also enters it. Taps are ignored
    /// while an input line is open.
    pub fn handle_row_tap(&mut self, index: usize) -> Result<()> {
        if self.actions.is_input_mode() {
            return Ok(());
        }
        match self.taps.tap(index) {
            Tap::Single => self.select(index),
            Tap::Double => {
                self.select(index)?;
                self.enter()
            }
        }
    }

    // Navigation functions

    /// Changes into `target`.
    ///
    /// Absolute targets are used as given. Relative targets are resolved against the
    /// current directory and silently ignored when they do not exist. Either way `.`
    /// and `..` are folded away, so the stored directory is always a clean path.
    /// A load failure is returned and leaves the current listing untouched.
    pub fn change_directory(&mut self, target: impl AsRef<Path>) -> Result<()> {
        let target = target.as_ref();
        let path = if target.is_absolute() {
            normalize_path(target)
        } else {
            let joined = normalize_path(&self.nav.absolute_path(target));
            if !self.fs.exists(&joined) {
                tracing::debug!(path = %joined.display(), "ignoring missing relative target");
                return Ok(());
            }
            joined
        };
        self.load_and_apply(path, None)
    }

    /// Enters the selected directory or opens the selected file.
    /// Does nothing without a selection.
    pub fn enter(&mut self) -> Result<()> {
        let Some(entry) = self.nav.selected_entry() else {
            return Ok(());
        };

        let name = entry.name().to_os_string();
        if entry.is_dir() {
            return self.change_directory(&name);
        }

        let path = self.nav.absolute_path(&name);
        tracing::info!(path = %path.display(), "opening file");
        self.sink.open_path(&path)?;
        Ok(())
    }

    /// Moves to the parent directory and, unless a remembered selection was restored,
    /// focuses the directory that was just left. Does nothing at the root.
    pub fn go_up(&mut self) -> Result<()> {
        let current = self.nav.current_dir();
        let Some(parent) = current.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };

        let parent = parent.to_path_buf();
        let departed = current.file_name().map(OsStr::to_os_string);
        self.load_and_apply(parent, departed)
    }

    /// Reloads the current directory.
    pub fn reload(&mut self) -> Result<()> {
        let current = self.nav.current_dir().to_path_buf();
        self.load_and_apply(current, None)
    }

    /// Selects the entry at `index`.
    pub fn select(&mut self, index: usize) -> Result<()> {
        if self.nav.set_selected(Some(index)) {
            Ok(())
        } else {
            Err(NavError::InvalidIndex {
                index,
                len: self.nav.entries().len(),
            }
            .into())
        }
    }

    /// Selects the next entry, wrapping to the first.
    /// Returns `false` if the listing is empty.
    pub fn increment_selection(&mut self) -> bool {
        self.nav.move_down()
    }

    /// Selects the previous entry, wrapping to the last.
    /// Returns `false` if the listing is empty.
    pub fn decrement_selection(&mut self) -> bool {
        self.nav.move_up()
    }

    // Search and rename

    /// Runs a search for `term` over the current listing and moves the selection to
    /// the match. Returns `true` if the selection moved.
    pub fn search(&mut self, term: &str, find_next: bool) -> bool {
        match find_match(self.nav.entries(), self.nav.selected_idx(), term, find_next) {
            Some(idx) => self.nav.set_selected(Some(idx)),
            None => false,
        }
    }

    /// Renames the entry at `index` to `new_name` inside the current directory.
    ///
    /// `new_name` must be a plain file name; paths, `.` and `..` are rejected so an
    /// entry never leaves the directory. The listing is not reloaded here; the rename
    /// prompt reloads after every attempt.
    pub fn rename_entry(&mut self, index: usize, new_name: &str) -> Result<()> {
        let len = self.nav.entries().len();
        let entry = self
            .nav
            .snapshot()
            .get(index)
            .ok_or(NavError::InvalidIndex { index, len })?;

        if !is_plain_name(new_name) {
            return Err(NavError::InvalidName {
                name: new_name.to_string(),
            }
            .into());
        }

        let from = self.nav.absolute_path(entry.name());
        let to = self.nav.absolute_path(new_name);
        self.fs.rename(&from, &to)?;

        tracing::info!(from = %from.display(), to = %to.display(), "renamed entry");
        Ok(())
    }

    // Internal helpers

    /// Loads `path` and installs the listing. When no remembered selection is restored
    /// and `focus` names an entry, that entry is selected.
    fn load_and_apply(&mut self, path: PathBuf, focus: Option<OsString>) -> Result<()> {
        let snapshot = load_dir(&self.fs, &path)?;
        tracing::debug!(path = %path.display(), entries = snapshot.len(), "directory changed");

        self.nav.apply_snapshot(path, snapshot);
        if self.nav.selected_idx().is_none()
            && let Some(name) = focus
        {
            self.nav.focus_name(&name);
        }

        self.taps.reset();
        self.sink.on_directory_changed(self.nav.snapshot());
        Ok(())
    }

    /// Logs a failed operation and hands it to the sink.
    pub(super) fn report(&mut self, result: Result<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "operation failed");
            self.sink.on_error(&e);
        }
    }
}

/// A single path component that stays inside its directory.
fn is_plain_name(name: &str) -> bool {
    !matches!(name, "" | "." | "..") && !name.chars().any(std::path::is_separator)
}
