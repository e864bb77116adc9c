//! Navigation state for fyle.
//!
//! Holds the current directory, its snapshot, the selection and the per-directory
//! selection memory. Every selection change goes through [NavState::set_selected]
//! so the memory never drifts from what is on screen.

use crate::app::selection::SelectionCache;
use crate::core::{DirectorySnapshot, FileEntry};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Holds the navigation, selection and file list state.
#[derive(Debug)]
pub struct NavState {
    current_dir: PathBuf,
    snapshot: DirectorySnapshot,
    selected: Option<usize>,
    positions: SelectionCache,
}

impl NavState {
    pub fn new(path: PathBuf) -> Self {
        Self {
            snapshot: DirectorySnapshot::new(path.clone(), Vec::new()),
            current_dir: path,
            selected: None,
            positions: SelectionCache::new(),
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn snapshot(&self) -> &DirectorySnapshot {
        &self.snapshot
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        self.snapshot.entries()
    }

    #[inline]
    pub fn selected_idx(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn positions(&self) -> &SelectionCache {
        &self.positions
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected.and_then(|i| self.snapshot.get(i))
    }

    // Navigation functions

    /// Installs a freshly loaded snapshot as the current directory.
    ///
    /// The remembered selection for `path` is restored when there is one (clamped to the
    /// new length); otherwise nothing is selected and the directory is recorded as seen.
    pub(crate) fn apply_snapshot(&mut self, path: PathBuf, snapshot: DirectorySnapshot) {
        self.current_dir = path;
        self.snapshot = snapshot;

        let len = self.snapshot.len();
        match self.positions.get(&self.current_dir) {
            Some(idx) if len > 0 => {
                self.selected = Some(idx.min(len - 1));
            }
            _ => {
                self.selected = None;
                self.positions.store(&self.current_dir, None);
            }
        }
    }

    /// Selects `index`, or clears the selection with `None`.
    /// Returns `false` if the index is out of range.
    pub(crate) fn set_selected(&mut self, index: Option<usize>) -> bool {
        if index.is_some_and(|i| i >= self.snapshot.len()) {
            return false;
        }
        self.selected = index;
        self.positions.store(&self.current_dir, index);
        true
    }

    /// Moves the selection down by one entry, wrapping to the top.
    /// Returns `true` if the selection was moved, `false` if there are no entries.
    pub(crate) fn move_down(&mut self) -> bool {
        let len = self.snapshot.len();
        if len == 0 {
            return false;
        }

        let next = match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(_) | None => 0,
        };
        self.set_selected(Some(next))
    }

    /// Moves the selection up by one entry, wrapping to the bottom.
    /// Returns `true` if the selection was moved, `false` if there are no entries.
    pub(crate) fn move_up(&mut self) -> bool {
        let len = self.snapshot.len();
        if len == 0 {
            return false;
        }

        let prev = match self.selected {
            Some(i) if i > 0 => i - 1,
            Some(_) | None => len - 1,
        };
        self.set_selected(Some(prev))
    }

    /// Selects the entry called `name`, if the listing has one.
    pub(crate) fn focus_name(&mut self, name: &OsStr) -> bool {
        match self.snapshot.position_of(name) {
            Some(idx) => self.set_selected(Some(idx)),
            None => false,
        }
    }

    pub fn absolute_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.current_dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(path: &str, names: &[&str]) -> DirectorySnapshot {
        DirectorySnapshot::new(
            PathBuf::from(path),
            names.iter().map(|n| FileEntry::file(*n)).collect(),
        )
    }

    fn nav_at(path: &str, names: &[&str]) -> NavState {
        let mut nav = NavState::new(PathBuf::from(path));
        nav.apply_snapshot(PathBuf::from(path), snapshot(path, names));
        nav
    }

    #[test]
    fn navstate_rapid_navigation() {
        let names: Vec<String> = (0..10).map(|i| format!("testfile_{i}.txt")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut nav = nav_at("/sandbox", &refs);
        assert_eq!(nav.selected_idx(), None);

        let down_presses = 1000;
        for _ in 0..down_presses {
            assert!(nav.move_down(), "nav.move_down() failed during stress");
        }
        // the first press selects index 0
        let expected = (down_presses - 1) % names.len();
        assert_eq!(nav.selected_idx(), Some(expected));

        let up_presses = 1000;
        for _ in 0..up_presses {
            assert!(nav.move_up());
        }
        let expected_up = (expected + names.len() - (up_presses % names.len())) % names.len();
        assert_eq!(nav.selected_idx(), Some(expected_up));
    }

    #[test]
    fn wraparound_at_both_ends() {
        let mut nav = nav_at("/w", &["a", "b", "c"]);

        assert!(nav.move_up());
        assert_eq!(nav.selected_idx(), Some(2), "up from nothing selects the last entry");

        assert!(nav.move_down());
        assert_eq!(nav.selected_idx(), Some(0), "down from the last entry wraps to 0");

        assert!(nav.move_up());
        assert_eq!(nav.selected_idx(), Some(2), "up from 0 wraps to the last entry");
    }

    #[test]
    fn empty_listing_never_selects() {
        let mut nav = nav_at("/empty", &[]);
        assert!(!nav.move_down());
        assert!(!nav.move_up());
        assert_eq!(nav.selected_idx(), None);
    }

    #[test]
    fn selection_changes_are_remembered() {
        let mut nav = nav_at("/d", &["a", "b", "c"]);
        nav.move_down();
        nav.move_down();
        assert_eq!(nav.positions().get(Path::new("/d")), Some(1));

        nav.apply_snapshot(PathBuf::from("/other"), snapshot("/other", &["x"]));
        assert_eq!(nav.selected_idx(), None);
        assert!(nav.positions().contains(Path::new("/other")));

        nav.apply_snapshot(PathBuf::from("/d"), snapshot("/d", &["a", "b", "c"]));
        assert_eq!(nav.selected_idx(), Some(1));
    }

    #[test]
    fn remembered_index_is_clamped_to_shorter_listing() {
        let mut nav = nav_at("/d", &["a", "b", "c", "d"]);
        assert!(nav.set_selected(Some(3)));

        nav.apply_snapshot(PathBuf::from("/d"), snapshot("/d", &["a", "b"]));
        assert_eq!(nav.selected_idx(), Some(1));
    }

    #[test]
    fn set_selected_rejects_out_of_range() {
        let mut nav = nav_at("/d", &["a"]);
        assert!(!nav.set_selected(Some(1)));
        assert_eq!(nav.selected_idx(), None);
        assert!(nav.set_selected(Some(0)));
        assert_eq!(nav.selected_entry().map(|e| e.name_str().into_owned()), Some("a".into()));
    }

    #[test]
    fn focus_name_selects_matching_entry() {
        let mut nav = nav_at("/d", &["alpha", "beta"]);
        assert!(nav.focus_name(OsStr::new("beta")));
        assert_eq!(nav.selected_idx(), Some(1));
        assert!(!nav.focus_name(OsStr::new("gamma")));
        assert_eq!(nav.selected_idx(), Some(1));
    }
}
