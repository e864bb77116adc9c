//! Per-directory selection memory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Remembers the last selected index for every visited directory.
///
/// `None` means the directory was visited without anything selected.
/// Entries live for the whole session.
#[derive(Debug, Default)]
pub struct SelectionCache {
    positions: HashMap<PathBuf, Option<usize>>,
}

impl SelectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the remembered selection, or `None` if there is none.
    pub fn get(&self, dir: &Path) -> Option<usize> {
        self.positions.get(dir).copied().flatten()
    }

    pub fn contains(&self, dir: &Path) -> bool {
        self.positions.contains_key(dir)
    }

    pub fn store(&mut self, dir: &Path, selected: Option<usize>) {
        self.positions.insert(dir.to_path_buf(), selected);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_and_seeded_dirs_have_no_selection() {
        let mut cache = SelectionCache::new();
        let dir = Path::new("/home/user");
        assert_eq!(cache.get(dir), None);
        assert!(!cache.contains(dir));

        cache.store(dir, None);
        assert!(cache.contains(dir));
        assert_eq!(cache.get(dir), None);
    }

    #[test]
    fn store_overwrites() {
        let mut cache = SelectionCache::new();
        let dir = Path::new("/tmp");
        cache.store(dir, Some(3));
        cache.store(dir, Some(7));
        assert_eq!(cache.get(dir), Some(7));
        assert_eq!(cache.len(), 1);
    }
}
