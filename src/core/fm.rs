//! Filesystem access for fyle.
//!
//! Provides the [FileEntry] and [DirectorySnapshot] types used throughout fyle,
//! the [FsProvider] trait the navigation core talks to, and [LocalFs], the provider
//! backed by the real filesystem.

use crate::error::FsError;

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Represents a single entry in a directory listing.
///
/// Holds the name, a lowercased copy used for sorting and searching, and attribute flags.
/// Created by a [FsProvider] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: Box<OsStr>,
    lowercase_name: Box<str>,
    flags: u8,
}

impl FileEntry {
    // Flag bit definitions
    pub const IS_DIR: u8 = 1 << 0;
    pub const IS_HIDDEN: u8 = 1 << 1;
    pub const IS_SYMLINK: u8 = 1 << 2;

    pub fn new(name: impl Into<OsString>, flags: u8) -> Self {
        let name: OsString = name.into();
        let lowercase_name = name.to_string_lossy().to_lowercase().into_boxed_str();
        FileEntry {
            name: name.into_boxed_os_str(),
            lowercase_name,
            flags,
        }
    }

    /// Shorthand for a directory entry without further attributes.
    pub fn dir(name: impl Into<OsString>) -> Self {
        Self::new(name, Self::IS_DIR)
    }

    /// Shorthand for a plain file entry.
    pub fn file(name: impl Into<OsString>) -> Self {
        Self::new(name, 0)
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn lowercase_name(&self) -> &str {
        &self.lowercase_name
    }

    #[inline(always)]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.flags & Self::IS_HIDDEN != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }
}

/// The sorted, filtered listing of one directory at one point in time.
///
/// A new snapshot is built on every load; the previous one is simply dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySnapshot {
    path: PathBuf,
    entries: Vec<FileEntry>,
}

impl DirectorySnapshot {
    pub fn new(path: PathBuf, entries: Vec<FileEntry>) -> Self {
        Self { path, entries }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    pub fn position_of(&self, name: &OsStr) -> Option<usize> {
        self.entries.iter().position(|e| e.name() == name)
    }
}

/// Everything the navigation core needs from a filesystem.
///
/// All calls are synchronous and are expected to finish before the triggering
/// key handler returns.
pub trait FsProvider {
    /// Lists the raw, unsorted entries of `path`.
    fn list_dir(&self, path: &Path) -> Result<Vec<FileEntry>, FsError>;

    /// Whether `entry` inside `dir` should be kept out of listings.
    fn is_protected(&self, dir: &Path, entry: &FileEntry) -> Result<bool, FsError>;

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError>;

    fn exists(&self, path: &Path) -> bool;

    fn home_dir(&self) -> Result<PathBuf, FsError>;
}

/// [FsProvider] over the local filesystem.
///
/// Protection follows platform conventions: dotfiles on Unix, the hidden and
/// system attribute bits on Windows. Hidden entries can be let through with
/// `show_hidden`; Windows system files never are.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs {
    show_hidden: bool,
}

impl LocalFs {
    #[cfg(windows)]
    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    #[cfg(windows)]
    const FILE_ATTRIBUTE_SYSTEM: u32 = 0x4;

    pub fn new(show_hidden: bool) -> Self {
        Self { show_hidden }
    }
}

impl FsProvider for LocalFs {
    fn list_dir(&self, path: &Path) -> Result<Vec<FileEntry>, FsError> {
        let read_dir = fs::read_dir(path).map_err(|source| FsError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::with_capacity(64);
        for entry in read_dir {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };
            let ft = match entry.file_type() {
                Ok(ft) => ft,
                Err(_) => continue,
            };
            let name = entry.file_name();

            let mut flags = 0u8;
            if ft.is_dir() {
                flags |= FileEntry::IS_DIR;
            }
            if ft.is_symlink() {
                flags |= FileEntry::IS_SYMLINK;
                // a link to a directory browses like a directory
                if fs::metadata(entry.path()).is_ok_and(|md| md.is_dir()) {
                    flags |= FileEntry::IS_DIR;
                }
            }

            #[cfg(unix)]
            {
                use std::os::unix::ffi::OsStrExt;
                if name.as_bytes().first() == Some(&b'.') {
                    flags |= FileEntry::IS_HIDDEN;
                }
            }

            entries.push(FileEntry::new(name, flags));
        }
        Ok(entries)
    }

    #[cfg(windows)]
    fn is_protected(&self, dir: &Path, entry: &FileEntry) -> Result<bool, FsError> {
        use std::os::windows::fs::MetadataExt;

        let path = dir.join(entry.name());
        let attrs = fs::symlink_metadata(&path)
            .map_err(|source| FsError::Attributes {
                path: path.clone(),
                source,
            })?
            .file_attributes();

        let system = attrs & Self::FILE_ATTRIBUTE_SYSTEM != 0;
        let hidden = attrs & Self::FILE_ATTRIBUTE_HIDDEN != 0;
        Ok(system || (hidden && !self.show_hidden))
    }

    #[cfg(not(windows))]
    fn is_protected(&self, _dir: &Path, entry: &FileEntry) -> Result<bool, FsError> {
        Ok(entry.is_hidden() && !self.show_hidden)
    }

    fn rename(&self, from: &Path, to: &Path) -> Result<(), FsError> {
        fs::rename(from, to).map_err(|source| FsError::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn home_dir(&self) -> Result<PathBuf, FsError> {
        dirs::home_dir().ok_or(FsError::HomeDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn file_entry_flags() -> Result<(), Box<dyn std::error::Error>> {
        let fe_file = FileEntry::file("file.txt");
        assert!(!fe_file.is_dir());
        assert_eq!(fe_file.name_str(), "file.txt");

        let flags = FileEntry::IS_DIR | FileEntry::IS_HIDDEN;
        let fe_dir = FileEntry::new(".Hidden_Folder", flags);
        assert!(fe_dir.is_dir());
        assert!(fe_dir.is_hidden());
        assert!(!fe_dir.is_symlink());
        assert_eq!(fe_dir.lowercase_name(), ".hidden_folder");
        Ok(())
    }

    #[test]
    fn list_dir_reports_dirs_and_files() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("sub"))?;
        File::create(tmp.path().join("a.txt"))?;

        let fs = LocalFs::default();
        let entries = fs.list_dir(tmp.path())?;
        assert_eq!(entries.len(), 2);

        let sub = entries
            .iter()
            .find(|e| e.name() == "sub")
            .ok_or("sub missing")?;
        assert!(sub.is_dir());
        let file = entries
            .iter()
            .find(|e| e.name() == "a.txt")
            .ok_or("a.txt missing")?;
        assert!(!file.is_dir());
        Ok(())
    }

    #[test]
    fn list_nonexistent_is_read_dir_error() {
        let path = PathBuf::from("/path/does/not/exist");
        let result = LocalFs::default().list_dir(&path);
        assert!(matches!(result, Err(FsError::ReadDir { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn dotfiles_are_protected_unless_shown() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        File::create(tmp.path().join(".secret"))?;

        let entries = LocalFs::default().list_dir(tmp.path())?;
        let secret = entries.first().ok_or("no entries")?;
        assert!(secret.is_hidden());

        assert!(LocalFs::new(false).is_protected(tmp.path(), secret)?);
        assert!(!LocalFs::new(true).is_protected(tmp.path(), secret)?);
        Ok(())
    }

    #[test]
    fn rename_moves_file() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let from = tmp.path().join("old.txt");
        let to = tmp.path().join("new.txt");
        File::create(&from)?;

        LocalFs::default().rename(&from, &to)?;
        assert!(!from.exists());
        assert!(to.exists());
        Ok(())
    }

    #[test]
    fn rename_missing_source_fails() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let result = LocalFs::default().rename(&tmp.path().join("nope"), &tmp.path().join("x"));
        assert!(matches!(result, Err(FsError::Rename { .. })));
        Ok(())
    }
}
