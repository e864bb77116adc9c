//! Directory loading, filtering and sorting for fyle.
//!
//! [load_dir] turns a provider listing into a [DirectorySnapshot]: protected entries are
//! dropped and the rest is ordered with [sort_entries].

use crate::core::fm::{DirectorySnapshot, FileEntry, FsProvider};
use crate::error::FsError;

use std::cmp::Ordering;
use std::path::Path;

/// Loads `path` through `fs` into a fresh snapshot.
///
/// An entry whose protection check fails is logged and left out; the load itself
/// only fails when the directory cannot be listed.
pub fn load_dir<P: FsProvider + ?Sized>(fs: &P, path: &Path) -> Result<DirectorySnapshot, FsError> {
    let listed = fs.list_dir(path)?;
    let total = listed.len();

    let mut entries: Vec<FileEntry> = listed
        .into_iter()
        .filter(|entry| match fs.is_protected(path, entry) {
            Ok(protected) => !protected,
            Err(e) => {
                tracing::warn!(error = %e, "skipping entry with unreadable attributes");
                false
            }
        })
        .collect();

    sort_entries(&mut entries);
    tracing::debug!(
        path = %path.display(),
        shown = entries.len(),
        total,
        "directory loaded"
    );
    Ok(DirectorySnapshot::new(path.to_path_buf(), entries))
}

/// Directories first, then case-insensitive by name.
///
/// The sort is stable: names that only differ in case keep the provider's order.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &FileEntry, b: &FileEntry) -> Ordering {
    match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.lowercase_name().cmp(b.lowercase_name()),
    }
}
