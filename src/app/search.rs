//! Incremental substring search over a directory listing.

use crate::core::FileEntry;

/// Finds the entry a search for `term` should select.
///
/// Matching is a case-insensitive substring test on the entry name. Returns the new
/// selection, or `None` when the selection should stay where it is: empty term,
/// no match at all, or (while typing, `find_next == false`) the current entry
/// already matches.
///
/// Otherwise the first match after `selected` wins, wrapping to the first match overall.
pub fn find_match(
    entries: &[FileEntry],
    selected: Option<usize>,
    term: &str,
    find_next: bool,
) -> Option<usize> {
    if term.is_empty() {
        return None;
    }
    let needle = term.to_lowercase();
    let matches = |e: &FileEntry| e.lowercase_name().contains(&needle);

    if !find_next
        && let Some(entry) = selected.and_then(|i| entries.get(i))
        && matches(entry)
    {
        return None;
    }

    let mut first = None;
    for (idx, entry) in entries.iter().enumerate() {
        if !matches(entry) {
            continue;
        }
        if selected.is_none_or(|sel| idx > sel) {
            return Some(idx);
        }
        first.get_or_insert(idx);
    }
    first
}
