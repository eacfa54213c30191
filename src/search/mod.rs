//! Search filter
//!
//! Case-insensitive substring match on names, applied to the children of the
//! current location only. Searching across folders is deliberately out of
//! scope; a global search would need its own entry point over the store.

use crate::entity::{File, Folder};

/// Whether `name` contains `needle`. `needle` must already be lowercase.
fn name_matches(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}

/// Keep the folders and files whose names match `query`, in their original order.
pub fn filter_children<'a>(
    folders: &[&'a Folder],
    files: &[&'a File],
    query: &str,
) -> (Vec<&'a Folder>, Vec<&'a File>) {
    let needle = query.to_lowercase();

    (
        folders
            .iter()
            .copied()
            .filter(|f| name_matches(&f.name, &needle))
            .collect(),
        files
            .iter()
            .copied()
            .filter(|f| name_matches(&f.name, &needle))
            .collect(),
    )
}
