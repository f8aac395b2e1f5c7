use crate::policy::ExclusionPolicy;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Lazily yields the eligible files below a directory.
///
/// Each directory's files come before its subdirectories, both in the order
/// the filesystem lists them. Excluded directories are pruned before they
/// are entered, so nothing underneath them is ever read. Symlinks to files
/// are yielded like files; symlinked directories are not followed.
pub struct TreeWalker<'a> {
    policy: &'a ExclusionPolicy,
}

impl<'a> TreeWalker<'a> {
    pub fn new(policy: &'a ExclusionPolicy) -> Self {
        TreeWalker { policy }
    }

    pub fn walk(&self, dir: &Path) -> impl Iterator<Item = PathBuf> + 'a {
        let policy = self.policy;
        WalkDir::new(dir)
            .follow_links(false)
            .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
            .into_iter()
            .filter_entry(move |entry| !is_pruned(policy, entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            // Links to regular files are read; linked directories are not entered.
            .filter(|entry| {
                entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
            })
            .filter(move |entry| {
                let eligible = policy.is_eligible(entry.path());
                if !eligible {
                    trace!("Ignoring file with ineligible extension: {:?}", entry.path());
                }
                eligible
            })
            .map(DirEntry::into_path)
    }
}

fn is_pruned(policy: &ExclusionPolicy, entry: &DirEntry) -> bool {
    // The walk root is never pruned, whatever its name.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let pruned = entry
        .file_name()
        .to_str()
        .map(|name| policy.is_excluded_dir(name))
        .unwrap_or(false);
    if pruned {
        trace!("Pruning excluded directory: {:?}", entry.path());
    }
    pruned
}
