use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::document;

/// A topic document found while walking a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTopic {
    /// File name without the topic suffix.
    pub topic: String,
    /// Path as reached from the root (not canonicalized).
    pub path: PathBuf,
}

/// Recursively walk `root` and collect every topic document under it.
///
/// Results come back in the order the filesystem yields them; nothing is
/// sorted. Symlinks to files are included; symlinked directories are not
/// walked into. Entries that cannot be read are logged and skipped, and a
/// root that does not exist contributes nothing.
pub fn discover_topics(root: &Path) -> Vec<DiscoveredTopic> {
    if !root.exists() {
        tracing::warn!(root = %root.display(), "search root does not exist");
        return Vec::new();
    }

    let mut results = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(root = %root.display(), "skipping entry: {err}");
                continue;
            }
        };

        // Symlinked files count; symlinked directories are not descended.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file || !document::is_topic_file(entry.path()) {
            continue;
        }

        if let Some(topic) = document::topic_name(entry.path()) {
            tracing::trace!(path = %entry.path().display(), "found topic");
            results.push(DiscoveredTopic {
                topic,
                path: entry.into_path(),
            });
        }
    }

    results
}
