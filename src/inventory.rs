use std::path::{Path, PathBuf};

use crate::walker;

/// Topic names available under one search root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootTopics {
    pub root: PathBuf,
    /// In discovery order.
    pub topics: Vec<String>,
}

/// Topic names per root, in root order. Nothing is parsed to build it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub roots: Vec<RootTopics>,
}

impl Inventory {
    pub fn topic_count(&self) -> usize {
        self.roots.iter().map(|r| r.topics.len()).sum()
    }
}

/// List the topics under every root.
///
/// A root listed twice appears twice; each entry reflects its own walk.
pub fn list_topics(roots: &[PathBuf]) -> Inventory {
    Inventory {
        roots: roots.iter().map(|root| list_root(root)).collect(),
    }
}

fn list_root(root: &Path) -> RootTopics {
    let topics = walker::discover_topics(root)
        .into_iter()
        .map(|found| found.topic)
        .collect();
    RootTopics {
        root: root.to_path_buf(),
        topics,
    }
}
