use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// File extension (without the dot) that marks a topic document.
pub const TOPIC_EXTENSION: &str = "yaml";

/// One described record inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub description: String,
    #[serde(default)]
    pub data: Vec<String>,
}

/// A named group of elements, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBlock {
    pub name: String,
    pub elements: Vec<Element>,
}

/// The parsed content of one topic file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub categories: Vec<CategoryBlock>,
}

impl Document {
    /// Parse a topic document from YAML text.
    ///
    /// The top level must be a mapping of category name to a sequence of
    /// elements. A null category value counts as an empty sequence.
    pub fn from_yaml(text: &str) -> Result<Self, String> {
        let value: Value =
            serde_yaml::from_str(text).map_err(|e| e.to_string())?;
        let Value::Mapping(mapping) = value else {
            return Err("top level is not a mapping".to_string());
        };

        let mut categories = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name = match key {
                Value::String(name) => name,
                other => {
                    return Err(format!(
                        "category key is not a string: {other:?}"
                    ));
                }
            };
            let elements: Option<Vec<Element>> = serde_yaml::from_value(value)
                .map_err(|e| format!("category '{name}': {e}"))?;
            categories.push(CategoryBlock {
                name,
                elements: elements.unwrap_or_default(),
            });
        }

        Ok(Self { categories })
    }

    /// Total number of elements across all categories.
    pub fn element_count(&self) -> usize {
        self.categories.iter().map(|c| c.elements.len()).sum()
    }
}

/// A topic file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("skipping {}: {reason}", .path.display())]
pub struct ParseFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Read and parse the topic document at `path`.
///
/// Never yields partial data: any read or parse problem becomes a
/// [`ParseFailure`] for the whole file.
pub fn load(path: &Path) -> Result<Document, ParseFailure> {
    let failure = |reason: String| ParseFailure {
        path: path.to_path_buf(),
        reason,
    };
    let text =
        std::fs::read_to_string(path).map_err(|e| failure(e.to_string()))?;
    Document::from_yaml(&text).map_err(failure)
}

pub fn is_topic_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == TOPIC_EXTENSION)
}

/// File name of `path` with the topic suffix removed.
///
/// Returns `None` when the path has no file name or does not carry the
/// topic suffix.
pub fn topic_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    file_name
        .strip_suffix(TOPIC_EXTENSION)
        .and_then(|stem| stem.strip_suffix('.'))
        .map(str::to_string)
}

/// Location of the document for `topic` directly under `root`.
pub fn topic_path(root: &Path, topic: &str) -> PathBuf {
    root.join(format!("{topic}.{TOPIC_EXTENSION}"))
}
