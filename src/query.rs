//! Topic discovery, filtering and matching for one invocation.
//!
//! [`run`] is the single entry point. It picks a mode from [`Options`]
//! (inventory, environment report, path report, dump or search), scans the
//! configured roots one file at a time and returns an [`Outcome`] for the
//! presenter. Files that fail to load are skipped; they never abort the scan.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::{
    category::{self, Category},
    config::{Config, EnvReport},
    document::{self, Document, Element},
    error::{Error, Result},
    inventory::{self, Inventory},
    walker,
};

/// Everything the command line asked for in one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub cheats_only: bool,
    pub links_only: bool,
    pub glossary_only: bool,
    /// Restrict to the document with this name in every root.
    pub topic: Option<String>,
    /// Pattern matched against element descriptions.
    pub terms: Option<String>,
    /// Match `terms` as plain text instead of a regular expression.
    pub literal: bool,
    pub inventory: bool,
    pub env: bool,
    pub json: bool,
    pub show_path: bool,
    pub colored: bool,
    pub match_colored: bool,
}

impl Options {
    /// The one category kept by the filter flags, if any.
    ///
    /// When several flags are set the first of links, cheats, glossary wins.
    pub fn category_filter(&self) -> Option<Category> {
        if self.links_only {
            Some(Category::Links)
        } else if self.cheats_only {
            Some(Category::Cheats)
        } else if self.glossary_only {
            Some(Category::Glossary)
        } else {
            None
        }
    }
}

/// A compiled search term.
#[derive(Debug, Clone)]
pub struct Matcher {
    term: String,
    regex: Regex,
}

impl Matcher {
    /// Compile `term` as a regular expression, or as literal text when
    /// `literal` is set.
    pub fn new(term: &str, literal: bool) -> Result<Self> {
        let pattern = if literal {
            regex::escape(term)
        } else {
            term.to_string()
        };
        let regex = Regex::new(&pattern).map_err(|source| Error::Pattern {
            pattern: term.to_string(),
            source,
        })?;
        Ok(Self {
            term: term.to_string(),
            regex,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// One element that survived filtering (and matching, in search mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Document file name without its suffix.
    pub topic: String,
    pub category: String,
    pub element: Element,
    /// The search term that selected this element; `None` in dump mode.
    pub matched: Option<String>,
}

impl Hit {
    pub fn symbol(&self) -> char {
        category::symbol_for(&self.category)
    }
}

/// Hits in encounter order, with the matcher that produced them.
#[derive(Debug, Clone, Default)]
pub struct QueryHits {
    pub hits: Vec<Hit>,
    pub matcher: Option<Matcher>,
}

/// What one invocation produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    Inventory(Inventory),
    Environment(EnvReport),
    /// Files that would have been searched and parsed successfully.
    Paths(Vec<PathBuf>),
    Hits(QueryHits),
}

/// Run one query against the configured roots.
///
/// Modes are exclusive and checked in order: inventory, environment report,
/// then topic/term resolution (with `show_path` reporting files instead of
/// searching them). Without a topic or a term there is nothing to do and
/// the result is empty.
pub fn run(options: &Options, config: &Config) -> Result<Outcome> {
    if options.inventory {
        return Ok(Outcome::Inventory(inventory::list_topics(&config.roots)));
    }
    if options.env {
        return Ok(Outcome::Environment(config.report()));
    }

    let matcher = options
        .terms
        .as_deref()
        .map(|term| Matcher::new(term, options.literal))
        .transpose()?;

    let files = candidate_files(options, &config.roots);
    tracing::debug!(files = files.len(), "scanning topic files");

    if options.show_path {
        let paths = files
            .into_iter()
            .filter(|path| load_or_skip(path).is_some())
            .collect();
        return Ok(Outcome::Paths(paths));
    }

    let keep = options.category_filter();
    let mut hits = Vec::new();
    for path in &files {
        let Some(doc) = load_or_skip(path) else {
            continue;
        };
        let Some(topic) = document::topic_name(path) else {
            continue;
        };
        collect_hits(&topic, doc, keep, matcher.as_ref(), &mut hits);
    }

    tracing::debug!(hits = hits.len(), "query finished");
    Ok(Outcome::Hits(QueryHits { hits, matcher }))
}

/// The files a query looks at, root by root.
///
/// With a topic, that is `<root>/<topic>.yaml` for every root whether or not
/// it exists. With only a term, every topic file under every root.
fn candidate_files(options: &Options, roots: &[PathBuf]) -> Vec<PathBuf> {
    match (&options.topic, &options.terms) {
        (Some(topic), _) => roots
            .iter()
            .map(|root| document::topic_path(root, topic))
            .collect(),
        (None, Some(_)) => roots
            .iter()
            .flat_map(|root| walker::discover_topics(root))
            .map(|found| found.path)
            .collect(),
        (None, None) => Vec::new(),
    }
}

fn load_or_skip(path: &Path) -> Option<Document> {
    tracing::trace!(path = %path.display(), "loading");
    match document::load(path) {
        Ok(doc) => Some(doc),
        Err(failure) => {
            tracing::debug!("{failure}");
            None
        }
    }
}

/// Append a hit for every element of `doc` that passes the category filter
/// and, when searching, whose description matches.
fn collect_hits(
    topic: &str,
    doc: Document,
    keep: Option<Category>,
    matcher: Option<&Matcher>,
    hits: &mut Vec<Hit>,
) {
    for block in doc.categories {
        if !category::retained_by(&block.name, keep) {
            continue;
        }
        for element in block.elements {
            let matched = match matcher {
                Some(m) if !m.is_match(&element.description) => continue,
                Some(m) => Some(m.term().to_string()),
                None => None,
            };
            hits.push(Hit {
                topic: topic.to_string(),
                category: block.name.clone(),
                element,
                matched,
            });
        }
    }
}
