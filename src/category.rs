/// The category names that get their own display symbol and filter flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cheats,
    Links,
    Glossary,
}

/// Symbol used for any category name without an entry in the table.
pub const FALLBACK_SYMBOL: char = '#';

impl Category {
    pub const ALL: [Category; 3] =
        [Category::Cheats, Category::Links, Category::Glossary];

    pub fn name(self) -> &'static str {
        match self {
            Category::Cheats => "cheats",
            Category::Links => "links",
            Category::Glossary => "glossary",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Category::Cheats => '#',
            Category::Links => '*',
            Category::Glossary => '%',
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Map a category name found in a document to its display symbol.
///
/// Names outside the table always resolve to [`FALLBACK_SYMBOL`].
pub fn symbol_for(name: &str) -> char {
    Category::from_name(name).map_or(FALLBACK_SYMBOL, Category::symbol)
}

/// Whether a category named `name` survives a filter that keeps only `keep`.
///
/// Filtering only drops the *other* recognized categories; unrecognized names
/// are left alone, the same way a document-level delete of the two named
/// siblings would leave them.
pub fn retained_by(name: &str, keep: Option<Category>) -> bool {
    match (keep, Category::from_name(name)) {
        (None, _) | (_, None) => true,
        (Some(keep), Some(found)) => keep == found,
    }
}
