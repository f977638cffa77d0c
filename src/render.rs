use std::{collections::BTreeMap, io::Write};

use colored::Colorize;
use regex::{Captures, Regex};

use crate::{
    config::EnvReport,
    document::Element,
    error::Result,
    inventory::Inventory,
    query::{Hit, Outcome, QueryHits},
};

/// Display toggles for one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub colored: bool,
    pub match_colored: bool,
    pub json: bool,
}

pub fn render(
    outcome: &Outcome,
    opts: RenderOptions,
    out: &mut impl Write,
) -> Result<()> {
    match outcome {
        Outcome::Inventory(inventory) => {
            render_inventory(inventory, opts.colored, out)
        }
        Outcome::Environment(report) => render_env(report, opts.colored, out),
        Outcome::Paths(paths) => {
            for path in paths {
                writeln!(out, "{}", path.display())?;
            }
            Ok(())
        }
        Outcome::Hits(hits) => render_hits(hits, opts, out),
    }
}

/// Print hits as one JSON document, or as text blocks in encounter order.
///
/// JSON is only used when there is at least one hit; an empty result prints
/// nothing in either mode.
pub fn render_hits(
    hits: &QueryHits,
    opts: RenderOptions,
    out: &mut impl Write,
) -> Result<()> {
    if opts.json && !hits.hits.is_empty() {
        serde_json::to_writer(&mut *out, &group_by_symbol(&hits.hits))?;
        writeln!(out)?;
        return Ok(());
    }

    let highlighter = hits
        .matcher
        .as_ref()
        .filter(|_| opts.match_colored)
        .map(|m| m.regex());

    for hit in &hits.hits {
        let searched = hit.matched.as_deref().is_some_and(|t| !t.is_empty());
        let regex = highlighter.filter(|_| searched);
        writeln!(out, "{}", header(hit, opts.colored, regex))?;
        for data in &hit.element.data {
            writeln!(out, "- {data}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Group hits under their category symbol.
///
/// Hits are first stable-sorted by category name, so elements of one category
/// stay in encounter order and categories sharing a symbol are laid out by
/// name.
pub fn group_by_symbol(hits: &[Hit]) -> BTreeMap<String, Vec<&Element>> {
    let mut sorted: Vec<&Hit> = hits.iter().collect();
    sorted.sort_by(|a, b| a.category.cmp(&b.category));

    let mut groups: BTreeMap<String, Vec<&Element>> = BTreeMap::new();
    for hit in sorted {
        groups
            .entry(hit.symbol().to_string())
            .or_default()
            .push(&hit.element);
    }
    groups
}

/// The first line of a hit's text block: symbol, topic and description.
///
/// With a highlighter, matches are colored in the description only, before
/// the line is assembled, so topic coloring is never split by a match.
pub fn header(
    hit: &Hit,
    colored: bool,
    highlighter: Option<&Regex>,
) -> String {
    let description = match highlighter {
        Some(regex) => highlight(&hit.element.description, regex),
        None => hit.element.description.clone(),
    };
    let topic = format!("[{}]", hit.topic);
    if colored {
        format!("{} {}: {description}", hit.symbol(), topic.yellow().bold())
    } else {
        format!("{} {topic}: {description}", hit.symbol())
    }
}

/// Color every non-empty match of `regex` in `text`.
pub fn highlight(text: &str, regex: &Regex) -> String {
    regex
        .replace_all(text, |caps: &Captures| {
            let text = &caps[0];
            if text.is_empty() {
                String::new()
            } else {
                text.red().bold().to_string()
            }
        })
        .into_owned()
}

fn info(message: &str, colored: bool) -> String {
    if colored {
        format!("{} {message}", "[*]".blue().bold())
    } else {
        format!("[*] {message}")
    }
}

fn render_inventory(
    inventory: &Inventory,
    colored: bool,
    out: &mut impl Write,
) -> Result<()> {
    for entry in &inventory.roots {
        writeln!(out, "{}", info(&entry.root.display().to_string(), colored))?;
        for topic in &entry.topics {
            writeln!(out, "{topic}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn render_env(
    report: &EnvReport,
    colored: bool,
    out: &mut impl Write,
) -> Result<()> {
    for section in &report.sections {
        writeln!(out, "{}", info(section.var, colored))?;
        for line in &section.lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
