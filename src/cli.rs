use clap::Parser;

use crate::{config::Config, query::Options, render::RenderOptions};

#[derive(Debug, Parser)]
#[command(
    name = "docsearch",
    about = "Search your local cheatsheets, links and glossaries",
    override_usage = "docsearch [ FILTERS ] -s PATTERN"
)]
pub struct Cli {
    /// Restrict search on cheatsheets terms
    #[arg(short = 'C', long)]
    pub cheats: bool,

    /// Restrict search on glossary terms
    #[arg(short = 'G', long)]
    pub glossary: bool,

    /// Restrict search on links terms
    #[arg(short = 'L', long)]
    pub links: bool,

    /// Show useful DOCSEARCH_* environment variables
    #[arg(short, long)]
    pub env: bool,

    /// Enable colored output
    #[arg(short, long)]
    pub colored: bool,

    /// List all available topics
    #[arg(short, long)]
    pub inventory: bool,

    /// JSON output
    #[arg(short, long)]
    pub json: bool,

    /// Show matched file found
    #[arg(short, long)]
    pub pwd: bool,

    /// Enable colored match
    #[arg(short, long)]
    pub match_colored: bool,

    /// Keyword or term to search (a regular expression)
    #[arg(short, long, value_name = "TERMS")]
    pub search: Option<String>,

    /// Treat the search term as plain text
    #[arg(short = 'F', long)]
    pub fixed_strings: bool,

    /// Search on a specific topic
    #[arg(short, long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Combine the flags with the environment into query options.
    ///
    /// Color flags turn coloring on; they cannot turn off coloring that the
    /// environment enabled.
    pub fn options(&self, config: &Config) -> Options {
        Options {
            cheats_only: self.cheats,
            links_only: self.links,
            glossary_only: self.glossary,
            topic: self.topic.clone(),
            terms: self.search.clone(),
            literal: self.fixed_strings,
            inventory: self.inventory,
            env: self.env,
            json: self.json,
            show_path: self.pwd,
            colored: self.colored || config.colored.unwrap_or(false),
            match_colored: self.match_colored
                || config.match_colored.unwrap_or(false),
        }
    }
}

impl From<&Options> for RenderOptions {
    fn from(options: &Options) -> Self {
        Self {
            colored: options.colored,
            match_colored: options.match_colored,
            json: options.json,
        }
    }
}
