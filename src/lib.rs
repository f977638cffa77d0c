//! docsearch - search local cheatsheets, links and glossaries.
//!
//! Topics are YAML documents found under one or more search roots. Each
//! document maps a category name (`cheats`, `links`, `glossary`, or anything
//! else) to a list of elements with a `description` and optional `data`
//! lines. Every invocation scans the roots from scratch; there is no index.
//!
//! # Quick start
//!
//! ```no_run
//! use docsearch::{Config, query::{self, Options}, render::{self, RenderOptions}};
//!
//! let config = Config::from_env().unwrap();
//! let options = Options {
//!     terms: Some("reset".to_string()),
//!     ..Options::default()
//! };
//!
//! let outcome = query::run(&options, &config).unwrap();
//! render::render(&outcome, RenderOptions::from(&options), &mut std::io::stdout())
//!     .unwrap();
//! ```

pub mod category;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod inventory;
pub mod query;
pub mod render;
pub mod walker;

pub use category::Category;
pub use config::Config;
pub use document::{Document, Element};
pub use error::{Error, Result};
pub use query::{Hit, Options, Outcome};
