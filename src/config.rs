use std::{ffi::OsString, path::PathBuf};

use crate::error::{Error, Result};

pub const PATH_VAR: &str = "DOCSEARCH_PATH";
pub const COLORED_VAR: &str = "DOCSEARCH_COLORED";
pub const MATCH_COLORED_VAR: &str = "DOCSEARCH_MATCH_COLORED";
pub const LOG_VAR: &str = "DOCSEARCH_LOG";

/// Settings taken from the process environment, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Search roots, in the order they were configured. Never empty.
    pub roots: Vec<PathBuf>,
    /// `None` when `DOCSEARCH_COLORED` is unset.
    pub colored: Option<bool>,
    /// `None` when `DOCSEARCH_MATCH_COLORED` is unset.
    pub match_colored: Option<bool>,
}

/// One block of the environment report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSection {
    pub var: &'static str,
    pub lines: Vec<String>,
}

/// The recognized `DOCSEARCH_*` variables that are set, with their meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvReport {
    pub sections: Vec<EnvSection>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars_os())
    }

    /// Build the configuration from an explicit list of variables.
    ///
    /// `DOCSEARCH_PATH` is split like `PATH`; empty components are ignored.
    /// Leaving it unset, or setting it to nothing but separators, is an
    /// error.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let mut path = None;
        let mut colored = None;
        let mut match_colored = None;

        for (key, value) in vars {
            let key: OsString = key.into();
            let value: OsString = value.into();
            match key.to_str() {
                Some(PATH_VAR) => path = Some(value),
                Some(COLORED_VAR) => colored = Some(is_truthy(&value)),
                Some(MATCH_COLORED_VAR) => {
                    match_colored = Some(is_truthy(&value));
                }
                _ => {}
            }
        }

        let path = path.ok_or_else(|| {
            Error::Config(format!(
                "you need to declare the {PATH_VAR} environment variable"
            ))
        })?;

        let roots: Vec<PathBuf> = std::env::split_paths(&path)
            .filter(|p| !p.as_os_str().is_empty())
            .collect();
        if roots.is_empty() {
            return Err(Error::Config(format!(
                "{PATH_VAR} does not name any directory"
            )));
        }

        Ok(Self {
            roots,
            colored,
            match_colored,
        })
    }

    pub fn report(&self) -> EnvReport {
        let mut sections = vec![EnvSection {
            var: PATH_VAR,
            lines: self
                .roots
                .iter()
                .map(|r| r.display().to_string())
                .collect(),
        }];

        if let Some(enabled) = self.colored {
            sections.push(EnvSection {
                var: COLORED_VAR,
                lines: vec![format!("color mode {}", on_off(enabled))],
            });
        }
        if let Some(enabled) = self.match_colored {
            sections.push(EnvSection {
                var: MATCH_COLORED_VAR,
                lines: vec![format!("match color mode {}", on_off(enabled))],
            });
        }

        EnvReport { sections }
    }
}

fn is_truthy(value: &OsString) -> bool {
    value.to_str().is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}
