//! Line-oriented `key=value` files
//!
//! Server data tables (drops.ini, shops.ini, skills.ini) are INI files with
//! no section header. Reading them behaves as if a `[default]` header was
//! prepended:
//! - keys are trimmed and lower-cased, values trimmed
//! - the first `=` or `:` separates key from value
//! - blank lines and lines starting with `#` or `;` are skipped
//! - a line indented deeper than its key continues the previous value;
//!   blank lines between continuation lines are kept, trailing ones are not
//! - an explicit `[section]` header switches section; only pairs in the
//!   top-level section are kept
//!
//! Duplicate keys are all kept, in file order.

use crate::error::{ConfigError, Result};
use nom::{
    bytes::complete::{take_till1, take_until},
    character::complete::{char, one_of},
    combinator::rest,
    sequence::{delimited, separated_pair},
    IResult,
};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Name of the implicit section wrapping the whole file
pub const TOP_SECTION: &str = "default";

fn section_header(input: &str) -> IResult<&str, &str> {
    delimited(char('['), take_until("]"), char(']'))(input)
}

fn key_value(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till1(|c: char| c == '=' || c == ':'), one_of("=:"), rest)(input)
}

/// Ordered key/value pairs of the top-level section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelimitedConfig {
    entries: Vec<(String, String)>,
}

impl DelimitedConfig {
    /// Load and parse a file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| ConfigError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&String::from_utf8(data)?)
    }

    /// Parse file content
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut in_top = true;
        // (index of the entry being continued if kept, indent of its key line)
        let mut continuing: Option<(Option<usize>, usize)> = None;
        // Blank lines seen since the last value line
        let mut blanks = 0;

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();

            if line.is_empty() {
                if continuing.is_some() {
                    blanks += 1;
                }
                continue;
            }

            if line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            let indent = raw.len() - raw.trim_start().len();
            if let Some((target, key_indent)) = continuing {
                if indent > key_indent {
                    if let Some(i) = target {
                        let value = &mut entries[i].1;
                        value.push_str(&"\n".repeat(blanks + 1));
                        value.push_str(line);
                    }
                    blanks = 0;
                    continue;
                }
            }

            blanks = 0;

            if let Ok((_, name)) = section_header(line) {
                in_top = name == TOP_SECTION;
                if !in_top {
                    warn!("Ignoring keys under section [{}]", name);
                }
                continuing = None;
                continue;
            }

            match key_value(line) {
                Ok((_, (key, value))) => {
                    let target = if in_top {
                        entries.push((key.trim().to_lowercase(), value.trim().to_string()));
                        Some(entries.len() - 1)
                    } else {
                        None
                    };
                    continuing = Some((target, indent));
                }
                Err(_) => {
                    return Err(ConfigError::Syntax {
                        line: index + 1,
                        message: format!("expected key=value, got {:?}", line),
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    /// Iterate pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Last value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
