// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! YAML front matter between `---` delimiters, followed by a Markdown body.
//!
//! Used by every markdown-with-front-matter entity (tasks, artifacts).

use crate::error::SchemaError;
use serde::de::Error as _;
use serde::{de::DeserializeOwned, Serialize};

const DELIM: &str = "---";

/// Split `text` into its raw front-matter block and body. Returns `None` if
/// `text` does not begin with a `---` delimiter line.
pub fn split_front_matter(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix(DELIM)?;
    let rest = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))?;
    let end = rest.find("\n---")?;
    let yaml = &rest[..end];
    let after = &rest[end + 4..];
    let body = after.strip_prefix('\n').or_else(|| after.strip_prefix("\r\n")).unwrap_or(after);
    Some((yaml, body))
}

/// Parse `text` as `{front_matter: T, body: String}`.
pub fn parse_front_matter<T: DeserializeOwned>(text: &str) -> Result<(T, String), SchemaError> {
    let (yaml, body) = split_front_matter(text)
        .ok_or_else(|| SchemaError::Yaml(serde_yaml::Error::custom("missing YAML front matter delimiters")))?;
    let front_matter: T = serde_yaml::from_str(yaml)?;
    Ok((front_matter, body.to_string()))
}

/// Render `front_matter` and `body` as a `---`-delimited markdown document.
pub fn render_front_matter<T: Serialize>(front_matter: &T, body: &str) -> Result<String, SchemaError> {
    let yaml = serde_yaml::to_string(front_matter)?;
    let yaml = yaml.trim_end_matches('\n');
    Ok(format!("{DELIM}\n{yaml}\n{DELIM}\n\n{body}"))
}

#[cfg(test)]
#[path = "frontmatter_tests.rs"]
mod tests;
