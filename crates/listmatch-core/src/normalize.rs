//! Text normalization for comparing listing and catalog fields.
//!
//! Both forms lowercase the input and treat every run of non-word characters
//! as a separator. Word characters are Unicode letters, marks and digits in
//! any script; the underscore is a separator even though `\w` matches it.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\W|_)+").expect("Invalid non-word regex"));

/// Lowercase and drop every non-word character, joining what remains.
///
/// `None` yields an empty string.
pub fn normalize_compact(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };
    NON_WORD_RUN
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}

/// Lowercase and split on runs of non-word characters, keeping token order.
///
/// `None` yields no tokens.
pub fn normalize(text: Option<&str>) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    NON_WORD_RUN
        .replace_all(&text.to_lowercase(), " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// A field normalized once and reused across many comparisons.
///
/// Catalog names are compared against every listing, so the matcher prepares
/// them up front instead of re-running the regex per pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    compact: String,
    tokens: Vec<String>,
    token_set: BTreeSet<String>,
}

impl PreparedText {
    pub fn new(text: &str) -> Self {
        let tokens = normalize(Some(text));
        let token_set = tokens.iter().cloned().collect();
        Self {
            compact: normalize_compact(Some(text)),
            tokens,
            token_set,
        }
    }

    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Tokens in their original order, duplicates kept.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn token_set(&self) -> &BTreeSet<String> {
        &self.token_set
    }

    /// True when nothing survives normalization.
    pub fn is_blank(&self) -> bool {
        self.compact.is_empty()
    }
}
