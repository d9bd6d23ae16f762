//! Fact definitions - the trivia sentences the skill reads out.

mod collection;

pub use collection::*;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Four consecutive ASCII digits, anywhere in the text.
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{4}").expect("year pattern is a valid regex"));

/// Find the year tag of a piece of text.
///
/// Returns the first run of four decimal digits, scanning left to right.
/// There is no word-boundary check: `"12345"` yields `"1234"`, and text
/// mentioning two years is tagged with the first one only.
pub fn extract_year_tag(text: &str) -> Option<&str> {
    YEAR_PATTERN.find(text).map(|m| m.as_str())
}

/// A single trivia sentence with (usually) one embedded year.
///
/// Serialized as its plain text; the year tag is recomputed on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Fact {
    text: String,
    year_tag: Option<String>,
}

impl Fact {
    /// Create a new fact from its text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let year_tag = extract_year_tag(&text).map(str::to_owned);
        Self { text, year_tag }
    }

    /// Human-readable content of the fact.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lookup key for year queries, if the text carries a year.
    pub fn year_tag(&self) -> Option<&str> {
        self.year_tag.as_deref()
    }

    /// Check if this fact is tagged with exactly the given year.
    pub fn is_from_year(&self, year: &str) -> bool {
        self.year_tag() == Some(year)
    }
}

impl From<String> for Fact {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for Fact {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<Fact> for String {
    fn from(fact: Fact) -> Self {
        fact.text
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
