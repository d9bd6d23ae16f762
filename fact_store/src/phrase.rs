//! Phrase sets - the lead-ins that vary how a fact is introduced.

use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

/// Ordered prefixes such as `"Here's your fact: "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PhraseSet {
    phrases: Vec<String>,
}

impl PhraseSet {
    /// Create a phrase set. At least one phrase is required.
    pub fn new(phrases: Vec<String>) -> Result<Self, ResourceError> {
        if phrases.is_empty() {
            return Err(ResourceError::EmptyPhrases);
        }
        Ok(Self { phrases })
    }

    /// All phrases, in stored order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.phrases.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl TryFrom<Vec<String>> for PhraseSet {
    type Error = ResourceError;

    fn try_from(phrases: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(phrases)
    }
}

impl From<PhraseSet> for Vec<String> {
    fn from(set: PhraseSet) -> Self {
        set.phrases
    }
}
