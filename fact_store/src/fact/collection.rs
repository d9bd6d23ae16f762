//! The ordered, immutable collection of facts shared by every request.

use serde::{Deserialize, Serialize};

use super::Fact;
use crate::error::ResourceError;

/// An ordered sequence of facts, fixed at load time.
///
/// Never empty: random selection needs at least one fact to draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Fact>", into = "Vec<Fact>")]
pub struct FactCollection {
    facts: Vec<Fact>,
}

impl FactCollection {
    /// Build a collection, keeping the given order.
    pub fn new(facts: Vec<Fact>) -> Result<Self, ResourceError> {
        if facts.is_empty() {
            return Err(ResourceError::EmptyFacts);
        }
        Ok(Self { facts })
    }

    /// Build a collection straight from fact texts.
    pub fn from_texts<I, S>(texts: I) -> Result<Self, ResourceError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(Fact::new).collect())
    }

    /// All facts, in stored order.
    pub fn all_facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Get a fact by position.
    pub fn get(&self, index: usize) -> Option<&Fact> {
        self.facts.get(index)
    }

    /// Number of facts in the collection.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Always false for a constructed collection.
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Iterate over the facts in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    /// First fact, in stored order, whose year tag equals `year` exactly.
    pub fn find_by_year(&self, year: &str) -> Option<&Fact> {
        self.facts.iter().find(|fact| fact.is_from_year(year))
    }

    /// Check whether any fact is tagged with the given year.
    pub fn has_year(&self, year: &str) -> bool {
        self.find_by_year(year).is_some()
    }

    /// Distinct year tags, in order of first appearance.
    pub fn years(&self) -> Vec<&str> {
        let mut years: Vec<&str> = Vec::new();
        for year in self.facts.iter().filter_map(Fact::year_tag) {
            if !years.contains(&year) {
                years.push(year);
            }
        }
        years
    }
}

impl TryFrom<Vec<Fact>> for FactCollection {
    type Error = ResourceError;

    fn try_from(facts: Vec<Fact>) -> Result<Self, Self::Error> {
        Self::new(facts)
    }
}

impl From<FactCollection> for Vec<Fact> {
    fn from(collection: FactCollection) -> Self {
        collection.facts
    }
}

impl<'a> IntoIterator for &'a FactCollection {
    type Item = &'a Fact;
    type IntoIter = std::slice::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.facts.iter()
    }
}
