//! Year lookup - exact year-tag match with a random fallback.

use fact_store::{Fact, FactCollection, ResourceError};

use crate::random::{choose, RandomSource};

/// Outcome of a year lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearLookup<'a> {
    /// A fact tagged with the requested year.
    Hit(&'a Fact),
    /// No fact carries the year; a random fact stands in.
    Miss(&'a Fact),
}

impl<'a> YearLookup<'a> {
    pub fn fact(&self) -> &'a Fact {
        match self {
            YearLookup::Hit(fact) | YearLookup::Miss(fact) => fact,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, YearLookup::Hit(_))
    }
}

/// Pick one fact uniformly from the whole collection.
pub fn random_fact<'a, R>(facts: &'a FactCollection, rng: &mut R) -> Result<&'a Fact, ResourceError>
where
    R: RandomSource + ?Sized,
{
    choose(rng, facts.all_facts()).ok_or(ResourceError::EmptyFacts)
}

/// Find the first fact tagged with `year`, falling back to a random one.
///
/// Hit or miss is decided by the scan itself. A fallback fact that happens
/// to mention the year somewhere in its text is still a miss.
pub fn lookup_year<'a, R>(
    facts: &'a FactCollection,
    year: &str,
    rng: &mut R,
) -> Result<YearLookup<'a>, ResourceError>
where
    R: RandomSource + ?Sized,
{
    match facts.find_by_year(year) {
        Some(fact) => Ok(YearLookup::Hit(fact)),
        None => random_fact(facts, rng).map(YearLookup::Miss),
    }
}
