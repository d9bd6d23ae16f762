//! Resource tables - everything the skill says, loaded once at startup.
//!
//! A table bundles the facts, the phrase set and the fixed messages for a
//! single locale. Tables are plain data; the router treats them as opaque.

mod locale;

pub use locale::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ResourceError;
use crate::fact::FactCollection;
use crate::phrase::PhraseSet;

/// Fixed messages spoken by the skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMessages {
    /// Card title for random facts.
    pub skill_name: String,

    /// Spoken on help, and used again as the help reprompt.
    pub help: String,

    /// Short help reprompt.
    #[serde(default)]
    pub help_reprompt: String,

    /// Goodbye text for stop and cancel.
    pub stop: String,

    /// Reprompt after a random fact.
    pub reprompt: String,

    /// Reprompt after a year fact.
    pub reprompt_year: String,

    /// Inserted between the phrase and the fallback fact on a year miss.
    pub year_not_found: String,
}

impl SkillMessages {
    /// Check that every message the router speaks is present.
    pub fn validate(&self) -> Result<(), ResourceError> {
        let required = [
            ("skill_name", &self.skill_name),
            ("help", &self.help),
            ("stop", &self.stop),
            ("reprompt", &self.reprompt),
            ("reprompt_year", &self.reprompt_year),
            ("year_not_found", &self.year_not_found),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ResourceError::EmptyMessage(name));
            }
        }
        Ok(())
    }
}

/// The complete resource table for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillResources {
    pub facts: FactCollection,
    pub phrases: PhraseSet,
    pub messages: SkillMessages,
}

impl SkillResources {
    /// Assemble a table from already-built parts.
    pub fn new(
        facts: FactCollection,
        phrases: PhraseSet,
        messages: SkillMessages,
    ) -> Result<Self, ResourceError> {
        let resources = Self {
            facts,
            phrases,
            messages,
        };
        resources.validate()?;
        Ok(resources)
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, ResourceError> {
        let resources: Self = toml::from_str(source)?;
        resources.validate()?;
        Ok(resources)
    }

    /// Parse a table from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, ResourceError> {
        let resources: Self = serde_json::from_str(source)?;
        resources.validate()?;
        Ok(resources)
    }

    /// Load a table from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&source),
            _ => Self::from_toml_str(&source),
        }
    }

    /// The English table compiled into the crate.
    pub fn builtin_english() -> Result<Self, ResourceError> {
        Self::from_toml_str(BUILTIN_ENGLISH)
    }

    fn validate(&self) -> Result<(), ResourceError> {
        self.messages.validate()
    }
}

/// Source of the built-in English table.
pub const BUILTIN_ENGLISH: &str = include_str!("../../resources/en.toml");
