//! Locale tables - resource tables keyed by locale tag.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::SkillResources;
use crate::error::ResourceError;

/// Locale used when nothing more specific matches.
pub const DEFAULT_LOCALE: &str = "en";

/// Resource tables for every supported locale.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    default_locale: String,
    tables: HashMap<String, SkillResources>,
}

/// On-disk layout of a multi-locale file.
#[derive(Debug, Deserialize)]
struct LocaleFile {
    #[serde(default = "default_locale")]
    default_locale: String,
    locales: HashMap<String, SkillResources>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// Where a resolved table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleMatch {
    /// The requested tag was registered as-is.
    Exact,
    /// Matched on the language part (`en-GB` -> `en`).
    Language,
    /// Nothing matched; the default locale was used.
    Default,
}

impl LocaleTable {
    /// Create a table with a single default locale.
    pub fn new(default_locale: impl Into<String>, resources: SkillResources) -> Self {
        let default_locale: String = default_locale.into();
        let default_locale = normalize(&default_locale);
        let mut tables = HashMap::new();
        tables.insert(default_locale.clone(), resources);
        Self {
            default_locale,
            tables,
        }
    }

    /// The table holding only the built-in English resources.
    pub fn builtin() -> Result<Self, ResourceError> {
        Ok(Self::new(DEFAULT_LOCALE, SkillResources::builtin_english()?))
    }

    /// Parse a multi-locale TOML file body.
    ///
    /// ```toml
    /// default_locale = "en"
    ///
    /// [locales.en]
    /// facts = ["..."]
    /// phrases = ["..."]
    ///
    /// [locales.en.messages]
    /// skill_name = "..."
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ResourceError> {
        let file: LocaleFile = toml::from_str(source)?;
        Self::from_locale_file(file)
    }

    /// Load a multi-locale TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ResourceError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ResourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    fn from_locale_file(file: LocaleFile) -> Result<Self, ResourceError> {
        let mut tables = HashMap::with_capacity(file.locales.len());
        for (locale, resources) in file.locales {
            resources.messages.validate()?;
            let tag = normalize(&locale);
            if tables.insert(tag.clone(), resources).is_some() {
                return Err(ResourceError::DuplicateLocale(tag));
            }
        }

        let default_locale = normalize(&file.default_locale);
        if !tables.contains_key(&default_locale) {
            return Err(ResourceError::UnknownLocale(default_locale));
        }

        Ok(Self {
            default_locale,
            tables,
        })
    }

    /// Register (or replace) the table for a locale.
    pub fn insert(&mut self, locale: impl AsRef<str>, resources: SkillResources) {
        self.tables.insert(normalize(locale.as_ref()), resources);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_locale(mut self, locale: impl AsRef<str>, resources: SkillResources) -> Self {
        self.insert(locale, resources);
        self
    }

    /// Get the table for an exact locale tag.
    pub fn get(&self, locale: &str) -> Option<&SkillResources> {
        self.tables.get(&normalize(locale))
    }

    /// The default locale's table.
    pub fn default_resources(&self) -> &SkillResources {
        // The default locale is inserted on construction and never removed.
        &self.tables[&self.default_locale]
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Resolve the table for a locale: exact tag, then language, then default.
    pub fn resolve(&self, locale: &str) -> (&SkillResources, LocaleMatch) {
        let tag = normalize(locale);
        if let Some(resources) = self.tables.get(&tag) {
            return (resources, LocaleMatch::Exact);
        }

        if let Some((language, _)) = tag.split_once('-') {
            if let Some(resources) = self.tables.get(language) {
                return (resources, LocaleMatch::Language);
            }
        }

        (self.default_resources(), LocaleMatch::Default)
    }

    /// All registered locale tags.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

/// Locale tags compare case-insensitively, with `_` treated as `-`.
fn normalize(locale: &str) -> String {
    locale.trim().replace('_', "-").to_ascii_lowercase()
}
