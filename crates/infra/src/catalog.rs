//! JSON-backed message catalog.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use fieldservice_core::Translator;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Translations keyed by language, then by source text.
///
/// JSON layout: `{ "fr_FR": { "<source text>": "<translation>" } }`.
#[derive(Debug, Default, Clone)]
pub struct CatalogTranslator {
    entries: HashMap<String, HashMap<String, String>>,
}

impl CatalogTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn insert(&mut self, lang: impl Into<String>, source: impl Into<String>, translation: impl Into<String>) {
        self.entries
            .entry(lang.into())
            .or_default()
            .insert(source.into(), translation.into());
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Translator for CatalogTranslator {
    fn translate<'a>(&'a self, lang: &str, source: &'a str) -> Cow<'a, str> {
        match self.entries.get(lang).and_then(|m| m.get(source)) {
            Some(translated) => Cow::Borrowed(translated.as_str()),
            None => Cow::Borrowed(source),
        }
    }
}
