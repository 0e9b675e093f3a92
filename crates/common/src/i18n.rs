//! Translation lookup with fallback-to-key semantics
//!
//! Loaded once at startup and injected into whatever renders user-facing
//! text. A missing or unparsable translation file degrades to identity
//! translation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

/// Key -> translated text table
#[derive(Debug, Clone, Default)]
pub struct Translator {
    entries: HashMap<String, String>,
}

impl Translator {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Identity translator
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a JSON object of string pairs. Any failure yields the empty
    /// table with a warning, never an error.
    pub fn from_path(path: &Path) -> Self {
        let entries = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| {
                serde_json::from_str::<HashMap<String, String>>(&text).map_err(|e| e.to_string())
            });

        match entries {
            Ok(entries) => Self { entries },
            Err(error) => {
                warn!(path = %path.display(), %error, "Could not get or parse translation");
                Self::empty()
            }
        }
    }

    /// Translated text for `key`, or the key itself when unknown
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(key)
    }
}
