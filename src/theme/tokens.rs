// SPDX-License-Identifier: MPL-2.0
//! Design-token dictionary.
//!
//! Tokens live in `assets/tokens.toml`, embedded into the binary and
//! deserialized once at startup. The document has a single `global`
//! namespace; every entry carries a `value`, optionally a `unit`, and
//! color entries that change with the theme carry a `dark` variant.
//! The dictionary is immutable after load.

use crate::error::TokenError;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "tokens.toml"]
struct Asset;

const TOKENS_FILE: &str = "tokens.toml";

/// A token literal: dimension tokens are numbers, color tokens are strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Number(f64),
    Text(String),
}

/// One dictionary entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenEntry {
    pub value: TokenValue,
    #[serde(default)]
    pub unit: Option<String>,
    /// Mode-specific variant; present only for tokens that differ in dark mode.
    #[serde(default)]
    pub dark: Option<TokenValue>,
}

impl TokenEntry {
    /// Resolves the entry for the given mode. Entries without a `dark`
    /// variant resolve to the same literal in both modes.
    #[must_use]
    pub fn resolved(&self, dark_mode: bool) -> &TokenValue {
        match &self.dark {
            Some(dark) if dark_mode => dark,
            _ => &self.value,
        }
    }

    /// Returns true if the entry defines a mode-specific variant.
    #[must_use]
    pub fn has_mode_variant(&self) -> bool {
        self.dark.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct TokenDocument {
    global: BTreeMap<String, TokenEntry>,
}

/// The loaded `global` token namespace.
#[derive(Debug, Clone)]
pub struct TokenDictionary {
    entries: BTreeMap<String, TokenEntry>,
}

impl TokenDictionary {
    /// Parses a dictionary from TOML source.
    pub fn from_str(source: &str) -> Result<Self, TokenError> {
        let document: TokenDocument =
            toml::from_str(source).map_err(|err| TokenError::Parse(err.to_string()))?;
        Ok(Self {
            entries: document.global,
        })
    }

    /// Loads the dictionary embedded at build time.
    pub fn from_embedded() -> Result<Self, TokenError> {
        let file = Asset::get(TOKENS_FILE)
            .ok_or_else(|| TokenError::Parse(format!("embedded asset '{TOKENS_FILE}' missing")))?;
        let source = String::from_utf8_lossy(file.data.as_ref());
        Self::from_str(&source)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TokenEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Token names in dictionary order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
[global.Spacing8]
value = 8.0
unit = "px"

[global.Background]
value = "#ffffff"
dark = "#202020"
"##;

    #[test]
    fn parses_number_and_color_entries() {
        let dict = TokenDictionary::from_str(SAMPLE).expect("sample should parse");
        assert_eq!(dict.len(), 2);

        let spacing = dict.get("Spacing8").expect("Spacing8 defined");
        assert_eq!(spacing.value, TokenValue::Number(8.0));
        assert_eq!(spacing.unit.as_deref(), Some("px"));
        assert!(!spacing.has_mode_variant());

        let background = dict.get("Background").expect("Background defined");
        assert!(background.has_mode_variant());
    }

    #[test]
    fn resolved_branches_on_mode_only_with_variant() {
        let dict = TokenDictionary::from_str(SAMPLE).expect("sample should parse");

        let spacing = dict.get("Spacing8").unwrap();
        assert_eq!(spacing.resolved(true), spacing.resolved(false));

        let background = dict.get("Background").unwrap();
        assert_ne!(background.resolved(true), background.resolved(false));
        assert_eq!(
            background.resolved(true),
            &TokenValue::Text("#202020".into())
        );
    }

    #[test]
    fn unknown_token_is_absent() {
        let dict = TokenDictionary::from_str(SAMPLE).expect("sample should parse");
        assert!(dict.get("NoSuchToken").is_none());
        assert!(!dict.contains("NoSuchToken"));
    }

    #[test]
    fn malformed_document_reports_parse_error() {
        let result = TokenDictionary::from_str("not = valid = toml");
        assert!(matches!(result, Err(TokenError::Parse(_))));
    }

    #[test]
    fn entry_without_value_is_rejected() {
        let result = TokenDictionary::from_str("[global.Broken]\nunit = \"px\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn embedded_dictionary_loads() {
        let dict = TokenDictionary::from_embedded().expect("embedded tokens should parse");
        assert!(!dict.is_empty());
        assert!(dict.contains("Spacing20"));
        assert!(dict.contains("BackdropColor"));
    }

    #[test]
    fn names_iterate_in_dictionary_order() {
        let dict = TokenDictionary::from_str(SAMPLE).expect("sample should parse");
        let names: Vec<&str> = dict.names().collect();
        assert_eq!(names, vec!["Background", "Spacing8"]);
    }
}
