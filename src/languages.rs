//! Language registry: display names offered in the UI and the model tags they map to.
//!
//! The table is built once at startup (from the defaults or from the config file)
//! and shared read-only behind an `Arc`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{RegistryError, TranslateError};

/// Preferred "From" selection in the UI
pub const DEFAULT_SOURCE: &str = "English";

/// Preferred "To" selection in the UI
pub const DEFAULT_TARGET: &str = "Interslavic";

/// One selectable language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Human-readable name shown in the dropdowns (e.g. "Interslavic")
    pub name: String,

    /// Language-and-script tag understood by the model (e.g. "isv_Latn")
    pub tag: String,
}

impl LanguageEntry {
    pub fn new(name: &str, tag: &str) -> Self {
        Self {
            name: name.to_string(),
            tag: tag.to_string(),
        }
    }
}

/// Ordered, immutable mapping from display name to model tag.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    entries: Vec<LanguageEntry>,
}

impl LanguageRegistry {
    /// Build a registry from an ordered list of entries.
    ///
    /// Display names must be unique and neither names nor tags may be empty.
    /// Two names mapping to the same tag is allowed.
    pub fn new(entries: Vec<LanguageEntry>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() || entry.tag.trim().is_empty() {
                return Err(RegistryError::EmptyField(index));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(RegistryError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// Use the configured table when present, the built-in one otherwise.
    pub fn from_config(languages: Option<&[LanguageEntry]>) -> Result<Self, RegistryError> {
        match languages {
            Some(entries) => Self::new(entries.to_vec()),
            None => Ok(Self::default()),
        }
    }

    /// Look up the model tag for a display name.
    pub fn resolve(&self, display_name: &str) -> Result<&str, TranslateError> {
        self.entries
            .iter()
            .find(|entry| entry.name == display_name)
            .map(|entry| entry.tag.as_str())
            .ok_or_else(|| TranslateError::unknown_language(display_name))
    }

    pub fn contains(&self, display_name: &str) -> bool {
        self.entries.iter().any(|entry| entry.name == display_name)
    }

    /// Display names in dropdown order
    pub fn display_names(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.name.as_str()).collect()
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// "English" when available, otherwise the first entry
    pub fn default_source(&self) -> &str {
        self.preferred_or_first(DEFAULT_SOURCE)
    }

    /// "Interslavic" when available, otherwise the first entry
    pub fn default_target(&self) -> &str {
        self.preferred_or_first(DEFAULT_TARGET)
    }

    fn preferred_or_first(&self, preferred: &str) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.name == preferred)
            .or_else(|| self.entries.first())
            .map(|entry| entry.name.as_str())
            .unwrap_or_default()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self {
            entries: default_languages(),
        }
    }
}

/// Built-in table, in UI display order.
///
/// The Cyrillic orthography of Interslavic (`isv_Cyrl`) is not listed by
/// default; it can be enabled through the `languages` section of the config.
fn default_languages() -> Vec<LanguageEntry> {
    [
        ("English", "eng_Latn"),
        ("Interslavic", "isv_Latn"),
        ("Russian", "rus_Cyrl"),
        ("Belarusian", "bel_Cyrl"),
        ("Ukrainian", "ukr_Cyrl"),
        ("Polish", "pol_Latn"),
        ("Silesian", "szl_Latn"),
        ("Czech", "ces_Latn"),
        ("Slovak", "slk_Latn"),
        ("Slovenian", "slv_Latn"),
        ("Croatian", "hrv_Latn"),
        ("Bosnian", "bos_Latn"),
        ("Serbian", "srp_Cyrl"),
        ("Macedonian", "mkd_Cyrl"),
        ("Bulgarian", "bul_Cyrl"),
        ("Esperanto", "epo_Latn"),
        ("German", "deu_Latn"),
        ("French", "fra_Latn"),
        ("Spanish", "spa_Latn"),
    ]
    .into_iter()
    .map(|(name, tag)| LanguageEntry::new(name, tag))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== resolve Tests ====================

    #[test]
    fn test_resolve_every_default_entry() {
        let registry = LanguageRegistry::default();
        let expected = [
            ("English", "eng_Latn"),
            ("Interslavic", "isv_Latn"),
            ("Russian", "rus_Cyrl"),
            ("Belarusian", "bel_Cyrl"),
            ("Ukrainian", "ukr_Cyrl"),
            ("Polish", "pol_Latn"),
            ("Silesian", "szl_Latn"),
            ("Czech", "ces_Latn"),
            ("Slovak", "slk_Latn"),
            ("Slovenian", "slv_Latn"),
            ("Croatian", "hrv_Latn"),
            ("Bosnian", "bos_Latn"),
            ("Serbian", "srp_Cyrl"),
            ("Macedonian", "mkd_Cyrl"),
            ("Bulgarian", "bul_Cyrl"),
            ("Esperanto", "epo_Latn"),
            ("German", "deu_Latn"),
            ("French", "fra_Latn"),
            ("Spanish", "spa_Latn"),
        ];

        assert_eq!(registry.len(), expected.len());
        for (name, tag) in expected {
            assert_eq!(registry.resolve(name).expect("known name"), tag);
        }
    }

    #[test]
    fn test_resolve_unknown_name() {
        let registry = LanguageRegistry::default();
        let err = registry.resolve("Klingon").unwrap_err();
        assert!(matches!(err, TranslateError::UnknownLanguage { ref name } if name == "Klingon"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = LanguageRegistry::default();
        assert!(registry.resolve("english").is_err());
        assert!(registry.resolve("").is_err());
        assert!(registry.resolve("eng_Latn").is_err());
    }

    // ==================== Ordering Tests ====================

    #[test]
    fn test_display_names_keep_table_order() {
        let registry = LanguageRegistry::default();
        let names = registry.display_names();
        assert_eq!(names[0], "English");
        assert_eq!(names[1], "Interslavic");
        assert_eq!(names.last(), Some(&"Spanish"));
    }

    #[test]
    fn test_defaults_for_dropdowns() {
        let registry = LanguageRegistry::default();
        assert_eq!(registry.default_source(), "English");
        assert_eq!(registry.default_target(), "Interslavic");
    }

    #[test]
    fn test_defaults_fall_back_to_first_entry() {
        let registry = LanguageRegistry::new(vec![
            LanguageEntry::new("Polish", "pol_Latn"),
            LanguageEntry::new("Czech", "ces_Latn"),
        ])
        .expect("valid table");
        assert_eq!(registry.default_source(), "Polish");
        assert_eq!(registry.default_target(), "Polish");
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_rejects_duplicate_names() {
        let result = LanguageRegistry::new(vec![
            LanguageEntry::new("Interslavic", "isv_Latn"),
            LanguageEntry::new("Interslavic", "isv_Cyrl"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateName("Interslavic".to_string())
        );
    }

    #[test]
    fn test_new_rejects_empty_fields() {
        let result = LanguageRegistry::new(vec![
            LanguageEntry::new("English", "eng_Latn"),
            LanguageEntry::new("Broken", " "),
        ]);
        assert_eq!(result.unwrap_err(), RegistryError::EmptyField(1));
    }

    #[test]
    fn test_new_rejects_empty_table() {
        assert_eq!(
            LanguageRegistry::new(Vec::new()).unwrap_err(),
            RegistryError::Empty
        );
    }

    #[test]
    fn test_script_variants_are_independent_entries() {
        let registry = LanguageRegistry::new(vec![
            LanguageEntry::new("Interslavic", "isv_Latn"),
            LanguageEntry::new("Интерславик", "isv_Cyrl"),
        ])
        .expect("valid table");
        assert_eq!(registry.resolve("Interslavic").unwrap(), "isv_Latn");
        assert_eq!(registry.resolve("Интерславик").unwrap(), "isv_Cyrl");
    }

    #[test]
    fn test_from_config_without_languages_uses_defaults() {
        let registry = LanguageRegistry::from_config(None).expect("defaults");
        assert_eq!(registry.len(), 19);
    }

    #[test]
    fn test_from_config_replaces_table() {
        let custom = vec![LanguageEntry::new("Esperanto", "epo_Latn")];
        let registry = LanguageRegistry::from_config(Some(&custom)).expect("valid table");
        assert_eq!(registry.display_names(), vec!["Esperanto"]);
        assert!(!registry.contains("English"));
    }
}
