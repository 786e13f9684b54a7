//! Translation-column resolution for multilingual headers.
//!
//! Store templates carry the default-language value in a base column
//! (`storeName`) and per-language values in suffixed columns
//! (`storeName_ku`, `storeName_ar`). This module maps header names to
//! (base field, language) pairs through a declared suffix registry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A non-default language a field can be translated into.
///
/// The set is closed: header suffixes outside this enumeration are never
/// treated as translations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Kurdish Sorani (`ku`)
    Kurdish,
    /// Arabic (`ar`)
    Arabic,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::Kurdish, Language::Arabic];

    /// The short language tag used in column suffixes.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Kurdish => "ku",
            Language::Arabic => "ar",
        }
    }

    /// Human-readable language name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Kurdish => "Kurdish Sorani",
            Language::Arabic => "Arabic",
        }
    }

    /// Look up a language by its tag.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One declared suffix-to-language rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRule {
    /// Header suffix, including any separator (e.g. `_ku`)
    pub suffix: String,
    /// Language the suffix marks
    pub language: Language,
}

/// Declared mapping from header suffixes to languages.
///
/// Matching is strict-suffix: a header is a translation column only when
/// it ends with a registered suffix and a non-empty base name remains.
/// `storeNameArabic` is a base column, not a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuffixRegistry {
    rules: Vec<SuffixRule>,
}

impl Default for SuffixRegistry {
    /// The standard registry: `_<code>` for every supported language.
    fn default() -> Self {
        let rules = Language::ALL
            .into_iter()
            .map(|language| SuffixRule {
                suffix: format!("_{}", language.code()),
                language,
            })
            .collect();
        Self { rules }
    }
}

impl SuffixRegistry {
    /// Create an empty registry, for building a custom rule set.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule. Later rules lose to earlier ones when both match.
    pub fn with_rule(mut self, suffix: impl Into<String>, language: Language) -> Self {
        self.rules.push(SuffixRule {
            suffix: suffix.into(),
            language,
        });
        self
    }

    /// The declared rules, in precedence order.
    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }

    /// Classify a single header name.
    pub fn classify(&self, header: &str) -> Option<TranslationField> {
        for rule in &self.rules {
            if let Some(base) = header.strip_suffix(rule.suffix.as_str()) {
                if !base.is_empty() {
                    return Some(TranslationField {
                        name: header.to_string(),
                        base: base.to_string(),
                        language: rule.language,
                    });
                }
            }
        }
        None
    }

    /// Resolve a full header list into its translation columns.
    ///
    /// Depends only on the header names; resolving the same list twice
    /// yields identical output.
    pub fn resolve(&self, headers: &[String]) -> FieldResolution {
        let translations = headers
            .iter()
            .filter_map(|h| self.classify(h))
            .collect();
        FieldResolution { translations }
    }
}

/// A header resolved as a translation column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationField {
    /// Full column name (e.g. `storeName_ku`)
    pub name: String,
    /// Base field the translation belongs to (e.g. `storeName`)
    pub base: String,
    /// Language of the translated value
    pub language: Language,
}

/// Result of resolving a header list: the translation columns, in header
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldResolution {
    /// Translation columns, in header order
    pub translations: Vec<TranslationField>,
}

impl FieldResolution {
    /// Number of translation columns.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Whether no translation columns were found.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Whether a header was resolved as a translation column.
    pub fn is_translation(&self, header: &str) -> bool {
        self.translations.iter().any(|t| t.name == header)
    }

    /// Languages present among the translation columns.
    pub fn languages(&self) -> BTreeSet<Language> {
        self.translations.iter().map(|t| t.language).collect()
    }

    /// Translation columns for one language.
    pub fn for_language(&self, language: Language) -> Vec<&TranslationField> {
        self.translations
            .iter()
            .filter(|t| t.language == language)
            .collect()
    }

    /// Distinct base fields that carry translations, in first-seen order.
    pub fn base_fields(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.translations
            .iter()
            .filter(|t| seen.insert(t.base.as_str()))
            .map(|t| t.base.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Kurdish.code(), "ku");
        assert_eq!(Language::Arabic.code(), "ar");
        assert_eq!(Language::from_code("ku"), Some(Language::Kurdish));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Kurdish.to_string(), "Kurdish Sorani");
    }

    #[test]
    fn test_resolve_store_template_headers() {
        let registry = SuffixRegistry::default();
        let resolution = registry.resolve(&headers(&[
            "storeName",
            "storeName_ku",
            "storeName_ar",
            "Address",
            "Address_ku",
            "Address_ar",
            "email",
        ]));

        assert_eq!(resolution.len(), 4);
        assert_eq!(
            resolution.translations[0],
            TranslationField {
                name: "storeName_ku".to_string(),
                base: "storeName".to_string(),
                language: Language::Kurdish,
            }
        );
        assert_eq!(resolution.translations[1].language, Language::Arabic);
        assert_eq!(resolution.translations[2].base, "Address");
        assert_eq!(resolution.translations[3].name, "Address_ar");
    }

    #[test]
    fn test_strict_suffix_matching() {
        let registry = SuffixRegistry::default();
        // suffix text in the middle of the name is not a translation
        assert!(registry.classify("storeNameArabic").is_none());
        assert!(registry.classify("ku_notes").is_none());
        // a bare suffix has no base field left
        assert!(registry.classify("_ku").is_none());
    }

    #[test]
    fn test_unknown_suffix_ignored() {
        let registry = SuffixRegistry::default();
        assert!(registry.classify("storeName_fr").is_none());
        assert!(registry.classify("storeName_kurdish").is_none());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let registry = SuffixRegistry::default();
        let names = headers(&["storeName", "storeName_ku", "Address_ar", "zone_id"]);
        let first = registry.resolve(&names);
        let second = registry.resolve(&names);
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_helpers() {
        let registry = SuffixRegistry::default();
        let resolution = registry.resolve(&headers(&[
            "storeName",
            "storeName_ku",
            "storeName_ar",
            "Address_ku",
        ]));

        assert!(resolution.is_translation("storeName_ku"));
        assert!(!resolution.is_translation("storeName"));
        assert_eq!(resolution.for_language(Language::Kurdish).len(), 2);
        assert_eq!(resolution.for_language(Language::Arabic).len(), 1);
        assert_eq!(resolution.base_fields(), vec!["storeName", "Address"]);
        assert_eq!(resolution.languages().len(), 2);
    }

    #[test]
    fn test_custom_rule() {
        let registry = SuffixRegistry::empty().with_rule("-ar", Language::Arabic);
        let field = registry.classify("Address-ar").unwrap();
        assert_eq!(field.base, "Address");
        assert_eq!(field.language, Language::Arabic);
        assert!(registry.classify("Address_ar").is_none());
    }
}
