//! Database import impact estimation.
//!
//! Mirrors what the bulk importer creates per template row: one vendor
//! account, one store, and one translation row per populated translation
//! cell. Counting never touches the database; it is derived from the
//! loaded table alone.

use crate::lang::{FieldResolution, Language};
use crate::model::SourceTable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Estimation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactOptions {
    /// Field whose values must be unique across the import (duplicate
    /// detection key).
    pub unique_field: String,
}

impl Default for ImpactOptions {
    fn default() -> Self {
        Self {
            unique_field: "email".to_string(),
        }
    }
}

impl ImpactOptions {
    /// Options with a custom unique field.
    pub fn with_unique_field(unique_field: impl Into<String>) -> Self {
        Self {
            unique_field: unique_field.into(),
        }
    }
}

/// Per-language translation counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageBreakdown {
    /// The language
    pub language: Language,
    /// Records with at least one populated translation in this language
    pub translated_records: usize,
    /// Populated translation cells in this language
    pub translation_entries: usize,
}

/// What an import run would create, derived from one loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportImpact {
    /// New rows in the primary collection (stores), one per record
    pub primary_count: usize,
    /// New rows in the satellite collection (vendors), one per record
    pub satellite_count: usize,
    /// New translation rows, one per populated translation cell
    pub translation_count: usize,
    /// Records whose unique-field value collides with an earlier record
    pub duplicate_count: usize,
    /// The declared unique field the duplicate count is keyed on
    pub unique_field: String,
    /// Per-language counts, one entry per language with translation
    /// columns in the source
    pub languages: Vec<LanguageBreakdown>,
}

impl ImportImpact {
    /// Total new database rows across all three collections.
    pub fn total_rows(&self) -> usize {
        self.primary_count + self.satellite_count + self.translation_count
    }

    /// Whether the unique-field check passed.
    pub fn is_unique(&self) -> bool {
        self.duplicate_count == 0
    }
}

/// Estimate the import impact of a loaded table.
///
/// Never fails: a record with an absent field simply contributes nothing
/// for that field, and an empty table yields all-zero counts.
pub fn estimate(
    table: &SourceTable,
    resolution: &FieldResolution,
    options: &ImpactOptions,
) -> ImportImpact {
    let record_count = table.record_count();

    let mut translation_count = 0;
    let mut languages = Vec::new();

    for language in resolution.languages() {
        let fields = resolution.for_language(language);
        let mut translated_records = 0;
        let mut translation_entries = 0;

        for record in &table.records {
            let populated = fields
                .iter()
                .filter(|f| record.presence(&f.name).is_filled())
                .count();
            translation_entries += populated;
            if populated > 0 {
                translated_records += 1;
            }
        }

        translation_count += translation_entries;
        languages.push(LanguageBreakdown {
            language,
            translated_records,
            translation_entries,
        });
    }

    ImportImpact {
        primary_count: record_count,
        satellite_count: record_count,
        translation_count,
        duplicate_count: duplicate_count(table, &options.unique_field),
        unique_field: options.unique_field.clone(),
        languages,
    }
}

/// Count unique-field collisions: records carrying a value minus distinct
/// values. Records missing the field entirely stay out of the check.
fn duplicate_count(table: &SourceTable, unique_field: &str) -> usize {
    let mut present = 0;
    let mut distinct = HashSet::new();

    for record in &table.records {
        if let Some(value) = record.get(unique_field) {
            present += 1;
            distinct.insert(value.display_string());
        }
    }

    present - distinct.len()
}
