//! Folding key occurrences into one canonical record per key.
//!
//! The aggregator owns all mutation: records are built up inside the fold
//! and handed out as an immutable [`AggregatedReport`] snapshot. Each run
//! starts from an empty report; nothing persists across runs.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Serialize;

use super::occurrence::{KeyOccurrence, Scope};

/// Canonical record for one distinct configuration key.
///
/// The value/origin/description collections are sets: pushing a value
/// already present is a no-op, so duplicate occurrences are idempotent.
/// Several distinct defaults for one key indicate an inconsistency across
/// the codebase and are surfaced as-is, never collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRecord {
    pub key: String,
    pub scope: Scope,
    pub default_values: BTreeSet<String>,
    pub origin_labels: BTreeSet<String>,
    pub descriptions: BTreeSet<String>,
}

impl KeyRecord {
    fn new(key: String) -> Self {
        Self {
            key,
            scope: Scope::NotSpecified,
            default_values: BTreeSet::new(),
            origin_labels: BTreeSet::new(),
            descriptions: BTreeSet::new(),
        }
    }

    /// Union one occurrence into this record.
    ///
    /// Empty defaults and empty descriptions never enter their sets. The
    /// scope is first-wins: once specified it is never overwritten by a
    /// later occurrence, a behavior kept for compatibility with existing
    /// extraction runs rather than because it is obviously right.
    fn push(&mut self, occurrence: KeyOccurrence) {
        let KeyOccurrence {
            default_value,
            origin_label,
            scope,
            description,
            ..
        } = occurrence;

        if let Some(value) = default_value
            && !value.is_empty()
        {
            self.default_values.insert(value);
        }
        self.origin_labels.insert(origin_label);
        if !description.is_empty() {
            self.descriptions.insert(description);
        }
        if !self.scope.is_specified() {
            self.scope = scope;
        }
    }

    pub fn has_default_values(&self) -> bool {
        !self.default_values.is_empty()
    }

    pub fn default_values_joined(&self) -> String {
        join(&self.default_values)
    }

    pub fn origin_labels_joined(&self) -> String {
        join(&self.origin_labels)
    }

    pub fn descriptions_joined(&self) -> String {
        join(&self.descriptions)
    }
}

fn join(values: &BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Immutable result of one aggregation run: one [`KeyRecord`] per distinct
/// key, sorted lexicographically by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedReport {
    records: Vec<KeyRecord>,
}

impl AggregatedReport {
    pub fn records(&self) -> &[KeyRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Fold occurrences into an [`AggregatedReport`].
///
/// Occurrences are processed in the order supplied by the caller; the
/// output ordering guarantee comes from the final sort by key, not from
/// input order. The fold itself is sequential because the first-wins scope
/// rule is order-sensitive. An empty input yields an empty report; there
/// are no failure modes.
pub fn aggregate(occurrences: impl IntoIterator<Item = KeyOccurrence>) -> AggregatedReport {
    let mut by_key: BTreeMap<String, KeyRecord> = BTreeMap::new();

    for occurrence in occurrences {
        by_key
            .entry(occurrence.key.clone())
            .or_insert_with(|| KeyRecord::new(occurrence.key.clone()))
            .push(occurrence);
    }

    // BTreeMap iteration order is the lexical key order the report promises.
    AggregatedReport {
        records: by_key.into_values().collect(),
    }
}
