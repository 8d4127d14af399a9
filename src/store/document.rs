// Persisted form of a glossary - the JSON document stored in one file

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::InfoKind;

/// The definitions and references stored under one keyword
///
/// On disk an entry is exactly `{"definitions": [...], "references": [...]}`.
/// The case-sensitivity flag recorded when the keyword is created lives only
/// in memory and is not persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    definitions: Vec<String>,
    references: Vec<String>,
    #[serde(skip)]
    case_sensitive: bool,
}

impl Entry {
    /// Create an entry seeded with at most one definition and one reference
    pub(crate) fn seeded(
        definition: Option<&str>,
        reference: Option<&str>,
        case_sensitive: bool,
    ) -> Self {
        Self {
            definitions: definition.map(str::to_string).into_iter().collect(),
            references: reference.map(str::to_string).into_iter().collect(),
            case_sensitive,
        }
    }

    /// Definitions in insertion order
    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    /// References in insertion order
    pub fn references(&self) -> &[String] {
        &self.references
    }

    /// Either sequence, selected by kind
    pub fn information(&self, kind: InfoKind) -> &[String] {
        match kind {
            InfoKind::Definitions => &self.definitions,
            InfoKind::References => &self.references,
        }
    }

    /// Whether the keyword was added as case-sensitive.
    ///
    /// Recorded at creation only; it does not influence search.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// True when both sequences are empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.references.is_empty()
    }

    pub(crate) fn push(&mut self, kind: InfoKind, value: &str) {
        self.sequence_mut(kind).push(value.to_string());
    }

    /// Remove the first occurrence of `value`, returning whether it was present
    pub(crate) fn remove_first(&mut self, kind: InfoKind, value: &str) -> bool {
        let sequence = self.sequence_mut(kind);
        match sequence.iter().position(|v| v == value) {
            Some(index) => {
                sequence.remove(index);
                true
            }
            None => false,
        }
    }

    fn sequence_mut(&mut self, kind: InfoKind) -> &mut Vec<String> {
        match kind {
            InfoKind::Definitions => &mut self.definitions,
            InfoKind::References => &mut self.references,
        }
    }
}

// Equality covers the persisted content only
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.definitions == other.definitions && self.references == other.references
    }
}

impl Eq for Entry {}

/// A whole glossary as stored on disk.
///
/// Fields are declared in alphabetical order so serialized keys come out sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlossaryDocument {
    pub author: String,
    pub contents: BTreeMap<String, Entry>,
    pub description: String,
    pub revision_date: String,
    pub title: String,
}
