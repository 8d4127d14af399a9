// Glossary - keyword to entry mapping backed by one JSON file
// Mutation goes through add/remove/edit_meta only; nothing is written until save

use std::collections::btree_map::{self, BTreeMap};
use std::path::{Path, PathBuf};

use super::search::{self, SearchHit, SearchOptions};
use crate::error::{GlossaryError, InfoKind};
use crate::store::backend;
use crate::store::{Entry, GlossaryDocument};

/// Editable metadata fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaField {
    Title,
    Author,
    Description,
}

impl std::str::FromStr for MetaField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(MetaField::Title),
            "author" => Ok(MetaField::Author),
            "description" => Ok(MetaField::Description),
            _ => Err(format!("Unknown metadata field: {}", s)),
        }
    }
}

/// A definition or reference argument that names nothing. Whitespace is a real value.
fn is_blank(value: &str) -> bool {
    value.is_empty()
}

/// A keyword-indexed glossary with its metadata.
///
/// The mapping is readable through [`get`](Self::get), [`iter`](Self::iter) and
/// friends, but there is no way to reach it mutably except through
/// [`add`](Self::add) and [`remove`](Self::remove):
///
/// ```compile_fail
/// use glossary_lib::Glossary;
///
/// let mut glossary = Glossary::open_or_create("terms.json", "", "", "").unwrap();
/// glossary.entries.clear();
/// ```
///
/// Dropping a glossary does not save it.
#[derive(Debug)]
pub struct Glossary {
    title: String,
    author: String,
    description: String,
    revision_date: String,
    path: PathBuf,
    entries: BTreeMap<String, Entry>,
    edited: bool,
}

impl Glossary {
    /// Load the glossary stored at `path`.
    ///
    /// Fails with `ResourceNotFound`, `NotAFile`, `MalformedContent` or
    /// `NotAGlossary` as reported by the store backend.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, GlossaryError> {
        let path = path.into();
        let document = backend::load(&path)?;

        crate::info!(
            "Initialized {:?} with {} keywords",
            path,
            document.contents.len()
        );
        Ok(Self::from_document(path, document))
    }

    /// Load the glossary at `path`, or start a blank one with the given
    /// metadata when nothing exists there yet.
    ///
    /// A blank glossary is not written until [`save`](Self::save) is called,
    /// and it starts out unedited.
    pub fn open_or_create(
        path: impl Into<PathBuf>,
        title: &str,
        author: &str,
        description: &str,
    ) -> Result<Self, GlossaryError> {
        let path = path.into();

        if path.exists() {
            if !path.is_file() {
                return Err(GlossaryError::NotAFile(path));
            }
            return Self::open(path);
        }

        let document = backend::materialize_blank(title, author, description);
        crate::info!("Created new glossary {:?}", path);
        Ok(Self::from_document(path, document))
    }

    fn from_document(path: PathBuf, document: GlossaryDocument) -> Self {
        Self {
            title: document.title,
            author: document.author,
            description: document.description,
            revision_date: document.revision_date,
            path,
            entries: document.contents,
            edited: false,
        }
    }

    /// Snapshot of the metadata and mapping in persisted form
    pub fn to_document(&self) -> GlossaryDocument {
        GlossaryDocument {
            title: self.title.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            revision_date: self.revision_date.clone(),
            contents: self.entries.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Date of the last successful save, or of creation/load before any save
    pub fn revision_date(&self) -> &str {
        &self.revision_date
    }

    /// Path of the backing file, fixed for the lifetime of the glossary
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are mutations not yet saved
    pub fn is_edited(&self) -> bool {
        self.edited
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    /// Get the entry stored under `keyword`
    pub fn get(&self, keyword: &str) -> Option<&Entry> {
        self.entries.get(keyword)
    }

    /// Keywords in sorted order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Keyword/entry pairs in keyword order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Entry> {
        self.entries.iter()
    }

    /// Definitions or references of `keyword`, `None` if the keyword is absent
    pub fn information_on(&self, keyword: &str, kind: InfoKind) -> Option<&[String]> {
        self.entries.get(keyword).map(|entry| entry.information(kind))
    }

    /// Definitions of `keyword`, `None` if the keyword is absent
    pub fn definition_of(&self, keyword: &str) -> Option<&[String]> {
        self.information_on(keyword, InfoKind::Definitions)
    }

    /// References of `keyword`, `None` if the keyword is absent
    pub fn references_of(&self, keyword: &str) -> Option<&[String]> {
        self.information_on(keyword, InfoKind::References)
    }

    /// Add a definition and/or reference to `keyword`, creating it if needed.
    ///
    /// Empty values are skipped; at least one must be non-empty. When both are
    /// given, both are appended. `case_sensitive` is recorded only when the
    /// keyword is created.
    #[must_use = "this returns a Result that should be handled"]
    pub fn add(
        &mut self,
        keyword: &str,
        definition: &str,
        reference: &str,
        case_sensitive: bool,
    ) -> Result<(), GlossaryError> {
        if is_blank(definition) && is_blank(reference) {
            return Err(GlossaryError::EmptyContent);
        }
        if keyword.trim().is_empty() {
            return Err(GlossaryError::InvalidArgument(
                "Keyword cannot be empty".to_string(),
            ));
        }

        let additions = [
            (InfoKind::Definitions, definition),
            (InfoKind::References, reference),
        ];

        match self.entries.get_mut(keyword) {
            Some(entry) => {
                for (kind, value) in additions.into_iter().filter(|(_, v)| !is_blank(v)) {
                    entry.push(kind, value);
                    crate::info!(
                        "Added the {} '{}' to keyword '{}' in {:?}",
                        kind,
                        value,
                        keyword,
                        self.path
                    );
                }
            }
            None => {
                let entry = Entry::seeded(
                    Some(definition).filter(|v| !is_blank(v)),
                    Some(reference).filter(|v| !is_blank(v)),
                    case_sensitive,
                );
                self.entries.insert(keyword.to_string(), entry);
                crate::info!("Added the keyword '{}' to {:?}", keyword, self.path);
            }
        }

        self.edited = true;
        Ok(())
    }

    /// Remove a definition, a reference, or the whole keyword.
    ///
    /// With a non-empty `definition` only that definition's first occurrence is
    /// removed and `reference` is ignored. Otherwise a non-empty `reference` is
    /// removed. With both empty the keyword and its entry are deleted. Removing
    /// the last value leaves the keyword in place with an empty entry.
    #[must_use = "this returns a Result that should be handled"]
    pub fn remove(
        &mut self,
        keyword: &str,
        definition: &str,
        reference: &str,
    ) -> Result<(), GlossaryError> {
        let Some(entry) = self.entries.get_mut(keyword) else {
            return Err(GlossaryError::UnknownKeyword(keyword.to_string()));
        };

        let target = if !is_blank(definition) {
            Some((InfoKind::Definitions, definition))
        } else if !is_blank(reference) {
            Some((InfoKind::References, reference))
        } else {
            None
        };

        match target {
            Some((kind, value)) => {
                if !entry.remove_first(kind, value) {
                    return Err(GlossaryError::ValueNotFound {
                        keyword: keyword.to_string(),
                        kind,
                        value: value.to_string(),
                    });
                }
                crate::info!(
                    "Removed the {} '{}' from keyword '{}' in {:?}",
                    kind,
                    value,
                    keyword,
                    self.path
                );
            }
            None => {
                self.entries.remove(keyword);
                crate::warn!(
                    "Removed the keyword '{}' and all of its content from {:?}",
                    keyword,
                    self.path
                );
            }
        }

        self.edited = true;
        Ok(())
    }

    /// Set a metadata field. The revision date is left for `save` to update.
    pub fn edit_meta(&mut self, field: MetaField, new_value: &str) {
        let slot = match field {
            MetaField::Title => &mut self.title,
            MetaField::Author => &mut self.author,
            MetaField::Description => &mut self.description,
        };
        *slot = new_value.to_string();
        crate::info!("Set {:?} of {:?} to '{}'", field, self.path, new_value);
        self.edited = true;
    }

    /// Write the glossary to its file if it was edited.
    ///
    /// Stamps the revision date with today's date first. On failure the
    /// previous date is restored and the glossary stays edited.
    pub fn save(&mut self) -> Result<(), GlossaryError> {
        if !self.edited {
            crate::debug!("No changes to save in {:?}", self.path);
            return Ok(());
        }

        let previous_date = std::mem::replace(&mut self.revision_date, backend::current_date());

        if let Err(e) = backend::persist(&self.to_document(), &self.path) {
            self.revision_date = previous_date;
            crate::error!("Failed to save {:?}: {}", self.path, e);
            return Err(e);
        }

        self.edited = false;
        crate::info!("Saved {:?} ({} keywords)", self.path, self.entries.len());
        Ok(())
    }

    /// Rank keywords against `query`, see [`SearchOptions`]
    pub fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchHit>, GlossaryError> {
        search::search(self.keywords(), query, options)
    }
}

impl<'a> IntoIterator for &'a Glossary {
    type Item = (&'a String, &'a Entry);
    type IntoIter = btree_map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Drop for Glossary {
    fn drop(&mut self) {
        if self.edited {
            crate::warn!("Discarding unsaved changes to {:?}", self.path);
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
