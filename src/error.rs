// Error taxonomy shared by the store backend and the glossary container

use std::path::PathBuf;

/// Which sequence of an entry an operation targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    Definitions,
    References,
}

impl InfoKind {
    /// Singular noun used in messages ("definition", "reference")
    pub fn noun(self) -> &'static str {
        match self {
            InfoKind::Definitions => "definition",
            InfoKind::References => "reference",
        }
    }
}

impl std::fmt::Display for InfoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}

/// Error types for glossary operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GlossaryError {
    /// Nothing exists at the requested path
    #[error("No glossary found at {0:?}")]
    ResourceNotFound(PathBuf),
    /// The path exists but is a directory or another non-file node
    #[error("{0:?} is not a regular file")]
    NotAFile(PathBuf),
    /// The file does not parse as JSON
    #[error("Malformed content in {path:?}: {message}")]
    MalformedContent { path: PathBuf, message: String },
    /// The file parses but does not have the glossary shape
    #[error("{path:?} is not a glossary: {reason}")]
    NotAGlossary { path: PathBuf, reason: String },
    /// `add` was called without a definition or a reference
    #[error("No definition or reference given")]
    EmptyContent,
    /// The keyword is not in the glossary
    #[error("Keyword '{0}' not found")]
    UnknownKeyword(String),
    /// The keyword exists but the given definition/reference does not
    #[error("The {kind} '{value}' was not found under keyword '{keyword}'")]
    ValueNotFound {
        keyword: String,
        kind: InfoKind,
        value: String,
    },
    /// An argument is outside its accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Failed to read or write the backing file
    #[error("Failed to persist glossary: {0}")]
    PersistenceError(String),
}
