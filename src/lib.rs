//! Persistent keyword-indexed glossary store.
//!
//! A [`Glossary`] maps keywords to entries of definitions and references and is
//! backed by a single JSON file. Mutations are kept in memory until
//! [`Glossary::save`]; keywords can be looked up exactly, by substring or
//! approximately, ranked by Damerau-Levenshtein distance.
//!
//! ```no_run
//! use glossary_lib::{Glossary, SearchOptions};
//!
//! let mut glossary = Glossary::open_or_create("rust.json", "Rust", "me", "Vocabulary")?;
//! glossary.add("borrow", "A reference to a value", "", false)?;
//! glossary.save()?;
//!
//! let hits = glossary.search("borow", &SearchOptions::default())?;
//! assert_eq!(hits[0].keyword, "borrow");
//! # Ok::<(), glossary_lib::GlossaryError>(())
//! ```

// Enable coverage attribute on nightly for explicit exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod cli;
pub mod error;
pub mod glossary;
mod logging;
pub mod paths;
pub mod store;

// Re-export log macros for use throughout the crate
pub use log::{debug, error, info, trace, warn};

pub use error::{GlossaryError, InfoKind};
pub use glossary::{Glossary, MetaField, SearchHit, SearchMode, SearchOptions};
pub use store::{Entry, GlossaryDocument};

/// Command-line entry point, returns the process exit code.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn run() -> i32 {
    cli::run()
}
