//! File storage for glossaries.
//!
//! - `backend`: stateless load/validate/persist functions and clock helpers
//! - `document`: the serde types of the persisted JSON document

pub mod backend;
mod document;

pub use document::{Entry, GlossaryDocument};
