// Glossary module - the guarded keyword store and its search

mod search;
mod store;

pub use search::{common_prefix_len, SearchHit, SearchMode, SearchOptions, DEFAULT_MAX_RESULTS};
pub use store::{Glossary, MetaField};
