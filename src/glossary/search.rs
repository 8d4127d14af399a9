// Keyword search - resolves an imprecise query against the glossary keywords
// Candidates are ranked by Damerau-Levenshtein distance to the query

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use strsim::damerau_levenshtein;

use crate::error::GlossaryError;

/// Default number of hits returned by a search
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// How candidate keywords are selected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Keywords equal to the query
    Exact,
    /// Keywords containing the query as a literal substring
    SubStr,
    /// Every keyword
    #[default]
    Approx,
    /// Keywords matched anywhere by the query read as a regular expression
    Pattern,
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(SearchMode::Exact),
            "substr" => Ok(SearchMode::SubStr),
            "approx" => Ok(SearchMode::Approx),
            "pattern" => Ok(SearchMode::Pattern),
            _ => Err(format!("Unknown search mode: {}", s)),
        }
    }
}

/// Configuration for a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Compare the query and keywords without lower-casing them
    pub case_sensitive: bool,
    pub mode: SearchMode,
    /// Upper bound on the number of hits, must be at least 1
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            mode: SearchMode::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

/// A keyword matched by a search, with its edit distance to the query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// The keyword as stored, in its original case
    pub keyword: String,
    pub distance: usize,
}

/// Candidate selection compiled from the query
enum KeyFilter {
    Equal,
    Contains,
    Matches(Regex),
    Any,
}

impl KeyFilter {
    fn new(raw_query: &str, options: &SearchOptions) -> Result<Self, GlossaryError> {
        let filter = match options.mode {
            SearchMode::Exact => KeyFilter::Equal,
            SearchMode::SubStr => KeyFilter::Contains,
            SearchMode::Approx => KeyFilter::Any,
            SearchMode::Pattern => {
                KeyFilter::Matches(compile(raw_query, options.case_sensitive)?)
            }
        };
        Ok(filter)
    }

    fn accepts(&self, query: &str, candidate: &str) -> bool {
        match self {
            KeyFilter::Equal => candidate == query,
            KeyFilter::Contains => candidate.contains(query),
            KeyFilter::Matches(regex) => regex.is_match(candidate),
            KeyFilter::Any => true,
        }
    }
}

fn compile(pattern: &str, case_sensitive: bool) -> Result<Regex, GlossaryError> {
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map_err(|e| GlossaryError::InvalidArgument(format!("Invalid search pattern: {}", e)))
}

fn normalize(text: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        text.to_string()
    } else {
        text.to_lowercase()
    }
}

/// Length in code points of the common prefix of `a` and `b`
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

struct Ranked<'a> {
    keyword: &'a str,
    distance: usize,
    prefix: usize,
    verbatim: bool,
}

/// Search `keywords` for `query`.
///
/// Hits are ordered by ascending edit distance, then by descending length
/// of the prefix shared with the query, then a keyword equal to the raw query
/// comes first, then keywords sort ascending. At most `max_results` hits are
/// returned, and `Exact` mode returns at most one. An empty vector means
/// nothing matched.
pub fn search<'a>(
    keywords: impl IntoIterator<Item = &'a str>,
    query: &str,
    options: &SearchOptions,
) -> Result<Vec<SearchHit>, GlossaryError> {
    if options.max_results < 1 {
        return Err(GlossaryError::InvalidArgument(format!(
            "max_results must be at least 1, got {}",
            options.max_results
        )));
    }

    let mut keywords = keywords.into_iter().peekable();
    if keywords.peek().is_none() {
        return Ok(Vec::new());
    }

    let normalized_query = normalize(query, options.case_sensitive);
    let filter = KeyFilter::new(query, options)?;

    let mut ranked: Vec<Ranked<'a>> = keywords
        .filter_map(|keyword| {
            let candidate = normalize(keyword, options.case_sensitive);
            if !filter.accepts(&normalized_query, &candidate) {
                return None;
            }
            Some(Ranked {
                keyword,
                distance: damerau_levenshtein(&normalized_query, &candidate),
                prefix: common_prefix_len(&normalized_query, &candidate),
                verbatim: keyword == query,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then_with(|| b.prefix.cmp(&a.prefix))
            .then_with(|| b.verbatim.cmp(&a.verbatim))
            .then_with(|| a.keyword.cmp(b.keyword))
    });

    let limit = match options.mode {
        SearchMode::Exact => 1,
        _ => options.max_results,
    };
    ranked.truncate(limit);

    crate::debug!(
        "Search for '{}' ({:?}) matched {} keywords",
        query,
        options.mode,
        ranked.len()
    );

    Ok(ranked
        .into_iter()
        .map(|r| SearchHit {
            keyword: r.keyword.to_string(),
            distance: r.distance,
        })
        .collect())
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
