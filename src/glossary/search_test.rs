// Tests for keyword search
// Test cases:
// - Approx ranks by distance, then longest common prefix, then keyword
// - SubStr only considers keywords containing the query, at any query length
// - Exact returns a single hit with distance 0
// - Results are capped at exactly max_results
// - max_results of 0 is rejected; an empty keyword set yields no hits
// - Case handling and transposition-aware distances

use super::*;

const KEYWORDS: [&str; 6] = [
    "keyword1",
    "keyword",
    "keywords",
    "keyswords",
    "keywords1",
    "keyswords1",
];

fn hits(expected: &[(&str, usize)]) -> Vec<SearchHit> {
    expected
        .iter()
        .map(|(keyword, distance)| SearchHit {
            keyword: keyword.to_string(),
            distance: *distance,
        })
        .collect()
}

fn with_mode(mode: SearchMode) -> SearchOptions {
    SearchOptions {
        mode,
        ..Default::default()
    }
}

#[test]
fn test_default_options() {
    let options = SearchOptions::default();
    assert!(!options.case_sensitive);
    assert_eq!(options.mode, SearchMode::Approx);
    assert_eq!(options.max_results, DEFAULT_MAX_RESULTS);
}

#[test]
fn test_approx_ranking() {
    let result = search(KEYWORDS, "keyword", &SearchOptions::default()).unwrap();

    // Distance 2 ties: "keywords1" shares 7 leading chars, "keyswords" only 3
    assert_eq!(
        result,
        hits(&[
            ("keyword", 0),
            ("keyword1", 1),
            ("keywords", 1),
            ("keywords1", 2),
            ("keyswords", 2),
        ])
    );
}

#[test]
fn test_approx_returns_everything_when_under_cap() {
    let options = SearchOptions {
        max_results: 10,
        ..Default::default()
    };
    let result = search(KEYWORDS, "keyword", &options).unwrap();

    assert_eq!(result.len(), KEYWORDS.len());
    assert_eq!(result.last().unwrap(), &hits(&[("keyswords1", 3)])[0]);
}

#[test]
fn test_substr_filters_candidates() {
    let result = search(KEYWORDS, "keyword", &with_mode(SearchMode::SubStr)).unwrap();

    assert_eq!(
        result,
        hits(&[
            ("keyword", 0),
            ("keyword1", 1),
            ("keywords", 1),
            ("keywords1", 2),
        ])
    );
}

#[test]
fn test_substr_is_not_anchored_and_literal() {
    let keywords = ["a.b", "axb", "the a.b rule"];
    let result = search(keywords, "a.b", &with_mode(SearchMode::SubStr)).unwrap();

    let found: Vec<&str> = result.iter().map(|h| h.keyword.as_str()).collect();
    assert_eq!(found, vec!["a.b", "the a.b rule"]);
}

#[test]
fn test_substr_long_query_finds_nothing() {
    let query = "a".repeat(2_000_000);
    let result = search(["keyword"], &query, &with_mode(SearchMode::SubStr)).unwrap();

    assert!(result.is_empty());
}

#[test]
fn test_exact_match() {
    let result = search(KEYWORDS, "keyword", &with_mode(SearchMode::Exact)).unwrap();
    assert_eq!(result, hits(&[("keyword", 0)]));

    let missing = search(KEYWORDS, "keyw", &with_mode(SearchMode::Exact)).unwrap();
    assert!(missing.is_empty());
}

#[test]
fn test_exact_returns_original_case() {
    let result = search(["KeyWord"], "keyword", &with_mode(SearchMode::Exact)).unwrap();
    assert_eq!(result, hits(&[("KeyWord", 0)]));
}

#[test]
fn test_exact_prefers_verbatim_keyword() {
    let result = search(["Rust", "rust"], "Rust", &with_mode(SearchMode::Exact)).unwrap();
    assert_eq!(result, hits(&[("Rust", 0)]));

    let result = search(["Rust", "rust"], "rust", &with_mode(SearchMode::Exact)).unwrap();
    assert_eq!(result, hits(&[("rust", 0)]));
}

#[test]
fn test_case_sensitive_search() {
    let options = SearchOptions {
        case_sensitive: true,
        mode: SearchMode::Exact,
        ..Default::default()
    };
    assert!(search(["KeyWord"], "keyword", &options).unwrap().is_empty());

    let options = SearchOptions {
        case_sensitive: true,
        ..Default::default()
    };
    let result = search(["KeyWord", "keyword"], "keyword", &options).unwrap();
    assert_eq!(result, hits(&[("keyword", 0), ("KeyWord", 2)]));
}

#[test]
fn test_max_results_is_an_exact_cap() {
    for max_results in 1..=5 {
        let options = SearchOptions {
            max_results,
            ..Default::default()
        };
        let result = search(KEYWORDS, "keyword", &options).unwrap();
        assert_eq!(result.len(), max_results);
    }
}

#[test]
fn test_zero_max_results_rejected() {
    let options = SearchOptions {
        max_results: 0,
        ..Default::default()
    };
    let result = search(KEYWORDS, "keyword", &options);
    assert!(matches!(result, Err(GlossaryError::InvalidArgument(_))));

    // The argument check comes before the empty-set shortcut
    let result = search(std::iter::empty(), "keyword", &options);
    assert!(matches!(result, Err(GlossaryError::InvalidArgument(_))));
}

#[test]
fn test_empty_keyword_set_returns_nothing() {
    for mode in [
        SearchMode::Exact,
        SearchMode::SubStr,
        SearchMode::Approx,
        SearchMode::Pattern,
    ] {
        let result = search(std::iter::empty(), "keyword", &with_mode(mode)).unwrap();
        assert!(result.is_empty(), "mode {:?} returned {:?}", mode, result);
    }
}

#[test]
fn test_transposition_costs_one() {
    let result = search(["keyword", "keyboard"], "keywrod", &SearchOptions::default()).unwrap();
    assert_eq!(result, hits(&[("keyword", 1), ("keyboard", 4)]));
}

#[test]
fn test_pattern_mode() {
    let result = search(KEYWORDS, "^keys?words$", &with_mode(SearchMode::Pattern)).unwrap();

    // Distances are measured against the pattern text itself
    let found: Vec<&str> = result.iter().map(|h| h.keyword.as_str()).collect();
    assert_eq!(found, vec!["keyswords", "keywords"]);
}

#[test]
fn test_pattern_mode_rejects_invalid_regex() {
    let result = search(KEYWORDS, "key(", &with_mode(SearchMode::Pattern));
    assert!(matches!(result, Err(GlossaryError::InvalidArgument(_))));
}

#[test]
fn test_common_prefix_len() {
    assert_eq!(common_prefix_len("keyword", "keyswords"), 3);
    assert_eq!(common_prefix_len("keyword", "keyword1"), 7);
    assert_eq!(common_prefix_len("", "keyword"), 0);
    assert_eq!(common_prefix_len("héllo", "hélp"), 3);
}

#[test]
fn test_search_mode_from_str() {
    assert_eq!("exact".parse::<SearchMode>(), Ok(SearchMode::Exact));
    assert_eq!("substr".parse::<SearchMode>(), Ok(SearchMode::SubStr));
    assert_eq!("approx".parse::<SearchMode>(), Ok(SearchMode::Approx));
    assert_eq!("pattern".parse::<SearchMode>(), Ok(SearchMode::Pattern));
    assert!("fuzzy".parse::<SearchMode>().is_err());
}
