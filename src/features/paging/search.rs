//! # Search Filter
//!
//! Case-insensitive name filtering that produces a fresh view over the
//! matching records, sorted by name.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: `sort_by_name` for result sets that are already filtered upstream
//! - 1.0.0: Initial implementation

use super::view::{PagedListView, PagingError, Record};

/// Result of a search: a value, or a distinct no-match outcome
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<T> {
    Found(T),
    NoMatch { query: String },
}

impl<T> SearchOutcome<T> {
    pub fn is_no_match(&self) -> bool {
        matches!(self, SearchOutcome::NoMatch { .. })
    }
}

/// Case-insensitive alphabetical order, as used for every search result
pub fn sort_by_name<R: Record>(items: &mut [R]) {
    items.sort_by_cached_key(|item| item.name().to_lowercase());
}

pub struct SearchFilter;

impl SearchFilter {
    /// Records whose name contains `query` (case-insensitive), sorted by name.
    ///
    /// An empty query matches everything.
    pub fn apply<R: Record + Clone>(items: &[R], query: &str) -> SearchOutcome<Vec<R>> {
        let needle = query.trim().to_lowercase();
        let mut matches: Vec<R> = items
            .iter()
            .filter(|item| item.name().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        if matches.is_empty() {
            return SearchOutcome::NoMatch {
                query: query.trim().to_string(),
            };
        }

        sort_by_name(&mut matches);
        SearchOutcome::Found(matches)
    }

    /// Filter and wrap the matches in a new view. No view is built on no-match.
    pub fn view<R: Record + Clone>(
        items: &[R],
        query: &str,
        page_size: usize,
        label: impl Into<String>,
    ) -> Result<SearchOutcome<PagedListView<R>>, PagingError> {
        match Self::apply(items, query) {
            SearchOutcome::Found(matches) => Ok(SearchOutcome::Found(PagedListView::new(
                matches, page_size, label,
            )?)),
            SearchOutcome::NoMatch { query } => Ok(SearchOutcome::NoMatch { query }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::paging::view::tests::Named;

    fn cities() -> Vec<Named> {
        ["Surabaya", "bandung", "Jakarta Selatan", "Bandar Lampung", "Jakarta Pusat"]
            .iter()
            .map(|s| Named(s.to_string()))
            .collect()
    }

    fn found_names(outcome: SearchOutcome<Vec<Named>>) -> Vec<String> {
        match outcome {
            SearchOutcome::Found(items) => items.into_iter().map(|n| n.0).collect(),
            SearchOutcome::NoMatch { query } => panic!("unexpected no-match for {query:?}"),
        }
    }

    #[test]
    fn test_case_insensitive_match_sorted() {
        let result = found_names(SearchFilter::apply(&cities(), "JAKARTA"));
        assert_eq!(result, vec!["Jakarta Pusat", "Jakarta Selatan"]);
    }

    #[test]
    fn test_empty_query_returns_all_sorted() {
        let result = found_names(SearchFilter::apply(&cities(), ""));
        assert_eq!(
            result,
            vec!["Bandar Lampung", "bandung", "Jakarta Pusat", "Jakarta Selatan", "Surabaya"]
        );
    }

    #[test]
    fn test_substring_match() {
        let result = found_names(SearchFilter::apply(&cities(), "band"));
        assert_eq!(result, vec!["Bandar Lampung", "bandung"]);
    }

    #[test]
    fn test_no_match_builds_no_view() {
        let many: Vec<Named> = (1..=50).map(|i| Named(format!("Kota {i}"))).collect();
        let outcome = SearchFilter::view(&many, "xyzzy", 10, "xyzzy").unwrap();
        assert!(outcome.is_no_match());
        match outcome {
            SearchOutcome::NoMatch { query } => assert_eq!(query, "xyzzy"),
            SearchOutcome::Found(_) => panic!("expected no match"),
        }
    }

    #[test]
    fn test_view_over_matches() {
        let many: Vec<Named> = (1..=50).map(|i| Named(format!("Kota {i}"))).collect();
        match SearchFilter::view(&many, "kota 1", 10, "kota 1").unwrap() {
            SearchOutcome::Found(view) => {
                // "Kota 1" and "Kota 10".."Kota 19"
                assert_eq!(view.len(), 11);
                assert_eq!(view.total_pages(), 2);
                assert_eq!(view.current_page(), 0);
                assert_eq!(view.items()[0].0, "Kota 1");
            }
            SearchOutcome::NoMatch { .. } => panic!("expected matches"),
        }
    }

    #[test]
    fn test_sort_by_name_keeps_every_item() {
        let mut items = cities();
        sort_by_name(&mut items);
        let names: Vec<&str> = items.iter().map(|n| n.0.as_str()).collect();
        assert_eq!(
            names,
            ["Bandar Lampung", "bandung", "Jakarta Pusat", "Jakarta Selatan", "Surabaya"]
        );
    }

    #[test]
    fn test_view_rejects_zero_page_size() {
        let result = SearchFilter::view(&cities(), "", 0, "x");
        assert!(result.is_err());
    }
}
