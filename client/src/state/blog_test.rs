use super::*;
use crate::content::blog::POSTS;

fn ids(posts: &[&BlogPost]) -> Vec<u32> {
    posts.iter().map(|p| p.id).collect()
}

// =============================================================
// category_slug
// =============================================================

#[test]
fn category_slug_hyphenates_first_space() {
    assert_eq!(category_slug("Industry Insights"), "industry-insights");
    assert_eq!(category_slug("Technology"), "technology");
}

#[test]
fn category_slug_only_replaces_first_space() {
    assert_eq!(category_slug("Tips And Tricks"), "tips-and tricks");
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn default_filter_returns_every_post_in_order() {
    let filter = BlogFilter::default();
    assert!(!filter.is_filtered());
    assert_eq!(ids(&filter.apply(POSTS)), vec![2, 3, 4, 5, 6, 7]);
}

#[test]
fn query_matches_title_case_insensitively() {
    let filter = BlogFilter { query: "fdcpa".to_owned(), ..BlogFilter::default() };
    assert_eq!(ids(&filter.apply(POSTS)), vec![2]);
}

#[test]
fn query_matches_excerpt() {
    let filter = BlogFilter { query: "CHURN".to_owned(), ..BlogFilter::default() };
    assert_eq!(ids(&filter.apply(POSTS)), vec![4]);
}

#[test]
fn category_restricts_results() {
    let filter = BlogFilter { category: "industry-insights".to_owned(), ..BlogFilter::default() };
    assert_eq!(ids(&filter.apply(POSTS)), vec![3, 5]);
}

#[test]
fn query_and_category_must_both_match() {
    let filter = BlogFilter {
        query: "collection".to_owned(),
        category: "compliance".to_owned(),
    };
    assert_eq!(ids(&filter.apply(POSTS)), vec![2, 7]);

    let filter = BlogFilter {
        query: "omnichannel".to_owned(),
        category: "compliance".to_owned(),
    };
    assert!(filter.apply(POSTS).is_empty());
}

#[test]
fn unmatched_query_returns_nothing() {
    let filter = BlogFilter { query: "cryptocurrency".to_owned(), ..BlogFilter::default() };
    assert!(filter.apply(POSTS).is_empty());
}

#[test]
fn clear_restores_unfiltered_view() {
    let mut filter = BlogFilter {
        query: "x".to_owned(),
        category: "technology".to_owned(),
    };
    assert!(filter.is_filtered());
    filter.clear();
    assert_eq!(filter, BlogFilter::default());
    assert!(!filter.is_filtered());
}
