//! Property tests for the in-place filter and sort operations.

use hotentry::{
    filter, filter_by_link_contains, filter_by_popularity_below, filter_by_title_contains,
    sort_by_popularity_ascending, Article,
};
use proptest::prelude::*;

fn arb_article() -> impl Strategy<Value = Article> {
    ("[a-eあい]{0,6}", "[a-e/.]{0,8}", 0u64..1000).prop_map(|(title, link, bookmark_count)| {
        Article {
            title,
            link,
            bookmark_count,
            ..Article::default()
        }
    })
}

fn arb_articles() -> impl Strategy<Value = Vec<Article>> {
    prop::collection::vec(arb_article(), 0..40)
}

fn sorted_counts(articles: &[Article]) -> Vec<u64> {
    let mut counts: Vec<u64> = articles.iter().map(|a| a.bookmark_count).collect();
    counts.sort_unstable();
    counts
}

proptest! {
    #[test]
    fn popularity_filter_removes_exactly_the_low_counts(
        articles in arb_articles(),
        threshold in 0u64..1200,
    ) {
        let expected: Vec<Article> = articles
            .iter()
            .filter(|a| a.bookmark_count >= threshold)
            .cloned()
            .collect();

        let mut filtered = articles.clone();
        filter_by_popularity_below(&mut filtered, threshold);

        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn title_filter_leaves_no_match(
        articles in arb_articles(),
        patterns in prop::collection::vec("[a-eあ]{1,2}", 0..3),
    ) {
        let mut filtered = articles.clone();
        filter_by_title_contains(&mut filtered, &patterns);

        for article in &filtered {
            prop_assert!(!patterns.iter().any(|p| article.title.contains(p.as_str())));
        }
        if patterns.is_empty() {
            prop_assert_eq!(&filtered, &articles);
        }
    }

    #[test]
    fn link_filter_leaves_no_match(
        articles in arb_articles(),
        patterns in prop::collection::vec("[a-e/.]{1,3}", 0..3),
    ) {
        let mut filtered = articles.clone();
        filter_by_link_contains(&mut filtered, &patterns);

        for article in &filtered {
            prop_assert!(!patterns.iter().any(|p| article.link.contains(p.as_str())));
        }
        let removed = articles.len() - filtered.len();
        let expected_removed = articles
            .iter()
            .filter(|a| patterns.iter().any(|p| a.link.contains(p.as_str())))
            .count();
        prop_assert_eq!(removed, expected_removed);
    }

    #[test]
    fn filter_is_idempotent(articles in arb_articles(), threshold in 0u64..1000) {
        let mut once = articles.clone();
        filter(&mut once, |a| a.bookmark_count < threshold || a.title.contains('あ'));
        let mut twice = once.clone();
        filter(&mut twice, |a| a.bookmark_count < threshold || a.title.contains('あ'));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_is_ascending_permutation(articles in arb_articles()) {
        let mut sorted = articles.clone();
        sort_by_popularity_ascending(&mut sorted);

        prop_assert_eq!(sorted.len(), articles.len());
        prop_assert!(sorted.windows(2).all(|w| w[0].bookmark_count <= w[1].bookmark_count));
        prop_assert_eq!(sorted_counts(&sorted), sorted_counts(&articles));
        for article in &articles {
            prop_assert!(sorted.contains(article));
        }
    }
}

#[test]
fn test_filter_then_sort_scenario() {
    let mut articles: Vec<Article> = [50, 300, 120]
        .into_iter()
        .map(|bookmark_count| Article {
            bookmark_count,
            ..Article::default()
        })
        .collect();

    filter_by_popularity_below(&mut articles, 100);
    let counts: Vec<u64> = articles.iter().map(|a| a.bookmark_count).collect();
    assert_eq!(counts, vec![300, 120]);

    sort_by_popularity_ascending(&mut articles);
    let counts: Vec<u64> = articles.iter().map(|a| a.bookmark_count).collect();
    assert_eq!(counts, vec![120, 300]);
}
