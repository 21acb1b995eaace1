//! Ordering of articles by bookmark count.

use crate::feed::Article;

/// Sorts `articles` in place so bookmark counts never decrease from first to
/// last. The sort is unstable: articles with equal counts may be reordered.
pub fn sort_by_popularity_ascending(articles: &mut [Article]) {
    articles.sort_unstable_by_key(|article| article.bookmark_count);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(articles: &[Article]) -> Vec<u64> {
        articles.iter().map(|a| a.bookmark_count).collect()
    }

    fn with_counts(counts: &[u64]) -> Vec<Article> {
        counts
            .iter()
            .map(|&bookmark_count| Article {
                bookmark_count,
                ..Article::default()
            })
            .collect()
    }

    #[test]
    fn test_sort_ascending() {
        let mut articles = with_counts(&[300, 5, 120, 5, 1000]);
        sort_by_popularity_ascending(&mut articles);
        assert_eq!(counts(&articles), vec![5, 5, 120, 300, 1000]);
    }

    #[test]
    fn test_sort_short_inputs() {
        let mut empty: Vec<Article> = Vec::new();
        sort_by_popularity_ascending(&mut empty);
        assert!(empty.is_empty());

        let mut one = with_counts(&[7]);
        sort_by_popularity_ascending(&mut one);
        assert_eq!(counts(&one), vec![7]);
    }
}
