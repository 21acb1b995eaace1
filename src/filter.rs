//! In-place removal of articles.
//!
//! Every function here mutates the caller's `Vec` and keeps the relative
//! order of the surviving articles. None of them can fail.

use crate::feed::Article;

/// Removes every article for which `reject` returns `true`.
pub fn filter<F>(articles: &mut Vec<Article>, mut reject: F)
where
    F: FnMut(&Article) -> bool,
{
    let before = articles.len();
    articles.retain(|article| !reject(article));
    tracing::trace!(before = before, after = articles.len(), "Filtered articles");
}

/// Removes articles bookmarked by fewer than `threshold` users.
///
/// A threshold of 0 removes nothing.
pub fn filter_by_popularity_below(articles: &mut Vec<Article>, threshold: u64) {
    filter(articles, |article| article.bookmark_count < threshold);
}

/// Removes articles whose title contains any of `patterns`.
///
/// An empty pattern list removes nothing; an empty pattern matches every
/// title.
pub fn filter_by_title_contains<S: AsRef<str>>(articles: &mut Vec<Article>, patterns: &[S]) {
    filter(articles, |article| contains_any(&article.title, patterns));
}

/// Removes articles whose link contains any of `patterns`.
pub fn filter_by_link_contains<S: AsRef<str>>(articles: &mut Vec<Article>, patterns: &[S]) {
    filter(articles, |article| contains_any(&article.link, patterns));
}

fn contains_any<S: AsRef<str>>(haystack: &str, patterns: &[S]) -> bool {
    patterns.iter().any(|p| haystack.contains(p.as_ref()))
}
