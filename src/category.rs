//! The fixed set of hot-entry categories and their feed URLs.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string does not name a known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

/// A hot-entry category. Each variant maps to exactly one display name and
/// one feed URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// 総合
    All,
    /// 世の中
    Social,
    /// 政治と経済
    Economics,
    /// 暮らし
    Life,
    /// 学び
    Knowledge,
    /// テクノロジー
    It,
    /// エンタメ
    Entertainment,
    /// アニメとゲーム
    Game,
    /// おもしろ
    Fun,
    /// 動画
    Video,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 10] = [
        Category::All,
        Category::Social,
        Category::Economics,
        Category::Life,
        Category::Knowledge,
        Category::It,
        Category::Entertainment,
        Category::Game,
        Category::Fun,
        Category::Video,
    ];

    /// Returns every category in declaration order. The slice is the same on
    /// every call.
    pub fn list() -> &'static [Category] {
        &Self::ALL
    }

    /// Display name as shown on the site.
    pub fn name(self) -> &'static str {
        match self {
            Category::All => "総合",
            Category::Social => "世の中",
            Category::Economics => "政治と経済",
            Category::Life => "暮らし",
            Category::Knowledge => "学び",
            Category::It => "テクノロジー",
            Category::Entertainment => "エンタメ",
            Category::Game => "アニメとゲーム",
            Category::Fun => "おもしろ",
            Category::Video => "動画",
        }
    }

    /// URL of the category's RSS feed.
    pub fn url(self) -> &'static str {
        match self {
            Category::All => "http://b.hatena.ne.jp/hotentry.rss",
            Category::Social => "http://b.hatena.ne.jp/hotentry/social.rss",
            Category::Economics => "http://b.hatena.ne.jp/hotentry/economics.rss",
            Category::Life => "http://b.hatena.ne.jp/hotentry/life.rss",
            Category::Knowledge => "http://b.hatena.ne.jp/hotentry/knowledge.rss",
            Category::It => "http://b.hatena.ne.jp/hotentry/it.rss",
            Category::Entertainment => "http://b.hatena.ne.jp/hotentry/entertainment.rss",
            Category::Game => "http://b.hatena.ne.jp/hotentry/game.rss",
            Category::Fun => "http://b.hatena.ne.jp/hotentry/fun.rss",
            Category::Video => "http://b.hatena.ne.jp/video.rss",
        }
    }

    /// ASCII identifier accepted by [`FromStr`].
    pub fn slug(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Social => "social",
            Category::Economics => "economics",
            Category::Life => "life",
            Category::Knowledge => "knowledge",
            Category::It => "it",
            Category::Entertainment => "entertainment",
            Category::Game => "game",
            Category::Fun => "fun",
            Category::Video => "video",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parses a slug such as `"it"` or `"Social"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_list_is_stable_and_ordered() {
        let list = Category::list();
        assert_eq!(list.len(), 10);
        assert_eq!(list[0], Category::All);
        assert_eq!(list[5], Category::It);
        assert_eq!(list[9], Category::Video);
        assert_eq!(list, Category::list());
        assert!(list.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_names_and_urls_are_distinct_and_non_empty() {
        let names: HashSet<_> = Category::list().iter().map(|c| c.name()).collect();
        let urls: HashSet<_> = Category::list().iter().map(|c| c.url()).collect();
        assert_eq!(names.len(), 10);
        assert_eq!(urls.len(), 10);
        assert!(names.iter().all(|n| !n.is_empty()));
        assert!(urls.iter().all(|u| u.starts_with("http://b.hatena.ne.jp/")));
    }

    #[test]
    fn test_exact_urls() {
        assert_eq!(Category::All.url(), "http://b.hatena.ne.jp/hotentry.rss");
        assert_eq!(Category::It.url(), "http://b.hatena.ne.jp/hotentry/it.rss");
        assert_eq!(Category::Video.url(), "http://b.hatena.ne.jp/video.rss");
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Category::Game.to_string(), "アニメとゲーム");
        assert_eq!(Category::It.to_string(), "テクノロジー");
    }

    #[test]
    fn test_from_str_accepts_every_slug() {
        for &category in Category::list() {
            assert_eq!(category.slug().parse::<Category>(), Ok(category));
        }
        assert_eq!(" Social ".parse::<Category>(), Ok(Category::Social));
        assert_eq!("IT".parse::<Category>(), Ok(Category::It));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "sports".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("sports".to_string()));
        assert_eq!(err.to_string(), "unknown category: \"sports\"");
    }
}
