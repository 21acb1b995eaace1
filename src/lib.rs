//! Client for the Hatena Bookmark hot-entry RSS feeds.
//!
//! Pick a [`Category`], [`fetch`] its feed, then narrow the articles down
//! in place with the [`filter`](mod@filter) helpers and order them with
//! [`sort_by_popularity_ascending`].
//!
//! ```no_run
//! # async fn run() -> Result<(), hotentry::FetchError> {
//! use hotentry::{fetch, filter_by_link_contains, filter_by_popularity_below};
//! use hotentry::{sort_by_popularity_ascending, Category};
//!
//! let mut feed = fetch(Category::All, None).await?;
//! filter_by_popularity_below(&mut feed.articles, 300);
//! filter_by_link_contains(&mut feed.articles, &["anond.hatelabo.jp"]);
//! sort_by_popularity_ascending(&mut feed.articles);
//! # Ok(())
//! # }
//! ```
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod category;
pub mod config;
pub mod feed;
pub mod filter;
pub mod sort;

pub use category::{Category, UnknownCategory};
pub use config::{ConfigError, FetchConfig};
pub use feed::{fetch, parse_feed, Article, Channel, Feed, FetchError, Fetcher, ParseError};
pub use filter::{
    filter, filter_by_link_contains, filter_by_popularity_below, filter_by_title_contains,
};
pub use sort::sort_by_popularity_ascending;
