//! Feed retrieval and decoding.
//!
//! - [`model`] - The decoded [`Feed`], [`Channel`] and [`Article`] records
//! - [`parser`] - XML decoding with `quick-xml`
//! - [`fetcher`] - Single-shot HTTP retrieval with `reqwest`
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), hotentry::FetchError> {
//! use hotentry::{fetch, Category};
//!
//! let feed = fetch(Category::It, None).await?;
//! for article in &feed.articles {
//!     println!("{} ({})", article.title, article.bookmark_count);
//! }
//! # Ok(())
//! # }
//! ```

mod fetcher;
mod model;
mod parser;

pub use fetcher::{fetch, FetchError, Fetcher, DEFAULT_MAX_BODY_BYTES};
pub use model::{Article, Channel, Feed};
pub use parser::{parse_feed, ParseError};
