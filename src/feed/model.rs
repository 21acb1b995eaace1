use chrono::{DateTime, FixedOffset};
use serde::Serialize;
use std::fmt;

/// A decoded hot-entry feed: channel metadata plus its articles in document
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Feed {
    pub channel: Channel,
    pub articles: Vec<Article>,
}

/// Feed-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
}

/// A single bookmarked entry.
///
/// Fields missing from the document are left at their defaults: empty
/// strings, `None` for the date and zero bookmarks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Rendered HTML body (`content:encoded`).
    pub content: String,
    /// Publication timestamp (`dc:date`).
    pub date: Option<DateTime<FixedOffset>>,
    /// Category label (`dc:subject`).
    pub subject: String,
    /// Number of users who bookmarked the entry (`hatena:bookmarkcount`).
    pub bookmark_count: u64,
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title           : {}", self.title)?;
        writeln!(f, "Link            : {}", self.link)?;
        writeln!(f, "Description     : {}", self.description)?;
        writeln!(f, "Content         : {}", self.content)?;
        match &self.date {
            Some(date) => writeln!(f, "Date            : {}", date.to_rfc3339())?,
            None => writeln!(f, "Date            : ")?,
        }
        writeln!(f, "Subject         : {}", self.subject)?;
        writeln!(f, "BookmarkCount   : {}", self.bookmark_count)
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, article) in self.articles.iter().enumerate() {
            writeln!(f, "[{}]", i)?;
            writeln!(f, "{}", article)?;
        }
        Ok(())
    }
}
