use chrono::{DateTime, FixedOffset};
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

use super::model::{Article, Channel, Feed};

/// Errors produced while decoding a feed document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The document is not valid UTF-8.
    #[error("invalid UTF-8 in feed: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// The body contained no element at all (empty or plain text).
    #[error("document has no root element")]
    NoRootElement,

    /// The document ended while elements were still open.
    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    #[error("invalid bookmark count {value:?}: {source}")]
    InvalidBookmarkCount {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// An element currently open in the document, with the character data seen
/// directly inside it.
struct Open {
    name: Vec<u8>,
    text: String,
}

/// Decodes a hot-entry feed document.
///
/// The source serves RSS 1.0 (RDF): `<channel>` and `<item>` are siblings
/// under the root element. Elements are matched by local name, so
/// `<hatena:bookmarkcount>` and `<content:encoded>` are recognised whatever
/// prefix the document binds. Unknown elements and attributes are ignored
/// and a repeated field keeps its last value.
///
/// Only the first root element is read; anything after it is ignored.
pub fn parse_feed(bytes: &[u8]) -> Result<Feed, ParseError> {
    let content = std::str::from_utf8(bytes)?;
    // SEC-002: quick-xml (0.37) never expands <!ENTITY> declarations, custom
    // entity references fail in `unescape()`.
    let mut reader = Reader::from_str(content);

    let mut feed = Feed::default();
    let mut current: Option<Article> = None;
    let mut stack: Vec<Open> = Vec::new();
    let mut saw_root = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if stack.len() == 1 && name == b"item" {
                    current = Some(Article::default());
                }
                saw_root = true;
                stack.push(Open {
                    name,
                    text: String::new(),
                });
            }
            Event::Empty(e) => {
                saw_root = true;
                let name = e.local_name();
                if stack.len() == 1 && name.as_ref() == b"item" {
                    feed.articles.push(Article::default());
                } else if stack.is_empty() {
                    // Self-closing root: an empty feed.
                    break;
                } else {
                    assign(
                        parent(&stack),
                        name.as_ref(),
                        String::new(),
                        &mut feed.channel,
                        current.as_mut(),
                    )?;
                }
            }
            Event::End(_) => {
                let Some(open) = stack.pop() else {
                    break;
                };
                if stack.is_empty() {
                    break;
                }
                if stack.len() == 1 && open.name == b"item" {
                    if let Some(article) = current.take() {
                        feed.articles.push(article);
                    }
                } else {
                    assign(
                        parent(&stack),
                        &open.name,
                        open.text,
                        &mut feed.channel,
                        current.as_mut(),
                    )?;
                }
            }
            Event::Text(t) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(&t.unescape()?);
                }
            }
            Event::CData(c) => {
                if let Some(open) = stack.last_mut() {
                    open.text.push_str(std::str::from_utf8(&c)?);
                }
            }
            Event::Eof => {
                if let Some(open) = stack.last() {
                    return Err(ParseError::UnexpectedEof(
                        String::from_utf8_lossy(&open.name).into_owned(),
                    ));
                }
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    if !saw_root {
        return Err(ParseError::NoRootElement);
    }

    Ok(feed)
}

/// Local name of the element that owns a field, i.e. a direct child of the
/// root (`channel` or `item`).
fn parent(stack: &[Open]) -> Option<&[u8]> {
    match stack {
        [_root, owner] => Some(owner.name.as_slice()),
        _ => None,
    }
}

fn assign(
    parent: Option<&[u8]>,
    name: &[u8],
    text: String,
    channel: &mut Channel,
    article: Option<&mut Article>,
) -> Result<(), ParseError> {
    match (parent, article) {
        (Some(b"channel"), _) => match name {
            b"title" => channel.title = text,
            b"link" => channel.link = text,
            b"description" => channel.description = text,
            _ => {}
        },
        (Some(b"item"), Some(article)) => match name {
            b"title" => article.title = text,
            b"link" => article.link = text,
            b"description" => article.description = text,
            b"encoded" => article.content = text,
            b"date" => article.date = parse_date(text)?,
            b"subject" => article.subject = text,
            b"bookmarkcount" => article.bookmark_count = parse_bookmark_count(text)?,
            _ => {}
        },
        _ => {}
    }
    Ok(())
}

/// An empty element counts as 0; whitespace-only text is not a number.
fn parse_bookmark_count(text: String) -> Result<u64, ParseError> {
    if text.is_empty() {
        return Ok(0);
    }
    text.trim()
        .parse()
        .map_err(|source| ParseError::InvalidBookmarkCount {
            value: text.clone(),
            source,
        })
}

fn parse_date(text: String) -> Result<Option<DateTime<FixedOffset>>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(Some)
        .map_err(|source| ParseError::InvalidDate {
            value: text.clone(),
            source,
        })
}
