//! # opengraph - Open Graph metadata extraction for Rust
//!
//! This crate extracts [Open Graph](https://ogp.me/) metadata from HTML
//! documents, either supplied directly or fetched over HTTP, and exposes it
//! as a schema-aware [`GraphObject`].
//!
//! ## Features
//!
//! - `og:` properties collected as top-level attributes
//! - `article:`, `book:` and `video:` properties grouped per namespace, with
//!   repeated keys kept as ordered lists
//! - Classification of `og:type` into schemas (business, person, product, ...)
//! - Validation of the mandatory `title`, `type`, `image` and `url` attributes
//! - Lenient HTML parsing; network failures are reported as "no data"
//!
//! ## Example
//!
//! ```rust
//! let html = r#"<html><head>
//!     <meta property="og:title" content="The Rock">
//!     <meta property="og:type" content="movie">
//!     <meta property="og:url" content="http://www.imdb.com/title/tt0117500/">
//!     <meta property="og:image" content="http://ia.media-imdb.com/rock.jpg">
//! </head></html>"#;
//!
//! let object = opengraph::parse(html, true).expect("complete Open Graph data");
//! assert_eq!(object.get_str("title"), Some("The Rock"));
//! assert_eq!(object.schema(), Some(opengraph::Schema::Product));
//! assert!(object.is_movie());
//! ```

mod attributes;
mod error;
pub mod fetch;
mod object;
pub mod parser;
mod schema;

pub use attributes::{AttributeMap, Entry, Group, Value};
pub use error::{Error, Result};
pub use fetch::{FetchError, Fetcher, FetcherConfig, HttpFetcher};
pub use object::{GraphObject, MANDATORY_ATTRIBUTES};
pub use schema::Schema;

use tracing::{debug, instrument, warn};

/// Extract Open Graph data from an HTML document.
///
/// Returns `None` when the document has no recognized properties, or when
/// `strict` is set and a mandatory attribute is missing.
pub fn parse(html: &str, strict: bool) -> Option<GraphObject> {
    let object = GraphObject::new(parser::parse_html(html));

    if object.is_empty() {
        debug!("No Open Graph data found");
        return None;
    }
    if strict && !object.valid() {
        debug!(
            "Open Graph data is missing mandatory attributes: {:?}",
            object.missing_attributes()
        );
        return None;
    }

    Some(object)
}

/// Fetch `uri` over HTTP and extract its Open Graph data.
///
/// Any retrieval failure yields `None`, the same as a document without
/// data. See [`parse`] for the meaning of `strict`.
#[instrument]
pub async fn fetch(uri: &str, strict: bool) -> Option<GraphObject> {
    let fetcher = match HttpFetcher::with_defaults() {
        Ok(fetcher) => fetcher,
        Err(e) => {
            warn!("Failed to create HTTP fetcher: {}", e);
            return None;
        }
    };

    fetch_with(&fetcher, uri, strict).await
}

/// Retrieve `uri` through `fetcher` and extract its Open Graph data.
#[instrument(skip(fetcher))]
pub async fn fetch_with<F: Fetcher>(fetcher: &F, uri: &str, strict: bool) -> Option<GraphObject> {
    match fetcher.fetch(uri).await {
        Ok(html) => parse(&html, strict),
        Err(e) => {
            warn!("Failed to fetch {}: {}", uri, e);
            None
        }
    }
}

/// Re-export of common types for glob imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::fetch::{Fetcher, HttpFetcher};
    pub use crate::{GraphObject, Schema, Value};
}
