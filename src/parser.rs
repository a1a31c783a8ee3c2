//! # Meta Tag Parser Module
//!
//! Walks the `<meta property=... content=...>` elements of an HTML document
//! and collects the Open Graph properties into an [`AttributeMap`].
//!
//! - `og:<key>` sets `<key>` directly (last write wins)
//! - `article:<key>`, `book:<key>` and `video:<key>` are collected into a
//!   group named after the namespace, promoting repeated keys to lists
//! - any other property is ignored
//!
//! Hyphens in keys are normalized to underscores. Parsing never fails:
//! malformed markup is handled by the lenient HTML tree builder and a
//! missing `content` attribute is read as an empty string.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, trace};

use crate::attributes::AttributeMap;

lazy_static! {
    static ref PROPERTY_REGEX: Regex =
        Regex::new(r"(?i)^(og|article|book|video):(.+)$").expect("valid property regex");
    static ref META_SELECTOR: Selector =
        Selector::parse("meta[property]").expect("valid meta selector");
}

/// A recognized Open Graph property namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Og,
    Article,
    Book,
    Video,
}

impl Namespace {
    /// Match a namespace token, ignoring ASCII case
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.to_ascii_lowercase().as_str() {
            "og" => Some(Namespace::Og),
            "article" => Some(Namespace::Article),
            "book" => Some(Namespace::Book),
            "video" => Some(Namespace::Video),
            _ => None,
        }
    }

    /// Name of the group this namespace collects into, `None` for `og`
    pub fn group_name(self) -> Option<&'static str> {
        match self {
            Namespace::Og => None,
            Namespace::Article => Some("article"),
            Namespace::Book => Some("book"),
            Namespace::Video => Some("video"),
        }
    }
}

/// Split a `property` value into its namespace and normalized key
///
/// Returns `None` for properties outside the recognized namespaces.
pub fn split_property(property: &str) -> Option<(Namespace, String)> {
    let captures = PROPERTY_REGEX.captures(property)?;
    let namespace = Namespace::from_prefix(captures.get(1)?.as_str())?;
    let key = captures.get(2)?.as_str().replace('-', "_");
    Some((namespace, key))
}

/// Record a single property on the attribute map
pub fn apply_property(attributes: &mut AttributeMap, property: &str, content: &str) {
    let Some((namespace, key)) = split_property(property) else {
        trace!("Ignoring property '{}'", property);
        return;
    };

    trace!("Found {:?} property '{}' = '{}'", namespace, key, content);
    match namespace.group_name() {
        None => attributes.set(key, content),
        Some(group) => attributes.group_mut(group).categorize(key, content),
    }
}

/// Collect the Open Graph properties of a parsed document
pub fn parse_document(document: &Html) -> AttributeMap {
    let mut attributes = AttributeMap::new();

    for element in document.select(&META_SELECTOR) {
        let meta = element.value();
        let Some(property) = meta.attr("property") else {
            continue;
        };
        let content = meta.attr("content").unwrap_or_default();
        apply_property(&mut attributes, property, content);
    }

    debug!("Parsed {} Open Graph attributes", attributes.len());
    attributes
}

/// Parse raw HTML and collect its Open Graph properties
pub fn parse_html(html: &str) -> AttributeMap {
    let document = Html::parse_document(html);
    parse_document(&document)
}
