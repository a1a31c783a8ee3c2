//! # Attribute Map Module
//!
//! Ordered storage for the Open Graph properties found in a document.
//!
//! Top-level `og:` properties are stored as [`Value::Scalar`]. Namespaced
//! properties (`article:`, `book:`, `video:`) live in a [`Group`] under the
//! namespace name, where a key seen more than once becomes an
//! [`Entry::Many`] in encounter order.

use std::fmt;

/// A value stored under a namespace group key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Key seen exactly once
    Single(String),

    /// Key seen more than once, in document order
    Many(Vec<String>),
}

impl Entry {
    /// The first value recorded for this key
    pub fn first(&self) -> &str {
        match self {
            Entry::Single(value) => value,
            Entry::Many(values) => values.first().map(String::as_str).unwrap_or_default(),
        }
    }

    /// All values recorded for this key, in document order
    pub fn values(&self) -> Vec<&str> {
        match self {
            Entry::Single(value) => vec![value.as_str()],
            Entry::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }

    fn push(&mut self, content: String) {
        match self {
            Entry::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Entry::Many(vec![first, content]);
            }
            Entry::Many(values) => values.push(content),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Single(value) => write!(f, "{}", value),
            Entry::Many(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// Properties collected under one namespace (`article`, `book` or `video`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    entries: Vec<(String, Entry)>,
}

impl Group {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key in the group
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    /// Record `content` under `key`.
    ///
    /// The first value for a key is kept as [`Entry::Single`]; any later
    /// value promotes the key to [`Entry::Many`] and is appended.
    pub fn categorize(&mut self, key: impl Into<String>, content: impl Into<String>) {
        let key = key.into();
        let content = content.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, entry)) => entry.push(content),
            None => self.entries.push((key, Entry::Single(content))),
        }
    }

    /// Iterate over the entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, entry)| (k.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A top-level attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Plain `og:` property content
    Scalar(String),

    /// A namespace group
    Group(Group),
}

impl Value {
    /// The scalar content, if this is not a group
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(value) => Some(value),
            Value::Group(_) => None,
        }
    }

    /// The group, if this is not a scalar
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Value::Scalar(_) => None,
            Value::Group(group) => Some(group),
        }
    }

    /// Whether the value carries any content
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Scalar(value) => value.is_empty(),
            Value::Group(group) => group.is_empty(),
        }
    }
}

/// Ordered map of attribute name to [`Value`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, Value)>,
}

impl AttributeMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Set a top-level scalar, replacing whatever was stored under `key`
    pub fn set(&mut self, key: impl Into<String>, content: impl Into<String>) {
        let key = key.into();
        let value = Value::Scalar(content.into());
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get the group stored under `namespace`, creating it if needed.
    ///
    /// A scalar already stored under the same key is replaced by an empty group.
    pub fn group_mut(&mut self, namespace: &str) -> &mut Group {
        let index = match self.entries.iter().position(|(k, _)| k == namespace) {
            Some(index) => {
                if !matches!(self.entries[index].1, Value::Group(_)) {
                    self.entries[index].1 = Value::Group(Group::new());
                }
                index
            }
            None => {
                self.entries
                    .push((namespace.to_string(), Value::Group(Group::new())));
                self.entries.len() - 1
            }
        };

        match &mut self.entries[index].1 {
            Value::Group(group) => group,
            Value::Scalar(_) => unreachable!("entry was just made a group"),
        }
    }

    /// Iterate over the attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, value)| (k.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_promotes_on_second_value() {
        let mut group = Group::new();
        group.categorize("tag", "a");
        assert_eq!(group.get("tag"), Some(&Entry::Single("a".to_string())));

        group.categorize("tag", "b");
        group.categorize("tag", "c");
        assert_eq!(
            group.get("tag"),
            Some(&Entry::Many(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
        assert_eq!(group.len(), 1);
    }

    #[test]
    fn test_set_last_write_wins() {
        let mut map = AttributeMap::new();
        map.set("title", "First");
        map.set("url", "https://example.com");
        map.set("title", "Second");

        assert_eq!(map.get("title").and_then(Value::as_str), Some("Second"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["title", "url"]);
    }

    #[test]
    fn test_group_replaces_scalar() {
        let mut map = AttributeMap::new();
        map.set("video", "https://example.com/v.mp4");
        map.group_mut("video").categorize("duration", "120");

        let group = map.get("video").and_then(Value::as_group).unwrap();
        assert_eq!(group.get("duration").map(Entry::first), Some("120"));

        map.set("video", "https://example.com/other.mp4");
        assert_eq!(
            map.get("video").and_then(Value::as_str),
            Some("https://example.com/other.mp4")
        );
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(Entry::Single("a".to_string()).to_string(), "a");
        assert_eq!(
            Entry::Many(vec!["a".to_string(), "b".to_string()]).to_string(),
            "[a, b]"
        );
    }
}
