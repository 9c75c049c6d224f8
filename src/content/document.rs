//! Document model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// A single Markdown essay, loaded and rendered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document title
    pub title: String,

    /// Authoring date
    pub date: DateTime<Local>,

    /// Last updated date
    pub updated: Option<DateTime<Local>>,

    /// Raw markdown content, fixed at authoring time
    pub raw: String,

    /// Rendered HTML content, a pure function of `raw`
    pub content: String,

    /// Source file path (relative to the pages directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// URL path (without root)
    pub path: String,

    /// Full permalink URL
    pub permalink: String,

    /// Document language
    pub lang: Option<String>,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Document {
    /// Create a new document with minimal required fields
    pub fn new(title: String, date: DateTime<Local>, source: String) -> Self {
        Self {
            title,
            date,
            updated: None,
            raw: String::new(),
            content: String::new(),
            source: source.clone(),
            full_source: PathBuf::from(&source),
            path: String::new(),
            permalink: String::new(),
            lang: None,
            extra: HashMap::new(),
        }
    }

    /// Get the previous document in a list
    pub fn prev<'a>(&self, docs: &'a [Document]) -> Option<&'a Document> {
        let pos = docs.iter().position(|d| d.source == self.source)?;
        if pos > 0 {
            Some(&docs[pos - 1])
        } else {
            None
        }
    }

    /// Get the next document in a list
    pub fn next<'a>(&self, docs: &'a [Document]) -> Option<&'a Document> {
        let pos = docs.iter().position(|d| d.source == self.source)?;
        if pos < docs.len() - 1 {
            Some(&docs[pos + 1])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_defaults() {
        let doc = Document::new(
            "How to Write Equals".to_string(),
            Local::now(),
            "how-to-write-equals.md".to_string(),
        );
        assert!(doc.content.is_empty());
        assert!(doc.extra.is_empty());
        assert_eq!(doc.source, "how-to-write-equals.md");
    }

    #[test]
    fn test_prev_next() {
        let a = Document::new("A".into(), Local::now(), "a.md".into());
        let b = Document::new("B".into(), Local::now(), "b.md".into());
        let docs = vec![a.clone(), b.clone()];

        assert!(a.prev(&docs).is_none());
        assert_eq!(a.next(&docs).unwrap().source, "b.md");
        assert_eq!(b.prev(&docs).unwrap().source, "a.md");
        assert!(b.next(&docs).is_none());
    }
}
