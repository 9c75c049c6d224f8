//! Document loader - loads Markdown essays from the pages directory

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{Document, FrontMatter, MarkdownRenderer};
use crate::Site;

/// Loads documents from the pages directory
pub struct DocumentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> DocumentLoader<'a> {
    /// Create a new document loader
    pub fn new(site: &'a Site) -> Self {
        let renderer = MarkdownRenderer::with_options(
            &site.config.highlight.theme,
            site.config.highlight.line_number,
        );
        Self { site, renderer }
    }

    /// Load all documents from the pages directory, newest first
    pub fn load_documents(&self) -> Result<Vec<Document>> {
        if !self.site.pages_dir.exists() {
            return Ok(Vec::new());
        }

        let mut docs = Vec::new();

        for entry in WalkDir::new(&self.site.pages_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                match self.load_document(path) {
                    Ok(doc) => docs.push(doc),
                    Err(e) => {
                        tracing::warn!("Failed to load document {:?}: {}", path, e);
                    }
                }
            }
        }

        // Sort by date descending (newest first)
        docs.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(docs)
    }

    /// Load a single document from a file
    fn load_document(&self, path: &Path) -> Result<Document> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        // File mtime backs the dates when front-matter omits them
        let metadata = fs::metadata(path)?;
        let file_modified = metadata
            .modified()
            .ok()
            .map(|t| chrono::DateTime::<Local>::from(t));

        let date = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

        let updated = fm.parse_updated().or(file_modified);

        // Title from front-matter or filename
        let title = fm.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let source = path
            .strip_prefix(&self.site.pages_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        // URL path: index.md maps to its parent directory, everything
        // else gets a directory of its own
        let doc_path = {
            let without_ext = source.trim_end_matches(".md").trim_end_matches(".markdown");
            if without_ext.ends_with("/index") || without_ext == "index" {
                without_ext.trim_end_matches("index").to_string()
            } else {
                without_ext.to_string() + "/"
            }
        };

        let doc_path = if doc_path.is_empty() {
            "/".to_string()
        } else {
            doc_path
        };

        let permalink = format!(
            "{}{}{}",
            self.site.config.url.trim_end_matches('/'),
            self.site.config.root,
            doc_path.trim_start_matches('/')
        );

        // The render sequence: conversion must complete before the result
        // is written anywhere, highlighting happens inside render()
        let content_html = self.renderer.render(body)?;

        let mut doc = Document::new(title, date, source);
        doc.updated = updated;
        doc.raw = body.to_string();
        doc.content = content_html;
        doc.full_source = path.to_path_buf();
        doc.path = doc_path;
        doc.permalink = permalink;
        doc.lang = fm.lang;
        doc.extra = fm.extra;

        Ok(doc)
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::path::PathBuf;

    fn test_site(base_dir: PathBuf) -> Site {
        let config = SiteConfig::default();
        let pages_dir = base_dir.join(&config.pages_dir);
        let assets_dir = base_dir.join(&config.assets_dir);
        let public_dir = base_dir.join(&config.public_dir);
        Site {
            config,
            base_dir,
            pages_dir,
            assets_dir,
            public_dir,
        }
    }

    #[test]
    fn test_load_documents() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();

        fs::write(
            pages.join("equals.md"),
            "---\ntitle: On Equals\ndate: 2024-03-01\nsubtitle: A contract\n---\n\n# On Equals\n\nBody *text*.\n",
        )
        .unwrap();
        fs::write(
            pages.join("hashcode.md"),
            "---\ntitle: On HashCode\ndate: 2024-04-01\n---\n\nMore.\n",
        )
        .unwrap();

        let site = test_site(dir.path().to_path_buf());
        let loader = DocumentLoader::new(&site);
        let docs = loader.load_documents().unwrap();

        assert_eq!(docs.len(), 2);
        // Newest first
        assert_eq!(docs[0].title, "On HashCode");
        assert_eq!(docs[1].title, "On Equals");
        assert_eq!(docs[1].path, "equals/");
        assert!(docs[1].content.contains("<em>text</em>"));
        assert!(docs[1].permalink.ends_with("/equals/"));
        // Custom front-matter fields ride along on the document
        assert!(docs[1].extra.contains_key("subtitle"));
    }

    #[test]
    fn test_load_document_without_frontmatter() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("notes.md"), "# Notes\n\nPlain body.\n").unwrap();

        let site = test_site(dir.path().to_path_buf());
        let loader = DocumentLoader::new(&site);
        let docs = loader.load_documents().unwrap();

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title, "notes");
        assert!(docs[0].content.contains("Notes</h1>"));
    }

    #[test]
    fn test_missing_pages_dir() {
        let dir = tempfile::tempdir().unwrap();
        let site = test_site(dir.path().to_path_buf());
        let loader = DocumentLoader::new(&site);
        assert!(loader.load_documents().unwrap().is_empty());
    }
}
