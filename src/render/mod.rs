//! Generator module - writes the final HTML files
//!
//! This is the display step of the render sequence: the converted HTML for
//! each document replaces the content region of the page shell, and the
//! result is written to the public directory. Re-running a build overwrites
//! each output file with the same deterministic bytes.

mod templates;

use anyhow::Result;
use std::fs;
use std::path::Path;
use tera::Context;
use walkdir::WalkDir;

use crate::content::Document;
use crate::Site;

pub use templates::{ConfigData, NavPage, PageData, TemplateRenderer};

/// Static page generator using the embedded shell templates
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            site: site.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, docs: &[Document]) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        self.copy_assets()?;

        let config_data = self.build_config_data();
        let page_data: Vec<PageData> = docs.iter().map(|d| build_page_data(d, docs)).collect();

        self.generate_index(&page_data, &config_data)?;

        for page in &page_data {
            self.generate_page(page, &config_data)?;
        }

        tracing::info!("Generated {} pages", docs.len());

        Ok(())
    }

    /// Generate the index page listing all documents
    fn generate_index(&self, pages: &[PageData], config: &ConfigData) -> Result<()> {
        let mut context = Context::new();
        context.insert("config", config);
        context.insert("pages", pages);

        let html = self.renderer.render("index.html", &context)?;
        write_output(&self.site.public_dir.join("index.html"), &html)
    }

    /// Generate a single document page
    fn generate_page(&self, page: &PageData, config: &ConfigData) -> Result<()> {
        let mut context = Context::new();
        context.insert("config", config);
        context.insert("page", page);

        let html = self.renderer.render("page.html", &context)?;

        let rel = page.path.trim_matches('/');
        let out_path = if rel.is_empty() {
            self.site.public_dir.join("index.html")
        } else {
            self.site.public_dir.join(rel).join("index.html")
        };

        write_output(&out_path, &html)
    }

    /// Copy static assets (stylesheets, images) into the public directory
    fn copy_assets(&self) -> Result<()> {
        if !self.site.assets_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(&self.site.assets_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() {
                let rel = path.strip_prefix(&self.site.assets_dir).unwrap_or(path);
                let dest = self.site.public_dir.join(rel);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }

    /// Build config data for templates
    fn build_config_data(&self) -> ConfigData {
        ConfigData {
            title: self.site.config.title.clone(),
            subtitle: self.site.config.subtitle.clone(),
            description: self.site.config.description.clone(),
            author: self.site.config.author.clone(),
            language: self.site.config.language.clone(),
            url: self.site.config.url.clone(),
            root: self.site.config.root.clone(),
        }
    }
}

/// Build template data for a document, with prev/next navigation links
/// drawn from its neighbors in the date-sorted list
fn build_page_data(doc: &Document, docs: &[Document]) -> PageData {
    PageData {
        title: doc.title.clone(),
        date: doc.date.format("%Y-%m-%d").to_string(),
        path: format!("/{}", doc.path.trim_start_matches('/')),
        permalink: doc.permalink.clone(),
        content: doc.content.clone(),
        prev: doc.prev(docs).map(nav_page),
        next: doc.next(docs).map(nav_page),
    }
}

fn nav_page(doc: &Document) -> NavPage {
    NavPage {
        title: doc.title.clone(),
        path: format!("/{}", doc.path.trim_start_matches('/')),
    }
}

/// Write an output file, creating parent directories as needed
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use chrono::Local;
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

    fn test_document() -> Document {
        let mut doc = Document::new(
            "On Equality".to_string(),
            Local::now(),
            "equals.md".to_string(),
        );
        doc.path = "equals/".to_string();
        doc.permalink = "http://example.com/equals/".to_string();
        doc.content = "<h1 id=\"title\">Title</h1><p>Some <em>text</em>.</p>".to_string();
        doc
    }

    #[test]
    fn test_generate_writes_pages() {
        let dir = tempfile::tempdir().unwrap();
        let site = test_site(dir.path().to_path_buf());
        let generator = Generator::new(&site).unwrap();

        let out = site.public_dir.join("equals/index.html");
        // Unrendered: no output exists before the build runs
        assert!(!out.exists());

        generator.generate(&[test_document()]).unwrap();

        // Rendered: the content region carries the converted HTML
        let html = fs::read_to_string(&out).unwrap();
        assert!(html.contains("<em>text</em>"));
        assert!(html.contains("On Equality"));

        let index = fs::read_to_string(site.public_dir.join("index.html")).unwrap();
        assert!(index.contains(r#"<a href="/equals/">On Equality</a>"#));
    }

    #[test]
    fn test_pages_link_their_neighbors() {
        let dir = tempfile::tempdir().unwrap();
        let site = test_site(dir.path().to_path_buf());
        let generator = Generator::new(&site).unwrap();

        let newer = test_document();
        let mut older = Document::new(
            "On HashCode".to_string(),
            Local::now() - chrono::Duration::days(1),
            "hashcode.md".to_string(),
        );
        older.path = "hashcode/".to_string();
        older.content = "<p>hash</p>".to_string();

        // Newest first, as the loader delivers them
        generator.generate(&[newer, older]).unwrap();

        let first = fs::read_to_string(site.public_dir.join("equals/index.html")).unwrap();
        assert!(first.contains(r#"<a class="nav-next" href="/hashcode/">On HashCode</a>"#));
        assert!(!first.contains("nav-prev"));

        let second = fs::read_to_string(site.public_dir.join("hashcode/index.html")).unwrap();
        assert!(second.contains(r#"<a class="nav-prev" href="/equals/">On Equality</a>"#));
        assert!(!second.contains("nav-next"));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let site = test_site(dir.path().to_path_buf());
        let generator = Generator::new(&site).unwrap();
        let docs = vec![test_document()];

        generator.generate(&docs).unwrap();
        let out = site.public_dir.join("equals/index.html");
        let first = fs::read_to_string(&out).unwrap();

        generator.generate(&docs).unwrap();
        let second = fs::read_to_string(&out).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_copy_assets() {
        let dir = tempfile::tempdir().unwrap();
        let site = test_site(dir.path().to_path_buf());

        let css_dir = site.assets_dir.join("css");
        fs::create_dir_all(&css_dir).unwrap();
        fs::write(css_dir.join("base.css"), "body { margin: 0; }").unwrap();

        let generator = Generator::new(&site).unwrap();
        generator.generate(&[]).unwrap();

        let copied = site.public_dir.join("css/base.css");
        assert!(copied.exists());
    }
}
