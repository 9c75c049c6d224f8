//! Built-in page shell templates using the Tera template engine
//!
//! The shell templates are embedded directly in the binary; the rendered
//! Markdown for a document is injected into the content region of
//! `page.html` wholesale, replacing whatever a previous build wrote there.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded page shell
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all shell templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // The content region receives pre-rendered HTML, so autoescaping
        // must stay off
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("templates/layout.html")),
            ("page.html", include_str!("templates/page.html")),
            ("index.html", include_str!("templates/index.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
    pub root: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub title: String,
    pub date: String,
    pub path: String,
    pub permalink: String,
    pub content: String,
    pub prev: Option<NavPage>,
    pub next: Option<NavPage>,
}

/// Link target for prev/next page navigation
#[derive(Debug, Clone, Serialize)]
pub struct NavPage {
    pub title: String,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ConfigData {
        ConfigData {
            title: "Essays".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: "Someone".to_string(),
            language: "en".to_string(),
            url: "http://example.com".to_string(),
            root: "/".to_string(),
        }
    }

    #[test]
    fn test_page_template_injects_content() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("config", &test_config());
        context.insert(
            "page",
            &PageData {
                title: "On Equality".to_string(),
                date: "2024-03-01".to_string(),
                path: "/equals/".to_string(),
                permalink: "http://example.com/equals/".to_string(),
                content: "<h1 id=\"title\">Title</h1><p>Some <em>text</em>.</p>".to_string(),
                prev: None,
                next: Some(NavPage {
                    title: "On HashCode".to_string(),
                    path: "/hashcode/".to_string(),
                }),
            },
        );

        let html = renderer.render("page.html", &context).unwrap();
        // Injected HTML lands in the content region unescaped
        assert!(html.contains("<em>text</em>"));
        assert!(html.contains(r#"<main class="content">"#));
        assert!(html.contains("css/base.css"));
        // Navigation renders only the sides that exist
        assert!(html.contains(r#"<a class="nav-next" href="/hashcode/">On HashCode</a>"#));
        assert!(!html.contains("nav-prev"));
    }

    #[test]
    fn test_index_template_lists_pages() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert("config", &test_config());
        context.insert(
            "pages",
            &vec![PageData {
                title: "On Equality".to_string(),
                date: "2024-03-01".to_string(),
                path: "/equals/".to_string(),
                permalink: "http://example.com/equals/".to_string(),
                content: String::new(),
                prev: None,
                next: None,
            }],
        );

        let html = renderer.render("index.html", &context).unwrap();
        assert!(html.contains(r#"<a href="/equals/">On Equality</a>"#));
    }
}
