//! Markdown rendering with syntax highlighting
//!
//! The render sequence for a document is convert, inject, highlight.
//! Conversion and highlighting both happen here: fenced code blocks are
//! intercepted from the pulldown-cmark event stream and replaced with
//! syntect-highlighted HTML before the final HTML string is assembled.

use anyhow::Result;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::collections::HashMap;
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
    line_numbers: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: "base16-ocean.dark".to_string(),
            line_numbers: true,
        }
    }

    /// Create with custom settings
    pub fn with_options(theme: &str, line_numbers: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
            line_numbers,
        }
    }

    /// Render markdown to HTML
    ///
    /// Output is a pure function of the input string: rendering the same
    /// markdown twice yields identical HTML.
    pub fn render(&self, markdown: &str) -> Result<String> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_GFM;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();

        // Fenced code block interception state
        let mut in_code_block = false;
        let mut code_block_lang: Option<String> = None;
        let mut code_block_content = String::new();

        // Heading buffering state, for anchor id generation
        let mut heading_events: Option<Vec<Event>> = None;
        let mut heading_start: Option<Tag> = None;
        let mut used_ids: HashMap<String, usize> = HashMap::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code_block = true;
                    code_block_lang = match kind {
                        CodeBlockKind::Fenced(lang) => {
                            let lang = lang.to_string();
                            if lang.is_empty() {
                                None
                            } else {
                                Some(lang)
                            }
                        }
                        CodeBlockKind::Indented => None,
                    };
                    code_block_content.clear();
                }
                Event::End(TagEnd::CodeBlock) => {
                    let highlighted =
                        self.highlight_code(&code_block_content, code_block_lang.as_deref());
                    events.push(Event::Html(CowStr::from(highlighted)));
                    in_code_block = false;
                    code_block_lang = None;
                }
                Event::Text(text) if in_code_block => {
                    code_block_content.push_str(&text);
                }
                Event::Start(tag @ Tag::Heading { .. }) => {
                    heading_start = Some(tag);
                    heading_events = Some(Vec::new());
                }
                Event::End(TagEnd::Heading(_)) => {
                    let inner = heading_events.take().unwrap_or_default();
                    if let Some(tag) = heading_start.take() {
                        events.push(anchored_heading(tag, &inner, &mut used_ids));
                    }
                    events.extend(inner);
                    events.push(event);
                }
                other => {
                    if let Some(buf) = heading_events.as_mut() {
                        buf.push(other);
                    } else {
                        events.push(other);
                    }
                }
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());

        Ok(html_output)
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        // Try to find syntax for the language
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = self
            .theme_set
            .themes
            .get(&self.theme_name)
            .unwrap_or_else(|| {
                self.theme_set
                    .themes
                    .values()
                    .next()
                    .expect("No themes available")
            });

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => {
                if self.line_numbers {
                    self.add_line_numbers(&highlighted, lang)
                } else {
                    format!(
                        r#"<pre><code class="language-{}">{}</code></pre>"#,
                        lang, highlighted
                    )
                }
            }
            Err(_) => {
                // Fallback to plain code block
                let escaped = html_escape(code);
                format!(
                    r#"<pre><code class="language-{}">{}</code></pre>"#,
                    lang, escaped
                )
            }
        }
    }

    /// Add line numbers to highlighted code
    fn add_line_numbers(&self, code: &str, lang: &str) -> String {
        let lines: Vec<&str> = code.lines().collect();
        let line_count = lines.len();

        let mut gutter = String::new();
        let mut code_lines = String::new();

        for (i, line) in lines.iter().enumerate() {
            gutter.push_str(&format!(r#"<span class="line-number">{}</span>"#, i + 1));
            if i < line_count - 1 {
                gutter.push('\n');
            }

            code_lines.push_str(line);
            if i < line_count - 1 {
                code_lines.push('\n');
            }
        }

        format!(
            r#"<figure class="highlight {}"><table><tr><td class="gutter"><pre>{}</pre></td><td class="code"><pre>{}</pre></td></tr></table></figure>"#,
            lang, gutter, code_lines
        )
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rebuild a heading start tag with a slugified anchor id, so links like
/// `[jump](#my-section)` in the source resolve in the rendered output.
/// Explicit ids from heading attributes are kept as-is.
fn anchored_heading<'a>(
    tag: Tag<'a>,
    inner: &[Event<'a>],
    used_ids: &mut HashMap<String, usize>,
) -> Event<'a> {
    let (level, id, classes, attrs) = match tag {
        Tag::Heading {
            level,
            id,
            classes,
            attrs,
        } => (level, id, classes, attrs),
        other => return Event::Start(other),
    };

    let id = id.or_else(|| {
        let mut text = String::new();
        for event in inner {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(t),
                _ => {}
            }
        }
        let base = slug::slugify(text);
        if base.is_empty() {
            return None;
        }
        let count = used_ids.entry(base.clone()).or_insert(0);
        let unique = if *count == 0 {
            base.clone()
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;
        Some(CowStr::from(unique))
    });

    Event::Start(Tag::Heading {
        level,
        id,
        classes,
        attrs,
    })
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
