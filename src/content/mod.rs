//! Content loading and rendering

mod document;
mod frontmatter;
mod loader;
mod markdown;

pub use document::Document;
pub use frontmatter::FrontMatter;
pub use loader::DocumentLoader;
pub use markdown::MarkdownRenderer;
