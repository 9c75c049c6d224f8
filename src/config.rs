//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub pages_dir: String,
    pub assets_dir: String,
    pub public_dir: String,

    // Writing
    pub new_page_name: String,

    // Code highlighting
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Markpage".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            pages_dir: "pages".to_string(),
            assets_dir: "assets".to_string(),
            public_dir: "public".to_string(),

            new_page_name: ":title.md".to_string(),

            highlight: HighlightConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Syntax highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// syntect theme name
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Markpage");
        assert_eq!(config.pages_dir, "pages");
        assert_eq!(config.public_dir, "public");
        assert!(config.highlight.line_number);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Essays
author: Test User
pages_dir: essays
highlight:
  theme: InspiredGitHub
  line_number: false
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Essays");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.pages_dir, "essays");
        assert_eq!(config.highlight.theme, "InspiredGitHub");
        assert!(!config.highlight.line_number);
    }

    #[test]
    fn test_unknown_fields_kept_in_extra() {
        let yaml = r#"
title: My Essays
github_username: someone
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.extra.contains_key("github_username"));
    }
}
