//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Site;

/// Default base stylesheet written into assets/css
const BASE_STYLESHEET: &str = r#"body {
  max-width: 46em;
  margin: 0 auto;
  padding: 0 1em;
  font-family: Georgia, serif;
  line-height: 1.6;
  color: #222;
}

.site-header {
  margin: 2em 0;
}

.site-title {
  font-size: 1.4em;
  font-weight: bold;
  text-decoration: none;
  color: inherit;
}

.page-date {
  color: #888;
  font-size: 0.9em;
}

.page-list {
  list-style: none;
  padding: 0;
}

.page-list-item {
  margin: 0.5em 0;
}

.page-nav {
  display: flex;
  justify-content: space-between;
  margin: 2em 0;
}

figure.highlight {
  margin: 1em 0;
  overflow-x: auto;
}

figure.highlight .gutter {
  color: #888;
  padding-right: 1em;
  text-align: right;
  user-select: none;
}

pre code {
  display: block;
  padding: 1em;
  overflow-x: auto;
}
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("pages"))?;
    fs::create_dir_all(target_dir.join("assets/css"))?;

    // Create default _config.yml
    let config_content = r#"# Markpage Configuration

# Site
title: Markpage
subtitle: ''
description: ''
author: John Doe
language: en

# URL
url: http://example.com
root: /

# Directory
pages_dir: pages
assets_dir: assets
public_dir: public

# Writing
new_page_name: :title.md

# Code highlighting
highlight:
  theme: base16-ocean.dark
  line_number: true
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    // Create the base stylesheet
    fs::write(target_dir.join("assets/css/base.css"), BASE_STYLESHEET)?;

    // Create a sample page
    let now = chrono::Local::now();
    let sample_page = format!(
        r#"---
title: Hello World
date: {}
---

# Hello World

Welcome to your new site. Edit this page under `pages/`, then run
`markpage build` to regenerate the HTML, or `markpage serve` to preview
it with live reload.

## Code blocks

Fenced code blocks are highlighted at build time:

```java
@Override
public int hashCode() {{
    return Objects.hash(name, birthDate);
}}
```

Jump back to [the top](#hello-world).
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(target_dir.join("pages/hello-world.md"), sample_page)?;

    Ok(())
}

/// Run the init command with an existing site instance
pub fn run(site: &Site) -> Result<()> {
    init_site(&site.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_scaffolds_site() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        assert!(dir.path().join("_config.yml").exists());
        assert!(dir.path().join("pages/hello-world.md").exists());
        assert!(dir.path().join("assets/css/base.css").exists());
    }

    #[test]
    fn test_init_then_build() {
        let dir = tempfile::tempdir().unwrap();
        init_site(dir.path()).unwrap();

        let site = Site::new(dir.path()).unwrap();
        site.build().unwrap();

        let html =
            fs::read_to_string(site.public_dir.join("hello-world/index.html")).unwrap();
        assert!(html.contains("Hello World"));
        // The sample fenced block comes out highlighted
        assert!(html.contains(r#"<figure class="highlight java">"#));
        // The anchor link resolves to the generated heading id
        assert!(html.contains(r##"id="hello-world""##));
        assert!(html.contains(r##"href="#hello-world""##));
    }
}
