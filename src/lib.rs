//! markpage: a minimal static page generator
//!
//! This crate turns a directory of Markdown essays into static HTML pages.
//! Each page goes through a one-shot render sequence: convert the Markdown
//! to HTML, inject it into the page shell, and syntax-highlight any fenced
//! code blocks.

pub mod commands;
pub mod config;
pub mod content;
pub mod render;
pub mod server;

use anyhow::Result;
use std::path::Path;

/// The main markpage application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Pages (source) directory
    pub pages_dir: std::path::PathBuf,
    /// Static assets directory
    pub assets_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let pages_dir = base_dir.join(&config.pages_dir);
        let assets_dir = base_dir.join(&config.assets_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            pages_dir,
            assets_dir,
            public_dir,
        })
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Build the static pages
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new page
    pub fn new_page(&self, title: &str) -> Result<()> {
        commands::new::run(self, title)
    }
}
