//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Front-matter data from a document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub updated: Option<String>,
    pub lang: Option<String>,
    /// Documents are published by default
    #[serde(default = "default_published")]
    pub published: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

fn default_published() -> bool {
    true
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            date: None,
            updated: None,
            lang: None,
            published: true,
            extra: HashMap::new(),
        }
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        // YAML front-matter (---)
        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        // JSON front-matter (;;; or {"key":)
        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = &content[3..]; // Skip opening ---
        let rest = rest.trim_start_matches(['\n', '\r']);

        if let Some(end_pos) = rest.find("\n---") {
            let yaml_content = &rest[..end_pos];
            let remaining = &rest[end_pos + 4..]; // Skip \n---
            let remaining = remaining.trim_start_matches(['\n', '\r']);

            if yaml_content.trim().is_empty() {
                return Ok((FrontMatter::default(), remaining));
            }

            // Essays may use --- as a thematic break, so only treat the
            // leading block as front-matter when it has key: value lines.
            if !looks_like_yaml(yaml_content) {
                return Ok((FrontMatter::default(), content));
            }

            match serde_yaml::from_str::<FrontMatter>(yaml_content) {
                Ok(fm) => Ok((fm, remaining)),
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse YAML front-matter, treating as content: {}",
                        e
                    );
                    Ok((FrontMatter::default(), content))
                }
            }
        } else {
            // No closing ---, treat as no front-matter
            Ok((FrontMatter::default(), content))
        }
    }

    fn parse_json(content: &str) -> Result<(Self, &str)> {
        // JSON front-matter delimited by ;;;
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let json_content = &rest[..end_pos];
                let remaining = &rest[end_pos + 3..];
                let remaining = remaining.trim_start_matches(['\n', '\r']);

                let fm: FrontMatter = serde_json::from_str(json_content)
                    .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;

                return Ok((fm, remaining));
            }
        }

        // A bare JSON object at the start of the file. The stream
        // deserializer finds the real end of the object, so braces inside
        // string values don't cut it short.
        if content.starts_with('{') {
            let mut stream = serde_json::Deserializer::from_str(content).into_iter::<FrontMatter>();
            match stream.next() {
                Some(Ok(fm)) => {
                    let remaining = &content[stream.byte_offset()..];
                    let remaining = remaining.trim_start_matches(['\n', '\r']);
                    return Ok((fm, remaining));
                }
                Some(Err(e)) => {
                    return Err(anyhow!("Failed to parse JSON front-matter: {}", e));
                }
                None => {}
            }
        }

        Err(anyhow!("Invalid JSON front-matter"))
    }

    /// Parse the date string into a DateTime
    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_ref().and_then(|s| parse_date_string(s))
    }

    /// Parse the updated date string into a DateTime
    pub fn parse_updated(&self) -> Option<DateTime<Local>> {
        self.updated.as_ref().and_then(|s| parse_date_string(s))
    }
}

/// A leading block qualifies as YAML front-matter only if some line has a
/// `key: value` shape with a plain identifier key (not a URL scheme).
fn looks_like_yaml(block: &str) -> bool {
    block.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        if let Some(colon_pos) = trimmed.find(':') {
            let before_colon = &trimmed[..colon_pos];
            let is_valid_key = !before_colon.is_empty()
                && before_colon
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                && before_colon != "http"
                && before_colon != "https"
                && before_colon != "ftp";
            if is_valid_key {
                let after_colon = &trimmed[colon_pos + 1..];
                return after_colon.is_empty() || after_colon.starts_with(' ');
            }
        }
        false
    })
}

/// Parse a date string in various formats
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        // The parsed value is local wall-clock time, not UTC
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).single();
        }
        if let Ok(d) = chrono::NaiveDate::parse_from_str(s, fmt) {
            let dt = d.and_hms_opt(0, 0, 0)?;
            return Local.from_local_datetime(&dt).single();
        }
    }

    // RFC 3339 / ISO 8601
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}
