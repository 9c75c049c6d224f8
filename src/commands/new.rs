//! Create a new page

use anyhow::Result;
use std::fs;

use crate::Site;

/// Create a new page from the front-matter stub
pub fn run(site: &Site, title: &str) -> Result<()> {
    let now = chrono::Local::now();

    fs::create_dir_all(&site.pages_dir)?;

    let slug = slug::slugify(title);
    let filename = site
        .config
        .new_page_name
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string());

    let file_path = site.pages_dir.join(&filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\n---\n",
        title,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
