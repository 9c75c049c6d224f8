//! List site content

use anyhow::Result;

use crate::content::DocumentLoader;
use crate::Site;

/// List the loaded documents
pub fn run(site: &Site) -> Result<()> {
    let loader = DocumentLoader::new(site);
    let docs = loader.load_documents()?;

    println!("Pages ({}):", docs.len());
    for doc in docs {
        println!(
            "  {} - {} [{}]",
            doc.date.format("%Y-%m-%d"),
            doc.title,
            doc.source
        );
    }

    Ok(())
}
