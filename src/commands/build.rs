//! Build the static pages

use anyhow::Result;
use notify::Watcher;
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::content::DocumentLoader;
use crate::render::Generator;
use crate::Site;

/// Run the build once
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let loader = DocumentLoader::new(site);
    let docs = loader.load_documents()?;

    tracing::info!("Loaded {} documents", docs.len());

    let generator = Generator::new(site)?;
    generator.generate(&docs)?;

    let duration = start.elapsed();
    tracing::info!("Built in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch for file changes and rebuild
pub async fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    register_watch_paths(&mut watcher, site)?;

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // Debounce events
    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, rebuilding...");
                    if let Err(e) = run(site) {
                        tracing::error!("Build failed: {}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                // Continue waiting
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}

/// Register the paths a rebuild depends on, skipping any that don't exist
fn register_watch_paths(watcher: &mut notify::RecommendedWatcher, site: &Site) -> Result<()> {
    if site.pages_dir.exists() {
        watcher.watch(site.pages_dir.as_ref(), notify::RecursiveMode::Recursive)?;
    }

    if site.assets_dir.exists() {
        watcher.watch(site.assets_dir.as_ref(), notify::RecursiveMode::Recursive)?;
    }

    let config_path = site.base_dir.join("_config.yml");
    if config_path.exists() {
        watcher.watch(Path::new(&config_path), notify::RecursiveMode::NonRecursive)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_register_watch_paths_tolerates_missing_dirs() {
        // A freshly initialized directory may have no pages yet; watching
        // must not abort
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::default();
        let site = Site {
            pages_dir: dir.path().join(&config.pages_dir),
            assets_dir: dir.path().join(&config.assets_dir),
            public_dir: dir.path().join(&config.public_dir),
            base_dir: dir.path().to_path_buf(),
            config,
        };

        let (tx, _rx) = channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })
        .unwrap();

        register_watch_paths(&mut watcher, &site).unwrap();
    }
}
