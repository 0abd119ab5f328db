//! Render one works entry to HTML

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::Works;

/// Render entry `id` and write it to `output`, or stdout when absent.
/// A relative `output` is taken from the site's base directory.
pub async fn run(works: &Works, id: &str, output: Option<&Path>, fragment: bool) -> Result<()> {
    let start = std::time::Instant::now();

    let html = if fragment {
        works.render_fragment(id).await?
    } else {
        works.render_page(id).await?
    };

    match output {
        Some(path) => {
            let path = works.base_dir.join(path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &html).with_context(|| format!("failed to write {:?}", path))?;
            tracing::info!(
                "Rendered entry {} to {:?} in {:.2}s",
                id,
                path,
                start.elapsed().as_secs_f64()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}
