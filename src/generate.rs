use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::recipe::Recipe;
use crate::render::render;

/// One icon to produce: a pixel size and the file it lands in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconJob {
    pub size: u32,
    pub path: PathBuf,
}

/// Derive the output job list from a configuration: one `icon{size}.png`
/// per configured size, under the configured output directory.
pub fn icon_jobs(config: &Config) -> Vec<IconJob> {
    config
        .sizes
        .iter()
        .map(|&size| IconJob {
            size,
            path: config.output_dir.join(format!("icon{}.png", size)),
        })
        .collect()
}

/// Render every job with the given recipe and write the results to disk.
///
/// Jobs are independent; the first failure aborts the run, but files already
/// written by earlier jobs stay on disk.
pub fn generate_icons(recipe: Recipe, jobs: &[IconJob]) -> Result<()> {
    for job in jobs {
        let png = render(job.size, &recipe.shapes(job.size))?;
        fs::write(&job.path, png)?;
        println!("Created {}", job.path.display());
    }
    Ok(())
}
