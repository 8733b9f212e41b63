use anyhow::{Context, Result};
use icon_forge::config::Config;
use icon_forge::generate::{generate_icons, icon_jobs};

fn main() -> Result<()> {
    let config = Config::load_or_default()?;
    let recipe = config.recipe()?;
    let jobs = icon_jobs(&config);

    generate_icons(recipe, &jobs).context("Failed to generate icons")?;

    println!("All icons created!");
    Ok(())
}
