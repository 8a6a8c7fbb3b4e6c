use anyhow::Result;

use rentride_core::AppConfig;

pub fn run(config: &AppConfig, force: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if path.exists() && !force {
        println!("Config already exists at {}", path.display());
        println!("Use --force to overwrite it.");
        return Ok(());
    }

    config.save()?;
    tracing::info!(path = %path.display(), "Wrote configuration");
    println!("Wrote {}", path.display());

    Ok(())
}
