use anyhow::Result;
use availcal_core::config::AvailCalConfig;
use owo_colors::OwoColorize;

pub fn init() -> Result<()> {
    let config_path = AvailCalConfig::config_path()?;

    if config_path.exists() {
        anyhow::bail!("Config already exists at {}", config_path.display());
    }

    AvailCalConfig::create_default_config(&config_path)?;
    println!("Created {}", config_path.display());
    Ok(())
}

pub fn paths() -> Result<()> {
    let config_path = AvailCalConfig::config_path()?;
    let config = AvailCalConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Data:    {}", config.data_path().display());

    Ok(())
}
