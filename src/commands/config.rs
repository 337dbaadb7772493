use anyhow::Result;
use owo_colors::OwoColorize;
use spadie_core::config::ScheduleConfig;

pub fn run(init: bool) -> Result<()> {
    let path = ScheduleConfig::config_path()?;

    if init {
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        ScheduleConfig::create_default_config(&path)?;
        println!("{}", format!("Created {}", path.display()).green());
        return Ok(());
    }

    let status = if path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", path.display().bold(), status.dimmed());
    println!();
    print!("{}", ScheduleConfig::default_contents());

    Ok(())
}
