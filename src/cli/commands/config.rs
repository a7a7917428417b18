//! `config` subcommand: inspect and edit the persisted settings

use crate::args::ConfigSubcommand;
use campus_records::config::Config;
use campus_records::info;

/// Dispatch config subcommands; a bare `config` prints every setting
///
/// # Errors
/// Returns a message for unknown keys, rejected values and unwritable config files
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand.unwrap_or(ConfigSubcommand::Get { key: None }) {
        ConfigSubcommand::Get { key: None } => print!("{config}"),
        ConfigSubcommand::Get { key: Some(key) } => {
            let value = config
                .get(&key)
                .ok_or_else(|| format!("Unknown config key: '{key}'"))?;
            println!("{value}");
        }
        ConfigSubcommand::Set { key, value } => {
            config.set(&key, &value)?;
            persist(config)?;
            info!("Config {key} set to {value}");
            println!("✓ {key} = {value}");
        }
        ConfigSubcommand::Unset { key } => {
            config.unset(&key, defaults)?;
            persist(config)?;
            info!("Config {key} restored to its default");
            println!("✓ {key} restored to its default");
        }
        ConfigSubcommand::Reset { yes } => reset(yes)?,
    }
    Ok(())
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn reset(confirmed: bool) -> Result<(), String> {
    let path = Config::get_config_file_path();
    if !path.exists() {
        println!("✓ No config file, defaults already apply");
        return Ok(());
    }
    if !confirmed {
        return Err(format!(
            "Refusing to delete {} without --yes",
            path.display()
        ));
    }
    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    info!("Removed config file {}", path.display());
    println!("✓ Removed {}", path.display());
    Ok(())
}
