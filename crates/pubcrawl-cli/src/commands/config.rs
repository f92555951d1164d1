use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, Table};
use pubcrawl_config::{Config, PathManager};
use serde_json::json;

pub fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    match cmd {
        ConfigCommands::Show => show_config(&path_manager, output),
        ConfigCommands::Init { force } => init_config(&path_manager, force, output),
    }
}

fn show_config(path_manager: &PathManager, output: &Output) -> Result<()> {
    let config_file = path_manager.config_file();
    let config = Config::load_or_default(&config_file).map_err(|e| eyre!("{}", e))?;

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }
            if !config_file.exists() {
                output.warn(format!(
                    "No configuration file at {}, showing defaults. Run 'pubcrawl config init' to create one.",
                    config_file.display()
                ));
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Setting").add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Value").add_attribute(comfy_table::Attribute::Bold),
            ]);
            table.add_row(vec![Cell::new("Config File"), Cell::new(config_file.display())]);
            table.add_row(vec![Cell::new("api.base_url"), Cell::new(&config.api.base_url)]);
            table.add_row(vec![Cell::new("api.user_id"), Cell::new(&config.api.user_id)]);
            table.add_row(vec![Cell::new("api.timeout_seconds"), Cell::new(config.api.timeout_seconds)]);
            table.add_row(vec![Cell::new("area.latitude"), Cell::new(config.area.latitude)]);
            table.add_row(vec![Cell::new("area.longitude"), Cell::new(config.area.longitude)]);
            table.add_row(vec![Cell::new("area.deg"), Cell::new(config.area.deg)]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            output.println(table.to_string());
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "config_file": config_file.display().to_string(),
                "exists": config_file.exists(),
                "config": serde_json::to_value(&config)?,
            }));
        }
    }

    if let Err(e) = config.validate() {
        output.warn(format!("Configuration is invalid: {}", e));
    }

    Ok(())
}

fn init_config(path_manager: &PathManager, force: bool, output: &Output) -> Result<()> {
    let config_file = path_manager.config_file();
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create {}: {}", path_manager.config_dir().display(), e))?;
    Config::default()
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to write config to {}: {}", config_file.display(), e))?;

    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let path_manager = PathManager::with_base(dir.path().to_path_buf());
        let output = Output::new(OutputFormat::Json, true);

        init_config(&path_manager, false, &output).unwrap();
        let loaded = Config::load_from_file(&path_manager.config_file()).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = TempDir::new().unwrap();
        let path_manager = PathManager::with_base(dir.path().to_path_buf());
        let output = Output::new(OutputFormat::Json, true);
        std::fs::write(path_manager.config_file(), "[api]\nuser_id = \"dave\"\n").unwrap();

        init_config(&path_manager, false, &output).unwrap();
        let loaded = Config::load_from_file(&path_manager.config_file()).unwrap();
        assert_eq!(loaded.api.user_id, "dave");

        init_config(&path_manager, true, &output).unwrap();
        let loaded = Config::load_from_file(&path_manager.config_file()).unwrap();
        assert_eq!(loaded.api.user_id, "mike");
    }
}
