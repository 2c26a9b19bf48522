use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config};
use crate::{DocsLintError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config } => run_config_show(config.as_deref(), cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.error_type());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(DocsLintError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|source| DocsLintError::FileRead {
        path: config_path.to_path_buf(),
        source,
    })?;
    let config: Config = toml::from_str(&content)?;
    validate_config(&config)
}

fn run_config_show(config_path: Option<&Path>, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error [{}]: {e}", e.error_type());
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration as TOML.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(config_path: Option<&Path>, no_config: bool) -> Result<String> {
    let config = if no_config {
        Config::default()
    } else {
        let loader = FileConfigLoader::new();
        let loaded = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
        if let Some(source) = &loaded.source {
            log::info!("using configuration from {}", source.display());
        }
        loaded.config
    };

    Ok(toml::to_string_pretty(&config)?)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
