//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::ArchiveConfig;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &ArchiveConfig,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", formatter.info(&format!("Config file: {}", path.display())));
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            init_config(path, force)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default config to {}", path.display()))
            );
        }
    }
    Ok(())
}

/// Write the default configuration to `path`.
pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    ArchiveConfig::default().save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docarchive").join("config.toml");

        init_config(&path, false).unwrap();

        let loaded = ArchiveConfig::load_from(&path).unwrap();
        assert_eq!(loaded, ArchiveConfig::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[llm]\nmodel = \"mine\"\n").unwrap();

        assert!(matches!(init_config(&path, false), Err(CliError::Config(_))));
        assert_eq!(ArchiveConfig::load_from(&path).unwrap().llm.model, "mine");

        init_config(&path, true).unwrap();
        assert_eq!(ArchiveConfig::load_from(&path).unwrap(), ArchiveConfig::default());
    }
}
