//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// docarchive - OCR, classify and file scanned documents.
#[derive(Debug, Parser)]
#[command(name = "docarchive")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Ollama endpoint (overrides the config file)
    #[arg(long, global = true, env = "DOCARCHIVE_OLLAMA_URL")]
    pub endpoint: Option<String>,

    /// Model name (overrides the config file)
    #[arg(long, global = true, env = "DOCARCHIVE_MODEL")]
    pub model: Option<String>,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify a piece of document text and print the record as JSON
    Classify(ClassifyArgs),

    /// OCR, classify and file one or more scans
    Archive(ArchiveArgs),

    /// Show or initialise the configuration file
    Config(ConfigArgs),
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Text to classify (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Arguments for the archive command.
#[derive(Debug, Parser)]
pub struct ArchiveArgs {
    /// Scans to archive
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Archive root (overrides `[archive] output_dir`)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration to the config path
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_with_text() {
        let cli = Cli::parse_from(["docarchive", "classify", "Invoice #42"]);
        match cli.command {
            Command::Classify(args) => {
                assert_eq!(args.text.as_deref(), Some("Invoice #42"));
                assert!(args.file.is_none());
            }
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_classify_text_and_file_conflict() {
        let result =
            Cli::try_parse_from(["docarchive", "classify", "text", "--file", "scan.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_archive_requires_files() {
        assert!(Cli::try_parse_from(["docarchive", "archive"]).is_err());

        let cli = Cli::parse_from(["docarchive", "archive", "a.jpg", "b.png", "-o", "out"]);
        match cli.command {
            Command::Archive(args) => {
                assert_eq!(args.files, vec![PathBuf::from("a.jpg"), PathBuf::from("b.png")]);
                assert_eq!(args.output_dir, Some(PathBuf::from("out")));
            }
            _ => panic!("Expected Archive command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "docarchive",
            "config",
            "show",
            "--endpoint",
            "http://gpu-box:11434",
            "--model",
            "llama3",
            "-vv",
            "--no-color",
        ]);
        assert_eq!(cli.endpoint.as_deref(), Some("http://gpu-box:11434"));
        assert_eq!(cli.model.as_deref(), Some("llama3"));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                action: ConfigAction::Show
            })
        ));
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["docarchive", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force: true }
            })
        ));
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["docarchive"]).is_err());
    }
}
