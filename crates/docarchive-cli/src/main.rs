//! docarchive CLI - OCR, classify and file scanned documents.

use clap::Parser;
use docarchive_classifier::Classifier;
use docarchive_cli::commands;
use docarchive_cli::{ArchiveConfig, Cli, Command, Formatter};
use docarchive_llm::OllamaProvider;
use docarchive_store::FileOrganizer;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `-v` forces debug, otherwise `RUST_LOG` or info.
fn init_logging(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> docarchive_cli::Result<()> {
    let config_path = ArchiveConfig::resolve_path(cli.config.as_deref())?;
    let mut config = ArchiveConfig::load_from(&config_path)?;
    config.apply_overrides(cli.endpoint, cli.model);
    config.validate()?;

    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
        Command::Classify(args) => {
            let backend = OllamaProvider::from_config(&config.llm)?;
            let classifier = Classifier::new(backend, config.classifier.clone());
            commands::execute_classify(args, &classifier, &formatter)?;
        }
        Command::Archive(args) => {
            let backend = OllamaProvider::from_config(&config.llm)?;
            let classifier = Classifier::new(backend, config.classifier.clone());
            let extractor = docarchive_ocr::extractor_from_config(&config.ocr);
            let output_dir = args
                .output_dir
                .clone()
                .unwrap_or_else(|| config.archive.output_dir.clone());
            let store = FileOrganizer::new(output_dir)?;
            commands::execute_archive(args, extractor.as_ref(), &classifier, &store, &formatter)?;
        }
    }

    Ok(())
}
