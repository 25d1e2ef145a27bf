//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docarchive_classifier::Classifier;
use docarchive_domain::GenerationBackend;
use std::fmt::Display;
use std::fs;
use std::io::Read;

/// Resolve the text to classify: argument, then `--file`, then `stdin`.
pub fn read_input(args: &ClassifyArgs, mut stdin: impl Read) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return fs::read_to_string(path).map_err(|e| {
            CliError::InvalidInput(format!("Could not read {}: {}", path.display(), e))
        });
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Execute the classify command.
///
/// Empty input is not an error here: it yields the `unknown_empty_text`
/// record like any other text.
pub fn execute_classify<B>(
    args: ClassifyArgs,
    classifier: &Classifier<B>,
    formatter: &Formatter,
) -> Result<()>
where
    B: GenerationBackend,
    B::Error: Display,
{
    let text = read_input(&args, std::io::stdin().lock())?;
    let record = classifier.classify(&text);
    println!("{}", formatter.format_record(&record)?);
    Ok(())
}
