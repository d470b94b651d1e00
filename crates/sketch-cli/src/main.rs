//! CLI entrypoint for the sketch preprocessor.

mod cli;
mod sketch_dir;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use sketch_diag::{DocumentLines, IssueEmitter, IssueShape, Simplifier};
use sketch_preproc::{preprocess, PreprocessError, RawIssue, SketchConfig};
use tracing::{debug, info, warn};

use cli::{Cli, Command};
use sketch_dir::load_sketch;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Preprocess {
            sketch,
            output,
            json,
        } => {
            let config = SketchConfig::load(&sketch);
            let loaded = load_sketch(&sketch)?;
            let result = preprocess(&loaded, &config).map_err(pass_error)?;
            for problem in &result.sketch_problems {
                warn!("{problem}");
            }
            let text = if json {
                serde_json::to_string_pretty(&result)?
            } else {
                result.program.clone()
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, text)
                        .with_context(|| format!("failed to write '{}'", path.display()))?;
                    info!("Wrote {}", path.display());
                }
                None => print!("{text}"),
            }
        }
        Command::Map {
            sketch,
            issues,
            full_line,
        } => {
            let config = SketchConfig::load(&sketch);
            let loaded = load_sketch(&sketch)?;
            let result = preprocess(&loaded, &config).map_err(pass_error)?;
            let raw = read_issues(&issues)?;
            let documents = DocumentLines::for_sketch(&loaded);
            let shape = if full_line {
                IssueShape::FullLine
            } else {
                IssueShape::Column
            };
            let problems = IssueEmitter::new(&config.strings)
                .with_shape(shape)
                .problems(&result, &raw, &documents);
            debug!(issues = raw.len(), problems = problems.len(), "mapped issues");
            println!("{}", serde_json::to_string_pretty(&problems)?);
        }
        Command::Simplify {
            message,
            sketch,
            explain,
        } => {
            let strings = sketch
                .map(|root| SketchConfig::load(&root).strings)
                .unwrap_or_else(BTreeMap::new);
            let simplifier = Simplifier::new(&strings);
            if explain {
                match simplifier.matching_strategy(&message) {
                    Some(strategy) => println!("strategy: {strategy:?}"),
                    None => println!("strategy: none"),
                }
            }
            println!("{}", simplifier.message_for(&message));
        }
    }
    Ok(())
}

fn pass_error(err: PreprocessError) -> anyhow::Error {
    anyhow::Error::new(err).context("preprocessing failed")
}

fn read_issues(path: &Path) -> anyhow::Result<Vec<RawIssue>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read issues '{}'", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid issue list in '{}'", path.display()))
}
