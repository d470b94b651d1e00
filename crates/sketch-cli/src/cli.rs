//! CLI definitions for sketchpp.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sketchpp",
    version,
    about = "Sketch preprocessor and diagnostics front end",
    after_help = "Examples:\n  sketchpp preprocess ./Dots\n  sketchpp map ./Dots --issues issues.json\n  sketchpp simplify \"missing ';' at '{'\""
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge and rewrite a sketch folder into one program.
    Preprocess {
        /// Sketch folder; the primary tab is `<folder>/<folder>.pde`.
        sketch: PathBuf,
        /// Write the program here instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Print the pass summary as JSON instead of the program.
        #[arg(long)]
        json: bool,
    },
    /// Map parser issues on the generated program back to tab lines.
    Map {
        /// Sketch folder.
        sketch: PathBuf,
        /// JSON file holding `[{"line": .., "column": .., "message": ..}]`.
        #[arg(long, value_name = "FILE")]
        issues: PathBuf,
        /// Highlight whole lines instead of `column` characters.
        #[arg(long)]
        full_line: bool,
    },
    /// Rewrite one parser message into a hint.
    Simplify {
        /// The parser message.
        message: String,
        /// Sketch folder whose `[strings]` overrides apply.
        #[arg(long, value_name = "DIR")]
        sketch: Option<PathBuf>,
        /// Also print which strategy matched.
        #[arg(long)]
        explain: bool,
    },
}
