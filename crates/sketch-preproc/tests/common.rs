//! Shared helpers for preprocessing tests.
#![allow(dead_code, unused_imports)]

pub use sketch_preproc::{
    preprocess, LineOrigin, PassIssue, PreprocessError, PreprocessedSketch, Sketch, SketchConfig,
    SketchMode, Tab, TabLocation,
};

/// Configuration that keeps the generated header free of the date line.
pub fn testing_config() -> SketchConfig {
    let mut config = SketchConfig::default();
    config.preprocessor.testing = true;
    config
}

/// Preprocesses a single-tab sketch named `Sketch`.
pub fn run_single(source: &str) -> PreprocessedSketch {
    run_tabs(vec![Tab::sketch("Sketch", source)])
}

/// Preprocesses the given tabs as a sketch named `Sketch`.
pub fn run_tabs(tabs: Vec<Tab>) -> PreprocessedSketch {
    preprocess(&Sketch::new("Sketch", tabs), &testing_config()).expect("preprocess")
}

/// Returns line `line` of the generated program.
pub fn program_line(result: &PreprocessedSketch, line: usize) -> &str {
    result.program.lines().nth(line).unwrap_or("")
}

/// Returns the program line holding line `local_line` of tab `tab_index`.
pub fn line_of(result: &PreprocessedSketch, tab_index: usize, local_line: usize) -> &str {
    let line = result
        .offsets
        .global_line(tab_index, local_line)
        .expect("tab is merged");
    program_line(result, line)
}
