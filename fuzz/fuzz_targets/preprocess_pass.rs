#![no_main]

use libfuzzer_sys::fuzz_target;
use sketch_diag::{DefaultStrings, DocumentLines, IssueEmitter};
use sketch_preproc::{preprocess, RawIssue, Sketch, SketchConfig, Tab};

const MAX_SOURCE_BYTES: usize = 4096;

fn decode_source(bytes: &[u8]) -> String {
    let capped = &bytes[..bytes.len().min(MAX_SOURCE_BYTES)];
    String::from_utf8_lossy(capped).into_owned()
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split = usize::from(data[0]) % (data.len() + 1);
    let primary = decode_source(&data[..split]);
    let helper = decode_source(&data[split..]);

    let mut config = SketchConfig::default();
    config.preprocessor.testing = true;
    let sketch = Sketch::new(
        "Fuzz",
        vec![Tab::sketch("Fuzz", primary), Tab::sketch("Helper", helper)],
    );
    let Ok(result) = preprocess(&sketch, &config) else {
        return;
    };

    for (line, origin) in result.origins.iter().enumerate() {
        if let sketch_preproc::LineOrigin::Source { tab_index, line: local } = origin {
            assert_eq!(result.offsets.global_line(tab_index, local), Some(line));
        }
    }

    // Traced columns stay inside the tab line they resolve to.
    for line in 0..=result.line_count() {
        for column in [0, 1, 7, 80] {
            let Some(position) = result.source_position(line, column) else {
                continue;
            };
            let tab_line = sketch.tabs()[position.tab_index]
                .content
                .split('\n')
                .nth(position.line)
                .unwrap_or("");
            assert!(position.column <= tab_line.chars().count());
        }
    }

    // Every program line, plus one past the end, must map somewhere.
    let documents = DocumentLines::for_sketch(&sketch);
    let issues: Vec<RawIssue> = (0..=result.line_count())
        .map(|line| RawIssue::new(line as i64, i64::from(data[0] % 8), "missing ';' at 'x'"))
        .collect();
    let problems = IssueEmitter::new(&DefaultStrings).problems(&result, &issues, &documents);
    for problem in problems {
        assert!(problem.range_len() > 0);
    }
});
