//! Loading a sketch from its folder.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context};
use sketch_preproc::tab::{JAVA_EXTENSION, SKETCH_EXTENSION};
use sketch_preproc::{Sketch, Tab};
use tracing::debug;

/// Loads the sketch in `folder`.
///
/// The primary tab is `<folder>.pde`; every other `.pde` and `.java` file
/// follows, sorted by file name.
pub fn load_sketch(folder: &Path) -> anyhow::Result<Sketch> {
    let name = folder
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("invalid sketch folder '{}'", folder.display()))?;
    let primary_path = folder.join(format!("{name}.{SKETCH_EXTENSION}"));
    if !primary_path.is_file() {
        bail!(
            "sketch folder '{}' has no primary tab '{name}.{SKETCH_EXTENSION}'",
            folder.display()
        );
    }

    let mut others = BTreeMap::new();
    for extension in [SKETCH_EXTENSION, JAVA_EXTENSION] {
        let pattern = format!("{}/*.{extension}", folder.display());
        for entry in glob::glob(&pattern)
            .with_context(|| format!("invalid glob pattern for '{}'", folder.display()))?
        {
            let path = entry?;
            if path == primary_path {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            others.insert(file_name.to_string(), path);
        }
    }

    let mut tabs = vec![read_tab(&primary_path)?];
    for path in others.values() {
        tabs.push(read_tab(path)?);
    }
    debug!(sketch = name, tabs = tabs.len(), "loaded sketch folder");
    Ok(Sketch::new(name, tabs))
}

fn read_tab(path: &Path) -> anyhow::Result<Tab> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tab '{}'", path.display()))?;
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or_default();
    Ok(Tab::new(stem, extension, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn sketch_dir(name: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir()
            .join(format!("sketchpp-cli-{stamp}"))
            .join(name);
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn primary_tab_comes_first() {
        let dir = sketch_dir("Dots");
        fs::write(dir.join("Dots.pde"), "dot();\n").unwrap();
        fs::write(dir.join("Zeta.pde"), "void dot() {}\n").unwrap();
        fs::write(dir.join("Alpha.java"), "class Alpha {}\n").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let sketch = load_sketch(&dir).unwrap();
        let names: Vec<String> = sketch.tabs().iter().map(Tab::file_name).collect();
        assert_eq!(names, vec!["Dots.pde", "Alpha.java", "Zeta.pde"]);
        assert_eq!(sketch.name(), "Dots");
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn missing_primary_tab() {
        let dir = sketch_dir("Empty");
        fs::write(dir.join("Other.pde"), "x();\n").unwrap();
        let err = load_sketch(&dir).unwrap_err();
        assert!(err.to_string().contains("no primary tab"));
        fs::remove_dir_all(dir).ok();
    }
}
