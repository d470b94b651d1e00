//! Sketch configuration loaded from `sketchpp.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;
use crate::imports::default_import_list;

/// File names searched for in the sketch folder, in order.
pub const CONFIG_FILES: &[&str] = &["sketchpp.toml", ".sketchpp.toml"];

/// Class the generated sketch class extends.
pub const DEFAULT_RUNTIME_CLASS: &str = "PApplet";

/// Configuration for one sketch folder.
#[derive(Debug, Clone)]
pub struct SketchConfig {
    /// Sketch folder.
    pub root: PathBuf,
    /// Config file path (if found).
    pub config_path: Option<PathBuf>,
    /// Code generation settings.
    pub preprocessor: PreprocessorConfig,
    /// Arguments baked into the generated `main`.
    pub export: ExportConfig,
    /// Localization overrides, keyed by message key.
    pub strings: BTreeMap<String, String>,
}

impl SketchConfig {
    /// Load configuration for a sketch folder, falling back to defaults when
    /// the file is missing or broken.
    pub fn load(root: &Path) -> Self {
        match Self::try_load(root) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err}; using default sketch config");
                Self::base(root, find_config_file(root))
            }
        }
    }

    /// Load configuration for a sketch folder, reporting read and parse
    /// failures.
    pub fn try_load(root: &Path) -> Result<Self, ConfigError> {
        let Some(path) = find_config_file(root) else {
            return Ok(Self::base(root, None));
        };
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let parsed: ConfigFile =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;
        Ok(Self::from_file(root, Some(path), parsed))
    }

    /// Builds a configuration from TOML text; broken text yields defaults.
    pub fn from_contents(root: &Path, config_path: Option<PathBuf>, contents: &str) -> Self {
        match toml::from_str::<ConfigFile>(contents) {
            Ok(parsed) => Self::from_file(root, config_path, parsed),
            Err(err) => {
                if let Some(path) = &config_path {
                    warn!("Failed to parse sketch config at {}: {err}", path.display());
                } else {
                    warn!("Failed to parse sketch config: {err}");
                }
                Self::base(root, config_path)
            }
        }
    }

    /// Default configuration for `root`.
    pub fn base(root: &Path, config_path: Option<PathBuf>) -> Self {
        SketchConfig {
            root: root.to_path_buf(),
            config_path,
            preprocessor: PreprocessorConfig::default(),
            export: ExportConfig::default(),
            strings: BTreeMap::new(),
        }
    }

    fn from_file(root: &Path, config_path: Option<PathBuf>, parsed: ConfigFile) -> Self {
        let mut config = Self::base(root, config_path);
        config.preprocessor = parsed.preprocessor.into();
        config.export = parsed.export.into();
        config.strings = parsed.strings;
        config
    }
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::base(Path::new("."), None)
    }
}

/// Code generation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessorConfig {
    /// Spaces per indentation level in generated code.
    pub indent_width: usize,
    /// Replace non-ASCII characters with `\uXXXX` escapes.
    pub substitute_unicode: bool,
    /// Omit the dated header comment so output is reproducible.
    pub testing: bool,
    /// Package declaration for the generated program.
    pub package: Option<String>,
    /// Base class of the generated sketch class.
    pub runtime_class: String,
    /// Convenience imports, fully qualified class names.
    pub default_imports: Vec<String>,
    /// Packages provided by the sketch's code folder.
    pub code_folder_packages: Vec<String>,
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            substitute_unicode: true,
            testing: false,
            package: None,
            runtime_class: DEFAULT_RUNTIME_CLASS.to_string(),
            default_imports: default_import_list(),
            code_folder_packages: Vec::new(),
        }
    }
}

/// Presentation arguments passed by the generated `main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Launch in present mode.
    pub fullscreen: bool,
    /// Background color around the sketch in present mode.
    pub background_color: String,
    /// Color of the stop button in present mode.
    pub stop_color: String,
    /// Hide the stop button in present mode.
    pub hide_stop: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            fullscreen: false,
            background_color: "#666666".to_string(),
            stop_color: "#cccccc".to_string(),
            hide_stop: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    preprocessor: PreprocessorSection,
    #[serde(default)]
    export: ExportSection,
    #[serde(default)]
    strings: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct PreprocessorSection {
    indent_width: Option<usize>,
    substitute_unicode: Option<bool>,
    testing: Option<bool>,
    package: Option<String>,
    runtime_class: Option<String>,
    default_imports: Option<Vec<String>>,
    #[serde(default)]
    code_folder_packages: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ExportSection {
    fullscreen: Option<bool>,
    background_color: Option<String>,
    stop_color: Option<String>,
    hide_stop: Option<bool>,
}

impl From<PreprocessorSection> for PreprocessorConfig {
    fn from(section: PreprocessorSection) -> Self {
        let defaults = PreprocessorConfig::default();
        PreprocessorConfig {
            indent_width: section.indent_width.unwrap_or(defaults.indent_width),
            substitute_unicode: section
                .substitute_unicode
                .unwrap_or(defaults.substitute_unicode),
            testing: section.testing.unwrap_or(defaults.testing),
            package: section.package.filter(|pkg| !pkg.trim().is_empty()),
            runtime_class: section
                .runtime_class
                .unwrap_or(defaults.runtime_class),
            default_imports: section
                .default_imports
                .unwrap_or(defaults.default_imports),
            code_folder_packages: section.code_folder_packages,
        }
    }
}

impl From<ExportSection> for ExportConfig {
    fn from(section: ExportSection) -> Self {
        let defaults = ExportConfig::default();
        ExportConfig {
            fullscreen: section.fullscreen.unwrap_or(defaults.fullscreen),
            background_color: section
                .background_color
                .unwrap_or(defaults.background_color),
            stop_color: section.stop_color.unwrap_or(defaults.stop_color),
            hide_stop: section.hide_stop.unwrap_or(defaults.hide_stop),
        }
    }
}

pub(crate) fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir(prefix: &str) -> PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("{prefix}-{stamp}"));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let root = temp_dir("sketchpp-config-missing");
        let config = SketchConfig::load(&root);
        assert_eq!(config.config_path, None);
        assert_eq!(config.preprocessor, PreprocessorConfig::default());
        assert_eq!(config.preprocessor.indent_width, 2);
        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn sections_override_defaults() {
        let config = SketchConfig::from_contents(
            Path::new("."),
            None,
            r##"
[preprocessor]
indent_width = 4
testing = true
package = "art.sketches"
code_folder_packages = ["lib.extra"]

[export]
fullscreen = true
hide_stop = true

[strings]
"editor.status.missing.default" = "Falta '%s'?"
"##,
        );
        assert_eq!(config.preprocessor.indent_width, 4);
        assert!(config.preprocessor.testing);
        assert!(config.preprocessor.substitute_unicode);
        assert_eq!(config.preprocessor.package.as_deref(), Some("art.sketches"));
        assert_eq!(config.preprocessor.code_folder_packages, vec!["lib.extra"]);
        assert_eq!(config.preprocessor.default_imports, default_import_list());
        assert!(config.export.fullscreen);
        assert!(config.export.hide_stop);
        assert_eq!(config.export.background_color, "#666666");
        assert_eq!(
            config.strings.get("editor.status.missing.default").map(String::as_str),
            Some("Falta '%s'?")
        );
    }

    #[test]
    fn broken_file_falls_back() {
        let root = temp_dir("sketchpp-config-broken");
        fs::write(root.join("sketchpp.toml"), "[preprocessor\nindent_width = ").unwrap();

        assert!(matches!(
            SketchConfig::try_load(&root),
            Err(ConfigError::Parse { .. })
        ));
        let config = SketchConfig::load(&root);
        assert_eq!(config.config_path, Some(root.join("sketchpp.toml")));
        assert_eq!(config.preprocessor, PreprocessorConfig::default());
        fs::remove_dir_all(root).ok();
    }

    #[test]
    fn hidden_file_is_found() {
        let root = temp_dir("sketchpp-config-hidden");
        fs::write(root.join(".sketchpp.toml"), "[preprocessor]\ntesting = true\n").unwrap();
        let config = SketchConfig::load(&root);
        assert!(config.preprocessor.testing);
        fs::remove_dir_all(root).ok();
    }
}
