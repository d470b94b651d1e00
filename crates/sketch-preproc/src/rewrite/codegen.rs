//! Header and footer generation.

use crate::config::{ExportConfig, PreprocessorConfig};
use crate::imports::ImportGroups;

use super::analysis::{SizeInfo, SketchMode};

/// Indentation strings for the three levels the scaffolding uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indent {
    /// One level.
    pub one: String,
    /// Two levels.
    pub two: String,
    /// Three levels.
    pub three: String,
}

impl Indent {
    /// Indentation strings for `width` spaces per level.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            one: " ".repeat(width),
            two: " ".repeat(width * 2),
            three: " ".repeat(width * 3),
        }
    }
}

/// Line-oriented text buffer.
#[derive(Debug, Default)]
pub struct CodeWriter {
    text: String,
    lines: usize,
}

impl CodeWriter {
    /// Creates an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends text to the current line.
    pub fn add_code(&mut self, code: &str) {
        self.text.push_str(code);
    }

    /// Appends text and ends the current line.
    pub fn add_code_line(&mut self, code: &str) {
        self.text.push_str(code);
        self.text.push('\n');
        self.lines += 1;
    }

    /// Appends a blank line.
    pub fn add_empty_line(&mut self) {
        self.add_code_line("");
    }

    /// Number of completed lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines
    }

    /// Returns the written code.
    #[must_use]
    pub fn finish(self) -> String {
        self.text
    }
}

/// Everything the generated scaffolding depends on.
#[derive(Debug, Clone, Copy)]
pub struct Scaffold<'a> {
    /// Name of the generated class.
    pub class_name: &'a str,
    /// Wrapping mode of the sketch.
    pub mode: SketchMode,
    /// Code generation settings.
    pub config: &'a PreprocessorConfig,
    /// Arguments for the generated `main`.
    pub export: &'a ExportConfig,
    /// Imports to emit.
    pub imports: &'a ImportGroups,
    /// The `size()` call moved into `settings()`.
    pub size: Option<&'a SizeInfo>,
    /// The sketch declares its own `main`.
    pub found_main: bool,
}

impl Scaffold<'_> {
    fn wraps_class(&self) -> bool {
        matches!(self.mode, SketchMode::Static | SketchMode::Active)
    }

    /// Writes the package line, the provenance comment, the imports and the
    /// class opening.
    pub fn write_header(&self, out: &mut CodeWriter) {
        let indent = Indent::new(self.config.indent_width);

        if let Some(package) = &self.config.package {
            out.add_code_line(&format!("package {package};"));
            out.add_empty_line();
        }

        if !self.config.testing {
            out.add_code_line(&format!(
                "/* autogenerated by sketch preprocessor v{} on {} */",
                env!("CARGO_PKG_VERSION"),
                today()
            ));
        }

        for group in self.imports.groups() {
            for import in group {
                out.add_code_line(&import.source_line());
            }
            if !group.is_empty() {
                out.add_empty_line();
            }
        }

        if self.wraps_class() {
            out.add_code_line(&format!(
                "public class {} extends {} {{",
                self.class_name, self.config.runtime_class
            ));
            out.add_empty_line();
        }
        if self.mode == SketchMode::Static {
            out.add_code_line(&format!("{}public void setup() {{", indent.one));
        }
    }

    /// Writes the closing of `setup()`, the generated `settings()` and
    /// `main`, and the class closing.
    pub fn write_footer(&self, out: &mut CodeWriter) {
        let indent = Indent::new(self.config.indent_width);

        out.add_empty_line();

        if self.mode == SketchMode::Static {
            out.add_code_line(&format!("{}noLoop();", indent.two));
            out.add_code_line(&format!("{}}}", indent.one));
        }
        if !self.wraps_class() {
            return;
        }

        if let Some(size) = self.size {
            out.add_empty_line();
            out.add_code_line(&format!(
                "{}public void settings() {{ {} }}",
                indent.one,
                size.settings_call()
            ));
        }

        if !self.found_main {
            self.write_main(out, &indent);
        }

        out.add_code_line("}");
    }

    fn write_main(&self, out: &mut CodeWriter, indent: &Indent) {
        let runtime = &self.config.runtime_class;

        out.add_empty_line();
        out.add_code_line(&format!(
            "{}static public void main(String[] passedArgs) {{",
            indent.one
        ));
        out.add_code(&format!("{}String[] appletArgs = new String[] {{ ", indent.two));
        if self.export.fullscreen {
            out.add_code("\"--full-screen\", ");
            out.add_code(&format!("\"--bgcolor={}\", ", self.export.background_color));
            if self.export.hide_stop {
                out.add_code("\"--hide-stop\", ");
            } else {
                out.add_code(&format!("\"--stop-color={}\", ", self.export.stop_color));
            }
        }
        out.add_code(&format!("\"{}\"", self.class_name));
        out.add_code_line(" };");
        out.add_code_line(&format!("{}if (passedArgs != null) {{", indent.two));
        out.add_code_line(&format!(
            "{}{runtime}.main(concat(appletArgs, passedArgs));",
            indent.three
        ));
        out.add_code_line(&format!("{}}} else {{", indent.two));
        out.add_code_line(&format!("{}{runtime}.main(appletArgs);", indent.three));
        out.add_code_line(&format!("{}}}", indent.two));
        out.add_code_line(&format!("{}}}", indent.one));
    }
}

fn today() -> String {
    let date = time::OffsetDateTime::now_utc().date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
