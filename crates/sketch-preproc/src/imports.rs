//! Import declarations and the import groups written into the header.

use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

/// Packages the runtime always needs.
pub const CORE_IMPORTS: &[&str] = &[
    "processing.core",
    "processing.data",
    "processing.event",
    "processing.opengl",
];

/// Classes imported for convenience unless configured otherwise.
pub const DEFAULT_IMPORTS: &[&str] = &[
    "java.util.HashMap",
    "java.util.ArrayList",
    "java.io.File",
    "java.io.BufferedReader",
    "java.io.PrintWriter",
    "java.io.InputStream",
    "java.io.OutputStream",
    "java.io.IOException",
];

/// A single `import` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImportStatement {
    /// Everything before the last segment, e.g. `java.util`.
    pub package: SmolStr,
    /// The last segment: a class, a static member, or `*`.
    pub member: SmolStr,
    /// `import static ...`
    pub is_static: bool,
}

impl ImportStatement {
    /// `import <package>.*;`
    pub fn whole_package(package: impl Into<SmolStr>) -> Self {
        Self {
            package: package.into(),
            member: SmolStr::new_static("*"),
            is_static: false,
        }
    }

    /// `import <path>;` for a fully qualified class name.
    pub fn single_class(path: &str) -> Self {
        let (package, member) = split_member(path);
        Self {
            package: package.into(),
            member: member.into(),
            is_static: false,
        }
    }

    /// Parses the body of an import declaration.
    ///
    /// Accepts `import static a.b.*;`, `static a.b.*` or `a.b.C`; whitespace
    /// is ignored. Returns `None` when no name remains.
    pub fn parse(text: &str) -> Option<Self> {
        let mut rest = text.trim();
        if let Some(after) = strip_keyword(rest, "import") {
            rest = after;
        }
        let is_static = match strip_keyword(rest, "static") {
            Some(after) => {
                rest = after;
                true
            }
            None => false,
        };
        let compact: String = rest
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ';')
            .collect();
        if compact.is_empty() {
            return None;
        }
        let (package, member) = split_member(&compact);
        Some(Self {
            package: package.into(),
            member: member.into(),
            is_static,
        })
    }

    /// `true` for `.*` imports.
    #[must_use]
    pub fn is_starred(&self) -> bool {
        self.member == "*"
    }

    /// Package and member joined, e.g. `java.util.HashMap`.
    #[must_use]
    pub fn full_member_name(&self) -> String {
        if self.package.is_empty() {
            self.member.to_string()
        } else {
            format!("{}.{}", self.package, self.member)
        }
    }

    /// The declaration as a full source line, without a line break.
    #[must_use]
    pub fn source_line(&self) -> String {
        self.to_string()
    }

    /// Whether two statements import the same thing.
    #[must_use]
    pub fn is_same_as(&self, other: &Self) -> bool {
        self.is_static == other.is_static && self.full_member_name() == other.full_member_name()
    }
}

impl fmt::Display for ImportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            write!(f, "import static {};", self.full_member_name())
        } else {
            write!(f, "import {};", self.full_member_name())
        }
    }
}

fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let after = text.strip_prefix(keyword)?;
    after
        .starts_with(char::is_whitespace)
        .then(|| after.trim_start())
}

fn split_member(path: &str) -> (&str, &str) {
    match path.rsplit_once('.') {
        Some((package, member)) => (package, member),
        None => ("", path),
    }
}

/// The four import groups of a generated header, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportGroups {
    /// Runtime packages.
    pub core: Vec<ImportStatement>,
    /// Packages supplied by the sketch's code folder.
    pub code_folder: Vec<ImportStatement>,
    /// Imports hoisted from the sketch itself.
    pub found: Vec<ImportStatement>,
    /// Convenience imports.
    pub default: Vec<ImportStatement>,
}

impl ImportGroups {
    /// Builds the groups from the configured lists and the hoisted imports.
    pub fn new(
        code_folder_packages: &[String],
        default_imports: &[String],
        found: Vec<ImportStatement>,
    ) -> Self {
        Self {
            core: CORE_IMPORTS
                .iter()
                .map(|pkg| ImportStatement::whole_package(*pkg))
                .collect(),
            code_folder: code_folder_packages
                .iter()
                .map(|pkg| ImportStatement::whole_package(pkg.as_str()))
                .collect(),
            found,
            default: default_imports
                .iter()
                .map(|path| ImportStatement::single_class(path))
                .collect(),
        }
    }

    /// Groups in header order.
    #[must_use]
    pub fn groups(&self) -> [&[ImportStatement]; 4] {
        [&self.core, &self.code_folder, &self.found, &self.default]
    }

    /// Every import in header order.
    pub fn iter(&self) -> impl Iterator<Item = &ImportStatement> {
        self.groups().into_iter().flatten()
    }
}

/// Default convenience imports as owned strings, for configuration defaults.
#[must_use]
pub fn default_import_list() -> Vec<String> {
    DEFAULT_IMPORTS.iter().map(|s| (*s).to_string()).collect()
}

/// Reports whether the effective import list changed between two passes.
///
/// Order matters: the header is regenerated when imports are reordered.
#[must_use]
pub fn imports_changed(prev: &[ImportStatement], next: &[ImportStatement]) -> bool {
    prev.len() != next.len() || prev.iter().zip(next).any(|(a, b)| !a.is_same_as(b))
}
