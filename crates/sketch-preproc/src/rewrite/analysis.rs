//! Token-level analysis of the merged sketch body.
//!
//! The analysis walks the significant tokens once, tracking brace scopes, and
//! records everything the rewrite needs: hoistable imports, method
//! declarations without a visibility modifier, literal and type rewrites,
//! and `size()`/`fullScreen()` calls. Nothing here modifies text.

use serde::Serialize;
use smol_str::SmolStr;
use sketch_syntax::{lex, Token, TokenKind};
use text_size::{TextRange, TextSize};

use super::{Edit, Rewriter};
use crate::error::PreprocessError;
use crate::imports::ImportStatement;

/// Text that replaces a hoisted `size()` or `fullScreen()` call.
pub const SIZE_COMMENT: &str = "/* size commented out by preprocessor */";

/// Renderers accepted as a literal `size()`/`fullScreen()` argument.
pub const RENDERERS: &[&str] = &["P2D", "P3D", "OPENGL", "JAVA2D", "FX2D"];

/// Shape of the sketch, which decides the generated scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SketchMode {
    /// Bare statements only; wrapped into `setup()`.
    Static,
    /// Top-level method declarations; wrapped into a class.
    Active,
    /// The sketch declares its own runtime subclass; no wrapping.
    Java,
}

/// Arguments of the `size()` or `fullScreen()` call moved into `settings()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeInfo {
    /// Width argument, `None` for `fullScreen()`.
    pub width: Option<SmolStr>,
    /// Height argument, `None` for `fullScreen()`.
    pub height: Option<SmolStr>,
    /// Renderer argument, if given.
    pub renderer: Option<SmolStr>,
    /// `true` for `fullScreen()`.
    pub fullscreen: bool,
}

impl SizeInfo {
    /// The call re-emitted inside the generated `settings()` method.
    #[must_use]
    pub fn settings_call(&self) -> String {
        if self.fullscreen {
            return format!("fullScreen({});", self.renderer.as_deref().unwrap_or(""));
        }
        let mut args: Vec<&str> = Vec::with_capacity(3);
        args.extend(self.width.as_deref());
        args.extend(self.height.as_deref());
        args.extend(self.renderer.as_deref());
        format!("size({});", args.join(","))
    }
}

/// Where a `size()` call was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeContext {
    /// Directly at sketch level.
    Global,
    /// Directly inside a sketch-level `setup()` method.
    Setup,
}

/// A `size()` or `fullScreen()` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeCall {
    /// Range of the call, without its semicolon.
    pub range: TextRange,
    /// Where the call sits.
    pub context: SizeContext,
    /// Parsed arguments; `None` when they are not literal.
    pub info: Option<SizeInfo>,
}

/// A sketch-level import to hoist into the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundImport {
    /// The parsed declaration.
    pub statement: ImportStatement,
    /// Range from `import` through `;`.
    pub range: TextRange,
}

/// Everything the rewrite needs to know about a merged sketch body.
#[derive(Debug, Clone, Default)]
pub struct SketchAnalysis {
    /// Sketch-level imports in source order.
    pub imports: Vec<FoundImport>,
    /// Offsets of `import` keywords nested inside a class or method.
    pub nested_imports: Vec<TextSize>,
    /// Offsets where `public ` must be inserted.
    pub public_insertions: Vec<TextSize>,
    /// Color, literal and conversion-call rewrites.
    pub token_edits: Vec<Edit>,
    /// Candidate `size()`/`fullScreen()` calls.
    pub size_calls: Vec<SizeCall>,
    /// A method is declared at sketch level.
    pub has_sketch_methods: bool,
    /// A sketch-level class extends the runtime class.
    pub has_runtime_subclass: bool,
    /// A static `main` is declared where the generated one would go.
    pub found_main: bool,
}

impl SketchAnalysis {
    /// Decides the sketch mode.
    #[must_use]
    pub fn mode(&self) -> SketchMode {
        if self.has_runtime_subclass {
            SketchMode::Java
        } else if self.has_sketch_methods {
            SketchMode::Active
        } else {
            SketchMode::Static
        }
    }

    /// Queues every rewrite on `rewriter` and returns the size information to
    /// emit in `settings()`, if any call was moved.
    pub fn apply(
        &self,
        mode: SketchMode,
        rewriter: &mut Rewriter<'_>,
        substitute_unicode: bool,
    ) -> Result<Option<SizeInfo>, PreprocessError> {
        for import in &self.imports {
            rewriter.delete(import.range);
        }
        for offset in &self.public_insertions {
            rewriter.insert(*offset, "public ")?;
        }
        for edit in &self.token_edits {
            rewriter.replace(edit.range, edit.text.clone())?;
        }

        let wanted = match mode {
            SketchMode::Static => Some(SizeContext::Global),
            SketchMode::Active => Some(SizeContext::Setup),
            SketchMode::Java => None,
        };
        let mut size = None;
        for call in &self.size_calls {
            if Some(call.context) != wanted {
                continue;
            }
            let Some(info) = &call.info else {
                continue;
            };
            rewriter.replace(call.range, SIZE_COMMENT)?;
            size = Some(info.clone());
        }

        if substitute_unicode {
            for edit in unicode_escapes(rewriter.source()) {
                rewriter.replace(edit.range, edit.text)?;
            }
        }
        Ok(size)
    }
}

/// Analyzes a merged sketch body.
#[must_use]
pub fn analyze(source: &str, runtime_class: &str) -> SketchAnalysis {
    let toks: Vec<Token> = lex(source)
        .into_iter()
        .filter(|token| !token.kind.is_trivia())
        .collect();
    let parens = match_parens(&toks);
    let mut scanner = Scanner {
        source,
        toks,
        parens,
        runtime_class,
        out: SketchAnalysis::default(),
    };
    scanner.run();
    scanner.out
}

/// Escapes for every non-ASCII character of `source`.
///
/// A non-breaking space becomes a plain space; anything else becomes one
/// `\uXXXX` escape per UTF-16 unit.
#[must_use]
pub fn unicode_escapes(source: &str) -> Vec<Edit> {
    let mut edits = Vec::new();
    for (idx, ch) in source.char_indices() {
        if ch.is_ascii() {
            continue;
        }
        let text = if ch == '\u{a0}' {
            " ".to_string()
        } else {
            let mut units = [0u16; 2];
            ch.encode_utf16(&mut units)
                .iter()
                .map(|unit| format!("\\u{unit:04x}"))
                .collect()
        };
        let start = TextSize::try_from(idx).unwrap_or_default();
        edits.push(Edit {
            range: TextRange::at(start, TextSize::of(ch)),
            text,
        });
    }
    edits
}

fn match_parens(toks: &[Token]) -> Vec<Option<usize>> {
    let mut matches = vec![None; toks.len()];
    let mut stack = Vec::new();
    for (idx, token) in toks.iter().enumerate() {
        match token.kind {
            TokenKind::LParen => stack.push(idx),
            TokenKind::RParen => {
                if let Some(open) = stack.pop() {
                    matches[open] = Some(idx);
                    matches[idx] = Some(open);
                }
            }
            _ => {}
        }
    }
    matches
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Scope {
    Sketch,
    Class {
        interface: bool,
        runtime_subclass: bool,
    },
    Method {
        name: SmolStr,
    },
    Block,
}

impl Scope {
    fn holds_members(&self) -> bool {
        matches!(self, Scope::Sketch | Scope::Class { .. })
    }
}

#[derive(Debug)]
struct Frame {
    scope: Scope,
    parens: usize,
}

struct Member {
    name: SmolStr,
    decl_start: usize,
    has_visibility: bool,
    is_static: bool,
    body: Option<usize>,
}

struct Scanner<'a> {
    source: &'a str,
    toks: Vec<Token>,
    parens: Vec<Option<usize>>,
    runtime_class: &'a str,
    out: SketchAnalysis,
}

impl Scanner<'_> {
    fn kind(&self, idx: usize) -> Option<TokenKind> {
        self.toks.get(idx).map(|token| token.kind)
    }

    fn is(&self, idx: usize, kind: TokenKind) -> bool {
        self.kind(idx) == Some(kind)
    }

    fn text(&self, idx: usize) -> &str {
        self.toks
            .get(idx)
            .map_or("", |token| token.text(self.source))
    }

    fn run(&mut self) {
        let mut frames = vec![Frame {
            scope: Scope::Sketch,
            parens: 0,
        }];
        let mut pending: Option<(usize, Scope)> = None;
        let mut stmt_start = true;

        for idx in 0..self.toks.len() {
            let at_stmt = std::mem::take(&mut stmt_start);
            let kind = self.toks[idx].kind;
            let depth = frames.len();
            let (scope, parens) = frames
                .last()
                .map_or((Scope::Sketch, 0), |frame| (frame.scope.clone(), frame.parens));

            if at_stmt && parens == 0 {
                if let Some(next) = self.statement(idx, &scope, depth) {
                    pending = Some(next);
                }
            }

            match kind {
                TokenKind::LBrace => {
                    let scope = match pending.take() {
                        Some((brace, scope)) if brace == idx => scope,
                        other => {
                            pending = other;
                            if self.is_anonymous_body(idx) {
                                Scope::Class {
                                    interface: false,
                                    runtime_subclass: false,
                                }
                            } else {
                                Scope::Block
                            }
                        }
                    };
                    frames.push(Frame { scope, parens: 0 });
                    stmt_start = true;
                }
                TokenKind::RBrace => {
                    if frames.len() > 1 {
                        frames.pop();
                    }
                    stmt_start = frames.last().is_some_and(|frame| frame.parens == 0);
                }
                TokenKind::LParen => {
                    if let Some(frame) = frames.last_mut() {
                        frame.parens += 1;
                    }
                }
                TokenKind::RParen => {
                    if let Some(frame) = frames.last_mut() {
                        frame.parens = frame.parens.saturating_sub(1);
                    }
                }
                TokenKind::Semicolon => stmt_start = parens == 0,
                _ => {}
            }

            self.token_rewrite(idx);
        }
    }

    /// Inspects a statement start. Returns the scope the statement opens
    /// with the index of its brace, if it is a declaration with a body.
    fn statement(&mut self, idx: usize, scope: &Scope, depth: usize) -> Option<(usize, Scope)> {
        let top = depth == 1;
        match self.kind(idx)? {
            TokenKind::KwImport => {
                self.import(idx, top);
                return None;
            }
            TokenKind::Ident => {
                let name = self.text(idx);
                if (name == "size" || name == "fullScreen") && self.is(idx + 1, TokenKind::LParen) {
                    let context = match scope {
                        Scope::Sketch => Some(SizeContext::Global),
                        Scope::Method { name } if name == "setup" && depth == 2 => {
                            Some(SizeContext::Setup)
                        }
                        _ => None,
                    };
                    if let Some(context) = context {
                        self.size_call(idx, context);
                    }
                }
            }
            _ => {}
        }

        if let Some((brace, class_scope)) = self.type_decl(idx) {
            if top
                && matches!(
                    class_scope,
                    Scope::Class {
                        runtime_subclass: true,
                        ..
                    }
                )
            {
                self.out.has_runtime_subclass = true;
            }
            return Some((brace, class_scope));
        }

        if !scope.holds_members() {
            return None;
        }
        let member = self.member(idx)?;
        if top {
            self.out.has_sketch_methods = true;
        }
        let adds_public = matches!(
            scope,
            Scope::Sketch
                | Scope::Class {
                    interface: false,
                    ..
                }
        );
        if adds_public && !member.has_visibility {
            let offset = self.toks[member.decl_start].range.start();
            self.out.public_insertions.push(offset);
        }
        let runtime_class_body = matches!(
            scope,
            Scope::Sketch
                | Scope::Class {
                    runtime_subclass: true,
                    ..
                }
        );
        if member.name == "main" && member.is_static && runtime_class_body {
            self.out.found_main = true;
        }
        member.body.map(|brace| {
            (
                brace,
                Scope::Method {
                    name: member.name.clone(),
                },
            )
        })
    }

    fn import(&mut self, idx: usize, top: bool) {
        let start = self.toks[idx].range.start();
        if !top {
            self.out.nested_imports.push(start);
            return;
        }
        let mut end = idx + 1;
        while let Some(kind) = self.kind(end) {
            match kind {
                TokenKind::Semicolon => break,
                TokenKind::LBrace | TokenKind::RBrace => return,
                _ => end += 1,
            }
        }
        if !self.is(end, TokenKind::Semicolon) {
            return;
        }
        let range = TextRange::new(start, self.toks[end].range.end());
        if let Some(statement) = ImportStatement::parse(&self.source[range]) {
            self.out.imports.push(FoundImport { statement, range });
        }
    }

    fn size_call(&mut self, idx: usize, context: SizeContext) {
        let Some(close) = self.parens.get(idx + 1).copied().flatten() else {
            return;
        };
        if !self.is(close + 1, TokenKind::Semicolon) {
            return;
        }
        let fullscreen = self.text(idx) == "fullScreen";
        let info = self
            .literal_args(idx + 2, close)
            .and_then(|args| size_info(&args, fullscreen));
        self.out.size_calls.push(SizeCall {
            range: TextRange::new(self.toks[idx].range.start(), self.toks[close].range.end()),
            context,
            info,
        });
    }

    /// Returns the arguments in `start..close` if each is a single token.
    fn literal_args(&self, start: usize, close: usize) -> Option<Vec<(TokenKind, SmolStr)>> {
        let mut args = Vec::new();
        let mut idx = start;
        while idx < close {
            let kind = self.kind(idx)?;
            if kind == TokenKind::Comma {
                return None;
            }
            args.push((kind, SmolStr::new(self.text(idx))));
            idx += 1;
            if idx < close {
                if !self.is(idx, TokenKind::Comma) {
                    return None;
                }
                idx += 1;
            }
        }
        Some(args)
    }

    fn member(&self, start: usize) -> Option<Member> {
        let mut idx = start;
        let mut after_annotation = None;
        let mut has_visibility = false;
        let mut is_static = false;
        loop {
            let kind = self.kind(idx)?;
            match kind {
                TokenKind::At => {
                    idx = self.skip_annotation(idx)?;
                    after_annotation = Some(idx);
                }
                kind if kind.is_modifier() => {
                    has_visibility |= kind.is_visibility();
                    is_static |= kind == TokenKind::KwStatic;
                    idx += 1;
                }
                TokenKind::KwOther
                    if matches!(self.text(idx), "native" | "transient" | "volatile" | "default") =>
                {
                    idx += 1;
                }
                _ => break,
            }
        }
        let decl_start = after_annotation.unwrap_or(start);

        if self.is(idx, TokenKind::Lt) {
            idx = self.skip_angle(idx)?;
        }
        match self.kind(idx)? {
            kind if kind.is_primitive_type() || kind == TokenKind::KwVoid => idx += 1,
            TokenKind::Ident => {
                idx += 1;
                loop {
                    if self.is(idx, TokenKind::Dot) && self.is(idx + 1, TokenKind::Ident) {
                        idx += 2;
                    } else if self.is(idx, TokenKind::Lt) {
                        idx = self.skip_angle(idx)?;
                    } else {
                        break;
                    }
                }
            }
            _ => return None,
        }
        idx = self.skip_dims(idx);
        if !(self.is(idx, TokenKind::Ident) && self.is(idx + 1, TokenKind::LParen)) {
            return None;
        }
        let name = SmolStr::new(self.text(idx));
        let close = self.parens.get(idx + 1).copied().flatten()?;

        let mut after = self.skip_dims(close + 1);
        if self.is(after, TokenKind::KwThrows) {
            while let Some(kind) = self.kind(after) {
                if matches!(kind, TokenKind::LBrace | TokenKind::Semicolon) {
                    break;
                }
                after += 1;
            }
        }
        Some(Member {
            name,
            decl_start,
            has_visibility,
            is_static,
            body: self.is(after, TokenKind::LBrace).then_some(after),
        })
    }

    fn type_decl(&self, start: usize) -> Option<(usize, Scope)> {
        let mut idx = start;
        loop {
            let kind = self.kind(idx)?;
            if kind == TokenKind::At {
                if self.is(idx + 1, TokenKind::KwInterface) {
                    idx += 1;
                    break;
                }
                idx = self.skip_annotation(idx)?;
            } else if kind.is_modifier() {
                idx += 1;
            } else {
                break;
            }
        }
        let interface = match self.kind(idx)? {
            TokenKind::KwClass | TokenKind::KwEnum => false,
            TokenKind::KwInterface => true,
            _ => return None,
        };
        if !self.is(idx + 1, TokenKind::Ident) {
            return None;
        }
        idx += 2;

        let mut runtime_subclass = false;
        while let Some(kind) = self.kind(idx) {
            match kind {
                TokenKind::LBrace => {
                    return Some((
                        idx,
                        Scope::Class {
                            interface,
                            runtime_subclass,
                        },
                    ))
                }
                TokenKind::Semicolon | TokenKind::RBrace => return None,
                TokenKind::KwExtends => {
                    let mut name = idx + 1;
                    let mut last = None;
                    while self.is(name, TokenKind::Ident) {
                        last = Some(name);
                        if self.is(name + 1, TokenKind::Dot) {
                            name += 2;
                        } else {
                            break;
                        }
                    }
                    if let Some(last) = last {
                        runtime_subclass |= self.text(last) == self.runtime_class;
                    }
                    idx += 1;
                }
                _ => idx += 1,
            }
        }
        None
    }

    fn is_anonymous_body(&self, brace: usize) -> bool {
        if brace == 0 || !self.is(brace - 1, TokenKind::RParen) {
            return false;
        }
        let Some(mut idx) = self.parens[brace - 1] else {
            return false;
        };
        while idx > 0 {
            idx -= 1;
            match self.toks[idx].kind {
                TokenKind::KwNew => return true,
                TokenKind::Ident
                | TokenKind::Dot
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Comma
                | TokenKind::LBracket
                | TokenKind::RBracket => {}
                kind if kind.is_primitive_type() => {}
                _ => return false,
            }
        }
        false
    }

    fn skip_annotation(&self, at: usize) -> Option<usize> {
        let mut idx = at + 1;
        if !self.is(idx, TokenKind::Ident) {
            return None;
        }
        idx += 1;
        while self.is(idx, TokenKind::Dot) && self.is(idx + 1, TokenKind::Ident) {
            idx += 2;
        }
        if self.is(idx, TokenKind::LParen) {
            idx = self.parens[idx]? + 1;
        }
        Some(idx)
    }

    fn skip_angle(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        let mut idx = open;
        while let Some(kind) = self.kind(idx) {
            match kind {
                TokenKind::Lt => depth += 1,
                TokenKind::Gt => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(idx + 1);
                    }
                }
                TokenKind::Semicolon
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::Assign => return None,
                _ => {}
            }
            idx += 1;
        }
        None
    }

    fn skip_dims(&self, mut idx: usize) -> usize {
        while self.is(idx, TokenKind::LBracket) && self.is(idx + 1, TokenKind::RBracket) {
            idx += 2;
        }
        idx
    }

    fn token_rewrite(&mut self, idx: usize) {
        let token = self.toks[idx];
        let text = token.text(self.source);
        let calls = self.is(idx + 1, TokenKind::LParen);
        let edit = match token.kind {
            TokenKind::KwColor if !calls => Some(Edit {
                range: token.range,
                text: "int".to_string(),
            }),
            TokenKind::KwInt
            | TokenKind::KwFloat
            | TokenKind::KwBoolean
            | TokenKind::KwByte
            | TokenKind::KwChar
                if calls =>
            {
                let mut chars = text.chars();
                let capitalized: String = chars
                    .next()
                    .map(|first| first.to_ascii_uppercase())
                    .into_iter()
                    .chain(chars)
                    .collect();
                Some(Edit {
                    range: token.range,
                    text: format!("{}.parse{capitalized}", self.runtime_class),
                })
            }
            TokenKind::HexColor => {
                let digits = text[1..].to_ascii_uppercase();
                let text = if digits.len() == 6 {
                    format!("0xFF{digits}")
                } else {
                    format!("0x{digits}")
                };
                Some(Edit {
                    range: token.range,
                    text,
                })
            }
            TokenKind::FloatLiteral => {
                let lower = text.to_ascii_lowercase();
                (!lower.ends_with('f') && !lower.ends_with('d')).then(|| Edit {
                    range: TextRange::empty(token.range.end()),
                    text: "f".to_string(),
                })
            }
            _ => None,
        };
        if let Some(edit) = edit {
            self.out.token_edits.push(edit);
        }
    }
}

fn size_info(args: &[(TokenKind, SmolStr)], fullscreen: bool) -> Option<SizeInfo> {
    let renderer_ok = |arg: &(TokenKind, SmolStr)| RENDERERS.contains(&arg.1.as_str());
    if fullscreen {
        return match args {
            [] => Some(SizeInfo {
                width: None,
                height: None,
                renderer: None,
                fullscreen: true,
            }),
            [renderer] if renderer_ok(renderer) => Some(SizeInfo {
                width: None,
                height: None,
                renderer: Some(renderer.1.clone()),
                fullscreen: true,
            }),
            _ => None,
        };
    }

    let dimension_ok = |arg: &(TokenKind, SmolStr), display: &str| {
        arg.1 == display || (arg.0 == TokenKind::IntLiteral && arg.1.parse::<i32>().is_ok())
    };
    match args {
        [width, height] | [width, height, _]
            if dimension_ok(width, "displayWidth") && dimension_ok(height, "displayHeight") =>
        {
            let renderer = match args.get(2) {
                Some(renderer) if renderer_ok(renderer) => Some(renderer.1.clone()),
                Some(_) => return None,
                None => None,
            };
            Some(SizeInfo {
                width: Some(width.1.clone()),
                height: Some(height.1.clone()),
                renderer,
                fullscreen: false,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze_default(source: &str) -> SketchAnalysis {
        analyze(source, "PApplet")
    }

    fn offsets_of(source: &str, needle: &str) -> Vec<TextSize> {
        source
            .match_indices(needle)
            .map(|(idx, _)| TextSize::try_from(idx).unwrap())
            .collect()
    }

    #[test]
    fn static_sketch() {
        let analysis = analyze_default("background(0);\nellipse(50, 50, 10, 10);\n");
        assert_eq!(analysis.mode(), SketchMode::Static);
        assert!(analysis.public_insertions.is_empty());
    }

    #[test]
    fn active_sketch_gets_public_methods() {
        let source = "void setup() {\n}\n\npublic void draw() {\n}\nprivate int helper() { return 1; }\n";
        let analysis = analyze_default(source);
        assert_eq!(analysis.mode(), SketchMode::Active);
        assert_eq!(analysis.public_insertions, offsets_of(source, "void setup"));
    }

    #[test]
    fn public_goes_after_annotations() {
        let source = "@Override\nstatic void keyPressed() {}\n";
        let analysis = analyze_default(source);
        assert_eq!(analysis.public_insertions, offsets_of(source, "static"));
    }

    #[test]
    fn interface_methods_are_left_alone() {
        let source = "interface Shape {\n  float area();\n}\nclass Dot {\n  void show() {}\n}\n";
        let analysis = analyze_default(source);
        assert_eq!(analysis.mode(), SketchMode::Static);
        assert_eq!(analysis.public_insertions, offsets_of(source, "void show"));
    }

    #[test]
    fn anonymous_class_methods_get_public() {
        let source = "void setup() {\n  Runnable r = new Runnable() {\n    void run() {}\n  };\n}\n";
        let analysis = analyze_default(source);
        assert_eq!(analysis.public_insertions.len(), 2);
        assert_eq!(analysis.public_insertions[1], offsets_of(source, "void run")[0]);
    }

    #[test]
    fn runtime_subclass_is_java_mode() {
        let source = "public class Demo extends processing.core.PApplet {\n  public void settings() { size(10, 10); }\n}\n";
        let analysis = analyze_default(source);
        assert_eq!(analysis.mode(), SketchMode::Java);
        assert!(analysis.size_calls.is_empty());
    }

    #[test]
    fn imports_are_split_by_depth() {
        let source = "import java.util.List;\nvoid setup() {\n  import java.io.File;\n}\n";
        let analysis = analyze_default(source);
        assert_eq!(analysis.imports.len(), 1);
        assert_eq!(analysis.imports[0].statement.member, "List");
        assert_eq!(&source[analysis.imports[0].range], "import java.util.List;");
        assert_eq!(analysis.nested_imports, offsets_of(source, "import java.io"));
    }

    #[test]
    fn literal_rewrites() {
        let source = "color c = #ff8000;\nfloat f = 0.5 + 2f + 1e3;\nint i = int(f);\ncolor d = color(1);\n";
        let analysis = analyze_default(source);
        let mut rewriter = Rewriter::new(source);
        for edit in &analysis.token_edits {
            rewriter.replace(edit.range, edit.text.clone()).unwrap();
        }
        let (output, _) = rewriter.finish();
        assert_eq!(
            output,
            "int c = 0xFFFF8000;\nfloat f = 0.5f + 2f + 1e3f;\nint i = PApplet.parseInt(f);\nint d = color(1);\n"
        );
    }

    #[test]
    fn size_in_static_and_active_sketches() {
        let analysis = analyze_default("size(400, 300, P3D);\nbackground(0);\n");
        assert_eq!(analysis.size_calls.len(), 1);
        assert_eq!(analysis.size_calls[0].context, SizeContext::Global);
        let info = analysis.size_calls[0].info.clone().unwrap();
        assert_eq!(info.settings_call(), "size(400,300,P3D);");

        let analysis = analyze_default("void setup() {\n  fullScreen();\n  if (true) { size(1, 1); }\n}\n");
        assert_eq!(analysis.size_calls.len(), 1);
        assert_eq!(analysis.size_calls[0].context, SizeContext::Setup);
        assert_eq!(
            analysis.size_calls[0].info.as_ref().map(SizeInfo::settings_call),
            Some("fullScreen();".to_string())
        );
    }

    #[test]
    fn non_literal_size_is_kept() {
        let analysis = analyze_default("size(w, 100);\nsize(displayWidth, displayHeight, WEBGL);\n");
        assert_eq!(analysis.size_calls.len(), 2);
        assert!(analysis.size_calls.iter().all(|call| call.info.is_none()));
    }

    #[test]
    fn found_main_requires_static() {
        let with_main = analyze_default("static public void main(String[] args) {}\n");
        assert!(with_main.found_main);
        let without = analyze_default("void main() {}\n");
        assert!(!without.found_main);
    }

    #[test]
    fn unicode_escapes_use_utf16_units() {
        let source = "String s = \"caf\u{e9}\u{a0}\u{1F600}\";";
        let edits = unicode_escapes(source);
        let texts: Vec<_> = edits.iter().map(|edit| edit.text.as_str()).collect();
        assert_eq!(texts, vec!["\\u00e9", " ", "\\ud83d\\ude00"]);
    }
}
