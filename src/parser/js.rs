//! Lightweight JavaScript element discovery — line-by-line state machine.
//!
//! Finds documentable constructs (functions, variables, objects, methods,
//! properties) with regex rules and hands each one, together with the
//! nearest preceding block comment, to the comment associator. This is a
//! heuristic scanner, not a JavaScript parser: it only needs declaration
//! names and line numbers, and the associator's adjacency gate rejects
//! any comment that does not actually document the element below it.

use crate::model::*;
use crate::parser::comment;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_FUNC_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*function\s+([A-Za-z_$][\w$]*)\s*\(").unwrap());

static RE_VAR_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:var|let|const)\s+([A-Za-z_$][\w$]*)(?:\s*=\s*(.*))?").unwrap()
});

static RE_THIS_ASSIGN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*this\.([A-Za-z_$][\w$]*)\s*=\s*(.*)$").unwrap());

static RE_DOTTED_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)+)\s*=\s*(.*)$").unwrap()
});

static RE_MEMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z_$][\w$]*)\s*:\s*(.*)$").unwrap());

// -- Parser state -------------------------------------------------------------

/// What kind of `{` block we are inside. Object-literal members are only
/// recognized when the innermost block is an object literal.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Block {
    Object,
    Code,
}

#[derive(Default)]
struct ParserState {
    elements: Vec<ElementDoc>,

    // Most recently completed block comment; the associator decides
    // whether it belongs to the next element.
    last_comment: Option<RawComment>,

    // In-progress block comment accumulation
    in_comment: bool,
    comment_buf: String,
    comment_start: u32,

    blocks: Vec<Block>,
}

// -- Public API ---------------------------------------------------------------

/// Scan a JavaScript source file into a Document.
pub fn parse(input: &str, path: &Path) -> Document {
    let mut state = ParserState::default();

    for (idx, line) in input.lines().enumerate() {
        process_line(&mut state, line, idx as u32 + 1);
    }

    Document {
        file: FileDoc {
            title: path.file_stem().map(|s| s.to_string_lossy().to_string()),
        },
        elements: state.elements,
    }
}

// -- Line processing ----------------------------------------------------------

fn process_line(s: &mut ParserState, line: &str, lineno: u32) {
    // 1. Block comment continuation
    if s.in_comment {
        push_comment_line(s, line);
        if line.contains("*/") {
            finish_comment(s);
        }
        return;
    }

    let trimmed = line.trim_start();

    // 2. Block comment start. Anything after the closer on the same line
    // is ignored; mixed comment/code lines are not worth chasing here.
    if trimmed.starts_with("/*") {
        s.comment_start = lineno;
        push_comment_line(s, line);
        if trimmed[2..].contains("*/") {
            finish_comment(s);
        } else {
            s.in_comment = true;
        }
        return;
    }

    // 3. Line comments are never documentation candidates
    if trimmed.starts_with("//") {
        return;
    }

    // 4. Declaration rules, most specific first
    let decl = match_declaration(s, line);
    let block_kind = decl_block_kind(&decl);
    if let Some((name, kind)) = decl {
        let mut doc = DocRecord::default();
        comment::associate(&mut doc, lineno, s.last_comment.as_ref());
        s.elements.push(ElementDoc {
            name,
            kind,
            line: lineno,
            doc,
        });
    }

    // 5. Track braces so object-literal members can be told apart from
    // code blocks on later lines
    track_braces(s, line, block_kind);
}

/// Try each declaration rule against the line.
fn match_declaration(s: &ParserState, line: &str) -> Option<(String, ElementKind)> {
    if let Some(caps) = RE_FUNC_DECL.captures(line) {
        return Some((caps[1].to_string(), ElementKind::Function));
    }

    if let Some(caps) = RE_VAR_DECL.captures(line) {
        let init = caps.get(2).map(|m| m.as_str().trim_start()).unwrap_or("");
        let kind = if init.starts_with("function") {
            ElementKind::Function
        } else if init.starts_with('{') {
            ElementKind::Object
        } else {
            ElementKind::Variable
        };
        return Some((caps[1].to_string(), kind));
    }

    if let Some(caps) = RE_THIS_ASSIGN.captures(line) {
        let kind = if caps[2].trim_start().starts_with("function") {
            ElementKind::Method
        } else {
            ElementKind::Property
        };
        return Some((caps[1].to_string(), kind));
    }

    if let Some(caps) = RE_DOTTED_ASSIGN.captures(line) {
        let init = caps[2].trim_start().to_string();
        let kind = if init.starts_with("function") {
            ElementKind::Function
        } else if init.starts_with('{') {
            ElementKind::Object
        } else {
            ElementKind::Property
        };
        return Some((caps[1].to_string(), kind));
    }

    // Object-literal member, only valid directly inside an object literal
    if s.blocks.last() == Some(&Block::Object) {
        if let Some(caps) = RE_MEMBER.captures(line) {
            let kind = if caps[2].trim_start().starts_with("function") {
                ElementKind::Method
            } else {
                ElementKind::Property
            };
            return Some((caps[1].to_string(), kind));
        }
    }

    None
}

/// Block kind an opening brace on this line introduces.
fn decl_block_kind(decl: &Option<(String, ElementKind)>) -> Block {
    match decl {
        Some((_, ElementKind::Object)) => Block::Object,
        _ => Block::Code,
    }
}

/// Count braces outside string literals and line comments.
fn track_braces(s: &mut ParserState, line: &str, open_kind: Block) {
    let mut quote: Option<char> = None;
    let mut prev = '\0';
    let mut first_open = true;

    for c in line.chars() {
        match quote {
            Some(q) => {
                if c == q && prev != '\\' {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' | '`' => quote = Some(c),
                '/' if prev == '/' => return,
                '{' => {
                    // The first brace belongs to the declaration on this
                    // line; nested ones are plain code blocks.
                    s.blocks.push(if first_open { open_kind } else { Block::Code });
                    first_open = false;
                }
                '}' => {
                    s.blocks.pop();
                }
                _ => {}
            },
        }
        prev = c;
    }
}

fn push_comment_line(s: &mut ParserState, line: &str) {
    if !s.comment_buf.is_empty() {
        s.comment_buf.push('\n');
    }
    s.comment_buf.push_str(line);
}

fn finish_comment(s: &mut ParserState) {
    s.last_comment = Some(RawComment {
        body: std::mem::take(&mut s.comment_buf),
        start_line: s.comment_start,
    });
    s.in_comment = false;
}
