//! Data model for extracted documentation — format-agnostic.

use serde::Serialize;
use std::collections::BTreeMap;

/// Complete documentation extracted from a single source file.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    pub file: FileDoc,
    pub elements: Vec<ElementDoc>,
}

/// File-level metadata.
#[derive(Debug, Default, Serialize)]
pub struct FileDoc {
    /// Source file name (stem, without extension)
    pub title: Option<String>,
}

/// Kind of source construct an element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Function,
    Method,
    Object,
    Property,
    Variable,
}

impl ElementKind {
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Function => "function",
            ElementKind::Method => "method",
            ElementKind::Object => "object",
            ElementKind::Property => "property",
            ElementKind::Variable => "variable",
        }
    }
}

/// A documentable source construct plus its extracted record.
#[derive(Debug, Serialize)]
pub struct ElementDoc {
    pub name: String,
    pub kind: ElementKind,
    /// 1-based line of the declaration
    pub line: u32,
    pub doc: DocRecord,
}

/// A raw comment block as it appears in the source,
/// delimiters and `*` margins included.
#[derive(Debug, Clone)]
pub struct RawComment {
    pub body: String,
    /// 1-based line on which the comment opens
    pub start_line: u32,
}

/// One tokenized `@tag` (or the leading untagged description block).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Lowercased tag name; `None` for the leading description block
    pub name: Option<String>,
    pub text: String,
}

/// A documented function/method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: String,
    #[serde(rename = "type")]
    pub type_annotation: Option<String>,
    pub description: String,
}

/// A documented return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnDoc {
    #[serde(rename = "type")]
    pub type_annotation: Option<String>,
    pub description: String,
}

/// A documented member datatype (`@type`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDoc {
    #[serde(rename = "type")]
    pub type_annotation: Option<String>,
    pub description: String,
}

/// Structured documentation for one element.
///
/// Created empty alongside the element, populated in place by tag
/// extraction, read-only afterwards. Stays all-empty when no qualifying
/// comment precedes the element.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DocRecord {
    pub description: String,
    /// `@param` entries in declaration order
    pub params: Vec<ParamDoc>,
    /// `@return` / `@returns` (at most one, last write wins)
    pub returns: Option<ReturnDoc>,
    /// `@type`
    pub type_doc: Option<TypeDoc>,
    /// Unrecognized tags, uninterpreted; a name may repeat
    pub extra: BTreeMap<String, Vec<String>>,
}

impl DocRecord {
    /// True when no tag contributed anything to this record.
    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
            && self.params.is_empty()
            && self.returns.is_none()
            && self.type_doc.is_none()
            && self.extra.is_empty()
    }
}
