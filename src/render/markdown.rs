//! GitHub-flavored markdown renderer.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut output = String::new();

        if let Some(ref title) = doc.file.title {
            output.push_str(&format!("# {}\n\n", title));
        }

        // Table of contents
        if !doc.elements.is_empty() {
            output.push_str("## Index\n\n");
            for elem in &doc.elements {
                output.push_str(&toc::render_toc_item(&elem.name));
                output.push('\n');
            }
            output.push('\n');
        }

        for elem in &doc.elements {
            output.push_str(&render_element(elem));
            output.push('\n');
        }

        output
    }

    fn render_index(&self, pages: &[String]) -> Option<String> {
        let mut output = String::from("# Documentation\n\n");
        for page in pages {
            output.push_str(&format!("* [{}](./{}.{})\n", page, page, self.file_extension()));
        }
        Some(output)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// Render a single element's documentation block.
fn render_element(elem: &ElementDoc) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("### {}\n", elem.name));
    lines.push(format!("> `{}`", elem.kind.label()));
    lines.push(String::new());

    if !elem.doc.description.is_empty() {
        lines.push(elem.doc.description.clone());
        lines.push(String::new());
    }

    if let Some(ref ty) = elem.doc.type_doc {
        lines.push("#### Type\n".to_string());
        lines.push(format!("* {}", render_typed(ty.type_annotation.as_deref(), &ty.description)));
        lines.push(String::new());
    }

    if !elem.doc.params.is_empty() {
        lines.push("#### Parameters\n".to_string());
        for param in &elem.doc.params {
            lines.push(format!(
                "* **{}**{}",
                param.name,
                render_typed_suffix(param.type_annotation.as_deref(), &param.description)
            ));
        }
        lines.push(String::new());
    }

    if let Some(ref ret) = elem.doc.returns {
        lines.push("#### Returns\n".to_string());
        lines.push(format!("* {}", render_typed(ret.type_annotation.as_deref(), &ret.description)));
        lines.push(String::new());
    }

    // Unrecognized tags, one section per tag name
    for (name, texts) in &elem.doc.extra {
        lines.push(format!("#### @{}\n", name));
        for text in texts {
            lines.push(format!("* {}", text));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// `(Type): desc` suffix after a bold parameter name.
fn render_typed_suffix(annotation: Option<&str>, description: &str) -> String {
    let mut out = String::new();
    if let Some(ty) = annotation {
        out.push_str(&format!(" ({})", ty));
    }
    if !description.is_empty() {
        out.push_str(&format!(": {}", description));
    }
    out
}

/// `(Type) desc` for returns/type entries with no leading name.
fn render_typed(annotation: Option<&str>, description: &str) -> String {
    match (annotation, description.is_empty()) {
        (Some(ty), true) => format!("({})", ty),
        (Some(ty), false) => format!("({}) {}", ty, description),
        (None, _) => description.to_string(),
    }
}
