//! HTML renderer — standalone HTML page with semantic markup.

use crate::model::*;
use crate::render::Renderer;
use crate::toc;

pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document) -> String {
        let mut out = String::new();

        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        if let Some(ref title) = doc.file.title {
            out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }
        out.push_str("<style>\n");
        out.push_str("body { font-family: system-ui, sans-serif; max-width: 48em; margin: 2em auto; padding: 0 1em; }\n");
        out.push_str("code { background: #f4f4f4; padding: 0.15em 0.3em; border-radius: 3px; }\n");
        out.push_str("dt { font-weight: bold; margin-top: 0.5em; }\n");
        out.push_str("dd { margin-left: 1.5em; }\n");
        out.push_str(".kind { display: inline-block; font-size: 0.75em; padding: 0.1em 0.4em; border-radius: 3px; margin-left: 0.5em; background: #e8e8e8; }\n");
        out.push_str("</style>\n");
        out.push_str("</head>\n<body>\n");

        if let Some(ref title) = doc.file.title {
            out.push_str(&format!("<h1>{}</h1>\n", html_escape(title)));
        }

        // Index
        if !doc.elements.is_empty() {
            out.push_str("<h2>Index</h2>\n<ul>\n");
            for elem in &doc.elements {
                out.push_str(&format!(
                    "  <li><a href=\"#{}\">{}</a></li>\n",
                    html_escape(&toc::github_slug(&elem.name)),
                    html_escape(&elem.name)
                ));
            }
            out.push_str("</ul>\n");
        }

        for elem in &doc.elements {
            out.push_str(&render_element_html(elem));
        }

        out.push_str("</body>\n</html>\n");
        out
    }

    fn render_index(&self, pages: &[String]) -> Option<String> {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        out.push_str("<title>Documentation</title>\n</head>\n<body>\n");
        out.push_str("<h1>Documentation</h1>\n<ul>\n");
        for page in pages {
            out.push_str(&format!(
                "  <li><a href=\"./{}.html\">{}</a></li>\n",
                html_escape(page),
                html_escape(page)
            ));
        }
        out.push_str("</ul>\n</body>\n</html>\n");
        Some(out)
    }

    fn file_extension(&self) -> &str {
        "html"
    }
}

fn render_element_html(elem: &ElementDoc) -> String {
    let mut out = String::new();
    let anchor = toc::github_slug(&elem.name);

    out.push_str(&format!(
        "<h3 id=\"{}\">{} <span class=\"kind\">{}</span></h3>\n",
        html_escape(&anchor),
        html_escape(&elem.name),
        elem.kind.label()
    ));

    if !elem.doc.description.is_empty() {
        out.push_str(&format!("<p>{}</p>\n", html_escape(&elem.doc.description)));
    }

    if let Some(ref ty) = elem.doc.type_doc {
        out.push_str("<h4>Type</h4>\n");
        out.push_str(&format!("<p>{}</p>\n", typed_html(ty.type_annotation.as_deref(), &ty.description)));
    }

    if !elem.doc.params.is_empty() {
        out.push_str("<h4>Parameters</h4>\n<dl>\n");
        for param in &elem.doc.params {
            out.push_str(&format!("  <dt><code>{}</code>", html_escape(&param.name)));
            if let Some(ref ty) = param.type_annotation {
                out.push_str(&format!(" ({})", html_escape(ty)));
            }
            out.push_str("</dt>\n");
            if !param.description.is_empty() {
                out.push_str(&format!("  <dd>{}</dd>\n", html_escape(&param.description)));
            }
        }
        out.push_str("</dl>\n");
    }

    if let Some(ref ret) = elem.doc.returns {
        out.push_str("<h4>Returns</h4>\n");
        out.push_str(&format!("<p>{}</p>\n", typed_html(ret.type_annotation.as_deref(), &ret.description)));
    }

    for (name, texts) in &elem.doc.extra {
        out.push_str(&format!("<h4>@{}</h4>\n<ul>\n", html_escape(name)));
        for text in texts {
            out.push_str(&format!("  <li>{}</li>\n", html_escape(text)));
        }
        out.push_str("</ul>\n");
    }

    out
}

fn typed_html(annotation: Option<&str>, description: &str) -> String {
    match (annotation, description.is_empty()) {
        (Some(ty), true) => format!("<code>{}</code>", html_escape(ty)),
        (Some(ty), false) => format!("<code>{}</code> {}", html_escape(ty), html_escape(description)),
        (None, _) => html_escape(description),
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
