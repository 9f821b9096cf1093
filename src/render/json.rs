//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the Document model directly via serde_json.

use crate::model::Document;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> String {
        // Document serialization has no failure mode beyond formatting,
        // so fall back to an empty object rather than panicking.
        let mut out = serde_json::to_string_pretty(doc).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;

    #[test]
    fn serializes_record_fields() {
        let doc = Document {
            file: FileDoc {
                title: Some("widget".to_string()),
            },
            elements: vec![ElementDoc {
                name: "greet".to_string(),
                kind: ElementKind::Function,
                line: 5,
                doc: DocRecord {
                    description: "Greets.".to_string(),
                    params: vec![ParamDoc {
                        name: "who".to_string(),
                        type_annotation: Some("String".to_string()),
                        description: "Target.".to_string(),
                    }],
                    ..Default::default()
                },
            }],
        };
        let out = JsonRenderer.render(&doc);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["file"]["title"], "widget");
        assert_eq!(parsed["elements"][0]["kind"], "function");
        assert_eq!(parsed["elements"][0]["doc"]["params"][0]["type"], "String");
    }
}
