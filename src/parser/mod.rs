//! Parser module — comment extraction plus element discovery.

pub mod comment;
pub mod js;

use crate::model::Document;
use anyhow::{anyhow, Result};
use std::path::Path;

/// Parse a source file into a Document based on its extension.
pub fn parse_file(path: &Path, content: &str) -> Result<Document> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("js") => Ok(js::parse(content, path)),
        _ => Err(anyhow!("unsupported file type: {}", path.display())),
    }
}
