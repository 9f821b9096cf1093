//! docwalk — generate documentation from JavaDoc-style comments in
//! JavaScript source files.
//!
//! Two modes:
//!
//! - **stdin mode**: `docwalk < src.js` writes one rendered page to stdout
//! - **file mode**: `docwalk -o docs src/*.js` writes one page per input
//!   file plus a cross-linked index page

mod model;
mod parser;
mod render;
mod toc;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "docwalk",
    about = "Generate documentation from JavaDoc-style comments in JavaScript sources"
)]
struct Cli {
    /// Input files (glob patterns and directories supported).
    /// If omitted, reads from stdin.
    files: Vec<String>,

    /// Output directory (required when files are given)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: markdown (default), html, json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Include elements that have no documentation comment
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.files.is_empty() {
        return stdin_mode(&cli);
    }

    file_mode(&cli)
}

/// stdin mode: read one JavaScript source from stdin, render to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let mut doc = parser::js::parse(&input, Path::new("stdin.js"));
    doc.file.title = None;
    filter_elements(&mut doc, cli.all);
    let renderer = render::create_renderer(&cli.format)?;
    print!("{}", renderer.render(&doc));
    Ok(())
}

/// file mode: process multiple files, write pages plus an index.
fn file_mode(cli: &Cli) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when files are given")?;

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let input_files = expand_globs(&cli.files)?;
    let renderer = render::create_renderer(&cli.format)?;
    let ext = renderer.file_extension();

    let mut pages: Vec<String> = Vec::new();
    for path in &input_files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };
        let mut doc = match parser::parse_file(path, &content) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("warning: skipping {}: {}", path.display(), e);
                continue;
            }
        };

        filter_elements(&mut doc, cli.all);
        // Nothing documented, nothing to publish
        if doc.elements.is_empty() {
            continue;
        }

        let name = derive_output_name(path);
        let out_path = output_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&doc))
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        pages.push(name);
    }

    // Cross-linked index page over everything generated
    if let Some(index) = renderer.render_index(&pages) {
        let index_path = output_dir.join(format!("index.{}", ext));
        fs::write(&index_path, index)
            .with_context(|| format!("failed to write {}", index_path.display()))?;
    }

    Ok(())
}

/// File extensions recognized as source files.
const SUPPORTED_EXTENSIONS: &[&str] = &["js"];

/// Expand glob patterns into a list of real file paths.
/// Bare directory paths are scanned for supported file types.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() {
                    if let Some(ext) = p.extension().and_then(|e| e.to_str()) {
                        if SUPPORTED_EXTENSIONS.contains(&ext) {
                            files.push(p);
                        }
                    }
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            eprintln!("warning: no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

/// Derive the output page name (without extension) from a source path.
/// "lib/widget.js" → "widget"
fn derive_output_name(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| source.to_string_lossy().to_string())
}

/// Drop undocumented elements unless --all was given.
fn filter_elements(doc: &mut model::Document, all: bool) {
    if !all {
        doc.elements.retain(|e| !e.doc.is_empty());
    }
}
