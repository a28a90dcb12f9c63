//! Docs command implementation
//!
//! Renders one catalog section as HTML fragments, Markdown or JSON.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use synthinfo_core::{DocRenderer, Registry, RenderedDocs};

/// Catalog section to document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsSection {
    Synths,
    Fx,
    Samples,
}

impl std::str::FromStr for DocsSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "synths" => Ok(DocsSection::Synths),
            "fx" => Ok(DocsSection::Fx),
            "samples" => Ok(DocsSection::Samples),
            _ => Err(format!(
                "Unknown section: {}. Supported: synths, fx, samples",
                s
            )),
        }
    }
}

/// Output format for rendered docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocsFormat {
    /// HTML fragments, one per definition or sample group
    Html,
    /// A single Markdown document with a table of contents
    Markdown,
    /// Both renderings as JSON
    Json,
}

impl std::str::FromStr for DocsFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(DocsFormat::Html),
            "markdown" | "md" => Ok(DocsFormat::Markdown),
            "json" => Ok(DocsFormat::Json),
            _ => Err(format!(
                "Unknown format: {}. Supported: html, markdown, json",
                s
            )),
        }
    }
}

/// Renders `section` from `registry` in `format`.
pub fn render(registry: &Registry, section: DocsSection, format: DocsFormat) -> Result<String> {
    let renderer = DocRenderer::new(registry);
    let docs = match section {
        DocsSection::Synths => renderer.synths(),
        DocsSection::Fx => renderer.fx(),
        DocsSection::Samples => renderer.samples(),
    };
    format_docs(&docs, format)
}

fn format_docs(docs: &RenderedDocs, format: DocsFormat) -> Result<String> {
    let text = match format {
        DocsFormat::Html => docs
            .html
            .iter()
            .map(|d| format!("<!-- {} -->\n{}\n", d.key, d.html))
            .collect::<Vec<_>>()
            .join("\n"),
        DocsFormat::Markdown => docs.markdown.clone(),
        DocsFormat::Json => serde_json::to_string_pretty(docs)?,
    };
    Ok(text)
}

/// Run the docs command
///
/// # Arguments
/// * `section` - Catalog section (synths, fx, samples)
/// * `format` - Output format (html, markdown, json)
/// * `output` - Output file path (default: stdout)
pub fn run(section: &str, format: &str, output: Option<&str>) -> Result<ExitCode> {
    let section = section.parse::<DocsSection>().map_err(anyhow::Error::msg)?;
    let format = format.parse::<DocsFormat>().map_err(anyhow::Error::msg)?;
    let text = render(Registry::global(), section, format)?;

    match output {
        Some(path) => {
            fs::write(Path::new(path), &text)
                .with_context(|| format!("Failed to write docs to: {}", path))?;
            println!("{} {}", "Wrote:".green().bold(), path);
        }
        None => println!("{}", text),
    }

    Ok(ExitCode::SUCCESS)
}
