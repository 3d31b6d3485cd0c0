//
//  jira-fetcher
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders [`Document`]s for the terminal.
//!
//! - **Text format**: the document content followed by its browse link,
//!   documents separated by a rule. Labels are dimmed when color is enabled.
//! - **JSON format**: the documents serialized with `serde_json`, a single
//!   object for one document and an array for a list.
//!
//! Status messages (errors and confirmations) always go through
//! [`OutputWriter`] so that they are styled consistently.
//!
//! ## Example
//!
//! ```rust,ignore
//! use jira_fetcher::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_document(&doc)?;
//! writer.write_success("Deleted PROJ-123");
//! ```

use console::style;

use crate::fetcher::Document;

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text with optional color.
    #[default]
    Text,
    /// Pretty-printed JSON for scripting.
    Json,
}

/// Writes documents and status messages in a chosen format.
///
/// Color is detected from the terminal at construction and is never used for
/// JSON output.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn text() -> Self {
        Self::new(OutputFormat::Text)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes one document to stdout.
    pub fn write_document(&self, doc: &Document) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(doc)?),
            OutputFormat::Text => println!("{}", render_document(doc, self.color)),
        }
        Ok(())
    }

    /// Writes a list of documents to stdout.
    ///
    /// An empty list prints `[]` in JSON and an informational line in text.
    pub fn write_documents(&self, docs: &[Document]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(docs)?),
            OutputFormat::Text if docs.is_empty() => self.write_info("No issues found"),
            OutputFormat::Text => println!("{}", render_documents(docs, self.color)),
        }
        Ok(())
    }

    /// Writes an error message to stderr, prefixed with `error:`.
    pub fn write_error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Writes a confirmation to stdout. Suppressed for JSON so that stdout
    /// stays machine-readable.
    pub fn write_success(&self, msg: &str) {
        match self.format {
            OutputFormat::Json => {}
            OutputFormat::Text if self.color => {
                println!("{} {}", style("✓").green().bold(), msg)
            }
            OutputFormat::Text => println!("✓ {}", msg),
        }
    }
}

/// Renders a document as text: every `Label: value` line of its content
/// with the label dimmed, then the browse link.
pub fn render_document(doc: &Document, color: bool) -> String {
    let mut lines: Vec<String> = doc
        .content
        .lines()
        .map(|line| style_label(line, color))
        .collect();

    if let Some(link) = doc.meta_str("link") {
        lines.push(String::new());
        lines.push(format_field("Link", link, color));
    }

    lines.join("\n")
}

/// Renders documents one after another, separated by a rule.
pub fn render_documents(docs: &[Document], color: bool) -> String {
    let rule = if color {
        style("─".repeat(40)).dim().to_string()
    } else {
        "-".repeat(40)
    };

    let separator = format!("\n{}\n", rule);
    docs.iter()
        .map(|doc| render_document(doc, color))
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Formats a key-value pair, dimming the key when color is enabled.
pub fn format_field(key: &str, value: &str, color: bool) -> String {
    if color {
        format!("{}: {}", style(key).dim(), value)
    } else {
        format!("{}: {}", key, value)
    }
}

fn style_label(line: &str, color: bool) -> String {
    const LABELS: [&str; 5] = ["Issue", "Title", "Type", "Status", "Priority"];

    match line.split_once(": ") {
        Some((label, value)) if LABELS.contains(&label) => format_field(label, value, color),
        _ if color && (line == "Description:" || line == "Comments:") => {
            style(line).bold().to_string()
        }
        _ => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    fn doc(key: &str) -> Document {
        let mut metadata = Map::new();
        metadata.insert("key".to_string(), Value::from(key));
        metadata.insert(
            "link".to_string(),
            Value::from(format!("https://jira.example.com/browse/{}", key)),
        );
        Document::new(
            format!("Issue: {}\nTitle: Broken login\n\nDescription:\nSteps", key),
            metadata,
        )
    }

    #[test]
    fn test_render_document_plain() {
        assert_eq!(
            render_document(&doc("PROJ-1"), false),
            "Issue: PROJ-1\nTitle: Broken login\n\nDescription:\nSteps\n\n\
             Link: https://jira.example.com/browse/PROJ-1"
        );
    }

    #[test]
    fn test_render_document_without_link() {
        let doc = Document::new("Issue: PROJ-2", Map::new());
        assert_eq!(render_document(&doc, false), "Issue: PROJ-2");
    }

    #[test]
    fn test_render_documents_separates_entries() {
        let rendered = render_documents(&[doc("PROJ-1"), doc("PROJ-2")], false);
        let parts: Vec<_> = rendered.split(&format!("\n{}\n", "-".repeat(40))).collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].starts_with("Issue: PROJ-1"));
        assert!(parts[1].starts_with("Issue: PROJ-2"));
    }

    #[test]
    fn test_comment_lines_are_not_restyled() {
        assert_eq!(
            style_label("2024-01-01 - Comment User: Status: done", false),
            "2024-01-01 - Comment User: Status: done"
        );
    }

    #[test]
    fn test_default_format_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
        assert_eq!(OutputWriter::json().format(), OutputFormat::Json);
    }
}
