//! Markdown reader.
//!
//! Walks the `pulldown-cmark` event stream and strips all inline markup,
//! leaving plain text: each block (heading, paragraph, list item, code
//! line, table row) becomes one paragraph in the model.

use crate::error::Result;
use crate::model::{Document, Paragraph};
use pulldown_cmark::{Event, Options, Parser, TagEnd};
use std::path::Path;

/// Read a Markdown file into a plain-text document.
pub fn read_markdown(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)?;
    Ok(from_str(&content))
}

/// Parse Markdown text into a plain-text document.
pub fn from_str(markdown: &str) -> Document {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown, options);

    let mut doc = Document::new();
    let mut block = String::new();

    for event in parser {
        match event {
            Event::Text(t) => block.push_str(&t),
            Event::Code(t) => block.push_str(&t),
            Event::SoftBreak | Event::HardBreak => block.push('\n'),
            Event::End(
                TagEnd::Paragraph
                | TagEnd::Heading(_)
                | TagEnd::Item
                | TagEnd::CodeBlock
                | TagEnd::TableRow
                | TagEnd::TableHead,
            ) => flush(&mut block, &mut doc),
            Event::End(TagEnd::TableCell) => block.push('\t'),
            _ => {}
        }
    }
    flush(&mut block, &mut doc);

    doc
}

/// Emit the accumulated block text, one paragraph per line.
fn flush(block: &mut String, doc: &mut Document) {
    if block.is_empty() {
        return;
    }
    for line in block.lines() {
        doc.add_paragraph(Paragraph::with_text(line.trim_end()));
    }
    block.clear();
}
