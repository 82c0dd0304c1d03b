//! Plain text writer.

use crate::model::Document;

/// Render a document as plain text.
///
/// Every paragraph, including the last, is terminated with `\n`; an
/// empty document renders as the empty string.
pub fn render(doc: &Document) -> String {
    let mut out = String::new();
    for paragraph in &doc.paragraphs {
        out.push_str(&paragraph.plain_text());
        out.push('\n');
    }
    out
}
