//! Document-level types.

use super::Paragraph;
use serde::{Deserialize, Serialize};

/// A parsed manuscript document.
///
/// Paragraph order is significant and is preserved exactly through every
/// transformation. Instances are built fresh per conversion call and
/// discarded once the destination file is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            paragraphs: Vec::new(),
        }
    }

    /// Create a document from plain text, one paragraph per line.
    pub fn from_plain_text(text: &str) -> Self {
        let mut doc = Self::new();
        for line in text.lines() {
            doc.add_paragraph(Paragraph::with_text(line));
        }
        doc
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Get the number of paragraphs in the document.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has any paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Get plain text content of the entire document.
    ///
    /// Paragraph breaks become line breaks.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
