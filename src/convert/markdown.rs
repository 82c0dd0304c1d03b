//! Markdown to plain text conversion.

use crate::error::Result;
use crate::{reader, writer};
use std::path::Path;

use super::PairConverter;

/// Converts Markdown to plain text: the source is parsed to an event
/// stream and all inline markup is stripped.
#[derive(Debug, Clone, Default)]
pub struct MarkdownToTextConverter {
    _private: (),
}

impl MarkdownToTextConverter {
    /// Create a new converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PairConverter for MarkdownToTextConverter {
    fn source_ext(&self) -> &'static str {
        "md"
    }

    fn target_ext(&self) -> &'static str {
        "txt"
    }

    fn name(&self) -> &str {
        "md-to-txt"
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let doc = reader::markdown::read_markdown(input)?;
        let text = writer::text::render(&doc);
        writer::atomic_write(output, text.as_bytes())
    }
}
