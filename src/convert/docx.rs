//! DOCX to plain text conversion.

use crate::error::Result;
use crate::{reader, writer};
use std::path::Path;

use super::PairConverter;

/// Converts DOCX to plain text: the full visible text is extracted and
/// paragraph breaks become line breaks.
#[derive(Debug, Clone, Default)]
pub struct DocxToTextConverter {
    _private: (),
}

impl DocxToTextConverter {
    /// Create a new converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PairConverter for DocxToTextConverter {
    fn source_ext(&self) -> &'static str {
        "docx"
    }

    fn target_ext(&self) -> &'static str {
        "txt"
    }

    fn name(&self) -> &str {
        "docx-to-txt"
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let doc = reader::docx::read_docx(input)?;
        let text = writer::text::render(&doc);
        writer::atomic_write(output, text.as_bytes())
    }
}
