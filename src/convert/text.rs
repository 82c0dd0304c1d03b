//! Plain text to DOCX conversion.

use crate::error::Result;
use crate::{reader, writer};
use std::path::Path;

use super::PairConverter;

/// Converts plain text to DOCX: each input line becomes one paragraph
/// with a single unstyled run.
#[derive(Debug, Clone, Default)]
pub struct TextToDocxConverter {
    _private: (),
}

impl TextToDocxConverter {
    /// Create a new converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PairConverter for TextToDocxConverter {
    fn source_ext(&self) -> &'static str {
        "txt"
    }

    fn target_ext(&self) -> &'static str {
        "docx"
    }

    fn name(&self) -> &str {
        "txt-to-docx"
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let doc = reader::text::read_text(input)?;
        let bytes = writer::docx::render(&doc)?;
        writer::atomic_write(output, &bytes)
    }
}
