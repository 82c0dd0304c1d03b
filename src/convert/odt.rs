//! ODT to plain text conversion.

use crate::error::Result;
use crate::{reader, writer};
use std::path::Path;

use super::PairConverter;

/// Converts ODT to plain text: every paragraph element is written out,
/// one per line.
#[derive(Debug, Clone, Default)]
pub struct OdtToTextConverter {
    _private: (),
}

impl OdtToTextConverter {
    /// Create a new converter.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl PairConverter for OdtToTextConverter {
    fn source_ext(&self) -> &'static str {
        "odt"
    }

    fn target_ext(&self) -> &'static str {
        "txt"
    }

    fn name(&self) -> &str {
        "odt-to-txt"
    }

    fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let doc = reader::odt::read_odt(input)?;
        let text = writer::text::render(&doc);
        writer::atomic_write(output, text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_pair() {
        let converter = OdtToTextConverter::new();
        assert_eq!(converter.source_ext(), "odt");
        assert_eq!(converter.target_ext(), "txt");
        assert_eq!(converter.name(), "odt-to-txt");
    }
}
