//! Plain text reader.

use crate::error::Result;
use crate::model::Document;
use std::path::Path;

/// Read a plain text file into a document, one paragraph per line.
///
/// Each paragraph carries a single unstyled run. A zero-length file
/// yields an empty document.
pub fn read_text(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)?;
    Ok(Document::from_plain_text(&content))
}
