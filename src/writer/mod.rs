//! Format writers rendering the document model, and atomic file output.

pub mod docx;
pub mod text;

use crate::error::{Error, Result};
use std::io::Write;
use std::path::Path;

/// Write bytes to `path` atomically.
///
/// The bytes land in a temp file in the destination directory which is
/// then renamed over the target, so a failed conversion never leaves a
/// partial destination file.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
