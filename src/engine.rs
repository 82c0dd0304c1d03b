//! Engine facade: the single entry surface for callers.
//!
//! The engine validates its arguments, delegates to the conversion
//! pipeline, the style rewriter, or the typography normalizer, and wraps
//! failures into typed errors. It holds no cross-call mutable state, so
//! independent calls are safe to issue concurrently; the filesystem is
//! the only shared resource, and racing writes to one output path are a
//! caller concern.

use crate::convert::ConverterRegistry;
use crate::error::{Error, Result};
use crate::typo::Profile;
use crate::{reader, rewrite, typo, writer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Author metadata accompanying a conversion request.
///
/// Free-form strings; validating them is the caller's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorMeta {
    /// Author name
    pub author: String,
    /// Postal address
    pub address: String,
    /// Email address
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Manuscript title
    pub title: String,
    /// Approximate word count
    pub words: String,
}

/// Formatting preferences for a conversion request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingPrefs {
    /// Replace italic runs with underlined equivalents
    pub italic_to_underline: bool,
}

/// A conversion request. Immutable once constructed; consumed by one
/// [`Engine::convert_document`] call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    /// Source file path
    pub input: PathBuf,
    /// Destination file path
    pub output: PathBuf,
    /// Author metadata
    pub author: AuthorMeta,
    /// Formatting preferences
    pub prefs: FormattingPrefs,
}

impl ConvertRequest {
    /// Create a new conversion request.
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        author: AuthorMeta,
        prefs: FormattingPrefs,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            author,
            prefs,
        }
    }
}

/// The manuscript engine.
///
/// # Example
///
/// ```no_run
/// use manuform::{Engine, Profile};
/// use std::path::Path;
///
/// fn main() -> manuform::Result<()> {
///     let engine = Engine::new();
///     engine.quick_convert(Path::new("draft.txt"), Path::new("draft.docx"))?;
///     let fixed = engine.normalize_text("He said -- wait...", Profile::En);
///     println!("{fixed}");
///     Ok(())
/// }
/// ```
pub struct Engine {
    registry: ConverterRegistry,
}

impl Engine {
    /// Create an engine with the built-in converter pairs.
    pub fn new() -> Self {
        Self {
            registry: ConverterRegistry::with_defaults(),
        }
    }

    /// Create an engine with a custom converter registry.
    pub fn with_registry(registry: ConverterRegistry) -> Self {
        Self { registry }
    }

    /// The converter registry backing [`Engine::quick_convert`].
    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Process a word-processor document according to the request.
    ///
    /// Reads the DOCX input, applies the italic→underline rewrite when
    /// `prefs.italic_to_underline` is set, and writes the DOCX output
    /// atomically. Both paths must carry the `docx` extension.
    pub fn convert_document(&self, request: &ConvertRequest) -> Result<()> {
        require_path(&request.input, "input file")?;
        require_path(&request.output, "output file")?;

        let from = ext_of(&request.input);
        let to = ext_of(&request.output);
        if from != "docx" || to != "docx" {
            return Err(Error::unsupported(from, to));
        }

        let mut doc = reader::docx::read_docx(&request.input)?;
        if request.prefs.italic_to_underline {
            rewrite::italic_to_underline(&mut doc);
        }

        let bytes = writer::docx::render(&doc)?;
        writer::atomic_write(&request.output, &bytes)
    }

    /// Normalize text under the given typography profile.
    ///
    /// Pure delegation to [`typo::normalize`]; an unknown profile applies
    /// the generic rules only and is never an error.
    pub fn normalize_text(&self, text: &str, profile: Profile) -> String {
        typo::normalize(text, profile)
    }

    /// Convert between formats inferred from the two file extensions.
    pub fn quick_convert(&self, input: &Path, output: &Path) -> Result<()> {
        require_path(input, "input file")?;
        require_path(output, "output file")?;
        self.registry.convert(input, output)
    }

    /// Read the visible text of a document.
    ///
    /// `.docx` files are extracted through the document model; any other
    /// file is read as UTF-8 text. This is the loader behind
    /// normalization previews.
    pub fn read_document_text(&self, path: &Path) -> Result<String> {
        require_path(path, "input file")?;
        if ext_of(path) == "docx" {
            let doc = reader::docx::read_docx(path)?;
            Ok(writer::text::render(&doc))
        } else {
            Ok(std::fs::read_to_string(path)?)
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject empty paths with a typed error.
fn require_path(path: &Path, what: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidArgument(format!("{what} is missing")));
    }
    Ok(())
}

/// Lowercased extension, or empty string when absent.
fn ext_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default()
}
