//! Converter pairs and the extension-based dispatcher.
//!
//! Each supported conversion is a [`PairConverter`] keyed by its
//! `(source extension, target extension)` pair. The [`ConverterRegistry`]
//! selects the converter for a request purely from the two file
//! extensions, case-insensitively.
//!
//! # Example
//!
//! ```no_run
//! use manuform::convert::ConverterRegistry;
//! use std::path::Path;
//!
//! fn main() -> manuform::Result<()> {
//!     let registry = ConverterRegistry::with_defaults();
//!     registry.convert(Path::new("draft.md"), Path::new("draft.txt"))?;
//!     Ok(())
//! }
//! ```

mod docx;
mod markdown;
mod odt;
mod text;

pub use docx::DocxToTextConverter;
pub use markdown::MarkdownToTextConverter;
pub use odt::OdtToTextConverter;
pub use text::TextToDocxConverter;

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for a single source-format to target-format conversion.
///
/// Implement this trait to add support for a new extension pair.
pub trait PairConverter: Send + Sync {
    /// Source file extension, lowercase without the leading dot.
    fn source_ext(&self) -> &'static str;

    /// Target file extension, lowercase without the leading dot.
    fn target_ext(&self) -> &'static str;

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert the input file, writing the output file atomically.
    fn convert(&self, input: &Path, output: &Path) -> Result<()>;
}

/// Registry of converter pairs.
///
/// Maps `(source, target)` extension pairs to converters and dispatches
/// conversions based on the file extensions of the given paths.
pub struct ConverterRegistry {
    converters: HashMap<(String, String), Arc<dyn PairConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Create a registry with the built-in converters
    /// (txt→docx, docx→txt, md→txt, odt→txt).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(TextToDocxConverter::new()));
        registry.register(Arc::new(DocxToTextConverter::new()));
        registry.register(Arc::new(MarkdownToTextConverter::new()));
        registry.register(Arc::new(OdtToTextConverter::new()));
        registry
    }

    /// Register a converter under its extension pair.
    pub fn register(&mut self, converter: Arc<dyn PairConverter>) {
        let key = (
            converter.source_ext().to_lowercase(),
            converter.target_ext().to_lowercase(),
        );
        self.converters.insert(key, converter);
    }

    /// Get a converter by extension pair.
    pub fn get(&self, source_ext: &str, target_ext: &str) -> Option<Arc<dyn PairConverter>> {
        self.converters
            .get(&(source_ext.to_lowercase(), target_ext.to_lowercase()))
            .cloned()
    }

    /// Check if an extension pair is supported.
    pub fn supports(&self, source_ext: &str, target_ext: &str) -> bool {
        self.get(source_ext, target_ext).is_some()
    }

    /// Get all supported extension pairs.
    pub fn supported_pairs(&self) -> Vec<(&str, &str)> {
        self.converters
            .keys()
            .map(|(s, t)| (s.as_str(), t.as_str()))
            .collect()
    }

    /// Convert a file using the converter for its extension pair.
    ///
    /// Fails with [`Error::UnsupportedConversion`] when no converter is
    /// registered for the pair; no output file is created in that case.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let from = extension_of(input)?;
        let to = extension_of(output)?;

        let converter = self
            .get(&from, &to)
            .ok_or_else(|| Error::unsupported(from.clone(), to.clone()))?;

        log::debug!(
            "converting {} -> {} via {}",
            input.display(),
            output.display(),
            converter.name()
        );
        converter.convert(input, output)
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Lowercased extension of a path.
fn extension_of(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| {
            Error::InvalidArgument(format!("{} has no file extension", path.display()))
        })
}
