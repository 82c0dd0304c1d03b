//! # manuform
//!
//! Manuscript conversion and typography normalization engine.
//!
//! This library converts manuscripts between plain text, Markdown,
//! word-processor (DOCX), and OpenDocument (ODT) formats, rewrites
//! inline character formatting (italic → underline) while preserving all
//! other styling, and normalizes manuscript punctuation according to a
//! locale/style profile.
//!
//! ## Quick Start
//!
//! ```no_run
//! use manuform::{Engine, Profile};
//! use std::path::Path;
//!
//! fn main() -> manuform::Result<()> {
//!     let engine = Engine::new();
//!
//!     // Convert between formats inferred from the extensions
//!     engine.quick_convert(Path::new("draft.txt"), Path::new("draft.docx"))?;
//!
//!     // Fix typography
//!     let fixed = engine.normalize_text("She said \"go\" -- now...", Profile::En);
//!     println!("{fixed}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Format conversion**: txt→docx, docx→txt, md→txt, odt→txt, with
//!   atomic output and extension-pair dispatch
//! - **Style rewriting**: italic runs become underlined, all other run
//!   attributes preserved, visible text untouched
//! - **Typography profiles**: Hungarian, German, English, and Shunn
//!   manuscript conventions as ordered rule tables
//! - **Cover letters**: submission letter generation from author metadata
//!
//! Concurrency: the engine holds no cross-call state, so independent
//! calls are safe from multiple threads; overlapping writes to one
//! output path are the caller's to avoid.

pub mod convert;
pub mod cover;
pub mod engine;
pub mod error;
pub mod model;
pub mod reader;
pub mod rewrite;
pub mod typo;
pub mod writer;

// Re-export commonly used types
pub use convert::{ConverterRegistry, PairConverter};
pub use cover::CoverLetter;
pub use engine::{AuthorMeta, ConvertRequest, Engine, FormattingPrefs};
pub use error::{Error, Result};
pub use model::{Document, Paragraph, Run, RunStyle, Underline};
pub use typo::{normalize, Normalizer, Profile};

use std::path::Path;

/// Process a word-processor document according to a request.
///
/// Convenience wrapper over [`Engine::convert_document`].
pub fn convert(request: &ConvertRequest) -> Result<()> {
    Engine::new().convert_document(request)
}

/// Convert between formats inferred from the two file extensions.
///
/// Convenience wrapper over [`Engine::quick_convert`].
///
/// # Example
///
/// ```no_run
/// manuform::quick_convert("notes.md".as_ref(), "notes.txt".as_ref()).unwrap();
/// ```
pub fn quick_convert(input: &Path, output: &Path) -> Result<()> {
    Engine::new().quick_convert(input, output)
}
