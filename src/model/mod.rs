//! Document model types for manuscript content representation.
//!
//! This module defines the intermediate representation that bridges the
//! format readers and writers. A document is an ordered sequence of
//! paragraphs; a paragraph is an ordered sequence of styled runs whose
//! concatenated text equals the paragraph's visible text.

mod document;
mod paragraph;

pub use document::Document;
pub use paragraph::{Paragraph, Run, RunStyle, Underline};
