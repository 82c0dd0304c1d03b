//! Submission cover letter generation.

use crate::engine::AuthorMeta;
use crate::error::{Error, Result};

/// A submission cover letter for a manuscript.
///
/// Blank metadata fields render as bracketed placeholders so the author
/// can spot what still needs filling in.
#[derive(Debug, Clone, Default)]
pub struct CoverLetter {
    /// Market (magazine/publisher) the manuscript is submitted to
    pub market: String,
    /// Story genre
    pub genre: String,
    /// Whether this is a simultaneous submission
    pub simultaneous: bool,
}

impl CoverLetter {
    /// Create a cover letter addressed to the given market.
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            genre: String::new(),
            simultaneous: false,
        }
    }

    /// Set the story genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Mark the submission as simultaneous.
    pub fn simultaneous(mut self, simultaneous: bool) -> Self {
        self.simultaneous = simultaneous;
        self
    }

    /// Render the letter text.
    ///
    /// Fails with [`Error::InvalidArgument`] when the market is blank.
    pub fn render(&self, meta: &AuthorMeta) -> Result<String> {
        if self.market.trim().is_empty() {
            return Err(Error::InvalidArgument("market is required".into()));
        }

        let title = or_placeholder(&meta.title, "[MANUSCRIPT TITLE]");
        let words = or_placeholder(&meta.words, "[WORD COUNT]");
        let author = or_placeholder(&meta.author, "[YOUR NAME]");
        let genre = or_placeholder(&self.genre, "[genre]");

        let mut letter = String::new();
        letter.push_str(&format!("Dear editors at {},\n\n", self.market));
        letter.push_str(&format!(
            "Please consider my manuscript, \"{title}\", for publication.\n\n"
        ));
        letter.push_str(&format!(
            "It is a {genre} story of approximately {words} words.\n\n"
        ));
        if self.simultaneous {
            letter.push_str("This is a simultaneous submission.\n\n");
        }
        letter.push_str("Thank you for your time and consideration.\n\n");
        letter.push_str("Sincerely,\n");
        letter.push_str(author);
        letter.push('\n');

        Ok(letter)
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}
