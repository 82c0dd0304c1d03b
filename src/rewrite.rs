//! Run-level style rewriting.
//!
//! Replaces italic runs with underlined equivalents while preserving all
//! other styling. The paragraph's visible text is never altered: after a
//! rewrite, the run sequence read left to right reproduces the original
//! text exactly.

use crate::model::{Document, Run, Underline};

/// Replace every italic, non-empty run in the document with a run
/// carrying the same text and attributes, but `italic = false` and a
/// single underline. Returns the number of runs rewritten.
///
/// Runs that are already underlined, bold-only, plain, or empty are left
/// untouched. Runs are never merged or split.
///
/// # Example
///
/// ```
/// use manuform::model::{Document, Paragraph, Run, Underline};
/// use manuform::rewrite::italic_to_underline;
///
/// let mut doc = Document::new();
/// let mut p = Paragraph::with_text("Hello ");
/// p.add_run(Run::italic("world"));
/// doc.add_paragraph(p);
///
/// assert_eq!(italic_to_underline(&mut doc), 1);
/// assert_eq!(doc.paragraphs[0].plain_text(), "Hello world");
/// assert_eq!(doc.paragraphs[0].runs[1].style.underline, Underline::Single);
/// ```
pub fn italic_to_underline(doc: &mut Document) -> usize {
    let mut rewritten = 0;

    for paragraph in &mut doc.paragraphs {
        // Structural edits (remove + insert) walk back-to-front so the
        // index of runs not yet visited stays valid.
        for i in (0..paragraph.runs.len()).rev() {
            let run = &paragraph.runs[i];
            if !run.style.italic || run.text.is_empty() {
                continue;
            }

            // Capture text and attributes before removing the run.
            let text = run.text.clone();
            let mut style = run.style.clone();
            style.italic = false;
            style.underline = Underline::Single;

            paragraph.runs.remove(i);
            paragraph.runs.insert(i, Run::styled(text, style));
            rewritten += 1;
        }
    }

    if rewritten > 0 {
        log::debug!("rewrote {rewritten} italic run(s) to underline");
    }
    rewritten
}
