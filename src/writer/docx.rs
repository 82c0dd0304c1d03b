//! DOCX writer built on `docx-rs`.

use crate::error::{Error, Result};
use crate::model::{Document, Underline};
use std::io::Cursor;

/// Render a document as DOCX bytes.
///
/// An empty document produces a minimal valid DOCX with no paragraphs.
pub fn render(doc: &Document) -> Result<Vec<u8>> {
    let mut docx = docx_rs::Docx::new();

    for paragraph in &doc.paragraphs {
        let mut p = docx_rs::Paragraph::new();
        for run in &paragraph.runs {
            let mut r = docx_rs::Run::new().add_text(run.text.as_str());
            if run.style.italic {
                r = r.italic();
            }
            if run.style.bold {
                r = r.bold();
            }
            if run.style.underline == Underline::Single {
                r = r.underline("single");
            }
            if let Some(ref family) = run.style.font_family {
                r = r.fonts(docx_rs::RunFonts::new().ascii(family));
            }
            if let Some(points) = run.style.font_size {
                // docx-rs takes half-points
                r = r.size((points * 2) as usize);
            }
            p = p.add_run(r);
        }
        docx = docx.add_paragraph(p);
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| Error::parse("docx", e))?;
    Ok(cursor.into_inner())
}
