//! DOCX (Office Open XML) reader.
//!
//! DOCX files are ZIP archives; the visible content lives in
//! `word/document.xml`. The archive is opened with `zip` and the content
//! part is walked with `quick-xml`, collecting `w:p` paragraphs, `w:r`
//! runs, and the run properties the model carries (`w:i`, `w:b`, `w:u`,
//! `w:rFonts`, `w:sz`).

use crate::error::{Error, Result};
use crate::model::{Document, Paragraph, Run, RunStyle, Underline};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

use super::get_attr;

/// Read a DOCX file into a document.
pub fn read_docx(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path)?;
    read_docx_bytes(&bytes)
}

/// Read a DOCX document from bytes.
pub fn read_docx_bytes(bytes: &[u8]) -> Result<Document> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| Error::parse("docx", e))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| Error::parse("docx", e))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::parse("docx", e))?;

    parse_document_xml(&xml)
}

/// Check if `w:val` turns a toggle property off.
fn val_is_off(e: &BytesStart) -> bool {
    matches!(
        get_attr(e, b"w:val").as_deref(),
        Some("0") | Some("false") | Some("none")
    )
}

/// Apply one run property element to the style under construction.
///
/// Unknown or malformed properties are skipped, never fatal: style
/// preservation is best-effort.
fn apply_run_property(e: &BytesStart, style: &mut RunStyle) {
    match e.name().as_ref() {
        b"w:i" => style.italic = !val_is_off(e),
        b"w:b" => style.bold = !val_is_off(e),
        b"w:u" => {
            style.underline = if val_is_off(e) {
                Underline::None
            } else {
                Underline::Single
            };
        }
        b"w:rFonts" => {
            if let Some(family) = get_attr(e, b"w:ascii") {
                style.font_family = Some(family);
            }
        }
        b"w:sz" => {
            // w:sz is in half-points
            if let Some(half_points) = get_attr(e, b"w:val").and_then(|v| v.parse::<u32>().ok())
            {
                style.font_size = Some(half_points / 2);
            }
        }
        _ => {}
    }
}

fn parse_document_xml(xml: &str) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    let mut doc = Document::new();

    let mut paragraph: Option<Paragraph> = None;
    let mut style = RunStyle::default();
    let mut text = String::new();
    let mut in_run = false;
    let mut in_rpr = false;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(|e| Error::parse("docx", e))? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => paragraph = Some(Paragraph::new()),
                b"w:r" => {
                    in_run = true;
                    style = RunStyle::default();
                    text.clear();
                }
                b"w:rPr" if in_run => in_rpr = true,
                b"w:t" if in_run => in_text = true,
                _ if in_rpr => apply_run_property(&e, &mut style),
                _ => {}
            },
            Event::Empty(e) => {
                if in_rpr {
                    apply_run_property(&e, &mut style);
                } else if in_run {
                    match e.name().as_ref() {
                        b"w:tab" => text.push('\t'),
                        b"w:br" | b"w:cr" => text.push('\n'),
                        _ => {}
                    }
                }
            }
            Event::Text(t) => {
                if in_text {
                    text.push_str(&t.unescape().map_err(|e| Error::parse("docx", e))?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:rPr" => in_rpr = false,
                b"w:t" => in_text = false,
                b"w:r" => {
                    if in_run {
                        if let Some(p) = paragraph.as_mut() {
                            p.add_run(Run::styled(std::mem::take(&mut text), style.clone()));
                        }
                    }
                    in_run = false;
                }
                b"w:p" => {
                    if let Some(p) = paragraph.take() {
                        doc.add_paragraph(p);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    log::debug!("docx reader: {} paragraph(s)", doc.paragraph_count());
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap_body(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        )
    }

    #[test]
    fn test_parse_plain_paragraphs() {
        let xml = wrap_body("<w:p><w:r><w:t>Hello</w:t></w:r></w:p><w:p><w:r><w:t>World</w:t></w:r></w:p>");
        let doc = parse_document_xml(&xml).unwrap();
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.plain_text(), "Hello\nWorld");
    }

    #[test]
    fn test_parse_run_properties() {
        let xml = wrap_body(
            "<w:p><w:r><w:rPr><w:i/><w:b/><w:rFonts w:ascii=\"Courier New\"/><w:sz w:val=\"24\"/></w:rPr>\
             <w:t>styled</w:t></w:r></w:p>",
        );
        let doc = parse_document_xml(&xml).unwrap();
        let run = &doc.paragraphs[0].runs[0];
        assert!(run.style.italic);
        assert!(run.style.bold);
        assert_eq!(run.style.font_family.as_deref(), Some("Courier New"));
        assert_eq!(run.style.font_size, Some(12));
    }

    #[test]
    fn test_toggle_property_off() {
        let xml = wrap_body("<w:p><w:r><w:rPr><w:i w:val=\"false\"/></w:rPr><w:t>x</w:t></w:r></w:p>");
        let doc = parse_document_xml(&xml).unwrap();
        assert!(!doc.paragraphs[0].runs[0].style.italic);
    }

    #[test]
    fn test_underline_single() {
        let xml = wrap_body("<w:p><w:r><w:rPr><w:u w:val=\"single\"/></w:rPr><w:t>u</w:t></w:r></w:p>");
        let doc = parse_document_xml(&xml).unwrap();
        assert_eq!(doc.paragraphs[0].runs[0].style.underline, Underline::Single);
    }

    #[test]
    fn test_paragraph_mark_properties_ignored() {
        // w:rPr inside w:pPr styles the paragraph mark, not a run.
        let xml = wrap_body(
            "<w:p><w:pPr><w:rPr><w:i/></w:rPr></w:pPr><w:r><w:t>plain</w:t></w:r></w:p>",
        );
        let doc = parse_document_xml(&xml).unwrap();
        assert!(!doc.paragraphs[0].runs[0].style.italic);
    }

    #[test]
    fn test_tab_and_break() {
        let xml = wrap_body("<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>");
        let doc = parse_document_xml(&xml).unwrap();
        assert_eq!(doc.plain_text(), "a\tb\nc");
    }

    #[test]
    fn test_not_a_zip_fails_with_parse_error() {
        let result = read_docx_bytes(b"definitely not a zip archive");
        assert!(matches!(result, Err(Error::FormatParse { format: "docx", .. })));
    }
}
