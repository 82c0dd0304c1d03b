//! ODT (OpenDocument Text) reader.
//!
//! ODT files are ZIP archives with the body in `content.xml`. Every
//! `text:p` and `text:h` element becomes one paragraph; `text:tab`,
//! `text:line-break`, and `text:s` expand to their visible characters.

use crate::error::{Error, Result};
use crate::model::{Document, Paragraph};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;

use super::get_attr;

/// Read an ODT file into a document.
pub fn read_odt(path: &Path) -> Result<Document> {
    let bytes = std::fs::read(path)?;
    read_odt_bytes(&bytes)
}

/// Read an ODT document from bytes.
pub fn read_odt_bytes(bytes: &[u8]) -> Result<Document> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| Error::parse("odt", e))?;

    let mut xml = String::new();
    archive
        .by_name("content.xml")
        .map_err(|e| Error::parse("odt", e))?
        .read_to_string(&mut xml)
        .map_err(|e| Error::parse("odt", e))?;

    parse_content_xml(&xml)
}

fn parse_content_xml(xml: &str) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    let mut doc = Document::new();

    // text:p may nest (annotations, table cells); only the outermost
    // element closes the paragraph.
    let mut depth = 0usize;
    let mut text = String::new();

    loop {
        match reader.read_event().map_err(|e| Error::parse("odt", e))? {
            Event::Start(e) => match e.name().as_ref() {
                b"text:p" | b"text:h" => depth += 1,
                _ => {}
            },
            Event::Empty(e) => {
                if depth > 0 {
                    match e.name().as_ref() {
                        b"text:tab" => text.push('\t'),
                        b"text:line-break" => text.push('\n'),
                        b"text:s" => {
                            let count = get_attr(&e, b"text:c")
                                .and_then(|v| v.parse::<usize>().ok())
                                .unwrap_or(1);
                            text.extend(std::iter::repeat(' ').take(count));
                        }
                        _ => {}
                    }
                }
            }
            Event::Text(t) => {
                if depth > 0 {
                    text.push_str(&t.unescape().map_err(|e| Error::parse("odt", e))?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"text:p" | b"text:h" => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        doc.add_paragraph(Paragraph::with_text(std::mem::take(&mut text)));
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    log::debug!("odt reader: {} paragraph(s)", doc.paragraph_count());
    Ok(doc)
}
