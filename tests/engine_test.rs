//! Integration tests for the engine facade and the conversion pipeline.

use manuform::{
    quick_convert, AuthorMeta, ConvertRequest, Engine, Error, FormattingPrefs, Underline,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Build a minimal ODT file with one `text:p` per line of `content`.
fn write_odt(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let paragraphs: String = lines
        .iter()
        .map(|l| format!("<text:p>{l}</text:p>"))
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <office:document-content \
         xmlns:office=\"urn:oasis:names:tc:opendocument:xmlns:office:1.0\" \
         xmlns:text=\"urn:oasis:names:tc:opendocument:xmlns:text:1.0\">\
         <office:body><office:text>{paragraphs}</office:text></office:body>\
         </office:document-content>"
    );

    let path = dir.path().join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut archive = zip::ZipWriter::new(file);
    archive
        .start_file("content.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    archive.write_all(xml.as_bytes()).unwrap();
    archive.finish().unwrap();
    path
}

/// Build a DOCX file from a document via the public writer.
fn write_docx(dir: &TempDir, name: &str, doc: &manuform::Document) -> PathBuf {
    let path = dir.path().join(name);
    let bytes = manuform::writer::docx::render(doc).unwrap();
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn txt_to_docx_and_back_preserves_lines() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "input.txt", "First line.\nSecond line.\nThird line.\n");
    let docx = dir.path().join("mid.docx");
    let output = dir.path().join("output.txt");

    quick_convert(&input, &docx).unwrap();
    quick_convert(&docx, &output).unwrap();

    let round_tripped = std::fs::read_to_string(&output).unwrap();
    assert_eq!(round_tripped, "First line.\nSecond line.\nThird line.\n");
}

#[test]
fn txt_round_trip_appends_final_newline() {
    // The text writer terminates every paragraph, including the last.
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "input.txt", "a\nb");
    let docx = dir.path().join("mid.docx");
    let output = dir.path().join("output.txt");

    quick_convert(&input, &docx).unwrap();
    quick_convert(&docx, &output).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), "a\nb\n");
}

#[test]
fn unicode_text_round_trips_exactly() {
    let dir = TempDir::new().unwrap();
    let text = "Árvíztűrő tükörfúrógép\nŁódź — „quoted” …\n日本語の文章\n";
    let input = write_file(&dir, "input.txt", text);
    let docx = dir.path().join("mid.docx");
    let output = dir.path().join("output.txt");

    quick_convert(&input, &docx).unwrap();
    quick_convert(&docx, &output).unwrap();

    assert_eq!(std::fs::read_to_string(&output).unwrap(), text);
}

#[test]
fn zero_length_input_produces_empty_destination() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "empty.txt", "");
    let docx = dir.path().join("empty.docx");
    let output = dir.path().join("empty-out.txt");

    quick_convert(&input, &docx).unwrap();
    assert!(docx.exists());

    quick_convert(&docx, &output).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn md_to_txt_strips_markup() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "input.md",
        "# Test Document\n\nThis is **bold** and *italic* text.\n\n## Section\n\nSome content.\n",
    );
    let output = dir.path().join("output.txt");

    quick_convert(&input, &output).unwrap();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("Test Document"));
    assert!(text.contains("This is bold and italic text."));
    assert!(!text.contains('*'));
    assert!(!text.contains('#'));
}

#[test]
fn odt_to_txt_one_paragraph_per_line() {
    let dir = TempDir::new().unwrap();
    let input = write_odt(&dir, "input.odt", &["First paragraph.", "Second paragraph."]);
    let output = dir.path().join("output.txt");

    quick_convert(&input, &output).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "First paragraph.\nSecond paragraph.\n"
    );
}

#[test]
fn unsupported_pair_fails_and_leaves_no_destination() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "input.txt", "content");
    let output = dir.path().join("output.pdf");

    let err = quick_convert(&input, &output).unwrap_err();

    match err {
        Error::UnsupportedConversion { from, to } => {
            assert_eq!(from, "txt");
            assert_eq!(to, "pdf");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists());
}

#[test]
fn corrupt_docx_fails_with_parse_error_and_no_destination() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "broken.docx", "this is not a zip archive");
    let output = dir.path().join("output.txt");

    let err = quick_convert(&input, &output).unwrap_err();
    assert!(matches!(err, Error::FormatParse { format: "docx", .. }));
    assert!(!output.exists());
}

#[test]
fn convert_document_rewrites_italic_to_underline() {
    let dir = TempDir::new().unwrap();

    let mut para = manuform::Paragraph::with_text("Hello ");
    para.add_run(manuform::Run::italic("world"));
    para.add_text("!");
    let mut doc = manuform::Document::new();
    doc.add_paragraph(para);
    let input = write_docx(&dir, "input.docx", &doc);
    let output = dir.path().join("output.docx");

    let request = ConvertRequest::new(
        &input,
        &output,
        AuthorMeta::default(),
        FormattingPrefs {
            italic_to_underline: true,
        },
    );
    Engine::new().convert_document(&request).unwrap();

    let result = manuform::reader::docx::read_docx(&output).unwrap();
    assert_eq!(result.plain_text(), "Hello world!");

    let rewritten = result.paragraphs[0]
        .runs
        .iter()
        .find(|r| r.text == "world")
        .unwrap();
    assert!(!rewritten.style.italic);
    assert_eq!(rewritten.style.underline, Underline::Single);
}

#[test]
fn convert_document_without_rewrite_keeps_italic() {
    let dir = TempDir::new().unwrap();

    let mut doc = manuform::Document::new();
    let mut para = manuform::Paragraph::new();
    para.add_run(manuform::Run::italic("emphasis"));
    doc.add_paragraph(para);
    let input = write_docx(&dir, "input.docx", &doc);
    let output = dir.path().join("output.docx");

    let request = ConvertRequest::new(
        &input,
        &output,
        AuthorMeta::default(),
        FormattingPrefs::default(),
    );
    Engine::new().convert_document(&request).unwrap();

    let result = manuform::reader::docx::read_docx(&output).unwrap();
    let run = result.paragraphs[0]
        .runs
        .iter()
        .find(|r| r.text == "emphasis")
        .unwrap();
    assert!(run.style.italic);
    assert_eq!(run.style.underline, Underline::None);
}

#[test]
fn read_document_text_extracts_docx() {
    let dir = TempDir::new().unwrap();
    let doc = manuform::Document::from_plain_text("visible text");
    let input = write_docx(&dir, "input.docx", &doc);

    let text = Engine::new().read_document_text(&input).unwrap();
    assert_eq!(text, "visible text\n");
}

#[test]
fn read_document_text_reads_plain_files_verbatim() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "notes.txt", "plain content");

    let text = Engine::new().read_document_text(&input).unwrap();
    assert_eq!(text, "plain content");
}

#[test]
fn missing_input_file_surfaces_io_error() {
    let dir = TempDir::new().unwrap();
    let result = quick_convert(
        &dir.path().join("absent.txt"),
        &dir.path().join("out.docx"),
    );
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn engine_is_safe_to_share_across_threads() {
    let dir = TempDir::new().unwrap();
    let engine = std::sync::Arc::new(Engine::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            let input = write_file(&dir, &format!("in{i}.txt"), "line one\nline two\n");
            let output = dir.path().join(format!("out{i}.docx"));
            std::thread::spawn(move || engine.quick_convert(&input, &output))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }
}

#[test]
fn quick_convert_requires_extensions() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "input.txt", "x");
    let err = quick_convert(&input, Path::new("no_extension")).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}
