//! DOCX decoding: reads `word/document.xml` out of the OOXML zip container and
//! joins paragraph texts with `\n`, in document order.
//!
//! Paragraph text is the concatenation of its `w:t` runs. Inside a run,
//! `w:tab` becomes a tab and `w:br`/`w:cr` a line break. `w:delText`
//! (tracked deletions) is ignored. Table-cell paragraphs are included.
//! Paragraphs inside a text box follow the paragraph that anchors it.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::{DocumentFormat, ExtractionError};

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let xml = read_document_part(bytes)?;
    let paragraphs = parse_paragraphs(&xml)?;
    Ok(paragraphs.join("\n"))
}

fn read_document_part(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::decode(DocumentFormat::Docx, e))?;
    let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
        ExtractionError::decode(DocumentFormat::Docx, format!("{DOCUMENT_PART}: {e}"))
    })?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ExtractionError::decode(DocumentFormat::Docx, e))?;
    Ok(xml)
}

/// A paragraph still being read, plus the paragraphs nested inside it
/// (text boxes), which are emitted right after it.
#[derive(Default)]
struct OpenParagraph {
    text: String,
    nested: Vec<String>,
}

/// Walks the WordprocessingML body and returns one string per `w:p`.
fn parse_paragraphs(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    // Text boxes can nest paragraphs inside a run, hence a stack.
    let mut open: Vec<OpenParagraph> = Vec::new();
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            ExtractionError::decode(
                DocumentFormat::Docx,
                format!("malformed XML at byte {}: {e}", reader.buffer_position()),
            )
        })?;

        match event {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => open.push(OpenParagraph::default()),
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(closed) = open.pop() {
                        let done = std::iter::once(closed.text).chain(closed.nested);
                        match open.last_mut() {
                            Some(parent) => parent.nested.extend(done),
                            None => paragraphs.extend(done),
                        }
                    }
                }
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => match open.last_mut() {
                    Some(parent) => parent.nested.push(String::new()),
                    None => paragraphs.push(String::new()),
                },
                b"w:tab" if run_depth > 0 => push_text(&mut open, "\t"),
                b"w:br" | b"w:cr" if run_depth > 0 => push_text(&mut open, "\n"),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractionError::decode(DocumentFormat::Docx, e))?;
                push_text(&mut open, &text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_text(open: &mut [OpenParagraph], text: &str) {
    if let Some(current) = open.last_mut() {
        current.text.push_str(text);
    }
}
