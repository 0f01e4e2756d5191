//! PDF decoding via `pdf-extract`. Pages are concatenated in page order with
//! no separator beyond what each page's text already ends with.

use super::{DocumentFormat, ExtractionError};

pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractionError::decode(DocumentFormat::Pdf, e))?;
    Ok(join_pages(pages))
}

fn join_pages(pages: Vec<String>) -> String {
    pages.concat()
}
