//! Tailoring pipeline — orchestrates the per-request flow.
//!
//! Flow: extract text → classify sections → rewrite against the JD → render PDF.
//!
//! Each step runs to completion before the next; any error ends the request and
//! nothing partial is returned.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_document_blocking, DocumentFormat, RawDocument};
use crate::models::TailoredResume;
use crate::render::ResumeTemplate;
use crate::sections::{ClassifiedResume, SectionBucket, SectionClassifier};
use crate::state::AppState;

/// Extracted text plus its section breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedResume {
    pub format: DocumentFormat,
    pub text: String,
    pub sections: ClassifiedResume,
}

/// Steps 1–2: decode the upload and classify its lines.
pub async fn extract_and_classify(
    document: RawDocument,
    classifier: SectionClassifier,
) -> Result<ExtractedResume, AppError> {
    let format = document.format;
    let text = extract_document_blocking(document).await?;
    let sections = classifier.classify_text(&text);

    info!(
        "Extracted {} resume: {} lines ({} content, {} headers, {} blank)",
        format,
        sections.total_lines(),
        sections.content_lines(),
        sections.header_lines,
        sections.blank_lines
    );
    for bucket in SectionBucket::ALL {
        tracing::debug!("  {}: {} lines", bucket.as_str(), sections.lines(bucket).len());
    }

    Ok(ExtractedResume {
        format,
        text,
        sections,
    })
}

/// Steps 1–3: extract, classify, then rewrite against `jd_text`.
pub async fn rewrite_resume(
    state: &AppState,
    document: RawDocument,
    jd_text: &str,
) -> Result<(ExtractedResume, TailoredResume), AppError> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "Reading {} resume", document.format);
    let extracted = extract_and_classify(document, state.classifier).await?;

    info!(%request_id, "Rewriting resume against {}-char JD", jd_text.len());
    let resume = state.rewriter.rewrite(&extracted.text, jd_text).await?;
    info!(
        %request_id,
        "Rewrite produced {} experience entries, {} skills",
        resume.experience.len(),
        resume.skills.len()
    );

    Ok((extracted, resume))
}

/// Full pipeline: extract → classify → rewrite → render. Returns the PDF bytes.
pub async fn tailor_resume(
    state: &AppState,
    document: RawDocument,
    jd_text: &str,
    template: ResumeTemplate,
) -> Result<Vec<u8>, AppError> {
    let (_, resume) = rewrite_resume(state, document, jd_text).await?;
    let pdf = state.renderer.render(&resume, template).await?;
    info!("Resume optimized for {}: {} byte PDF", resume.name, pdf.len());
    Ok(pdf)
}
