//! Axum route handlers for the Resume API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::TailoredResume;
use crate::sections::ClassifiedResume;
use crate::state::AppState;
use crate::tailoring::pipeline::{
    extract_and_classify, rewrite_resume, tailor_resume, ExtractedResume,
};
use crate::tailoring::upload::ResumeForm;

/// File name offered to the browser for the tailored PDF.
pub const DOWNLOAD_FILE_NAME: &str = "optimized_resume.pdf";

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// POST /api/v1/resumes/extract
///
/// Multipart `resume` → extracted text and its section breakdown.
pub async fn handle_extract(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ExtractedResume>, AppError> {
    let upload = ResumeForm::from_multipart(multipart).await?.into_resume()?;
    let extracted = extract_and_classify(upload.into_document()?, state.classifier).await?;
    Ok(Json(extracted))
}

/// POST /api/v1/resumes/classify
///
/// Classifies already-extracted text. Never fails on content.
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassifiedResume> {
    Json(state.classifier.classify_text(&request.text))
}

/// POST /api/v1/resumes/rewrite
///
/// Multipart `resume` + `jd_text` → the tailored record as JSON, without rendering.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TailoredResume>, AppError> {
    let request = ResumeForm::from_multipart(multipart)
        .await?
        .into_tailor_request()?;
    let (_, resume) =
        rewrite_resume(&state, request.resume.into_document()?, &request.jd_text).await?;
    Ok(Json(resume))
}

/// POST /api/v1/resumes/tailor
///
/// Multipart `resume` + `jd_text` (+ optional `template`) → downloadable PDF.
pub async fn handle_tailor(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let request = ResumeForm::from_multipart(multipart)
        .await?
        .into_tailor_request()?;
    let pdf = tailor_resume(
        &state,
        request.resume.into_document()?,
        &request.jd_text,
        request.template,
    )
    .await?;
    Ok(pdf_response(pdf))
}

/// Wraps PDF bytes as an attachment download.
pub fn pdf_response(pdf: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
            ),
        ],
        pdf,
    )
        .into_response()
}
