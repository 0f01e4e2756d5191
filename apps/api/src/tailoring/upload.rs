//! Multipart form parsing for resume uploads.
//!
//! Form fields: `resume` (the file), `jd_text` (job description), and an
//! optional `template`. Unknown fields are ignored.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;

use crate::errors::AppError;
use crate::extraction::{DocumentFormat, ExtractionError, RawDocument};
use crate::render::ResumeTemplate;

const GENERIC_CONTENT_TYPE: &str = "application/octet-stream";

/// An uploaded resume file.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ResumeUpload {
    /// Resolves the declared format from the part's content type, falling back
    /// to the file name when the client sent none or a generic one.
    pub fn format(&self) -> Result<DocumentFormat, ExtractionError> {
        match self.content_type.as_deref().map(str::trim) {
            Some(ct) if !ct.is_empty() && ct != GENERIC_CONTENT_TYPE => {
                DocumentFormat::from_declared(ct)
            }
            _ => match &self.file_name {
                Some(name) => DocumentFormat::from_file_name(name),
                None => Err(ExtractionError::UnsupportedFormat(
                    GENERIC_CONTENT_TYPE.to_string(),
                )),
            },
        }
    }

    pub fn into_document(self) -> Result<RawDocument, ExtractionError> {
        let format = self.format()?;
        Ok(RawDocument::new(self.bytes, format))
    }
}

/// Everything the tailoring endpoints read from a multipart body.
#[derive(Debug, Default)]
pub struct ResumeForm {
    pub resume: Option<ResumeUpload>,
    pub jd_text: Option<String>,
    pub template: Option<String>,
}

/// A validated tailoring request: a resume, a non-blank JD, and a template.
#[derive(Debug)]
pub struct TailorRequest {
    pub resume: ResumeUpload,
    pub jd_text: String,
    pub template: ResumeTemplate,
}

impl ResumeForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ResumeForm::default();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some("resume") => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await.map_err(multipart_error)?;
                    form.resume = Some(ResumeUpload {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                Some("jd_text") => form.jd_text = Some(field.text().await.map_err(multipart_error)?),
                Some("template") => {
                    form.template = Some(field.text().await.map_err(multipart_error)?)
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// For endpoints that only need the file.
    pub fn into_resume(self) -> Result<ResumeUpload, AppError> {
        self.resume
            .ok_or_else(|| AppError::Validation("resume file is required".to_string()))
    }

    /// For endpoints that need both the file and a job description.
    pub fn into_tailor_request(self) -> Result<TailorRequest, AppError> {
        let jd_text = self.jd_text.unwrap_or_default();
        let Some(resume) = self.resume.filter(|_| !jd_text.trim().is_empty()) else {
            return Err(AppError::Validation(
                "Please provide both the job description (jd_text) and the resume file"
                    .to_string(),
            ));
        };

        let template = self
            .template
            .as_deref()
            .unwrap_or_default()
            .parse::<ResumeTemplate>()?;

        Ok(TailorRequest {
            resume,
            jd_text,
            template,
        })
    }
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::Validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}
