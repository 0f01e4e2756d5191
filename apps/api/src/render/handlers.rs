use axum::{extract::State, response::Response, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::TailoredResume;
use crate::render::ResumeTemplate;
use crate::state::AppState;
use crate::tailoring::handlers::pdf_response;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub resume: TailoredResume,
    #[serde(default)]
    pub template: Option<String>,
}

/// POST /api/v1/render
///
/// Renders an already-tailored record (e.g. one edited after `/resumes/rewrite`)
/// without calling the LLM again.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<RenderRequest>,
) -> Result<Response, AppError> {
    if request.resume.name.trim().is_empty() {
        return Err(AppError::Validation("resume.name cannot be empty".to_string()));
    }

    let template = request
        .template
        .as_deref()
        .unwrap_or_default()
        .parse::<ResumeTemplate>()?;

    let pdf = state.renderer.render(&request.resume, template).await?;
    info!("Rendered {:?} resume for {}: {} bytes", template, request.resume.name, pdf.len());

    Ok(pdf_response(pdf))
}
