//! Resume rewriting — pluggable, trait-based backend that turns extracted resume
//! text plus a job description into a `TailoredResume`.
//!
//! Default: `GeminiRewriter`. `AppState` holds an `Arc<dyn ResumeRewriter>`.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, NO_INVENTION_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::models::TailoredResume;
use crate::tailoring::prompts::{REWRITE_INSTRUCTIONS, REWRITE_SYSTEM};

/// The rewrite trait. Implement this to swap backends without touching the
/// handlers or the pipeline.
#[async_trait]
pub trait ResumeRewriter: Send + Sync {
    async fn rewrite(&self, resume_text: &str, jd_text: &str) -> Result<TailoredResume, AppError>;
}

/// Rewrites through the Gemini `generateContent` API.
pub struct GeminiRewriter(pub LlmClient);

#[async_trait]
impl ResumeRewriter for GeminiRewriter {
    async fn rewrite(&self, resume_text: &str, jd_text: &str) -> Result<TailoredResume, AppError> {
        let prompt = build_rewrite_prompt(resume_text, jd_text);
        let system = format!("{REWRITE_SYSTEM} {JSON_ONLY_SYSTEM}");

        let resume: TailoredResume = self
            .0
            .call_json(&prompt, &system)
            .await
            .map_err(|e| AppError::Llm(format!("Resume rewrite failed: {e}")))?;

        check_rewrite(resume)
    }
}

/// Instructions, then the JD, then the original resume text.
pub fn build_rewrite_prompt(resume_text: &str, jd_text: &str) -> String {
    let instructions = REWRITE_INSTRUCTIONS.replace("{no_invention}", NO_INVENTION_INSTRUCTION);
    format!(
        "{instructions}\n\n---\nJob Description:\n{}\n---\nOriginal Resume:\n{}\n---",
        jd_text.trim(),
        resume_text.trim()
    )
}

fn check_rewrite(resume: TailoredResume) -> Result<TailoredResume, AppError> {
    if resume.name.trim().is_empty() {
        return Err(AppError::Llm(
            "Resume rewrite returned a record without a name".to_string(),
        ));
    }
    Ok(resume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::tests::sample_resume;

    #[test]
    fn test_prompt_places_jd_before_resume() {
        let prompt = build_rewrite_prompt("  Jane Roe\nRust  ", "\nSenior Rust Engineer\n");
        let jd_at = prompt.find("Job Description:\nSenior Rust Engineer").unwrap();
        let resume_at = prompt.find("Original Resume:\nJane Roe\nRust").unwrap();
        assert!(jd_at < resume_at);
    }

    #[test]
    fn test_prompt_carries_schema_and_rules() {
        let prompt = build_rewrite_prompt("text", "jd");
        assert!(prompt.contains("\"description_points\""));
        assert!(prompt.contains("STAR method"));
        assert!(prompt.contains("Do not invent new experiences"));
        assert!(!prompt.contains("{no_invention}"));
    }

    #[test]
    fn test_prompt_does_not_expand_placeholders_in_user_text() {
        let prompt = build_rewrite_prompt("I wrote {no_invention} once", "jd");
        assert!(prompt.contains("I wrote {no_invention} once"));
    }

    #[test]
    fn test_check_rewrite_requires_name() {
        let mut resume = sample_resume();
        assert!(check_rewrite(resume.clone()).is_ok());
        resume.name = "  ".to_string();
        assert!(matches!(check_rewrite(resume), Err(AppError::Llm(_))));
    }
}
