// Document rendering: TailoredResume → LaTeX source → PDF bytes.
// Compilation shells out to an external TeX engine inside a scratch directory.

use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::AppError;
use crate::models::TailoredResume;

pub mod handlers;
pub mod latex;
pub mod template;

pub use latex::{LatexEngine, LatexRenderer};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unknown template '{0}' (expected 'classic' or 'compact')")]
    UnknownTemplate(String),

    #[error("LaTeX engine '{0}' was not found on PATH")]
    EngineMissing(String),

    #[error("LaTeX engine exited with status {status:?}: {log}")]
    EngineFailed { status: Option<i32>, log: String },

    #[error("LaTeX engine did not finish within {0}s")]
    TimedOut(u64),

    #[error("LaTeX engine produced no PDF")]
    MissingOutput,

    #[error("I/O error while rendering: {0}")]
    Io(#[from] std::io::Error),
}

/// Named page layouts a tailored resume can be rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeTemplate {
    /// 11pt, 0.75in margins, airy lists.
    #[default]
    Classic,
    /// 10pt, 0.5in margins, tight lists — for long histories.
    Compact,
}

impl FromStr for ResumeTemplate {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "classic" => Ok(ResumeTemplate::Classic),
            "compact" => Ok(ResumeTemplate::Compact),
            other => Err(RenderError::UnknownTemplate(other.to_string())),
        }
    }
}

/// Rendering backend. Carried in `AppState` as `Arc<dyn ResumeRenderer>`.
#[async_trait]
pub trait ResumeRenderer: Send + Sync {
    async fn render(
        &self,
        resume: &TailoredResume,
        template: ResumeTemplate,
    ) -> Result<Vec<u8>, AppError>;
}
