//! LaTeX renderer: writes the generated source into a scratch directory and
//! compiles it with an external engine (`tectonic` by default).

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::TailoredResume;
use crate::render::template::render_latex;
use crate::render::{RenderError, ResumeRenderer, ResumeTemplate};

const SOURCE_FILE: &str = "resume.tex";
const OUTPUT_FILE: &str = "resume.pdf";
const ENGINE_TIMEOUT_SECS: u64 = 60;
/// Characters of engine output kept in `EngineFailed`.
const LOG_TAIL_CHARS: usize = 2000;

/// The external TeX engine to invoke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexEngine {
    program: String,
}

impl LatexEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Command-line arguments for compiling `source` in the working directory.
    fn args(&self, source: &str) -> Vec<String> {
        let name = Path::new(&self.program)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.program);
        match name {
            "pdflatex" | "xelatex" | "lualatex" => vec![
                "-interaction=nonstopmode".to_string(),
                "-halt-on-error".to_string(),
                source.to_string(),
            ],
            _ => vec![
                "--chatter".to_string(),
                "minimal".to_string(),
                source.to_string(),
            ],
        }
    }
}

impl Default for LatexEngine {
    fn default() -> Self {
        Self::new("tectonic")
    }
}

pub struct LatexRenderer {
    engine: LatexEngine,
}

impl LatexRenderer {
    pub fn new(engine: LatexEngine) -> Self {
        Self { engine }
    }

    async fn compile(&self, source: &str) -> Result<Vec<u8>, RenderError> {
        let workdir = tempfile::tempdir()?;
        tokio::fs::write(workdir.path().join(SOURCE_FILE), source).await?;

        let mut command = Command::new(self.engine.program());
        command
            .args(self.engine.args(SOURCE_FILE))
            .current_dir(workdir.path())
            .kill_on_drop(true);

        let output = tokio::time::timeout(Duration::from_secs(ENGINE_TIMEOUT_SECS), command.output())
            .await
            .map_err(|_| RenderError::TimedOut(ENGINE_TIMEOUT_SECS))?
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    RenderError::EngineMissing(self.engine.program().to_string())
                }
                _ => RenderError::Io(e),
            })?;

        if !output.status.success() {
            return Err(RenderError::EngineFailed {
                status: output.status.code(),
                log: log_tail(&output),
            });
        }
        debug!("LaTeX engine finished: {}", log_tail(&output));

        tokio::fs::read(workdir.path().join(OUTPUT_FILE))
            .await
            .map_err(|_| RenderError::MissingOutput)
    }
}

#[async_trait]
impl ResumeRenderer for LatexRenderer {
    async fn render(
        &self,
        resume: &TailoredResume,
        template: ResumeTemplate,
    ) -> Result<Vec<u8>, AppError> {
        let source = render_latex(resume, template);
        let pdf = self.compile(&source).await?;
        info!(
            "Rendered {:?} resume with {} ({} bytes)",
            template,
            self.engine.program(),
            pdf.len()
        );
        Ok(pdf)
    }
}

fn log_tail(output: &Output) -> String {
    let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
    log.push_str(&String::from_utf8_lossy(&output.stderr));
    let log = log.trim();
    let skip = log.chars().count().saturating_sub(LOG_TAIL_CHARS);
    log.chars().skip(skip).collect()
}
