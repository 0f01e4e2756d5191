use std::sync::Arc;

use crate::config::Config;
use crate::render::ResumeRenderer;
use crate::sections::SectionClassifier;
use crate::tailoring::ResumeRewriter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Section classifier, with the header rule chosen by `HEADER_POLICY`.
    pub classifier: SectionClassifier,
    /// Pluggable rewrite backend. Default: `GeminiRewriter`.
    pub rewriter: Arc<dyn ResumeRewriter>,
    /// Pluggable PDF backend. Default: `LatexRenderer`.
    pub renderer: Arc<dyn ResumeRenderer>,
}
