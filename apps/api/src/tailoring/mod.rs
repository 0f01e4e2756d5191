// Resume tailoring: upload → extract → classify → rewrite against a JD → render.
// All LLM calls go through llm_client; all PDF output goes through render.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod rewriter;
pub mod upload;

pub use rewriter::{GeminiRewriter, ResumeRewriter};
