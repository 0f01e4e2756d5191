pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::render::handlers as render;
use crate::state::AppState;
use crate::tailoring::handlers as tailoring;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes/extract", post(tailoring::handle_extract))
        .route("/api/v1/resumes/classify", post(tailoring::handle_classify))
        .route("/api/v1/resumes/rewrite", post(tailoring::handle_rewrite))
        .route("/api/v1/resumes/tailor", post(tailoring::handle_tailor))
        // Render API
        .route("/api/v1/render", post(render::handle_render))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::errors::AppError;
    use crate::extraction::docx::tests::build_docx;
    use crate::models::resume::tests::sample_resume;
    use crate::models::TailoredResume;
    use crate::render::{ResumeRenderer, ResumeTemplate};
    use crate::sections::{HeaderPolicy, SectionClassifier};
    use crate::tailoring::ResumeRewriter;

    const BOUNDARY: &str = "tailor-test-boundary";
    const FAKE_PDF: &[u8] = b"%PDF-1.4 fake";

    struct CannedRewriter;

    #[async_trait]
    impl ResumeRewriter for CannedRewriter {
        async fn rewrite(&self, resume_text: &str, _jd: &str) -> Result<TailoredResume, AppError> {
            let mut resume = sample_resume();
            resume.summary = resume_text.lines().next().unwrap_or_default().to_string();
            Ok(resume)
        }
    }

    struct FakeRenderer;

    #[async_trait]
    impl ResumeRenderer for FakeRenderer {
        async fn render(
            &self,
            _resume: &TailoredResume,
            _template: ResumeTemplate,
        ) -> Result<Vec<u8>, AppError> {
            Ok(FAKE_PDF.to_vec())
        }
    }

    fn app_with_limit(max_upload_bytes: usize) -> Router {
        let config = Config {
            gemini_api_key: "test-key".to_string(),
            gemini_model: "test-model".to_string(),
            port: 0,
            rust_log: "info".to_string(),
            latex_engine: "tectonic".to_string(),
            max_upload_bytes,
            header_policy: HeaderPolicy::Permissive,
        };
        build_router(AppState {
            config,
            classifier: SectionClassifier::default(),
            rewriter: Arc::new(CannedRewriter),
            renderer: Arc::new(FakeRenderer),
        })
    }

    fn app() -> Router {
        app_with_limit(1024 * 1024)
    }

    enum Part<'a> {
        Text(&'a str, &'a str),
        File {
            name: &'a str,
            file_name: &'a str,
            content_type: &'a str,
            bytes: &'a [u8],
        },
    }

    fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::Text(name, value) => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
                Part::File {
                    name,
                    file_name,
                    content_type,
                    bytes,
                } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn resume_docx() -> Vec<u8> {
        build_docx(&[
            "Jane Roe",
            "Summary",
            "Backend engineer.",
            "Experience",
            "Acme, Senior Engineer",
            "Skills",
            "Rust, Go",
        ])
    }

    #[tokio::test]
    async fn test_health() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "tailor");
    }

    #[tokio::test]
    async fn test_classify_endpoint() {
        let req = json_request(
            "/api/v1/resumes/classify",
            json!({ "text": "Education\nBSc Physics\n\nSkills\nRust" }),
        );
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["education"], json!(["BSc Physics"]));
        assert_eq!(json["skills"], json!(["Rust"]));
        assert_eq!(json["header_lines"], 2);
        assert_eq!(json["blank_lines"], 1);
    }

    #[tokio::test]
    async fn test_extract_docx_upload() {
        let docx = resume_docx();
        let req = multipart_request(
            "/api/v1/resumes/extract",
            &[Part::File {
                name: "resume",
                file_name: "cv.docx",
                content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                bytes: &docx,
            }],
        );
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["format"], "docx");
        assert!(json["text"].as_str().unwrap().starts_with("Jane Roe\nSummary"));
        assert_eq!(json["sections"]["unknown"], json!(["Jane Roe"]));
        assert_eq!(json["sections"]["skills"], json!(["Rust, Go"]));
    }

    #[tokio::test]
    async fn test_extract_rejects_unsupported_type() {
        let req = multipart_request(
            "/api/v1/resumes/extract",
            &[Part::File {
                name: "resume",
                file_name: "cv.txt",
                content_type: "text/plain",
                bytes: b"Jane Roe",
            }],
        );
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let json = json_body(resp).await;
        assert_eq!(json["error"]["code"], "UNSUPPORTED_FORMAT");
    }

    #[tokio::test]
    async fn test_extract_requires_file() {
        let req = multipart_request("/api/v1/resumes/extract", &[Part::Text("jd_text", "x")]);
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_corrupt_docx_is_unprocessable() {
        let req = multipart_request(
            "/api/v1/resumes/extract",
            &[Part::File {
                name: "resume",
                file_name: "cv.docx",
                content_type: "application/octet-stream",
                bytes: b"not a zip archive",
            }],
        );
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = json_body(resp).await;
        assert_eq!(json["error"]["code"], "EXTRACTION_FAILED");
    }

    #[tokio::test]
    async fn test_rewrite_returns_record() {
        let docx = resume_docx();
        let req = multipart_request(
            "/api/v1/resumes/rewrite",
            &[
                Part::Text("jd_text", "Senior Rust Engineer"),
                Part::File {
                    name: "resume",
                    file_name: "cv.docx",
                    content_type: "application/octet-stream",
                    bytes: &docx,
                },
            ],
        );
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = json_body(resp).await;
        assert_eq!(json["name"], "Jane Roe");
        assert_eq!(json["summary"], "Jane Roe");
    }

    #[tokio::test]
    async fn test_tailor_returns_pdf_attachment() {
        let docx = resume_docx();
        let req = multipart_request(
            "/api/v1/resumes/tailor",
            &[
                Part::File {
                    name: "resume",
                    file_name: "cv.docx",
                    content_type: "application/msword",
                    bytes: &docx,
                },
                Part::Text("jd_text", "Senior Rust Engineer"),
                Part::Text("template", "compact"),
            ],
        );
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            resp.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"optimized_resume.pdf\""
        );
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], FAKE_PDF);
    }

    #[tokio::test]
    async fn test_tailor_requires_job_description() {
        let docx = resume_docx();
        let req = multipart_request(
            "/api/v1/resumes/tailor",
            &[Part::File {
                name: "resume",
                file_name: "cv.docx",
                content_type: "application/octet-stream",
                bytes: &docx,
            }],
        );
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = json_body(resp).await;
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_over_limit() {
        let docx = resume_docx();
        let req = multipart_request(
            "/api/v1/resumes/extract",
            &[Part::File {
                name: "resume",
                file_name: "cv.docx",
                content_type: "application/octet-stream",
                bytes: &docx,
            }],
        );
        let resp = app_with_limit(64).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_render_endpoint() {
        let resume = serde_json::to_value(sample_resume()).unwrap();
        let req = json_request("/api/v1/render", json!({ "resume": resume }));
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/pdf");

        let req = json_request(
            "/api/v1/render",
            json!({ "resume": resume, "template": "glossy" }),
        );
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
