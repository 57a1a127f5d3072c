//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::pipeline::run_analysis;
use crate::analysis::report::{AnalysisReport, ScoreView};
use crate::errors::AppError;
use crate::extraction::{extract_resume_text_blocking, is_pdf};
use crate::scoring::{score, ScoreResult};
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUME_FIELD: &str = "resume";
const MISSING_INPUT_MESSAGE: &str = "Both job description and resume are required.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job_description: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub result: ScoreResult,
    pub display: ScoreView,
}

/// An uploaded résumé file as read from the multipart body.
struct ResumeUpload {
    content_type: Option<String>,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart form: `job_description` (text) and `resume` (PDF file).
/// Runs the full pipeline and returns the report, including the recruiter
/// commentary or the diagnostic that replaced it.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut job_description: Option<String> = None;
    let mut resume: Option<ResumeUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(JOB_DESCRIPTION_FIELD) => job_description = Some(field.text().await?),
            Some(RESUME_FIELD) => {
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                resume = Some(ResumeUpload {
                    content_type,
                    bytes,
                });
            }
            // Unknown fields are skipped.
            _ => {}
        }
    }

    // Only an absent or zero-length field is missing; whitespace scores 0.
    let job_description = job_description
        .filter(|jd| !jd.is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_INPUT_MESSAGE.to_string()))?;
    let resume = resume
        .filter(|upload| !upload.bytes.is_empty())
        .ok_or_else(|| AppError::Validation(MISSING_INPUT_MESSAGE.to_string()))?;

    if !is_pdf(resume.content_type.as_deref(), &resume.bytes) {
        return Err(AppError::UnsupportedMediaType(format!(
            "Resume must be a PDF (got {})",
            resume.content_type.as_deref().unwrap_or("unknown content type")
        )));
    }

    info!(
        "Analyzing {} byte resume against {} byte job description",
        resume.bytes.len(),
        job_description.len()
    );

    let document = extract_resume_text_blocking(resume.bytes).await?;
    let report = run_analysis(&job_description, &document, state.insight.as_ref()).await;

    Ok(Json(report))
}

/// POST /api/v1/score
///
/// Keyword score only, from plain text. No PDF and no LLM call.
/// A blank job description scores 0 rather than being rejected.
pub async fn handle_score(Json(request): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let result = score(&request.job_description, &request.resume_text);
    let display = ScoreView::of(&result);

    Json(ScoreResponse { result, display })
}
