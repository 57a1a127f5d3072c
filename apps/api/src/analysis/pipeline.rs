//! Analysis pipeline — one request, run sequentially to completion.
//!
//! Flow: score → build recruiter prompt → insight call → report.
//!
//! Résumé extraction happens before this (see `extraction`); the pipeline
//! takes the extracted document so it can be driven without a PDF.

use chrono::Utc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::prompts::build_recruiter_prompt;
use crate::analysis::report::{AnalysisReport, ResumeSummary, ScoreView};
use crate::extraction::{ExtractionStatus, ResumeDocument};
use crate::llm_client::InsightGenerator;
use crate::scoring::{score_keywords, KeywordSet};

/// Runs one analysis. Never fails: insight failures are carried in the report.
pub async fn run_analysis(
    job_description: &str,
    resume: &ResumeDocument,
    generator: &dyn InsightGenerator,
) -> AnalysisReport {
    let analysis_id = Uuid::new_v4();
    let span = info_span!("analysis", %analysis_id);

    async move {
        if resume.status != ExtractionStatus::Ok {
            info!(
                "Scoring with no resume text (extraction: {:?})",
                resume.status
            );
        }

        let resume_keywords = KeywordSet::from_text(&resume.text);
        let result = score_keywords(&KeywordSet::from_text(job_description), &resume_keywords);
        info!(
            "ATS score {:.2} ({} matched, {} missing)",
            result.score,
            result.matched_keywords.len(),
            result.missing_keywords.len()
        );

        let prompt = build_recruiter_prompt(job_description, &resume.text);
        let insight = generator.get_insight(&prompt).await;
        info!(
            "Recruiter insight generated={} ({} chars)",
            insight.is_generated(),
            insight.display_text().len()
        );

        AnalysisReport {
            analysis_id,
            ats: ScoreView::of(&result),
            resume: ResumeSummary::of(resume, resume_keywords.len()),
            insight,
            completed_at: Utc::now(),
        }
    }
    .instrument(span)
    .await
}
